mod chart;
mod details;
mod soil_form;
mod view;

pub use view::WeatherReport;
