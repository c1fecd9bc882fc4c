use common::WeatherReport;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub report: WeatherReport,
}

fn info_box(label: &str, value: String) -> Html {
    html! {
        <div class="info-box">
            <p class="text-xs opacity-70">{label}</p>
            <p class="font-semibold">{value}</p>
        </div>
    }
}

/// Current conditions plus the one-line verdict for the location.
#[function_component(WeatherDetails)]
pub fn weather_details(props: &Props) -> Html {
    let snapshot = &props.report.snapshot;

    html! {
        <div class="weather-details">
            <div class="flex items-center gap-6 mb-6">
                <i class={classes!(snapshot.icon.css_class(), "fa-4x")}></i>
                <div>
                    <h1 class="text-5xl font-bold">{format!("{}°C", snapshot.temperature)}</h1>
                    <p>{format!("Feels Like: {}°C", snapshot.feels_like)}</p>
                    <p class="text-sm opacity-80">{&snapshot.condition}</p>
                </div>
            </div>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-3">
                {info_box("Humidity", format!("{}%", snapshot.humidity))}
                {info_box("Wind Speed", format!("{} kph", snapshot.wind_speed))}
                {info_box("Wind Direction", snapshot.wind_direction.clone())}
                {info_box("Gust Speed", format!("{} kph", snapshot.gust_speed))}
                {info_box("Pressure", format!("{} mb", snapshot.pressure))}
                {info_box("Precipitation", format!("{} mm", snapshot.precipitation))}
                {info_box("UV Index", snapshot.uv_index.to_string())}
                {info_box("Visibility", format!("{} km", snapshot.visibility))}
            </div>

            <div class="final-report text-center my-6">
                <h3 class="text-2xl font-bold">{snapshot.final_report().label()}</h3>
                <p>{props.report.location.to_string()}</p>
            </div>
        </div>
    }
}
