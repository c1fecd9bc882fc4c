pub mod farmer_home;
pub mod placeholder;
