use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
pub mod api_client;
pub mod context;
pub mod hooks;
pub mod router;
pub mod settings;
pub mod widgets;

use context::{NicProvider, SidebarProvider, ThemeProvider};
use router::{switch, Route};
use widgets::toast::ToastProvider;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ThemeProvider>
            <SidebarProvider>
                <BrowserRouter>
                    <NicProvider>
                        <ToastProvider>
                            <Switch<Route> render={switch} />
                        </ToastProvider>
                    </NicProvider>
                </BrowserRouter>
            </SidebarProvider>
        </ThemeProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== CropMaster Portal Starting ===");
    log::debug!("Debug mode: {}", settings.debug_mode);
    log::debug!("Farmer service URL: {}", settings.service_base_url());
    log::debug!("Weather location: {} ({} days)", settings.weather_location, settings.forecast_days);

    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
