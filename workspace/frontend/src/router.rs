use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::layout::Layout;
use crate::components::weather::WeatherReport;
use crate::pages::farmer_home::FarmerHomePage;
use crate::pages::placeholder::{NotFoundPage, PlaceholderPage};

/// Paths match `common::navigation`.
#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/farmerhome")]
    FarmerHome,
    #[at("/weatherreport")]
    WeatherReport,
    #[at("/reportdisease")]
    ReportDisease,
    #[at("/usechemical")]
    UseChemical,
    #[at("/usemachine")]
    UseMachine,
    #[at("/irrigation")]
    Irrigation,
    #[at("/harvest")]
    Harvest,
    #[at("/storage")]
    Storage,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn placeholder(title: &'static str, icon: &'static str) -> Html {
    html! {
        <Layout title={title}>
            <PlaceholderPage title={title} icon={icon} />
        </Layout>
    }
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Root => html! { <Redirect<Route> to={Route::FarmerHome} /> },
        Route::FarmerHome => {
            log::trace!("Rendering Farmer Home page");
            html! { <Layout title="Home"><FarmerHomePage /></Layout> }
        }
        Route::WeatherReport => {
            log::trace!("Rendering Weather Report page");
            html! { <Layout title="Weather Report"><WeatherReport /></Layout> }
        }
        Route::ReportDisease => placeholder("Report Diseases", "fas fa-virus"),
        Route::UseChemical => placeholder("Use Chemicals", "fas fa-flask"),
        Route::UseMachine => placeholder("Use Machines", "fas fa-cogs"),
        Route::Irrigation => placeholder("Irrigation", "fas fa-tint"),
        Route::Harvest => placeholder("Harvest", "fas fa-tractor"),
        Route::Storage => placeholder("Storage", "fas fa-warehouse"),
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><NotFoundPage /></Layout> }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::navigation;

    #[test]
    fn menu_paths_have_routes() {
        let routed = [
            Route::FarmerHome,
            Route::WeatherReport,
            Route::ReportDisease,
            Route::UseChemical,
            Route::UseMachine,
            Route::Irrigation,
            Route::Harvest,
            Route::Storage,
        ];
        let paths: Vec<String> = routed.iter().map(Routable::to_path).collect();
        let menu: Vec<String> = navigation::NAV_ITEMS.iter().map(|i| i.path.to_string()).collect();
        assert_eq!(paths, menu);
        assert_eq!(Route::FarmerHome.to_path(), navigation::FARMER_HOME);
    }
}
