use yew::prelude::*;
use yew_router::prelude::*;
use crate::router::Route;

#[derive(Properties, PartialEq)]
pub struct PlaceholderProps {
    pub title: AttrValue,
    pub icon: AttrValue,
}

/// Menu destinations that have no workflow yet.
#[function_component(PlaceholderPage)]
pub fn placeholder_page(props: &PlaceholderProps) -> Html {
    html! {
        <div class="hero min-h-[50vh] bg-base-100 rounded-box shadow">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <i class={classes!(props.icon.to_string(), "text-6xl", "text-primary", "mb-4")}></i>
                    <h1 class="text-4xl font-bold">{&props.title}</h1>
                    <p class="py-6">{"This section is not available yet."}</p>
                    <Link<Route> to={Route::FarmerHome} classes="btn btn-primary">{"Back to Home"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="text-center py-12">
            <h1 class="text-5xl font-bold mb-4">{"404 Not Found"}</h1>
            <Link<Route> to={Route::FarmerHome} classes="link link-primary">{"Go to the farmer home"}</Link<Route>>
        </div>
    }
}
