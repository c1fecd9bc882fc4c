use common::NAV_ITEMS;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::api_client::farmer::lookup_farmer;
use crate::context::{NicContext, SidebarContext};
use crate::router::Route;

/// Resolve the display name for `nic`.
///
/// One request per NIC change, no retry. The name is cleared first, so a
/// failed lookup leaves it empty; the error is only logged.
#[hook]
fn use_farmer_name(nic: AttrValue) -> UseStateHandle<String> {
    let name = use_state(String::new);

    {
        let name = name.clone();
        use_effect_with(nic, move |nic| {
            name.set(String::new());
            if nic.is_empty() {
                log::debug!("No NIC set, skipping farmer name lookup");
            } else {
                let nic = nic.to_string();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Ok(farmer) = lookup_farmer(&nic).await {
                        name.set(farmer.name);
                    }
                });
            }
            || ()
        });
    }

    name
}

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let location = use_location();
    let current_path = location
        .as_ref()
        .map(|loc| loc.path().to_string())
        .unwrap_or_default();
    let collapsed = use_context::<SidebarContext>()
        .map(|ctx| ctx.collapsed)
        .unwrap_or(false);
    let nic = use_context::<NicContext>()
        .map(|ctx| ctx.nic)
        .unwrap_or_default();
    let farmer_name = use_farmer_name(nic);

    let width = if collapsed { "w-20" } else { "w-72" };

    html! {
        <div class="drawer-side z-50">
            <label aria-label="close sidebar" class="drawer-overlay" for="farmer-drawer"></label>
            <div class={classes!("farmer-sidebar", "min-h-full", "border-r", "border-base-300", width)}>
                <div class="flex flex-col items-center my-10 gap-1">
                    <div class="avatar">
                        <div class={if collapsed { "w-10 rounded-full" } else { "w-24 rounded-full" }}>
                            <img src="assets/avatars/login.jpg" alt="Farmer" />
                        </div>
                    </div>
                    if !collapsed {
                        <span class="text-sm mt-1">{"Welcome Farmer"}</span>
                        <span class="text-xs uppercase tracking-widest">{ (*farmer_name).clone() }</span>
                    }
                </div>

                <ul class="menu p-2 w-full text-base-content">
                    {for NAV_ITEMS.iter().map(|item| {
                        let active = item.is_active(&current_path);
                        let route = Route::recognize(item.path).unwrap_or(Route::NotFound);
                        html! {
                            <li key={item.path}>
                                <Link<Route> to={route} classes={classes!("nav-link", active.then_some("active"))}>
                                    <i class={classes!(item.icon, "w-5")}></i>
                                    if !collapsed {
                                        <span class="text-sm">{item.label}</span>
                                    }
                                </Link<Route>>
                            </li>
                        }
                    })}
                </ul>
            </div>
        </div>
    }
}
