use common::FarmlandDto;
use rust_decimal::Decimal;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api_client::farmer::{load_farmer_overview, FarmerOverview};
use crate::context::NicContext;
use crate::hooks::FetchState;
use crate::router::Route;
use crate::widgets::error::ErrorDisplay;
use crate::widgets::fetch_hook::use_fetch_with_refetch;
use crate::widgets::loading::Loading;
use crate::widgets::toast::ToastContext;

fn total_acres(lands: &[FarmlandDto]) -> Decimal {
    lands.iter().map(|land| land.size_acres).sum()
}

#[derive(Properties, PartialEq)]
struct LandListProps {
    title: AttrValue,
    icon: AttrValue,
    lands: Vec<FarmlandDto>,
    empty_message: AttrValue,
}

#[function_component(LandList)]
fn land_list(props: &LandListProps) -> Html {
    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-center">
                    <h3 class="card-title text-lg">
                        <i class={props.icon.to_string()}></i>
                        {&props.title}
                    </h3>
                    <span class="badge badge-outline">
                        {format!("{} acres", total_acres(&props.lands).round_dp(2))}
                    </span>
                </div>
                if props.lands.is_empty() {
                    <p class="text-sm opacity-70">{&props.empty_message}</p>
                } else {
                    <ul class="divide-y divide-base-200">
                        {for props.lands.iter().map(|land| html! {
                            <li key={land.id} class="py-2 flex justify-between">
                                <span>{&land.location}</span>
                                <span class="text-sm opacity-70">
                                    {format!("{} acres", land.size_acres.round_dp(2))}
                                    if land.cropped {
                                        {format!(" · crop #{}", land.crop_id)}
                                    }
                                </span>
                            </li>
                        })}
                    </ul>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NicFormProps {
    nic: AttrValue,
    on_save: Callback<String>,
}

#[function_component(NicForm)]
fn nic_form(props: &NicFormProps) -> Html {
    let form_ref = use_node_ref();

    let on_submit = {
        let on_save = props.on_save.clone();
        let form_ref = form_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(form) = form_ref.cast::<web_sys::HtmlFormElement>() else {
                return;
            };
            match web_sys::FormData::new_with_form(&form) {
                Ok(form_data) => {
                    let nic = form_data.get("nic").as_string().unwrap_or_default();
                    on_save.emit(nic);
                }
                Err(e) => log::error!("Failed to read NIC form: {:?}", e),
            }
        })
    };

    html! {
        <form ref={form_ref} onsubmit={on_submit} class="flex flex-col sm:flex-row gap-2 items-end">
            <label class="form-control w-full max-w-xs">
                <span class="label-text">{"NIC"}</span>
                <input type="text" name="nic" class="input input-bordered w-full"
                    placeholder="e.g. 199012345678" value={props.nic.clone()} />
            </label>
            <button type="submit" class="btn btn-primary">{"Save"}</button>
        </form>
    }
}

/// Landing page: who is signed in and which of their plots are planted.
#[function_component(FarmerHomePage)]
pub fn farmer_home_page() -> Html {
    let nic_ctx = use_context::<NicContext>();
    let toast_ctx = use_context::<ToastContext>();
    let nic = nic_ctx.as_ref().map(|ctx| ctx.nic.clone()).unwrap_or_default();

    let (overview, refetch) =
        use_fetch_with_refetch(nic.to_string(), load_farmer_overview);

    let on_save = {
        let set_nic = nic_ctx.map(|ctx| ctx.set_nic);
        Callback::from(move |value: String| {
            if let Some(set_nic) = &set_nic {
                set_nic.emit(value.clone());
            }
            if let Some(toast_ctx) = &toast_ctx {
                if value.trim().is_empty() {
                    toast_ctx.show_info("NIC cleared".to_string());
                } else {
                    toast_ctx.show_success(format!("NIC set to {}", value.trim()));
                }
            }
        })
    };

    let body = match &*overview {
        FetchState::NotStarted | FetchState::Loading => html! { <Loading text="Loading farmer details..." /> },
        FetchState::Error(err) => html! {
            <ErrorDisplay message={err.clone()} on_retry={Some(refetch.clone())} />
        },
        FetchState::Success(None) => html! {
            <div class="alert alert-info">
                <i class="fas fa-info-circle"></i>
                <span>{"Enter your NIC to see your farmland."}</span>
            </div>
        },
        FetchState::Success(Some(FarmerOverview { farmer, cropped, uncropped })) => html! {
            <>
                <div class="mb-6">
                    <h2 class="text-2xl font-bold">{format!("Hello, {}", farmer.name)}</h2>
                    if let Some(address) = &farmer.address {
                        <p class="opacity-70">{address}</p>
                    }
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <LandList
                        title="Cropped land"
                        icon="fas fa-seedling"
                        lands={cropped.clone()}
                        empty_message="Nothing planted yet."
                    />
                    <LandList
                        title="Uncropped land"
                        icon="fas fa-border-none"
                        lands={uncropped.clone()}
                        empty_message="All of your land is planted."
                    />
                </div>
            </>
        },
    };

    html! {
        <div class="flex flex-col gap-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <NicForm nic={nic} on_save={on_save} />
                </div>
            </div>
            {body}
            <div>
                <Link<Route> to={Route::WeatherReport} classes="btn btn-outline">
                    <i class="fas fa-cloud"></i>
                    {" Today's weather"}
                </Link<Route>>
            </div>
        </div>
    }
}
