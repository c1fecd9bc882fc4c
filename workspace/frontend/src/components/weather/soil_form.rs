use common::{SoilField, SoilReportForm, SoilType};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub form: SoilReportForm,
    pub on_change: Callback<(SoilField, String)>,
    pub on_submit: Callback<()>,
}

/// Daily soil report. Purely presentational; state lives with the caller.
#[function_component(SoilReportFormView)]
pub fn soil_report_form(props: &Props) -> Html {
    let on_soil_type = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit((SoilField::SoilType, select.value()));
        })
    };

    let on_soil_health = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((SoilField::SoilHealth, input.value()));
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let selected = props.form.selected_soil_type();

    html! {
        <form onsubmit={on_submit} class="weather-form card bg-base-100 shadow mt-6" novalidate="novalidate">
            <div class="card-body gap-3">
                <h3 class="card-title text-lg">{"Daily Soil Report"}</h3>

                <label class="form-control w-full">
                    <span class="label-text">{"Weather"}</span>
                    <input type="text" name="weather" class="input input-bordered w-full"
                        value={props.form.weather.clone()} readonly="readonly" />
                </label>

                <label class="form-control w-full" for="soilType">
                    <span class="label-text">{"Soil Type"}</span>
                    <select id="soilType" name="soilType" class="select select-bordered w-full" onchange={on_soil_type}>
                        <option value="" selected={selected.is_none()}>{"Select Soil Type"}</option>
                        {for SoilType::ALL.iter().map(|soil| html! {
                            <option value={soil.as_str()} selected={selected == Some(*soil)}>{soil.as_str()}</option>
                        })}
                    </select>
                </label>

                <input
                    type="text"
                    name="soilHealth"
                    class="input input-bordered w-full"
                    placeholder="Soil Health"
                    value={props.form.soil_health.clone()}
                    oninput={on_soil_health}
                />

                <div class="card-actions justify-end">
                    <button type="submit" class="btn btn-primary">{"Submit Report"}</button>
                </div>
            </div>
        </form>
    }
}
