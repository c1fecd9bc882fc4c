use std::rc::Rc;

use common::{SoilField, SoilReportForm, WeatherPanel};
use yew::prelude::*;

use super::chart::ForecastChart;
use super::details::WeatherDetails;
use super::soil_form::SoilReportFormView;
use crate::api_client::weather::fetch_weather_report;

enum FormAction {
    Edit(SoilField, String),
    Replace(SoilReportForm),
}

/// Reducer wrapper so late fetch results never overwrite fresher edits.
#[derive(Default, PartialEq)]
struct FormState(SoilReportForm);

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FormAction::Edit(field, value) => FormState(self.0.clone().with(field, value)).into(),
            FormAction::Replace(form) => FormState(form).into(),
        }
    }
}

fn alert(message: &str) {
    log::info!("Alert: {}", message);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("Alert could not be shown: {:?}", e);
        }
    }
}

#[function_component(WeatherReport)]
pub fn weather_report() -> Html {
    let panel = use_state(WeatherPanel::default);
    let form = use_reducer(FormState::default);

    // One request on mount, no retry
    {
        let panel = panel.clone();
        let form = form.dispatcher();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_weather_report().await {
                    Ok(report) => {
                        form.dispatch(FormAction::Edit(
                            SoilField::Weather,
                            report.snapshot.condition.clone(),
                        ));
                        panel.set(WeatherPanel::loaded(report));
                    }
                    Err(e) => {
                        log::error!("Weather fetch failed: {}", e);
                        panel.set(WeatherPanel::failed());
                    }
                }
            });
            || ()
        });
    }

    let on_change = {
        let dispatcher = form.dispatcher();
        Callback::from(move |(field, value): (SoilField, String)| {
            dispatcher.dispatch(FormAction::Edit(field, value));
        })
    };

    let on_submit = {
        let form = form.clone();
        let current_condition = panel
            .report
            .as_ref()
            .map(|r| r.snapshot.condition.clone())
            .unwrap_or_default();

        Callback::from(move |_: ()| {
            let mut next = form.0.clone();
            match next.submit(&current_condition) {
                Ok(receipt) => {
                    alert(&receipt.message());
                    form.dispatch(FormAction::Replace(next));
                }
                Err(e) => alert(&e.to_string()),
            }
        })
    };

    html! {
        <div class={classes!("weather-container", panel.background_class())}>
            <h2 class="text-2xl font-bold mb-4">{"Weather Report"}</h2>
            {match (panel.status_message(), &panel.report) {
                (Some(message), _) => html! { <p>{message}</p> },
                (None, Some(report)) => html! {
                    <>
                        <WeatherDetails report={report.clone()} />
                        if let Some(charted) = panel.chart() {
                            <ForecastChart report={charted.clone()} />
                        }
                    </>
                },
                (None, None) => html! {},
            }}
            <SoilReportFormView form={form.0.clone()} {on_change} {on_submit} />
        </div>
    }
}
