use common::WeatherReport;
use plotly::common::{Line, Mode};
use plotly::Scatter;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

pub const CHART_TITLE: &str = "5-Day Temperature Forecast";
const CHART_DIV_ID: &str = "weather-forecast-chart";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub report: WeatherReport,
}

/// Plain JS objects; the default serializer would produce `Map`s.
fn to_js(value: &serde_json::Value) -> Result<JsValue, String> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| e.to_string())
}

fn draw(report: &WeatherReport) -> Result<(), String> {
    let trace = Scatter::new(report.forecast_dates(), report.forecast_temperatures())
        .mode(Mode::LinesMarkers)
        .name(CHART_TITLE)
        .line(Line::new().color("rgba(75, 192, 192, 1)").width(2.0));

    // Serialize trace to JSON and parse as JS object
    let trace_json = serde_json::to_string(&trace).map_err(|e| e.to_string())?;
    let trace_js = js_sys::JSON::parse(&trace_json).map_err(|e| format!("{:?}", e))?;
    let data_js = js_sys::Array::new();
    data_js.push(&trace_js);

    let layout = serde_json::json!({
        "margin": {"t": 10, "r": 10, "l": 40, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(255,255,255,0.4)",
        "xaxis": {"showgrid": false, "type": "category"},
        "yaxis": {"showgrid": true, "gridcolor": "#eee", "ticksuffix": "°C"},
        "showlegend": false
    });
    let config = serde_json::json!({"responsive": true, "displayModeBar": false});

    newPlot(CHART_DIV_ID, data_js.into(), to_js(&layout)?, to_js(&config)?);
    Ok(())
}

/// Line chart of the daily average temperatures.
#[function_component(ForecastChart)]
pub fn forecast_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();

    use_effect_with((container_ref.clone(), props.report.clone()), |(container_ref, report)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(CHART_DIV_ID);
            match draw(report) {
                Ok(()) => log::debug!("Forecast chart drawn with {} points", report.forecast.len()),
                Err(e) => log::error!("Failed to draw forecast chart: {}", e),
            }
        }
        || ()
    });

    html! {
        <div class="weather-chart mt-4">
            <h3 class="text-lg font-semibold mb-2">{CHART_TITLE}</h3>
            <div ref={container_ref} style="width:100%; height:320px;"></div>
        </div>
    }
}
