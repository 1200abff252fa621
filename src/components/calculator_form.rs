use crate::model::{parse_field, parse_time};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CalculatorFormProps {
    pub time_text: String,
    pub temperature_text: String,
    pub can_calculate: bool,
    pub on_time_input: Callback<String>,
    pub on_temperature_input: Callback<String>,
    pub on_calculate: Callback<()>,
    pub on_clear: Callback<()>,
}

/// Short explanation for a non-empty field that blocks calculation.
/// Empty fields get no hint; the disabled button is enough there.
fn input_hint(props: &CalculatorFormProps) -> Option<&'static str> {
    if !props.time_text.trim().is_empty() && parse_time(&props.time_text).is_none() {
        return Some("Heating time must be a non-negative number of seconds.");
    }
    if !props.temperature_text.trim().is_empty() && parse_field(&props.temperature_text).is_none() {
        return Some("Heating temperature must be a number (°C).");
    }
    None
}

#[function_component]
pub fn CalculatorForm(props: &CalculatorFormProps) -> Html {
    let time_cb = {
        let cb = props.on_time_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let temperature_cb = {
        let cb = props.on_temperature_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit(input.value());
        })
    };
    let calculate_cb = {
        let cb = props.on_calculate.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let field_style = "display:flex; flex-direction:column; gap:4px;";
    let label_style = "font-size:13px; font-weight:500;";
    let input_style = "background:#0d1117; border:1px solid #30363d; border-radius:6px; color:#c9d1d9; padding:6px 10px; font-size:14px;";

    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:16px 20px; min-width:300px; max-width:380px; display:flex; flex-direction:column; gap:12px;">
        <div style={field_style}>
            <label for="heating-time" style={label_style}>{"Heating time (seconds)"}</label>
            <input
                id="heating-time"
                type="text"
                inputmode="decimal"
                style={input_style}
                value={props.time_text.clone()}
                oninput={time_cb}
            />
        </div>
        <div style={field_style}>
            <label for="heating-temperature" style={label_style}>{"Heating temperature (°C)"}</label>
            <input
                id="heating-temperature"
                type="text"
                inputmode="decimal"
                style={input_style}
                value={props.temperature_text.clone()}
                oninput={temperature_cb}
            />
        </div>
        {
            if let Some(hint) = input_hint(props) {
                html! { <div style="font-size:11px; line-height:1.3; color:#f85149;">{ hint }</div> }
            } else {
                html! {}
            }
        }
        <div style="display:flex; gap:8px;">
            <button onclick={calculate_cb} disabled={!props.can_calculate} style="flex:1;">{"Calculate"}</button>
            <button onclick={clear_cb} style="flex:0 0 auto;">{"Clear"}</button>
        </div>
    </div>}
}
