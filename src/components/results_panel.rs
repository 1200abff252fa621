use crate::util::format_f_value;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ResultsPanelProps {
    pub f85: f64,
    pub f0: f64,
}

#[function_component]
pub fn ResultsPanel(props: &ResultsPanelProps) -> Html {
    let row_style = "display:flex; align-items:baseline; gap:8px;"; // label | ref | value
    let label_style = "font-weight:600; width:36px;";
    let ref_style = "flex:1; font-size:11px; opacity:0.7;";
    let value_style =
        "min-width:90px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div role="status" aria-live="polite" style="margin-top:16px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:12px 20px; min-width:300px; max-width:380px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"F85"}</span>
                <span style={ref_style}>{"85 °C / z = 7.8"}</span>
                <span style={value_style}>{ format_f_value(props.f85) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", label_style)}>{"F0"}</span>
                <span style={ref_style}>{"121.1 °C / z = 10"}</span>
                <span style={value_style}>{ format_f_value(props.f0) }</span>
            </div>
        </div>
    }
}
