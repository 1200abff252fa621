use super::{calculator_form::CalculatorForm, results_panel::ResultsPanel};
use crate::model::{CalcAction, CalcState};
use crate::util::clog;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(CalcState::default);

    let on_time_input = {
        let state = state.clone();
        Callback::from(move |text: String| state.dispatch(CalcAction::SetTimeText(text)))
    };
    let on_temperature_input = {
        let state = state.clone();
        Callback::from(move |text: String| state.dispatch(CalcAction::SetTemperatureText(text)))
    };
    let on_calculate = {
        let state = state.clone();
        Callback::from(move |_| {
            clog(&format!(
                "calculate: time='{}' temperature='{}'",
                state.time_text, state.temperature_text
            ));
            state.dispatch(CalcAction::Calculate);
        })
    };
    let on_clear = {
        let state = state.clone();
        Callback::from(move |_| {
            clog("clear");
            state.dispatch(CalcAction::Clear);
        })
    };

    html! {
        <div id="root" style="min-height:100vh; background:#0d1117; color:#c9d1d9; display:flex; flex-direction:column; align-items:center; padding:32px 16px; font-family:sans-serif;">
            <h1 style="margin:0 0 4px 0; font-size:22px;">{"F-Value Calculator"}</h1>
            <p style="margin:0 0 20px 0; font-size:13px; opacity:0.7;">{"Lethality of a heating process at two reference temperatures"}</p>
            <CalculatorForm
                time_text={state.time_text.clone()}
                temperature_text={state.temperature_text.clone()}
                can_calculate={state.can_calculate()}
                on_time_input={on_time_input}
                on_temperature_input={on_temperature_input}
                on_calculate={on_calculate}
                on_clear={on_clear}
            />
            {
                if let Some(result) = state.result {
                    html! { <ResultsPanel f85={result.f85} f0={result.f0} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
