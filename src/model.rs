//! Core data model for the F-value calculator.
//! Defines the lethality computation, raw-input parsing, and the reducer
//! that owns the form state for the lifetime of the session.

use std::rc::Rc;
use yew::Reducible;

/// Reference temperature (°C) for the F85 lethality value.
pub const F85_REF_TEMP_C: f64 = 85.0;
/// z-value (°C per decade) for the F85 lethality value.
pub const F85_Z_VALUE: f64 = 7.8;
/// Reference temperature (°C) for the F0 lethality value.
pub const F0_REF_TEMP_C: f64 = 121.1;
/// z-value (°C per decade) for the F0 lethality value.
pub const F0_Z_VALUE: f64 = 10.0;

/// The two lethality values derived from one time/temperature pair,
/// expressed in minutes at the respective reference temperature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FValues {
    pub f85: f64,
    pub f0: f64,
}

/// General thermal-death-time formula: F = t_min * 10^((T - T_ref) / z).
fn lethality(time_minutes: f64, temperature_c: f64, ref_temp_c: f64, z_value: f64) -> f64 {
    time_minutes * 10f64.powf((temperature_c - ref_temp_c) / z_value)
}

impl FValues {
    /// Compute both F-values for a heating time in seconds and a holding
    /// temperature in °C. Callers must pass `time_seconds >= 0`.
    pub fn compute(time_seconds: f64, temperature_c: f64) -> Self {
        // Zero heating time delivers zero lethality at any temperature.
        // Short-circuit so an extreme temperature cannot yield 0 * inf = NaN.
        if time_seconds == 0.0 {
            return Self { f85: 0.0, f0: 0.0 };
        }
        let time_minutes = time_seconds / 60.0;
        Self {
            f85: lethality(time_minutes, temperature_c, F85_REF_TEMP_C, F85_Z_VALUE),
            f0: lethality(time_minutes, temperature_c, F0_REF_TEMP_C, F0_Z_VALUE),
        }
    }
}

/// Parse one raw text field as a finite floating-point number.
/// Empty, non-numeric, and non-finite ("NaN", "inf") input is not a
/// calculator value and yields `None`.
pub fn parse_field(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse the heating-time field; a negative duration is invalid.
pub fn parse_time(text: &str) -> Option<f64> {
    parse_field(text).filter(|v| *v >= 0.0)
}

/// Form state: the two raw text fields plus the result of the last
/// explicit calculation. The result only survives while the inputs that
/// produced it are untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CalcState {
    pub time_text: String,
    pub temperature_text: String,
    pub result: Option<FValues>,
}

impl CalcState {
    pub fn time_seconds(&self) -> Option<f64> {
        parse_time(&self.time_text)
    }

    pub fn temperature_c(&self) -> Option<f64> {
        parse_field(&self.temperature_text)
    }

    /// Gate for the calculate action: both fields parse and time is >= 0.
    /// Derived from the raw text on demand, never cached.
    pub fn can_calculate(&self) -> bool {
        self.time_seconds().is_some() && self.temperature_c().is_some()
    }
}

#[derive(Clone, Debug)]
pub enum CalcAction {
    SetTimeText(String),
    SetTemperatureText(String),
    Calculate,
    Clear,
}

impl Reducible for CalcState {
    type Action = CalcAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use CalcAction::*;
        let mut new = (*self).clone();
        match action {
            // Any edit invalidates a displayed result.
            SetTimeText(text) => {
                new.time_text = text;
                new.result = None;
            }
            SetTemperatureText(text) => {
                new.temperature_text = text;
                new.result = None;
            }
            Calculate => {
                let (Some(t), Some(temp)) = (new.time_seconds(), new.temperature_c()) else {
                    return self;
                };
                new.result = Some(FValues::compute(t, temp));
            }
            Clear => {
                new.time_text.clear();
                new.temperature_text.clear();
                new.result = None;
            }
        }
        Rc::new(new)
    }
}
