// Utility helpers shared by the components.

use wasm_bindgen::JsValue;

/// Display formatting for F-values: exactly 3 decimal places.
pub fn format_f_value(value: f64) -> String {
    format!("{:.3}", value)
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_to_three_decimal_places() {
        assert_eq!(format_f_value(0.0), "0.000");
        assert_eq!(format_f_value(2.45471), "2.455");
        assert_eq!(format_f_value(2.4544), "2.454");
        assert_eq!(format_f_value(70196.5), "70196.500");
    }
}
