//! WASM entry points.
//!
//! Only compiled for the `wasm32` target. JavaScript calls `init()` once and
//! then `process_message()` per request.

use wasm_bindgen::prelude::*;

use crate::dispatch;

/// Install the panic hook so Rust panics surface in the browser console.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Process a JSON-serialized `UiToEngine` message and return a
/// JSON-serialized `EngineToUi` response.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    dispatch::process_json(json_input)
}

/// Incidence angle in degrees; NaN when the inputs are rejected.
///
/// Shortcut for slider callbacks that only need one number.
#[wasm_bindgen]
pub fn incidence_angle(strike: f64, dip: f64, azimuth: f64, plunge: f64) -> f64 {
    incidence_kernel::angle_of_incidence(strike, dip, azimuth, plunge).unwrap_or(f64::NAN)
}

/// True thickness ratio for an incidence angle in degrees.
#[wasm_bindgen]
pub fn thickness_ratio(incidence_angle: f64) -> f64 {
    incidence_kernel::true_thickness_ratio(incidence_angle)
}

/// Incidence angle in degrees for a true thickness ratio.
#[wasm_bindgen]
pub fn ratio_angle(ratio: f64) -> f64 {
    incidence_kernel::ratio_to_angle(ratio)
}
