//! Conversions at the JavaScript boundary.

use serde::de::DeserializeOwned;
use storefront_contract::WidgetSetupError;
use wasm_bindgen::JsValue;

/// Decodes an optional page options object; `undefined` and `null` select the defaults.
///
/// # Errors
///
/// Returns [`WidgetSetupError::InvalidConfig`] when the object does not match `T`.
pub fn parse_options<T: DeserializeOwned + Default>(
    options: JsValue,
) -> Result<T, WidgetSetupError> {
    if options.is_undefined() || options.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|err| WidgetSetupError::InvalidConfig(err.to_string()))
}

/// Converts a setup failure into a thrown JavaScript `Error`.
pub fn setup_error_to_js(err: WidgetSetupError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
