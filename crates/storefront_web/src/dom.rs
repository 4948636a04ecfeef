use storefront_contract::WidgetSetupError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

pub(crate) fn window() -> Result<Window, WidgetSetupError> {
    web_sys::window().ok_or_else(|| WidgetSetupError::Dom("window unavailable".to_string()))
}

pub(crate) fn document(window: &Window) -> Result<Document, WidgetSetupError> {
    window
        .document()
        .ok_or_else(|| WidgetSetupError::Dom("document unavailable".to_string()))
}

pub(crate) fn query(document: &Document, selector: &str) -> Result<Element, WidgetSetupError> {
    document
        .query_selector(selector)
        .map_err(|err| WidgetSetupError::Dom(format!("invalid selector `{selector}`: {err:?}")))?
        .ok_or_else(|| WidgetSetupError::ElementNotFound {
            selector: selector.to_string(),
        })
}

pub(crate) fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, String> {
    let nodes = root
        .query_selector_all(selector)
        .map_err(|err| format!("invalid selector `{selector}`: {err:?}"))?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
