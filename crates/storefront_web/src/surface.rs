//! `web-sys` implementations of the [`storefront_contract::surface`] traits.

use leptos::logging;
use storefront_contract::{
    AlertService, NavBar, NavMenu, SlideDeck, SubmitEvent, SubmitForm, WidgetSetupError,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom;

#[derive(Debug, Clone)]
/// A page form read at submission time.
pub struct WebForm {
    element: Element,
    required_selector: Option<String>,
}

impl WebForm {
    /// Wraps a form that only exposes named fields; it reports no required fields.
    pub fn named_fields(element: Element) -> Self {
        Self {
            element,
            required_selector: None,
        }
    }

    /// Wraps a form whose required fields match `required_selector`, evaluated relative to the
    /// form on each submission.
    pub fn with_required(element: Element, required_selector: impl Into<String>) -> Self {
        Self {
            element,
            required_selector: Some(required_selector.into()),
        }
    }

    /// The wrapped form element, which receives the `submit` listener.
    pub fn element(&self) -> &Element {
        &self.element
    }
}

fn control_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    element.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value)
}

impl SubmitForm for WebForm {
    fn field_value(&self, name: &str) -> Option<String> {
        let selector = format!("input[name=\"{name}\"]");
        let input = self.element.query_selector(&selector).ok().flatten()?;
        control_value(&input)
    }

    fn required_values(&self) -> Vec<String> {
        let Some(required_selector) = &self.required_selector else {
            return Vec::new();
        };
        match dom::query_all(&self.element, required_selector) {
            Ok(fields) => fields
                .iter()
                .map(|field| control_value(field).unwrap_or_default())
                .collect(),
            Err(err) => {
                logging::warn!("required field lookup failed: {err}");
                Vec::new()
            }
        }
    }
}

#[derive(Debug, Clone)]
/// The `submit` event currently being dispatched.
pub struct WebSubmitEvent(pub web_sys::Event);

impl SubmitEvent for WebSubmitEvent {
    fn cancel_submission(&self) {
        self.0.prevent_default();
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Blocking alerts through `window.alert`.
pub struct WebAlertService;

impl AlertService for WebAlertService {
    fn alert(&self, message: &str) -> Result<(), String> {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        window
            .alert_with_message(message)
            .map_err(|err: JsValue| format!("alert failed: {err:?}"))
    }
}

#[derive(Debug, Clone)]
/// Slides matched by a selector, in document order.
pub struct WebSlideDeck {
    slides: Vec<Element>,
    active_class: String,
}

impl WebSlideDeck {
    /// Collects every element matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetSetupError::Dom`] for a selector the browser rejects. An empty match is
    /// not an error here; [`storefront_contract::SliderController::start`] reports it.
    pub fn query(
        document: &Document,
        selector: &str,
        active_class: impl Into<String>,
    ) -> Result<Self, WidgetSetupError> {
        let root = document
            .document_element()
            .ok_or_else(|| WidgetSetupError::Dom("document has no root element".to_string()))?;
        Ok(Self {
            slides: dom::query_all(&root, selector).map_err(WidgetSetupError::Dom)?,
            active_class: active_class.into(),
        })
    }
}

impl SlideDeck for WebSlideDeck {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn set_slide_active(&self, index: usize, active: bool) -> Result<(), String> {
        let slide = self
            .slides
            .get(index)
            .ok_or_else(|| format!("slide {index} out of range"))?;
        let classes = slide.class_list();
        let result = if active {
            classes.add_1(&self.active_class)
        } else {
            classes.remove_1(&self.active_class)
        };
        result.map_err(|err| format!("slide class update failed: {err:?}"))
    }
}

#[derive(Debug, Clone)]
/// Navigation bar element.
pub struct WebNavBar(pub Element);

impl NavBar for WebNavBar {
    type Control = Element;

    fn prepend_control(&self, class_name: &str, label: &str) -> Result<Self::Control, String> {
        let document = self
            .0
            .owner_document()
            .ok_or_else(|| "navbar is detached from a document".to_string())?;
        let control = document
            .create_element("div")
            .map_err(|err| format!("failed to create menu toggle: {err:?}"))?;
        control.set_class_name(class_name);
        control.set_text_content(Some(label));
        self.0
            .prepend_with_node_1(&control)
            .map_err(|err| format!("failed to insert menu toggle: {err:?}"))?;
        Ok(control)
    }
}

#[derive(Debug, Clone)]
/// Collapsible navigation menu element.
pub struct WebNavMenu(pub Element);

impl NavMenu for WebNavMenu {
    fn toggle_class(&self, class_name: &str) -> Result<bool, String> {
        self.0
            .class_list()
            .toggle(class_name)
            .map_err(|err| format!("menu class toggle failed: {err:?}"))
    }

    fn has_class(&self, class_name: &str) -> bool {
        self.0.class_list().contains(class_name)
    }
}
