//! In-memory page-surface adapters for host-side tests and non-browser callers.

use std::{
    cell::{Cell, RefCell},
    collections::{BTreeSet, HashMap},
    rc::Rc,
};

use super::{AlertService, NavBar, NavMenu, SlideDeck, SubmitEvent, SubmitForm};

#[derive(Debug, Clone, Default)]
/// Form with named fields and an ordered list of required fields.
pub struct MemoryForm {
    named: HashMap<String, String>,
    required: Vec<String>,
}

impl MemoryForm {
    /// Builds a login-style form from `(name, value)` pairs.
    pub fn with_fields<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            named: fields
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            required: Vec::new(),
        }
    }

    /// Builds a registration-style form whose required fields hold `values`.
    pub fn with_required<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            named: HashMap::new(),
            required: values.into_iter().map(str::to_string).collect(),
        }
    }
}

impl SubmitForm for MemoryForm {
    fn field_value(&self, name: &str) -> Option<String> {
        self.named.get(name).cloned()
    }

    fn required_values(&self) -> Vec<String> {
        self.required.clone()
    }
}

#[derive(Debug, Clone, Default)]
/// Submit event that records whether it was cancelled.
pub struct MemorySubmitEvent {
    cancelled: Rc<Cell<bool>>,
}

impl MemorySubmitEvent {
    /// Whether [`SubmitEvent::cancel_submission`] was called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

impl SubmitEvent for MemorySubmitEvent {
    fn cancel_submission(&self) {
        self.cancelled.set(true);
    }
}

#[derive(Debug, Clone, Default)]
/// Alert service that records every message shown.
pub struct MemoryAlertService {
    shown: Rc<RefCell<Vec<String>>>,
}

impl MemoryAlertService {
    /// Messages shown so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.shown.borrow().clone()
    }
}

impl AlertService for MemoryAlertService {
    fn alert(&self, message: &str) -> Result<(), String> {
        self.shown.borrow_mut().push(message.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// Slide deck tracking the active marker per slide.
pub struct MemorySlideDeck {
    active: Rc<RefCell<Vec<bool>>>,
}

impl MemorySlideDeck {
    /// Creates a deck of `count` inactive slides.
    pub fn new(count: usize) -> Self {
        Self {
            active: Rc::new(RefCell::new(vec![false; count])),
        }
    }

    /// Indices of every slide currently carrying the active marker.
    pub fn active_slides(&self) -> Vec<usize> {
        self.active
            .borrow()
            .iter()
            .enumerate()
            .filter_map(|(index, active)| active.then_some(index))
            .collect()
    }
}

impl SlideDeck for MemorySlideDeck {
    fn slide_count(&self) -> usize {
        self.active.borrow().len()
    }

    fn set_slide_active(&self, index: usize, active: bool) -> Result<(), String> {
        let mut slides = self.active.borrow_mut();
        let slot = slides
            .get_mut(index)
            .ok_or_else(|| format!("slide {index} out of range"))?;
        *slot = active;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Child element recorded by [`MemoryNavBar`].
pub struct MemoryNode {
    /// Class attribute of the element.
    pub class_name: String,
    /// Text content of the element.
    pub text: String,
}

#[derive(Debug, Clone, Default)]
/// Navigation bar holding an ordered list of child elements.
pub struct MemoryNavBar {
    children: Rc<RefCell<Vec<MemoryNode>>>,
}

impl MemoryNavBar {
    /// Creates a bar whose existing children carry the given classes.
    pub fn with_children<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            children: Rc::new(RefCell::new(
                classes
                    .into_iter()
                    .map(|class_name| MemoryNode {
                        class_name: class_name.to_string(),
                        text: String::new(),
                    })
                    .collect(),
            )),
        }
    }

    /// Current children, first child first.
    pub fn children(&self) -> Vec<MemoryNode> {
        self.children.borrow().clone()
    }
}

impl NavBar for MemoryNavBar {
    type Control = MemoryNode;

    fn prepend_control(&self, class_name: &str, label: &str) -> Result<Self::Control, String> {
        let node = MemoryNode {
            class_name: class_name.to_string(),
            text: label.to_string(),
        };
        self.children.borrow_mut().insert(0, node.clone());
        Ok(node)
    }
}

#[derive(Debug, Clone, Default)]
/// Navigation menu tracking its class list.
pub struct MemoryNavMenu {
    classes: Rc<RefCell<BTreeSet<String>>>,
}

impl NavMenu for MemoryNavMenu {
    fn toggle_class(&self, class_name: &str) -> Result<bool, String> {
        let mut classes = self.classes.borrow_mut();
        if classes.remove(class_name) {
            Ok(false)
        } else {
            classes.insert(class_name.to_string());
            Ok(true)
        }
    }

    fn has_class(&self, class_name: &str) -> bool {
        self.classes.borrow().contains(class_name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn slide_deck_rejects_out_of_range_index() {
        let deck = MemorySlideDeck::new(2);
        assert!(deck.set_slide_active(2, true).is_err());
        assert_eq!(deck.active_slides(), Vec::<usize>::new());
    }

    #[test]
    fn nav_bar_prepends_before_existing_children() {
        let bar = MemoryNavBar::with_children(["logo", "nav-links"]);
        bar.prepend_control("menu-toggle", "x").expect("prepend");

        let classes: Vec<String> = bar.children().into_iter().map(|n| n.class_name).collect();
        assert_eq!(classes, vec!["menu-toggle", "logo", "nav-links"]);
    }

    #[test]
    fn cloned_adapters_share_state() {
        let alerts = MemoryAlertService::default();
        let handle = alerts.clone();
        alerts.alert("hello").expect("alert");
        assert_eq!(handle.messages(), vec!["hello".to_string()]);
    }
}
