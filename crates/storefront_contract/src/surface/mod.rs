//! Page-surface traits implemented by browser adapters and in-memory test doubles.
//!
//! Each trait covers the narrow slice of the DOM one behavior touches. Methods take `&self`;
//! adapters hold handles to page nodes, so mutation happens on the page rather than in Rust state.

pub mod memory;

/// A form whose field values can be read at submission time.
pub trait SubmitForm {
    /// Returns the current value of the input named `name`, or `None` when no such input exists.
    fn field_value(&self, name: &str) -> Option<String>;

    /// Returns the current values of every field marked as required, in document order.
    fn required_values(&self) -> Vec<String>;
}

/// The submit event being handled.
pub trait SubmitEvent {
    /// Cancels the native form submission.
    fn cancel_submission(&self);
}

/// Blocking user-visible messages.
pub trait AlertService {
    /// Shows `message` and returns once the user dismissed it.
    fn alert(&self, message: &str) -> Result<(), String>;
}

/// An ordered sequence of slide elements.
pub trait SlideDeck {
    /// Number of slides in the deck.
    fn slide_count(&self) -> usize;

    /// Adds or removes the active marker on the slide at `index`.
    fn set_slide_active(&self, index: usize, active: bool) -> Result<(), String>;
}

/// The navigation bar that hosts the menu toggle control.
pub trait NavBar {
    /// Handle to an inserted control.
    type Control;

    /// Creates a control with `class_name` and text `label` and inserts it as the first child.
    fn prepend_control(&self, class_name: &str, label: &str) -> Result<Self::Control, String>;
}

/// The collapsible navigation menu.
pub trait NavMenu {
    /// Flips `class_name` on the menu and returns whether it is present afterwards.
    fn toggle_class(&self, class_name: &str) -> Result<bool, String>;

    /// Reports whether `class_name` is currently present on the menu.
    fn has_class(&self, class_name: &str) -> bool;
}
