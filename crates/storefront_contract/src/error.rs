//! Error types shared by the page behaviors.

use thiserror::Error;

use crate::forms::{login::LOGIN_ALERT_MESSAGE, register::REGISTER_ALERT_MESSAGE};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// A submission blocked by client-side validation.
///
/// The `Display` output is the exact message shown to the user in the blocking alert.
pub enum FormValidationError {
    /// The login form had an empty username or password.
    #[error("{}", LOGIN_ALERT_MESSAGE)]
    MissingLoginFields,
    /// One or more required registration fields were blank after trimming.
    #[error("{}", REGISTER_ALERT_MESSAGE)]
    MissingRequiredFields {
        /// Number of required fields that were blank.
        blank: usize,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures while wiring a behavior into the page.
pub enum WidgetSetupError {
    /// A selector the behavior depends on matched nothing.
    #[error("no element matches `{selector}`")]
    ElementNotFound {
        /// Selector that was queried.
        selector: String,
    },
    /// The slide selector matched zero elements.
    #[error("slider has no slides matching `{selector}`")]
    NoSlides {
        /// Slide selector that was queried.
        selector: String,
    },
    /// A browser API call failed during setup.
    #[error("dom setup failed: {0}")]
    Dom(String),
    /// Page options were rejected.
    #[error("invalid page options: {0}")]
    InvalidConfig(String),
}
