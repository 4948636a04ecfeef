//! Browser (`wasm32`) wiring for the storefront page behaviors.
//!
//! The decision logic lives in [`storefront_contract`]; this crate implements its page-surface
//! traits over `web-sys` and registers the DOM listeners and timers that drive it.
//!
//! - `surface` (wasm only): `web-sys` adapters for forms, alerts, slides, and the navigation bar
//! - [`timer`]: recurring interval handle
//! - [`install`]: per-page installers (routes to wasm or non-wasm implementations)
//! - [`options`]: JS options object decoding and error conversion

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

#[cfg(target_arch = "wasm32")]
mod dom;
pub mod install;
pub mod options;
#[cfg(target_arch = "wasm32")]
pub mod surface;
pub mod timer;

pub use install::{
    install_homepage_widgets, install_login_validator, install_register_validator,
    HomepageWidgets,
};
pub use options::{parse_options, setup_error_to_js};
#[cfg(target_arch = "wasm32")]
pub use surface::{WebAlertService, WebForm, WebNavBar, WebNavMenu, WebSlideDeck, WebSubmitEvent};
pub use timer::IntervalHandle;
