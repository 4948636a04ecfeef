//! Headless contracts and decision logic for the storefront page behaviors.
//!
//! This crate owns everything that does not need a browser: the login and registration submit
//! validators, the hero slider and navigation menu controllers, page configuration, and the
//! page-surface traits that browser adapters in `storefront_web` implement. In-memory adapters
//! under [`surface::memory`] let the same code paths run in host-side tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod forms;
pub mod nav_toggle;
pub mod page;
pub mod slider;
pub mod surface;

pub use config::{HomepageConfig, LoginFormConfig, RegisterFormConfig};
pub use error::{FormValidationError, WidgetSetupError};
pub use forms::login::{check_login_fields, LoginValidator, LOGIN_ALERT_MESSAGE};
pub use forms::register::{check_required_fields, RegisterValidator, REGISTER_ALERT_MESSAGE};
pub use forms::{enforce_decision, SubmitDecision};
pub use nav_toggle::{insert_menu_toggle, MenuToggleController, MenuVisibility};
pub use page::{combine_homepage_setup, install_timing, HomepageSetup, InstallTiming};
pub use slider::{next_slide_index, SlideIndex, SliderController};
pub use surface::memory::{
    MemoryAlertService, MemoryForm, MemoryNavBar, MemoryNavMenu, MemoryNode, MemorySlideDeck,
    MemorySubmitEvent,
};
pub use surface::{AlertService, NavBar, NavMenu, SlideDeck, SubmitEvent, SubmitForm};
