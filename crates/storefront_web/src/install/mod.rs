//! Per-page installers.
//!
//! Calls route to the `wasm32` implementation in the browser and to inert stand-ins elsewhere,
//! so host builds and tests link without a DOM.

use storefront_contract::{HomepageConfig, LoginFormConfig, RegisterFormConfig, WidgetSetupError};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub use imp::HomepageWidgets;

/// Registers the login submit handler once the document has finished parsing.
///
/// # Errors
///
/// Returns an error when the document is unavailable, or when the document is already parsed
/// and the form cannot be found. Failures after a deferred install are logged.
pub fn install_login_validator(config: LoginFormConfig) -> Result<(), WidgetSetupError> {
    imp::install_login_validator(config)
}

/// Registers the registration submit handler once the document has finished parsing.
///
/// # Errors
///
/// Same conditions as [`install_login_validator`].
pub fn install_register_validator(config: RegisterFormConfig) -> Result<(), WidgetSetupError> {
    imp::install_register_validator(config)
}

/// Starts the hero slider and injects the menu toggle into the current document.
///
/// The two widgets are installed independently; one failing is logged and the other still runs.
///
/// # Errors
///
/// Returns an error for invalid options, or when neither widget could be installed.
pub fn install_homepage_widgets(
    config: HomepageConfig,
) -> Result<HomepageWidgets, WidgetSetupError> {
    config.validate()?;
    imp::install_homepage_widgets(config)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn homepage_options_are_validated_before_touching_the_page() {
        let err = install_homepage_widgets(HomepageConfig {
            interval_ms: 0,
            ..HomepageConfig::default()
        })
        .expect_err("invalid interval");

        assert!(matches!(err, WidgetSetupError::InvalidConfig(_)));
    }

    #[test]
    fn host_builds_report_missing_dom() {
        let expected = WidgetSetupError::Dom(
            "browser DOM APIs are only available when compiled for wasm32".to_string(),
        );
        assert_eq!(
            install_login_validator(LoginFormConfig::default()),
            Err(expected.clone())
        );
        assert_eq!(
            install_register_validator(RegisterFormConfig::default()),
            Err(expected.clone())
        );
        assert_eq!(
            install_homepage_widgets(HomepageConfig::default()).map(|_| ()),
            Err(expected)
        );
    }

    #[test]
    fn inert_homepage_handle_reports_nothing_running() {
        let mut widgets = HomepageWidgets::default();
        assert_eq!(widgets.active_slide(), None);
        assert_eq!(widgets.menu_visibility(), None);
        assert!(!widgets.is_rotating());
        widgets.stop_slider();
    }
}
