//! Page options with defaults matching the storefront markup.
//!
//! Every field has a default, so callers may pass a partial options object (or none at all).

use serde::{Deserialize, Serialize};

use crate::error::WidgetSetupError;

/// Default slide rotation period.
pub const DEFAULT_SLIDE_INTERVAL_MS: u32 = 5_000;
/// Glyph rendered inside the menu toggle control (U+2630 TRIGRAM FOR HEAVEN).
pub const DEFAULT_TOGGLE_LABEL: &str = "\u{2630}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Options for the login page validator.
pub struct LoginFormConfig {
    /// Selector locating the login form.
    pub form_selector: String,
    /// `name` attribute of the username input.
    pub username_field: String,
    /// `name` attribute of the password input.
    pub password_field: String,
}

impl Default for LoginFormConfig {
    fn default() -> Self {
        Self {
            form_selector: "form".to_string(),
            username_field: "username".to_string(),
            password_field: "password".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Options for the registration page validator.
pub struct RegisterFormConfig {
    /// Selector locating the registration form.
    pub form_selector: String,
    /// Selector, relative to the form, matching required fields.
    pub required_selector: String,
}

impl Default for RegisterFormConfig {
    fn default() -> Self {
        Self {
            form_selector: "form".to_string(),
            required_selector: "input[required]".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Options for the homepage slider and menu toggle.
pub struct HomepageConfig {
    /// Selector matching slides in rotation order.
    pub slide_selector: String,
    /// Class marking the active slide.
    pub active_class: String,
    /// Rotation period in milliseconds.
    pub interval_ms: u32,
    /// Selector locating the navigation bar.
    pub navbar_selector: String,
    /// Selector locating the collapsible menu.
    pub nav_links_selector: String,
    /// Class marking the menu as expanded.
    pub visible_class: String,
    /// Class given to the injected toggle control.
    pub toggle_class: String,
    /// Text content of the injected toggle control.
    pub toggle_label: String,
}

impl Default for HomepageConfig {
    fn default() -> Self {
        Self {
            slide_selector: ".hero-slider .slide".to_string(),
            active_class: "active".to_string(),
            interval_ms: DEFAULT_SLIDE_INTERVAL_MS,
            navbar_selector: ".navbar".to_string(),
            nav_links_selector: ".nav-links".to_string(),
            visible_class: "show".to_string(),
            toggle_class: "menu-toggle".to_string(),
            toggle_label: DEFAULT_TOGGLE_LABEL.to_string(),
        }
    }
}

impl HomepageConfig {
    /// Checks values the browser would otherwise reject or misinterpret.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetSetupError::InvalidConfig`] for a zero or out-of-range interval, or an
    /// empty or whitespace-containing class name.
    pub fn validate(&self) -> Result<(), WidgetSetupError> {
        if self.interval_ms == 0 || i32::try_from(self.interval_ms).is_err() {
            return Err(WidgetSetupError::InvalidConfig(format!(
                "interval_ms must be between 1 and {}, got {}",
                i32::MAX,
                self.interval_ms
            )));
        }
        for (field, value) in [
            ("active_class", &self.active_class),
            ("visible_class", &self.visible_class),
            ("toggle_class", &self.toggle_class),
        ] {
            if value.is_empty() || value.contains(char::is_whitespace) {
                return Err(WidgetSetupError::InvalidConfig(format!(
                    "{field} must be a single class name, got `{value}`"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_options_keep_remaining_defaults() {
        let config: HomepageConfig =
            serde_json::from_str(r#"{"interval_ms": 1200}"#).expect("parse");

        assert_eq!(
            config,
            HomepageConfig {
                interval_ms: 1200,
                ..HomepageConfig::default()
            }
        );
    }

    #[test]
    fn empty_options_select_storefront_markup() {
        let login: LoginFormConfig = serde_json::from_str("{}").expect("parse");
        let register: RegisterFormConfig = serde_json::from_str("{}").expect("parse");

        assert_eq!(login.username_field, "username");
        assert_eq!(login.password_field, "password");
        assert_eq!(register.required_selector, "input[required]");
    }

    #[test]
    fn validate_rejects_zero_interval() {
        let config = HomepageConfig {
            interval_ms: 0,
            ..HomepageConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(WidgetSetupError::InvalidConfig(_))
        ));
    }

    #[test]
    fn validate_rejects_interval_beyond_timer_range() {
        let config = HomepageConfig {
            interval_ms: u32::MAX,
            ..HomepageConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_multi_token_class() {
        let config = HomepageConfig {
            visible_class: "show open".to_string(),
            ..HomepageConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(HomepageConfig::default().validate().is_ok());
    }
}
