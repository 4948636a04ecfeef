//! Login form validation: both credentials must be non-empty. Values are not trimmed.

use crate::{config::LoginFormConfig, error::FormValidationError, surface::SubmitForm};

use super::SubmitDecision;

/// Alert text shown when a credential is missing.
pub const LOGIN_ALERT_MESSAGE: &str = "Please fill all fields!";

/// Checks raw credential values.
///
/// Whitespace-only values count as filled in.
pub fn check_login_fields(username: &str, password: &str) -> SubmitDecision {
    if username.is_empty() || password.is_empty() {
        SubmitDecision::Cancel(FormValidationError::MissingLoginFields)
    } else {
        SubmitDecision::Proceed
    }
}

#[derive(Debug, Clone, Default)]
/// Submit handler logic for the login page.
pub struct LoginValidator {
    config: LoginFormConfig,
}

impl LoginValidator {
    /// Creates a validator reading the fields named in `config`.
    pub fn new(config: LoginFormConfig) -> Self {
        Self { config }
    }

    /// Reads both credentials from `form` and decides whether the submission may proceed.
    ///
    /// A missing input reads as an empty value.
    pub fn evaluate<F: SubmitForm + ?Sized>(&self, form: &F) -> SubmitDecision {
        let username = form
            .field_value(&self.config.username_field)
            .unwrap_or_default();
        let password = form
            .field_value(&self.config.password_field)
            .unwrap_or_default();
        check_login_fields(&username, &password)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::surface::memory::MemoryForm;

    #[test]
    fn empty_username_or_password_cancels() {
        let cancel = SubmitDecision::Cancel(FormValidationError::MissingLoginFields);
        assert_eq!(check_login_fields("", "secret"), cancel);
        assert_eq!(check_login_fields("alice", ""), cancel);
        assert_eq!(check_login_fields("", ""), cancel);
    }

    #[test]
    fn filled_credentials_proceed() {
        assert_eq!(check_login_fields("alice", "secret"), SubmitDecision::Proceed);
    }

    #[test]
    fn whitespace_only_credentials_are_not_trimmed() {
        assert_eq!(check_login_fields("   ", "\t"), SubmitDecision::Proceed);
    }

    #[test]
    fn evaluate_reads_configured_field_names() {
        let validator = LoginValidator::new(LoginFormConfig {
            username_field: "email".to_string(),
            ..LoginFormConfig::default()
        });
        let form = MemoryForm::with_fields([("email", "a@b.c"), ("password", "pw")]);

        assert!(validator.evaluate(&form).is_proceed());
    }

    #[test]
    fn evaluate_treats_missing_input_as_empty() {
        let form = MemoryForm::with_fields([("username", "alice")]);

        assert_eq!(
            LoginValidator::default().evaluate(&form),
            SubmitDecision::Cancel(FormValidationError::MissingLoginFields)
        );
    }

    #[test]
    fn alert_text_matches_login_message() {
        assert_eq!(
            FormValidationError::MissingLoginFields.to_string(),
            "Please fill all fields!"
        );
    }
}
