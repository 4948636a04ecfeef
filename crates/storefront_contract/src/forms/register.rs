//! Registration form validation: every required field must be non-blank after trimming.

use crate::{error::FormValidationError, surface::SubmitForm};

use super::SubmitDecision;

/// Alert text shown when a required field is blank.
pub const REGISTER_ALERT_MESSAGE: &str = "Please fill all required fields!";

/// Checks required field values in order. Zero required fields always proceeds.
pub fn check_required_fields<I, S>(values: I) -> SubmitDecision
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let blank = values
        .into_iter()
        .map(|value| value.as_ref().trim().is_empty())
        .filter(|is_blank| *is_blank)
        .count();
    if blank == 0 {
        SubmitDecision::Proceed
    } else {
        SubmitDecision::Cancel(FormValidationError::MissingRequiredFields { blank })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Submit handler logic for the registration page.
///
/// Which fields count as required is decided by the [`SubmitForm`] adapter.
pub struct RegisterValidator;

impl RegisterValidator {
    /// Collects the form's required values and decides whether the submission may proceed.
    pub fn evaluate<F: SubmitForm + ?Sized>(&self, form: &F) -> SubmitDecision {
        check_required_fields(form.required_values())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::surface::memory::MemoryForm;

    #[test]
    fn whitespace_only_required_field_cancels() {
        assert_eq!(
            check_required_fields(["alice", "  ", "pw"]),
            SubmitDecision::Cancel(FormValidationError::MissingRequiredFields { blank: 1 })
        );
    }

    #[test]
    fn all_filled_required_fields_proceed() {
        assert_eq!(
            check_required_fields(["alice", "bob", "pw"]),
            SubmitDecision::Proceed
        );
    }

    #[test]
    fn counts_every_blank_field() {
        assert_eq!(
            check_required_fields(["", "\n\t", "x", " "]),
            SubmitDecision::Cancel(FormValidationError::MissingRequiredFields { blank: 3 })
        );
    }

    #[test]
    fn form_without_required_fields_proceeds() {
        let form = MemoryForm::with_required(Vec::<&str>::new());
        assert!(RegisterValidator::default().evaluate(&form).is_proceed());
    }

    #[test]
    fn padded_values_count_as_filled() {
        let form = MemoryForm::with_required(["  alice  ", "a@b.c", " pw"]);
        assert!(RegisterValidator::default().evaluate(&form).is_proceed());
    }

    #[test]
    fn alert_text_ignores_blank_count() {
        let err = FormValidationError::MissingRequiredFields { blank: 4 };
        assert_eq!(err.to_string(), "Please fill all required fields!");
    }
}
