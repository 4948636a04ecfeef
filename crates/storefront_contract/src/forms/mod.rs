//! Submit-time validation for the login and registration forms.
//!
//! The two validators deliberately differ: login checks two named fields without trimming,
//! registration trims every required field. They share only the decision type and the way a
//! decision is applied to the page.

pub mod login;
pub mod register;

use crate::{
    error::FormValidationError,
    surface::{AlertService, SubmitEvent},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of checking one submission.
pub enum SubmitDecision {
    /// Let the native submission continue unmodified.
    Proceed,
    /// Cancel the submission and tell the user why.
    Cancel(FormValidationError),
}

impl SubmitDecision {
    /// Whether the submission is allowed through.
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }
}

/// Applies `decision` to the page: cancels the submission, then shows the blocking alert.
///
/// A proceeding decision touches nothing.
///
/// # Errors
///
/// Returns the alert service error. The submission is already cancelled at that point.
pub fn enforce_decision<E, A>(
    decision: &SubmitDecision,
    event: &E,
    alerts: &A,
) -> Result<(), String>
where
    E: SubmitEvent + ?Sized,
    A: AlertService + ?Sized,
{
    match decision {
        SubmitDecision::Proceed => Ok(()),
        SubmitDecision::Cancel(err) => {
            event.cancel_submission();
            alerts.alert(&err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::surface::memory::{MemoryAlertService, MemorySubmitEvent};

    #[test]
    fn proceed_leaves_event_and_alerts_untouched() {
        let event = MemorySubmitEvent::default();
        let alerts = MemoryAlertService::default();

        enforce_decision(&SubmitDecision::Proceed, &event, &alerts).expect("enforce");

        assert!(!event.is_cancelled());
        assert!(alerts.messages().is_empty());
    }

    #[test]
    fn cancel_blocks_submission_and_alerts_once() {
        let event = MemorySubmitEvent::default();
        let alerts = MemoryAlertService::default();
        let decision = SubmitDecision::Cancel(FormValidationError::MissingLoginFields);

        enforce_decision(&decision, &event, &alerts).expect("enforce");

        assert!(event.is_cancelled());
        assert_eq!(alerts.messages(), vec!["Please fill all fields!".to_string()]);
    }

    struct FailingAlerts;

    impl AlertService for FailingAlerts {
        fn alert(&self, _message: &str) -> Result<(), String> {
            Err("alerts blocked".to_string())
        }
    }

    #[test]
    fn alert_failure_still_cancels() {
        let event = MemorySubmitEvent::default();
        let decision =
            SubmitDecision::Cancel(FormValidationError::MissingRequiredFields { blank: 1 });

        let result = enforce_decision(&decision, &event, &FailingAlerts);

        assert_eq!(result, Err("alerts blocked".to_string()));
        assert!(event.is_cancelled());
    }
}
