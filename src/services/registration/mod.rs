//! Hand-off of validated registrations.
//!
//! The page performs no network call: the default handler just logs the
//! registration and acknowledges it locally. A real backend plugs in by
//! implementing [`RegistrationHandler`].

use crate::models::registration::{Registration, RegistrationError, RegistrationForm};
use anyhow::Result;

pub const LOCAL_ACKNOWLEDGEMENT: &str = "Registration received! We'll contact you with details.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub message: String,
}

/// Receives registrations that passed validation.
#[cfg_attr(test, mockall::automock)]
pub trait RegistrationHandler {
    fn submit(&mut self, registration: Registration) -> Result<Acknowledgement>;
}

/// Acknowledges every registration without sending it anywhere.
#[derive(Debug, Default)]
pub struct LocalAcknowledgement {
    received: usize,
}

impl LocalAcknowledgement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> usize {
        self.received
    }
}

impl RegistrationHandler for LocalAcknowledgement {
    fn submit(&mut self, registration: Registration) -> Result<Acknowledgement> {
        self.received += 1;
        log::info!(
            "Registration #{} received: {} <{}> for {}",
            self.received,
            registration.name,
            registration.email,
            registration.category
        );
        Ok(Acknowledgement {
            message: LOCAL_ACKNOWLEDGEMENT.to_string(),
        })
    }
}

/// Result of pressing Submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted(Acknowledgement),
    Invalid(RegistrationError),
    Failed(String),
}

/// Validate `form` and pass it to `handler`. The form is cleared only on success.
pub fn submit_form(
    form: &mut RegistrationForm,
    handler: &mut dyn RegistrationHandler,
) -> SubmissionOutcome {
    let registration = match form.validate() {
        Ok(registration) => registration,
        Err(err) => {
            log::debug!("Registration rejected: {err}");
            return SubmissionOutcome::Invalid(err);
        }
    };

    match handler.submit(registration) {
        Ok(ack) => {
            form.clear();
            SubmissionOutcome::Accepted(ack)
        }
        Err(err) => {
            log::error!("Registration hand-off failed: {err:#}");
            SubmissionOutcome::Failed(format!("{err:#}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::registration::Category;
    use anyhow::anyhow;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn form() -> RegistrationForm {
        RegistrationForm {
            name: "Ravi Kumar".into(),
            email: "ravi@example.com".into(),
            phone: "9876543210".into(),
            category: Category::Technical,
            notes: String::new(),
        }
    }

    #[test]
    fn test_valid_form_is_handed_off_once() {
        let expected = form().validate().unwrap();
        let mut handler = MockRegistrationHandler::new();
        handler
            .expect_submit()
            .with(eq(expected))
            .times(1)
            .returning(|_| {
                Ok(Acknowledgement {
                    message: "ok".into(),
                })
            });

        let mut draft = form();
        let outcome = submit_form(&mut draft, &mut handler);
        assert_eq!(
            outcome,
            SubmissionOutcome::Accepted(Acknowledgement {
                message: "ok".into()
            })
        );
        assert_eq!(draft, RegistrationForm::default());
    }

    #[test]
    fn test_invalid_form_never_reaches_handler() {
        let mut handler = MockRegistrationHandler::new();
        handler.expect_submit().never();

        let mut draft = form();
        draft.email = "not-an-email".into();
        let outcome = submit_form(&mut draft, &mut handler);
        assert_eq!(
            outcome,
            SubmissionOutcome::Invalid(RegistrationError::InvalidEmail("not-an-email".into()))
        );
        assert_eq!(draft.name, "Ravi Kumar");
    }

    #[test]
    fn test_handler_failure_keeps_draft() {
        let mut handler = MockRegistrationHandler::new();
        handler
            .expect_submit()
            .times(1)
            .returning(|_| Err(anyhow!("backend offline")));

        let mut draft = form();
        let outcome = submit_form(&mut draft, &mut handler);
        assert_eq!(outcome, SubmissionOutcome::Failed("backend offline".into()));
        assert_eq!(draft, form());
    }

    #[test]
    fn test_local_handler_acknowledges_and_counts() {
        let mut handler = LocalAcknowledgement::new();
        let mut draft = form();
        let outcome = submit_form(&mut draft, &mut handler);
        assert_eq!(
            outcome,
            SubmissionOutcome::Accepted(Acknowledgement {
                message: LOCAL_ACKNOWLEDGEMENT.into()
            })
        );
        assert_eq!(handler.received(), 1);
    }
}
