//! Contact form draft and its console-only "submission".

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

/// Blocking acknowledgement shown after a submission.
pub const ACKNOWLEDGEMENT: &str = "Thank you for your message! We will get back to you soon.";

/// Required field left blank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("please enter your name")]
    MissingName,
    #[error("please enter your email")]
    MissingEmail,
    #[error("please enter a message")]
    MissingMessage,
}

/// Field values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
    pub error: Option<ContactError>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// The payload that gets logged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Store typed input. Editing dismisses any pending validation error.
    pub fn edit(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
        self.error = None;
    }

    /// Validate the draft and take its values, clearing the form.
    ///
    /// # Errors
    ///
    /// Returns the first blank required field; the draft keeps its values.
    pub fn submit(&mut self) -> Result<ContactSubmission, ContactError> {
        match self.validated() {
            Ok(submission) => {
                *self = Self::default();
                Ok(submission)
            }
            Err(err) => {
                self.error = Some(err);
                Err(err)
            }
        }
    }

    fn validated(&self) -> Result<ContactSubmission, ContactError> {
        Ok(ContactSubmission {
            name: required(&self.name, ContactError::MissingName)?,
            email: required(&self.email, ContactError::MissingEmail)?,
            message: required(&self.message, ContactError::MissingMessage)?,
        })
    }
}

/// Blank means whitespace-only; accepted values are kept exactly as typed.
fn required(value: &str, missing: ContactError) -> Result<String, ContactError> {
    if value.trim().is_empty() { Err(missing) } else { Ok(value.to_owned()) }
}

impl ContactSubmission {
    /// Console line for the submission.
    #[must_use]
    pub fn log_line(&self) -> String {
        let payload = serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"));
        format!("Form submitted: {payload}")
    }
}
