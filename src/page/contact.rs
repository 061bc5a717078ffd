// SPDX-License-Identifier: MPL-2.0
//! Contact form state and validation.
//!
//! Nothing is sent anywhere: a valid submission is reported to the user and
//! logged, then the form is cleared.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Shown after a valid submission.
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should compile")
});

/// Reasons a submission is rejected. The messages are shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequired,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

/// A validated submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Whether `email` looks like `local@domain.tld` with no whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Current contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    /// Checks the form without modifying it.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingRequired`] if name, email, or message is
    /// empty; [`ValidationError::InvalidEmail`] if the email is malformed.
    pub fn validate(&self) -> Result<Submission, ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ValidationError::MissingRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Submission {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: (!self.phone.is_empty()).then(|| self.phone.clone()),
            message: self.message.clone(),
        })
    }

    /// Validates and, on success, clears the form.
    ///
    /// # Errors
    ///
    /// Same as [`Self::validate`]; the form keeps its contents on error.
    pub fn submit(&mut self) -> Result<Submission, ValidationError> {
        let submission = self.validate()?;
        self.reset();
        Ok(submission)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
