use std::str::FromStr;

use seaworth_shared::{Inquiry, InquiryField};

#[derive(Debug, thiserror::Error)]
#[error("unknown form field `{0}`")]
pub struct UnknownField(pub String);

/// Current text of the four contact form inputs.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct FormState(Inquiry);

impl FormState {
    pub fn new(inquiry: Inquiry) -> Self {
        Self(inquiry)
    }

    /// Replaces the value of `field`, leaving the other fields untouched.
    pub fn update(&mut self, field: InquiryField, value: impl Into<String>) {
        *self.0.get_mut(field) = value.into();
    }

    /// Same as [`FormState::update`] with the field given by its input name.
    pub fn update_named(&mut self, name: &str, value: impl Into<String>) -> Result<(), UnknownField> {
        let field = InquiryField::from_str(name).map_err(|_| UnknownField(name.to_owned()))?;
        self.update(field, value);

        Ok(())
    }

    pub fn get(&self, field: InquiryField) -> &str {
        self.0.get(field)
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn subject(&self) -> &str {
        &self.0.subject
    }

    pub fn message(&self) -> &str {
        &self.0.message
    }

    /// Immutable copy of the form as it should be sent to the backend.
    pub fn snapshot(&self) -> Inquiry {
        self.0.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn reset(&mut self) {
        self.0 = Inquiry::default();
    }
}
