use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Text shown to the visitor whenever a submission fails, whatever the cause.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit inquiry. Please try again.";

/// Confirmation returned by the backend once an inquiry is stored.
pub const SUBMIT_SUCCESS_MESSAGE: &str =
    "Your inquiry has been submitted successfully. We will contact you soon!";

/// The four-field record a site visitor sends through the contact form.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Inquiry {
    pub fn get(&self, field: InquiryField) -> &str {
        match field {
            InquiryField::Name => &self.name,
            InquiryField::Email => &self.email,
            InquiryField::Subject => &self.subject,
            InquiryField::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: InquiryField) -> &mut String {
        match field {
            InquiryField::Name => &mut self.name,
            InquiryField::Email => &mut self.email,
            InquiryField::Subject => &mut self.subject,
            InquiryField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        InquiryField::VARIANTS
            .iter()
            .all(|field| self.get(*field).is_empty())
    }
}

#[derive(
    EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "lowercase")]
pub enum InquiryField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryReceipt {
    #[serde(default)]
    pub status: Option<String>,
    pub message: String,
}

impl InquiryReceipt {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: Some("success".to_owned()),
            message: message.into(),
        }
    }
}
