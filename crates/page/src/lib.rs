//! Visitor-side state of the brochure page.
//!
//! A [`Page`] owns everything that changes while a visitor is on the site: the
//! mobile menu and scroll target ([`Navigator`]), the contact form fields
//! ([`FormState`]) and the state of the last inquiry submission ([`Submission`]).
//! Inquiries leave the page through an [`InquiryClient`].

mod client;
mod form;
mod navigator;
mod page;
mod submission;

pub use client::*;
pub use form::*;
pub use navigator::*;
pub use page::*;
pub use submission::*;

pub use seaworth_shared::{Inquiry, InquiryField, InquiryReceipt, SUBMIT_FAILED_MESSAGE};
