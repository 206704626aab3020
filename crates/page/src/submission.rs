use seaworth_shared::{Inquiry, InquiryReceipt, SUBMIT_FAILED_MESSAGE};
use strum::{AsRefStr, Display};

use crate::{ClientError, FailureKind, FormState, InquiryClient};

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum OutcomeKind {
    Success,
    Error,
}

/// Status message shown next to the contact form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub message: String,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Success,
            message: message.into(),
        }
    }

    pub fn error() -> Self {
        Self {
            kind: OutcomeKind::Error,
            message: SUBMIT_FAILED_MESSAGE.to_owned(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Success
    }
}

/// Drives one inquiry submission at a time.
///
/// `busy` is the single in-flight slot: while it is set, further submissions
/// are ignored rather than queued.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    busy: bool,
    outcome: Option<Outcome>,
    last_failure: Option<FailureKind>,
}

impl Submission {
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn last_failure(&self) -> Option<FailureKind> {
        self.last_failure
    }

    /// Claims the in-flight slot and snapshots the form.
    ///
    /// Returns `None` when a submission is already pending.
    pub fn begin(&mut self, form: &FormState) -> Option<Inquiry> {
        if self.busy {
            tracing::debug!("inquiry submission already pending, ignoring");
            return None;
        }

        self.busy = true;
        self.outcome = None;
        self.last_failure = None;

        Some(form.snapshot())
    }

    /// Releases the slot and records the outcome of the request.
    pub fn finish(
        &mut self,
        form: &mut FormState,
        result: Result<InquiryReceipt, ClientError>,
    ) -> &Outcome {
        self.busy = false;

        let outcome = match result {
            Ok(receipt) => {
                form.reset();
                Outcome::success(receipt.message)
            }
            Err(err) => {
                let kind = err.kind();
                tracing::warn!(failure = kind.as_ref(), "inquiry submission failed: {err}");
                self.last_failure = Some(kind);
                Outcome::error()
            }
        };

        self.outcome.insert(outcome)
    }

    pub async fn submit<C>(&mut self, form: &mut FormState, client: &C) -> Option<&Outcome>
    where
        C: InquiryClient + ?Sized,
    {
        let inquiry = self.begin(form)?;
        let result = client.submit(&inquiry).await;

        Some(self.finish(form, result))
    }
}
