use reqwest::StatusCode;
use seaworth_shared::{Inquiry, InquiryReceipt};
use serde::Deserialize;
use strum::{AsRefStr, Display};
use url::Url;

/// Why an inquiry did not reach the backend.
#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum FailureKind {
    Network,
    Validation,
    Server,
    Malformed,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid backend base url: {0}")]
    InvalidBaseUrl(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("backend rejected inquiry ({status}){}", detail_suffix(.detail))]
    Rejected { status: u16, detail: Option<String> },

    #[error("malformed backend response: {0}")]
    Malformed(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

impl ClientError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ClientError::InvalidBaseUrl(_) | ClientError::Network(_) => FailureKind::Network,
            ClientError::Rejected { status, .. }
                if *status == StatusCode::UNPROCESSABLE_ENTITY.as_u16() =>
            {
                FailureKind::Validation
            }
            ClientError::Rejected { .. } => FailureKind::Server,
            ClientError::Malformed(_) => FailureKind::Malformed,
        }
    }
}

/// Boundary to the service that accepts inquiries.
#[async_trait::async_trait]
pub trait InquiryClient: Send + Sync {
    async fn submit(&self, inquiry: &Inquiry) -> Result<InquiryReceipt, ClientError>;
}

#[derive(Deserialize)]
struct RejectionBody {
    detail: serde_json::Value,
}

/// Posts inquiries as JSON to `{base_url}/api/inquiries`.
#[derive(Clone, Debug)]
pub struct HttpInquiryClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpInquiryClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let endpoint = endpoint(base_url)?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn endpoint(base_url: &str) -> Result<Url, ClientError> {
    let base = Url::parse(base_url.trim_end_matches('/'))
        .map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

    if !matches!(base.scheme(), "http" | "https") {
        return Err(ClientError::InvalidBaseUrl(format!(
            "{base_url}: scheme must be http or https"
        )));
    }

    let raw = format!("{}/api/inquiries", base.as_str().trim_end_matches('/'));

    Url::parse(&raw).map_err(|e| ClientError::InvalidBaseUrl(format!("{base_url}: {e}")))
}

#[async_trait::async_trait]
impl InquiryClient for HttpInquiryClient {
    async fn submit(&self, inquiry: &Inquiry) -> Result<InquiryReceipt, ClientError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(inquiry)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<RejectionBody>(&body)
                .ok()
                .map(|b| match b.detail {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                });

            return Err(ClientError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        serde_json::from_slice::<InquiryReceipt>(&body)
            .map_err(|e| ClientError::Malformed(e.to_string()))
    }
}
