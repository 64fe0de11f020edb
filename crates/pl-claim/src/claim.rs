use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date::IssueDate;
use crate::display;

/// A signed statement: the thing a proof link carries.
///
/// The signature and signer are opaque hex strings. Nothing here checks that
/// the signature is valid for the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    pub text: String,
    pub signature: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<IssueDate>,
}

impl Claim {
    pub fn new(text: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            signature: signature.into(),
            signer: None,
            doi: None,
        }
    }

    pub fn with_signer(mut self, signer: impl Into<String>) -> Self {
        self.signer = Some(signer.into());
        self
    }

    pub fn with_doi(mut self, doi: impl Into<IssueDate>) -> Self {
        self.doi = Some(doi.into());
        self
    }

    /// Stamp the claim with the current time.
    pub fn issued_now(self) -> Self {
        self.with_doi(Utc::now())
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.doi.as_ref().and_then(IssueDate::to_datetime)
    }

    pub fn short_signature(&self) -> String {
        display::truncate_signature(&self.signature)
    }

    pub fn short_signer(&self) -> Option<String> {
        self.signer.as_deref().map(display::truncate_address)
    }
}
