//! Pre-compact link format: standard base64 over UTF-8 JSON.
//!
//! Links shared before the compact schema carry
//! `{"text", "signature", "doi"?, "signer"?}`. Older readers looked for the
//! date under `dio`, so both spellings are accepted on decode.

use base64::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::claim::Claim;
use crate::date::{self, IssueDate};
use crate::error::Result;

const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Serialize)]
struct LegacyRecord<'a> {
    text: &'a str,
    signature: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    signer: Option<&'a str>,
}

/// Encode a claim in the legacy format. Values are written as given.
pub fn encode_legacy(claim: &Claim) -> Result<String> {
    let doi = claim.doi.as_ref().and_then(|d| match d {
        IssueDate::Timestamp(text) => Some(text.clone()),
        IssueDate::UnixSeconds(_) => d.to_unix_seconds().and_then(date::iso_from_seconds),
    });
    let record = LegacyRecord {
        text: &claim.text,
        signature: &claim.signature,
        doi,
        signer: claim.signer.as_deref(),
    };
    Ok(STANDARD.encode(serde_json::to_vec(&record)?))
}

/// Decode a legacy token. Anything that is not a JSON object with string
/// `text` and `signature` yields `None`.
pub fn decode_legacy(token: &str) -> Option<Claim> {
    // Form-decoded query values turn `+` into spaces.
    let normalized: String = token
        .trim()
        .chars()
        .map(|c| match c {
            ' ' => '+',
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();

    let bytes = match STANDARD_LENIENT.decode(normalized.as_bytes()) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!(%err, "legacy token is not base64");
            return None;
        }
    };
    let parsed: Value = match serde_json::from_slice(&bytes) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(%err, "legacy token is not JSON");
            return None;
        }
    };

    let record = parsed.as_object()?;
    let text = record.get("text")?.as_str()?;
    let signature = record.get("signature")?.as_str()?;
    let doi = record
        .get("dio")
        .and_then(Value::as_str)
        .or_else(|| record.get("doi").and_then(Value::as_str))
        .map(|d| IssueDate::Timestamp(d.to_string()));
    let signer = record
        .get("signer")
        .and_then(Value::as_str)
        .map(str::to_string);

    Some(Claim {
        text: text.to_string(),
        signature: signature.to_string(),
        signer,
        doi,
    })
}
