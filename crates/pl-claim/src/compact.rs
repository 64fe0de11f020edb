//! Compact wire schema for claims.
//!
//! Version 1 layout, as a CBOR map in this key order:
//!
//! | key | type              | meaning                         |
//! |-----|-------------------|---------------------------------|
//! | `t` | text              | claim text                      |
//! | `s` | text              | signature, `0x` stripped        |
//! | `v` | integer           | schema version, always `1`      |
//! | `d` | integer or text   | issuance (unix seconds, or a legacy ISO string) |
//! | `r` | text              | signer, `0x` stripped           |
//!
//! `d` and `r` are optional. A payload whose `v` is missing or unknown is
//! rejected before anything else is looked at. Supporting a new version means
//! adding a branch to [`CompactClaim::from_value`].

use pl_codec::structured::Value;
use serde::Serialize;

use crate::claim::Claim;
use crate::date::{self, IssueDate};
use crate::error::{ClaimError, Result};
use crate::hex::{add_0x, strip_0x};

pub const SCHEMA_VERSION: u32 = 1;

/// Issuance time as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WireDate {
    Seconds(i64),
    /// Written by older encoders; passed through untouched.
    Legacy(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompactClaim {
    pub t: String,
    pub s: String,
    pub v: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<WireDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<String>,
}

/// Project a claim onto the current wire schema.
///
/// An issuance date that cannot be read as a time is dropped rather than
/// treated as an error.
pub fn to_compact(claim: &Claim) -> CompactClaim {
    CompactClaim {
        t: claim.text.clone(),
        s: strip_0x(&claim.signature).to_string(),
        v: SCHEMA_VERSION,
        d: claim
            .doi
            .as_ref()
            .and_then(IssueDate::to_unix_seconds)
            .map(WireDate::Seconds),
        r: claim.signer.as_deref().map(|r| strip_0x(r).to_string()),
    }
}

/// Rebuild a claim from its compact form.
pub fn from_compact(compact: CompactClaim) -> Claim {
    let doi = compact.d.and_then(|d| match d {
        WireDate::Seconds(secs) => date::iso_from_seconds(secs).map(IssueDate::Timestamp),
        WireDate::Legacy(text) => Some(IssueDate::Timestamp(text)),
    });

    Claim {
        text: compact.t,
        signature: add_0x(&compact.s),
        signer: compact.r.as_deref().map(add_0x),
        doi,
    }
}

impl CompactClaim {
    /// Validate a decoded value graph against the known schema versions.
    pub fn from_value(value: &Value) -> Result<Self> {
        let entries = value
            .as_map()
            .ok_or_else(|| mismatch("payload is not a map"))?;

        let version = lookup(entries, "v")
            .and_then(Value::as_integer)
            .map(i128::from);

        match version {
            Some(1) => Self::from_v1(entries),
            Some(other) => Err(mismatch(format!("unsupported schema version {other}"))),
            None => Err(mismatch("missing schema version")),
        }
    }

    fn from_v1(entries: &[(Value, Value)]) -> Result<Self> {
        let t = lookup(entries, "t")
            .and_then(Value::as_text)
            .ok_or_else(|| mismatch("`t` must be text"))?;
        let s = lookup(entries, "s")
            .and_then(Value::as_text)
            .ok_or_else(|| mismatch("`s` must be text"))?;

        // Optional fields of an unusable type are treated as absent.
        let d = match lookup(entries, "d") {
            Some(Value::Integer(secs)) => i64::try_from(*secs).ok().map(WireDate::Seconds),
            Some(Value::Float(secs)) => date::floor_seconds(*secs).map(WireDate::Seconds),
            Some(Value::Text(text)) => Some(WireDate::Legacy(text.clone())),
            _ => None,
        };
        let r = lookup(entries, "r").and_then(Value::as_text).map(str::to_string);

        Ok(Self {
            t: t.to_string(),
            s: s.to_string(),
            v: 1,
            d,
            r,
        })
    }
}

fn lookup<'a>(entries: &'a [(Value, Value)], key: &str) -> Option<&'a Value> {
    entries
        .iter()
        .find(|(k, _)| k.as_text() == Some(key))
        .map(|(_, v)| v)
}

fn mismatch(msg: impl Into<String>) -> ClaimError {
    ClaimError::SchemaMismatch(msg.into())
}
