//! Signed claims and the proof links that carry them.
//!
//! A [`Claim`] is projected onto the compact v1 schema and run through the
//! `pl-codec` pipeline to produce a token. Decoding also accepts the older
//! JSON link format.

pub mod claim;
pub mod codec;
pub mod compact;
pub mod config;
pub mod date;
pub mod display;
pub mod error;
pub mod hex;
pub mod legacy;
pub mod link;

pub use claim::Claim;
pub use codec::{decode_any, decode_claim, encode_claim, try_decode_claim, ClaimCodec};
pub use compact::{from_compact, to_compact, CompactClaim, WireDate};
pub use config::LinkConfig;
pub use date::IssueDate;
pub use error::{ClaimError, Result};
pub use hex::{add_0x, strip_0x};
