//! Claim ↔ token.
//!
//! Decoding is total at this level: every failure is logged and collapsed
//! into `None`. Use [`ClaimCodec::try_decode`] to see why a token was refused.

use pl_codec::structured::Value;
use pl_codec::{Cipher, LinkCodec};
use tracing::debug;
use url::Url;

use crate::claim::Claim;
use crate::compact::{from_compact, to_compact, CompactClaim};
use crate::config::LinkConfig;
use crate::error::Result;
use crate::{legacy, link};

#[derive(Debug, Clone, Default)]
pub struct ClaimCodec {
    codec: LinkCodec,
    link: LinkConfig,
}

impl ClaimCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_codec(codec: LinkCodec) -> Self {
        Self {
            codec,
            link: LinkConfig::default(),
        }
    }

    pub fn with_cipher<C: Cipher + 'static>(mut self, cipher: C) -> Self {
        self.codec = self.codec.with_cipher(cipher);
        self
    }

    pub fn with_link_config(mut self, link: LinkConfig) -> Self {
        self.link = link;
        self
    }

    pub fn link_config(&self) -> &LinkConfig {
        &self.link
    }

    pub fn encode(&self, claim: &Claim) -> Result<String> {
        Ok(self.codec.encode(&to_compact(claim))?)
    }

    pub fn try_decode(&self, token: &str) -> Result<Claim> {
        let value: Value = self.codec.decode(token.trim())?;
        let compact = CompactClaim::from_value(&value)?;
        Ok(from_compact(compact))
    }

    pub fn decode(&self, token: &str) -> Option<Claim> {
        match self.try_decode(token) {
            Ok(claim) => Some(claim),
            Err(err) => {
                debug!(kind = err.kind(), %err, "proof token rejected");
                None
            }
        }
    }

    /// Decode a compact token, falling back to the legacy JSON format.
    pub fn decode_any(&self, token: &str) -> Option<Claim> {
        self.decode(token).or_else(|| legacy::decode_legacy(token))
    }

    pub fn share_link(&self, base: &str, claim: &Claim) -> Result<Url> {
        let token = self.encode(claim)?;
        link::build_link(base, &token, &self.link)
    }

    pub fn claim_from_link(&self, proof_link: &str) -> Option<Claim> {
        match link::token_from_link(proof_link, &self.link) {
            Ok(token) => self.decode_any(&token),
            Err(err) => {
                debug!(%err, "no token in proof link");
                None
            }
        }
    }
}

pub fn encode_claim(claim: &Claim) -> Result<String> {
    ClaimCodec::new().encode(claim)
}

pub fn decode_claim(token: &str) -> Option<Claim> {
    ClaimCodec::new().decode(token)
}

pub fn try_decode_claim(token: &str) -> Result<Claim> {
    ClaimCodec::new().try_decode(token)
}

pub fn decode_any(token: &str) -> Option<Claim> {
    ClaimCodec::new().decode_any(token)
}
