//! Codec pipeline: orchestrates the byte stages.
//!
//! Encode: structured → deflate → cipher → base64url.
//! Decode runs the same stages in reverse.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::trace;

use crate::cipher::{Cipher, NoCipher};
use crate::config::CodecConfig;
use crate::error::{CodecError, Result};
use crate::{compress, structured, transcode};

/// One reversible byte transform.
pub trait ByteStage: Send + Sync {
    fn name(&self) -> &'static str;
    fn forward(&self, bytes: &[u8]) -> Result<Vec<u8>>;
    fn reverse(&self, bytes: &[u8]) -> Result<Vec<u8>>;
}

/// zlib compression stage.
#[derive(Debug, Clone, Copy)]
pub struct DeflateStage {
    pub level: u32,
    pub max_inflated_len: usize,
}

impl ByteStage for DeflateStage {
    fn name(&self) -> &'static str {
        "deflate"
    }

    fn forward(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        compress::compress(bytes, self.level)
    }

    fn reverse(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        compress::decompress(bytes, self.max_inflated_len)
    }
}

/// Wraps a [`Cipher`] hook as a stage.
#[derive(Clone)]
pub struct CipherStage {
    cipher: Arc<dyn Cipher>,
}

impl CipherStage {
    pub fn new(cipher: Arc<dyn Cipher>) -> Self {
        Self { cipher }
    }
}

impl ByteStage for CipherStage {
    fn name(&self) -> &'static str {
        "cipher"
    }

    fn forward(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        self.cipher.encrypt(bytes).map_err(CodecError::Cipher)
    }

    fn reverse(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        // Wrong keys and tampered ciphertext look the same as any other corruption.
        self.cipher
            .decrypt(bytes)
            .map_err(|e| CodecError::CorruptStream(format!("decrypt failed: {e}")))
    }
}

/// Statistics for one encode call.
#[derive(Debug, Clone)]
pub struct EncodeReport {
    pub token: String,
    pub structured_len: usize,
    pub staged_len: usize,
    pub token_len: usize,
    pub stages_applied: Vec<&'static str>,
}

impl EncodeReport {
    /// Token length relative to the structured encoding.
    pub fn ratio(&self) -> f64 {
        if self.structured_len == 0 { return 1.0; }
        self.token_len as f64 / self.structured_len as f64
    }
}

/// The proof link codec.
#[derive(Clone)]
pub struct LinkCodec {
    config: CodecConfig,
    stages: Vec<Arc<dyn ByteStage>>,
}

impl LinkCodec {
    pub fn new() -> Self {
        Self::with_config(CodecConfig::default())
    }

    pub fn with_config(config: CodecConfig) -> Self {
        let stages = Self::build_stages(&config, Arc::new(NoCipher));
        Self { config, stages }
    }

    /// Replace the cipher stage. The previous cipher, if any, is dropped.
    pub fn with_cipher<C: Cipher + 'static>(self, cipher: C) -> Self {
        self.with_shared_cipher(Arc::new(cipher))
    }

    pub fn with_shared_cipher(mut self, cipher: Arc<dyn Cipher>) -> Self {
        self.stages = Self::build_stages(&self.config, cipher);
        self
    }

    fn build_stages(config: &CodecConfig, cipher: Arc<dyn Cipher>) -> Vec<Arc<dyn ByteStage>> {
        vec![
            Arc::new(DeflateStage {
                level: config.level(),
                max_inflated_len: config.max_inflated_len,
            }),
            Arc::new(CipherStage::new(cipher)),
        ]
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Encode a payload into a URL-safe token.
    pub fn encode<T: Serialize + ?Sized>(&self, payload: &T) -> Result<String> {
        self.encode_detailed(payload).map(|report| report.token)
    }

    /// Encode and report intermediate sizes.
    pub fn encode_detailed<T: Serialize + ?Sized>(&self, payload: &T) -> Result<EncodeReport> {
        let mut bytes = structured::to_bytes(payload)?;
        let structured_len = bytes.len();
        let mut stages_applied = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            bytes = stage.forward(&bytes)?;
            trace!(stage = stage.name(), len = bytes.len(), "encode stage applied");
            stages_applied.push(stage.name());
        }

        let token = transcode::to_text(&bytes);
        Ok(EncodeReport {
            token_len: token.len(),
            staged_len: bytes.len(),
            structured_len,
            stages_applied,
            token,
        })
    }

    /// Decode a token produced by [`LinkCodec::encode`] with a matching cipher.
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<T> {
        let mut bytes = transcode::from_text(token)?;

        for stage in self.stages.iter().rev() {
            bytes = stage.reverse(&bytes)?;
            trace!(stage = stage.name(), len = bytes.len(), "decode stage reversed");
        }

        structured::from_bytes(&bytes)
    }
}

impl Default for LinkCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LinkCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkCodec")
            .field("config", &self.config)
            .field("stages", &self.stage_names())
            .finish()
    }
}

/// Encode with the default codec (no cipher).
pub fn encode<T: Serialize + ?Sized>(payload: &T) -> Result<String> {
    LinkCodec::new().encode(payload)
}

/// Decode with the default codec (no cipher).
pub fn decode<T: DeserializeOwned>(token: &str) -> Result<T> {
    LinkCodec::new().decode(token)
}
