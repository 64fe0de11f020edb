//! Proof link codec. Turns serializable payloads into short URL-safe tokens.
//!
//! Stages:
//! 1. Structured encoding (CBOR, exact integer/float typing)
//! 2. Compression (zlib DEFLATE)
//! 3. Cipher hook (identity unless the caller supplies one)
//! 4. Transcoding (unpadded base64url)

pub mod cipher;
pub mod compress;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod structured;
pub mod transcode;

pub use cipher::{Cipher, FnCipher, NoCipher};
pub use config::CodecConfig;
pub use error::{CodecError, Result};
pub use pipeline::{decode, encode, ByteStage, EncodeReport, LinkCodec};
