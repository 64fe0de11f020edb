//! Structured encoding: CBOR via serde.
//!
//! Integers and floats keep their major types, so a value written as an
//! integer always reads back as one. Maps are written in insertion order.

use std::io::Cursor;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CodecError, Result};

pub use ciborium::Value;

/// Serialize a value to CBOR bytes.
pub fn to_bytes<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    ciborium::into_writer(value, &mut buf).map_err(|e| CodecError::Encode(e.to_string()))?;
    Ok(buf)
}

/// Deserialize exactly one CBOR item from `bytes`.
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut cursor = Cursor::new(bytes);
    let value = ciborium::from_reader(&mut cursor).map_err(classify)?;

    let read = cursor.position() as usize;
    if read != bytes.len() {
        return Err(CodecError::CorruptStream(format!(
            "{} trailing bytes after CBOR item",
            bytes.len() - read
        )));
    }
    Ok(value)
}

fn classify(err: ciborium::de::Error<std::io::Error>) -> CodecError {
    use ciborium::de::Error;

    match err {
        Error::Semantic(offset, msg) => CodecError::SchemaMismatch(match offset {
            Some(at) => format!("{msg} at offset {at}"),
            None => msg,
        }),
        Error::Syntax(at) => CodecError::CorruptStream(format!("invalid CBOR at offset {at}")),
        Error::Io(e) => CodecError::CorruptStream(e.to_string()),
        Error::RecursionLimitExceeded => CodecError::CorruptStream("CBOR nesting too deep".into()),
    }
}
