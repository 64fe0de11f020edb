//! zlib/DEFLATE compression.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};

use crate::error::{CodecError, Result};

const INFLATE_CHUNK: usize = 4 * 1024;

/// Compress bytes into a zlib stream. Applied even when it does not shrink
/// the input.
pub fn compress(bytes: &[u8], level: u32) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(bytes.len() / 2 + 16), Compression::new(level.min(9)));
    encoder
        .write_all(bytes)
        .map_err(|e| CodecError::Encode(e.to_string()))?;
    encoder.finish().map_err(|e| CodecError::Encode(e.to_string()))
}

/// Inflate a complete zlib stream.
///
/// The stream must end with a valid checksum and be followed by nothing;
/// truncated input, trailing bytes and output past `limit` are all
/// `CorruptStream`.
pub fn decompress(bytes: &[u8], limit: usize) -> Result<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    let mut out = Vec::with_capacity(INFLATE_CHUNK.min(limit.max(1)));

    loop {
        if out.len() == out.capacity() {
            if out.len() >= limit {
                return Err(CodecError::CorruptStream(format!(
                    "inflated payload exceeds {limit} bytes"
                )));
            }
            out.reserve(INFLATE_CHUNK.min(limit - out.len()));
        }

        let before_in = inflater.total_in();
        let before_out = inflater.total_out();
        let consumed = before_in as usize;
        let status = inflater
            .decompress_vec(&bytes[consumed..], &mut out, FlushDecompress::None)
            .map_err(|e| CodecError::CorruptStream(e.to_string()))?;

        match status {
            Status::StreamEnd => break,
            Status::Ok | Status::BufError => {
                let stalled = inflater.total_in() == before_in && inflater.total_out() == before_out;
                if stalled && out.len() < out.capacity() {
                    return Err(CodecError::CorruptStream("truncated zlib stream".into()));
                }
            }
        }
    }

    if out.len() > limit {
        return Err(CodecError::CorruptStream(format!(
            "inflated payload exceeds {limit} bytes"
        )));
    }

    let consumed = inflater.total_in() as usize;
    if consumed != bytes.len() {
        return Err(CodecError::CorruptStream(format!(
            "{} trailing bytes after zlib stream",
            bytes.len() - consumed
        )));
    }

    Ok(out)
}
