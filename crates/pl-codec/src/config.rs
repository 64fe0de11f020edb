use serde::{Deserialize, Serialize};

/// Upper bound on inflated payload size (1 MiB).
pub const DEFAULT_MAX_INFLATED_LEN: usize = 1024 * 1024;

/// zlib default level.
pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// DEFLATE level, 0..=9. Out-of-range values are clamped.
    pub compression_level: u32,
    /// Inflating past this many bytes is treated as a corrupt stream.
    pub max_inflated_len: usize,
}

impl CodecConfig {
    pub fn level(&self) -> u32 {
        self.compression_level.min(9)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            max_inflated_len: DEFAULT_MAX_INFLATED_LEN,
        }
    }
}
