use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Malformed token: {0}")]
    MalformedToken(String),
    #[error("Corrupt stream: {0}")]
    CorruptStream(String),
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),
    #[error("Encode error: {0}")]
    Encode(String),
    #[error("Cipher error: {0}")]
    Cipher(#[source] anyhow::Error),
}

impl CodecError {
    /// Short kind label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedToken(_) => "malformed_token",
            Self::CorruptStream(_) => "corrupt_stream",
            Self::SchemaMismatch(_) => "schema_mismatch",
            Self::Encode(_) => "encode",
            Self::Cipher(_) => "cipher",
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
