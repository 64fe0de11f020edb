use pl_codec::CodecError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClaimError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),
    #[error("Invalid link: {0}")]
    InvalidLink(String),
    #[error("Link has no `{0}` parameter")]
    MissingToken(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClaimError {
    /// Short kind label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Codec(err) => err.kind(),
            Self::SchemaMismatch(_) => "schema_mismatch",
            Self::InvalidLink(_) => "invalid_link",
            Self::MissingToken(_) => "missing_token",
            Self::Serialization(_) => "serialization",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClaimError>;
