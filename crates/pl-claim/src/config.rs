use serde::{Deserialize, Serialize};

/// Query parameter that carries the token in a proof link.
pub const DEFAULT_QUERY_PARAM: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    pub query_param: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            query_param: DEFAULT_QUERY_PARAM.into(),
        }
    }
}
