use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Collected answers keyed by question key. Ordering for output comes from
/// the catalog, not from this map.
pub type AnswerMap = BTreeMap<String, String>;

pub type EnvMap = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonInteractiveReason {
    CiEnv,
    NonTtyStdin,
}

impl NonInteractiveReason {
    pub fn describe(self) -> &'static str {
        match self {
            Self::CiEnv => "CI environment detected",
            Self::NonTtyStdin => "stdin is not a terminal",
        }
    }
}
