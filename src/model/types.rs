use crate::error::{Result, StampError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    Draft,
    Proposed,
    Accepted,
    Deprecated,
    Superseded,
    Rejected,
}

impl Status {
    /// Every status, in listing order.
    pub const ALL: [Status; 6] = [
        Status::Draft,
        Status::Proposed,
        Status::Accepted,
        Status::Deprecated,
        Status::Superseded,
        Status::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Draft => "Draft",
            Status::Proposed => "Proposed",
            Status::Accepted => "Accepted",
            Status::Deprecated => "Deprecated",
            Status::Superseded => "Superseded",
            Status::Rejected => "Rejected",
        }
    }

    /// Lowercase key used for styling lookups (Mermaid class names, badges).
    pub fn css_class(self) -> &'static str {
        match self {
            Status::Draft => "draft",
            Status::Proposed => "proposed",
            Status::Accepted => "accepted",
            Status::Deprecated => "deprecated",
            Status::Superseded => "superseded",
            Status::Rejected => "rejected",
        }
    }

    fn valid_list() -> String {
        Status::ALL
            .iter()
            .map(|s| s.css_class())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = StampError;

    /// Strict parse: case-insensitive and whitespace-trimmed, anything else is
    /// a validation error listing the vocabulary.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        Status::ALL
            .into_iter()
            .find(|status| status.css_class() == normalized)
            .ok_or_else(|| {
                StampError::Validation(format!(
                    "invalid status: {} (valid: {})",
                    s,
                    Status::valid_list()
                ))
            })
    }
}

/// The status line as recorded in a file.
///
/// Hand-edited files may carry a status outside the vocabulary; the codec
/// keeps that text instead of refusing the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusValue {
    Known(Status),
    Unrecognized(String),
}

impl StatusValue {
    /// Best-effort conversion used by the markdown parser.
    pub fn lenient(s: &str) -> Self {
        match s.parse::<Status>() {
            Ok(status) => StatusValue::Known(status),
            Err(_) => StatusValue::Unrecognized(s.trim().to_string()),
        }
    }

    /// Styling lookup key for renderers; `None` means "use the neutral style".
    pub fn style_key(&self) -> Option<Status> {
        match self {
            StatusValue::Known(status) => Some(*status),
            StatusValue::Unrecognized(_) => None,
        }
    }

    pub fn is(&self, status: Status) -> bool {
        self.style_key() == Some(status)
    }
}

impl Default for StatusValue {
    fn default() -> Self {
        StatusValue::Unrecognized(String::new())
    }
}

impl From<Status> for StatusValue {
    fn from(status: Status) -> Self {
        StatusValue::Known(status)
    }
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusValue::Known(status) => f.write_str(status.as_str()),
            StatusValue::Unrecognized(raw) => f.write_str(raw),
        }
    }
}
