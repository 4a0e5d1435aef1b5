use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection-state filter of the admin listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventFilter {
    /// At least one connection carries a topic.
    Connected,
    /// No connection carries a topic.
    Unconnected,
}

impl EventFilter {
    /// Unknown values mean "no filter", so this never fails.
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value.map(str::trim) {
            Some("connected") => Some(Self::Connected),
            Some("unconnected") => Some(Self::Unconnected),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Unconnected => "unconnected",
        }
    }
}

impl fmt::Display for EventFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
