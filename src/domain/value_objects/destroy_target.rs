use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a destroy request removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestroyTarget {
    EventsOnly,
    TopicsOnly,
    EventsAndTopics,
}

impl DestroyTarget {
    pub fn destroys_events(&self) -> bool {
        matches!(self, Self::EventsOnly | Self::EventsAndTopics)
    }

    pub fn destroys_topics(&self) -> bool {
        matches!(self, Self::TopicsOnly | Self::EventsAndTopics)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EventsOnly => "events_only",
            Self::TopicsOnly => "topics_only",
            Self::EventsAndTopics => "events_and_topics",
        }
    }
}

impl FromStr for DestroyTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "events_only" => Ok(Self::EventsOnly),
            "topics_only" => Ok(Self::TopicsOnly),
            "events_and_topics" => Ok(Self::EventsAndTopics),
            other => Err(format!("Unknown destroy target: {other}")),
        }
    }
}

impl fmt::Display for DestroyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
