use crate::shared::config::parse_bool;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sortable column of the events table.
///
/// Acts as the allow-list for the `ORDER BY` clause: anything outside it falls
/// back to [`EventOrder::StartTime`] instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventOrder {
    #[default]
    StartTime,
    SourceId,
    Name,
}

impl EventOrder {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("start_time") => Self::StartTime,
            Some("source_id") => Self::SourceId,
            Some("name") => Self::Name,
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StartTime => "start_time",
            Self::SourceId => "source_id",
            Self::Name => "name",
        }
    }

    /// Qualified column, safe to splice into SQL.
    pub fn column(&self) -> &'static str {
        match self {
            Self::StartTime => "e.start_time",
            Self::SourceId => "e.source_id",
            Self::Name => "e.name",
        }
    }
}

impl fmt::Display for EventOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Truthy flags sort ascending; absent or unrecognised flags sort descending.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some(value) if parse_bool(value, false) => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, Self::Asc)
    }
}
