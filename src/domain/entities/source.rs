use serde::{Deserialize, Serialize};

/// Feed origin of an event. Read-only here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Source {
    pub id: i64,
    pub name: String,
}
