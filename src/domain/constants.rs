/// Fixed page size of the admin event listing.
pub const EVENTS_PAGE_LIMIT: i64 = 30;

/// Client identifiers accepted by the connector. Each maps to exactly one syncer.
pub const AVAILABLE_CLIENTS: &[&str] = &["discourse_events", "events"];
