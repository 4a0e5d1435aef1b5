pub mod event_commands;

pub use event_commands::{connect_event, destroy_events, list_events};
