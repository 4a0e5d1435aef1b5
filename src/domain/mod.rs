pub mod constants;
pub mod entities;
pub mod value_objects;

pub use constants::{AVAILABLE_CLIENTS, EVENTS_PAGE_LIMIT};
pub use entities::{
    ConnectedTopic, Event, EventConnection, EventListing, Post, Source, Topic, TopicWithEvent,
};
pub use value_objects::{DestroyTarget, EventFilter, EventOrder, SortDirection};
