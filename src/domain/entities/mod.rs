pub mod event;
pub mod event_connection;
pub mod source;
pub mod topic;

pub use event::{ConnectedTopic, Event, EventListing};
pub use event_connection::EventConnection;
pub use source::Source;
pub use topic::{Post, Topic, TopicWithEvent};
