mod discourse_events_syncer;
mod post_event_syncer;
mod registry;

pub use discourse_events_syncer::DiscourseEventsSyncer;
pub use post_event_syncer::PostEventSyncer;
pub use registry::SyncerRegistry;
