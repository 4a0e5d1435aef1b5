pub mod post_destroyer;
pub mod repositories;
pub mod store;
pub mod syncer;

pub use post_destroyer::PostDestroyer;
pub use repositories::{EventListQuery, EventRepository, TopicRepository};
pub use store::{StoreTransaction, TransactionalStore};
pub use syncer::Syncer;
