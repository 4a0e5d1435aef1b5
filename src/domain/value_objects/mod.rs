pub mod destroy_target;
pub mod event_filter;
pub mod event_order;

pub use destroy_target::DestroyTarget;
pub use event_filter::EventFilter;
pub use event_order::{EventOrder, SortDirection};
