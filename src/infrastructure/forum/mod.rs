mod post_destroyer;

pub use post_destroyer::ForumPostDestroyer;
