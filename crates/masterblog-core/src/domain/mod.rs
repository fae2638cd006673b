//! Domain entities - the core business objects.

pub mod collection;
mod post;

pub use post::{Post, PostDraft, validate};
