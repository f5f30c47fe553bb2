//! Domain entities - the core business objects.

mod post;
mod record;

pub use post::Post;
pub use record::{Record, now};
