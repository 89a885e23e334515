//! Domain entities - the core business objects.

mod pagination;
mod post;
mod record;
mod user;

pub use pagination::{Page, Pagination};
pub use post::{NewPost, Post, PostChanges};
pub use record::{Record, RecordId};
pub use user::{NewUser, User, UserChanges};
