//! Domain entities - the core business objects.

mod post;
mod search;
mod user;

pub use post::BlogPost;
pub use search::{PostSearch, UserSearch, parse_page_size};
pub use user::BlogUser;
