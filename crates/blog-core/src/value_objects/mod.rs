//! Value objects - immutable types that represent domain concepts

mod ids;
mod name_list;
mod pagination;
mod slug;

pub use ids::{BlogId, CategoryId, CommentId, IdParseError, TagId, UserId};
pub use name_list::NameList;
pub use pagination::{Page, PageRequest, PaginationMeta, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
pub use slug::{slug_candidate, slugify, FALLBACK_SLUG};
