//! Entity to model mappers
//!
//! `From<Model> for Entity` conversions between database rows (models) and
//! blog-core entities. Joined author columns are folded into `AuthorSummary`.

mod blog;
mod comment;
mod taxonomy;
mod user;

pub use user::author_summary;
