//! Ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    BlogFilter, BlogRepository, CommentRepository, FollowRepository, InteractionRepository,
    RepoResult, TaxonomyLinks, TaxonomyRepository, UserRepository, ViewRepository,
};
