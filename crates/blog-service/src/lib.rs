//! # blog-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

#[cfg(test)]
mod testing;

pub use services::{
    BlogDetails, BlogPage, BlogService, CommentService, FormatterService, InteractionService,
    NormalizerService, ProfileStats, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, SlugService, TaxonomyService, UserService,
};
