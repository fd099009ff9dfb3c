//! Integration test utilities for the blog backend
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API and the GraphQL endpoint.

pub mod helpers;
pub mod fixtures;

pub use helpers::*;
pub use fixtures::*;
