//! Category and tag entities
//!
//! Names are matched exactly (case-sensitive) when linking; only the
//! category listing endpoint looks names up case-insensitively.

use crate::value_objects::{CategoryId, TagId};

/// Category a post is filed under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
        }
    }
}

/// Free-form label attached to a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TagId::new(),
            name: name.into(),
        }
    }
}
