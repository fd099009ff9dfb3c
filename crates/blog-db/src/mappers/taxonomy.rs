//! Category and tag entity <-> model mappers

use blog_core::entities::{Category, Tag};
use blog_core::value_objects::{CategoryId, TagId};

use crate::models::{BlogTermModel, TermModel};

impl From<TermModel> for Category {
    fn from(model: TermModel) -> Self {
        Category {
            id: CategoryId::from_uuid(model.id),
            name: model.name,
        }
    }
}

impl From<TermModel> for Tag {
    fn from(model: TermModel) -> Self {
        Tag {
            id: TagId::from_uuid(model.id),
            name: model.name,
        }
    }
}

impl From<BlogTermModel> for Category {
    fn from(model: BlogTermModel) -> Self {
        Category {
            id: CategoryId::from_uuid(model.id),
            name: model.name,
        }
    }
}

impl From<BlogTermModel> for Tag {
    fn from(model: BlogTermModel) -> Self {
        Tag {
            id: TagId::from_uuid(model.id),
            name: model.name,
        }
    }
}
