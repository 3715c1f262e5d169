//! Serialisable shapes of the generated catalog document.
//!
//! Field names and ordering mirror what the website front-end consumes, so
//! changes here are breaking changes for the site.

use serde::{Deserialize, Serialize};

use crate::catalog::CategoryDescriptor;

/// One vehicle row inside a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    pub model: String,
    pub variant: String,
    /// Display-ready price text, already normalised.
    pub price_range: String,
}

/// One category section of the website feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    pub icon: String,
    pub description: String,
    pub models: Vec<ModelRecord>,
}

impl Category {
    /// Combines static category metadata with the extracted model rows.
    pub fn assemble(descriptor: &CategoryDescriptor, models: Vec<ModelRecord>) -> Self {
        Self {
            id: descriptor.id.to_string(),
            name: descriptor.name.to_string(),
            subtitle: descriptor.subtitle.to_string(),
            icon: descriptor.icon.to_string(),
            description: descriptor.description.to_string(),
            models,
        }
    }
}

/// Root of the generated JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub categories: Vec<Category>,
}
