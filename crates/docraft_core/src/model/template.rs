//! Read-only template catalog entries and their filter.

use serde::{Deserialize, Serialize};

/// Immutable catalog entry; never persisted by this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub image_preview: String,
    pub license: String,
    pub created_at: String,
}

/// Catalog filter. Absent or empty predicates impose no restriction;
/// present predicates combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFilter {
    /// Keep templates whose category is in this set.
    pub categories: Vec<String>,
    /// Case-insensitive match against name, description, or category.
    pub keyword: Option<String>,
}

impl TemplateFilter {
    /// Filter that keeps everything.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn by_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
            keyword: None,
        }
    }

    pub fn by_keyword(keyword: impl Into<String>) -> Self {
        Self {
            categories: Vec::new(),
            keyword: Some(keyword.into()),
        }
    }
}
