//! Read-only catalogs: content templates and document specification kinds.
//!
//! # Responsibility
//! - Serve the fixed template list, its category list and the object spec
//!   list, with keyword/category filtering.
//!
//! # Invariants
//! - Catalog data is static; nothing here touches the persistent store.
//! - The synthetic blank template is always first in any template listing.

use crate::model::object::ObjectSpec;
use crate::model::template::{Template, TemplateFilter};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Fixed, ordered category names.
pub const TEMPLATE_CATEGORIES: [&str; 3] = ["Cat1", "Cat2", "Cat3"];

static TEMPLATES: Lazy<Vec<Template>> = Lazy::new(builtin_templates);

/// Read-only access to the static catalogs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateCatalog;

impl TemplateCatalog {
    pub fn new() -> Self {
        Self
    }

    /// The fixed category list, in catalog order.
    pub fn categories(&self) -> Vec<String> {
        TEMPLATE_CATEGORIES.iter().map(|name| name.to_string()).collect()
    }

    /// Templates passing `filter`, with the blank template prepended.
    ///
    /// Keyword matching is case-insensitive over name, description and
    /// category; a keyword that is not a valid pattern is matched literally.
    pub fn templates(&self, filter: &TemplateFilter) -> Vec<Template> {
        let keyword = filter
            .keyword
            .as_deref()
            .filter(|keyword| !keyword.is_empty())
            .map(keyword_pattern);

        let mut result = vec![blank_template()];
        result.extend(
            TEMPLATES
                .iter()
                .filter(|template| {
                    let category_ok = filter.categories.is_empty()
                        || filter.categories.iter().any(|c| *c == template.category);
                    let keyword_ok = keyword.as_ref().map_or(true, |re| {
                        re.is_match(&template.name)
                            || re.is_match(&template.description)
                            || re.is_match(&template.category)
                    });
                    category_ok && keyword_ok
                })
                .cloned(),
        );
        result
    }

    /// Fixed list of document specification kinds.
    pub fn object_specs(&self) -> Vec<ObjectSpec> {
        [
            ("rea", "Open educational resource"),
            ("obi", "Informative object"),
            ("red", "Digital resource"),
        ]
        .into_iter()
        .map(|(id, name)| ObjectSpec {
            id: id.to_string(),
            name: name.to_string(),
        })
        .collect()
    }
}

fn keyword_pattern(keyword: &str) -> Regex {
    RegexBuilder::new(keyword)
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|_| {
            RegexBuilder::new(&regex::escape(keyword))
                .case_insensitive(true)
                .build()
                .expect("escaped keyword is a valid pattern")
        })
}

/// Synthetic entry for starting from scratch; not part of the static list.
fn blank_template() -> Template {
    Template {
        id: "0".to_string(),
        name: "Blank".to_string(),
        category: String::new(),
        description: "Blank template".to_string(),
        image_preview: String::new(),
        license: "GPL".to_string(),
        created_at: String::new(),
    }
}

fn builtin_templates() -> Vec<Template> {
    const LOREM_SHORT: &str = "Lorem Ipsum is simply dummy text of the printing and typesetting \
         industry. Lorem Ipsum has been the industry's standard dummy text ever since the 1500s.";
    const LOREM_LONG: &str = "It is a long established fact that a reader will be distracted by \
         the readable content of a page when looking at its layout. The point of using Lorem \
         Ipsum is that it has a more-or-less normal distribution of letters.";

    let entries = [
        ("1", "Lorem 1", "Cat1", LOREM_SHORT, "12/02/2020"),
        ("2", "Lorem 2", "Cat2", LOREM_SHORT, "12/02/2020"),
        ("4", "Lorem 4", "Cat3", LOREM_SHORT, "13/08/2019"),
        ("5", "Lorem 5", "Cat3", LOREM_LONG, "15/12/2007"),
    ];

    entries
        .into_iter()
        .map(|(id, name, category, description, created_at)| Template {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            image_preview: "https://picsum.photos/400/100".to_string(),
            license: "GPL".to_string(),
            created_at: created_at.to_string(),
        })
        .collect()
}
