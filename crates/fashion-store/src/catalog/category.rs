//! Category tree from the category endpoint.
//!
//! The catalog is organized as departments (e.g., "Men") holding
//! sub-departments (e.g., "Shirts").

use crate::ids::CategoryId;
use crate::search::ALL_CATEGORIES;
use serde::{Deserialize, Deserializer, Serialize};

/// A category node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "CategoryRecord")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub sub_categories: Vec<Category>,
}

/// Wire shape of a category; `_id` wins over `id` when both are sent.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryRecord {
    #[serde(rename = "_id", default)]
    document_id: Option<CategoryId>,
    #[serde(default)]
    id: Option<CategoryId>,
    name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    sub_categories: Vec<Category>,
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Self {
            id: record.document_id.or(record.id).unwrap_or_default(),
            name: record.name,
            sub_categories: record.sub_categories,
        }
    }
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sub_categories: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: Category) -> Self {
        self.sub_categories.push(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.sub_categories.is_empty()
    }
}

/// The full set of departments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTree {
    roots: Vec<Category>,
}

impl CategoryTree {
    pub fn new(roots: Vec<Category>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[Category] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Depth-first walk yielding `(depth, category)`; departments are depth 0.
    pub fn walk(&self) -> Vec<(usize, &Category)> {
        fn visit<'a>(node: &'a Category, depth: usize, out: &mut Vec<(usize, &'a Category)>) {
            out.push((depth, node));
            for child in &node.sub_categories {
                visit(child, depth + 1, out);
            }
        }

        let mut out = Vec::new();
        for root in &self.roots {
            visit(root, 0, &mut out);
        }
        out
    }

    /// Options for the category selector: "All" followed by every node.
    pub fn selector_options(&self) -> Vec<String> {
        std::iter::once(ALL_CATEGORIES.to_string())
            .chain(self.walk().into_iter().map(|(_, c)| c.name.clone()))
            .collect()
    }
}

impl From<Vec<Category>> for CategoryTree {
    fn from(roots: Vec<Category>) -> Self {
        Self::new(roots)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Category>, D::Error> {
    Ok(Option::<Vec<Category>>::deserialize(deserializer)?.unwrap_or_default())
}
