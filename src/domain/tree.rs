//! Serialized product-area trees, as exported by the hosting application
//!
//! Only the markup producer uses this; the renderer works on flat nodes.

use serde::{Deserialize, Serialize};

use crate::domain::entities::ProductAreaNode;
use crate::domain::error::DomainError;

/// Nested product area with its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaTree {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub video_link: Option<String>,
    #[serde(default)]
    pub children: Vec<AreaTree>,
}

/// Either a single root or a forest.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AreaForest {
    Many(Vec<AreaTree>),
    One(AreaTree),
}

impl AreaForest {
    pub fn into_roots(self) -> Vec<AreaTree> {
        match self {
            AreaForest::Many(roots) => roots,
            AreaForest::One(root) => vec![root],
        }
    }
}

/// Parse a serialized tree from JSON.
pub fn parse_forest(json: &str) -> Result<Vec<AreaTree>, DomainError> {
    serde_json::from_str::<AreaForest>(json)
        .map(AreaForest::into_roots)
        .map_err(|e| DomainError::InvalidTree {
            message: e.to_string(),
        })
}

/// Flatten roots pre-order, roots at depth 0.
///
/// A node without `url` gets `url_template` with `{id}` replaced, or an empty url when it
/// has no id either.
pub fn flatten(roots: &[AreaTree], url_template: &str) -> Vec<ProductAreaNode> {
    let mut out = Vec::new();
    let mut stack: Vec<(&AreaTree, u32)> = roots.iter().rev().map(|r| (r, 0)).collect();

    while let Some((tree, depth)) = stack.pop() {
        let url = match (&tree.url, tree.id) {
            (Some(url), _) => url.clone(),
            (None, Some(id)) => url_template.replace("{id}", &id.to_string()),
            (None, None) => String::new(),
        };
        out.push(ProductAreaNode {
            depth,
            name: tree.name.clone(),
            url,
            video_link: tree.video_link.clone().filter(|v| !v.is_empty()),
        });
        stack.extend(tree.children.iter().rev().map(|c| (c, depth + 1)));
    }

    out
}
