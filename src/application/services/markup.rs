//! Source markup producer
//!
//! Turns an exported product-area tree into the flat marker elements the renderer reads.

use html_escape::encode_double_quoted_attribute;
use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::domain::{
    flatten, parse_forest, ProductAreaNode, ATTR_DEPTH, ATTR_NAME, ATTR_URL, ATTR_VIDEO_LINK,
    CONTAINER_ID, MARKER_CLASS,
};

/// Service producing marker markup from serialized trees.
#[derive(Debug, Clone)]
pub struct MarkupService {
    url_template: String,
}

impl MarkupService {
    /// Create a markup service; `url_template` fills missing urls (`{id}` placeholder).
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
        }
    }

    /// Parse a JSON tree (one root or an array of roots) into flat nodes, pre-order.
    #[instrument(skip(self, json))]
    pub fn nodes_from_json(&self, json: &str) -> ApplicationResult<Vec<ProductAreaNode>> {
        let roots = parse_forest(json)?;
        let nodes = flatten(&roots, &self.url_template);
        debug!("flattened {} roots into {} nodes", roots.len(), nodes.len());
        Ok(nodes)
    }

    /// One marker element per node, one per line.
    ///
    /// With `with_container`, an empty tree container follows the markers.
    pub fn markup(&self, nodes: &[ProductAreaNode], with_container: bool) -> String {
        let mut out = String::new();
        for node in nodes {
            out.push_str(&marker_element(node));
            out.push('\n');
        }
        if with_container {
            out.push_str(&format!("<div id=\"{}\"></div>\n", CONTAINER_ID));
        }
        out
    }

    /// Convenience: JSON tree straight to markup.
    pub fn render_json(&self, json: &str, with_container: bool) -> ApplicationResult<String> {
        let nodes = self.nodes_from_json(json)?;
        Ok(self.markup(&nodes, with_container))
    }
}

fn marker_element(node: &ProductAreaNode) -> String {
    let mut out = format!(
        r#"<div class="{}" {}="{}" {}="{}" {}="{}""#,
        MARKER_CLASS,
        ATTR_DEPTH,
        node.depth,
        ATTR_NAME,
        encode_double_quoted_attribute(&node.name),
        ATTR_URL,
        encode_double_quoted_attribute(&node.url),
    );
    if let Some(video) = &node.video_link {
        out.push_str(&format!(r#" {}="{}""#, ATTR_VIDEO_LINK, encode_double_quoted_attribute(video)));
    }
    out.push_str(" hidden></div>");
    out
}
