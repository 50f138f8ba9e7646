//! Rendered row model and its HTML form

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::domain::entities::{ProductAreaNode, ROW_CLASS, VIDEO_LABEL};

/// A hyperlink inside a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub href: String,
    /// Opens in a new browsing context (`target="_blank"`)
    pub opens_new_context: bool,
}

/// One visual row: an indented block with a primary link and an optional video link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub indent_px: u32,
    pub primary: Link,
    pub video: Option<Link>,
}

impl Row {
    pub fn from_node(node: &ProductAreaNode) -> Self {
        Self {
            indent_px: node.indent_px(),
            primary: Link {
                text: node.name.clone(),
                href: node.url.clone(),
                opens_new_context: false,
            },
            video: node.video_link.as_ref().map(|href| Link {
                text: VIDEO_LABEL.to_string(),
                href: href.clone(),
                opens_new_context: true,
            }),
        }
    }

    /// Links in append order.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        std::iter::once(&self.primary).chain(self.video.iter())
    }

    /// Serialize as a `div.tree-item` element.
    pub fn to_html(&self) -> String {
        let mut out = format!(
            r#"<div class="{}" style="margin-left: {}px;">"#,
            ROW_CLASS, self.indent_px
        );
        for link in self.links() {
            link.write_html(&mut out);
        }
        out.push_str("</div>");
        out
    }
}

impl Link {
    fn write_html(&self, out: &mut String) {
        let _ = write!(out, r#"<a href="{}""#, encode_double_quoted_attribute(&self.href));
        if self.opens_new_context {
            out.push_str(r#" target="_blank""#);
        }
        let _ = write!(out, ">{}</a>", encode_text(&self.text));
    }
}
