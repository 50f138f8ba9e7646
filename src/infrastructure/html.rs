//! HTML document backed by scraper
//!
//! The parsed tree stays untouched while rendering. Rows appended to a mount point are kept
//! per container id; [`HtmlDocument::to_html`] writes them into a copy of the tree.

use std::collections::BTreeMap;

use scraper::node::Comment;
use scraper::{Html, Node, Selector};
use tracing::{debug, trace};

use crate::application::Document;
use crate::domain::{
    DomainError, MountPoint, RowBuffer, SourceElement, ATTR_DEPTH, ATTR_NAME, ATTR_URL,
    ATTR_VIDEO_LINK, MARKER_CLASS,
};

/// Rows pending for one container element.
#[derive(Debug)]
struct Mounted {
    selector: Selector,
    rows: RowBuffer,
}

/// A parsed HTML page.
pub struct HtmlDocument {
    source: String,
    html: Html,
    marker: Selector,
    mounts: BTreeMap<String, Mounted>,
}

impl std::fmt::Debug for HtmlDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlDocument")
            .field("source_len", &self.source.len())
            .field("mounts", &self.mounts.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl HtmlDocument {
    /// Parse a full HTML document.
    pub fn parse(source: impl Into<String>) -> Result<Self, DomainError> {
        let source = source.into();
        let html = Html::parse_document(&source);
        let marker = css(&format!(".{}", MARKER_CLASS))?;
        debug!("parsed document: {} bytes", source.len());
        Ok(Self {
            source,
            html,
            marker,
            mounts: BTreeMap::new(),
        })
    }

    /// Rows currently held by the container with this id, if it was used as a mount point.
    pub fn mounted_rows(&self, id: &str) -> Option<&RowBuffer> {
        self.mounts.get(id).map(|m| &m.rows)
    }

    /// Serialize the document with every rendered container's content replaced.
    ///
    /// Returns the source unchanged when nothing was rendered.
    pub fn to_html(&self) -> String {
        let rendered: Vec<_> = self
            .mounts
            .iter()
            .filter(|(_, m)| m.rows.was_cleared())
            .collect();
        if rendered.is_empty() {
            return self.source.clone();
        }

        // Each container gets a comment slot in a copy of the tree; the slot text does not
        // occur anywhere in the page, so only the container's own slot is replaced.
        let page = self.html.html();
        let mut html = self.html.clone();
        let mut slots = Vec::with_capacity(rendered.len());
        for (id, mounted) in rendered {
            let Some(node_id) = html.select(&mounted.selector).next().map(|el| el.id()) else {
                continue;
            };
            let Some(mut container) = html.tree.get_mut(node_id) else {
                continue;
            };
            while let Some(mut child) = container.first_child() {
                child.detach();
            }
            let slot = unique_slot(&page, id);
            container.append(Node::Comment(Comment {
                comment: slot.as_str().into(),
            }));
            trace!("mount #{}: {} rows", id, mounted.rows.rows().len());
            slots.push((format!("<!--{}-->", slot), mounted.rows.to_html()));
        }

        let mut out = html.html();
        for (slot, rows) in slots {
            out = out.replacen(&slot, &rows, 1);
        }
        out
    }
}

impl Document for HtmlDocument {
    fn source_elements(&self) -> Vec<SourceElement> {
        self.html
            .select(&self.marker)
            .map(|el| {
                let value = el.value();
                let attr = |name: &str| value.attr(name).map(str::to_string);
                SourceElement {
                    depth: attr(ATTR_DEPTH),
                    name: attr(ATTR_NAME),
                    url: attr(ATTR_URL),
                    video_link: attr(ATTR_VIDEO_LINK),
                }
            })
            .collect()
    }

    fn mount_point(&mut self, id: &str) -> Option<&mut dyn MountPoint> {
        if !self.mounts.contains_key(id) {
            let selector = css(&id_selector(id)).ok()?;
            self.html.select(&selector).next()?;
            self.mounts.insert(
                id.to_string(),
                Mounted {
                    selector,
                    rows: RowBuffer::new(),
                },
            );
        }
        self.mounts
            .get_mut(id)
            .map(|m| &mut m.rows as &mut dyn MountPoint)
    }
}

fn css(selector: &str) -> Result<Selector, DomainError> {
    Selector::parse(selector).map_err(|e| DomainError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

fn id_selector(id: &str) -> String {
    format!("[id=\"{}\"]", id.replace('\\', "\\\\").replace('"', "\\\""))
}

fn unique_slot(page: &str, id: &str) -> String {
    let mut slot = format!("areatree-rows:{}", id);
    while page.contains(&slot) {
        slot.push('~');
    }
    slot
}
