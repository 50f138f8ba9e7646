//! Domain entities: core data structures

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Id of the element that receives the rendered rows.
pub const CONTAINER_ID: &str = "product-areas-tree";

/// Class marking the flat source elements that carry node attributes.
pub const MARKER_CLASS: &str = "product-area-data";

/// Class set on every rendered row.
pub const ROW_CLASS: &str = "tree-item";

/// Left indentation per depth level, in pixels.
pub const INDENT_PX: u32 = 20;

/// Text of the secondary video link.
pub const VIDEO_LABEL: &str = " (Video)";

pub const ATTR_DEPTH: &str = "data-depth";
pub const ATTR_NAME: &str = "data-name";
pub const ATTR_URL: &str = "data-url";
pub const ATTR_VIDEO_LINK: &str = "data-video-link";

/// What to do with a `data-depth` value that carries no leading integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthPolicy {
    /// Render the row at depth 0.
    #[default]
    Zero,
    /// Fail extraction with [`DomainError::InvalidDepth`].
    Reject,
}

impl std::str::FromStr for DepthPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" => Ok(DepthPolicy::Zero),
            "reject" => Ok(DepthPolicy::Reject),
            other => Err(format!("unknown depth policy {other:?} (expected zero or reject)")),
        }
    }
}

/// Raw attribute values of one marker element, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceElement {
    pub depth: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub video_link: Option<String>,
}

impl SourceElement {
    /// Depth with leading-integer semantics, `None` if malformed or missing.
    pub fn parsed_depth(&self) -> Option<u32> {
        self.depth.as_deref().and_then(parse_depth)
    }
}

/// One product area as read from the markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAreaNode {
    pub depth: u32,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_link: Option<String>,
}

impl ProductAreaNode {
    pub fn new(depth: u32, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            depth,
            name: name.into(),
            url: url.into(),
            video_link: None,
        }
    }

    pub fn with_video(mut self, video_link: impl Into<String>) -> Self {
        self.video_link = Some(video_link.into());
        self
    }

    /// Build a node from raw attributes.
    ///
    /// Missing `name`/`url` become empty strings. An empty `video_link` counts as absent.
    /// `index` is the element's position among the source elements, used for error reporting.
    pub fn from_source(
        index: usize,
        source: &SourceElement,
        policy: DepthPolicy,
    ) -> Result<Self, DomainError> {
        let depth = match (source.parsed_depth(), policy) {
            (Some(depth), _) => depth,
            (None, DepthPolicy::Zero) => 0,
            (None, DepthPolicy::Reject) => {
                return Err(DomainError::InvalidDepth {
                    index,
                    value: source.depth.clone(),
                })
            }
        };

        Ok(Self {
            depth,
            name: source.name.clone().unwrap_or_default(),
            url: source.url.clone().unwrap_or_default(),
            video_link: source.video_link.clone().filter(|v| !v.is_empty()),
        })
    }

    /// Left indentation in pixels.
    pub fn indent_px(&self) -> u32 {
        self.depth.saturating_mul(INDENT_PX)
    }
}

/// Parse a depth the way browsers parse a leading integer.
///
/// Leading whitespace and an optional sign are accepted, then decimal digits up to the
/// first non-digit. Negative values clamp to 0, values too large saturate.
/// Returns `None` when no digit follows.
pub fn parse_depth(raw: &str) -> Option<u32> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    if negative {
        return Some(0);
    }
    Some(digits[..end].parse::<u32>().unwrap_or(u32::MAX))
}
