//! Flat tree rendering: one indented row per node, in input order

use crate::domain::entities::ProductAreaNode;
use crate::domain::mount::MountPoint;
use crate::domain::row::Row;

/// Result of a single render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Container content was replaced by `rows` rows.
    Rendered { rows: usize },
    /// No container; nothing was touched.
    ContainerMissing,
}

impl RenderOutcome {
    pub fn rows(&self) -> usize {
        match self {
            RenderOutcome::Rendered { rows } => *rows,
            RenderOutcome::ContainerMissing => 0,
        }
    }
}

/// Replace the content of `mount` with one row per node.
///
/// Depth only drives indentation; no nesting, sorting or grouping happens.
pub fn render(nodes: &[ProductAreaNode], mount: Option<&mut dyn MountPoint>) -> RenderOutcome {
    let Some(mount) = mount else {
        return RenderOutcome::ContainerMissing;
    };

    mount.clear();
    for node in nodes {
        mount.append(Row::from_node(node));
    }
    RenderOutcome::Rendered { rows: nodes.len() }
}
