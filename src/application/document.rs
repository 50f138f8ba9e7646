//! Document seam: where source elements come from and where rows go

use crate::domain::{MountPoint, SourceElement};

/// A loaded document the renderer can read from and write into.
pub trait Document {
    /// All marker elements, in document order.
    fn source_elements(&self) -> Vec<SourceElement>;

    /// The element with the given id as a mount point, if present.
    fn mount_point(&mut self, id: &str) -> Option<&mut dyn MountPoint>;
}
