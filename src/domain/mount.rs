//! Mount point seam between the renderer and whatever holds the rows

use crate::domain::row::Row;

/// Container that receives rendered rows.
pub trait MountPoint {
    /// Remove all existing content.
    fn clear(&mut self);

    /// Append a row after the existing ones.
    fn append(&mut self, row: Row);
}

/// In-memory mount point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowBuffer {
    rows: Vec<Row>,
    cleared: bool,
}

impl RowBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Whether the buffer has been cleared at least once, i.e. a render replaced its content.
    pub fn was_cleared(&self) -> bool {
        self.cleared
    }

    /// Concatenated row HTML.
    pub fn to_html(&self) -> String {
        self.rows.iter().map(Row::to_html).collect()
    }
}

impl MountPoint for RowBuffer {
    fn clear(&mut self) {
        self.rows.clear();
        self.cleared = true;
    }

    fn append(&mut self, row: Row) {
        self.rows.push(row);
    }
}
