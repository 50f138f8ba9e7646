//! Domain layer: entities and the render algorithm
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod mount;
pub mod renderer;
pub mod row;
pub mod tree;

pub use entities::*;
pub use error::DomainError;
pub use mount::{MountPoint, RowBuffer};
pub use renderer::{render, RenderOutcome};
pub use row::{Link, Row};
pub use tree::{flatten, parse_forest, AreaTree};
