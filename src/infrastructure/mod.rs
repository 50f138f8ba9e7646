//! Infrastructure layer: I/O implementations and DI container
//!
//! This layer implements the document and filesystem seams and wires up services.

pub mod di;
pub mod error;
pub mod html;
pub mod traits;

pub use error::{InfraError, InfraResult};
pub use html::HtmlDocument;
