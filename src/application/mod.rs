//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and depends on the document seam.

pub mod document;
pub mod error;
pub mod services;

pub use document::Document;
pub use error::{ApplicationError, ApplicationResult};
