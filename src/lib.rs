//! areatree: render flat product-area markup into an indented tree container.
//!
//! Source elements marked with `product-area-data` carry a depth, a name, a url and an
//! optional video link. Each becomes one `div.tree-item` row inside `#product-areas-tree`,
//! indented by `depth * 20px`, in document order.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
