//! Application services

pub mod markup;
pub mod page;
pub mod render;

pub use markup::MarkupService;
pub use page::Page;
pub use render::RenderService;
