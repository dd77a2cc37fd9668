//! Content module - post metadata, bodies, and Markdown conversion

mod body;
mod markdown;
mod metadata;
mod post;
pub mod store;

pub use body::PostBody;
pub use markdown::MarkdownRenderer;
pub use metadata::PostMetadata;
pub use post::Post;
