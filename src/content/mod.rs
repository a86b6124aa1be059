//! Content module - loads posts and renders their bodies

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::{parse_date_string, FrontMatter};
pub use loader::PostLoader;
pub use markdown::MarkdownRenderer;
pub use post::{GalleryImage, Post, PostMeta};

/// The only file extension recognised as a post
pub const POST_EXTENSION: &str = "md";
