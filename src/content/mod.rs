//! Content module - block-driven pages, blog posts and their loading

mod block;
pub mod blocks;
mod error;
mod frontmatter;
pub mod loader;
mod markdown;
mod model;
mod page;
mod post;

pub use block::{BlockBody, BlockKind, ContentBlock};
pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use loader::{ContentLoader, SiteContent};
pub use markdown::MarkdownRenderer;
pub use model::{HomepageImage, HomepageLink, ImageData};
pub use page::Page;
pub use post::{BlogAuthor, BlogPost, PostLink};
