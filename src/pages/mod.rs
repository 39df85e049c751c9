//! Page templates
//!
//! Each template turns loaded content into a [`PageView`]; the chrome in
//! [`layout`] wraps it into a full HTML document.

mod blocks;
mod blog_index;
mod blog_post;
pub mod layout;

pub use blocks::{about, block_page, homepage};
pub use blog_index::{blog_index, post_card, post_card_small};
pub use blog_post::blog_post;
pub use layout::{PageMeta, PageView};
