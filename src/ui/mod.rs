//! Layout primitives
//!
//! A small, closed vocabulary of stateless building blocks. Each primitive
//! takes a fixed set of token-valued options plus its children and returns a
//! [`View`]. Nothing here holds state or performs I/O.

mod layout;
mod links;
mod media;
mod tokens;
mod typography;
mod view;

pub use layout::*;
pub use links::*;
pub use media::*;
pub use tokens::*;
pub use typography::*;
pub use view::{ElementView, IntoView, View};

use chrono::{DateTime, Local};

use crate::config::SiteConfig;
use crate::helpers::{format_date, full_url_for, url_for};

/// Site-wide values the renderers need: URL root, blog location, date format
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    config: &'a SiteConfig,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a SiteConfig {
        self.config
    }

    /// Resolve a link target. Absolute URLs and fragments pass through.
    pub fn href(&self, href: &str) -> String {
        if is_absolute_url(href) || href.starts_with('#') {
            href.to_string()
        } else {
            url_for(self.config, href)
        }
    }

    /// Like [`href`](Self::href), but with the site's scheme and host
    pub fn absolute_url(&self, href: &str) -> String {
        if is_absolute_url(href) {
            href.to_string()
        } else {
            full_url_for(self.config, href)
        }
    }

    /// Site-relative route of a blog post, suitable for [`href`](Self::href)
    pub fn post_route(&self, slug: &str) -> String {
        format!("{}/{}/", self.config.blog_dir.trim_matches('/'), slug)
    }

    /// Path of the blog index
    pub fn blog_path(&self) -> String {
        url_for(self.config, &format!("{}/", self.config.blog_dir.trim_matches('/')))
    }

    /// Path of a blog post
    pub fn post_path(&self, slug: &str) -> String {
        url_for(self.config, &self.post_route(slug))
    }

    pub fn format_date(&self, date: &DateTime<Local>) -> String {
        format_date(date, &self.config.date_format)
    }
}
