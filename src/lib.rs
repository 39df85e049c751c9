//! landing-rs: a static renderer for block-driven marketing sites
//!
//! Pages are ordered lists of typed content blocks. Each block is dispatched
//! to a section renderer built from a small library of layout primitives,
//! and the result is written out as static HTML together with a blog.

pub mod commands;
pub mod config;
pub mod content;
pub mod dispatch;
pub mod generator;
pub mod helpers;
pub mod pages;
pub mod sections;
pub mod server;
pub mod ui;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Name of the site configuration file in the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// A site rooted at a directory
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Page records and posts
    pub content_dir: PathBuf,
    /// Generated output
    pub public_dir: PathBuf,
    /// Files copied verbatim into the output
    pub static_dir: PathBuf,
}

impl Site {
    /// Open the site in `base_dir`. A missing `_config.yml` means defaults.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            public_dir,
            static_dir,
        })
    }

    pub fn config_path(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Remove the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str, category: Option<&str>) -> Result<PathBuf> {
        commands::new::create_post(self, title, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_site_defaults_without_config() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.content_dir, dir.path().join("content"));
        assert_eq!(site.public_dir, dir.path().join("public"));
        assert_eq!(site.static_dir, dir.path().join("static"));
    }

    #[test]
    fn test_site_reads_config_dirs() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "title: Acme\npublic_dir: dist\ncontent_dir: data\n",
        )
        .unwrap();
        let site = Site::new(dir.path()).unwrap();
        assert_eq!(site.config.title, "Acme");
        assert_eq!(site.public_dir, dir.path().join("dist"));
        assert_eq!(site.content_dir, dir.path().join("data"));
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "title: [unclosed\n").unwrap();
        assert!(Site::new(dir.path()).is_err());
    }
}
