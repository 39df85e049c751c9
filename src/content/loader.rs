//! Content loader - reads page records and blog posts from the content directory

use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::ContentError;
use super::{BlogPost, FrontMatter, MarkdownRenderer, Page};
use crate::helpers::{strip_html, truncate};
use crate::Site;

/// Extensions tried, in order, for a page record
const PAGE_EXTENSIONS: [&str; 3] = ["yml", "yaml", "json"];

const EXCERPT_LENGTH: usize = 160;

/// Everything the generator renders
#[derive(Debug, Clone, Default)]
pub struct SiteContent {
    pub homepage: Option<Page>,
    pub about: Option<Page>,
    /// Newest first
    pub posts: Vec<BlogPost>,
}

/// Loads content from the content directory
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    pub fn new(site: &'a Site) -> Self {
        let renderer = MarkdownRenderer::new(site.config.highlight.clone());
        Self { site, renderer }
    }

    /// Load the homepage, about page and all posts
    pub fn load_all(&self) -> Result<SiteContent> {
        Ok(SiteContent {
            homepage: self.load_page("homepage")?,
            about: self.load_page("about")?,
            posts: self.load_posts()?,
        })
    }

    /// Load `<content_dir>/<name>.{yml,yaml,json}`. A missing file is `None`.
    pub fn load_page(&self, name: &str) -> Result<Option<Page>> {
        let Some(path) = self.find_page_file(name) else {
            tracing::debug!("No {} page in {:?}", name, self.site.content_dir);
            return Ok(None);
        };

        let page = parse_page(&path)?;
        for id in page.duplicate_block_ids() {
            tracing::warn!("Duplicate block id {:?} in {:?}", id, path);
        }
        tracing::debug!("Loaded {} page with {} blocks", name, page.blocks.len());
        Ok(Some(page))
    }

    fn find_page_file(&self, name: &str) -> Option<PathBuf> {
        PAGE_EXTENSIONS
            .iter()
            .map(|ext| self.site.content_dir.join(format!("{}.{}", name, ext)))
            .find(|p| p.is_file())
    }

    /// Load all published posts from `<content_dir>/posts`, newest first
    pub fn load_posts(&self) -> Result<Vec<BlogPost>> {
        let posts_dir = self.site.content_dir.join("posts");
        if !posts_dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&posts_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }
            match self.load_post(path) {
                Ok(Some(post)) => posts.push(post),
                Ok(None) => tracing::debug!("Skipping unpublished post {:?}", path),
                Err(e) => tracing::warn!("Failed to load post {:?}: {:#}", path, e),
            }
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
        BlogPost::link_neighbours(&mut posts);

        Ok(posts)
    }

    /// Load one post; `None` when it is not published
    fn load_post(&self, path: &Path) -> Result<Option<BlogPost>> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        if !fm.published {
            return Ok(None);
        }

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        let date = match fm.parse_date() {
            Some(date) => date,
            None => fs::metadata(path)?
                .modified()
                .map(chrono::DateTime::<Local>::from)
                .unwrap_or_else(|_| Local::now()),
        };

        let (excerpt_md, full_md) = MarkdownRenderer::split_excerpt(body);
        let html = self.renderer.render(&full_md);
        let excerpt = match (fm.excerpt, excerpt_md) {
            (Some(excerpt), _) => excerpt,
            (None, Some(md)) => plain_text(&self.renderer.render(md)),
            (None, None) => truncate(&plain_text(&html), EXCERPT_LENGTH, None),
        };

        // the slug becomes an output directory, so it is always slugified
        let slug = match fm.slug {
            Some(requested) => {
                let slug = slug::slugify(&requested);
                if slug != requested {
                    tracing::warn!("Post {:?}: slug {:?} used as {:?}", path, requested, slug);
                }
                slug
            }
            None => slug::slugify(&stem),
        };
        if slug.is_empty() {
            anyhow::bail!("Cannot derive a slug for {:?}", path);
        }

        Ok(Some(BlogPost {
            id: fm.id.unwrap_or_else(|| slug.clone()),
            title: fm.title.unwrap_or(stem),
            slug,
            excerpt,
            category: fm
                .category
                .unwrap_or_else(|| self.site.config.default_category.clone()),
            date,
            html,
            image: fm.image,
            author: fm.author,
            next: None,
            previous: None,
        }))
    }
}

/// Parse a page record, picking the format from the extension
pub fn parse_page(path: &Path) -> Result<Page> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let parsed = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content).map_err(|e| e.to_string()),
        _ => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| {
        ContentError::Parse {
            path: path.to_path_buf(),
            message,
        }
        .into()
    })
}

fn plain_text(html: &str) -> String {
    strip_html(html).split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::BlockBody;
    use tempfile::TempDir;

    fn site_in(dir: &TempDir) -> Site {
        Site::new(dir.path()).unwrap()
    }

    fn write(dir: &TempDir, rel: &str, content: &str) {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_load_missing_page() {
        let dir = TempDir::new().unwrap();
        let site = site_in(&dir);
        let loader = ContentLoader::new(&site);
        assert!(loader.load_page("about").unwrap().is_none());
        assert!(loader.load_posts().unwrap().is_empty());
    }

    #[test]
    fn test_load_about_yaml() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "content/about.yml",
            r#"
id: about
title: About
description: Who we are
blocks:
  - id: hero
    blocktype: AboutHero
    heading: We build things
  - id: mystery
    blocktype: Carousel
"#,
        );
        let site = site_in(&dir);
        let page = ContentLoader::new(&site).load_page("about").unwrap().unwrap();
        assert_eq!(page.title, "About");
        assert_eq!(page.blocks.len(), 2);
        assert!(matches!(page.blocks[1].body, BlockBody::Unknown { .. }));
    }

    #[test]
    fn test_load_homepage_json() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "content/homepage.json",
            r#"{"title": "Home", "content": [{"id": "1", "blocktype": "hero", "heading": "Hi"}]}"#,
        );
        let site = site_in(&dir);
        let page = ContentLoader::new(&site)
            .load_page("homepage")
            .unwrap()
            .unwrap();
        assert!(matches!(page.blocks[0].body, BlockBody::Hero(_)));
    }

    #[test]
    fn test_invalid_page_is_error() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "content/about.yml",
            "title: About\nblocks:\n  - id: x\n    blocktype: ''\n",
        );
        let site = site_in(&dir);
        assert!(ContentLoader::new(&site).load_page("about").is_err());
    }

    #[test]
    fn test_load_posts_sorted_and_linked() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "content/posts/first.md",
            "---\ntitle: First\ndate: 2024-01-01\n---\n\nHello <!-- more --> world.\n",
        );
        write(
            &dir,
            "content/posts/second-post.md",
            "---\ntitle: Second\ndate: 2024-02-01\ncategory: Featured\nexcerpt: Custom\n---\n\nBody.\n",
        );
        write(
            &dir,
            "content/posts/draft.md",
            "---\ntitle: Draft\npublished: false\n---\n\nSecret.\n",
        );
        write(&dir, "content/posts/broken.md", "---\ntitle: [oops\n---\n");

        let site = site_in(&dir);
        let posts = ContentLoader::new(&site).load_posts().unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "second-post");
        assert_eq!(posts[0].category, "Featured");
        assert_eq!(posts[0].excerpt, "Custom");
        assert_eq!(posts[0].previous.as_ref().unwrap().slug, "first");
        assert_eq!(posts[1].category, site.config.default_category);
        assert_eq!(posts[1].excerpt, "Hello");
        assert_eq!(posts[1].next.as_ref().unwrap().title, "Second");
        assert!(posts[1].html.contains("world."));
    }

    #[test]
    fn test_post_slug_cannot_leave_blog_dir() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "content/posts/escape.md",
            "---\ntitle: Escape\nslug: ../../../escaped\n---\n\nBody.\n",
        );
        write(
            &dir,
            "content/posts/nested.md",
            "---\ntitle: Nested\nslug: a/b\n---\n\nBody.\n",
        );
        write(&dir, "content/posts/???.md", "---\ntitle: Nothing\n---\n\nBody.\n");

        let site = site_in(&dir);
        let posts = ContentLoader::new(&site).load_posts().unwrap();

        let mut slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort();
        assert_eq!(slugs, vec!["a-b", "escaped"]);
        assert!(posts
            .iter()
            .all(|p| !p.slug.contains('/') && !p.slug.contains("..")));
    }
}
