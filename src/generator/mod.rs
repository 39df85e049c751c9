//! Generator module - writes the rendered pages and static files to the public directory

use anyhow::{anyhow, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::content::SiteContent;
use crate::dispatch::{DispatchObserver, TracingObserver};
use crate::pages::{self, PageView};
use crate::ui::RenderContext;
use crate::Site;

/// Static site generator
pub struct Generator<'a, O: DispatchObserver = TracingObserver> {
    site: &'a Site,
    observer: &'a O,
}

impl<'a> Generator<'a> {
    /// Create a generator reporting unknown blocks through `tracing`
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            observer: &TracingObserver,
        }
    }
}

impl<'a, O: DispatchObserver> Generator<'a, O> {
    pub fn with_observer(site: &'a Site, observer: &'a O) -> Self {
        Self { site, observer }
    }

    /// Generate the entire site. Returns the written HTML files.
    pub fn generate(&self, content: &SiteContent) -> Result<Vec<PathBuf>> {
        let public_dir = &self.site.public_dir;
        fs::create_dir_all(public_dir)?;

        self.copy_static_files()?;

        let cx = RenderContext::new(&self.site.config);
        let mut written = Vec::new();

        if let Some(page) = &content.homepage {
            let view = pages::homepage(page, cx, self.observer);
            written.push(self.write_page("", &view, &cx)?);
        }

        if let Some(page) = &content.about {
            let view = pages::about(page, cx, self.observer);
            written.push(self.write_page("about", &view, &cx)?);
        }

        let blog_dir = self.site.config.blog_dir.trim_matches('/');
        let index = pages::blog_index(&content.posts, &cx);
        written.push(self.write_page(blog_dir, &index, &cx)?);

        for post in &content.posts {
            let view = pages::blog_post(post, &cx);
            written.push(self.write_page(&cx.post_route(&post.slug), &view, &cx)?);
        }

        tracing::info!(
            "Generated {} pages ({} posts)",
            written.len(),
            content.posts.len()
        );
        Ok(written)
    }

    /// Write `<public>/<route>/index.html`
    fn write_page(&self, route: &str, view: &PageView, cx: &RenderContext) -> Result<PathBuf> {
        let route = route.trim_matches('/');
        if !Path::new(route)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(anyhow!("Refusing to write outside the public dir: {:?}", route));
        }
        let dir = if route.is_empty() {
            self.site.public_dir.clone()
        } else {
            self.site.public_dir.join(route)
        };
        fs::create_dir_all(&dir)
            .map_err(|e| anyhow!("Failed to create dir {:?}: {}", dir, e))?;

        let output_path = dir.join("index.html");
        fs::write(&output_path, view.render(cx))
            .map_err(|e| anyhow!("Failed to write {:?}: {}", output_path, e))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(output_path)
    }

    /// Copy the static directory verbatim into the public directory
    fn copy_static_files(&self) -> Result<()> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        let mut copied = 0;
        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || is_hidden(path, static_dir) {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            let dest = self.site.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
            copied += 1;
        }

        tracing::debug!("Copied {} static files", copied);
        Ok(())
    }
}

/// Dotfiles and files inside dot-directories
fn is_hidden(path: &Path, root: &Path) -> bool {
    path.strip_prefix(root)
        .map(|rel| {
            rel.components()
                .any(|c| c.as_os_str().to_string_lossy().starts_with('.'))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentLoader;
    use crate::dispatch::RecordingObserver;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn sample_site() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "_config.yml", "title: Acme\nroot: /\n");
        write(
            dir.path(),
            "content/homepage.yml",
            r#"
title: Acme
blocks:
  - id: hero
    blocktype: HomepageHero
    heading: Build with Acme
  - id: mystery
    blocktype: HomepageTestimonialList
"#,
        );
        write(
            dir.path(),
            "content/about.json",
            r#"{"title": "About", "blocks": [{"id": "h", "blocktype": "AboutHero", "heading": "Our story"}]}"#,
        );
        write(
            dir.path(),
            "content/posts/launch.md",
            "---\ntitle: Launch\ndate: 2024-05-01\ncategory: Featured\n---\n\nWe launched.\n",
        );
        write(dir.path(), "static/css/style.css", "body {}");
        write(dir.path(), "static/.DS_Store", "");
        dir
    }

    #[test]
    fn test_generate_writes_all_pages() {
        let dir = sample_site();
        let site = Site::new(dir.path()).unwrap();
        let content = ContentLoader::new(&site).load_all().unwrap();
        let observer = RecordingObserver::new();

        let written = Generator::with_observer(&site, &observer)
            .generate(&content)
            .unwrap();
        assert_eq!(written.len(), 4);

        let public = dir.path().join("public");
        let home = fs::read_to_string(public.join("index.html")).unwrap();
        assert!(home.contains("Build with Acme"));
        assert!(home.contains("<title>Acme</title>"));

        let about = fs::read_to_string(public.join("about/index.html")).unwrap();
        assert!(about.contains("Our story"));

        let index = fs::read_to_string(public.join("blog/index.html")).unwrap();
        assert!(index.contains(r#"href="/blog/launch/""#));

        let post = fs::read_to_string(public.join("blog/launch/index.html")).unwrap();
        assert!(post.contains("<p>We launched.</p>"));

        assert!(public.join("css/style.css").exists());
        assert!(!public.join(".DS_Store").exists());

        let unresolved = observer.into_unresolved();
        assert_eq!(unresolved.len(), 1);
        assert_eq!(unresolved[0].id, "mystery");
    }

    #[test]
    fn test_bad_block_is_reported_and_skipped() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "content/homepage.yml",
            r#"
title: Home
content:
  - id: top
    blocktype: hero
    heading: Top hero
  - id: signup
    blocktype: call-to-action
    kicker: Join
  - id: bottom
    blocktype: hero
    heading: Bottom hero
"#,
        );
        let site = Site::new(dir.path()).unwrap();
        let content = ContentLoader::new(&site).load_all().unwrap();
        let observer = RecordingObserver::new();
        Generator::with_observer(&site, &observer)
            .generate(&content)
            .unwrap();

        let home = fs::read_to_string(dir.path().join("public/index.html")).unwrap();
        assert!(home.find("Top hero").unwrap() < home.find("Bottom hero").unwrap());

        let unresolved = observer.into_unresolved();
        assert_eq!(unresolved.len(), 1);
        assert_eq!(unresolved[0].id, "signup");
        assert!(unresolved[0].error.is_some());
    }

    #[test]
    fn test_write_page_stays_in_public_dir() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        let config = site.config.clone();
        let cx = RenderContext::new(&config);
        let view = PageView::new(crate::pages::PageMeta::new("x"), crate::ui::View::Empty);

        let generator = Generator::new(&site);
        assert!(generator.write_page("blog/../../escaped", &view, &cx).is_err());
        assert!(!dir.path().join("escaped").exists());
        assert!(generator.write_page("blog/ok/", &view, &cx).is_ok());
    }

    #[test]
    fn test_generate_without_pages_still_writes_blog_index() {
        let dir = TempDir::new().unwrap();
        let site = Site::new(dir.path()).unwrap();
        let written = Generator::new(&site)
            .generate(&SiteContent::default())
            .unwrap();
        assert_eq!(written, vec![dir.path().join("public/blog/index.html")]);
    }
}
