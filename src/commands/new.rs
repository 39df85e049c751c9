//! Create a new blog post

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::Site;

/// Front-matter written for a fresh post
#[derive(Serialize)]
struct NewPost<'a> {
    title: &'a str,
    date: String,
    category: &'a str,
}

/// Create `<content_dir>/posts/<slug>.md`. Fails if the file already exists.
pub fn create_post(site: &Site, title: &str, category: Option<&str>) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a file name from title {:?}", title);
    }

    let posts_dir = site.content_dir.join("posts");
    fs::create_dir_all(&posts_dir)?;

    let file_path = posts_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let front_matter = serde_yaml::to_string(&NewPost {
        title,
        date: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        category: category.unwrap_or(&site.config.default_category),
    })?;
    fs::write(&file_path, format!("---\n{}---\n", front_matter))?;

    tracing::info!("Created: {:?}", file_path);
    Ok(file_path)
}
