//! List site content

use anyhow::Result;

use crate::content::{BlockBody, BlockKind, ContentLoader, Page};
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    for line in listing(site, content_type)? {
        println!("{}", line);
    }
    Ok(())
}

/// Lines printed by [`run`]
pub fn listing(site: &Site, content_type: &str) -> Result<Vec<String>> {
    let loader = ContentLoader::new(site);
    let mut lines = Vec::new();

    match content_type {
        "post" | "posts" => {
            let posts = loader.load_posts()?;
            lines.push(format!("Posts ({}):", posts.len()));
            for post in posts {
                lines.push(format!(
                    "  {} - {} [{}] ({})",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.slug,
                    post.category
                ));
            }
        }
        "page" | "pages" => {
            let pages = load_pages(&loader)?;
            lines.push(format!("Pages ({}):", pages.len()));
            for (name, page) in pages {
                lines.push(format!(
                    "  {} [{}] {} blocks",
                    page.title,
                    name,
                    page.blocks.len()
                ));
            }
        }
        "block" | "blocks" => {
            for (name, page) in load_pages(&loader)? {
                lines.push(format!("{} ({}):", name, page.blocks.len()));
                for block in &page.blocks {
                    let status = match &block.body {
                        BlockBody::Unknown { .. } => "unresolved",
                        BlockBody::Invalid { .. } => "invalid",
                        known => known.kind().map(BlockKind::alias).unwrap_or_default(),
                    };
                    let mut line =
                        format!("  {} - {} [{}]", block.id, block.body.blocktype(), status);
                    if let Some(error) = block.body.error() {
                        line.push_str(&format!(": {}", error));
                    }
                    lines.push(line);
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, page, block",
                content_type
            );
        }
    }

    Ok(lines)
}

fn load_pages(loader: &ContentLoader) -> Result<Vec<(&'static str, Page)>> {
    let mut pages = Vec::new();
    for name in ["homepage", "about"] {
        if let Some(page) = loader.load_page(name)? {
            pages.push((name, page));
        }
    }
    Ok(pages)
}
