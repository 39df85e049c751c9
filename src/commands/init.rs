//! Initialize a new landing site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

const CONFIG_TEMPLATE: &str = r#"# Site
title: Landing
description: A site built from content blocks
author: John Doe
language: en

# URL
url: http://example.com
root: /

# Directory
content_dir: content
public_dir: public
static_dir: static
blog_dir: blog

# Blog
featured_category: Featured
default_category: Updates
date_format: MMMM DD, YYYY

# Header navigation
menu:
  Home: /
  About: /about/
  Blog: /blog/

highlight:
  enable: true
  theme: base16-ocean.dark
"#;

const HOMEPAGE_TEMPLATE: &str = r#"id: homepage
title: Landing
description: A site built from content blocks
content:
  - id: hero
    blocktype: HomepageHero
    kicker: Welcome
    heading: Build your site from blocks
    text: Every section of this page is a block in content/homepage.yml.
    links:
      - id: start
        href: /blog/
        text: Read the blog
      - id: about
        href: /about/
        text: About us
  - id: features
    blocktype: HomepageFeatureList
    kicker: Features
    heading: What you get
    content:
      - id: blocks
        heading: Typed blocks
        text: Each block is checked when the site is loaded.
      - id: static
        heading: Static output
        text: Plain HTML files you can host anywhere.
  - id: cta
    blocktype: HomepageCta
    heading: Ready to start?
    links:
      - id: new-post
        href: /blog/
        text: Write a post
"#;

const ABOUT_TEMPLATE: &str = r#"id: about
title: About
content:
  - id: about-hero
    blocktype: AboutHero
    heading: About us
    text: Tell your visitors who you are.
  - id: numbers
    blocktype: AboutStatList
    content:
      - id: founded
        value: "2024"
        label: Founded
"#;

const STYLESHEET: &str = r#"body {
  margin: 0;
  font-family: system-ui, sans-serif;
}
"#;

/// Scaffold a site in `target_dir`. Refuses to touch an existing site.
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("A site already exists at {:?}", target_dir);
    }

    fs::create_dir_all(target_dir.join("content/posts"))?;
    fs::create_dir_all(target_dir.join("static/css"))?;

    fs::write(&config_path, CONFIG_TEMPLATE)?;
    fs::write(target_dir.join("content/homepage.yml"), HOMEPAGE_TEMPLATE)?;
    fs::write(target_dir.join("content/about.yml"), ABOUT_TEMPLATE)?;
    fs::write(target_dir.join("static/css/style.css"), STYLESHEET)?;

    let now = chrono::Local::now();
    let sample_post = format!(
        r#"---
title: Hello World
date: {}
category: Featured
---

Welcome! This is your first post. Posts live in `content/posts` and are
written in Markdown.

<!-- more -->

## Quick Start

```bash
$ landing-rs new "My New Post"
$ landing-rs server
```
"#,
        now.format("%Y-%m-%d %H:%M:%S")
    );
    fs::write(target_dir.join("content/posts/hello-world.md"), sample_post)?;

    tracing::info!("Initialized site in {:?}", target_dir);
    Ok(())
}
