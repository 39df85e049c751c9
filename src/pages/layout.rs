//! Document chrome shared by every page

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::ui::{RenderContext, View};

/// Head metadata of a page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

impl PageMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = image;
        self
    }
}

/// A rendered page body plus its metadata
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub meta: PageMeta,
    pub body: View,
}

impl PageView {
    pub fn new(meta: PageMeta, body: View) -> Self {
        Self { meta, body }
    }

    /// Wrap the body in the document chrome
    pub fn render(&self, cx: &RenderContext) -> String {
        document(cx, &self.meta, &self.body).into_string()
    }
}

fn full_title(site_title: &str, page_title: &str) -> String {
    if page_title.is_empty() || page_title == site_title {
        site_title.to_string()
    } else {
        format!("{} | {}", page_title, site_title)
    }
}

pub fn document(cx: &RenderContext, meta: &PageMeta, body: &View) -> Markup {
    let config = cx.config();
    let description = if meta.description.is_empty() {
        config.description.as_str()
    } else {
        meta.description.as_str()
    };

    html! {
        (DOCTYPE)
        html lang=(config.language) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (full_title(&config.title, &meta.title)) }
                @if !description.is_empty() {
                    meta name="description" content=(description);
                }
                meta property="og:title" content=(meta.title);
                @if let Some(image) = &meta.image {
                    meta property="og:image" content=(cx.absolute_url(image));
                }
                link rel="stylesheet" href=(cx.href("css/style.css"));
            }
            body {
                (header(cx))
                main { (PreEscaped(body.render_to_string())) }
                (footer(cx))
            }
        }
    }
}

fn header(cx: &RenderContext) -> Markup {
    let config = cx.config();
    html! {
        header class="header" {
            a class="header-title" href=(cx.href("")) { (config.title) }
            @if !config.menu.is_empty() {
                nav {
                    ul class="list flex flex-gap-4" {
                        @for (name, path) in &config.menu {
                            li { a class="nav-link" href=(cx.href(path)) { (name) } }
                        }
                    }
                }
            }
        }
    }
}

fn footer(cx: &RenderContext) -> Markup {
    let config = cx.config();
    html! {
        footer class="footer" {
            @match &config.footer_text {
                Some(text) => { (text) }
                None => { "\u{a9} " (config.author) }
            }
        }
    }
}
