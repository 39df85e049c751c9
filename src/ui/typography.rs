//! Text primitives

use super::tokens::TextVariant;
use super::view::{IntoView, View};

/// Options for [`text`]
#[derive(Debug, Clone, Copy)]
pub struct TextProps {
    pub tag: &'static str,
    pub variant: TextVariant,
    pub center: bool,
    pub bold: bool,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            tag: "div",
            variant: TextVariant::Body,
            center: false,
            bold: false,
        }
    }
}

impl TextProps {
    pub fn variant(variant: TextVariant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    pub fn tag(mut self, tag: &'static str) -> Self {
        self.tag = tag;
        self
    }

    pub fn center(mut self) -> Self {
        self.center = true;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

pub fn text(props: TextProps, children: Vec<View>) -> View {
    let mut el = View::element(props.tag).class(props.variant.class());
    if props.center {
        el = el.class("text-center");
    }
    if props.bold {
        el = el.class("text-bold");
    }
    el.children(children).into_view()
}

/// Body text
pub fn body(children: Vec<View>) -> View {
    text(TextProps::default(), children)
}

/// Section heading, an `<h2>` unless retagged through [`text`]
pub fn heading(children: Vec<View>) -> View {
    text(TextProps::variant(TextVariant::Heading).tag("h2"), children)
}

pub fn subhead(children: Vec<View>) -> View {
    text(TextProps::variant(TextVariant::Subhead).tag("h3"), children)
}

pub fn kicker(content: impl IntoView) -> View {
    text(TextProps::variant(TextVariant::Kicker), vec![content.into_view()])
}

pub fn blockquote(children: Vec<View>) -> View {
    View::element("blockquote")
        .class("blockquote")
        .children(children)
        .into_view()
}

/// Text only screen readers see
pub fn visually_hidden(content: impl IntoView) -> View {
    View::element("span")
        .class("visually-hidden")
        .child(content)
        .into_view()
}

/// Heading content preceded by an optional kicker
pub fn kicker_heading(kicker_text: Option<&str>, heading_text: &str) -> Vec<View> {
    vec![
        kicker_text.map(|k| kicker(k.to_string())).into_view(),
        View::text(heading_text.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_is_h2() {
        let view = heading(vec![View::text("Hello")]);
        assert_eq!(
            view.render_to_string(),
            r#"<h2 class="text-heading">Hello</h2>"#
        );
    }

    #[test]
    fn test_text_center_bold() {
        let view = text(
            TextProps::variant(TextVariant::Medium).center().bold(),
            vec![View::text("Ada")],
        );
        assert_eq!(
            view.render_to_string(),
            r#"<div class="text-medium text-center text-bold">Ada</div>"#
        );
    }

    #[test]
    fn test_kicker_heading_without_kicker() {
        let view = heading(kicker_heading(None, "Title"));
        assert_eq!(view.text_content(), "Title");
        assert!(view.find_all("div").is_empty());
    }

    #[test]
    fn test_blockquote_and_visually_hidden() {
        let quote = blockquote(vec![View::text("Ship it")]);
        assert_eq!(
            quote.render_to_string(),
            r#"<blockquote class="blockquote">Ship it</blockquote>"#
        );
        let hidden = visually_hidden("Menu");
        assert_eq!(
            hidden.render_to_string(),
            r#"<span class="visually-hidden">Menu</span>"#
        );
    }
}
