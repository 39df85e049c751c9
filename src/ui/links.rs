//! Links and buttons

use super::layout::{flex_list, list_item, FlexProps};
use super::tokens::{ButtonVariant, FlexVariant, Space};
use super::view::{IntoView, View};
use super::RenderContext;
use crate::content::HomepageLink;

/// Anchor. Internal paths are resolved against the site root.
pub fn link(cx: &RenderContext, href: &str, class: &'static str, children: Vec<View>) -> View {
    View::element("a")
        .class(class)
        .attr("href", cx.href(href))
        .children(children)
        .into_view()
}

pub fn button(
    cx: &RenderContext,
    href: &str,
    variant: ButtonVariant,
    children: Vec<View>,
) -> View {
    link(cx, href, variant.class(), children)
}

/// Call-to-action styled link
pub fn cta_link(cx: &RenderContext, href: &str, children: Vec<View>) -> View {
    link(cx, href, "cta-link", children)
}

/// A link wrapping a whole card
pub fn block_link(cx: &RenderContext, href: &str, children: Vec<View>) -> View {
    link(cx, href, "block-link", children)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonListProps {
    pub variant: Option<FlexVariant>,
    pub reversed: bool,
}

impl ButtonListProps {
    pub fn reversed() -> Self {
        Self {
            reversed: true,
            ..Default::default()
        }
    }

    pub fn variant(mut self, variant: FlexVariant) -> Self {
        self.variant = Some(variant);
        self
    }
}

/// Variant of the `index`-th button: the first one is the primary action
pub fn button_variant(index: usize, reversed: bool) -> ButtonVariant {
    match (index, reversed) {
        (0, false) => ButtonVariant::Primary,
        (0, true) => ButtonVariant::Reversed,
        (_, false) => ButtonVariant::Link,
        (_, true) => ButtonVariant::LinkReversed,
    }
}

/// Row of buttons. An empty link list still renders the (empty) row.
pub fn button_list(cx: &RenderContext, links: &[HomepageLink], props: ButtonListProps) -> View {
    let items = links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            list_item(
                &link.id,
                vec![button(
                    cx,
                    &link.href,
                    button_variant(i, props.reversed),
                    vec![View::text(link.text.clone())],
                )],
            )
        })
        .collect();

    flex_list(
        FlexProps {
            variant: props.variant,
            margin_y: Some(Space::S4),
            ..Default::default()
        },
        items,
    )
}

/// Row of CTA links
pub fn link_list(cx: &RenderContext, links: &[HomepageLink]) -> View {
    let items = links
        .iter()
        .map(|link| {
            list_item(
                &link.id,
                vec![cta_link(
                    cx,
                    &link.href,
                    vec![View::text(link.text.clone())],
                )],
            )
        })
        .collect();
    flex_list(FlexProps::default(), items)
}

/// True for URLs with a scheme (`https:`, `mailto:`) or protocol-relative `//`
pub fn is_absolute_url(url: &str) -> bool {
    if url.starts_with("//") {
        return true;
    }
    let Some((scheme, _)) = url.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    // Windows drive letters (C:\) are paths, not schemes
    scheme.len() > 1
        && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
