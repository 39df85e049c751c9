//! A single blog post

use super::layout::{PageMeta, PageView};
use crate::content::{BlogAuthor, BlogPost, PostLink};
use crate::helpers::date_xml;
use crate::ui::{
    avatar, container, flex, image, image_with_alt, link, panel, space, text, BoxProps,
    ContainerWidth, FlexProps, FlexVariant, IntoView, RenderContext, Space, TextProps,
    TextVariant, View,
};
use crate::views;

/// Avatar from processed image data, else a plain `<img>` of the avatar url
/// described by the author's name
fn author_avatar(author: &BlogAuthor, cx: &RenderContext) -> View {
    match &author.avatar {
        Some(img) if img.image_data.is_some() => avatar(cx, img),
        Some(img) => image_with_alt(cx, img, &author.name, "avatar"),
        None => View::Empty,
    }
}

fn author_row(author: &BlogAuthor, cx: &RenderContext) -> View {
    panel(
        BoxProps::centered(),
        views![flex(
            FlexProps::default(),
            views![
                author_avatar(author, cx),
                text(
                    TextProps::variant(TextVariant::Bold),
                    views![author.name.clone()],
                ),
            ],
        )],
    )
}

fn post_nav(post: &BlogPost, cx: &RenderContext) -> View {
    if post.previous.is_none() && post.next.is_none() {
        return View::Empty;
    }
    let nav_link = |target: &PostLink, label: String, rel: &'static str| {
        link(cx, &cx.post_route(&target.slug), "post-nav-link", views![label])
            .map_element(|el| el.attr("rel", rel))
    };

    View::element("nav")
        .class("post-nav")
        .child(flex(
            FlexProps::variant(FlexVariant::SpaceBetween),
            views![
                post.previous
                    .as_ref()
                    .map(|p| nav_link(p, format!("\u{2190} {}", p.title), "prev")),
                post.next
                    .as_ref()
                    .map(|n| nav_link(n, format!("{} \u{2192}", n.title), "next")),
            ],
        ))
        .into_view()
}

pub fn blog_post(post: &BlogPost, cx: &RenderContext) -> PageView {
    let date = View::element("time")
        .attr("datetime", date_xml(&post.date))
        .child(cx.format_date(&post.date));

    let page = container(
        ContainerWidth::Normal,
        views![panel(
            BoxProps::default().padding_y(Space::S5),
            views![
                text(
                    TextProps::variant(TextVariant::Heading).tag("h1").center(),
                    views![post.title.clone()],
                ),
                space(Some(Space::S4)),
                post.author.as_ref().map(|a| author_row(a, cx)),
                space(Some(Space::S4)),
                text(TextProps::default().center(), views![date]),
                space(Some(Space::S4)),
                post.image.as_ref().map(|img| image(cx, img)),
                space(Some(Space::S5)),
                View::element("div")
                    .class("blog-post")
                    .child(View::raw(post.html.clone())),
                post_nav(post, cx),
            ],
        )],
    );

    let meta = PageMeta::new(post.title.clone())
        .description(post.excerpt.clone())
        .image(post.image.as_ref().and_then(|i| i.src()).map(str::to_string));
    PageView::new(meta, page)
}
