//! Blog index: featured posts as large cards, the rest as small ones

use super::layout::{PageMeta, PageView};
use crate::content::BlogPost;
use crate::ui::{
    block_link, container, flex_list, image, kicker, panel, space, subhead, text, BoxProps,
    ContainerWidth, FlexProps, FlexVariant, RenderContext, Space, TextProps, TextVariant, View,
    Width,
};
use crate::views;

fn card_image(post: &BlogPost, cx: &RenderContext) -> Vec<View> {
    match &post.image {
        Some(img) => views![image(cx, img), space(Some(Space::S3))],
        None => Vec::new(),
    }
}

fn card_title(post: &BlogPost) -> View {
    subhead(views![kicker(post.category.clone()), post.title.clone()])
}

pub fn post_card(post: &BlogPost, cx: &RenderContext) -> View {
    let byline = post
        .author
        .as_ref()
        .filter(|a| !a.name.is_empty())
        .map(|a| {
            text(
                TextProps::variant(TextVariant::Bold),
                views![View::element("div").child(format!("By {}", a.name))],
            )
        });

    let mut children = card_image(post, cx);
    children.extend(views![
        card_title(post),
        text(TextProps::default().tag("p"), views![post.excerpt.clone()]),
        byline,
    ]);
    block_link(cx, &cx.post_route(&post.slug), children)
}

pub fn post_card_small(post: &BlogPost, cx: &RenderContext) -> View {
    let mut children = card_image(post, cx);
    children.push(card_title(post));
    block_link(cx, &cx.post_route(&post.slug), children)
}

fn card_item(post: &BlogPost, width: Width, card: View) -> View {
    panel(
        BoxProps::width(width)
            .tag("li")
            .padding(Space::S3)
            .key(post.id.clone()),
        views![card],
    )
}

pub fn blog_index(posts: &[BlogPost], cx: &RenderContext) -> PageView {
    let featured_category = &cx.config().featured_category;
    let (featured, regular): (Vec<&BlogPost>, Vec<&BlogPost>) = posts
        .iter()
        .partition(|p| &p.category == featured_category);

    let featured_list = flex_list(
        FlexProps::variant(FlexVariant::Start)
            .gap(Space::S0)
            .gutter(Space::S3)
            .responsive(),
        featured
            .iter()
            .map(|p| card_item(p, Width::Half, post_card(p, cx)))
            .collect(),
    );
    let regular_list = flex_list(
        FlexProps::variant(FlexVariant::Start)
            .gap(Space::S0)
            .gutter(Space::S3)
            .responsive()
            .wrap(),
        regular
            .iter()
            .map(|p| card_item(p, Width::Third, post_card_small(p, cx)))
            .collect(),
    );

    let page = container(
        ContainerWidth::Normal,
        views![
            panel(
                BoxProps::default().padding_y(Space::S4),
                views![
                    text(
                        TextProps::variant(TextVariant::Heading).tag("h1"),
                        views!["Blog"],
                    ),
                    featured_list,
                ],
            ),
            panel(
                BoxProps::default().padding_y(Space::S4),
                views![subhead(views!["Product Updates"]), regular_list],
            ),
        ],
    );

    PageView::new(
        PageMeta::new("Blog").description(cx.config().description.clone()),
        page,
    )
}
