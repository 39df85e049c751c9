//! Product list

use crate::content::blocks::{Product, ProductList};
use crate::ui::{
    body, container, flex_list, heading, icon, kicker_heading, link_list, list_item, panel,
    section, subhead, BoxProps, ContainerWidth, FlexProps, IconSize, RenderContext,
    Space, View,
};
use crate::views;

fn product(props: &Product, cx: &RenderContext) -> View {
    panel(
        BoxProps::centered(),
        views![
            props.image.as_ref().map(|i| icon(cx, i, IconSize::Large)),
            subhead(views![props.heading.clone()]),
            props.text.clone().map(|t| body(views![t])),
            link_list(cx, &props.links),
        ],
    )
}

pub fn product_list(props: &ProductList, cx: &RenderContext) -> View {
    section(
        BoxProps::default(),
        views![container(
            ContainerWidth::Normal,
            views![
                panel(
                    BoxProps::centered().padding_y(Space::S4),
                    views![
                        heading(kicker_heading(props.kicker.as_deref(), &props.heading)),
                        props.text.clone().map(|t| body(views![t])),
                    ],
                ),
                flex_list(
                    FlexProps::default().gap(Space::S4).responsive(),
                    props
                        .content
                        .iter()
                        .map(|p| list_item(&p.id, views![product(p, cx)]))
                        .collect(),
                ),
            ],
        )],
    )
}
