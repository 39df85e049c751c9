//! Feature list and its alternating feature rows

use crate::content::blocks::{Feature, FeatureList};
use crate::ui::{
    body, container, flex, heading, image, kicker_heading, link_list, panel, section, subhead,
    text, Background, BoxProps, ContainerWidth, FlexProps, FlexVariant, Radius,
    RenderContext, Space, TextProps, TextVariant, View, Width,
};
use crate::views;

/// One feature row. With `flip` the image moves to the other side.
pub fn feature(props: &Feature, flip: bool, cx: &RenderContext) -> View {
    let media = panel(
        BoxProps::width(Width::Half),
        views![props.image.as_ref().map(|img| image(cx, img))],
    );
    let copy = panel(
        BoxProps::width(Width::Half),
        views![
            subhead(kicker_heading(props.kicker.as_deref(), &props.heading)),
            props
                .text
                .clone()
                .map(|t| text(TextProps::variant(TextVariant::Lead), views![t])),
            link_list(cx, &props.links),
        ],
    );
    let columns = if flip {
        views![copy, media]
    } else {
        views![media, copy]
    };

    section(
        BoxProps::default()
            .padding(Space::S4)
            .background(Background::Muted)
            .key(props.id.clone()),
        views![container(
            ContainerWidth::Normal,
            views![flex(
                FlexProps::variant(FlexVariant::Center).gap(Space::S4).responsive(),
                columns,
            )],
        )],
    )
}

pub fn feature_list(props: &FeatureList, cx: &RenderContext) -> View {
    let mut children = views![panel(
        BoxProps::centered().padding_y(Space::S5),
        views![
            heading(kicker_heading(props.kicker.as_deref(), &props.heading)),
            props.text.clone().map(|t| body(views![t])),
        ],
    )];
    children.extend(
        props
            .content
            .iter()
            .enumerate()
            .map(|(i, f)| feature(f, i % 2 == 1, cx)),
    );

    container(
        ContainerWidth::Fullbleed,
        views![panel(
            BoxProps::default()
                .background(Background::Muted)
                .radius(Radius::Large),
            children,
        )],
    )
}
