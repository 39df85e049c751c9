//! Page-opening sections

use crate::content::blocks::{AboutHero, Hero};
use crate::ui::{
    button_list, container, flex, image, kicker_heading, panel, section, text, BoxProps,
    ButtonListProps, ContainerWidth, FlexProps, FlexVariant, RenderContext, Space,
    TextProps, TextVariant, View, Width,
};
use crate::views;

/// Homepage hero: image on one side, heading and actions on the other
pub fn hero(props: &Hero, cx: &RenderContext) -> View {
    let copy = views![
        text(
            TextProps::variant(TextVariant::Heading).tag("h1"),
            kicker_heading(props.kicker.as_deref(), &props.heading),
        ),
        props
            .subhead
            .clone()
            .map(|s| text(TextProps::variant(TextVariant::Subhead).tag("h2"), views![s])),
        props
            .text
            .clone()
            .map(|t| text(TextProps::default().tag("p"), views![t])),
        button_list(cx, &props.links, ButtonListProps::default()),
    ];

    section(
        BoxProps::default(),
        views![container(
            ContainerWidth::Normal,
            views![flex(
                FlexProps::variant(FlexVariant::Center).gap(Space::S4).responsive(),
                views![
                    panel(
                        BoxProps::width(Width::Half),
                        views![props.image.as_ref().map(|img| image(cx, img))],
                    ),
                    panel(BoxProps::width(Width::Half), copy),
                ],
            )],
        )],
    )
}

pub fn about_hero(props: &AboutHero, cx: &RenderContext) -> View {
    section(
        BoxProps::default(),
        views![
            container(
                ContainerWidth::Normal,
                views![panel(
                    BoxProps::default().padding_y(Space::S5),
                    views![
                        text(
                            TextProps::variant(TextVariant::Heading).tag("h1").center(),
                            views![props.heading.clone()],
                        ),
                        props.text.clone().map(|t| text(
                            TextProps::variant(TextVariant::Lead).tag("p").center(),
                            views![t],
                        )),
                    ],
                )],
            ),
            props
                .image
                .as_ref()
                .map(|img| container(ContainerWidth::Wide, views![image(cx, img)])),
        ],
    )
}
