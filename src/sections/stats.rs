//! Stat lists

use crate::content::blocks::{AboutStat, AboutStatList, Stat, StatList};
use crate::ui::{
    button_list, container, flex, flex_list, heading, icon, image, kicker_heading, list_item,
    nudge, panel, section, text, Background, BoxProps, ButtonListProps, ContainerWidth,
    FlexProps, FlexVariant, IconSize, NudgeProps, Radius, RenderContext, Space,
    TextProps, TextVariant, View, Width,
};
use crate::views;

fn stat(props: &Stat) -> View {
    panel(
        BoxProps::default(),
        views![
            text(TextProps::variant(TextVariant::Stat), views![props.value.clone()]),
            text(TextProps::variant(TextVariant::StatLabel), views![props.label.clone()]),
        ],
    )
}

pub fn stat_list(props: &StatList, cx: &RenderContext) -> View {
    let stats = props
        .content
        .iter()
        .map(|s| list_item(&s.id, views![stat(s)]))
        .collect();

    let copy = views![
        props.icon.as_ref().map(|i| icon(cx, i, IconSize::Medium)),
        heading(kicker_heading(props.kicker.as_deref(), &props.heading)),
        props
            .text
            .clone()
            .map(|t| text(TextProps::variant(TextVariant::Lead), views![t])),
        flex_list(FlexProps::default().wrap().gap(Space::S4), stats),
        button_list(cx, &props.links, ButtonListProps::reversed()),
    ];

    let media = props.image.as_ref().map(|img| {
        nudge(
            NudgeProps {
                right: Some(Space::S5),
                bottom: Some(Space::S5),
                ..Default::default()
            },
            views![image(cx, img)],
        )
    });

    container(
        ContainerWidth::Fullbleed,
        views![section(
            BoxProps::default()
                .padding(Space::S5)
                .radius(Radius::Large)
                .background(Background::Primary),
            views![flex(
                FlexProps::variant(FlexVariant::End).responsive(),
                views![
                    panel(BoxProps::width(Width::Half), copy),
                    panel(BoxProps::width(Width::Half), views![media]),
                ],
            )],
        )],
    )
}

/// A stat with neither value nor label renders an empty box
fn about_stat(props: &AboutStat) -> View {
    panel(
        BoxProps::width(Width::FitContent)
            .tag("li")
            .key(props.id.clone()),
        views![
            props
                .value
                .clone()
                .map(|v| text(TextProps::variant(TextVariant::Stat), views![v])),
            props
                .label
                .clone()
                .map(|l| text(TextProps::variant(TextVariant::StatLabel), views![l])),
        ],
    )
}

pub fn about_stat_list(props: &AboutStatList, _cx: &RenderContext) -> View {
    section(
        BoxProps::default(),
        views![container(
            ContainerWidth::Normal,
            views![flex_list(
                FlexProps::variant(FlexVariant::Center).responsive(),
                props.content.iter().map(about_stat).collect(),
            )],
        )],
    )
}
