//! Benefit list

use crate::content::blocks::{Benefit, BenefitList};
use crate::ui::{
    body, container, flex_list, heading, icon, panel, section, space, text, BoxProps,
    ContainerWidth, FlexProps, FlexVariant, IconSize, RenderContext, Space, TextProps,
    TextVariant, View, Width,
};
use crate::views;

fn benefit(props: &Benefit, cx: &RenderContext) -> View {
    panel(
        BoxProps::width(Width::Third)
            .tag("li")
            .padding(Space::S4)
            .padding_y(Space::S3)
            .key(props.id.clone()),
        views![
            props.image.as_ref().map(|i| icon(cx, i, IconSize::Small)),
            space(Some(Space::S2)),
            text(
                TextProps::variant(TextVariant::SubheadSmall).tag("h2"),
                views![props.heading.clone()],
            ),
            body(views![props.text.clone()]),
        ],
    )
}

pub fn benefit_list(props: &BenefitList, cx: &RenderContext) -> View {
    section(
        BoxProps::default(),
        views![container(
            ContainerWidth::Normal,
            views![
                panel(
                    BoxProps::centered(),
                    views![
                        props.heading.clone().map(|h| heading(views![h])),
                        props
                            .text
                            .clone()
                            .map(|t| text(TextProps::variant(TextVariant::Lead), views![t])),
                    ],
                ),
                space(Some(Space::S3)),
                flex_list(
                    FlexProps::variant(FlexVariant::Start)
                        .gutter(Space::S3)
                        .responsive()
                        .wrap(),
                    props.content.iter().map(|b| benefit(b, cx)).collect(),
                ),
            ],
        )],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    #[test]
    fn test_benefit_list() {
        let config = SiteConfig::default();
        let cx = RenderContext::new(&config);
        let props = BenefitList {
            heading: None,
            text: None,
            content: vec![Benefit {
                id: "b1".into(),
                image: None,
                heading: "Fast".into(),
                text: "Really fast.".into(),
            }],
        };
        let view = benefit_list(&props, &cx);

        let items = view.find_all("li");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].key(), Some("b1"));
        assert!(items[0].has_class("width-third"));
        assert!(view.find_all("img").is_empty());
        assert_eq!(view.text_content(), "FastReally fast.");

        let list = view.find_all("ul");
        assert!(list[0].has_class("gutter-3"));
        assert!(list[0].has_class("flex-gap-0"));
    }
}
