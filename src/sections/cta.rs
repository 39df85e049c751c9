//! Call to action

use crate::content::blocks::Cta;
use crate::ui::{
    button_list, container, image, kicker_heading, nudge, section, text, Background, BoxProps,
    ButtonListProps, ContainerWidth, FlexVariant, NudgeProps, Radius, RenderContext,
    Space, TextProps, TextVariant, View,
};
use crate::views;

/// Call to action on the primary background
pub fn cta(props: &Cta, cx: &RenderContext) -> View {
    container(
        ContainerWidth::Fullbleed,
        views![section(
            BoxProps::default()
                .padding(Space::S5)
                .radius(Radius::Large)
                .background(Background::Primary),
            views![
                text(
                    TextProps::variant(TextVariant::Heading).tag("h2").center(),
                    kicker_heading(props.kicker.as_deref(), &props.heading),
                ),
                props.text.clone().map(|t| text(
                    TextProps::variant(TextVariant::Lead).tag("p").center(),
                    views![t],
                )),
                button_list(
                    cx,
                    &props.links,
                    ButtonListProps::reversed().variant(FlexVariant::Center),
                ),
                props.image.as_ref().map(|img| nudge(
                    NudgeProps {
                        left: Some(Space::S5),
                        right: Some(Space::S5),
                        bottom: Some(Space::S5),
                        ..Default::default()
                    },
                    views![image(cx, img)],
                )),
            ],
        )],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::HomepageLink;

    #[test]
    fn test_cta_buttons_are_reversed_and_centered() {
        let config = SiteConfig::default();
        let cx = RenderContext::new(&config);
        let props = Cta {
            kicker: None,
            heading: "Ready?".into(),
            text: Some("Start today.".into()),
            links: vec![
                HomepageLink {
                    id: "a".into(),
                    href: "/signup".into(),
                    text: "Sign up".into(),
                },
                HomepageLink {
                    id: "b".into(),
                    href: "mailto:sales@example.com".into(),
                    text: "Contact sales".into(),
                },
            ],
            image: None,
        };
        let view = cta(&props, &cx);

        let links = view.find_all("a");
        assert!(links[0].has_class("button-reversed"));
        assert!(links[1].has_class("button-link-reversed"));
        assert_eq!(links[1].get_attr("href"), Some("mailto:sales@example.com"));
        assert!(view.find_all("ul")[0].has_class("flex-center"));
        assert!(view.find_all("img").is_empty());
        assert_eq!(view.find_all("p").len(), 1);
    }
}
