//! Logo lists

use crate::content::blocks::{AboutLogoList, LogoItem, LogoList};
use crate::ui::{
    container, flex_list, heading, link_list, list_item, logo, panel, section, space, text,
    BoxProps, ContainerWidth, FlexProps, FlexVariant, LogoSize, RenderContext, Space,
    TextProps, TextVariant, View,
};
use crate::views;

/// A logo, or nothing when the entry has no image
pub fn logo_item(props: &LogoItem, cx: &RenderContext) -> View {
    match &props.image {
        Some(image) => logo(cx, image, &props.alt, LogoSize::Medium),
        None => View::Empty,
    }
}

pub fn logo_list(props: &LogoList, cx: &RenderContext) -> View {
    let logos = props
        .logos
        .iter()
        .map(|l| list_item(&l.id, views![logo_item(l, cx)]))
        .collect();

    section(
        BoxProps::default().padding_y(Space::S4),
        views![container(
            ContainerWidth::Narrow,
            views![
                props.text.clone().map(|t| text(
                    TextProps::variant(TextVariant::Lead).center(),
                    views![t],
                )),
                space(Some(Space::S4)),
                flex_list(FlexProps::variant(FlexVariant::Center).gap(Space::S4), logos),
            ],
        )],
    )
}

pub fn about_logo_list(props: &AboutLogoList, cx: &RenderContext) -> View {
    // the same logo may be listed twice, so keys carry the position
    let logos = props
        .logos
        .iter()
        .enumerate()
        .map(|(i, l)| list_item(&format!("{}-{}", l.id, i), views![logo_item(l, cx)]))
        .collect();

    section(
        BoxProps::default(),
        views![
            container(
                ContainerWidth::Normal,
                views![panel(
                    BoxProps::centered(),
                    views![
                        props.heading.clone().map(|h| heading(views![h])),
                        link_list(cx, &props.links),
                    ],
                )],
            ),
            container(
                ContainerWidth::Narrow,
                views![panel(
                    BoxProps::default().padding_y(Space::S6),
                    views![flex_list(
                        FlexProps::variant(FlexVariant::Center).gap(Space::S5),
                        logos,
                    )],
                )],
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::HomepageImage;

    fn item(id: &str, with_image: bool) -> LogoItem {
        LogoItem {
            id: id.to_string(),
            alt: format!("{} logo", id),
            image: with_image.then(|| HomepageImage {
                id: format!("{}-img", id),
                alt: String::new(),
                image_data: None,
                url: Some(format!("/logos/{}.svg", id)),
            }),
        }
    }

    #[test]
    fn test_logo_item_without_image_is_empty() {
        let config = SiteConfig::default();
        let cx = RenderContext::new(&config);
        assert!(logo_item(&item("acme", false), &cx).is_empty());
        let view = logo_item(&item("acme", true), &cx);
        let img = view.as_element().unwrap();
        assert_eq!(img.get_attr("alt"), Some("acme logo"));
        assert!(img.has_class("logo-medium"));
    }

    #[test]
    fn test_logo_list_keeps_slot_per_logo() {
        let config = SiteConfig::default();
        let cx = RenderContext::new(&config);
        let props = LogoList {
            text: None,
            logos: vec![item("a", true), item("b", false), item("c", true)],
        };
        let view = logo_list(&props, &cx);
        assert_eq!(view.find_all("li").len(), 3);
        assert_eq!(view.find_all("img").len(), 2);
        assert!(!view.render_to_string().contains("text-lead"));
    }

    #[test]
    fn test_about_logo_list_keys_include_position() {
        let config = SiteConfig::default();
        let cx = RenderContext::new(&config);
        let props = AboutLogoList {
            heading: Some("Our investors".into()),
            links: vec![],
            logos: vec![item("a", true), item("a", true)],
        };
        let view = about_logo_list(&props, &cx);
        let keys: Vec<_> = view.find_all("li").iter().filter_map(|li| li.key()).collect();
        assert_eq!(keys, vec!["a-0", "a-1"]);
        assert_eq!(view.find_all("h2").len(), 1);
    }
}
