//! Leadership list

use crate::content::blocks::{Leadership, Person};
use crate::ui::{
    avatar, body, container, flex_list, heading, kicker, panel, section, space, text, BoxProps,
    ContainerWidth, FlexProps, FlexVariant, RenderContext, Space, TextProps,
    TextVariant, View, Width,
};
use crate::views;

fn profile(props: &Person, cx: &RenderContext) -> View {
    panel(
        BoxProps::width(Width::Full).padding(Space::S4).center(),
        views![
            props.image.as_ref().map(|img| avatar(cx, img)),
            space(Some(Space::S3)),
            panel(
                BoxProps::default(),
                views![
                    text(
                        TextProps::variant(TextVariant::Medium).tag("h2"),
                        views![props.name.clone()],
                    ),
                    props
                        .job_title
                        .clone()
                        .map(|t| text(TextProps::variant(TextVariant::Medium).tag("p"), views![t])),
                ],
            ),
        ],
    )
}

pub fn leadership(props: &Leadership, cx: &RenderContext) -> View {
    // Both heading parts are optional; skip the heading when neither is set
    let title = match (&props.kicker, &props.heading) {
        (None, None) => View::Empty,
        (k, h) => heading(views![k.clone().map(kicker), h.clone()]),
    };

    section(
        BoxProps::default(),
        views![container(
            ContainerWidth::Normal,
            views![
                panel(
                    BoxProps::centered().padding_y(Space::S4),
                    views![title, props.subhead.clone().map(|s| body(views![s]))],
                ),
                flex_list(
                    FlexProps::variant(FlexVariant::Center)
                        .gap(Space::S0)
                        .responsive()
                        .wrap(),
                    props
                        .content
                        .iter()
                        .map(|person| {
                            panel(
                                BoxProps::width(Width::Third)
                                    .tag("li")
                                    .padding(Space::S4)
                                    .key(person.id.clone()),
                                views![profile(person, cx)],
                            )
                        })
                        .collect(),
                ),
            ],
        )],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::HomepageImage;

    fn person(id: &str, job_title: Option<&str>) -> Person {
        Person {
            id: id.into(),
            name: id.to_uppercase(),
            job_title: job_title.map(str::to_string),
            image: Some(HomepageImage {
                id: format!("{}-img", id),
                alt: id.into(),
                image_data: None,
                url: Some(format!("/people/{}.jpg", id)),
            }),
        }
    }

    #[test]
    fn test_leadership_renders_people() {
        let config = SiteConfig::default();
        let cx = RenderContext::new(&config);
        let props = Leadership {
            kicker: Some("Team".into()),
            heading: Some("Leadership".into()),
            subhead: None,
            content: vec![person("ada", Some("CEO")), person("bob", None)],
        };
        let view = leadership(&props, &cx);

        let people = view.find_all("li");
        assert_eq!(people.len(), 2);
        assert_eq!(people[1].key(), Some("bob"));
        assert!(view.find_all("img")[0].has_class("avatar"));
        // one job title rendered
        assert_eq!(view.find_all("p").len(), 1);
        assert!(view.text_content().starts_with("TeamLeadership"));
    }

    #[test]
    fn test_leadership_without_heading() {
        let config = SiteConfig::default();
        let cx = RenderContext::new(&config);
        let props = Leadership {
            kicker: None,
            heading: None,
            subhead: None,
            content: vec![],
        };
        let view = leadership(&props, &cx);
        let headings: Vec<_> = view
            .find_all("h2")
            .into_iter()
            .filter(|h| h.has_class("text-heading"))
            .collect();
        assert!(headings.is_empty());
    }
}
