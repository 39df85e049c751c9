//! Layout primitives: container, flex, box, section, space, nudge

use super::tokens::{Background, ContainerWidth, FlexVariant, Radius, Space, Width};
use super::view::{IntoView, View};

/// Centered, max-width wrapper
pub fn container(width: ContainerWidth, children: Vec<View>) -> View {
    View::element("div")
        .class(width.class())
        .children(children)
        .into_view()
}

/// Options for [`flex`] and [`flex_list`]
#[derive(Debug, Clone, Default)]
pub struct FlexProps {
    pub variant: Option<FlexVariant>,
    /// Defaults to `S3`. Ignored when a gutter is set.
    pub gap: Option<Space>,
    pub gutter: Option<Space>,
    pub wrap: bool,
    pub responsive: bool,
    pub margin_y: Option<Space>,
    pub align_items: Option<FlexVariant>,
}

impl FlexProps {
    pub fn variant(variant: FlexVariant) -> Self {
        Self {
            variant: Some(variant),
            ..Default::default()
        }
    }

    pub fn gap(mut self, gap: Space) -> Self {
        self.gap = Some(gap);
        self
    }

    pub fn gutter(mut self, gutter: Space) -> Self {
        self.gutter = Some(gutter);
        self
    }

    pub fn wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    pub fn responsive(mut self) -> Self {
        self.responsive = true;
        self
    }

    pub fn margin_y(mut self, margin: Space) -> Self {
        self.margin_y = Some(margin);
        self
    }

    fn classes(&self) -> Vec<String> {
        let mut classes = vec!["flex".to_string()];
        if let Some(variant) = self.variant {
            classes.push(variant.class().to_string());
        }
        if self.responsive {
            classes.push("flex-responsive".to_string());
        }
        if self.wrap {
            classes.push("flex-wrap".to_string());
        }
        match self.gutter {
            Some(gutter) => {
                classes.push(gutter.prefixed("gutter"));
                classes.push(Space::S0.prefixed("flex-gap"));
            }
            None => classes.push(self.gap.unwrap_or(Space::S3).prefixed("flex-gap")),
        }
        if let Some(margin) = self.margin_y {
            classes.push(margin.prefixed("margin-y"));
        }
        if let Some(align) = self.align_items {
            classes.push(align.class().to_string());
        }
        classes
    }
}

/// Flex row
pub fn flex(props: FlexProps, children: Vec<View>) -> View {
    View::element("div")
        .classes(props.classes())
        .children(children)
        .into_view()
}

/// Flex row rendered as an unstyled `<ul>`; children should be list items
pub fn flex_list(props: FlexProps, children: Vec<View>) -> View {
    View::element("ul")
        .class("list")
        .classes(props.classes())
        .children(children)
        .into_view()
}

/// Keyed `<li>`
pub fn list_item(key: &str, children: Vec<View>) -> View {
    View::element("li")
        .with_key(key)
        .children(children)
        .into_view()
}

/// Options for [`panel`] and [`section`]
#[derive(Debug, Clone)]
pub struct BoxProps {
    pub tag: &'static str,
    pub width: Width,
    pub background: Option<Background>,
    pub padding: Option<Space>,
    pub padding_y: Option<Space>,
    pub radius: Option<Radius>,
    pub center: bool,
    pub key: Option<String>,
}

impl Default for BoxProps {
    fn default() -> Self {
        Self {
            tag: "div",
            width: Width::Full,
            background: None,
            padding: None,
            padding_y: None,
            radius: None,
            center: false,
            key: None,
        }
    }
}

impl BoxProps {
    pub fn width(width: Width) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    pub fn centered() -> Self {
        Self {
            center: true,
            ..Default::default()
        }
    }

    pub fn tag(mut self, tag: &'static str) -> Self {
        self.tag = tag;
        self
    }

    pub fn background(mut self, background: Background) -> Self {
        self.background = Some(background);
        self
    }

    pub fn padding(mut self, padding: Space) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn padding_y(mut self, padding: Space) -> Self {
        self.padding_y = Some(padding);
        self
    }

    pub fn radius(mut self, radius: Radius) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn center(mut self) -> Self {
        self.center = true;
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    fn classes(&self) -> Vec<String> {
        let mut classes = vec![self.width.class().to_string()];
        if let Some(background) = self.background {
            classes.push(background.class().to_string());
        }
        if let Some(padding) = self.padding {
            classes.push(padding.prefixed("padding"));
        }
        if let Some(padding) = self.padding_y {
            classes.push(padding.prefixed("padding-y"));
        }
        if let Some(radius) = self.radius {
            classes.push(radius.class().to_string());
        }
        if self.center {
            classes.push("box-center".to_string());
        }
        classes
    }
}

/// The box primitive
pub fn panel(props: BoxProps, children: Vec<View>) -> View {
    let el = View::element(props.tag)
        .classes(props.classes())
        .children(children);
    match props.key {
        Some(key) => el.with_key(key).into_view(),
        None => el.into_view(),
    }
}

/// Page section: a `<section>` box with vertical rhythm
pub fn section(props: BoxProps, children: Vec<View>) -> View {
    panel(
        BoxProps {
            tag: "section",
            ..props
        },
        vec![],
    )
    .map_element(|el| el.class("section").children(children))
}

/// Vertical spacer. `None` is an auto margin.
pub fn space(size: Option<Space>) -> View {
    let class = match size {
        Some(size) => size.prefixed("margin"),
        None => "margin-auto".to_string(),
    };
    View::element("div").class(class).into_view()
}

/// Negative margins pulling a child outside its parent's padding
#[derive(Debug, Clone, Copy, Default)]
pub struct NudgeProps {
    pub left: Option<Space>,
    pub right: Option<Space>,
    pub top: Option<Space>,
    pub bottom: Option<Space>,
}

pub fn nudge(props: NudgeProps, children: Vec<View>) -> View {
    let sides = [
        ("nudge-left", props.left),
        ("nudge-right", props.right),
        ("nudge-top", props.top),
        ("nudge-bottom", props.bottom),
    ];
    View::element("div")
        .classes(
            sides
                .into_iter()
                .filter_map(|(prefix, size)| size.map(|s| s.prefixed(prefix))),
        )
        .children(children)
        .into_view()
}
