//! Design tokens
//!
//! Every configurable option of a layout primitive is one of these closed
//! enumerations. A token maps to exactly one class name.

macro_rules! token {
    (
        $(#[$meta:meta])*
        $name:ident, $prefix:literal {
            $($variant:ident => $suffix:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Class name for this token
            pub fn class(self) -> &'static str {
                match self {
                    $(Self::$variant => concat!($prefix, $suffix)),+
                }
            }
        }
    };
}

token! {
    /// Spacing scale
    Space, "" {
        S0 => "0",
        S1 => "1",
        S2 => "2",
        S3 => "3",
        S4 => "4",
        S5 => "5",
        S6 => "6",
    }
}

impl Space {
    /// Numeric value of the token, used to build prefixed class names
    pub fn value(self) -> u8 {
        match self {
            Space::S0 => 0,
            Space::S1 => 1,
            Space::S2 => 2,
            Space::S3 => 3,
            Space::S4 => 4,
            Space::S5 => 5,
            Space::S6 => 6,
        }
    }

    pub(crate) fn prefixed(self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.value())
    }
}

token! {
    /// Max-width of a container
    ContainerWidth, "container-" {
        Normal => "normal",
        Narrow => "narrow",
        Wide => "wide",
        Tight => "tight",
        Fullbleed => "fullbleed",
    }
}

impl Default for ContainerWidth {
    fn default() -> Self {
        ContainerWidth::Normal
    }
}

token! {
    /// Width of a box relative to its parent
    Width, "width-" {
        Full => "full",
        Half => "half",
        Third => "third",
        TwoThirds => "two-thirds",
        Quarter => "quarter",
        FitContent => "fit-content",
    }
}

impl Default for Width {
    fn default() -> Self {
        Width::Full
    }
}

token! {
    Background, "bg-" {
        Primary => "primary",
        Muted => "muted",
    }
}

token! {
    Radius, "radius-" {
        Button => "button",
        Large => "large",
    }
}

token! {
    /// Flex arrangement
    FlexVariant, "flex-" {
        Start => "start",
        Center => "center",
        End => "end",
        SpaceBetween => "space-between",
        Stretch => "stretch",
        Baseline => "baseline",
        Column => "column",
    }
}

token! {
    TextVariant, "text-" {
        Body => "body",
        Lead => "lead",
        Heading => "heading",
        Subhead => "subhead",
        SubheadSmall => "subhead-small",
        Kicker => "kicker",
        Caps => "caps",
        Stat => "stat",
        StatLabel => "stat-label",
        Small => "small",
        Medium => "medium",
        Mega => "mega",
        Bold => "bold",
    }
}

impl Default for TextVariant {
    fn default() -> Self {
        TextVariant::Body
    }
}

token! {
    ButtonVariant, "button-" {
        Primary => "primary",
        Reversed => "reversed",
        Link => "link",
        LinkReversed => "link-reversed",
    }
}

impl Default for ButtonVariant {
    fn default() -> Self {
        ButtonVariant::Primary
    }
}

token! {
    LogoSize, "logo-" {
        Small => "small",
        Medium => "medium",
    }
}

impl Default for LogoSize {
    fn default() -> Self {
        LogoSize::Small
    }
}

token! {
    IconSize, "icon-" {
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}

impl Default for IconSize {
    fn default() -> Self {
        IconSize::Medium
    }
}
