//! View tree produced by the layout primitives
//!
//! Every component in the crate returns a [`View`]. The tree is rendered to
//! HTML by [`View::render_to_string`]; text and attribute values are escaped,
//! only [`View::Raw`] is emitted verbatim.

use std::borrow::Cow;
use std::fmt;

use crate::helpers::html_escape;

/// A renderable node
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// An HTML element
    Element(ElementView),
    /// Escaped text
    Text(Cow<'static, str>),
    /// Trusted markup, inserted without escaping
    Raw(String),
    /// Several views without a wrapper element
    Fragment(Vec<View>),
    /// Renders nothing
    Empty,
}

/// An HTML element in the view tree
#[derive(Debug, Clone, PartialEq)]
pub struct ElementView {
    tag: &'static str,
    classes: Vec<Cow<'static, str>>,
    attrs: Vec<(Cow<'static, str>, String)>,
    children: Vec<View>,
    key: Option<String>,
}

impl ElementView {
    /// Create an element with the given tag name
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
            key: None,
        }
    }

    /// Add a class name. Empty names are ignored.
    pub fn class(mut self, class: impl Into<Cow<'static, str>>) -> Self {
        let class = class.into();
        if !class.is_empty() {
            self.classes.push(class);
        }
        self
    }

    /// Add every class in `classes`
    pub fn classes<I, C>(self, classes: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cow<'static, str>>,
    {
        classes.into_iter().fold(self, |el, c| el.class(c))
    }

    /// Set an attribute
    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Set an attribute when a value is present
    pub fn attr_opt<V: Into<String>>(
        self,
        name: impl Into<Cow<'static, str>>,
        value: Option<V>,
    ) -> Self {
        match value {
            Some(v) => self.attr(name, v),
            None => self,
        }
    }

    /// Append a child
    pub fn child(mut self, child: impl IntoView) -> Self {
        self.children.push(child.into_view());
        self
    }

    /// Append several children
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoView,
    {
        self.children
            .extend(children.into_iter().map(IntoView::into_view));
        self
    }

    /// Attach an identity key. Keys are not rendered.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn tag_name(&self) -> &str {
        self.tag
    }

    pub fn class_list(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.as_ref())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Look up an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn child_views(&self) -> &[View] {
        &self.children
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    fn is_void(&self) -> bool {
        matches!(
            self.tag,
            "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
                | "source" | "track" | "wbr"
        )
    }
}

impl View {
    /// Start building an element
    pub fn element(tag: &'static str) -> ElementView {
        ElementView::new(tag)
    }

    pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
        Self::Text(content.into())
    }

    /// Pre-rendered markup. The caller vouches for its safety.
    pub fn raw(markup: impl Into<String>) -> Self {
        Self::Raw(markup.into())
    }

    pub fn fragment<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoView,
    {
        Self::Fragment(children.into_iter().map(IntoView::into_view).collect())
    }

    pub fn empty() -> Self {
        Self::Empty
    }

    /// True when the view renders no markup at all
    pub fn is_empty(&self) -> bool {
        match self {
            View::Empty => true,
            View::Fragment(children) => children.iter().all(View::is_empty),
            _ => false,
        }
    }

    /// The element, if this view is one
    pub fn as_element(&self) -> Option<&ElementView> {
        match self {
            View::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Apply `f` to the root element; other views pass through
    pub fn map_element(self, f: impl FnOnce(ElementView) -> ElementView) -> View {
        match self {
            View::Element(el) => View::Element(f(el)),
            other => other,
        }
    }

    /// Key of the root element
    pub fn key(&self) -> Option<&str> {
        self.as_element().and_then(ElementView::key)
    }

    /// Concatenated text of the tree, without markup
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            View::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
            View::Text(text) => out.push_str(text),
            View::Fragment(children) => children.iter().for_each(|c| c.collect_text(out)),
            View::Raw(_) | View::Empty => {}
        }
    }

    /// All elements in the tree with the given tag, in document order
    pub fn find_all(&self, tag: &str) -> Vec<&ElementView> {
        let mut found = Vec::new();
        self.find_into(tag, &mut found);
        found
    }

    fn find_into<'a>(&'a self, tag: &str, found: &mut Vec<&'a ElementView>) {
        match self {
            View::Element(el) => {
                if el.tag == tag {
                    found.push(el);
                }
                el.children.iter().for_each(|c| c.find_into(tag, found));
            }
            View::Fragment(children) => children.iter().for_each(|c| c.find_into(tag, found)),
            _ => {}
        }
    }

    /// Render the tree to an HTML string
    pub fn render_to_string(&self) -> String {
        let mut output = String::new();
        self.render_into(&mut output);
        output
    }

    fn render_into(&self, output: &mut String) {
        match self {
            View::Element(el) => {
                output.push('<');
                output.push_str(el.tag);

                if !el.classes.is_empty() {
                    output.push_str(" class=\"");
                    output.push_str(&html_escape(&el.classes.join(" ")));
                    output.push('"');
                }

                for (name, value) in &el.attrs {
                    output.push(' ');
                    output.push_str(name);
                    output.push_str("=\"");
                    output.push_str(&html_escape(value));
                    output.push('"');
                }

                output.push('>');
                if el.is_void() {
                    return;
                }
                for child in &el.children {
                    child.render_into(output);
                }
                output.push_str("</");
                output.push_str(el.tag);
                output.push('>');
            }
            View::Text(text) => output.push_str(&html_escape(text)),
            View::Raw(markup) => output.push_str(markup),
            View::Fragment(children) => children.iter().for_each(|c| c.render_into(output)),
            View::Empty => {}
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_to_string())
    }
}

/// Conversion into a [`View`]
pub trait IntoView {
    fn into_view(self) -> View;
}

impl IntoView for View {
    fn into_view(self) -> View {
        self
    }
}

impl IntoView for ElementView {
    fn into_view(self) -> View {
        View::Element(self)
    }
}

impl IntoView for String {
    fn into_view(self) -> View {
        View::Text(Cow::Owned(self))
    }
}

impl IntoView for &'static str {
    fn into_view(self) -> View {
        View::Text(Cow::Borrowed(self))
    }
}

impl<T: IntoView> IntoView for Option<T> {
    fn into_view(self) -> View {
        match self {
            Some(v) => v.into_view(),
            None => View::Empty,
        }
    }
}

impl<T: IntoView> IntoView for Vec<T> {
    fn into_view(self) -> View {
        View::fragment(self)
    }
}

/// Build a `Vec<View>` from anything implementing [`IntoView`]
#[macro_export]
macro_rules! views {
    ($($view:expr),* $(,)?) => {
        vec![$($crate::ui::IntoView::into_view($view)),*]
    };
}
