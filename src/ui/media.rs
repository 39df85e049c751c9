//! Image wrappers: image, avatar, logo, icon

use super::tokens::{IconSize, LogoSize};
use super::view::{IntoView, View};
use super::RenderContext;
use crate::content::HomepageImage;

/// `<img>` for an image asset, using `alt` instead of the asset's own text.
/// Sources are resolved against the site root like links are.
/// Renders nothing when the asset has no source.
pub fn image_with_alt(
    cx: &RenderContext,
    image: &HomepageImage,
    alt: &str,
    class: &'static str,
) -> View {
    let el = match (&image.image_data, &image.url) {
        (Some(data), _) => View::element("img")
            .attr("src", cx.href(&data.src))
            .attr_opt("srcset", data.srcset.as_deref().map(|s| resolve_srcset(cx, s)))
            .attr_opt("sizes", data.sizes.clone())
            .attr_opt("width", data.width.map(|w| w.to_string()))
            .attr_opt("height", data.height.map(|h| h.to_string())),
        (None, Some(url)) => View::element("img").attr("src", cx.href(url)),
        (None, None) => return View::Empty,
    };
    el.class(class)
        .attr("alt", alt)
        .attr("loading", "lazy")
        .attr("decoding", "async")
        .into_view()
}

/// Resolve the url of every `url descriptor` candidate
fn resolve_srcset(cx: &RenderContext, srcset: &str) -> String {
    srcset
        .split(',')
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .map(|candidate| match candidate.split_once(char::is_whitespace) {
            Some((url, descriptor)) => format!("{} {}", cx.href(url), descriptor.trim()),
            None => cx.href(candidate),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn image(cx: &RenderContext, image: &HomepageImage) -> View {
    image_with_alt(cx, image, &image.alt, "")
}

pub fn avatar(cx: &RenderContext, image: &HomepageImage) -> View {
    image_with_alt(cx, image, &image.alt, "avatar")
}

pub fn logo(cx: &RenderContext, image: &HomepageImage, alt: &str, size: LogoSize) -> View {
    image_with_alt(cx, image, alt, size.class())
}

pub fn icon(cx: &RenderContext, image: &HomepageImage, size: IconSize) -> View {
    image_with_alt(cx, image, &image.alt, size.class())
}
