//! Block-driven pages: the homepage and the about page

use super::layout::{PageMeta, PageView};
use crate::content::Page;
use crate::dispatch::{DispatchObserver, Dispatcher};
use crate::ui::RenderContext;

/// Render a page whose body is its block sequence
pub fn block_page<O: DispatchObserver>(page: &Page, cx: RenderContext, observer: &O) -> PageView {
    let body = Dispatcher::new(cx, observer).render_view(&page.blocks);
    let meta = PageMeta::new(page.title.clone())
        .description(page.description.clone())
        .image(page.image.as_ref().and_then(|i| i.src()).map(str::to_string));
    PageView::new(meta, body)
}

pub fn homepage<O: DispatchObserver>(page: &Page, cx: RenderContext, observer: &O) -> PageView {
    block_page(page, cx, observer)
}

pub fn about<O: DispatchObserver>(page: &Page, cx: RenderContext, observer: &O) -> PageView {
    block_page(page, cx, observer)
}
