//! Block dispatch
//!
//! Turns an ordered list of [`ContentBlock`]s into one [`Rendered`] slot per
//! block. Known kinds go to their section renderer. Unknown tags and blocks
//! whose fields failed to decode go to the fallback, which renders nothing
//! and reports the block to a [`DispatchObserver`].

use std::cell::RefCell;

use crate::content::{BlockBody, ContentBlock};
use crate::sections;
use crate::ui::{RenderContext, View};

/// Receives diagnostics from the fallback renderer
pub trait DispatchObserver {
    fn unresolved_block(&self, id: &str, blocktype: &str);

    /// A known tag whose fields could not be decoded
    fn invalid_block(&self, id: &str, blocktype: &str, _error: &str) {
        self.unresolved_block(id, blocktype);
    }
}

/// Logs unresolved blocks as warnings
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl DispatchObserver for TracingObserver {
    fn unresolved_block(&self, id: &str, blocktype: &str) {
        tracing::warn!("No component found for: {} (block {})", blocktype, id);
    }

    fn invalid_block(&self, id: &str, blocktype: &str, error: &str) {
        tracing::warn!("Skipping {} block {}: {}", blocktype, id, error);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedBlock {
    pub id: String,
    pub blocktype: String,
    /// Decoding error, for known tags with bad fields
    pub error: Option<String>,
}

/// Collects unresolved blocks instead of logging them
#[derive(Debug, Default)]
pub struct RecordingObserver {
    unresolved: RefCell<Vec<UnresolvedBlock>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unresolved(&self) -> Vec<UnresolvedBlock> {
        self.unresolved.borrow().clone()
    }

    pub fn into_unresolved(self) -> Vec<UnresolvedBlock> {
        self.unresolved.into_inner()
    }
}

impl DispatchObserver for RecordingObserver {
    fn unresolved_block(&self, id: &str, blocktype: &str) {
        self.unresolved.borrow_mut().push(UnresolvedBlock {
            id: id.to_string(),
            blocktype: blocktype.to_string(),
            error: None,
        });
    }

    fn invalid_block(&self, id: &str, blocktype: &str, error: &str) {
        self.unresolved.borrow_mut().push(UnresolvedBlock {
            id: id.to_string(),
            blocktype: blocktype.to_string(),
            error: Some(error.to_string()),
        });
    }
}

/// One output slot, keyed by the block id
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub key: String,
    pub view: View,
}

pub struct Dispatcher<'a, O: DispatchObserver = TracingObserver> {
    cx: RenderContext<'a>,
    observer: &'a O,
}

impl<'a, O: DispatchObserver> Dispatcher<'a, O> {
    pub fn new(cx: RenderContext<'a>, observer: &'a O) -> Self {
        Self { cx, observer }
    }

    /// Render one block
    pub fn render(&self, block: &ContentBlock) -> Rendered {
        let view = match render_body(&block.body, &self.cx) {
            Some(view) => view,
            None => self.fallback(&block.id, &block.body),
        };
        Rendered {
            key: block.id.clone(),
            view,
        }
    }

    /// Render blocks in order, one slot per block
    pub fn render_all(&self, blocks: &[ContentBlock]) -> Vec<Rendered> {
        blocks.iter().map(|block| self.render(block)).collect()
    }

    /// Render blocks into a single fragment
    pub fn render_view(&self, blocks: &[ContentBlock]) -> View {
        View::fragment(self.render_all(blocks).into_iter().map(|r| r.view))
    }

    fn fallback(&self, id: &str, body: &BlockBody) -> View {
        match body.error() {
            Some(error) => self.observer.invalid_block(id, body.blocktype(), error),
            None => self.observer.unresolved_block(id, body.blocktype()),
        }
        View::Empty
    }
}

/// The renderer registry. `None` for tags without a renderer.
pub fn render_body(body: &BlockBody, cx: &RenderContext) -> Option<View> {
    Some(match body {
        BlockBody::Hero(props) => sections::hero(props, cx),
        BlockBody::AboutHero(props) => sections::about_hero(props, cx),
        BlockBody::FeatureList(props) => sections::feature_list(props, cx),
        BlockBody::StatList(props) => sections::stat_list(props, cx),
        BlockBody::AboutStatList(props) => sections::about_stat_list(props, cx),
        BlockBody::LogoList(props) => sections::logo_list(props, cx),
        BlockBody::AboutLogoList(props) => sections::about_logo_list(props, cx),
        BlockBody::BenefitList(props) => sections::benefit_list(props, cx),
        BlockBody::ProductList(props) => sections::product_list(props, cx),
        BlockBody::Leadership(props) => sections::leadership(props, cx),
        BlockBody::Cta(props) => sections::cta(props, cx),
        BlockBody::Unknown { .. } | BlockBody::Invalid { .. } => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use serde_json::json;

    fn block(value: serde_json::Value) -> ContentBlock {
        ContentBlock::from_value(value).unwrap()
    }

    fn sample_blocks() -> Vec<ContentBlock> {
        vec![
            block(json!({"id": "a", "blocktype": "HomepageHero", "heading": "One"})),
            block(json!({"id": "b", "blocktype": "HomepageTestimonialList"})),
            block(json!({"id": "c", "blocktype": "HomepageHero", "heading": "Two"})),
        ]
    }

    #[test]
    fn test_one_slot_per_block_in_order() {
        let config = SiteConfig::default();
        let observer = RecordingObserver::new();
        let dispatcher = Dispatcher::new(RenderContext::new(&config), &observer);

        let blocks = sample_blocks();
        let out = dispatcher.render_all(&blocks);

        assert_eq!(out.len(), blocks.len());
        let keys: Vec<_> = out.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert!(out[0].view.text_content().contains("One"));
        assert!(out[1].view.is_empty());
        assert!(out[2].view.text_content().contains("Two"));
    }

    #[test]
    fn test_unknown_tag_reported_once() {
        let config = SiteConfig::default();
        let observer = RecordingObserver::new();
        let dispatcher = Dispatcher::new(RenderContext::new(&config), &observer);

        dispatcher.render_all(&sample_blocks());

        assert_eq!(
            observer.into_unresolved(),
            vec![UnresolvedBlock {
                id: "b".into(),
                blocktype: "HomepageTestimonialList".into(),
                error: None,
            }]
        );
    }

    #[test]
    fn test_invalid_block_falls_back_and_siblings_render() {
        let config = SiteConfig::default();
        let observer = RecordingObserver::new();
        let dispatcher = Dispatcher::new(RenderContext::new(&config), &observer);

        let blocks = vec![
            block(json!({"id": "a", "blocktype": "hero", "heading": "First"})),
            block(json!({"id": "b", "blocktype": "HomepageCta", "text": "No heading"})),
            block(json!({"id": "c", "blocktype": "hero", "heading": "Second"})),
        ];
        let out = dispatcher.render_all(&blocks);

        assert_eq!(out.len(), 3);
        assert!(out[0].view.text_content().contains("First"));
        assert!(out[1].view.is_empty());
        assert!(out[2].view.text_content().contains("Second"));

        let unresolved = observer.into_unresolved();
        assert_eq!(unresolved.len(), 1);
        assert_eq!(unresolved[0].id, "b");
        assert_eq!(unresolved[0].blocktype, "HomepageCta");
        assert!(unresolved[0].error.as_deref().unwrap().contains("heading"));
    }

    #[test]
    fn test_empty_sequence() {
        let config = SiteConfig::default();
        let observer = RecordingObserver::new();
        let dispatcher = Dispatcher::new(RenderContext::new(&config), &observer);
        assert!(dispatcher.render_all(&[]).is_empty());
        assert!(dispatcher.render_view(&[]).is_empty());
        assert!(observer.unresolved().is_empty());
    }

    #[test]
    fn test_hero_block_reaches_renderer_without_id_or_tag() {
        let config = SiteConfig::default();
        let observer = RecordingObserver::new();
        let dispatcher = Dispatcher::new(RenderContext::new(&config), &observer);

        let blocks = vec![block(
            json!({"id": "1", "blocktype": "hero", "heading": "Welcome"}),
        )];
        let out = dispatcher.render_all(&blocks);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].key, "1");
        let html = out[0].view.render_to_string();
        assert!(html.contains("Welcome"));
        assert!(!html.contains("hero\""));
        assert_eq!(out[0].view.text_content(), "Welcome");
        assert!(observer.unresolved().is_empty());
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let config = SiteConfig::default();
        let observer = RecordingObserver::new();
        let dispatcher = Dispatcher::new(RenderContext::new(&config), &observer);
        let blocks = sample_blocks();
        assert_eq!(dispatcher.render_all(&blocks), dispatcher.render_all(&blocks));
    }

    #[test]
    fn test_heading_survives_each_missing_optional_field() {
        let config = SiteConfig::default();
        let observer = RecordingObserver::new();
        let dispatcher = Dispatcher::new(RenderContext::new(&config), &observer);
        let image = json!({"id": "img", "alt": "Alt", "url": "/img/a.png"});
        let links = json!([{"id": "l", "href": "/go", "text": "Go"}]);

        let full = vec![
            json!({"blocktype": "hero", "kicker": "K", "subhead": "S", "text": "T",
                   "image": image, "links": links}),
            json!({"blocktype": "about-hero", "text": "T", "image": image}),
            json!({"blocktype": "feature-list", "kicker": "K", "text": "T",
                   "content": [{"id": "f", "heading": "F", "image": image, "links": links}]}),
            json!({"blocktype": "stat-list", "icon": image, "kicker": "K", "text": "T",
                   "content": [{"id": "s", "value": "1", "label": "L"}],
                   "links": links, "image": image}),
            json!({"blocktype": "benefit-list", "text": "T",
                   "content": [{"id": "b", "heading": "B", "text": "T", "image": image}]}),
            json!({"blocktype": "product-list", "kicker": "K", "text": "T",
                   "content": [{"id": "p", "heading": "P", "text": "T", "image": image,
                                "links": links}]}),
            json!({"blocktype": "leadership-list", "kicker": "K", "subhead": "S",
                   "content": [{"id": "p", "name": "N", "jobTitle": "J", "image": image}]}),
            json!({"blocktype": "call-to-action", "kicker": "K", "text": "T",
                   "links": links, "image": image}),
        ];

        for mut value in full {
            value["id"] = json!("x");
            value["heading"] = json!("Main heading");
            let fields = value.as_object().unwrap().clone();
            let optional = fields
                .keys()
                .filter(|k| !matches!(k.as_str(), "id" | "blocktype" | "heading"));
            for dropped in optional {
                let mut partial = fields.clone();
                partial.remove(dropped);
                let block = block(serde_json::Value::Object(partial));
                let out = dispatcher.render(&block);
                assert!(
                    out.view.text_content().contains("Main heading"),
                    "{} lost its heading without {}",
                    block.body.blocktype(),
                    dropped
                );
            }
        }
        assert!(observer.unresolved().is_empty());
    }

    #[test]
    fn test_every_kind_has_a_renderer() {
        let config = SiteConfig::default();
        let cx = RenderContext::new(&config);
        for kind in crate::content::BlockKind::ALL {
            let block = block(json!({
                "id": kind.alias(),
                "blocktype": kind.tag(),
                "heading": "Heading",
            }));
            assert!(
                render_body(&block.body, &cx).is_some(),
                "no renderer for {}",
                kind.tag()
            );
        }
    }
}
