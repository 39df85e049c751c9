//! Tagged content blocks
//!
//! A block arrives as `{ id, blocktype, ...fields }`. Decoding splits off
//! `id` and `blocktype`, resolves the tag to a [`BlockKind`] and parses the
//! remaining fields into that kind's record. Tags with no kind become
//! [`BlockBody::Unknown`], and known tags whose fields do not fit the record
//! become [`BlockBody::Invalid`]. Both are left for the dispatcher's fallback.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::blocks::{
    AboutHero, AboutLogoList, AboutStatList, BenefitList, Cta, FeatureList, Hero, Leadership,
    LogoList, ProductList, StatList,
};
use super::error::ContentError;

/// Every block kind with a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Hero,
    AboutHero,
    FeatureList,
    StatList,
    AboutStatList,
    LogoList,
    AboutLogoList,
    BenefitList,
    ProductList,
    Leadership,
    Cta,
}

impl BlockKind {
    pub const ALL: [BlockKind; 11] = [
        BlockKind::Hero,
        BlockKind::AboutHero,
        BlockKind::FeatureList,
        BlockKind::StatList,
        BlockKind::AboutStatList,
        BlockKind::LogoList,
        BlockKind::AboutLogoList,
        BlockKind::BenefitList,
        BlockKind::ProductList,
        BlockKind::Leadership,
        BlockKind::Cta,
    ];

    /// Tag used by the content schema
    pub fn tag(self) -> &'static str {
        match self {
            BlockKind::Hero => "HomepageHero",
            BlockKind::AboutHero => "AboutHero",
            BlockKind::FeatureList => "HomepageFeatureList",
            BlockKind::StatList => "HomepageStatList",
            BlockKind::AboutStatList => "AboutStatList",
            BlockKind::LogoList => "HomepageLogoList",
            BlockKind::AboutLogoList => "AboutLogoList",
            BlockKind::BenefitList => "HomepageBenefitList",
            BlockKind::ProductList => "HomepageProductList",
            BlockKind::Leadership => "AboutLeadership",
            BlockKind::Cta => "HomepageCta",
        }
    }

    /// Short tag accepted in hand-written content
    pub fn alias(self) -> &'static str {
        match self {
            BlockKind::Hero => "hero",
            BlockKind::AboutHero => "about-hero",
            BlockKind::FeatureList => "feature-list",
            BlockKind::StatList => "stat-list",
            BlockKind::AboutStatList => "about-stat-list",
            BlockKind::LogoList => "logo-list",
            BlockKind::AboutLogoList => "about-logo-list",
            BlockKind::BenefitList => "benefit-list",
            BlockKind::ProductList => "product-list",
            BlockKind::Leadership => "leadership-list",
            BlockKind::Cta => "call-to-action",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag || kind.alias() == tag)
    }
}

/// Type-specific part of a block
#[derive(Debug, Clone, PartialEq)]
pub enum BlockBody {
    Hero(Hero),
    AboutHero(AboutHero),
    FeatureList(FeatureList),
    StatList(StatList),
    AboutStatList(AboutStatList),
    LogoList(LogoList),
    AboutLogoList(AboutLogoList),
    BenefitList(BenefitList),
    ProductList(ProductList),
    Leadership(Leadership),
    Cta(Cta),
    /// A tag with no registered kind
    Unknown { blocktype: String },
    /// A known tag whose fields failed to decode
    Invalid { kind: BlockKind, error: String },
}

impl BlockBody {
    pub fn kind(&self) -> Option<BlockKind> {
        Some(match self {
            BlockBody::Hero(_) => BlockKind::Hero,
            BlockBody::AboutHero(_) => BlockKind::AboutHero,
            BlockBody::FeatureList(_) => BlockKind::FeatureList,
            BlockBody::StatList(_) => BlockKind::StatList,
            BlockBody::AboutStatList(_) => BlockKind::AboutStatList,
            BlockBody::LogoList(_) => BlockKind::LogoList,
            BlockBody::AboutLogoList(_) => BlockKind::AboutLogoList,
            BlockBody::BenefitList(_) => BlockKind::BenefitList,
            BlockBody::ProductList(_) => BlockKind::ProductList,
            BlockBody::Leadership(_) => BlockKind::Leadership,
            BlockBody::Cta(_) => BlockKind::Cta,
            BlockBody::Unknown { .. } | BlockBody::Invalid { .. } => return None,
        })
    }

    /// Canonical tag for known kinds, the original tag otherwise
    pub fn blocktype(&self) -> &str {
        match self {
            BlockBody::Unknown { blocktype } => blocktype,
            BlockBody::Invalid { kind, .. } => kind.tag(),
            known => known.kind().map(BlockKind::tag).unwrap_or_default(),
        }
    }

    /// Why a known block could not be decoded
    pub fn error(&self) -> Option<&str> {
        match self {
            BlockBody::Invalid { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// One renderable unit of a page
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    /// Rendering key, unique within a page
    pub id: String,
    pub body: BlockBody,
}

impl ContentBlock {
    /// Decode a block from its tag and remaining fields.
    ///
    /// Only a missing tag is an error. Fields that do not match the tag's
    /// record produce [`BlockBody::Invalid`].
    pub fn decode(
        id: impl Into<String>,
        blocktype: &str,
        fields: Map<String, Value>,
    ) -> Result<Self, ContentError> {
        let id = id.into();
        let blocktype = blocktype.trim();
        if blocktype.is_empty() {
            return Err(ContentError::EmptyBlockType { id });
        }

        let Some(kind) = BlockKind::from_tag(blocktype) else {
            return Ok(Self {
                id,
                body: BlockBody::Unknown {
                    blocktype: blocktype.to_string(),
                },
            });
        };

        let body = match decode_body(&id, kind, Value::Object(fields)) {
            Ok(body) => body,
            Err(err) => BlockBody::Invalid {
                kind,
                error: err.to_string(),
            },
        };

        Ok(Self { id, body })
    }

    /// Decode a block from a JSON object carrying `id` and `blocktype`
    pub fn from_value(value: Value) -> Result<Self, ContentError> {
        let raw: RawBlock = serde_json::from_value(value).map_err(ContentError::MalformedBlock)?;
        Self::decode(raw.id, &raw.blocktype, raw.fields)
    }
}

fn decode_body(id: &str, kind: BlockKind, fields: Value) -> Result<BlockBody, ContentError> {
    Ok(match kind {
        BlockKind::Hero => BlockBody::Hero(parse(id, kind, fields)?),
        BlockKind::AboutHero => BlockBody::AboutHero(parse(id, kind, fields)?),
        BlockKind::FeatureList => BlockBody::FeatureList(parse(id, kind, fields)?),
        BlockKind::StatList => BlockBody::StatList(parse(id, kind, fields)?),
        BlockKind::AboutStatList => BlockBody::AboutStatList(parse(id, kind, fields)?),
        BlockKind::LogoList => BlockBody::LogoList(parse(id, kind, fields)?),
        BlockKind::AboutLogoList => BlockBody::AboutLogoList(parse(id, kind, fields)?),
        BlockKind::BenefitList => BlockBody::BenefitList(parse(id, kind, fields)?),
        BlockKind::ProductList => BlockBody::ProductList(parse(id, kind, fields)?),
        BlockKind::Leadership => BlockBody::Leadership(parse(id, kind, fields)?),
        BlockKind::Cta => BlockBody::Cta(parse(id, kind, fields)?),
    })
}

fn parse<T: DeserializeOwned>(id: &str, kind: BlockKind, fields: Value) -> Result<T, ContentError> {
    serde_json::from_value(fields).map_err(|source| ContentError::InvalidBlock {
        id: id.to_string(),
        blocktype: kind.tag(),
        source,
    })
}

#[derive(Deserialize)]
struct RawBlock {
    id: String,
    blocktype: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl<'de> Deserialize<'de> for ContentBlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawBlock::deserialize(deserializer)?;
        ContentBlock::decode(raw.id, &raw.blocktype, raw.fields).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_tag_accepts_canonical_and_alias() {
        assert_eq!(BlockKind::from_tag("HomepageHero"), Some(BlockKind::Hero));
        assert_eq!(BlockKind::from_tag("hero"), Some(BlockKind::Hero));
        assert_eq!(
            BlockKind::from_tag("AboutLeadership"),
            Some(BlockKind::Leadership)
        );
        assert_eq!(BlockKind::from_tag("HomepageTestimonialList"), None);
    }

    #[test]
    fn test_tags_are_unique() {
        let mut tags: Vec<&str> = BlockKind::ALL
            .iter()
            .flat_map(|k| [k.tag(), k.alias()])
            .collect();
        tags.sort();
        tags.dedup();
        assert_eq!(tags.len(), BlockKind::ALL.len() * 2);
    }

    #[test]
    fn test_decode_strips_id_and_blocktype() {
        let block =
            ContentBlock::from_value(json!({"id": "1", "blocktype": "hero", "heading": "Welcome"}))
                .unwrap();
        assert_eq!(block.id, "1");
        match block.body {
            BlockBody::Hero(hero) => {
                assert_eq!(hero.heading, "Welcome");
                assert!(hero.kicker.is_none());
                assert!(hero.links.is_empty());
            }
            other => panic!("expected hero, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_unknown_tag() {
        let block = ContentBlock::from_value(
            json!({"id": "9", "blocktype": "HomepageTestimonialList", "quote": "hi"}),
        )
        .unwrap();
        assert_eq!(block.body.kind(), None);
        assert_eq!(block.body.blocktype(), "HomepageTestimonialList");
    }

    #[test]
    fn test_decode_empty_blocktype_fails() {
        let err = ContentBlock::decode("3", "  ", Map::new()).unwrap_err();
        assert!(matches!(err, ContentError::EmptyBlockType { id } if id == "3"));
    }

    #[test]
    fn test_decode_invalid_fields_degrades() {
        let block = ContentBlock::from_value(json!({"id": "4", "blocktype": "cta", "text": "Hi"}))
            .unwrap();
        assert_eq!(block.id, "4");
        assert_eq!(block.body.kind(), None);
        assert_eq!(block.body.blocktype(), "HomepageCta");
        let error = block.body.error().unwrap();
        assert!(error.contains("heading"), "{}", error);
    }

    #[test]
    fn test_missing_blocktype_is_malformed() {
        let err = ContentBlock::from_value(json!({"id": "5", "heading": "Hi"})).unwrap_err();
        assert!(matches!(err, ContentError::MalformedBlock(_)));
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let block: ContentBlock = serde_yaml::from_str(
            r#"
id: stats
blocktype: AboutStatList
content:
  - id: s1
    value: "12"
    label: Offices
  - id: s2
    label: Countries
"#,
        )
        .unwrap();
        match block.body {
            BlockBody::AboutStatList(list) => {
                assert_eq!(list.content.len(), 2);
                assert_eq!(list.content[1].value, None);
            }
            other => panic!("expected about stat list, got {:?}", other),
        }
    }
}
