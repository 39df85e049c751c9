//! Block-driven pages (homepage, about)

use serde::Deserialize;
use std::collections::HashSet;

use super::block::ContentBlock;
use super::model::HomepageImage;

/// A page whose body is an ordered sequence of blocks
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<HomepageImage>,
    /// Render order
    #[serde(default, alias = "content")]
    pub blocks: Vec<ContentBlock>,
}

impl Page {
    /// Block ids that appear more than once, in first-repeat order
    pub fn duplicate_block_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for block in &self.blocks {
            if !seen.insert(block.id.as_str()) && !duplicates.contains(&block.id.as_str()) {
                duplicates.push(block.id.as_str());
            }
        }
        duplicates
    }
}
