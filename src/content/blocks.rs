//! Typed records for each block kind
//!
//! These hold only the type-specific fields of a block; `id` and
//! `blocktype` live on [`super::ContentBlock`]. Optional fields are
//! `Option`, lists default to empty.

use serde::{Deserialize, Serialize};

use super::model::{HomepageImage, HomepageLink};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub image: Option<HomepageImage>,
    #[serde(default)]
    pub kicker: Option<String>,
    pub heading: String,
    #[serde(default)]
    pub subhead: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub links: Vec<HomepageLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutHero {
    pub heading: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub image: Option<HomepageImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    #[serde(default)]
    pub image: Option<HomepageImage>,
    #[serde(default)]
    pub kicker: Option<String>,
    pub heading: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub links: Vec<HomepageLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureList {
    #[serde(default)]
    pub kicker: Option<String>,
    pub heading: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub content: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub id: String,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatList {
    #[serde(default)]
    pub icon: Option<HomepageImage>,
    #[serde(default)]
    pub kicker: Option<String>,
    pub heading: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub content: Vec<Stat>,
    #[serde(default)]
    pub links: Vec<HomepageLink>,
    #[serde(default)]
    pub image: Option<HomepageImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutStat {
    pub id: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutStatList {
    #[serde(default)]
    pub content: Vec<AboutStat>,
}

/// A logo; entries without an image render nothing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoItem {
    pub id: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub image: Option<HomepageImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoList {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub logos: Vec<LogoItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutLogoList {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub links: Vec<HomepageLink>,
    #[serde(default)]
    pub logos: Vec<LogoItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    pub id: String,
    #[serde(default)]
    pub image: Option<HomepageImage>,
    pub heading: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitList {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub content: Vec<Benefit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub image: Option<HomepageImage>,
    pub heading: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub links: Vec<HomepageLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductList {
    #[serde(default)]
    pub kicker: Option<String>,
    pub heading: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub content: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "jobTitle")]
    pub job_title: Option<String>,
    #[serde(default)]
    pub image: Option<HomepageImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leadership {
    #[serde(default)]
    pub kicker: Option<String>,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub subhead: Option<String>,
    #[serde(default)]
    pub content: Vec<Person>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cta {
    #[serde(default)]
    pub kicker: Option<String>,
    pub heading: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub links: Vec<HomepageLink>,
    #[serde(default)]
    pub image: Option<HomepageImage>,
}
