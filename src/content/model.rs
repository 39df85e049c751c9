//! Shared content records: links and images

use serde::{Deserialize, Serialize};

/// A navigation target, internal or external
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomepageLink {
    pub id: String,
    pub href: String,
    pub text: String,
}

/// Descriptor of an already-processed image asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    pub src: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub srcset: Option<String>,
    #[serde(default)]
    pub sizes: Option<String>,
}

/// Reference to an image asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomepageImage {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default, alias = "imageData")]
    pub image_data: Option<ImageData>,
    #[serde(default)]
    pub url: Option<String>,
}

impl HomepageImage {
    /// Source URL, preferring the processed image data
    pub fn src(&self) -> Option<&str> {
        self.image_data
            .as_ref()
            .map(|d| d.src.as_str())
            .or(self.url.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_src_prefers_image_data() {
        let image: HomepageImage = serde_yaml::from_str(
            r#"
id: img1
alt: Team
imageData:
  src: /images/team-800.webp
  width: 800
url: /images/team.jpg
"#,
        )
        .unwrap();
        assert_eq!(image.src(), Some("/images/team-800.webp"));
        assert_eq!(image.image_data.unwrap().width, Some(800));
    }

    #[test]
    fn test_image_without_source() {
        let image: HomepageImage = serde_yaml::from_str("alt: nothing").unwrap();
        assert_eq!(image.src(), None);
    }
}
