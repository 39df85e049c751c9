//! Front-matter parsing for blog posts

use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use super::model::HomepageImage;
use super::post::BlogAuthor;

/// Front-matter of a post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub image: Option<HomepageImage>,
    pub author: Option<BlogAuthor>,
    /// Posts are published unless stated otherwise
    pub published: bool,
}

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            id: None,
            title: None,
            slug: None,
            excerpt: None,
            category: None,
            date: None,
            image: None,
            author: None,
            published: true,
        }
    }
}

impl FrontMatter {
    /// Split a document into front-matter and body.
    ///
    /// A document without a leading `---` block has default front-matter.
    /// A `---` block that is not valid YAML is an error.
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let trimmed = content.trim_start();
        let Some(rest) = trimmed.strip_prefix("---") else {
            return Ok((FrontMatter::default(), content));
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end) = rest.find("\n---") else {
            return Err(anyhow!("Unterminated front-matter block"));
        };

        let yaml = &rest[..end];
        let body = rest[end + 4..].trim_start_matches(['\n', '\r']);

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm: FrontMatter = serde_yaml::from_str(yaml)
            .map_err(|e| anyhow!("Failed to parse YAML front-matter: {}", e))?;
        Ok((fm, body))
    }

    pub fn parse_date(&self) -> Option<DateTime<Local>> {
        self.date.as_deref().and_then(parse_date_string)
    }
}

/// Parse a date string in the formats authors commonly use
fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Local.from_local_datetime(&dt).earliest();
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Local.from_local_datetime(&d.and_hms_opt(0, 0, 0)?).earliest();
        }
    }

    None
}
