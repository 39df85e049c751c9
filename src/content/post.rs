//! Blog post model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::model::HomepageImage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogAuthor {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<HomepageImage>,
}

/// Reference to a neighbouring post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostLink {
    pub slug: String,
    pub title: String,
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub date: DateTime<Local>,
    /// Rendered body, inserted verbatim
    pub html: String,
    pub image: Option<HomepageImage>,
    pub author: Option<BlogAuthor>,
    /// Newer post
    pub next: Option<PostLink>,
    /// Older post
    pub previous: Option<PostLink>,
}

impl BlogPost {
    pub fn link(&self) -> PostLink {
        PostLink {
            slug: self.slug.clone(),
            title: self.title.clone(),
        }
    }

    /// Fill `next`/`previous` for posts sorted newest first
    pub fn link_neighbours(posts: &mut [BlogPost]) {
        let links: Vec<PostLink> = posts.iter().map(BlogPost::link).collect();
        for (i, post) in posts.iter_mut().enumerate() {
            post.next = i.checked_sub(1).map(|n| links[n].clone());
            post.previous = links.get(i + 1).cloned();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn post(slug: &str, day: u32) -> BlogPost {
        BlogPost {
            id: slug.to_string(),
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            excerpt: String::new(),
            category: "Updates".to_string(),
            date: Local.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            html: String::new(),
            image: None,
            author: None,
            next: None,
            previous: None,
        }
    }

    #[test]
    fn test_link_neighbours() {
        let mut posts = vec![post("c", 3), post("b", 2), post("a", 1)];
        BlogPost::link_neighbours(&mut posts);

        assert_eq!(posts[0].next, None);
        assert_eq!(posts[0].previous.as_ref().unwrap().slug, "b");
        assert_eq!(posts[1].next.as_ref().unwrap().slug, "c");
        assert_eq!(posts[1].previous.as_ref().unwrap().slug, "a");
        assert_eq!(posts[2].previous, None);
    }

    #[test]
    fn test_link_neighbours_single_post() {
        let mut posts = vec![post("only", 1)];
        BlogPost::link_neighbours(&mut posts);
        assert_eq!(posts[0].next, None);
        assert_eq!(posts[0].previous, None);
    }
}
