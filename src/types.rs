use serde::{Deserialize, Serialize};

/// Embeddable video, bound to a source locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub source: String,
    pub views: u64,
}

/// Article with a linked title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub views: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Video(Video),
    Article(Article),
}

impl ListItem {
    pub fn video(source: impl Into<String>, views: u64) -> Self {
        ListItem::Video(Video { source: source.into(), views })
    }

    pub fn article(title: impl Into<String>, views: u64) -> Self {
        ListItem::Article(Article { title: title.into(), views })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ListItem::Video(_) => "video",
            ListItem::Article(_) => "article",
        }
    }

    /// Source for videos, title for articles.
    pub fn label(&self) -> &str {
        match self {
            ListItem::Video(v) => &v.source,
            ListItem::Article(a) => &a.title,
        }
    }
}

/// Anything that reports a view count can be decorated.
pub trait Viewed {
    fn views(&self) -> u64;
}

impl Viewed for Video {
    fn views(&self) -> u64 { self.views }
}

impl Viewed for Article {
    fn views(&self) -> u64 { self.views }
}

impl Viewed for ListItem {
    fn views(&self) -> u64 {
        match self {
            ListItem::Video(v) => v.views,
            ListItem::Article(a) => a.views,
        }
    }
}

// Loose on-disk shape of a feed entry; only the feed loader sees it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub(crate) struct RawItem {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub views: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct RawFeed {
    #[serde(default)]
    pub items: Vec<RawItem>,
}
