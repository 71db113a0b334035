pub mod classify;
pub mod components;
pub mod config;
pub mod feed;
pub mod mapping;
pub mod node;
pub mod render;
pub mod types;

// --- Library API for embedding ---

/// Convenience re-exports for embedders.
pub mod prelude {
    pub use crate::classify::{classify, Badge, Thresholds};
    pub use crate::components::{decorate, decorate_with};
    pub use crate::config::FeedConfig;
    pub use crate::feed::Feed;
    pub use crate::node::Node;
    pub use crate::render::{render_item, render_list, Renderer};
    pub use crate::types::{Article, ListItem, Video, Viewed};
    pub use crate::MediaFeed;
}

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use crate::classify::Badge;
use crate::config::FeedConfig;
use crate::feed::Feed;
use crate::node::Node;
use crate::render::Renderer;
use crate::types::{ListItem, Viewed};

/// One line of the item summary.
#[derive(Debug, Clone, Serialize)]
pub struct ItemSummary {
    pub kind: &'static str,
    pub views: u64,
    pub badge: Badge,
    pub label: String,
}

/// Library entry point. Owns the configuration and the current feed.
pub struct MediaFeed {
    config: FeedConfig,
    feed: Feed,
    renderer: Renderer,
}

impl MediaFeed {
    pub fn new(config: FeedConfig, feed: Feed) -> Self {
        let renderer = config.renderer();
        Self { config, feed, renderer }
    }

    /// Feed from `feed_path`, else the config's feed file, else the built-in list.
    pub fn open(config: FeedConfig, feed_path: Option<&Path>) -> Result<Self> {
        let feed = match feed_path.or(config.feed.as_deref()) {
            Some(p) => Feed::load(p, &config)?,
            None => {
                tracing::debug!("no feed file given, using built-in feed");
                Feed::builtin()
            }
        };
        Ok(Self::new(config, feed))
    }

    pub fn config(&self) -> &FeedConfig { &self.config }
    pub fn feed(&self) -> &Feed { &self.feed }
    pub fn feed_mut(&mut self) -> &mut Feed { &mut self.feed }

    pub fn nodes(&self) -> Vec<Node> { self.renderer.list(self.feed.items()) }

    pub fn render_html(&self) -> String { self.renderer.page(self.feed.items()) }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.nodes())?)
    }

    pub fn classify(&self, views: u64) -> Badge { self.renderer.thresholds().classify(views) }

    pub fn summary(&self) -> Vec<ItemSummary> {
        self.feed.items().iter().map(|i| self.summarize(i)).collect()
    }

    pub fn summary_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.summary())?)
    }

    fn summarize(&self, item: &ListItem) -> ItemSummary {
        ItemSummary {
            kind: item.kind(),
            views: item.views(),
            badge: self.classify(item.views()),
            label: item.label().to_string(),
        }
    }
}
