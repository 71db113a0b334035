use anyhow::{anyhow, bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::config::FeedConfig;
use crate::mapping::{item_from_raw, raw_from_item};
use crate::types::{ListItem, RawFeed, RawItem};

/// Ordered item list backing a rendered page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    items: Vec<ListItem>,
}

impl Feed {
    pub fn new(items: Vec<ListItem>) -> Self { Self { items } }

    /// The six items shipped with the app.
    // Sources hold a plain `&`; the old list carried a literal `&amp;` that ended up in the frame urls.
    pub fn builtin() -> Self {
        Self::new(vec![
            ListItem::video("https://www.youtube.com/embed/rN6nlNC9WQA?rel=0&controls=0&showinfo=0", 50),
            ListItem::video("https://www.youtube.com/embed/dVkK36KOcqs?rel=0&controls=0&showinfo=0", 12),
            ListItem::article("Невероятные события в неизвестном поселке...", 175),
            ListItem::article("Секретные данные были раскрыты!", 1532),
            ListItem::video("https://www.youtube.com/embed/TKmGU77INaM?rel=0&controls=0&showinfo=0", 4253),
            ListItem::article("Кот Бегемот обладает невероятной...", 12),
        ])
    }

    pub fn items(&self) -> &[ListItem] { &self.items }
    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Replace the whole list.
    pub fn replace(&mut self, items: Vec<ListItem>) { self.items = items; }

    pub fn push(&mut self, item: ListItem) { self.items.push(item); }

    /// Load a `.json` or `.toml` feed file, applying the config's url rules.
    pub fn load(path: &Path, cfg: &FeedConfig) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read feed: {}", path.display()))?;
        let raw = match path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()).as_deref() {
            Some("json") => parse_json(&text),
            Some("toml") => toml::from_str::<RawFeed>(&text).map(|f| f.items).map_err(Into::into),
            _ => return Err(anyhow!("unsupported feed format (expected .json or .toml): {}", path.display())),
        }
        .with_context(|| format!("invalid feed: {}", path.display()))?;
        let feed = Self::from_raw(raw, cfg)?;
        tracing::info!(path = %path.display(), items = feed.len(), "loaded feed");
        Ok(feed)
    }

    pub(crate) fn from_raw(raw: Vec<RawItem>, cfg: &FeedConfig) -> Result<Self> {
        let mut items = Vec::with_capacity(raw.len());
        for (index, r) in raw.into_iter().enumerate() {
            let kind = r.kind.clone();
            let Some(item) = item_from_raw(index, r, cfg.base_url.as_ref())? else {
                tracing::warn!(index, kind = %kind, "skipping feed entry of unknown kind");
                continue;
            };
            if let ListItem::Video(v) = &item {
                if !cfg.embed_allowed(&v.source) {
                    tracing::warn!(index, source = %v.source, "skipping video from disallowed host");
                    continue;
                }
            }
            items.push(item);
        }
        Ok(Self::new(items))
    }

    /// Serialize in the feed-file JSON shape.
    pub fn to_json(&self) -> Result<String> {
        let raw = RawFeed { items: self.items.iter().map(raw_from_item).collect() };
        Ok(serde_json::to_string_pretty(&raw)?)
    }
}

// Accepts a bare array or an `{ "items": [...] }` object; every entry must be an object.
fn parse_json(text: &str) -> Result<Vec<RawItem>> {
    let entries = match serde_json::from_str::<Value>(text)? {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(entries)) => entries,
            Some(_) => bail!("`items` must be an array"),
            None => Vec::new(),
        },
        _ => bail!("expected an array of entries or an object with `items`"),
    };
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            if !entry.is_object() {
                bail!("feed entry {}: expected an object", index);
            }
            serde_json::from_value::<RawItem>(entry)
                .with_context(|| format!("feed entry {}", index))
        })
        .collect()
}
