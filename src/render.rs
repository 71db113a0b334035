//! Item and page rendering.
//!
//! Items go through the decorated component for their kind; the page wraps the
//! resulting nodes into a self-contained HTML document with inline styles.

use crate::classify::Thresholds;
use crate::components::{article, decorate_with, video};
use crate::node::{escape, Node};
use crate::types::ListItem;

pub const DEFAULT_TITLE: &str = "Media feed";

#[derive(Debug, Clone)]
pub struct Renderer {
    thresholds: Thresholds,
    title: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { thresholds: Thresholds::default(), title: DEFAULT_TITLE.to_string() }
    }
}

impl Renderer {
    pub fn new(thresholds: Thresholds, title: impl Into<String>) -> Self {
        Self { thresholds, title: title.into() }
    }

    pub fn thresholds(&self) -> Thresholds { self.thresholds }

    pub fn item(&self, item: &ListItem) -> Node {
        match item {
            ListItem::Video(v) => decorate_with(self.thresholds, video)(v),
            ListItem::Article(a) => decorate_with(self.thresholds, article)(a),
        }
    }

    /// One node per item, in input order.
    pub fn list(&self, items: &[ListItem]) -> Vec<Node> {
        items.iter().map(|i| self.item(i)).collect()
    }

    pub fn page(&self, items: &[ListItem]) -> String {
        let body = Node::element("div")
            .class("list")
            .child(Node::fragment(self.list(items)));
        format!(
            r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    {body}
</body>
</html>
"#,
            title = escape(&self.title),
            css = inline_css(),
            body = body.to_html(),
        )
    }
}

pub fn render_item(item: &ListItem) -> Node {
    Renderer::default().item(item)
}

pub fn render_list(items: &[ListItem]) -> Vec<Node> {
    Renderer::default().list(items)
}

fn inline_css() -> &'static str {
    r#"
* {
    box-sizing: border-box;
}

body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    color: #111827;
    background: #ffffff;
}

.list {
    max-width: 720px;
    margin: 0 auto;
    padding: 2rem;
}

.item {
    margin: 1rem 0;
    padding: 1rem;
    border: 1px solid #e5e7eb;
    border-radius: 0.5rem;
}

.item iframe {
    width: 100%;
    aspect-ratio: 16 / 9;
    border: 0;
}

.item .views {
    color: #6b7280;
    font-size: 0.875rem;
}

.wrap-item {
    position: relative;
    margin: 1.5rem 0;
    padding: 0.25rem;
    border-radius: 0.5rem;
}

.wrap-item .label {
    position: absolute;
    top: -0.75rem;
    left: 1rem;
    padding: 0 0.5rem;
    font-weight: 700;
    color: #ffffff;
    border-radius: 0.25rem;
}

.wrap-item-new {
    border: 2px solid #10b981;
}

.wrap-item-new .label {
    background: #10b981;
}

.wrap-item-popular {
    border: 2px solid #ef4444;
}

.wrap-item-popular .label {
    background: #ef4444;
}
"#
}
