//! Minimal visual tree with an HTML serializer.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttrValue {
    Text(String),
    /// Boolean attribute, rendered bare.
    Flag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "lowercase")]
pub enum Node {
    Element {
        tag: &'static str,
        attrs: Vec<(&'static str, AttrValue)>,
        children: Vec<Node>,
    },
    Text { text: String },
    /// Children rendered in place, without a wrapping element.
    Fragment { children: Vec<Node> },
}

impl Node {
    pub fn element(tag: &'static str) -> Self {
        Node::Element { tag, attrs: Vec::new(), children: Vec::new() }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Node::Text { text: s.into() }
    }

    pub fn fragment(children: Vec<Node>) -> Self {
        Node::Fragment { children }
    }

    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            attrs.push((key, AttrValue::Text(value.into())));
        }
        self
    }

    pub fn flag(mut self, key: &'static str) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            attrs.push((key, AttrValue::Flag));
        }
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, node: Node) -> Self {
        match &mut self {
            Node::Element { children, .. } | Node::Fragment { children } => children.push(node),
            Node::Text { .. } => {}
        }
        self
    }

    /// Shorthand for appending a text child.
    pub fn with_text(self, s: impl Into<String>) -> Self {
        self.child(Node::text(s))
    }

    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Node::Element { tag, .. } => Some(*tag),
            _ => None,
        }
    }

    pub fn get_attr(&self, key: &str) -> Option<&AttrValue> {
        match self {
            Node::Element { attrs, .. } => attrs.iter().find(|(k, _)| *k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } | Node::Fragment { children } => children,
            Node::Text { .. } => &[],
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_html(self, &mut out);
        out
    }
}

fn collect_text(node: &Node, out: &mut String) {
    match node {
        Node::Text { text } => out.push_str(text),
        Node::Element { children, .. } | Node::Fragment { children } => {
            for c in children { collect_text(c, out); }
        }
    }
}

fn write_html(node: &Node, out: &mut String) {
    match node {
        Node::Text { text } => escape_into(text, out),
        Node::Fragment { children } => {
            for c in children { write_html(c, out); }
        }
        Node::Element { tag, attrs, children } => {
            out.push('<');
            out.push_str(tag);
            for (k, v) in attrs {
                out.push(' ');
                out.push_str(k);
                if let AttrValue::Text(s) = v {
                    out.push_str("=\"");
                    escape_into(s, out);
                    out.push('"');
                }
            }
            out.push('>');
            for c in children { write_html(c, out); }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(s, &mut out);
    out
}

fn escape_into(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
}
