use anyhow::{anyhow, Context, Result};
use url::Url;

use crate::types::{ListItem, RawItem};

/// Convert one on-disk entry into an item. Unknown kinds yield `Ok(None)`.
pub(crate) fn item_from_raw(index: usize, raw: RawItem, base_url: Option<&Url>) -> Result<Option<ListItem>> {
    match raw.kind.trim().to_ascii_lowercase().as_str() {
        "video" => {
            let url = raw.url.filter(|u| !u.trim().is_empty())
                .ok_or_else(|| anyhow!("feed entry {}: video without `url`", index))?;
            let source = resolve_source(&url, base_url)
                .with_context(|| format!("feed entry {}: bad video url `{}`", index, url))?;
            Ok(Some(ListItem::video(source, raw.views)))
        }
        "article" => {
            let title = raw.title
                .ok_or_else(|| anyhow!("feed entry {}: article without `title`", index))?;
            Ok(Some(ListItem::article(title, raw.views)))
        }
        _ => Ok(None),
    }
}

pub(crate) fn raw_from_item(item: &ListItem) -> RawItem {
    match item {
        ListItem::Video(v) => RawItem { kind: "video".into(), url: Some(v.source.clone()), title: None, views: v.views },
        ListItem::Article(a) => RawItem { kind: "article".into(), url: None, title: Some(a.title.clone()), views: a.views },
    }
}

// Absolute urls pass through untouched; relative ones join the base when there is one.
fn resolve_source(url: &str, base_url: Option<&Url>) -> Result<String> {
    if Url::parse(url).is_ok() {
        return Ok(url.to_string());
    }
    match base_url {
        Some(base) => Ok(base.join(url)?.to_string()),
        None => Ok(url.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(kind: &str, url: Option<&str>, title: Option<&str>, views: u64) -> RawItem {
        RawItem { kind: kind.into(), url: url.map(Into::into), title: title.map(Into::into), views }
    }

    #[test]
    fn maps_known_kinds() {
        let v = item_from_raw(0, raw("video", Some("u1"), None, 50), None).unwrap();
        assert_eq!(v, Some(ListItem::video("u1", 50)));
        let a = item_from_raw(1, raw("Article", None, Some("t1"), 175), None).unwrap();
        assert_eq!(a, Some(ListItem::article("t1", 175)));
    }

    #[test]
    fn unknown_kind_is_skipped() {
        assert_eq!(item_from_raw(0, raw("podcast", Some("x"), None, 1), None).unwrap(), None);
    }

    #[test]
    fn missing_required_field_names_entry() {
        let err = item_from_raw(3, raw("video", None, Some("t"), 1), None).unwrap_err();
        assert!(err.to_string().contains("feed entry 3"));
        assert!(item_from_raw(0, raw("article", Some("u"), None, 1), None).is_err());
    }

    #[test]
    fn relative_sources_join_base() {
        let base = Url::parse("https://cdn.example.com/embed/").unwrap();
        let v = item_from_raw(0, raw("video", Some("abc?rel=0"), None, 5), Some(&base)).unwrap();
        assert_eq!(v, Some(ListItem::video("https://cdn.example.com/embed/abc?rel=0", 5)));
        let abs = item_from_raw(0, raw("video", Some("https://other.org/x"), None, 5), Some(&base)).unwrap();
        assert_eq!(abs, Some(ListItem::video("https://other.org/x", 5)));
    }

    #[test]
    fn raw_keeps_kind_and_fields() {
        let r = raw_from_item(&ListItem::article("t", 3));
        assert_eq!(r.kind, "article");
        assert_eq!(r.title.as_deref(), Some("t"));
        assert!(r.url.is_none());
    }
}
