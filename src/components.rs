use crate::classify::{Badge, Thresholds};
use crate::node::Node;
use crate::types::{Article, Video, Viewed};

const VIDEO_CAPTION: &str = "Просмотров";
const ARTICLE_CAPTION: &str = "Прочтений";

fn caption(prefix: &str, views: u64) -> Node {
    Node::element("p").class("views").with_text(format!("{}: {}", prefix, views))
}

/// Base form of a video: an embedded frame plus a views caption.
pub fn video(v: &Video) -> Node {
    Node::element("div")
        .class("item item-video")
        .child(
            Node::element("iframe")
                .attr("src", v.source.as_str())
                .attr("allow", "autoplay; encrypted-media")
                .flag("allowfullscreen"),
        )
        .child(caption(VIDEO_CAPTION, v.views))
}

/// Base form of an article: a linked heading plus a reads caption.
pub fn article(a: &Article) -> Node {
    Node::element("div")
        .class("item item-article")
        .child(
            Node::element("h3")
                .child(Node::element("a").attr("href", "#").with_text(a.title.as_str())),
        )
        .child(caption(ARTICLE_CAPTION, a.views))
}

/// Surround `inner` with the badge container, or return it as is for `Neutral`.
pub fn badge_wrap(badge: Badge, inner: Node) -> Node {
    match (badge.css_class(), badge.label()) {
        (Some(class), Some(label)) => Node::element("div")
            .class(format!("wrap-item {}", class))
            .child(Node::element("span").class("label").with_text(label))
            .child(inner),
        _ => inner,
    }
}

/// Lift a base renderer into one that adds the Popular/New decoration.
pub fn decorate<T, F>(base: F) -> impl Fn(&T) -> Node
where
    T: Viewed + ?Sized,
    F: Fn(&T) -> Node,
{
    decorate_with(Thresholds::default(), base)
}

pub fn decorate_with<T, F>(thresholds: Thresholds, base: F) -> impl Fn(&T) -> Node
where
    T: Viewed + ?Sized,
    F: Fn(&T) -> Node,
{
    move |item: &T| badge_wrap(thresholds.classify(item.views()), base(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::AttrValue;

    #[test]
    fn video_frame_binds_source() {
        let n = video(&Video { source: "u1".into(), views: 7 });
        let frame = &n.children()[0];
        assert_eq!(frame.tag(), Some("iframe"));
        assert_eq!(frame.get_attr("src"), Some(&AttrValue::Text("u1".into())));
        assert_eq!(frame.get_attr("allowfullscreen"), Some(&AttrValue::Flag));
        assert_eq!(n.children()[1].text_content(), "Просмотров: 7");
    }

    #[test]
    fn article_heading_links_title() {
        let n = article(&Article { title: "t1".into(), views: 175 });
        assert_eq!(
            n.to_html(),
            r##"<div class="item item-article"><h3><a href="#">t1</a></h3><p class="views">Прочтений: 175</p></div>"##
        );
    }

    #[test]
    fn neutral_wrap_is_identity() {
        let inner = Node::element("p").with_text("x");
        assert_eq!(badge_wrap(Badge::Neutral, inner.clone()), inner);
    }

    #[test]
    fn new_wrap_puts_label_first() {
        let n = badge_wrap(Badge::New, Node::text("body"));
        assert_eq!(
            n.to_html(),
            r#"<div class="wrap-item wrap-item-new"><span class="label">New!</span>body</div>"#
        );
    }

    #[test]
    fn decorate_wraps_by_default_thresholds() {
        let wrapped_video = decorate(video);
        let n = wrapped_video(&Video { source: "u1".into(), views: 50 });
        assert_eq!(n.get_attr("class"), Some(&AttrValue::Text("wrap-item wrap-item-new".into())));
        assert_eq!(n.children()[1], video(&Video { source: "u1".into(), views: 50 }));

        let wrapped_article = decorate(article);
        let plain = Article { title: "t1".into(), views: 1000 };
        assert_eq!(wrapped_article(&plain), article(&plain));
    }

    #[test]
    fn decorate_uses_given_thresholds() {
        let render = decorate_with(Thresholds { popular_above: 5, new_below: 1 }, article);
        let n = render(&Article { title: "t".into(), views: 6 });
        assert_eq!(n.get_attr("class"), Some(&AttrValue::Text("wrap-item wrap-item-popular".into())));
    }
}
