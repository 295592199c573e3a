//! Link rendering rules.
//!
//! Internal links (`/page`) stay in the current tab, fragment links (`#id`)
//! scroll the page through an inline click handler, and everything else opens
//! in a new tab with `rel="nofollow"`.

use std::borrow::Cow;

use pulldown_cmark::LinkType;
use pulldown_cmark_escape::{escape_href, escape_html};

/// How a link destination is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// Site-internal path starting with `/`
    Internal,
    /// Same-page fragment, without the leading `#`
    Fragment(&'a str),
    /// Any other destination
    External,
}

impl<'a> LinkKind<'a> {
    /// Classify a link destination.
    pub fn classify(href: &'a str) -> Self {
        if href.starts_with('/') {
            Self::Internal
        } else if let Some(fragment) = href.strip_prefix('#') {
            Self::Fragment(fragment)
        } else {
            Self::External
        }
    }
}

/// Link destination as written to the `href` attribute.
///
/// Email autolinks arrive as a bare address and get their `mailto:` back.
pub fn link_href<'a>(link_type: LinkType, dest_url: &'a str) -> Cow<'a, str> {
    match link_type {
        LinkType::Email => Cow::Owned(format!("mailto:{dest_url}")),
        _ => Cow::Borrowed(dest_url),
    }
}

/// Build the opening `<a>` tag for a link.
pub fn open_tag(href: &str, title: &str) -> String {
    let mut tag = String::from("<a ");

    match LinkKind::classify(href) {
        LinkKind::Internal => {
            push_href(&mut tag, href);
        }
        LinkKind::Fragment(fragment) => {
            tag.push_str("onclick=\"document.location.hash='");
            let _ = escape_html(&mut tag, &escape_js_string(fragment));
            tag.push_str("';\" href=\"javascript:;\"");
        }
        LinkKind::External => {
            tag.push_str("target=\"_blank\" rel=\"nofollow\" ");
            push_href(&mut tag, href);
        }
    }

    if !title.is_empty() {
        tag.push_str(" title=\"");
        let _ = escape_html(&mut tag, title);
        tag.push('"');
    }

    tag.push('>');
    tag
}

fn push_href(tag: &mut String, href: &str) {
    tag.push_str("href=\"");
    let _ = escape_href(&mut *tag, href);
    tag.push('"');
}

fn escape_js_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
