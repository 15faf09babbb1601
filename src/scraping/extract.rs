//! HTML extraction: visible page text and anchor targets.

use std::sync::OnceLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

static WHITESPACE: OnceLock<Regex> = OnceLock::new();

fn whitespace() -> &'static Regex {
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

/// Visible text of a page: every text node under `<body>` that is not
/// inside a non-rendered element, joined with spaces and collapsed to
/// single spaces. Case is preserved; callers lowercase when they need to.
pub fn page_text(body: &str) -> String {
    let document = Html::parse_document(body);
    let body_selector = Selector::parse("body").expect("valid body selector");

    let mut parts = Vec::new();
    if let Some(root) = document.select(&body_selector).next() {
        collect_text(&root, &mut parts);
    } else {
        for node in document.tree.nodes() {
            if let Some(text) = node.value().as_text() {
                parts.push(text.text.to_string());
            }
        }
    }

    let joined = parts.join(" ");
    whitespace().replace_all(&joined, " ").trim().to_string()
}

fn collect_text(element: &ElementRef, parts: &mut Vec<String>) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            let tag = child_element.value().name();
            if matches!(
                tag,
                "script" | "style" | "noscript" | "svg" | "canvas" | "iframe"
            ) {
                continue;
            }
            collect_text(&child_element, parts);
        } else if let Some(text) = child.value().as_text() {
            parts.push(text.text.to_string());
        }
    }
}

/// Every `a[href]` in document order, resolved against `base_url`.
/// Hrefs that cannot be resolved are dropped silently. Duplicates and
/// fragments are kept as-is: the crawl loop treats distinct strings as
/// distinct pages.
pub fn page_links(body: &str, base_url: &str) -> Vec<String> {
    let Ok(base) = Url::parse(base_url) else {
        return Vec::new();
    };

    let document = Html::parse_document(body);
    let selector = Selector::parse("a[href]").expect("valid anchor selector");

    let mut links = Vec::new();
    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if let Ok(resolved) = base.join(href) {
            links.push(resolved.to_string());
        }
    }
    links
}
