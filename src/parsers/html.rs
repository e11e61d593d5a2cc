use crate::parsers::text::{normalize, normalize_all};
use crate::results::{Headings, NO_TITLE, PageRecord};
use crate::utils::dedup_preserving_order;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Parses HTML source and extracts a [`PageRecord`] for the page at `page_url`
pub fn extract_from_str(html: &str, page_url: &Url) -> PageRecord {
    let doc = Html::parse_document(html);
    extract(&doc, page_url)
}

/// Extracts title, headings, paragraphs, links and images from a parsed document.
///
/// Text is normalized and every list is deduplicated in document order.
/// Links and image sources are resolved against `page_url`; links also lose
/// their fragment.
pub fn extract(doc: &Html, page_url: &Url) -> PageRecord {
    let record = PageRecord {
        title: extract_title(doc),
        headings: extract_headings(doc),
        paragraphs: dedup_preserving_order(normalize_all(
            doc.select(&selector("p")).map(element_text),
        )),
        links: extract_links(doc, page_url),
        images: extract_images(doc, page_url),
    };

    ::log::debug!(
        "Extracted {} paragraphs, {} links and {} images from {}",
        record.paragraphs.len(),
        record.links.len(),
        record.images.len(),
        page_url
    );

    record
}

fn extract_title(doc: &Html) -> String {
    doc.select(&selector("title"))
        .next()
        .map(|title| normalize(&element_text(title)))
        .unwrap_or_else(|| NO_TITLE.to_string())
}

fn extract_headings(doc: &Html) -> Headings {
    let mut headings = Headings::default();
    for level in 1..=3u8 {
        let heading = selector(&format!("h{level}"));
        let found = doc.select(&heading).map(element_text);
        if let Some(slot) = headings.level_mut(level) {
            *slot = dedup_preserving_order(normalize_all(found));
        }
    }
    headings
}

fn extract_links(doc: &Html, page_url: &Url) -> Vec<String> {
    let anchor = selector("a");
    let links = doc
        .select(&anchor)
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| resolve(page_url, href))
        .map(|mut url| {
            url.set_fragment(None);
            url.to_string()
        });
    dedup_preserving_order(links)
}

fn extract_images(doc: &Html, page_url: &Url) -> Vec<String> {
    let img = selector("img");
    let images = doc
        .select(&img)
        .filter_map(|img| img.value().attr("src"))
        .filter_map(|src| resolve(page_url, src))
        .map(|url| url.to_string());
    dedup_preserving_order(images)
}

/// Resolves a possibly relative reference against the page URL
fn resolve(page_url: &Url, reference: &str) -> Option<Url> {
    match page_url.join(reference) {
        Ok(url) => Some(url),
        Err(e) => {
            ::log::trace!("Skipping unresolvable reference '{}': {}", reference, e);
            None
        }
    }
}

/// Concatenated text of an element and all its descendants
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("tag selectors are valid CSS")
}
