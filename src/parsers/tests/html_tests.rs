use crate::parsers::html::{extract, extract_from_str};
use crate::results::{Headings, NO_TITLE};
use scraper::Html;
use url::Url;

fn page_url() -> Url {
    Url::parse("http://a.com/docs/page").unwrap()
}

#[test]
fn test_extract_simple_page() {
    let html = r#"<title>Test</title><h1>Hi</h1><p>Hello</p><a href="/about#x">About</a>"#;
    let base = Url::parse("http://a.com/").unwrap();
    let record = extract_from_str(html, &base);

    assert_eq!(record.title, "Test");
    assert_eq!(
        record.headings,
        Headings {
            h1: vec!["Hi".to_string()],
            h2: vec![],
            h3: vec![],
        }
    );
    assert_eq!(record.paragraphs, vec!["Hello"]);
    assert_eq!(record.links, vec!["http://a.com/about"]);
    assert!(record.images.is_empty());
}

#[test]
fn test_missing_title_uses_sentinel() {
    let record = extract_from_str("<html><body><p>Text</p></body></html>", &page_url());
    assert_eq!(record.title, NO_TITLE);
}

#[test]
fn test_title_is_normalized() {
    let record = extract_from_str(
        "<html><head><title>\n  My   Site \t</title></head></html>",
        &page_url(),
    );
    assert_eq!(record.title, "My Site");
}

#[test]
fn test_headings_collected_per_level() {
    let html = r#"
        <h1>Main</h1>
        <h2>  First   section </h2>
        <h2>First section</h2>
        <h2></h2>
        <h3>Detail <em>one</em></h3>
        <h4>Ignored</h4>
        <h2>Second section</h2>
    "#;
    let record = extract_from_str(html, &page_url());

    assert_eq!(record.headings.h1, vec!["Main"]);
    assert_eq!(record.headings.h2, vec!["First section", "Second section"]);
    assert_eq!(record.headings.h3, vec!["Detail one"]);
}

#[test]
fn test_empty_heading_levels_present() {
    let record = extract_from_str("<p>No headings here</p>", &page_url());
    assert!(record.headings.h1.is_empty());
    assert!(record.headings.h2.is_empty());
    assert!(record.headings.h3.is_empty());
}

#[test]
fn test_paragraphs_deduplicated_in_order() {
    let html = r#"
        <p>Beta</p>
        <p>  Alpha </p>
        <p>   </p>
        <p>Beta</p>
        <p>Gamma <a href="/x">link</a> text</p>
    "#;
    let record = extract_from_str(html, &page_url());
    assert_eq!(record.paragraphs, vec!["Beta", "Alpha", "Gamma link text"]);
}

#[test]
fn test_links_resolved_and_fragment_stripped() {
    let html = r##"
        <a href="other">Relative</a>
        <a href="/root#top">Rooted</a>
        <a href="http://a.com/p#section">Absolute</a>
        <a href="/root">Rooted again</a>
        <a href="#only-fragment">Same page</a>
        <a name="anchor">No href</a>
        <a href="https://b.com/z?q=1#frag">External</a>
    "##;
    let record = extract_from_str(html, &page_url());

    assert_eq!(
        record.links,
        vec![
            "http://a.com/docs/other",
            "http://a.com/root",
            "http://a.com/p",
            "http://a.com/docs/page",
            "https://b.com/z?q=1",
        ]
    );
    assert!(record.links.iter().all(|link| !link.contains('#')));
}

#[test]
fn test_images_resolved_and_deduplicated() {
    let html = r#"
        <img src="logo.png">
        <img src="/img/banner.jpg#keep">
        <img alt="no source">
        <img src="http://a.com/docs/logo.png">
    "#;
    let record = extract_from_str(html, &page_url());
    assert_eq!(
        record.images,
        vec!["http://a.com/docs/logo.png", "http://a.com/img/banner.jpg#keep"]
    );
}

#[test]
fn test_extract_from_parsed_document() {
    let doc = Html::parse_document("<title>Parsed</title><p>Body</p>");
    let record = extract(&doc, &page_url());
    assert_eq!(record.title, "Parsed");
    assert_eq!(record.paragraphs, vec!["Body"]);
}
