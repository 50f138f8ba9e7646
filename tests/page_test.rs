//! Tests for the one-shot page lifecycle

use areatree::application::services::{Page, RenderService};
use areatree::domain::{RenderOutcome, CONTAINER_ID};
use areatree::infrastructure::HtmlDocument;
use areatree::util::testing::{capture_logs, init_test_setup};

const CATALOG: &str = include_str!("resources/catalog.html");

#[test]
fn given_loaded_catalog_when_opening_then_rendered_once() {
    // Arrange
    init_test_setup();
    let doc = HtmlDocument::parse(CATALOG).unwrap();

    // Act
    let (page, outcome) = Page::open(doc, RenderService::default()).unwrap();

    // Assert
    assert_eq!(outcome, RenderOutcome::Rendered { rows: 4 });
    let html = page.document().to_html();
    assert!(!html.contains("Loading..."));
    assert!(html.contains("<footer>keep me</footer>"));
    assert!(html.contains(r#"<h1>Product areas</h1>"#));
}

#[test]
fn given_opened_page_when_ready_fires_again_then_no_second_render() {
    // Arrange
    let doc = HtmlDocument::parse(CATALOG).unwrap();
    let (mut page, _) = Page::open(doc, RenderService::default()).unwrap();

    // Act
    let (second, logs) = capture_logs(|| page.content_loaded());

    // Assert
    assert_eq!(second.unwrap(), None);
    assert!(!logs.contains("product area elements found"));
}

#[test]
fn given_new_page_when_ready_fires_then_renders_then_ignores() {
    // Arrange
    let doc = HtmlDocument::parse(CATALOG).unwrap();
    let mut page = Page::new(doc, RenderService::default());
    assert!(page.document().mounted_rows(CONTAINER_ID).is_none());

    // Act
    let first = page.content_loaded().unwrap();
    let second = page.content_loaded().unwrap();

    // Assert
    assert_eq!(first, Some(RenderOutcome::Rendered { rows: 4 }));
    assert_eq!(second, None);
    let doc = page.into_document();
    let rows = doc.mounted_rows(CONTAINER_ID).unwrap().rows();
    let summary: Vec<_> = rows
        .iter()
        .map(|r| (r.indent_px, r.primary.text.as_str(), r.video.is_some()))
        .collect();
    assert_eq!(
        summary,
        [
            (0, "Platform", false),
            (20, "Auth", true),
            (40, "Login", false),
            (20, "Billing", false),
        ]
    );
}

#[test]
fn given_page_without_container_when_opening_then_missing_and_verbatim() {
    // Arrange
    let source = CATALOG.replace(r#"<div id="product-areas-tree"><em>Loading...</em></div>"#, "");
    let doc = HtmlDocument::parse(source.clone()).unwrap();

    // Act
    let ((page, outcome), logs) =
        capture_logs(|| Page::open(doc, RenderService::default()).unwrap());

    // Assert
    assert_eq!(outcome, RenderOutcome::ContainerMissing);
    assert!(logs.contains("tree container not found"));
    assert_eq!(page.document().to_html(), source);
}
