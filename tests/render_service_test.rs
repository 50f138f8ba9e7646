//! Tests for RenderService against parsed HTML documents

use rstest::rstest;

use areatree::application::services::RenderService;
use areatree::application::ApplicationError;
use areatree::domain::{DepthPolicy, DomainError, RenderOutcome, CONTAINER_ID};
use areatree::infrastructure::HtmlDocument;
use areatree::util::testing::capture_logs;

/// Wrap body markup into a full page
fn page(body: &str) -> String {
    format!("<!DOCTYPE html><html><head><title>t</title></head><body>{body}</body></html>")
}

fn marker(depth: &str, name: &str, url: &str, video: Option<&str>) -> String {
    let video = video
        .map(|v| format!(r#" data-video-link="{v}""#))
        .unwrap_or_default();
    format!(
        r#"<span class="product-area-data" data-depth="{depth}" data-name="{name}" data-url="{url}"{video}></span>"#
    )
}

const CONTAINER: &str = r#"<div id="product-areas-tree"></div>"#;

#[test]
fn given_container_and_no_elements_when_rendering_then_empty_and_count_zero_logged() {
    // Arrange
    let mut doc = HtmlDocument::parse(page(r#"<div id="product-areas-tree"><p>old</p></div>"#)).unwrap();

    // Act
    let (outcome, logs) = capture_logs(|| RenderService::default().render(&mut doc));

    // Assert
    assert_eq!(outcome.unwrap(), RenderOutcome::Rendered { rows: 0 });
    assert!(doc.mounted_rows(CONTAINER_ID).unwrap().rows().is_empty());
    assert!(!doc.to_html().contains("old"));
    assert_eq!(logs.matches("product area elements found: 0").count(), 1);
}

#[test]
fn given_root_element_when_rendering_then_single_unindented_link() {
    // Arrange
    let body = format!("{}{}", marker("0", "Root", "/root", None), CONTAINER);
    let mut doc = HtmlDocument::parse(page(&body)).unwrap();

    // Act
    RenderService::default().render(&mut doc).unwrap();

    // Assert
    let rows = doc.mounted_rows(CONTAINER_ID).unwrap().rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].indent_px, 0);
    assert_eq!(rows[0].primary.text, "Root");
    assert_eq!(rows[0].primary.href, "/root");
    assert!(rows[0].video.is_none());
}

#[test]
fn given_child_with_video_when_rendering_then_indented_with_video_link() {
    // Arrange
    let body = format!(
        "{}{}",
        marker("2", "Child", "/child", Some("https://video.example/child")),
        CONTAINER
    );
    let mut doc = HtmlDocument::parse(page(&body)).unwrap();

    // Act
    RenderService::default().render(&mut doc).unwrap();

    // Assert
    let row = &doc.mounted_rows(CONTAINER_ID).unwrap().rows()[0];
    assert_eq!(row.indent_px, 40);
    let video = row.video.as_ref().expect("video link");
    assert_eq!(video.text, " (Video)");
    assert_eq!(video.href, "https://video.example/child");
    assert!(video.opens_new_context);
    assert!(doc.to_html().contains(
        r#"<a href="https://video.example/child" target="_blank"> (Video)</a>"#
    ));
}

#[test]
fn given_no_container_when_rendering_then_error_logged_and_page_untouched() {
    // Arrange
    let source = page(&marker("0", "Root", "/root", None));
    let mut doc = HtmlDocument::parse(source.clone()).unwrap();

    // Act
    let (outcome, logs) = capture_logs(|| RenderService::default().render(&mut doc));

    // Assert
    assert_eq!(outcome.unwrap(), RenderOutcome::ContainerMissing);
    assert!(logs.contains("ERROR"));
    assert!(logs.contains("tree container not found"));
    assert!(doc.mounted_rows(CONTAINER_ID).is_none());
    assert_eq!(doc.to_html(), source);
}

#[rstest]
#[case(1)]
#[case(5)]
#[case(12)]
fn given_n_elements_when_rendering_then_n_rows_in_document_order(#[case] n: usize) {
    // Arrange
    let markers: String = (0..n)
        .map(|i| marker(&(i % 3).to_string(), &format!("area-{i}"), &format!("/a/{i}"), None))
        .collect();
    let mut doc = HtmlDocument::parse(page(&format!("{CONTAINER}{markers}"))).unwrap();

    // Act
    let outcome = RenderService::default().render(&mut doc).unwrap();

    // Assert
    assert_eq!(outcome, RenderOutcome::Rendered { rows: n });
    let rows = doc.mounted_rows(CONTAINER_ID).unwrap().rows();
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.primary.text, format!("area-{i}"));
        assert_eq!(row.indent_px, (i % 3) as u32 * 20);
    }
}

#[test]
fn given_rendered_page_when_rendering_again_then_identical_output() {
    // Arrange
    let body = format!(
        "{}{}{}",
        marker("0", "Root", "/root", None),
        marker("1", "Child", "/child", Some("https://v.example/c")),
        CONTAINER
    );
    let mut doc = HtmlDocument::parse(page(&body)).unwrap();
    let service = RenderService::default();

    // Act
    service.render(&mut doc).unwrap();
    let first = doc.to_html();
    let first_rows = doc.mounted_rows(CONTAINER_ID).unwrap().clone();
    service.render(&mut doc).unwrap();

    // Assert
    assert_eq!(doc.to_html(), first);
    assert_eq!(doc.mounted_rows(CONTAINER_ID).unwrap(), &first_rows);
}

#[rstest]
#[case("abc")]
#[case("")]
fn given_malformed_depth_when_default_policy_then_row_at_zero_and_warned(#[case] depth: &str) {
    // Arrange
    let body = format!("{}{}", marker(depth, "Odd", "/odd", None), CONTAINER);
    let mut doc = HtmlDocument::parse(page(&body)).unwrap();

    // Act
    let (outcome, logs) = capture_logs(|| RenderService::default().render(&mut doc));

    // Assert
    assert_eq!(outcome.unwrap(), RenderOutcome::Rendered { rows: 1 });
    assert_eq!(doc.mounted_rows(CONTAINER_ID).unwrap().rows()[0].indent_px, 0);
    assert!(logs.contains("malformed data-depth"));
}

#[test]
fn given_negative_depth_when_rendering_then_clamped_to_zero() {
    // Arrange
    let body = format!("{}{}", marker("-3", "Neg", "/neg", None), CONTAINER);
    let mut doc = HtmlDocument::parse(page(&body)).unwrap();

    // Act
    RenderService::default().render(&mut doc).unwrap();

    // Assert
    assert_eq!(doc.mounted_rows(CONTAINER_ID).unwrap().rows()[0].indent_px, 0);
}

#[test]
fn given_malformed_depth_when_reject_policy_then_error_and_container_untouched() {
    // Arrange
    let body = format!(
        "{}{}{}",
        marker("0", "Root", "/root", None),
        marker("deep", "Odd", "/odd", None),
        r#"<div id="product-areas-tree"><p>old</p></div>"#
    );
    let mut doc = HtmlDocument::parse(page(&body)).unwrap();

    // Act
    let err = RenderService::new(DepthPolicy::Reject)
        .render(&mut doc)
        .unwrap_err();

    // Assert
    match err {
        ApplicationError::Domain(DomainError::InvalidDepth { index, value }) => {
            assert_eq!(index, 1);
            assert_eq!(value.as_deref(), Some("deep"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(doc.to_html().contains("<p>old</p>"));
}

#[test]
fn given_element_without_name_and_url_when_rendering_then_empty_link() {
    // Arrange
    let body = format!(
        r#"<i class="product-area-data" data-depth="1"></i>{}"#,
        CONTAINER
    );
    let mut doc = HtmlDocument::parse(page(&body)).unwrap();

    // Act
    RenderService::default().render(&mut doc).unwrap();

    // Assert
    assert!(doc.to_html().contains(
        r#"<div class="tree-item" style="margin-left: 20px;"><a href=""></a></div>"#
    ));
}

#[rstest]
#[case::comment(r#"<!--<div id="product-areas-tree"></div>-->"#)]
#[case::script(r#"<script>var tpl = '<div id="product-areas-tree"></div>';</script>"#)]
fn given_container_markup_before_container_when_rendering_then_rows_in_real_container(
    #[case] decoy: &str,
) {
    // Arrange
    let body = format!("{}{}{}", decoy, marker("1", "Child", "/child", None), CONTAINER);
    let mut doc = HtmlDocument::parse(page(&body)).unwrap();

    // Act
    RenderService::default().render(&mut doc).unwrap();

    // Assert
    let html = doc.to_html();
    assert!(html.contains(decoy));
    assert!(html.contains(concat!(
        r#"<div id="product-areas-tree">"#,
        r#"<div class="tree-item" style="margin-left: 20px;"><a href="/child">Child</a></div>"#,
        "</div>"
    )));
    assert_eq!(html.matches("tree-item").count(), 1);
}
