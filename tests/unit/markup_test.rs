//! Unit tests for the shared markup helpers and the view renderers.
//!
//! Views are rendered through the `GalleryView` trait with a fixed set of
//! endpoints so the produced HTML can be compared literally.

use gallerybrowser::services::gallery_api::Endpoints;
use gallerybrowser::services::markup::{error_notice, escape_attr, escape_text, wrap_rows};
use gallerybrowser::types::gallery::ImageDetail;
use gallerybrowser::types::settings::LayoutSettings;
use gallerybrowser::types::view::Container;
use gallerybrowser::views::{
    GalleryView, ImageDetailView, RenderContext, TagListView, ThumbnailGridView,
};
use rstest::rstest;

fn render_with<V: GalleryView>(view: &V, row_length: usize) -> String {
    let endpoints = Endpoints::new("http://host/galerija");
    let layout = LayoutSettings {
        row_length,
        ..LayoutSettings::default()
    };
    let ctx = RenderContext {
        endpoints: &endpoints,
        layout: &layout,
    };
    view.render(&ctx)
}

// ─── Helpers ───

#[rstest]
#[case(0, 5, "")]
#[case(1, 5, "0")]
#[case(5, 5, "01234")]
#[case(6, 5, "01234<br>5")]
#[case(10, 5, "01234<br>56789")]
#[case(4, 2, "01<br>23")]
#[case(3, 1, "0<br>1<br>2")]
fn test_wrap_rows(#[case] count: usize, #[case] row_length: usize, #[case] expected: &str) {
    let items: Vec<String> = (0..count).map(|i| i.to_string()).collect();
    assert_eq!(wrap_rows(items, row_length), expected);
}

#[test]
fn test_escape_text_and_attr() {
    assert_eq!(escape_text("a<b>&c"), "a&lt;b&gt;&amp;c");
    let attr = escape_attr("say \"hi\"");
    assert!(!attr.contains('"'));
}

#[test]
fn test_error_notice_escapes_message() {
    let html = error_notice("Could not load tags", "<script>");
    assert!(html.starts_with("<p class=\"error\""));
    assert!(html.contains("Could not load tags: &lt;script&gt;"));
}

// ─── Tag list ───

#[test]
fn test_tag_list_renders_buttons_in_rows() {
    let mut view = TagListView::new();
    view.begin_loading();
    assert_eq!(render_with(&view, 5), "");

    view.show((1..=7).map(|i| format!("t{}", i)).collect());
    let html = render_with(&view, 5);
    assert_eq!(html.matches("<button class=\"tag\"").count(), 7);
    assert_eq!(html.matches("<br>").count(), 1);
    assert!(html.contains("data-tag=\"t6\""));
    let break_at = html.find("<br>").unwrap();
    assert!(html[..break_at].contains(">t5</button>"));
    assert!(html[break_at..].starts_with("<br><button"));
}

#[test]
fn test_tag_with_markup_is_inert() {
    let mut view = TagListView::new();
    view.show(vec!["<img src=x onerror=alert(1)>".to_string()]);
    let html = render_with(&view, 5);
    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
}

#[test]
fn test_tag_list_failure_is_visible() {
    let mut view = TagListView::new();
    view.fail("Gallery server returned status 500");
    let html = render_with(&view, 5);
    assert!(html.contains("role=\"alert\""));
    assert!(html.contains("Gallery server returned status 500"));
    assert_eq!(view.container(), Container::TagArea);
}

// ─── Thumbnails ───

#[test]
fn test_thumbnails_use_encoded_thumbnail_urls() {
    let mut view = ThumbnailGridView::new();
    view.begin_loading("sea".to_string());
    view.show(vec!["a b&c.jpg".to_string(), "d.jpg".to_string()]);

    let html = render_with(&view, 5);
    assert!(html.contains(
        "<img class=\"thumbnail\" data-image=\"a b&amp;c.jpg\" src=\"http://host/galerija/thumbnails?url=a%20b%26c.jpg\""
    ));
    assert!(html.contains("src=\"http://host/galerija/thumbnails?url=d.jpg\""));
    assert_eq!(view.selected_tag(), Some("sea"));
}

#[test]
fn test_empty_thumbnail_list_renders_nothing() {
    let mut view = ThumbnailGridView::new();
    view.begin_loading("empty".to_string());
    view.show(Vec::new());
    assert_eq!(render_with(&view, 5), "");
}

// ─── Detail ───

#[test]
fn test_detail_renders_image_name_and_tags() {
    let mut view = ImageDetailView::new();
    view.begin_loading("p1.jpg".to_string());
    view.show(ImageDetail {
        path: "p1.jpg".to_string(),
        name: "Sunset".to_string(),
        tags: vec!["sea".to_string(), "sun".to_string()],
    });

    let html = render_with(&view, 5);
    assert_eq!(
        html,
        "<img class=\"full\" src=\"http://host/galerija/getImage?url=p1.jpg\" alt=\"Sunset\">\
<h1 class=\"data\">Sunset</h1><h3 class=\"data\">[sea,sun]</h3>"
    );
}

#[test]
fn test_detail_patch_requests_scroll_only_when_loaded() {
    let endpoints = Endpoints::new("");
    let layout = LayoutSettings::default();
    let ctx = RenderContext {
        endpoints: &endpoints,
        layout: &layout,
    };

    let mut view = ImageDetailView::new();
    view.begin_loading("p1.jpg".to_string());
    assert!(!view.patch(&ctx).scroll_into_view);

    view.show(ImageDetail {
        path: "p1.jpg".to_string(),
        name: "n".to_string(),
        tags: Vec::new(),
    });
    let patch = view.patch(&ctx);
    assert!(patch.scroll_into_view);
    assert!(patch.html.contains("<h3 class=\"data\">[]</h3>"));

    view.clear();
    assert_eq!(view.selected_image(), None);
    assert_eq!(view.patch(&ctx).html, "");
}
