//! Property-based tests for markup safety.
//!
//! Server-provided strings (tags, image paths, names) are arbitrary text. No
//! matter what they contain, rendering must not produce markup the server did
//! not intend, and generated URLs must carry the value as a single segment or
//! query parameter.

use gallerybrowser::services::gallery_api::{encode_query, encode_segment, Endpoints};
use gallerybrowser::services::markup::{escape_attr, escape_text};
use gallerybrowser::types::gallery::ImageDetail;
use gallerybrowser::types::settings::LayoutSettings;
use gallerybrowser::views::{GalleryView, ImageDetailView, RenderContext, TagListView};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn escaped_text_has_no_markup(value in any::<String>()) {
        let escaped = escape_text(&value);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
    }

    #[test]
    fn escaped_attr_cannot_close_quote(value in any::<String>()) {
        let escaped = escape_attr(&value);
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('<'));
    }

    #[test]
    fn encoded_segment_stays_one_segment(value in any::<String>()) {
        let encoded = encode_segment(&value);
        prop_assert!(!encoded.contains('/'));
        prop_assert!(!encoded.contains('?'));
        prop_assert!(!encoded.contains('#'));
        prop_assert!(encoded.is_ascii());
    }

    #[test]
    fn encoded_query_stays_one_parameter(value in any::<String>()) {
        let encoded = encode_query(&value);
        prop_assert!(!encoded.contains('&'));
        prop_assert!(!encoded.contains('='));
        prop_assert!(!encoded.contains('#'));
        prop_assert!(!encoded.contains('"'));
        prop_assert!(encoded.is_ascii());
    }

    /// Each tag renders as exactly one button, whatever its content.
    #[test]
    fn tag_buttons_are_inert(tags in proptest::collection::vec(any::<String>(), 1..10)) {
        let mut view = TagListView::new();
        view.show(tags.clone());

        let endpoints = Endpoints::new("http://host/g");
        let layout = LayoutSettings { row_length: 0, ..LayoutSettings::default() };
        let html = view.render(&RenderContext { endpoints: &endpoints, layout: &layout });

        prop_assert_eq!(html.matches('<').count(), tags.len() * 2);
        prop_assert_eq!(html.matches("</button>").count(), tags.len());
    }

    /// The detail view emits its four fixed tags and nothing else.
    #[test]
    fn detail_markup_is_fixed(
        path in any::<String>(),
        name in any::<String>(),
        tags in proptest::collection::vec(any::<String>(), 0..5),
    ) {
        let mut view = ImageDetailView::new();
        view.begin_loading(path.clone());
        view.show(ImageDetail { path, name, tags });

        let endpoints = Endpoints::new("http://host/g");
        let layout = LayoutSettings::default();
        let html = view.render(&RenderContext { endpoints: &endpoints, layout: &layout });

        prop_assert_eq!(html.matches('<').count(), 5);
        prop_assert!(html.starts_with("<img class=\"full\" src=\"http://host/g/getImage?url="));
    }
}
