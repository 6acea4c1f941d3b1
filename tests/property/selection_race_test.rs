//! Property-based tests for out-of-order responses.
//!
//! A random sequence of user actions is issued, then the resulting fetches
//! complete in a random order. Whatever the order, the views must end up
//! showing the response to the last request for each container, and the
//! detail view must never show an image fetched before the last tag change.

use gallerybrowser::managers::gallery_browser::{FetchTicket, GalleryBrowser, GalleryBrowserTrait};
use gallerybrowser::services::gallery_api::Endpoints;
use gallerybrowser::types::gallery::{ApiRequest, ApiResponse, ImageDetail};
use gallerybrowser::types::settings::LayoutSettings;
use gallerybrowser::types::view::ViewState;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    SelectTag(u8),
    SelectImage(u8),
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0u8..4).prop_map(Action::SelectTag),
        (0u8..6).prop_map(Action::SelectImage),
    ]
}

/// The response a well-behaved server would give for `request`.
fn answer(request: &ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::Tags => ApiResponse::Tags(vec!["t0".to_string()]),
        ApiRequest::Urls(tag) => ApiResponse::Urls(vec![format!("{}-a.jpg", tag)]),
        ApiRequest::ImageData(image) => ApiResponse::ImageData(ImageDetail {
            path: image.clone(),
            name: image.to_uppercase(),
            tags: Vec::new(),
        }),
    }
}

/// Moves each element to a position picked by `keys`, giving a permutation.
fn shuffle<T>(items: Vec<T>, keys: &[u32]) -> Vec<T> {
    let mut keyed: Vec<(u32, usize, T)> = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| (keys.get(i).copied().unwrap_or(0), i, item))
        .collect();
    keyed.sort_by_key(|(key, i, _)| (*key, *i));
    keyed.into_iter().map(|(_, _, item)| item).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn last_request_wins(
        actions in proptest::collection::vec(arb_action(), 1..12),
        keys in proptest::collection::vec(any::<u32>(), 12),
    ) {
        let mut browser = GalleryBrowser::new(Endpoints::new(""), LayoutSettings::default());

        let mut tickets: Vec<FetchTicket> = Vec::new();
        let mut last_tag: Option<String> = None;
        // image requested after the last tag change, if any
        let mut last_image: Option<String> = None;

        for action in &actions {
            match action {
                Action::SelectTag(t) => {
                    let tag = format!("tag{}", t);
                    tickets.push(browser.select_tag(&tag).ticket);
                    last_tag = Some(tag);
                    last_image = None;
                }
                Action::SelectImage(i) => {
                    let image = format!("img{}.jpg", i);
                    tickets.push(browser.select_image(&image).ticket);
                    last_image = Some(image);
                }
            }
        }

        for ticket in shuffle(tickets, &keys) {
            let response = answer(&ticket.request);
            browser.complete(&ticket, Ok(response));
        }

        match &last_tag {
            Some(tag) => prop_assert_eq!(
                browser.thumbnails().state(),
                &ViewState::Loaded(vec![format!("{}-a.jpg", tag)])
            ),
            None => prop_assert_eq!(browser.thumbnails().state(), &ViewState::Empty),
        }

        match &last_image {
            Some(image) => {
                let shown = browser.detail().state().loaded().map(|d| d.path.clone());
                prop_assert_eq!(shown.as_ref(), Some(image));
            }
            None => prop_assert_eq!(browser.detail().state(), &ViewState::Empty),
        }
    }

    #[test]
    fn stale_tickets_render_nothing(extra in 1usize..6) {
        let mut browser = GalleryBrowser::new(Endpoints::new(""), LayoutSettings::default());
        let first = browser.select_tag("first").ticket;
        for i in 0..extra {
            browser.select_tag(&format!("later{}", i));
        }
        let patches = browser.complete(&first, Ok(answer(&first.request)));
        prop_assert!(patches.is_empty());
        prop_assert_eq!(browser.thumbnails().state(), &ViewState::Loading);
    }
}
