//! End-to-end gallery scenarios
//!
//! Walks the display-state machine through the flows a session actually
//! takes: fetch success, fetch failure, searching, and modal navigation.

use facewall_core::client::{parse_batch, FetchOptions, ProfileClient};
use facewall_core::search::filter_by_name;
use facewall_core::{
    navigate, CardView, DetailView, GalleryStatus, ProfileBatch, FETCH_ERROR_MESSAGE,
};

/// Build an API envelope body carrying `count` distinct profiles
fn envelope_body(count: usize) -> String {
    let records: Vec<String> = (0..count)
        .map(|i| {
            format!(
                r#"{{
                    "name": {{ "title": "Ms", "first": "User{i}", "last": "Example" }},
                    "location": {{
                        "street": {{ "number": {number}, "name": "Dane St" }},
                        "city": "Tulsa",
                        "state": "Oklahoma",
                        "postcode": 74104
                    }},
                    "email": "user{i}@example.com",
                    "dob": {{ "date": "1990-05-02T00:00:00.000Z", "age": 36 }},
                    "phone": "(555) 123-4567",
                    "picture": {{
                        "large": "https://example.com/large/{i}.jpg",
                        "medium": "https://example.com/med/{i}.jpg"
                    }}
                }}"#,
                i = i,
                number = 100 + i,
            )
        })
        .collect();

    format!(r#"{{ "results": [{}] }}"#, records.join(","))
}

fn loaded_batch(count: usize) -> ProfileBatch {
    parse_batch(&envelope_body(count)).expect("fixture envelope parses")
}

// ============================================================================
// Fetch Finalization Scenarios
// ============================================================================

/// Successful fetch of 12 profiles: 12 cards, loading state gone
#[test]
fn test_successful_fetch_renders_twelve_cards() {
    let status = GalleryStatus::from_fetch(parse_batch(&envelope_body(12)));
    assert!(!status.is_loading());

    let batch = status.batch().expect("batch present after success");
    assert_eq!(batch.len(), 12);

    let cards: Vec<CardView> = filter_by_name(batch, "")
        .iter()
        .map(|hit| CardView::from_profile(hit.profile))
        .collect();
    assert_eq!(cards.len(), 12);
    assert_eq!(cards[0].display_name, "User0 Example");
    assert_eq!(cards[0].locality, "Tulsa, Oklahoma");
}

/// Failed fetch: exact error message shown, loading state gone, no batch
#[test]
fn test_failed_fetch_shows_message_and_keeps_batch_empty() {
    let status = GalleryStatus::from_fetch(parse_batch("<html>502</html>"));

    assert!(!status.is_loading());
    assert!(status.batch().is_none());
    assert_eq!(status, GalleryStatus::Failed(FETCH_ERROR_MESSAGE.to_string()));
}

/// A refused connection takes the same failure path as a bad body
#[tokio::test]
async fn test_unreachable_endpoint_fails_fetch() {
    // Port 9 (discard) on loopback is not listening; connect is refused
    let client = ProfileClient::new(FetchOptions {
        endpoint: "http://127.0.0.1:9/".to_string(),
        ..FetchOptions::default()
    });

    let status = GalleryStatus::from_fetch(client.fetch_batch().await);
    assert_eq!(status, GalleryStatus::Failed(FETCH_ERROR_MESSAGE.to_string()));
}

// ============================================================================
// Search Scenarios
// ============================================================================

/// A query matching nothing yields zero cards (the "no results" state)
#[test]
fn test_no_results_query() {
    let batch = loaded_batch(12);
    let hits = filter_by_name(&batch, "no such person");
    assert!(hits.is_empty());
}

/// Typing progressively narrows, then restores on clear
#[test]
fn test_search_narrows_and_clears() {
    let batch = loaded_batch(12);

    assert_eq!(filter_by_name(&batch, "user1").len(), 3); // User1, User10, User11
    assert_eq!(filter_by_name(&batch, "user11").len(), 1);
    assert_eq!(filter_by_name(&batch, "").len(), 12);
}

// ============================================================================
// Modal Navigation Scenarios
// ============================================================================

/// Open the modal at index 0 and click Prev: wraps to the last profile
#[test]
fn test_modal_prev_from_first_wraps_to_last() {
    let batch = loaded_batch(12);

    let index = navigate::prev_index(0, batch.len()).unwrap();
    assert_eq!(index, 11);

    let view = DetailView::from_profile(batch.get(index).unwrap()).unwrap();
    assert_eq!(view.display_name, "User11 Example");
    assert_eq!(view.birthday, "05/02/1990");
    assert_eq!(view.phone, "(555) 123-4567");
}

/// Next from the last profile wraps back to the first
#[test]
fn test_modal_next_from_last_wraps_to_first() {
    let batch = loaded_batch(12);

    let index = navigate::next_index(11, batch.len()).unwrap();
    assert_eq!(index, 0);
    assert_eq!(batch.get(index).unwrap().display_name(), "User0 Example");
}

/// With a search active, navigation still walks the FULL batch: stepping
/// from a filtered hit lands on its unfiltered neighbor
#[test]
fn test_navigation_ignores_active_filter() {
    let batch = loaded_batch(12);

    // Filter down to a single hit at original index 5
    let hits = filter_by_name(&batch, "user5");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].index, 5);

    // Next from that card is batch index 6, which the filter had hidden
    let next = navigate::next_index(hits[0].index, batch.len()).unwrap();
    assert_eq!(next, 6);
    assert_eq!(batch.get(next).unwrap().display_name(), "User6 Example");
}

/// The modal's detail view reflects the address line exactly
#[test]
fn test_modal_address_line() {
    let batch = loaded_batch(3);
    let view = DetailView::from_profile(batch.get(2).unwrap()).unwrap();
    assert_eq!(view.address, "102 Dane St, Tulsa, Oklahoma 74104");
}
