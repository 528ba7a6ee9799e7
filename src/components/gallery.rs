//! Gallery Component
//!
//! The main surface: shows the loading state while the fetch is in flight,
//! the fetch error message if it failed, and otherwise the filtered card
//! grid plus the detail modal for the selected profile.

use dioxus::prelude::*;
use facewall_core::search::filter_by_name;
use facewall_core::{navigate, CardView, GalleryStatus};

use super::{ProfileCard, ProfileModal};
use crate::context::{use_active_profile, use_gallery_status, use_search_query};

/// Gallery
///
/// Cards come from the search filter and carry their ORIGINAL batch index;
/// the modal navigates over the full batch with wraparound, so stepping
/// from a filtered card can land on a profile the filter currently hides.
/// That mirrors the shipped behavior and is intentional.
#[component]
pub fn Gallery() -> Element {
    let status = use_gallery_status();
    let query = use_search_query();
    let mut active_profile = use_active_profile();

    let batch = match status() {
        GalleryStatus::Loading => {
            return rsx! {
                div { class: "gallery-state",
                    h2 { class: "loading-text", "Loading..." }
                }
            };
        }
        GalleryStatus::Failed(message) => {
            return rsx! {
                div { class: "gallery-state",
                    h2 { class: "error-text", "{message}" }
                }
            };
        }
        GalleryStatus::Ready(batch) => batch,
    };

    let hits: Vec<(usize, CardView)> = filter_by_name(&batch, &query())
        .into_iter()
        .map(|hit| (hit.index, CardView::from_profile(hit.profile)))
        .collect();

    let batch_len = batch.len();

    let on_prev = move |_| {
        if let Some(current) = active_profile() {
            match navigate::prev_index(current, batch_len) {
                Ok(index) => active_profile.set(Some(index)),
                Err(err) => tracing::error!(error = %err, "modal navigation failed"),
            }
        }
    };

    let on_next = move |_| {
        if let Some(current) = active_profile() {
            match navigate::next_index(current, batch_len) {
                Ok(index) => active_profile.set(Some(index)),
                Err(err) => tracing::error!(error = %err, "modal navigation failed"),
            }
        }
    };

    rsx! {
        if hits.is_empty() {
            div { class: "gallery-state",
                h2 { class: "no-results-text", "Your search returned no results." }
            }
        } else {
            div { class: "gallery-grid",
                {hits.into_iter().map(|(index, card)| {
                    rsx! {
                        ProfileCard {
                            key: "{index}",
                            card: card,
                            index: index,
                            on_click: move |_| active_profile.set(Some(index)),
                        }
                    }
                })}
            }
        }

        if let Some(profile) = active_profile().and_then(|index| batch.get(index).cloned()) {
            ProfileModal {
                profile: profile,
                on_close: move |_| active_profile.set(None),
                on_prev: on_prev,
                on_next: on_next,
            }
        }
    }
}
