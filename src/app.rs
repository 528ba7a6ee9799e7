use dioxus::prelude::*;
use facewall_core::{GalleryStatus, ProfileClient};

use crate::components::{Gallery, SearchBar};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the session state (fetch status, search query, open modal), provides
/// it via context, and kicks off the single profile fetch on mount. The
/// fetch always finalizes through `GalleryStatus::from_fetch`, so the
/// loading state is left behind whether it succeeds or fails.
#[component]
pub fn App() -> Element {
    let mut status: Signal<GalleryStatus> = use_signal(|| GalleryStatus::Loading);
    let query: Signal<String> = use_signal(String::new);
    let active_profile: Signal<Option<usize>> = use_signal(|| None);

    use_context_provider(|| status);
    use_context_provider(|| query);
    use_context_provider(|| active_profile);

    // The one asynchronous operation of a session
    use_effect(move || {
        spawn(async move {
            let client = ProfileClient::new(crate::fetch_options());
            status.set(GalleryStatus::from_fetch(client.fetch_batch().await));
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "page",
            header { class: "page-header",
                h1 { class: "page-title", "Facewall" }
                SearchBar {}
            }
            main { class: "page-body",
                Gallery {}
            }
        }
    }
}
