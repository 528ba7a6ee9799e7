//! Profile Card Component
//!
//! One clickable card in the gallery grid: portrait, name, email, locality.

use dioxus::prelude::*;
use facewall_core::CardView;

/// Profile Card
///
/// # Example
///
/// ```ignore
/// rsx! {
///     ProfileCard {
///         card: CardView::from_profile(&profile),
///         index: 0,
///         on_click: move |_| open_modal(0),
///     }
/// }
/// ```
#[component]
pub fn ProfileCard(
    /// Card projection of the profile
    card: CardView,
    /// Original batch index, also drives the staggered entry animation
    #[props(default = 0)]
    index: usize,
    /// Called when the card is clicked
    on_click: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "profile-card",
            style: "--index: {index}",
            onclick: move |_| on_click.call(()),

            div { class: "card-portrait",
                img {
                    class: "card-portrait__img",
                    src: "{card.thumbnail_url}",
                    alt: "{card.display_name}",
                }
            }

            div { class: "card-info",
                h3 { class: "card-name", "{card.display_name}" }
                p { class: "card-text", "{card.email}" }
                p { class: "card-text card-locality", "{card.locality}" }
            }
        }
    }
}
