//! Profile Modal Component
//!
//! Expanded detail view of one profile with Prev/Next navigation. Closing
//! happens on the X button or a backdrop click; clicks inside the modal do
//! not propagate out.

use dioxus::prelude::*;
use facewall_core::{DetailView, Profile};

/// Profile Modal
///
/// Renders the formatted detail view of `profile`. Formatting runs against
/// fields the API contract declares well-formed, so a failure is a defect:
/// it is logged and shown in place of the detail fields rather than
/// rendering corrupted text.
///
/// # Example
///
/// ```ignore
/// rsx! {
///     ProfileModal {
///         profile: profile.clone(),
///         on_close: move |_| active.set(None),
///         on_prev: move |_| step_back(),
///         on_next: move |_| step_forward(),
///     }
/// }
/// ```
#[component]
pub fn ProfileModal(
    /// The profile to expand
    profile: Profile,
    /// Called on X button or backdrop click
    on_close: EventHandler<()>,
    /// Called when "Prev" is clicked
    on_prev: EventHandler<()>,
    /// Called when "Next" is clicked
    on_next: EventHandler<()>,
) -> Element {
    let view = match DetailView::from_profile(&profile) {
        Ok(view) => view,
        Err(err) => {
            tracing::error!(error = %err, "profile failed to format for the modal");
            return rsx! {
                div {
                    class: "modal-overlay",
                    onclick: move |_| on_close.call(()),

                    div {
                        class: "modal",
                        onclick: move |e| e.stop_propagation(),

                        button {
                            class: "modal-close-btn",
                            onclick: move |_| on_close.call(()),
                            "X"
                        }

                        div { class: "modal-info modal-defect",
                            h3 { class: "modal-name", "{profile.display_name()}" }
                            p { class: "modal-error-text",
                                "This profile could not be displayed: {err}"
                            }
                        }
                    }
                }
            };
        }
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "modal-close-btn",
                    onclick: move |_| on_close.call(()),
                    "X"
                }

                div { class: "modal-info",
                    img {
                        class: "modal-portrait",
                        src: "{view.picture_url}",
                        alt: "{view.display_name}",
                    }
                    h3 { class: "modal-name", "{view.display_name}" }
                    p { class: "modal-text", "{view.email}" }
                    p { class: "modal-text", "{view.city}" }
                    hr {}
                    p { class: "modal-text", "{view.phone}" }
                    p { class: "modal-text", "{view.address}" }
                    p { class: "modal-text", "Birthday: {view.birthday}" }
                }

                div { class: "modal-btn-container",
                    button {
                        class: "modal-btn",
                        onclick: move |_| on_prev.call(()),
                        "Prev"
                    }
                    button {
                        class: "modal-btn",
                        onclick: move |_| on_next.call(()),
                        "Next"
                    }
                }
            }
        }
    }
}
