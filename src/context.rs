//! Shared UI state for Facewall.
//!
//! The gallery holds three pieces of state, all owned by the root component
//! and provided via context: the fetch status, the live search query, and
//! the index of the profile open in the modal (if any). All three are only
//! ever touched from UI event handlers on the main thread.
//!
//! ## Usage
//!
//! ```ignore
//! // In App
//! use_context_provider(|| status);
//!
//! // In child components
//! let status = use_gallery_status();
//! ```

use dioxus::prelude::*;
use facewall_core::GalleryStatus;

/// Hook to access the gallery fetch status from context.
///
/// `Loading` until the one fetch of the session finalizes, then `Ready`
/// with the batch or `Failed` with the user-facing message.
pub fn use_gallery_status() -> Signal<GalleryStatus> {
    use_context::<Signal<GalleryStatus>>()
}

/// Hook to access the live search query from context.
///
/// Updated on every keystroke in the search bar; the gallery re-filters
/// reactively.
pub fn use_search_query() -> Signal<String> {
    use_context::<Signal<String>>()
}

/// Hook to access the open-modal index from context.
///
/// `Some(index)` is always a position in the ORIGINAL batch, never in the
/// filtered view, so modal navigation wraps over the full batch.
pub fn use_active_profile() -> Signal<Option<usize>> {
    use_context::<Signal<Option<usize>>>()
}
