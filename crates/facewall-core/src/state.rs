//! Gallery Display State - The one Loading → Ready/Failed transition
//!
//! The fetch is the only asynchronous operation in a session. Whatever its
//! outcome, finalization goes through [`GalleryStatus::from_fetch`], which
//! leaves `Loading` exactly once. Raw failure detail is logged for
//! diagnostics; the user only ever sees [`FETCH_ERROR_MESSAGE`].

use crate::error::GalleryResult;
use crate::types::profile::ProfileBatch;

/// Message shown in the gallery when the fetch fails
pub const FETCH_ERROR_MESSAGE: &str =
    "An error occurred while trying to load the users. Please try again later.";

/// Display state of the gallery
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryStatus {
    /// Fetch in flight; the loading indicator is visible
    Loading,
    /// Fetch succeeded; cards render from this batch
    Ready(ProfileBatch),
    /// Fetch failed; the message replaces the gallery
    Failed(String),
}

impl GalleryStatus {
    /// Finalize the fetch. Always transitions out of `Loading`.
    pub fn from_fetch(result: GalleryResult<ProfileBatch>) -> Self {
        match result {
            Ok(batch) => GalleryStatus::Ready(batch),
            Err(err) => {
                tracing::error!(error = %err, "profile fetch failed");
                GalleryStatus::Failed(FETCH_ERROR_MESSAGE.to_string())
            }
        }
    }

    /// True while the fetch is still in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, GalleryStatus::Loading)
    }

    /// The loaded batch, if the fetch succeeded
    pub fn batch(&self) -> Option<&ProfileBatch> {
        match self {
            GalleryStatus::Ready(batch) => Some(batch),
            _ => None,
        }
    }
}
