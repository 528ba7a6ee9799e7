//! Facewall Core Library
//!
//! Random-profile gallery logic: fetch one batch of generated user profiles,
//! filter them by name, and step through them with wraparound navigation.
//!
//! ## Overview
//!
//! Facewall shows a fixed-size batch of profiles from the public
//! `randomuser.me` API as a card gallery with a per-profile detail modal.
//! This crate holds everything below the render surface: the data model, the
//! search filter, the modal navigator, the display formatters, the HTTP
//! client, and the gallery display-state machine. The UI crate consumes
//! view models ([`CardView`], [`DetailView`]) and never touches wire data.
//!
//! ## Lifecycle
//!
//! - One [`ProfileBatch`] is fetched per session and never mutated.
//! - Search filtering and modal navigation are pure reads over that batch.
//! - [`GalleryStatus`] tracks the single Loading → Ready/Failed transition.
//!
//! ## Quick Start
//!
//! ```ignore
//! use facewall_core::{FetchOptions, GalleryStatus, ProfileClient};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ProfileClient::new(FetchOptions::default());
//!     let status = GalleryStatus::from_fetch(client.fetch_batch().await);
//!
//!     if let Some(batch) = status.batch() {
//!         for hit in facewall_core::search::filter_by_name(batch, "smith") {
//!             println!("{}: {}", hit.index, hit.profile.display_name());
//!         }
//!     }
//! }
//! ```

pub mod client;
pub mod error;
pub mod format;
pub mod navigate;
pub mod search;
pub mod state;
pub mod types;

// Re-exports
pub use client::{FetchOptions, ProfileClient, DEFAULT_BATCH_SIZE, DEFAULT_NATIONALITY};
pub use error::{GalleryError, GalleryResult};
pub use search::SearchHit;
pub use state::{GalleryStatus, FETCH_ERROR_MESSAGE};
pub use types::{CardView, DetailView, Profile, ProfileBatch};
