//! Core types for Facewall

pub mod profile;
pub mod view;

pub use profile::{Profile, ProfileBatch};
pub use view::{CardView, DetailView};
