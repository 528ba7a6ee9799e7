//! Visual theme for Facewall.

mod styles;

pub use styles::GLOBAL_STYLES;
