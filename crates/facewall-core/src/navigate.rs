//! Modal Navigation - Wraparound prev/next over the full batch
//!
//! Navigation always wraps across the entire original batch, even while a
//! search filter is active. Stepping "Next" from a filtered result can land
//! on a profile the filter hid; that matches the shipped behavior and is
//! kept deliberately.

use crate::error::{GalleryError, GalleryResult};

/// Index of the profile after `current`, wrapping from the end to 0.
///
/// `batch_len == 0` violates the input contract and fails with
/// [`GalleryError::EmptyBatch`]; any `current` is otherwise accepted since
/// modular arithmetic keeps the result in bounds.
pub fn next_index(current: usize, batch_len: usize) -> GalleryResult<usize> {
    if batch_len == 0 {
        return Err(GalleryError::EmptyBatch);
    }
    Ok((current + 1) % batch_len)
}

/// Index of the profile before `current`, wrapping from 0 to the end.
pub fn prev_index(current: usize, batch_len: usize) -> GalleryResult<usize> {
    if batch_len == 0 {
        return Err(GalleryError::EmptyBatch);
    }
    Ok((current + batch_len - 1) % batch_len)
}
