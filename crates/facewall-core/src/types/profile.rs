//! Profile Types - One generated user record and the batch that holds it
//!
//! A `Profile` is immutable once fetched. The API guarantees no identifier
//! beyond array position, so the batch index doubles as the profile's
//! identity for modal navigation.

use serde::{Deserialize, Serialize};

/// One randomly generated user record, flattened from the API wire shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Contact email address
    pub email: String,

    /// City of residence
    pub city: String,

    /// State or region of residence
    pub state: String,

    /// Postal code, normalized to a string (the API emits both numbers
    /// and strings depending on nationality)
    pub postcode: String,

    /// House number on the street
    pub street_number: u32,

    /// Street name
    pub street_name: String,

    /// Raw phone string, loosely formatted by the API
    pub phone: String,

    /// Raw date of birth, ISO-8601-like (e.g. "1990-05-02T00:00:00.000Z")
    pub dob: String,

    /// Medium-size portrait URL (card thumbnail)
    pub picture_medium: String,

    /// Large portrait URL (modal)
    pub picture_large: String,
}

impl Profile {
    /// Name shown on cards and used for search matching:
    /// first name + single space + last name.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The ordered batch of profiles fetched once per session.
///
/// Write-once: constructed from the fetch result and never mutated. The
/// original order is stable and is the basis for modal prev/next
/// navigation, independent of any active search filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileBatch {
    profiles: Vec<Profile>,
}

impl ProfileBatch {
    /// Wrap a fetched, already-ordered list of profiles
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    /// Number of profiles in the batch
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True if the fetch produced no profiles
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Profile at the given batch position
    pub fn get(&self, index: usize) -> Option<&Profile> {
        self.profiles.get(index)
    }

    /// Iterate profiles in batch order
    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.iter()
    }

    /// Batch contents as a slice, in original order
    pub fn as_slice(&self) -> &[Profile] {
        &self.profiles
    }
}
