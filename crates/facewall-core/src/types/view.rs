//! View Models - What the render surface actually consumes
//!
//! The UI never reads wire data or raw profiles directly; cards and the
//! modal take these projections. `CardView` is infallible. `DetailView`
//! runs the display formatters, so a malformed source field surfaces as an
//! error at modal-open time instead of rendering corrupted text.

use crate::error::GalleryResult;
use crate::format::{format_birthday, format_phone};
use crate::types::profile::Profile;

/// Card projection of a profile: thumbnail, name, email, locality
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Display name (first + last)
    pub display_name: String,
    /// Contact email
    pub email: String,
    /// "City, State" line
    pub locality: String,
    /// Medium portrait URL
    pub thumbnail_url: String,
}

impl CardView {
    /// Project a profile into its card representation
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            display_name: profile.display_name(),
            email: profile.email.clone(),
            locality: format!("{}, {}", profile.city, profile.state),
            thumbnail_url: profile.picture_medium.clone(),
        }
    }
}

/// Modal projection of a profile with formatted phone and birthday
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Display name (first + last)
    pub display_name: String,
    /// Contact email
    pub email: String,
    /// City of residence
    pub city: String,
    /// Phone formatted as "(AAA) BBB-CCCC"
    pub phone: String,
    /// Full street address line
    pub address: String,
    /// Birthday formatted as "MM/DD/YYYY"
    pub birthday: String,
    /// Large portrait URL
    pub picture_url: String,
}

impl DetailView {
    /// Project a profile into its modal representation.
    ///
    /// Fails with a format error if the phone or date-of-birth field does
    /// not match the API contract. Callers surface that error as-is.
    pub fn from_profile(profile: &Profile) -> GalleryResult<Self> {
        Ok(Self {
            display_name: profile.display_name(),
            email: profile.email.clone(),
            city: profile.city.clone(),
            phone: format_phone(&profile.phone)?,
            address: format!(
                "{} {}, {}, {} {}",
                profile.street_number,
                profile.street_name,
                profile.city,
                profile.state,
                profile.postcode
            ),
            birthday: format_birthday(&profile.dob)?,
            picture_url: profile.picture_large.clone(),
        })
    }
}
