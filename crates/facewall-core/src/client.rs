//! Random-User API Client
//!
//! One outbound GET per session against the public `randomuser.me`
//! endpoint, parameterized by nationality and result count. The wire
//! envelope stays private to this module; callers only ever see a
//! [`ProfileBatch`]. No retry, no partial batch: any network, status, or
//! parse failure is a single fetch error.

use reqwest::Client;
use serde::Deserialize;

use crate::error::{GalleryError, GalleryResult};
use crate::types::profile::{Profile, ProfileBatch};

/// Public random-user generation endpoint
pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";

/// Nationality filter sent with every request
pub const DEFAULT_NATIONALITY: &str = "us";

/// Number of profiles fetched per session
pub const DEFAULT_BATCH_SIZE: usize = 12;

/// Fetch parameters for one gallery session
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Endpoint URL (default: `randomuser.me`)
    pub endpoint: String,
    /// Nationality code passed as `nat` (default: "us")
    pub nationality: String,
    /// Batch size passed as `results` (default: 12)
    pub results: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            nationality: DEFAULT_NATIONALITY.to_string(),
            results: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Client for the random-user API
pub struct ProfileClient {
    client: Client,
    options: FetchOptions,
}

impl ProfileClient {
    /// Create a client with the given fetch options
    pub fn new(options: FetchOptions) -> Self {
        Self {
            client: Client::new(),
            options,
        }
    }

    /// The options this client was built with
    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    /// Fetch one batch of profiles.
    ///
    /// Issues the single GET, checks the status, and parses the JSON
    /// envelope. The transport's default timeout behavior applies; there is
    /// no retry and no partial result.
    pub async fn fetch_batch(&self) -> GalleryResult<ProfileBatch> {
        let url = format!(
            "{}?nat={}&results={}",
            self.options.endpoint, self.options.nationality, self.options.results
        );
        tracing::debug!(%url, "requesting profile batch");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(GalleryError::Api(response.status()));
        }

        let body = response.text().await?;
        let batch = parse_batch(&body)?;
        tracing::info!(count = batch.len(), "profile batch loaded");
        Ok(batch)
    }
}

/// Parse the API's JSON envelope into a batch.
///
/// Pure function so envelope handling is testable without a network.
pub fn parse_batch(body: &str) -> GalleryResult<ProfileBatch> {
    let envelope: Envelope = serde_json::from_str(body)?;
    Ok(ProfileBatch::new(
        envelope.results.into_iter().map(Profile::from).collect(),
    ))
}

// Wire format. Field selection mirrors what the gallery consumes; unknown
// fields in the envelope are ignored.

#[derive(Debug, Deserialize)]
struct Envelope {
    results: Vec<RawProfile>,
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    name: RawName,
    email: String,
    location: RawLocation,
    phone: String,
    dob: RawDob,
    picture: RawPicture,
}

#[derive(Debug, Deserialize)]
struct RawName {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    city: String,
    state: String,
    postcode: RawPostcode,
    street: RawStreet,
}

#[derive(Debug, Deserialize)]
struct RawStreet {
    number: u32,
    name: String,
}

/// The API emits postcodes as numbers for some nationalities and strings
/// for others
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPostcode {
    Number(u64),
    Text(String),
}

impl RawPostcode {
    fn into_string(self) -> String {
        match self {
            RawPostcode::Number(n) => n.to_string(),
            RawPostcode::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawDob {
    date: String,
}

#[derive(Debug, Deserialize)]
struct RawPicture {
    medium: String,
    large: String,
}

impl From<RawProfile> for Profile {
    fn from(raw: RawProfile) -> Self {
        Self {
            first_name: raw.name.first,
            last_name: raw.name.last,
            email: raw.email,
            city: raw.location.city,
            state: raw.location.state,
            postcode: raw.location.postcode.into_string(),
            street_number: raw.location.street.number,
            street_name: raw.location.street.name,
            phone: raw.phone,
            dob: raw.dob.date,
            picture_medium: raw.picture.medium,
            picture_large: raw.picture.large,
        }
    }
}
