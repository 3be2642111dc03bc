//! WAQI feed API: URL construction + response envelope classification.
//!
//! Every feed call returns the same envelope:
//!   { "status": "ok",    "data": { ...station payload... } }
//!   { "status": "error", "data": "Unknown station" | "Over quota" | "Invalid key" | ... }
//!
//! See `fixtures.rs` for annotated examples.

use crate::model::{Snapshot, WaqiError};
use serde::Deserialize;
use std::fmt;

pub const API_BASE_URL: &str = "https://api.waqi.info/api";

// Messages the service uses in `data` for an "error" envelope.
const MSG_UNKNOWN_STATION: &str = "Unknown station";
const MSG_OVER_QUOTA: &str = "Over quota";
const MSG_INVALID_KEY: &str = "Invalid key";

// AQI placeholder of a station that is currently not reporting.
const NO_READING: &str = "-";

#[derive(Deserialize)]
struct Envelope {
    status: String,
    #[serde(default)]
    data: serde_json::Value,
}

// ---------------------------------------------------------------------------
// Feed targets and URL construction
// ---------------------------------------------------------------------------

/// What a feed request asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedTarget<'a> {
    /// Nearest station to the caller's public IP address.
    Here,
    /// Station or city name, e.g. `"beijing"` or `"@7397"`.
    ///
    /// Always sent as a single path segment: `/` and other reserved
    /// characters are percent-encoded, `@` is kept for station ids.
    Station(&'a str),
    /// Nearest station to a coordinate. Not range-checked.
    Geo { latitude: f64, longitude: f64 },
}

impl<'a> FeedTarget<'a> {
    /// `None` means "nearest to me".
    pub fn from_station(station: Option<&'a str>) -> Self {
        match station {
            Some(name) => FeedTarget::Station(name),
            None => FeedTarget::Here,
        }
    }

    /// Path segment after `feed/`, ready to splice into a URL.
    pub fn path_segment(&self) -> String {
        match self {
            FeedTarget::Here => "here".to_string(),
            FeedTarget::Station(name) => urlencoding::encode(name).replace("%40", "@"),
            FeedTarget::Geo { latitude, longitude } => format!("geo:{};{}", latitude, longitude),
        }
    }
}

impl fmt::Display for FeedTarget<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedTarget::Here => f.write_str("here"),
            FeedTarget::Station(name) => f.write_str(name),
            FeedTarget::Geo { latitude, longitude } => write!(f, "geo:{};{}", latitude, longitude),
        }
    }
}

/// Builds the feed URL for `target` under `base_url`.
///
/// The access token is not part of the returned URL; the client attaches it
/// as the `token` query parameter so the URL can be logged safely.
///
/// # Example
/// ```
/// use waqi_client::ingest::waqi::{build_feed_url, FeedTarget, API_BASE_URL};
///
/// let url = build_feed_url(API_BASE_URL, &FeedTarget::Geo { latitude: 52.37, longitude: 4.89 });
/// assert_eq!(url, "https://api.waqi.info/api/feed/geo:52.37;4.89/");
/// ```
pub fn build_feed_url(base_url: &str, target: &FeedTarget<'_>) -> String {
    format!(
        "{}/feed/{}/",
        base_url.trim_end_matches('/'),
        target.path_segment()
    )
}

// ---------------------------------------------------------------------------
// Response classification
// ---------------------------------------------------------------------------

/// Turns a feed response body into a snapshot or a typed failure.
///
/// # Errors
/// - `WaqiError::UnknownStation` / `QuotaExceeded` / `InvalidAccessToken` -
///   the three error messages the service documents.
/// - `WaqiError::Service` - any other `"error"` message, or an unexpected
///   `status` value.
/// - `WaqiError::StationOffline` - an `"ok"` payload whose AQI is `"-"`.
/// - `WaqiError::Transport` - malformed JSON, or an `"ok"` payload missing
///   required fields.
pub fn parse_feed_response(body: &str, target: &FeedTarget<'_>) -> Result<Snapshot, WaqiError> {
    let envelope: Envelope = serde_json::from_str(body)?;

    match envelope.status.as_str() {
        "ok" => {
            if envelope.data.get("aqi").and_then(|aqi| aqi.as_str()) == Some(NO_READING) {
                return Err(WaqiError::StationOffline(target.to_string()));
            }
            let snapshot: Snapshot = serde_json::from_value(envelope.data)?;
            Ok(snapshot)
        }
        "error" => Err(classify_error_message(&envelope.data, target)),
        other => Err(WaqiError::Service(format!("unexpected status \"{}\"", other))),
    }
}

/// Like `parse_feed_response`, but aware of the HTTP status line.
///
/// A non-2xx response whose body is still a valid error envelope is
/// classified from the envelope; anything else becomes `Transport`.
pub fn classify_response(
    http_status: u16,
    body: &str,
    target: &FeedTarget<'_>,
) -> Result<Snapshot, WaqiError> {
    let result = parse_feed_response(body, target);

    if (200..300).contains(&http_status) {
        return result;
    }

    match result {
        Err(WaqiError::Transport(_)) | Ok(_) => Err(WaqiError::Transport(format!(
            "HTTP {} from WAQI feed",
            http_status
        ))),
        Err(e) => Err(e),
    }
}

fn classify_error_message(data: &serde_json::Value, target: &FeedTarget<'_>) -> WaqiError {
    let message = match data {
        serde_json::Value::Null => return WaqiError::Service("no error message".to_string()),
        serde_json::Value::String(s) => s.as_str(),
        other => return WaqiError::Service(other.to_string()),
    };

    match message {
        MSG_UNKNOWN_STATION => WaqiError::UnknownStation(target.to_string()),
        MSG_OVER_QUOTA => WaqiError::QuotaExceeded,
        MSG_INVALID_KEY => WaqiError::InvalidAccessToken,
        other => WaqiError::Service(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
