//! Shared data types for the WAQI feed: the captured snapshot, the projections
//! handed out by the accessors, and the crate-wide error type.
//!
//! The snapshot types mirror the `data` object of a successful feed response:
//!
//!   data.aqi                 - dominant-pollutant AQI (number, "-" when offline)
//!   data.idx                 - station id
//!   data.city.name           - station name, HTML-entity encoded
//!   data.city.geo            - [latitude, longitude]
//!   data.city.url
//!   data.dominentpol         - dominant pollutant code (sic)
//!   data.iaqi.{code}.v       - per-pollutant readings, keys present only if measured
//!   data.time.{s, tz, iso}   - local timestamp and zone of the reading
//!   data.attributions[]      - {name, url} data-source credits

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong talking to the WAQI service or reading the
/// snapshot it produced.
#[derive(Debug, Error)]
pub enum WaqiError {
    /// The service does not recognise the requested station or city.
    #[error("Unknown monitoring station or city: \"{0}\"")]
    UnknownStation(String),

    #[error("Request Quota has been exceeded")]
    QuotaExceeded,

    #[error("Invalid access token")]
    InvalidAccessToken,

    /// Network failure, non-2xx response without an envelope, or a body that
    /// does not decode into a complete snapshot.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// An `"error"` envelope whose message is not one of the known ones, or
    /// an envelope with an unexpected `status`.
    #[error("WAQI service error: {0}")]
    Service(String),

    /// The station exists but currently has no AQI reading (`"aqi": "-"`).
    #[error("Station {0} has no current reading")]
    StationOffline(String),

    #[error("No observation has been fetched yet")]
    NoActiveSnapshot,

    #[error("Invalid measurement time: {0}")]
    InvalidMeasurementTime(String),
}

impl WaqiError {
    /// True when repeating the same request later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, WaqiError::QuotaExceeded | WaqiError::Transport(_))
    }
}

impl From<reqwest::Error> for WaqiError {
    fn from(err: reqwest::Error) -> Self {
        WaqiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for WaqiError {
    fn from(err: serde_json::Error) -> Self {
        WaqiError::Transport(format!("JSON deserialization failed: {}", err))
    }
}

// ---------------------------------------------------------------------------
// Snapshot (captured payload)
// ---------------------------------------------------------------------------

/// One successful observation, exactly as the service reported it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Snapshot {
    #[serde(deserialize_with = "deserialize_aqi")]
    pub aqi: u32,
    #[serde(rename = "idx")]
    pub station_id: i64,
    pub city: City,
    #[serde(rename = "dominentpol")]
    pub dominant_pollutant: String,
    #[serde(rename = "iaqi", default, deserialize_with = "deserialize_readings")]
    pub pollutants: BTreeMap<String, f64>,
    pub time: ObservationTime,
    #[serde(default)]
    pub attributions: Vec<Attribution>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct City {
    /// Still HTML-entity encoded; see `MonitoringStation::name`.
    pub name: String,
    pub geo: [f64; 2],
    pub url: String,
    pub location: Option<String>,
}

/// Raw timestamp fields; parsed lazily by the accessor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ObservationTime {
    /// Local wall-clock time, `YYYY-MM-DD HH:MM:SS`.
    pub s: String,
    /// UTC offset (`+08:00`) or IANA zone name.
    pub tz: String,
    pub iso: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attribution {
    pub name: String,
    pub url: String,
    pub logo: Option<String>,
}

/// The service sends the AQI as a number, occasionally as a numeric string,
/// and as `"-"` for stations with no current reading. Only non-negative
/// integral values make a usable snapshot.
fn deserialize_aqi<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = serde_json::Value::deserialize(deserializer)?;
    let value = match &raw {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| D::Error::custom(format!("aqi is not numeric: {}", raw)))?;

    if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(D::Error::custom(format!("aqi out of range: {}", value)));
    }
    Ok(value as u32)
}

/// `iaqi` is `{code: {v: value}}`; flatten it to `{code: value}`.
///
/// Entries without a numeric `v` are dropped and read as "no reading", so one
/// odd value cannot spoil the rest of the observation.
fn deserialize_readings<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, serde_json::Value> = BTreeMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(code, entry)| {
            let value = entry.get("v").and_then(|v| v.as_f64())?;
            Some((code, value))
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Pollutant codes
// ---------------------------------------------------------------------------

/// Readings the feed reports under `iaqi`. Weather values share the map with
/// the pollutant sub-indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pollutant {
    Humidity,
    Temperature,
    Pressure,
    CarbonMonoxide,
    NitrogenDioxide,
    Ozone,
    Pm10,
    Pm25,
    SulfurDioxide,
}

impl Pollutant {
    pub const ALL: [Pollutant; 9] = [
        Pollutant::Humidity,
        Pollutant::Temperature,
        Pollutant::Pressure,
        Pollutant::CarbonMonoxide,
        Pollutant::NitrogenDioxide,
        Pollutant::Ozone,
        Pollutant::Pm10,
        Pollutant::Pm25,
        Pollutant::SulfurDioxide,
    ];

    /// Key used in the `iaqi` object.
    pub fn code(self) -> &'static str {
        match self {
            Pollutant::Humidity => "h",
            Pollutant::Temperature => "t",
            Pollutant::Pressure => "p",
            Pollutant::CarbonMonoxide => "co",
            Pollutant::NitrogenDioxide => "no2",
            Pollutant::Ozone => "o3",
            Pollutant::Pm10 => "pm10",
            Pollutant::Pm25 => "pm25",
            Pollutant::SulfurDioxide => "so2",
        }
    }

    pub fn from_code(code: &str) -> Option<Pollutant> {
        Pollutant::ALL.into_iter().find(|p| p.code() == code)
    }
}

// ---------------------------------------------------------------------------
// Accessor projections
// ---------------------------------------------------------------------------

/// AQI value plus its narrative category.
#[derive(Debug, Clone, PartialEq)]
pub struct AqiReading {
    pub aqi: f64,
    pub pollution_level: &'static str,
    pub health_implications: &'static str,
    pub cautionary_statement: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonitoringStation {
    pub id: i64,
    /// HTML entities already decoded.
    pub name: String,
    pub coordinates: Coordinates,
    pub url: String,
}
