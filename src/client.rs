//! Blocking WAQI client: fetches one observation at a time and answers
//! questions about the most recent one.
//!
//! The client owns the current snapshot. `fetch_*` take `&mut self` and
//! replace it wholesale on success; every accessor takes `&self`. A failed
//! fetch leaves the previous snapshot in place. Share across threads behind a
//! `Mutex` if needed; the client does no internal synchronization.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use tracing::debug;

use crate::aqi::categorize;
use crate::config::ClientConfig;
use crate::ingest::waqi::{build_feed_url, classify_response, FeedTarget};
use crate::model::{
    AqiReading, Attribution, Coordinates, MonitoringStation, Pollutant, Snapshot, WaqiError,
};

const MEASUREMENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct AirQualityClient {
    config: ClientConfig,
    http: reqwest::blocking::Client,
    snapshot: Option<Snapshot>,
}

impl AirQualityClient {
    /// Client against the public WAQI endpoint with default settings.
    pub fn new(token: impl Into<String>) -> Result<Self, WaqiError> {
        Self::with_config(ClientConfig::new(token))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, WaqiError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            config,
            http,
            snapshot: None,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Fetching
    // -----------------------------------------------------------------------

    /// Fetches the current observation for a station or city name.
    ///
    /// With `None` the service picks the station nearest to the caller's
    /// public IP address.
    ///
    /// # Errors
    /// `UnknownStation`, `QuotaExceeded`, `InvalidAccessToken` as reported by
    /// the service; `StationOffline` when the station has no current AQI;
    /// `Service` for other service errors; `Transport` for network failures
    /// and malformed responses.
    pub fn fetch_by_station(&mut self, station: Option<&str>) -> Result<(), WaqiError> {
        self.fetch(&FeedTarget::from_station(station))
    }

    /// Fetches the observation of the station nearest to a coordinate.
    ///
    /// Coordinates are forwarded unchecked; the service decides what to do
    /// with out-of-range values.
    pub fn fetch_by_geo_location(
        &mut self,
        latitude: f64,
        longitude: f64,
    ) -> Result<(), WaqiError> {
        self.fetch(&FeedTarget::Geo { latitude, longitude })
    }

    fn fetch(&mut self, target: &FeedTarget<'_>) -> Result<(), WaqiError> {
        let url = build_feed_url(&self.config.base_url, target);
        debug!("Fetching WAQI feed: {}", url);

        let response = self
            .http
            .get(&url)
            .query(&[("token", self.config.token.as_str())])
            .header("Accept", "application/json")
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;

        let snapshot = classify_response(status, &body, target)?;
        self.store(snapshot);
        Ok(())
    }

    fn store(&mut self, snapshot: Snapshot) {
        debug!(
            "Captured observation from station {} (AQI {})",
            snapshot.station_id, snapshot.aqi
        );
        self.snapshot = Some(snapshot);
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The raw snapshot from the last successful fetch.
    pub fn snapshot(&self) -> Result<&Snapshot, WaqiError> {
        self.snapshot.as_ref().ok_or(WaqiError::NoActiveSnapshot)
    }

    /// AQI value with its pollution level and narratives.
    pub fn aqi(&self) -> Result<AqiReading, WaqiError> {
        let snapshot = self.snapshot()?;
        let category = categorize(snapshot.aqi);

        Ok(AqiReading {
            aqi: f64::from(snapshot.aqi),
            pollution_level: category.level(),
            health_implications: category.health_implications(),
            cautionary_statement: category.cautionary_statement(),
        })
    }

    /// When the measurement was taken, in the station's own time zone.
    pub fn measurement_time(&self) -> Result<DateTime<FixedOffset>, WaqiError> {
        let time = &self.snapshot()?.time;
        parse_measurement_time(&time.s, &time.tz)
    }

    pub fn monitoring_station(&self) -> Result<MonitoringStation, WaqiError> {
        let snapshot = self.snapshot()?;
        let [latitude, longitude] = snapshot.city.geo;

        Ok(MonitoringStation {
            id: snapshot.station_id,
            name: html_escape::decode_html_entities(&snapshot.city.name).into_owned(),
            coordinates: Coordinates { latitude, longitude },
            url: snapshot.city.url.clone(),
        })
    }

    /// Data-source credits in the order the service listed them.
    pub fn attributions(&self) -> Result<&[Attribution], WaqiError> {
        Ok(self.snapshot()?.attributions.as_slice())
    }

    /// Reading for an arbitrary `iaqi` code, e.g. `"w"` (wind) or `"dew"`.
    /// `None` when the station does not report it.
    pub fn reading(&self, code: &str) -> Result<Option<f64>, WaqiError> {
        Ok(self.snapshot()?.pollutants.get(code).copied())
    }

    pub fn pollutant(&self, pollutant: Pollutant) -> Result<Option<f64>, WaqiError> {
        self.reading(pollutant.code())
    }

    /// Relative humidity, %.
    pub fn humidity(&self) -> Result<Option<f64>, WaqiError> {
        self.pollutant(Pollutant::Humidity)
    }

    /// Temperature, °C.
    pub fn temperature(&self) -> Result<Option<f64>, WaqiError> {
        self.pollutant(Pollutant::Temperature)
    }

    /// Barometric pressure, mbar.
    pub fn pressure(&self) -> Result<Option<f64>, WaqiError> {
        self.pollutant(Pollutant::Pressure)
    }

    // Pollutant values below are on the US EPA 0-500 AQI scale, not
    // concentrations.

    pub fn co(&self) -> Result<Option<f64>, WaqiError> {
        self.pollutant(Pollutant::CarbonMonoxide)
    }

    pub fn no2(&self) -> Result<Option<f64>, WaqiError> {
        self.pollutant(Pollutant::NitrogenDioxide)
    }

    pub fn o3(&self) -> Result<Option<f64>, WaqiError> {
        self.pollutant(Pollutant::Ozone)
    }

    pub fn pm10(&self) -> Result<Option<f64>, WaqiError> {
        self.pollutant(Pollutant::Pm10)
    }

    pub fn pm25(&self) -> Result<Option<f64>, WaqiError> {
        self.pollutant(Pollutant::Pm25)
    }

    pub fn so2(&self) -> Result<Option<f64>, WaqiError> {
        self.pollutant(Pollutant::SulfurDioxide)
    }

    /// Code of the pollutant that determines the AQI, e.g. `"pm25"`.
    pub fn primary_pollutant(&self) -> Result<&str, WaqiError> {
        Ok(self.snapshot()?.dominant_pollutant.as_str())
    }
}

/// Combines the feed's local wall-clock time with its zone, which is either
/// a UTC offset (`+08:00`) or an IANA name (`Europe/Zurich`).
fn parse_measurement_time(local: &str, tz: &str) -> Result<DateTime<FixedOffset>, WaqiError> {
    let naive = NaiveDateTime::parse_from_str(local, MEASUREMENT_TIME_FORMAT)
        .map_err(|e| WaqiError::InvalidMeasurementTime(format!("'{}': {}", local, e)))?;

    if let Ok(offset) = tz.parse::<FixedOffset>() {
        return offset
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| WaqiError::InvalidMeasurementTime(format!("{} {}", local, tz)));
    }

    let zone: chrono_tz::Tz = tz
        .parse()
        .map_err(|_| WaqiError::InvalidMeasurementTime(format!("unknown time zone '{}'", tz)))?;

    // Ambiguous local times (DST fall-back) resolve to the earlier instant.
    zone.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| {
            WaqiError::InvalidMeasurementTime(format!("{} does not exist in {}", local, tz))
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
