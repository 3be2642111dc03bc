//! waqi_client: World Air Quality Index (WAQI) real-time feed client.
//!
//! # Module structure
//!
//! ```text
//! waqi_client
//! ├── model       - snapshot types, accessor projections, WaqiError
//! ├── aqi         - US EPA AQI bands and their narratives
//! ├── config      - client settings from the environment (.env) or TOML
//! ├── client      - AirQualityClient: fetch + read the current snapshot
//! └── ingest
//!     ├── waqi    - feed URL construction + response envelope classification
//!     └── fixtures (test only) - representative feed responses
//! ```
//!
//! # Example
//!
//! ```no_run
//! use waqi_client::AirQualityClient;
//!
//! let mut client = AirQualityClient::new("demo").unwrap();
//! client.fetch_by_station(Some("shanghai")).unwrap();
//!
//! let reading = client.aqi().unwrap();
//! println!("{} ({})", reading.aqi, reading.pollution_level);
//! ```

pub mod aqi;
pub mod client;
pub mod config;
pub mod ingest;
pub mod model;

pub use aqi::{categorize, AqiCategory};
pub use client::AirQualityClient;
pub use config::{ClientConfig, ConfigError};
pub use model::{
    AqiReading, Attribution, Coordinates, MonitoringStation, Pollutant, Snapshot, WaqiError,
};
