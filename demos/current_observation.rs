//! Prints the current air quality for a station, a coordinate, or the
//! station nearest to this machine.
//!
//! Usage:
//!   cargo run --example current_observation                  # nearest station
//!   cargo run --example current_observation -- shanghai      # by name
//!   cargo run --example current_observation -- 52.37 4.89    # by coordinate
//!
//! Environment:
//!   WAQI_TOKEN - access token (https://aqicn.org/data-platform/token)
//!   RUST_LOG   - e.g. `debug` to see the outbound requests

use std::env;
use std::process;

use tracing_subscriber::EnvFilter;
use waqi_client::{AirQualityClient, ClientConfig, Pollutant, WaqiError};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(config, env::args().skip(1).collect()) {
        eprintln!("Error: {}", e);
        if e.is_retryable() {
            eprintln!("(temporary failure, try again later)");
        }
        process::exit(1);
    }
}

fn run(config: ClientConfig, args: Vec<String>) -> Result<(), WaqiError> {
    let mut client = AirQualityClient::with_config(config)?;

    let coordinates = match args.as_slice() {
        [lat, lon] => lat.parse::<f64>().ok().zip(lon.parse::<f64>().ok()),
        _ => None,
    };

    match coordinates {
        Some((latitude, longitude)) => client.fetch_by_geo_location(latitude, longitude)?,
        None if args.is_empty() => client.fetch_by_station(None)?,
        None => client.fetch_by_station(Some(args.join(" ").as_str()))?,
    }

    let station = client.monitoring_station()?;
    let reading = client.aqi()?;

    println!("{} (#{})", station.name, station.id);
    println!(
        "  at {:.4}, {:.4} - {}",
        station.coordinates.latitude, station.coordinates.longitude, station.url
    );
    match client.measurement_time() {
        Ok(time) => println!("  measured {}", time.to_rfc3339()),
        Err(e) => println!("  measured at an unknown time ({})", e),
    }
    println!();
    println!("AQI {} - {}", reading.aqi, reading.pollution_level);
    println!("  {}", reading.health_implications);
    println!("  Caution: {}", reading.cautionary_statement);
    println!("  Dominant pollutant: {}", client.primary_pollutant()?);
    println!();

    for pollutant in Pollutant::ALL {
        if let Some(value) = client.pollutant(pollutant)? {
            println!("  {:<5} {:>8.1}", pollutant.code(), value);
        }
    }

    let attributions = client.attributions()?;
    if !attributions.is_empty() {
        println!();
        println!("Data provided by:");
        for a in attributions {
            println!("  {} <{}>", a.name, a.url);
        }
    }

    Ok(())
}
