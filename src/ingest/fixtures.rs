//! Test fixtures: representative JSON envelopes from the WAQI feed API.
//!
//! Structurally complete but trimmed to what the parser reads (the real feed
//! also carries `forecast` and `debug` blocks, which are ignored). They
//! reflect responses from:
//!   https://api.waqi.info/api/feed/{target}/?token=...
//!
//! Feed response shape (status "ok"):
//!   data.aqi                - number; "-" when the station has no reading
//!   data.idx                - station id
//!   data.attributions[]     - {url, name, logo?}
//!   data.city.{geo, name, url, location}
//!   data.dominentpol        - dominant pollutant code (sic)
//!   data.iaqi.{code}.v      - only codes the station measures are present
//!   data.time.{s, tz, v, iso}
//!
//! Note: city names come HTML-entity encoded ("S&atilde;o Paulo").

/// São Paulo, moderate AQI driven by PM2.5, full set of readings.
#[cfg(test)]
pub(crate) fn fixture_sao_paulo_json() -> &'static str {
    r#"{
      "status": "ok",
      "data": {
        "aqi": 57,
        "idx": 364,
        "attributions": [
          {
            "url": "http://www.cetesb.sp.gov.br/",
            "name": "CETESB - Companhia Ambiental do Estado de São Paulo",
            "logo": "Brazil-CETESB.png"
          },
          {
            "url": "https://waqi.info/",
            "name": "World Air Quality Index Project"
          }
        ],
        "city": {
          "geo": [-23.5505, -46.6333],
          "name": "S&atilde;o Paulo",
          "url": "https://aqicn.org/city/brazil/sao-paulo",
          "location": ""
        },
        "dominentpol": "pm25",
        "iaqi": {
          "co": { "v": 5.6 },
          "h": { "v": 72.5 },
          "no2": { "v": 18.3 },
          "o3": { "v": 21.9 },
          "p": { "v": 1016.2 },
          "pm10": { "v": 31 },
          "pm25": { "v": 12.3 },
          "so2": { "v": 2.1 },
          "t": { "v": 19.4 },
          "w": { "v": 3.6 }
        },
        "time": {
          "s": "2024-05-01 14:00:00",
          "tz": "-03:00",
          "v": 1714572000,
          "iso": "2024-05-01T14:00:00-03:00"
        },
        "debug": { "sync": "2024-05-02T02:24:11+09:00" }
      }
    }"#
}

/// Station that measures only ozone and temperature. No `pm25` key at all,
/// and a legitimate zero reading for ozone. Zone given as an IANA name.
#[cfg(test)]
pub(crate) fn fixture_sparse_readings_json() -> &'static str {
    r#"{
      "status": "ok",
      "data": {
        "aqi": 12,
        "idx": 8520,
        "attributions": [],
        "city": {
          "geo": [47.3769, 8.5417],
          "name": "Z&uuml;rich Kaserne, Switzerland",
          "url": "https://aqicn.org/city/switzerland/zurich/kaserne"
        },
        "dominentpol": "o3",
        "iaqi": {
          "o3": { "v": 0 },
          "t": { "v": -2.5 }
        },
        "time": {
          "s": "2024-01-15 08:00:00",
          "tz": "Europe/Zurich"
        }
      }
    }"#
}

/// Beijing during a hazardous episode; AQI delivered as a string.
#[cfg(test)]
pub(crate) fn fixture_hazardous_json() -> &'static str {
    r#"{
      "status": "ok",
      "data": {
        "aqi": "412",
        "idx": 1451,
        "attributions": [
          {
            "url": "http://www.bjmemc.com.cn/",
            "name": "Beijing Environmental Protection Monitoring Center"
          }
        ],
        "city": {
          "geo": [39.954592, 116.468117],
          "name": "Beijing (&#21271;&#20140;)",
          "url": "https://aqicn.org/city/beijing"
        },
        "dominentpol": "pm25",
        "iaqi": { "pm25": { "v": 412 } },
        "time": { "s": "2024-01-10 09:00:00", "tz": "+08:00" }
      }
    }"#
}

/// Station whose weather sensors send values the feed could not fill in:
/// null wind gust, string dew point. Pollutant readings are intact.
#[cfg(test)]
pub(crate) fn fixture_partial_readings_json() -> &'static str {
    r#"{
      "status": "ok",
      "data": {
        "aqi": 46,
        "idx": 6132,
        "attributions": [],
        "city": {
          "geo": [48.8566, 2.3522],
          "name": "Paris",
          "url": "https://aqicn.org/city/paris"
        },
        "dominentpol": "pm25",
        "iaqi": {
          "pm25": { "v": 12.3 },
          "t": { "v": 8 },
          "wg": { "v": null },
          "dew": { "v": "-" }
        },
        "time": { "s": "2024-02-20 11:00:00", "tz": "+01:00" }
      }
    }"#
}

/// Station exists but is offline: aqi "-".
#[cfg(test)]
pub(crate) fn fixture_offline_station_json() -> &'static str {
    r#"{
      "status": "ok",
      "data": {
        "aqi": "-",
        "idx": 9999,
        "attributions": [],
        "city": { "geo": [0.0, 0.0], "name": "Offline", "url": "https://aqicn.org/" },
        "dominentpol": "",
        "iaqi": {},
        "time": { "s": "", "tz": "" }
      }
    }"#
}

/// Timestamp the accessor cannot interpret.
#[cfg(test)]
pub(crate) fn fixture_bad_time_json() -> &'static str {
    r#"{
      "status": "ok",
      "data": {
        "aqi": 30,
        "idx": 77,
        "city": { "geo": [1.0, 2.0], "name": "Somewhere", "url": "https://aqicn.org/" },
        "dominentpol": "pm10",
        "iaqi": {},
        "time": { "s": "yesterday", "tz": "Mars/Olympus_Mons" }
      }
    }"#
}

#[cfg(test)]
pub(crate) fn fixture_unknown_station_json() -> &'static str {
    r#"{ "status": "error", "data": "Unknown station" }"#
}

#[cfg(test)]
pub(crate) fn fixture_over_quota_json() -> &'static str {
    r#"{ "status": "error", "data": "Over quota" }"#
}

#[cfg(test)]
pub(crate) fn fixture_invalid_key_json() -> &'static str {
    r#"{ "status": "error", "data": "Invalid key" }"#
}
