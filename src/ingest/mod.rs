//! Data source clients. One file per upstream API; currently only the WAQI
//! real-time feed.
pub mod waqi;

#[cfg(test)]
pub(crate) mod fixtures;
