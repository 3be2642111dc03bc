//! US EPA Air Quality Index categories.
//!
//! Maps an AQI value onto one of six bands, each with the narrative texts
//! published alongside the index. Bands are closed intervals; the last one is
//! open-ended:
//!
//! ```text
//!   0 –  50   Good
//!  51 – 100   Moderate
//! 101 – 150   Unhealthy for Sensitive Groups
//! 151 – 200   Unhealthy
//! 201 – 300   Very Unhealthy
//! 301 +       Hazardous
//! ```

/// Declared from least to most severe, so categories compare by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

const LIMIT_PROLONGED_FOR_SENSITIVE: &str = "Active children and adults, and people with respiratory disease, such as asthma, should limit prolonged outdoor exertion.";

/// Upper bound (inclusive) of each band, lowest first. Hazardous has none.
const BREAKPOINTS: [(u32, AqiCategory); 5] = [
    (50, AqiCategory::Good),
    (100, AqiCategory::Moderate),
    (150, AqiCategory::UnhealthyForSensitiveGroups),
    (200, AqiCategory::Unhealthy),
    (300, AqiCategory::VeryUnhealthy),
];

/// Returns the band containing `aqi`.
pub fn categorize(aqi: u32) -> AqiCategory {
    BREAKPOINTS
        .iter()
        .find(|(upper, _)| aqi <= *upper)
        .map(|(_, category)| *category)
        .unwrap_or(AqiCategory::Hazardous)
}

impl AqiCategory {
    pub fn level(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    pub fn health_implications(self) -> &'static str {
        match self {
            AqiCategory::Good => {
                "Air quality is considered satisfactory, and air pollution poses little or no risk."
            }
            AqiCategory::Moderate => {
                "Air quality is acceptable, however, for some pollutants there may be a moderate health concern for a very small number of people who are unusually sensitive to air pollution."
            }
            AqiCategory::UnhealthyForSensitiveGroups => {
                "Members of sensitive groups may experience health effects. The general public is not likely to be affected."
            }
            AqiCategory::Unhealthy => {
                "Everyone may begin to experience health effects; members of sensitive groups may experience more serious health effects."
            }
            AqiCategory::VeryUnhealthy => {
                "Health warnings of emergency conditions. The entire population is more likely to be affected."
            }
            AqiCategory::Hazardous => {
                "Health alert; everyone may experience more serious health effects."
            }
        }
    }

    /// Advice on outdoor exertion. Strictly speaking these statements are
    /// defined for PM2.5, but the feed applies them to whichever pollutant
    /// dominates.
    pub fn cautionary_statement(self) -> &'static str {
        match self {
            AqiCategory::Good => "None",
            AqiCategory::Moderate | AqiCategory::UnhealthyForSensitiveGroups => {
                LIMIT_PROLONGED_FOR_SENSITIVE
            }
            AqiCategory::Unhealthy => {
                "Active children and adults, and people with respiratory disease, such as asthma, should avoid prolonged outdoor exertion; everyone else, especially children, should limit prolonged outdoor exertion."
            }
            AqiCategory::VeryUnhealthy => {
                "Active children and adults, and people with respiratory disease, such as asthma, should avoid all outdoor exertion; everyone else, especially children, should limit prolonged outdoor exertion."
            }
            AqiCategory::Hazardous => "Everyone should avoid all outdoor exertion.",
        }
    }
}

impl std::fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.level())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
