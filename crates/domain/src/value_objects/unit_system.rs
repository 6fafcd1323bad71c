//! Unit systems understood by the forecast provider
//!
//! Each system fixes the labels shown next to temperatures, wind speeds and
//! visibility distances.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Unit system requested from (and reported back by) the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Provider picks units from the location
    #[default]
    Auto,
    /// Canada
    Ca,
    /// Standard International units
    Si,
    /// United Kingdom
    Uk2,
    /// United States
    Us,
}

/// Display labels for the values of one unit system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct UnitLabels {
    /// Temperature unit, e.g. `C`
    pub temperature: &'static str,
    /// Wind speed unit, e.g. `MPH`
    pub wind_speed: &'static str,
    /// Visibility distance unit, e.g. `km`
    pub visibility: &'static str,
}

impl UnitSystem {
    /// Every supported system, in display order
    pub const ALL: [Self; 5] = [Self::Auto, Self::Ca, Self::Si, Self::Uk2, Self::Us];

    /// Identifier used on the wire
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Ca => "ca",
            Self::Si => "si",
            Self::Uk2 => "uk2",
            Self::Us => "us",
        }
    }

    /// Human-readable description for selection lists
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Auto => "Automatically select based on geographic location",
            Self::Ca => "Canada",
            Self::Si => "Standard International Units",
            Self::Uk2 => "United Kingdom",
            Self::Us => "United States",
        }
    }

    /// Labels applied to values reported in this system
    #[must_use]
    pub const fn labels(&self) -> UnitLabels {
        match self {
            Self::Auto => UnitLabels::EMPTY,
            Self::Ca => UnitLabels::new("C", "KPH", "km"),
            Self::Si => UnitLabels::new("C", "MPS", "km"),
            Self::Uk2 => UnitLabels::new("C", "MPH", "mi"),
            Self::Us => UnitLabels::new("F", "MPH", "mi"),
        }
    }
}

impl UnitLabels {
    /// Labels used when the reported system is unknown
    pub const EMPTY: Self = Self::new("", "", "");

    const fn new(
        temperature: &'static str,
        wind_speed: &'static str,
        visibility: &'static str,
    ) -> Self {
        Self {
            temperature,
            wind_speed,
            visibility,
        }
    }

    /// Resolve labels for a unit id reported by the provider
    ///
    /// Unmatched ids yield empty labels rather than an error.
    #[must_use]
    pub fn for_reported(id: &str) -> Self {
        id.parse::<UnitSystem>()
            .map_or(Self::EMPTY, |system| system.labels())
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for UnitSystem {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|system| system.id() == s)
            .ok_or_else(|| DomainError::UnsupportedUnitSystem(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_supported_id() {
        for system in UnitSystem::ALL {
            assert_eq!(system.id().parse::<UnitSystem>(), Ok(system));
        }
    }

    #[test]
    fn rejects_unknown_id() {
        assert_eq!(
            "metric".parse::<UnitSystem>(),
            Err(DomainError::UnsupportedUnitSystem("metric".to_string()))
        );
    }

    #[test]
    fn ids_are_case_sensitive() {
        assert!("US".parse::<UnitSystem>().is_err());
    }

    #[test]
    fn us_labels() {
        let labels = UnitSystem::Us.labels();
        assert_eq!(labels.temperature, "F");
        assert_eq!(labels.wind_speed, "MPH");
        assert_eq!(labels.visibility, "mi");
    }

    #[test]
    fn si_and_ca_differ_only_in_wind() {
        let si = UnitSystem::Si.labels();
        let ca = UnitSystem::Ca.labels();
        assert_eq!(si.temperature, ca.temperature);
        assert_eq!(si.visibility, ca.visibility);
        assert_eq!(si.wind_speed, "MPS");
        assert_eq!(ca.wind_speed, "KPH");
    }

    #[test]
    fn auto_has_empty_labels() {
        assert_eq!(UnitSystem::Auto.labels(), UnitLabels::EMPTY);
    }

    #[test]
    fn reported_uk2_resolves() {
        let labels = UnitLabels::for_reported("uk2");
        assert_eq!(labels.temperature, "C");
        assert_eq!(labels.wind_speed, "MPH");
        assert_eq!(labels.visibility, "mi");
    }

    #[test]
    fn reported_unknown_yields_empty_labels() {
        assert_eq!(UnitLabels::for_reported("imperial"), UnitLabels::EMPTY);
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&UnitSystem::Uk2).expect("serialize");
        assert_eq!(json, "\"uk2\"");
        let parsed: UnitSystem = serde_json::from_str("\"ca\"").expect("deserialize");
        assert_eq!(parsed, UnitSystem::Ca);
    }

    #[test]
    fn display_matches_id() {
        assert_eq!(UnitSystem::Si.to_string(), "si");
    }
}
