//! Eight-point compass direction derived from a wind bearing

use serde::{Deserialize, Serialize};
use std::fmt;

/// Compass sector a wind bearing falls into
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// Half-open `[start, end)` sectors in degrees. North has `start > end`
/// and wraps across 0°.
const SECTORS: [(CompassDirection, f64, f64); 8] = [
    (CompassDirection::N, 337.5, 22.5),
    (CompassDirection::NE, 22.5, 67.5),
    (CompassDirection::E, 67.5, 112.5),
    (CompassDirection::SE, 112.5, 157.5),
    (CompassDirection::S, 157.5, 202.5),
    (CompassDirection::SW, 202.5, 247.5),
    (CompassDirection::W, 247.5, 292.5),
    (CompassDirection::NW, 292.5, 337.5),
];

const FULL_CIRCLE: f64 = 360.0;

impl CompassDirection {
    /// Map a bearing in degrees to its compass sector
    ///
    /// Returns `None` for bearings outside `[0, 360)` (and for NaN).
    #[must_use]
    pub fn from_bearing(bearing: f64) -> Option<Self> {
        SECTORS
            .iter()
            .find(|(_, start, end)| {
                if start <= end {
                    (*start..*end).contains(&bearing)
                } else {
                    (*start..FULL_CIRCLE).contains(&bearing) || (0.0..*end).contains(&bearing)
                }
            })
            .map(|(direction, _, _)| *direction)
    }

    /// Short label, e.g. `NE`
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
        }
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
