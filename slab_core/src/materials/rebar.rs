//! Standard Reinforcing Bar Sizes
//!
//! Nominal diameters and areas for deformed reinforcing bars per ASTM A615
//! (inch-pound designations). The bar number is the nominal diameter in
//! eighths of an inch for #3 through #8; #9 through #11 are sized to match the
//! areas of the old square bars.
//!
//! | Bar | Diameter (in) | Area (in²) |
//! |-----|---------------|------------|
//! | #3  | 0.375         | 0.11       |
//! | #4  | 0.500         | 0.20       |
//! | #5  | 0.625         | 0.31       |
//! | #6  | 0.750         | 0.44       |
//! | #7  | 0.875         | 0.60       |
//! | #8  | 1.000         | 0.79       |
//! | #9  | 1.128         | 1.00       |
//! | #10 | 1.270         | 1.27       |
//! | #11 | 1.410         | 1.56       |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Standard reinforcing bar designation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum BarSize {
    /// #3 (3/8" diameter)
    No3,
    /// #4 (1/2" diameter)
    No4,
    /// #5 (5/8" diameter)
    #[default]
    No5,
    /// #6 (3/4" diameter)
    No6,
    /// #7 (7/8" diameter)
    No7,
    /// #8 (1" diameter)
    No8,
    /// #9 (1.128" diameter)
    No9,
    /// #10 (1.270" diameter)
    No10,
    /// #11 (1.410" diameter)
    No11,
}

/// Nominal bar properties
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarProperties {
    /// Nominal diameter (in)
    pub diameter_in: f64,
    /// Nominal cross-sectional area (in²)
    pub area_in2: f64,
}

impl BarSize {
    /// All bar sizes in ascending order
    pub const ALL: [BarSize; 9] = [
        BarSize::No3,
        BarSize::No4,
        BarSize::No5,
        BarSize::No6,
        BarSize::No7,
        BarSize::No8,
        BarSize::No9,
        BarSize::No10,
        BarSize::No11,
    ];

    /// Designation as written on drawings (e.g., "#5")
    pub fn designation(&self) -> &'static str {
        match self {
            BarSize::No3 => "#3",
            BarSize::No4 => "#4",
            BarSize::No5 => "#5",
            BarSize::No6 => "#6",
            BarSize::No7 => "#7",
            BarSize::No8 => "#8",
            BarSize::No9 => "#9",
            BarSize::No10 => "#10",
            BarSize::No11 => "#11",
        }
    }

    /// Nominal diameter and area
    pub fn properties(&self) -> BarProperties {
        let (diameter_in, area_in2) = match self {
            BarSize::No3 => (0.375, 0.11),
            BarSize::No4 => (0.500, 0.20),
            BarSize::No5 => (0.625, 0.31),
            BarSize::No6 => (0.750, 0.44),
            BarSize::No7 => (0.875, 0.60),
            BarSize::No8 => (1.000, 0.79),
            BarSize::No9 => (1.128, 1.00),
            BarSize::No10 => (1.270, 1.27),
            BarSize::No11 => (1.410, 1.56),
        };
        BarProperties {
            diameter_in,
            area_in2,
        }
    }

    /// Nominal diameter (in)
    pub fn diameter_in(&self) -> f64 {
        self.properties().diameter_in
    }

    /// Nominal area (in²)
    pub fn area_in2(&self) -> f64 {
        self.properties().area_in2
    }

    /// Parse from common string representations ("#5", "5", "No. 5", " #5 ")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_uppercase();
        let number = normalized
            .trim_start_matches("NO.")
            .trim_start_matches("NO")
            .trim_start_matches('#')
            .trim();
        match number {
            "3" => Ok(BarSize::No3),
            "4" => Ok(BarSize::No4),
            "5" => Ok(BarSize::No5),
            "6" => Ok(BarSize::No6),
            "7" => Ok(BarSize::No7),
            "8" => Ok(BarSize::No8),
            "9" => Ok(BarSize::No9),
            "10" => Ok(BarSize::No10),
            "11" => Ok(BarSize::No11),
            _ => Err(CalcError::unknown_bar_size(s)),
        }
    }
}

impl FromStr for BarSize {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BarSize::from_str_flexible(s)
    }
}

impl TryFrom<String> for BarSize {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        BarSize::from_str_flexible(&value)
    }
}

impl From<BarSize> for String {
    fn from(size: BarSize) -> Self {
        size.designation().to_string()
    }
}

impl fmt::Display for BarSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.designation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no5_properties() {
        let props = BarSize::No5.properties();
        assert_eq!(props.diameter_in, 0.625);
        assert_eq!(props.area_in2, 0.31);
    }

    #[test]
    fn test_areas_increase_with_size() {
        for pair in BarSize::ALL.windows(2) {
            assert!(pair[1].area_in2() > pair[0].area_in2());
            assert!(pair[1].diameter_in() > pair[0].diameter_in());
        }
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!(BarSize::from_str_flexible("#5").unwrap(), BarSize::No5);
        assert_eq!(BarSize::from_str_flexible(" #11 ").unwrap(), BarSize::No11);
        assert_eq!(BarSize::from_str_flexible("4").unwrap(), BarSize::No4);
        assert_eq!(BarSize::from_str_flexible("No. 8").unwrap(), BarSize::No8);
        assert_eq!("#3".parse::<BarSize>().unwrap(), BarSize::No3);
    }

    #[test]
    fn test_unknown_sizes() {
        for bad in ["#2", "#14", "#18", "", "five"] {
            let err = BarSize::from_str_flexible(bad).unwrap_err();
            assert_eq!(err.error_code(), "UNKNOWN_BAR_SIZE");
        }
    }

    #[test]
    fn test_serde_uses_designation() {
        let json = serde_json::to_string(&BarSize::No10).unwrap();
        assert_eq!(json, "\"#10\"");
        let parsed: BarSize = serde_json::from_str("\"#7\"").unwrap();
        assert_eq!(parsed, BarSize::No7);
        assert!(serde_json::from_str::<BarSize>("\"#12\"").is_err());
    }
}
