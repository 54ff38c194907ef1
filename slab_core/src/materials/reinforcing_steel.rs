//! Reinforcing Steel Grades
//!
//! Named reinforcing steel grades and the yield strength each one maps to.
//! Grade names match the labels a client sends (e.g., `"A615, Grade 60"`).
//!
//! The modulus of elasticity is the same for all grades (29,000 ksi) unless
//! the caller supplies a different value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default modulus of elasticity for reinforcing steel (ksi)
pub const DEFAULT_ES_KSI: f64 = 29_000.0;

/// Named reinforcing steel grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SteelGrade {
    /// Legacy Grade 40 bar
    #[serde(rename = "Grade 40")]
    Grade40,
    /// ASTM A615 Grade 60
    #[default]
    #[serde(rename = "A615, Grade 60")]
    A615Grade60,
    /// ASTM A615 Grade 75
    #[serde(rename = "A615, Grade 75")]
    A615Grade75,
    /// ASTM A615 Grade 80
    #[serde(rename = "A615, Grade 80")]
    A615Grade80,
    /// ASTM A607 Grade 60
    #[serde(rename = "A607, Grade 60")]
    A607Grade60,
    /// ASTM A607 Grade 80
    #[serde(rename = "A607, Grade 80")]
    A607Grade80,
    /// ASTM A1035 Grade 100 (low-carbon chromium)
    #[serde(rename = "A1035, Grade 100")]
    A1035Grade100,
}

impl SteelGrade {
    /// All grades in the order a client lists them
    pub const ALL: [SteelGrade; 7] = [
        SteelGrade::Grade40,
        SteelGrade::A615Grade60,
        SteelGrade::A615Grade75,
        SteelGrade::A615Grade80,
        SteelGrade::A607Grade60,
        SteelGrade::A607Grade80,
        SteelGrade::A1035Grade100,
    ];

    /// Display name (also the serialized form)
    pub fn display_name(&self) -> &'static str {
        match self {
            SteelGrade::Grade40 => "Grade 40",
            SteelGrade::A615Grade60 => "A615, Grade 60",
            SteelGrade::A615Grade75 => "A615, Grade 75",
            SteelGrade::A615Grade80 => "A615, Grade 80",
            SteelGrade::A607Grade60 => "A607, Grade 60",
            SteelGrade::A607Grade80 => "A607, Grade 80",
            SteelGrade::A1035Grade100 => "A1035, Grade 100",
        }
    }

    /// Specified yield strength fy (ksi)
    pub fn fy_ksi(&self) -> f64 {
        match self {
            SteelGrade::Grade40 => 40.0,
            SteelGrade::A615Grade60 | SteelGrade::A607Grade60 => 60.0,
            SteelGrade::A615Grade75 => 75.0,
            SteelGrade::A615Grade80 | SteelGrade::A607Grade80 => 80.0,
            SteelGrade::A1035Grade100 => 100.0,
        }
    }

    /// Parse a grade name, ignoring case, commas and extra whitespace
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let key: String = s
            .to_uppercase()
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        match key.as_str() {
            "GRADE 40" | "GR 40" => Ok(SteelGrade::Grade40),
            "A615 GRADE 60" | "A615 GR 60" | "GRADE 60" => Ok(SteelGrade::A615Grade60),
            "A615 GRADE 75" | "A615 GR 75" => Ok(SteelGrade::A615Grade75),
            "A615 GRADE 80" | "A615 GR 80" => Ok(SteelGrade::A615Grade80),
            "A607 GRADE 60" | "A607 GR 60" => Ok(SteelGrade::A607Grade60),
            "A607 GRADE 80" | "A607 GR 80" => Ok(SteelGrade::A607Grade80),
            "A1035 GRADE 100" | "A1035 GR 100" => Ok(SteelGrade::A1035Grade100),
            _ => Err(CalcError::unknown_steel_grade(s)),
        }
    }
}

impl FromStr for SteelGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SteelGrade::from_str_flexible(s)
    }
}

impl fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Reinforcing steel properties used by the section analyses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReinforcingSteel {
    /// Specified yield strength fy (ksi)
    pub fy_ksi: f64,
    /// Modulus of elasticity Es (ksi)
    pub es_ksi: f64,
}

impl ReinforcingSteel {
    /// Steel with explicit yield strength and modulus
    pub fn new(fy_ksi: f64, es_ksi: f64) -> Self {
        ReinforcingSteel { fy_ksi, es_ksi }
    }

    /// Steel of a named grade with the default modulus
    pub fn from_grade(grade: SteelGrade) -> Self {
        ReinforcingSteel::new(grade.fy_ksi(), DEFAULT_ES_KSI)
    }

    /// Yield strain fy / Es
    pub fn yield_strain(&self) -> f64 {
        self.fy_ksi / self.es_ksi
    }
}

impl Default for ReinforcingSteel {
    fn default() -> Self {
        ReinforcingSteel::from_grade(SteelGrade::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_yield_strengths() {
        assert_eq!(SteelGrade::Grade40.fy_ksi(), 40.0);
        assert_eq!(SteelGrade::A607Grade60.fy_ksi(), 60.0);
        assert_eq!(SteelGrade::A1035Grade100.fy_ksi(), 100.0);
    }

    #[test]
    fn test_parse_client_labels() {
        for grade in SteelGrade::ALL {
            assert_eq!(SteelGrade::from_str_flexible(grade.display_name()).unwrap(), grade);
        }
        assert_eq!(
            SteelGrade::from_str_flexible("a615 grade 75").unwrap(),
            SteelGrade::A615Grade75
        );
        assert!(SteelGrade::from_str_flexible("A36").is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&SteelGrade::A1035Grade100).unwrap();
        assert_eq!(json, "\"A1035, Grade 100\"");
        let grade: SteelGrade = serde_json::from_str("\"A607, Grade 80\"").unwrap();
        assert_eq!(grade, SteelGrade::A607Grade80);
    }

    #[test]
    fn test_yield_strain() {
        let steel = ReinforcingSteel::default();
        assert!((steel.yield_strain() - 60.0 / 29_000.0).abs() < 1e-12);
    }
}
