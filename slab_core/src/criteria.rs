//! # Design Criteria
//!
//! Code-provision constants used by the design checks. The defaults follow
//! common ACI 318 / AASHTO practice; a project can override them by loading a
//! JSON file:
//!
//! ```json
//! {
//!   "crack_z_class1": 130.0,
//!   "crack_z_class2": 170.0,
//!   "service_stress_cap_fraction": 0.6,
//!   "tension_controlled_strain": 0.005,
//!   "distribution_fraction": 0.2
//! }
//! ```
//!
//! Missing keys take their default values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::calculations::CrackClass;
use crate::errors::{CalcError, CalcResult};

/// Code-provision constants for the design checks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignCriteria {
    /// Gergely–Lutz z limit for Class 1 exposure (kip/in)
    pub crack_z_class1: f64,

    /// Gergely–Lutz z limit for Class 2 exposure (kip/in)
    pub crack_z_class2: f64,

    /// Cap on allowable service steel stress as a fraction of fy
    pub service_stress_cap_fraction: f64,

    /// Net tensile strain at which a section is tension-controlled
    pub tension_controlled_strain: f64,

    /// Minimum distribution steel as a fraction of primary steel
    pub distribution_fraction: f64,
}

impl Default for DesignCriteria {
    fn default() -> Self {
        DesignCriteria {
            crack_z_class1: 130.0,
            crack_z_class2: 170.0,
            service_stress_cap_fraction: 0.6,
            tension_controlled_strain: 0.005,
            distribution_fraction: 0.20,
        }
    }
}

impl DesignCriteria {
    /// Crack-control z limit for an exposure class (kip/in)
    pub fn crack_z_limit(&self, class: CrackClass) -> f64 {
        match class {
            CrackClass::Class1 => self.crack_z_class1,
            CrackClass::Class2 => self.crack_z_class2,
        }
    }

    /// Validate criteria values.
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("crack_z_class1", self.crack_z_class1),
            ("crack_z_class2", self.crack_z_class2),
            ("service_stress_cap_fraction", self.service_stress_cap_fraction),
            ("tension_controlled_strain", self.tension_controlled_strain),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be a positive number",
                ));
            }
        }
        if self.crack_z_class1 > self.crack_z_class2 {
            return Err(CalcError::invalid_input(
                "crack_z_class1",
                self.crack_z_class1.to_string(),
                "Class 1 limit must not be looser than Class 2",
            ));
        }
        if !(0.0..=1.0).contains(&self.distribution_fraction) {
            return Err(CalcError::invalid_input(
                "distribution_fraction",
                self.distribution_fraction.to_string(),
                "Must be between 0 and 1",
            ));
        }
        Ok(())
    }

    /// Load and validate criteria from a JSON file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let path_str = path.display().to_string();
        let content = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read", &path_str, e.to_string()))?;
        let criteria: DesignCriteria = serde_json::from_str(&content)?;
        criteria.validate()?;
        Ok(criteria)
    }
}
