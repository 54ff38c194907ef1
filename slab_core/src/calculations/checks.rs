//! # Design Checks
//!
//! Derived design quantities (temperature/shrinkage steel, efficiency ratio)
//! and the six pass/fail code checks.
//!
//! The checks are a flat table: each one is a single threshold comparison on
//! upstream results, evaluated independently of the others.
//!
//! | Check | Passes when |
//! |---|---|
//! | `moment_capacity` | φMn ≥ Mu and the section is not over-reinforced |
//! | `shear_capacity` | φVn ≥ Vu |
//! | `min_reinf` | As/ft ≥ ρmin × 12 h |
//! | `crack_control` | fs ≤ min(z / (dc A)^⅓, 0.6 fy) |
//! | `ductility` | εt ≥ 0.005 |
//! | `dist_reinf` | distribution steel ≥ max(20% of As/ft, A_ts) |

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::criteria::DesignCriteria;
use crate::equations::concrete as eq;
use crate::errors::{CalcError, CalcResult};
use crate::materials::ReinforcingSteel;
use crate::units::INCHES_PER_FOOT;

use super::geometry::SectionGeometry;
use super::service::ServiceStress;
use super::slab::Loads;
use super::strength::StrengthResult;

// ============================================================================
// Efficiency ratio
// ============================================================================

/// Marker serialized as the string `"UndefinedRatio"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Undefined {
    #[serde(rename = "UndefinedRatio")]
    UndefinedRatio,
}

/// Capacity-to-demand ratio φMn / Mu
///
/// With no factored moment the ratio has no value; it serializes as the
/// string `"UndefinedRatio"` instead of infinity or zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EfficiencyRatio {
    /// Finite ratio
    Defined(f64),
    /// Zero demand
    Undefined(Undefined),
}

impl EfficiencyRatio {
    /// Compute φMn / Mu.
    pub fn compute(phi_mn_kft: f64, mu_kft: f64) -> Self {
        match ratio(phi_mn_kft, mu_kft) {
            Ok(value) => EfficiencyRatio::Defined(value),
            Err(err) => {
                debug!(%err, "efficiency ratio undefined");
                EfficiencyRatio::Undefined(Undefined::UndefinedRatio)
            }
        }
    }

    /// The ratio value, or `UndefinedRatio` as an error
    pub fn value(&self) -> CalcResult<f64> {
        match self {
            EfficiencyRatio::Defined(v) => Ok(*v),
            EfficiencyRatio::Undefined(_) => Err(CalcError::undefined_ratio(
                "gamma_er",
                "factored moment M_u is zero",
            )),
        }
    }

    pub fn is_defined(&self) -> bool {
        matches!(self, EfficiencyRatio::Defined(_))
    }
}

impl fmt::Display for EfficiencyRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EfficiencyRatio::Defined(v) => write!(f, "{:.3}", v),
            EfficiencyRatio::Undefined(_) => write!(f, "UndefinedRatio"),
        }
    }
}

fn ratio(capacity: f64, demand: f64) -> CalcResult<f64> {
    if demand == 0.0 {
        return Err(CalcError::undefined_ratio("gamma_er", "factored moment M_u is zero"));
    }
    Ok(capacity / demand)
}

// ============================================================================
// Checks
// ============================================================================

/// Identifier for one of the six design checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignCheck {
    MomentCapacity,
    ShearCapacity,
    MinReinf,
    CrackControl,
    Ductility,
    DistReinf,
}

impl DesignCheck {
    /// All checks in report order
    pub const ALL: [DesignCheck; 6] = [
        DesignCheck::MomentCapacity,
        DesignCheck::ShearCapacity,
        DesignCheck::MinReinf,
        DesignCheck::CrackControl,
        DesignCheck::Ductility,
        DesignCheck::DistReinf,
    ];

    /// Field name used in responses
    pub fn key(&self) -> &'static str {
        match self {
            DesignCheck::MomentCapacity => "moment_capacity",
            DesignCheck::ShearCapacity => "shear_capacity",
            DesignCheck::MinReinf => "min_reinf",
            DesignCheck::CrackControl => "crack_control",
            DesignCheck::Ductility => "ductility",
            DesignCheck::DistReinf => "dist_reinf",
        }
    }

    /// Label for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            DesignCheck::MomentCapacity => "Moment Capacity",
            DesignCheck::ShearCapacity => "Shear Capacity",
            DesignCheck::MinReinf => "Min. Reinf.",
            DesignCheck::CrackControl => "Crack Control",
            DesignCheck::Ductility => "Ductility",
            DesignCheck::DistReinf => "Distribution Reinf.",
        }
    }
}

/// Outcome of the six checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignChecks {
    pub moment_capacity: bool,
    pub shear_capacity: bool,
    pub min_reinf: bool,
    pub crack_control: bool,
    pub ductility: bool,
    pub dist_reinf: bool,
}

impl DesignChecks {
    /// Outcome of a single check
    pub fn get(&self, check: DesignCheck) -> bool {
        match check {
            DesignCheck::MomentCapacity => self.moment_capacity,
            DesignCheck::ShearCapacity => self.shear_capacity,
            DesignCheck::MinReinf => self.min_reinf,
            DesignCheck::CrackControl => self.crack_control,
            DesignCheck::Ductility => self.ductility,
            DesignCheck::DistReinf => self.dist_reinf,
        }
    }

    /// (check, passed) pairs in report order
    pub fn iter(&self) -> impl Iterator<Item = (DesignCheck, bool)> + '_ {
        DesignCheck::ALL.into_iter().map(move |check| (check, self.get(check)))
    }

    pub fn all_pass(&self) -> bool {
        self.iter().all(|(_, pass)| pass)
    }

    /// Checks that did not pass
    pub fn failures(&self) -> Vec<DesignCheck> {
        self.iter().filter(|(_, pass)| !pass).map(|(check, _)| check).collect()
    }
}

/// Derived design quantities feeding the checks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignQuantities {
    /// Shrinkage/temperature reinforcement ratio
    pub rho_ts: f64,
    /// Required shrinkage/temperature steel A_ts (in²/ft)
    pub a_ts_per_ft: f64,
    /// Minimum flexural steel (in²/ft)
    pub as_min_per_ft: f64,
    /// Allowable service steel stress for crack control (ksi)
    pub crack_allowable_fs_ksi: f64,
    /// Required distribution steel (in²/ft)
    pub dist_required_per_ft: f64,
    /// Distribution steel provided (in²/ft)
    pub dist_provided_per_ft: f64,
    /// φMn / Mu
    pub gamma_er: EfficiencyRatio,
}

/// Everything the evaluator reads from upstream
pub struct CheckInputs<'a> {
    pub geometry: &'a SectionGeometry,
    pub steel: &'a ReinforcingSteel,
    pub loads: &'a Loads,
    pub service: &'a ServiceStress,
    pub strength: &'a StrengthResult,
    /// Distribution steel provided (in²/ft); `None` means A_ts is provided
    pub dist_provided_per_ft: Option<f64>,
}

/// Compute design quantities and evaluate all six checks.
pub fn evaluate(inputs: &CheckInputs<'_>, criteria: &DesignCriteria) -> (DesignQuantities, DesignChecks) {
    let geom = inputs.geometry;
    let strength = inputs.strength;
    let fy = inputs.steel.fy_ksi;

    let rho_ts = eq::shrinkage_temperature_ratio(fy);
    let a_ts_per_ft = rho_ts * INCHES_PER_FOOT * geom.height_in;
    // One-way slabs use the shrinkage ratio as the flexural minimum
    let as_min_per_ft = a_ts_per_ft;

    let z = criteria.crack_z_limit(inputs.loads.crack_class);
    let crack_allowable_fs_ksi = eq::crack_control_allowable_stress(z, geom.tension_cover_in, geom.spacing_in)
        .min(criteria.service_stress_cap_fraction * fy);

    let dist_required_per_ft = (criteria.distribution_fraction * geom.steel_area_per_ft).max(a_ts_per_ft);
    let dist_provided_per_ft = inputs.dist_provided_per_ft.unwrap_or(a_ts_per_ft);

    let gamma_er = EfficiencyRatio::compute(strength.phi_mn_kft, inputs.loads.mu_kft);

    let checks = DesignChecks {
        moment_capacity: strength.phi_mn_kft >= inputs.loads.mu_kft && !strength.over_reinforced,
        shear_capacity: strength.phi_vn_kips >= inputs.loads.vu_kips,
        min_reinf: geom.steel_area_per_ft >= as_min_per_ft,
        crack_control: inputs.service.f_steel_ksi <= crack_allowable_fs_ksi,
        ductility: strength.epsilon_st >= criteria.tension_controlled_strain,
        dist_reinf: dist_provided_per_ft >= dist_required_per_ft,
    };

    let quantities = DesignQuantities {
        rho_ts,
        a_ts_per_ft,
        as_min_per_ft,
        crack_allowable_fs_ksi,
        dist_required_per_ft,
        dist_provided_per_ft,
        gamma_er,
    };

    (quantities, checks)
}
