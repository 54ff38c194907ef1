//! # One-Way Slab Design
//!
//! Flexural, shear, and serviceability design of a one-way reinforced
//! concrete slab strip (or a rectangular beam of width `b`).
//!
//! ## Dependency graph
//!
//! ```text
//!              ┌──────────── geometry ────────────┐
//!              │                │                 │
//!          cracking          strength             │
//!              │                │                 │
//!           service             │                 │
//!              └────────────► checks ◄────────────┘
//! ```
//!
//! Each stage is a pure function of its inputs; outputs are passed forward
//! explicitly. Identical inputs always produce identical results.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::calculations::slab::{calculate, SlabInput};
//!
//! let mut input = SlabInput::default();
//! input.loads.mu_kft = 6.0;
//! input.loads.vu_kips = 4.0;
//! input.loads.ms_kft = 4.0;
//!
//! let result = calculate(&input).unwrap();
//! println!("phiMn = {:.2} k-ft", result.strength.phi_mn_kft);
//! assert!(result.checks.moment_capacity);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::criteria::DesignCriteria;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{BarSize, Concrete, ReinforcingSteel, MAX_FC_KSI, MIN_FC_KSI};

use super::checks::{self, CheckInputs, DesignChecks, DesignQuantities};
use super::cracking::{self, CrackingResult};
use super::geometry::{self, SectionGeometry};
use super::service::{self, ServiceStress};
use super::strength::{self, StrengthResult};

/// Rectangular concrete section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Design width b (in); 12 for a one-foot slab strip
    pub width_in: f64,
    /// Overall height h (in)
    pub height_in: f64,
    /// Clear cover to the tension bars (in)
    pub cover_in: f64,
}

impl Default for Section {
    fn default() -> Self {
        Section {
            width_in: 12.0,
            height_in: 8.0,
            cover_in: 1.0,
        }
    }
}

/// Primary tension reinforcement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rebar {
    /// Bar designation
    pub size: BarSize,
    /// Center-to-center spacing (in)
    pub spacing_in: f64,
}

impl Default for Rebar {
    fn default() -> Self {
        Rebar {
            size: BarSize::No5,
            spacing_in: 12.0,
        }
    }
}

/// Crack-control exposure class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CrackClass {
    /// Severe exposure, stricter limit
    #[serde(rename = "Class 1")]
    Class1,
    /// Moderate exposure, looser limit
    #[default]
    #[serde(rename = "Class 2")]
    Class2,
}

impl CrackClass {
    pub fn display_name(&self) -> &'static str {
        match self {
            CrackClass::Class1 => "Class 1",
            CrackClass::Class2 => "Class 2",
        }
    }

    /// Parse "Class 1", "class1", "1", etc.
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let key: String = s.to_uppercase().chars().filter(|c| !c.is_whitespace()).collect();
        match key.trim_start_matches("CLASS") {
            "1" => Ok(CrackClass::Class1),
            "2" => Ok(CrackClass::Class2),
            _ => Err(CalcError::invalid_input(
                "crackClass",
                s,
                "Expected 'Class 1' or 'Class 2'",
            )),
        }
    }
}

/// Design loads
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Loads {
    /// Factored moment Mu (k-ft)
    pub mu_kft: f64,
    /// Factored shear Vu (kips)
    pub vu_kips: f64,
    /// Service moment Ms (k-ft)
    pub ms_kft: f64,
    /// Crack-control exposure class
    pub crack_class: CrackClass,
}

/// Strength-reduction factors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResistanceFactors {
    /// Flexure φ
    pub phi_m: f64,
    /// Shear φ
    pub phi_v: f64,
}

impl Default for ResistanceFactors {
    fn default() -> Self {
        ResistanceFactors { phi_m: 0.9, phi_v: 0.9 }
    }
}

/// Input parameters for a one-way slab design.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "S-1",
///   "section": { "width_in": 12.0, "height_in": 8.0, "cover_in": 1.0 },
///   "rebar": { "size": "#5", "spacing_in": 12.0 },
///   "concrete": { "fc_ksi": 4.0, "density_pcf": 150.0 },
///   "steel": { "fy_ksi": 60.0, "es_ksi": 29000.0 },
///   "loads": { "mu_kft": 6.0, "vu_kips": 4.0, "ms_kft": 4.0, "crack_class": "Class 2" },
///   "factors": { "phi_m": 0.9, "phi_v": 0.9 },
///   "dist_area_per_ft": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SlabInput {
    /// User label (e.g., "S-1", "Deck overhang")
    pub label: String,
    pub section: Section,
    pub rebar: Rebar,
    pub concrete: Concrete,
    pub steel: ReinforcingSteel,
    pub loads: Loads,
    pub factors: ResistanceFactors,
    /// Distribution steel provided (in²/ft); defaults to the required A_ts
    pub dist_area_per_ft: Option<f64>,
}

fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid_input(field, value.to_string(), "Must be a finite number"))
    }
}

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be positive"));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Cannot be negative"));
    }
    Ok(())
}

fn require_unit_interval(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be between 0 and 1"));
    }
    Ok(())
}

impl SlabInput {
    /// Validate input parameters.
    ///
    /// Runs before any derived quantity is computed; the first problem found
    /// is returned.
    pub fn validate(&self) -> CalcResult<()> {
        let section = &self.section;
        require_positive("width", section.width_in)?;
        require_positive("height", section.height_in)?;
        require_non_negative("cover", section.cover_in)?;
        if section.cover_in >= section.height_in {
            return Err(CalcError::invalid_input(
                "cover",
                section.cover_in.to_string(),
                format!("Cover must be less than the height ({} in)", section.height_in),
            ));
        }

        require_positive("spacing", self.rebar.spacing_in)?;

        require_finite("f_c", self.concrete.fc_ksi)?;
        if !(MIN_FC_KSI..=MAX_FC_KSI).contains(&self.concrete.fc_ksi) {
            return Err(CalcError::invalid_input(
                "f_c",
                self.concrete.fc_ksi.to_string(),
                format!("f'c must be between {} and {} ksi", MIN_FC_KSI, MAX_FC_KSI),
            ));
        }
        require_positive("concDensity", self.concrete.density_pcf)?;
        require_positive("f_y", self.steel.fy_ksi)?;
        require_positive("E_s", self.steel.es_ksi)?;

        require_non_negative("M_u", self.loads.mu_kft)?;
        require_non_negative("V_u", self.loads.vu_kips)?;
        require_non_negative("M_s", self.loads.ms_kft)?;

        require_unit_interval("phi_m", self.factors.phi_m)?;
        require_unit_interval("phi_v", self.factors.phi_v)?;

        if let Some(area) = self.dist_area_per_ft {
            require_non_negative("distArea", area)?;
        }
        Ok(())
    }
}

/// Results from a slab design, grouped by stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabResult {
    pub geometry: SectionGeometry,
    pub cracking: CrackingResult,
    pub service: ServiceStress,
    pub strength: StrengthResult,
    pub design: DesignQuantities,
    pub checks: DesignChecks,
}

impl SlabResult {
    /// Whether every design check passes
    pub fn passes(&self) -> bool {
        self.checks.all_pass()
    }
}

/// Design a slab with the default design criteria.
///
/// # Errors
///
/// - `InvalidInput` for out-of-range inputs (no partial result)
/// - `InvalidGeometry` when no positive effective depth exists
pub fn calculate(input: &SlabInput) -> CalcResult<SlabResult> {
    calculate_with(input, &DesignCriteria::default())
}

/// Design a slab with explicit design criteria.
#[instrument(level = "debug", skip_all, fields(label = %input.label))]
pub fn calculate_with(input: &SlabInput, criteria: &DesignCriteria) -> CalcResult<SlabResult> {
    input.validate()?;

    let geometry = geometry::resolve(&input.section, &input.rebar)?;
    let cracking = cracking::calculate(&geometry, &input.concrete);
    let service = service::analyze(
        &geometry,
        &input.concrete,
        &input.steel,
        input.loads.ms_kft,
        cracking.m_cr_kft,
    )?;
    let strength = strength::calculate(&geometry, &input.concrete, &input.steel, &input.factors);

    let (design, checks) = checks::evaluate(
        &CheckInputs {
            geometry: &geometry,
            steel: &input.steel,
            loads: &input.loads,
            service: &service,
            strength: &strength,
            dist_provided_per_ft: input.dist_area_per_ft,
        },
        criteria,
    );

    debug!(failures = ?checks.failures(), "design checks evaluated");

    Ok(SlabResult {
        geometry,
        cracking,
        service,
        strength,
        design,
        checks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::checks::EfficiencyRatio;

    fn loaded_input() -> SlabInput {
        SlabInput {
            label: "Test Slab".to_string(),
            loads: Loads {
                mu_kft: 6.0,
                vu_kips: 4.0,
                ms_kft: 4.0,
                crack_class: CrackClass::Class2,
            },
            ..SlabInput::default()
        }
    }

    #[test]
    fn test_default_scenario() {
        let result = calculate(&SlabInput::default()).unwrap();
        assert!((result.cracking.weight_klf - 0.1).abs() < 1e-9);
        assert!((result.geometry.steel_area_per_ft - 0.31).abs() < 1e-9);
        assert!(!result.service.cracked());
    }

    #[test]
    fn test_loaded_slab_passes() {
        let result = calculate(&loaded_input()).unwrap();
        assert!(result.passes(), "failures: {:?}", result.checks.failures());
        assert!(matches!(result.design.gamma_er, EfficiencyRatio::Defined(r) if r > 1.0));
    }

    #[test]
    fn test_zero_moment_ratio_undefined() {
        let result = calculate(&SlabInput::default()).unwrap();
        assert!(!result.design.gamma_er.is_defined());
        // Zero demand still passes the capacity check
        assert!(result.checks.moment_capacity);
    }

    #[test]
    fn test_overloaded_slab_fails_moment_only() {
        let mut input = loaded_input();
        input.loads.mu_kft = 20.0;
        let result = calculate(&input).unwrap();
        assert!(!result.checks.moment_capacity);
        assert!(result.checks.shear_capacity);
        assert!(result.checks.ductility);
    }

    fn expect_invalid(field: &str, mutate: impl Fn(&mut SlabInput)) {
        let mut input = SlabInput::default();
        mutate(&mut input);
        match calculate(&input) {
            Err(CalcError::InvalidInput { field: f, .. }) => assert_eq!(f, field),
            other => panic!("expected InvalidInput for {field}, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_rejects_bad_inputs() {
        expect_invalid("width", |i| i.section.width_in = -12.0);
        expect_invalid("height", |i| i.section.height_in = 0.0);
        expect_invalid("cover", |i| i.section.cover_in = 8.0);
        expect_invalid("cover", |i| i.section.cover_in = -0.5);
        expect_invalid("spacing", |i| i.rebar.spacing_in = 0.0);
        expect_invalid("f_c", |i| i.concrete.fc_ksi = 12.0);
        expect_invalid("f_c", |i| i.concrete.fc_ksi = 2.0);
        expect_invalid("concDensity", |i| i.concrete.density_pcf = 0.0);
        expect_invalid("M_u", |i| i.loads.mu_kft = -1.0);
        expect_invalid("M_s", |i| i.loads.ms_kft = f64::NAN);
        expect_invalid("phi_m", |i| i.factors.phi_m = 1.2);
        expect_invalid("phi_v", |i| i.factors.phi_v = -0.1);
        expect_invalid("distArea", |i| i.dist_area_per_ft = Some(-0.2));
    }

    #[test]
    fn test_geometry_error_propagates() {
        let mut input = SlabInput::default();
        input.section.height_in = 1.5;
        input.section.cover_in = 1.25;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_GEOMETRY");
    }

    #[test]
    fn test_crack_class_parsing() {
        assert_eq!(CrackClass::from_str_flexible("Class 1").unwrap(), CrackClass::Class1);
        assert_eq!(CrackClass::from_str_flexible("class2").unwrap(), CrackClass::Class2);
        assert_eq!(CrackClass::from_str_flexible("2").unwrap(), CrackClass::Class2);
        assert!(CrackClass::from_str_flexible("Class 3").is_err());
    }

    #[test]
    fn test_class1_is_stricter() {
        let mut input = loaded_input();
        input.loads.ms_kft = 7.5;
        input.rebar.spacing_in = 18.0;
        input.rebar.size = BarSize::No6;
        let class2 = calculate(&input).unwrap();
        input.loads.crack_class = CrackClass::Class1;
        let class1 = calculate(&input).unwrap();
        assert!(class1.design.crack_allowable_fs_ksi <= class2.design.crack_allowable_fs_ksi);
    }

    #[test]
    fn test_distribution_steel_provided() {
        // Heavy primary steel: A_ts alone is less than 20% of As/ft
        let mut input = loaded_input();
        input.rebar.size = BarSize::No8;
        input.rebar.spacing_in = 6.0;
        let result = calculate(&input).unwrap();
        assert!(!result.checks.dist_reinf);

        input.dist_area_per_ft = Some(0.40);
        let result = calculate(&input).unwrap();
        assert!(result.checks.dist_reinf);
    }

    #[test]
    fn test_input_serialization_roundtrip() {
        let input = loaded_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        assert!(json.contains("\"#5\""));
        assert!(json.contains("\"Class 2\""));
        let roundtrip: SlabInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
