//! # Request/Response Boundary
//!
//! The flat request and response shapes a form client exchanges with the
//! engine, using the client's field names (`M_u`, `crackClass`, `phiMn`, …).
//!
//! - Missing request fields take the client defaults.
//! - An explicit `null` for a numeric field is a `MissingField` error.
//! - An explicit `f_y` overrides `steelGrade`.
//! - Every numeric response field must be finite, otherwise the request fails
//!   with `NonFinite` instead of forwarding NaN or infinity.
//!
//! ## Example
//!
//! ```rust
//! use slab_core::api::analyze_json;
//!
//! let response = analyze_json(r##"{ "M_u": 6.0, "size": "#5", "spacing": 12 }"##).unwrap();
//! assert!(response.contains("\"phiMn\""));
//! ```

pub mod sequencer;

pub use sequencer::{RequestSequencer, RequestTicket};

use serde::{Deserialize, Serialize};

use crate::calculations::{
    calculate_with, CrackClass, EfficiencyRatio, Loads, Rebar, ResistanceFactors, Section, SlabInput,
    SlabResult,
};
use crate::criteria::DesignCriteria;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{BarSize, Concrete, ReinforcingSteel, SteelGrade, DEFAULT_ES_KSI};

/// Analysis request as sent by a form client.
///
/// ## JSON Example
///
/// ```json
/// {
///   "M_u": 6.0, "V_u": 4.0, "M_s": 4.0, "crackClass": "Class 2",
///   "width": 12, "height": 8, "cover": 1,
///   "size": "#5", "spacing": 12,
///   "steelGrade": "A615, Grade 60", "f_c": 4, "concDensity": 150,
///   "phi_m": 0.9, "phi_v": 0.9
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisRequest {
    #[serde(rename = "M_u")]
    pub m_u: Option<f64>,
    #[serde(rename = "V_u")]
    pub v_u: Option<f64>,
    #[serde(rename = "M_s")]
    pub m_s: Option<f64>,
    #[serde(rename = "crackClass")]
    pub crack_class: String,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub cover: Option<f64>,
    pub size: String,
    pub spacing: Option<f64>,
    #[serde(rename = "steelGrade", skip_serializing_if = "Option::is_none")]
    pub steel_grade: Option<String>,
    #[serde(rename = "f_y", skip_serializing_if = "Option::is_none")]
    pub f_y: Option<f64>,
    #[serde(rename = "E_s", skip_serializing_if = "Option::is_none")]
    pub e_s: Option<f64>,
    #[serde(rename = "f_c")]
    pub f_c: Option<f64>,
    #[serde(rename = "concDensity")]
    pub conc_density: Option<f64>,
    pub phi_m: Option<f64>,
    pub phi_v: Option<f64>,
    /// Distribution steel provided (in²/ft)
    #[serde(rename = "distArea", skip_serializing_if = "Option::is_none")]
    pub dist_area: Option<f64>,
}

impl Default for AnalysisRequest {
    fn default() -> Self {
        AnalysisRequest {
            m_u: Some(0.0),
            v_u: Some(0.0),
            m_s: Some(0.0),
            crack_class: CrackClass::Class2.display_name().to_string(),
            width: Some(12.0),
            height: Some(8.0),
            cover: Some(1.0),
            size: BarSize::No5.designation().to_string(),
            spacing: Some(12.0),
            steel_grade: Some(SteelGrade::A615Grade60.display_name().to_string()),
            f_y: None,
            e_s: None,
            f_c: Some(4.0),
            conc_density: Some(150.0),
            phi_m: Some(0.9),
            phi_v: Some(0.9),
            dist_area: None,
        }
    }
}

fn require(field: &str, value: Option<f64>) -> CalcResult<f64> {
    value.ok_or_else(|| CalcError::missing_field(field))
}

impl AnalysisRequest {
    /// Resolve the steel: explicit `f_y` wins, then the named grade.
    fn steel(&self) -> CalcResult<ReinforcingSteel> {
        let fy_ksi = match (self.f_y, &self.steel_grade) {
            (Some(fy), _) => fy,
            (None, Some(grade)) => SteelGrade::from_str_flexible(grade)?.fy_ksi(),
            (None, None) => return Err(CalcError::missing_field("steelGrade")),
        };
        Ok(ReinforcingSteel::new(fy_ksi, self.e_s.unwrap_or(DEFAULT_ES_KSI)))
    }

    /// Convert to a typed [`SlabInput`].
    ///
    /// Parses designations and names; range validation happens in
    /// [`SlabInput::validate`].
    pub fn to_input(&self) -> CalcResult<SlabInput> {
        Ok(SlabInput {
            label: String::new(),
            section: Section {
                width_in: require("width", self.width)?,
                height_in: require("height", self.height)?,
                cover_in: require("cover", self.cover)?,
            },
            rebar: Rebar {
                size: BarSize::from_str_flexible(&self.size)?,
                spacing_in: require("spacing", self.spacing)?,
            },
            concrete: Concrete::new(require("f_c", self.f_c)?, require("concDensity", self.conc_density)?),
            steel: self.steel()?,
            loads: Loads {
                mu_kft: require("M_u", self.m_u)?,
                vu_kips: require("V_u", self.v_u)?,
                ms_kft: require("M_s", self.m_s)?,
                crack_class: CrackClass::from_str_flexible(&self.crack_class)?,
            },
            factors: ResistanceFactors {
                phi_m: require("phi_m", self.phi_m)?,
                phi_v: require("phi_v", self.phi_v)?,
            },
            dist_area_per_ft: self.dist_area,
        })
    }
}

/// Intermediate values useful for checking a result by hand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub effective_depth: f64,
    pub number_of_bars: u32,
    pub lambda: f64,
    pub f_r: f64,
    pub modular_ratio: f64,
    pub service_neutral_axis: f64,
    pub beta_1: f64,
    pub stress_block_depth: f64,
    pub strength_neutral_axis: f64,
    pub steel_yields: bool,
    pub over_reinforced: bool,
    pub crack_allowable_stress: f64,
    pub dist_required: f64,
}

/// Analysis response in the client's field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub weight: f64,
    #[serde(rename = "M_cr")]
    pub m_cr: f64,
    pub steel_area: f64,
    pub steel_area_per_ft: f64,
    pub cracked: bool,
    #[serde(rename = "fConc")]
    pub f_conc: f64,
    #[serde(rename = "fSteel")]
    pub f_steel: f64,
    #[serde(rename = "phiMn")]
    pub phi_mn: f64,
    pub epsilon_st: f64,
    #[serde(rename = "phiVn")]
    pub phi_vn: f64,
    #[serde(rename = "A_ts")]
    pub a_ts: f64,
    pub gamma_er: EfficiencyRatio,
    pub moment_capacity: bool,
    pub shear_capacity: bool,
    pub min_reinf: bool,
    pub crack_control: bool,
    pub ductility: bool,
    pub dist_reinf: bool,
    pub diagnostics: Diagnostics,
}

impl From<&SlabResult> for AnalysisResponse {
    fn from(result: &SlabResult) -> Self {
        let checks = &result.checks;
        AnalysisResponse {
            weight: result.cracking.weight_klf,
            m_cr: result.cracking.m_cr_kft,
            steel_area: result.geometry.steel_area_in2,
            steel_area_per_ft: result.geometry.steel_area_per_ft,
            cracked: result.service.cracked(),
            f_conc: result.service.f_conc_ksi,
            f_steel: result.service.f_steel_ksi,
            phi_mn: result.strength.phi_mn_kft,
            epsilon_st: result.strength.epsilon_st,
            phi_vn: result.strength.phi_vn_kips,
            a_ts: result.design.a_ts_per_ft,
            gamma_er: result.design.gamma_er,
            moment_capacity: checks.moment_capacity,
            shear_capacity: checks.shear_capacity,
            min_reinf: checks.min_reinf,
            crack_control: checks.crack_control,
            ductility: checks.ductility,
            dist_reinf: checks.dist_reinf,
            diagnostics: Diagnostics {
                effective_depth: result.geometry.effective_depth_in,
                number_of_bars: result.geometry.number_of_bars,
                lambda: result.cracking.lambda,
                f_r: result.cracking.fr_ksi,
                modular_ratio: result.service.modular_ratio,
                service_neutral_axis: result.service.neutral_axis_in,
                beta_1: result.strength.beta1,
                stress_block_depth: result.strength.stress_block_depth_in,
                strength_neutral_axis: result.strength.neutral_axis_in,
                steel_yields: result.strength.steel_yields,
                over_reinforced: result.strength.over_reinforced,
                crack_allowable_stress: result.design.crack_allowable_fs_ksi,
                dist_required: result.design.dist_required_per_ft,
            },
        }
    }
}

impl AnalysisResponse {
    /// Every numeric field with its response name
    pub fn numeric_fields(&self) -> Vec<(&'static str, f64)> {
        let diag = &self.diagnostics;
        let mut fields = vec![
            ("weight", self.weight),
            ("M_cr", self.m_cr),
            ("steel_area", self.steel_area),
            ("steel_area_per_ft", self.steel_area_per_ft),
            ("fConc", self.f_conc),
            ("fSteel", self.f_steel),
            ("phiMn", self.phi_mn),
            ("epsilon_st", self.epsilon_st),
            ("phiVn", self.phi_vn),
            ("A_ts", self.a_ts),
            ("effective_depth", diag.effective_depth),
            ("lambda", diag.lambda),
            ("f_r", diag.f_r),
            ("modular_ratio", diag.modular_ratio),
            ("service_neutral_axis", diag.service_neutral_axis),
            ("beta_1", diag.beta_1),
            ("stress_block_depth", diag.stress_block_depth),
            ("strength_neutral_axis", diag.strength_neutral_axis),
            ("crack_allowable_stress", diag.crack_allowable_stress),
            ("dist_required", diag.dist_required),
        ];
        if let EfficiencyRatio::Defined(value) = self.gamma_er {
            fields.push(("gamma_er", value));
        }
        fields
    }

    /// Reject the response if any numeric field is NaN or infinite.
    pub fn ensure_finite(self) -> CalcResult<Self> {
        if let Some((field, value)) = self.numeric_fields().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(CalcError::non_finite(field, value));
        }
        Ok(self)
    }
}

/// Analyze a request with the default design criteria.
pub fn analyze(request: &AnalysisRequest) -> CalcResult<AnalysisResponse> {
    analyze_with(request, &DesignCriteria::default())
}

/// Analyze a request with explicit design criteria.
pub fn analyze_with(request: &AnalysisRequest, criteria: &DesignCriteria) -> CalcResult<AnalysisResponse> {
    let input = request.to_input()?;
    let result = calculate_with(&input, criteria)?;
    AnalysisResponse::from(&result).ensure_finite()
}

/// Parse a JSON request, analyze it, and return the JSON response.
pub fn analyze_json(request_json: &str) -> CalcResult<String> {
    let request: AnalysisRequest = serde_json::from_str(request_json)?;
    let response = analyze(&request)?;
    Ok(serde_json::to_string(&response)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_uses_client_defaults() {
        let request: AnalysisRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, AnalysisRequest::default());
        let response = analyze(&request).unwrap();
        // 8 × 12 / 144 × 0.150
        assert!((response.weight - 0.1).abs() < 1e-9);
        assert!((response.steel_area_per_ft - 0.31).abs() < 1e-9);
        assert!(!response.cracked);
    }

    #[test]
    fn test_zero_moment_reports_undefined_ratio() {
        let json = analyze_json(r#"{ "M_u": 0 }"#).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["gamma_er"], "UndefinedRatio");
    }

    #[test]
    fn test_response_field_names() {
        let json = analyze_json(r#"{ "M_u": 6, "V_u": 4, "M_s": 4 }"#).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        for key in [
            "weight", "M_cr", "steel_area", "steel_area_per_ft", "cracked", "fConc", "fSteel",
            "phiMn", "epsilon_st", "phiVn", "A_ts", "gamma_er", "moment_capacity",
            "shear_capacity", "min_reinf", "crack_control", "ductility", "dist_reinf",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert!(value["gamma_er"].as_f64().unwrap() > 1.0);
    }

    #[test]
    fn test_null_numeric_field_is_missing() {
        let err = analyze_json(r#"{ "width": null }"#).unwrap_err();
        assert_eq!(err, CalcError::missing_field("width"));
    }

    #[test]
    fn test_unknown_bar_size_rejected() {
        let err = analyze_json(r##"{ "size": "#14" }"##).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_BAR_SIZE");
        assert!(err.is_rejected_request());
    }

    #[test]
    fn test_explicit_fy_overrides_grade() {
        let request = AnalysisRequest {
            f_y: Some(75.0),
            e_s: Some(29_500.0),
            ..AnalysisRequest::default()
        };
        let input = request.to_input().unwrap();
        assert_eq!(input.steel.fy_ksi, 75.0);
        assert_eq!(input.steel.es_ksi, 29_500.0);
    }

    #[test]
    fn test_steel_grade_lookup() {
        let request = AnalysisRequest {
            steel_grade: Some("A1035, Grade 100".to_string()),
            ..AnalysisRequest::default()
        };
        assert_eq!(request.to_input().unwrap().steel.fy_ksi, 100.0);

        let request = AnalysisRequest {
            steel_grade: Some("A36".to_string()),
            ..AnalysisRequest::default()
        };
        assert_eq!(request.to_input().unwrap_err().error_code(), "UNKNOWN_STEEL_GRADE");
    }

    #[test]
    fn test_huge_bar_count_rejected_without_panic() {
        let err = analyze_json(r#"{ "width": 1e10, "spacing": 1 }"#).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.is_rejected_request());
    }

    #[test]
    fn test_malformed_json() {
        let err = analyze_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_ensure_finite_rejects_nan() {
        let result = crate::calculations::calculate(&SlabInput::default()).unwrap();
        let mut response = AnalysisResponse::from(&result);
        response.f_steel = f64::NAN;
        let err = response.ensure_finite().unwrap_err();
        assert_eq!(err.error_code(), "NON_FINITE");
        assert!(err.to_string().contains("fSteel"));
    }

    #[test]
    fn test_maximum_strength_and_grade() {
        let request = AnalysisRequest {
            f_c: Some(10.0),
            steel_grade: Some("A1035, Grade 100".to_string()),
            m_u: Some(5.0),
            v_u: Some(3.0),
            m_s: Some(8.0),
            ..AnalysisRequest::default()
        };
        let response = analyze(&request).unwrap();
        assert_eq!(response.diagnostics.beta_1, 0.65);
        assert!(response.numeric_fields().iter().all(|(_, v)| v.is_finite()));
    }
}
