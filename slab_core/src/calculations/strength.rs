//! # Strength Capacity
//!
//! Factored flexural and shear capacity of the section.
//!
//! ## Flexure (Whitney stress block, steel yielding)
//!
//! ```text
//! a       = As fy / (0.85 f'c b)
//! c       = a / β1
//! Mn      = As fy (d − a/2) / 12          (k-ft)
//! εt      = 0.003 (d − c) / c
//! ```
//!
//! A neutral axis at or below the steel (`c ≥ d`) is physically inconsistent
//! with the yielding assumption. It is flagged as `over_reinforced` rather
//! than returned as an error, so the caller still receives a full result.
//!
//! ## Shear (no shear reinforcement)
//!
//! ```text
//! Vc = 2 λ √f'c b d / 1000                (kips)
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::concrete as eq;
use crate::materials::{Concrete, ReinforcingSteel};
use crate::units::{KipFt, KipIn};

use super::geometry::SectionGeometry;
use super::slab::ResistanceFactors;

/// Flexural and shear capacities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthResult {
    /// Stress-block factor β1
    pub beta1: f64,
    /// Equivalent stress-block depth a (in)
    pub stress_block_depth_in: f64,
    /// Neutral-axis depth at nominal strength c (in)
    pub neutral_axis_in: f64,
    /// Nominal moment Mn (k-ft)
    pub mn_kft: f64,
    /// Factored moment capacity φMn (k-ft)
    pub phi_mn_kft: f64,
    /// Net tensile strain in the steel at nominal strength
    pub epsilon_st: f64,
    /// Whether the steel has yielded at nominal strength (εt ≥ fy/Es)
    pub steel_yields: bool,
    /// Concrete shear strength Vc (kips)
    pub vc_kips: f64,
    /// Factored shear capacity φVn (kips)
    pub phi_vn_kips: f64,
    /// Neutral axis at or below the tension steel
    pub over_reinforced: bool,
}

/// Compute factored flexural and shear capacities.
pub fn calculate(
    geometry: &SectionGeometry,
    concrete: &Concrete,
    steel: &ReinforcingSteel,
    factors: &ResistanceFactors,
) -> StrengthResult {
    let b = geometry.width_in;
    let d = geometry.effective_depth_in;
    let as_in2 = geometry.design_steel_area_in2;

    let beta1 = concrete.beta1();
    let a = eq::stress_block_depth(as_in2, steel.fy_ksi, concrete.fc_ksi, b);
    let c = a / beta1;

    let over_reinforced = c >= d;
    if over_reinforced {
        debug!(c_in = c, d_in = d, "neutral axis at or below tension steel");
    }

    let mn = KipFt::from(KipIn(eq::nominal_moment_kin(as_in2, steel.fy_ksi, d, a)));
    let epsilon_st = eq::steel_strain_at_nominal(d, c);

    let vc_kips = eq::concrete_shear_strength(concrete.fc_ksi, concrete.lambda(), b, d);

    StrengthResult {
        beta1,
        stress_block_depth_in: a,
        neutral_axis_in: c,
        mn_kft: mn.value(),
        phi_mn_kft: (mn * factors.phi_m).value(),
        epsilon_st,
        steel_yields: epsilon_st >= steel.yield_strain(),
        vc_kips,
        phi_vn_kips: factors.phi_v * vc_kips,
        over_reinforced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::geometry::resolve;
    use crate::calculations::slab::{Rebar, Section};
    use crate::materials::BarSize;

    fn geometry(size: BarSize, spacing_in: f64, height_in: f64) -> SectionGeometry {
        let section = Section {
            width_in: 12.0,
            height_in,
            cover_in: 1.0,
        };
        resolve(&section, &Rebar { size, spacing_in }).unwrap()
    }

    fn factors() -> ResistanceFactors {
        ResistanceFactors { phi_m: 0.9, phi_v: 0.9 }
    }

    #[test]
    fn test_default_section_capacity() {
        let geom = geometry(BarSize::No5, 12.0, 8.0);
        let result = calculate(&geom, &Concrete::default(), &ReinforcingSteel::default(), &factors());
        // Mn = 0.31 × 60 × (6.6875 − 0.228) / 12 = 10.01 k-ft
        assert!((result.mn_kft - 10.012).abs() < 0.01);
        assert!((result.phi_mn_kft - 9.011).abs() < 0.01);
        assert!(result.epsilon_st > 0.005);
        assert!(result.steel_yields);
        assert!(!result.over_reinforced);
        // φVn = 0.9 × 10.15
        assert!((result.phi_vn_kips - 9.136).abs() < 0.01);
    }

    #[test]
    fn test_strain_matches_neutral_axis() {
        let geom = geometry(BarSize::No8, 4.0, 8.0);
        let result = calculate(&geom, &Concrete::default(), &ReinforcingSteel::default(), &factors());
        let d = geom.effective_depth_in;
        let c = result.neutral_axis_in;
        assert!((result.epsilon_st - 0.003 * (d - c) / c).abs() < 1e-12);
        assert!((c - result.stress_block_depth_in / 0.85).abs() < 1e-12);
    }

    #[test]
    fn test_over_reinforced_flag() {
        // #11 at 2 in in a 4 in slab with weak concrete
        let geom = geometry(BarSize::No11, 2.0, 4.0);
        let result = calculate(
            &geom,
            &Concrete::new(2.5, 150.0),
            &ReinforcingSteel::new(100.0, 29_000.0),
            &factors(),
        );
        assert!(result.over_reinforced);
        assert!(result.epsilon_st < 0.0);
        assert!(result.mn_kft >= 0.0);
    }

    #[test]
    fn test_zero_phi() {
        let geom = geometry(BarSize::No5, 12.0, 8.0);
        let result = calculate(
            &geom,
            &Concrete::default(),
            &ReinforcingSteel::default(),
            &ResistanceFactors { phi_m: 0.0, phi_v: 0.0 },
        );
        assert_eq!(result.phi_mn_kft, 0.0);
        assert_eq!(result.phi_vn_kips, 0.0);
        assert!(result.mn_kft > 0.0);
    }
}
