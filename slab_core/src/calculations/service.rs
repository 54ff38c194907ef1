//! # Service Stress Analysis
//!
//! Elastic stresses under the service moment `Ms`. The section is in one of
//! two states:
//!
//! - **Uncracked** (`Ms ≤ M_cr`): the gross section resists the moment.
//!   Concrete stress is taken at the extreme tension fiber; steel stress comes
//!   from strain compatibility, `fs = n Ms (d − yt) / Ig`.
//! - **Cracked** (`Ms > M_cr`): concrete below the neutral axis is ignored and
//!   the steel is transformed to `n As` of concrete.
//!
//! ```text
//! ½ b c² = n As (d − c)
//! Icr    = b c³/3 + n As (d − c)²
//! fc     = Ms c / Icr
//! fs     = n Ms (d − c) / Icr
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::{concrete as conc_eq, section as sect_eq};
use crate::errors::{CalcError, CalcResult};
use crate::materials::{Concrete, ReinforcingSteel};
use crate::units::{KipFt, KipIn};

use super::geometry::SectionGeometry;

/// Flexural state of the section at service load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceState {
    /// Gross section effective, Ms ≤ M_cr
    Uncracked,
    /// Cracked transformed section, Ms > M_cr
    Cracked,
}

impl ServiceState {
    /// Classify a service moment against the cracking moment.
    ///
    /// The boundary `Ms = M_cr` is uncracked.
    pub fn classify(ms_kft: f64, m_cr_kft: f64) -> Self {
        if ms_kft <= m_cr_kft {
            ServiceState::Uncracked
        } else {
            ServiceState::Cracked
        }
    }

    pub fn is_cracked(&self) -> bool {
        matches!(self, ServiceState::Cracked)
    }
}

/// Service-level stresses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceStress {
    /// Which section model was used
    pub state: ServiceState,
    /// Concrete modulus Ec (ksi)
    pub ec_ksi: f64,
    /// Modular ratio n = Es/Ec
    pub modular_ratio: f64,
    /// Neutral-axis depth from the compression face (in)
    pub neutral_axis_in: f64,
    /// Moment of inertia of the section model used (in⁴)
    pub inertia_in4: f64,
    /// Concrete stress (ksi): tension fiber when uncracked, compression fiber when cracked
    pub f_conc_ksi: f64,
    /// Steel stress (ksi)
    pub f_steel_ksi: f64,
}

impl ServiceStress {
    pub fn cracked(&self) -> bool {
        self.state.is_cracked()
    }
}

/// Compute service stresses for moment `ms_kft` given the cracking moment.
///
/// # Errors
///
/// `InvalidGeometry` if the cracked neutral axis does not fall strictly
/// inside the effective depth.
pub fn analyze(
    geometry: &SectionGeometry,
    concrete: &Concrete,
    steel: &ReinforcingSteel,
    ms_kft: f64,
    m_cr_kft: f64,
) -> CalcResult<ServiceStress> {
    let ec_ksi = concrete.elastic_modulus_ksi();
    let n = conc_eq::modular_ratio(steel.es_ksi, ec_ksi);
    let ms = KipIn::from(KipFt(ms_kft)).value();
    let d = geometry.effective_depth_in;

    let state = ServiceState::classify(ms_kft, m_cr_kft);
    debug!(?state, ms_kft, m_cr_kft, "service state");

    match state {
        ServiceState::Uncracked => {
            let ig = geometry.gross_inertia_in4;
            let yt = geometry.yt_in;
            Ok(ServiceStress {
                state,
                ec_ksi,
                modular_ratio: n,
                neutral_axis_in: yt,
                inertia_in4: ig,
                f_conc_ksi: ms / geometry.gross_section_modulus_in3(),
                f_steel_ksi: n * sect_eq::flexural_stress(ms, d - yt, ig),
            })
        }
        ServiceState::Cracked => {
            let b = geometry.width_in;
            let as_in2 = geometry.design_steel_area_in2;
            let c = sect_eq::cracked_neutral_axis_depth(b, d, as_in2, n);
            if !(c > 0.0 && c < d) {
                return Err(CalcError::invalid_geometry(format!(
                    "cracked neutral axis c = {:.4} in is outside (0, d = {:.4} in)",
                    c, d
                )));
            }
            let icr = sect_eq::cracked_moment_of_inertia(b, d, as_in2, n, c);
            Ok(ServiceStress {
                state,
                ec_ksi,
                modular_ratio: n,
                neutral_axis_in: c,
                inertia_in4: icr,
                f_conc_ksi: sect_eq::flexural_stress(ms, c, icr),
                f_steel_ksi: n * sect_eq::flexural_stress(ms, d - c, icr),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::cracking;
    use crate::calculations::geometry::resolve;
    use crate::calculations::slab::{Rebar, Section};
    use crate::materials::BarSize;

    fn default_geometry() -> SectionGeometry {
        let section = Section {
            width_in: 12.0,
            height_in: 8.0,
            cover_in: 1.0,
        };
        let rebar = Rebar {
            size: BarSize::No5,
            spacing_in: 12.0,
        };
        resolve(&section, &rebar).unwrap()
    }

    #[test]
    fn test_boundary_is_uncracked() {
        let geom = default_geometry();
        let conc = Concrete::default();
        let m_cr = cracking::calculate(&geom, &conc).m_cr_kft;
        let result = analyze(&geom, &conc, &ReinforcingSteel::default(), m_cr, m_cr).unwrap();
        assert!(!result.cracked());
        // At M_cr the tension fiber stress equals fr
        assert!((result.f_conc_ksi - conc.modulus_of_rupture_ksi()).abs() < 1e-9);
    }

    #[test]
    fn test_zero_moment_has_zero_stress() {
        let geom = default_geometry();
        let result = analyze(&geom, &Concrete::default(), &ReinforcingSteel::default(), 0.0, 5.0).unwrap();
        assert_eq!(result.state, ServiceState::Uncracked);
        assert_eq!(result.f_conc_ksi, 0.0);
        assert_eq!(result.f_steel_ksi, 0.0);
    }

    #[test]
    fn test_cracked_stresses() {
        let geom = default_geometry();
        let result = analyze(&geom, &Concrete::default(), &ReinforcingSteel::default(), 6.0, 5.06).unwrap();
        assert!(result.cracked());
        let c = result.neutral_axis_in;
        assert!(c > 0.0 && c < geom.effective_depth_in);
        // n ≈ 8.04, c ≈ 1.47 in, Icr ≈ 80.6 in⁴
        assert!((result.modular_ratio - 8.044).abs() < 0.01);
        assert!((c - 1.472).abs() < 0.01);
        assert!((result.inertia_in4 - 80.59).abs() < 0.5);
        // Equilibrium: C = T
        let compression = 0.5 * result.f_conc_ksi * c * geom.width_in;
        let tension = result.f_steel_ksi * geom.design_steel_area_in2;
        assert!((compression - tension).abs() < 1e-9);
    }

    #[test]
    fn test_uncracked_steel_stress_from_compatibility() {
        let geom = default_geometry();
        let result = analyze(&geom, &Concrete::default(), &ReinforcingSteel::default(), 2.0, 5.06).unwrap();
        let expected = result.modular_ratio * 24.0 * (geom.effective_depth_in - 4.0) / 512.0;
        assert!((result.f_steel_ksi - expected).abs() < 1e-12);
    }
}
