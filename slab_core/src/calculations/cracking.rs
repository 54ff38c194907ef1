//! # Self-Weight and Cracking Moment
//!
//! Distributed self-weight of the section and the moment at which the gross
//! section first cracks in flexure.
//!
//! ```text
//! weight = (b h / 144) × wc / 1000          (k/ft)
//! fr     = 7.5 λ √f'c                       (psi → ksi)
//! M_cr   = fr Ig / yt / 12                  (k-in → k-ft)
//! ```

use serde::{Deserialize, Serialize};

use crate::materials::Concrete;
use crate::units::{KipFt, KipIn, Pcf, SqIn};

use super::geometry::SectionGeometry;

/// Self-weight and cracking results
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrackingResult {
    /// Self-weight of the full design width per foot of span (k/ft)
    pub weight_klf: f64,
    /// Lightweight modification factor λ
    pub lambda: f64,
    /// Modulus of rupture fr (ksi)
    pub fr_ksi: f64,
    /// Cracking moment M_cr of the full design width `b` (k-ft), not per foot
    pub m_cr_kft: f64,
}

/// Compute self-weight and cracking moment.
pub fn calculate(geometry: &SectionGeometry, concrete: &Concrete) -> CrackingResult {
    let weight = Pcf(concrete.density_pcf).line_load(SqIn(geometry.gross_area_in2));

    let lambda = concrete.lambda();
    let fr_ksi = concrete.modulus_of_rupture_ksi();
    let m_cr = KipIn(fr_ksi * geometry.gross_section_modulus_in3());

    CrackingResult {
        weight_klf: weight.value(),
        lambda,
        fr_ksi,
        m_cr_kft: KipFt::from(m_cr).value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::geometry::resolve;
    use crate::calculations::slab::{Rebar, Section};
    use crate::materials::BarSize;

    fn geometry(width_in: f64, height_in: f64) -> SectionGeometry {
        let section = Section {
            width_in,
            height_in,
            cover_in: 1.0,
        };
        let rebar = Rebar {
            size: BarSize::No5,
            spacing_in: 12.0,
        };
        resolve(&section, &rebar).unwrap()
    }

    #[test]
    fn test_self_weight() {
        // 12 × 8 / 144 × 0.150 = 0.1 k/ft
        let result = calculate(&geometry(12.0, 8.0), &Concrete::new(4.0, 150.0));
        assert!((result.weight_klf - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_cracking_moment() {
        // fr = 0.4743 ksi, S = 512 / 4 = 128 in³ → 60.71 k-in = 5.06 k-ft
        let result = calculate(&geometry(12.0, 8.0), &Concrete::new(4.0, 150.0));
        assert!((result.m_cr_kft - 5.059).abs() < 0.01);
        assert_eq!(result.lambda, 1.0);
    }

    #[test]
    fn test_lightweight_lowers_cracking_moment() {
        let geom = geometry(12.0, 8.0);
        let normal = calculate(&geom, &Concrete::new(4.0, 150.0));
        let light = calculate(&geom, &Concrete::new(4.0, 100.0));
        assert!(light.m_cr_kft < normal.m_cr_kft);
        assert!(light.weight_klf < normal.weight_klf);
    }

    #[test]
    fn test_cracking_moment_scales_with_width() {
        let conc = Concrete::new(4.0, 150.0);
        let strip = calculate(&geometry(12.0, 8.0), &conc);
        let wide = calculate(&geometry(36.0, 8.0), &conc);
        assert!((wide.m_cr_kft - 3.0 * strip.m_cr_kft).abs() < 1e-9);
    }
}
