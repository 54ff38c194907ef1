//! # Reinforced Concrete Design Formulas
//!
//! Material relations and strength formulas for normal- and lightweight
//! concrete with deformed bar reinforcement. Stresses are in ksi unless a
//! function name says otherwise; `f'c` arguments are in ksi.
//!
//! ## References
//!
//! - ACI 318-19: Building Code Requirements for Structural Concrete
//!   - 19.2.2.1 (Ec), 19.2.3.1 (fr), 19.2.4 (λ)
//!   - 22.2.2.4.3 (β1), 22.5.5.1 (Vc)
//!   - 24.4.3.2 (shrinkage and temperature reinforcement)
//! - Gergely & Lutz (1968), crack width parameter z

use crate::units::{Ksi, Psi};

/// Ultimate concrete compressive strain assumed at nominal strength
pub const CONCRETE_CRUSHING_STRAIN: f64 = 0.003;

/// Stress-block intensity factor (0.85 f'c)
pub const STRESS_BLOCK_INTENSITY: f64 = 0.85;

#[inline]
fn sqrt_fc_psi(fc_ksi: f64) -> f64 {
    let fc: Psi = Ksi(fc_ksi).into();
    fc.0.sqrt()
}

// =============================================================================
// MATERIAL RELATIONS
// =============================================================================

/// Lightweight-concrete modification factor from unit weight
///
/// # Formula (ACI 318-19 Table 19.2.4.1(a))
/// λ = 0.0075 wc, bounded to 0.75 ≤ λ ≤ 1.0
///
/// λ reaches 1.0 at wc ≈ 133 pcf. The common "normal weight from ~145 pcf"
/// rule of thumb is not used as a threshold; the ACI linear relation governs.
#[inline]
pub fn lightweight_factor(density_pcf: f64) -> f64 {
    (0.0075 * density_pcf).clamp(0.75, 1.0)
}

/// Modulus of rupture (ksi)
///
/// # Formula (ACI 318-19 Eq. 19.2.3.1)
/// fr = 7.5 λ √f'c   (psi)
///
/// # Example
/// ```rust
/// use slab_core::equations::concrete::modulus_of_rupture;
///
/// // 4 ksi normal-weight concrete: 7.5 × √4000 = 474 psi
/// let fr = modulus_of_rupture(4.0, 1.0);
/// assert!((fr - 0.4743).abs() < 1e-4);
/// ```
#[inline]
pub fn modulus_of_rupture(fc_ksi: f64, lambda: f64) -> f64 {
    let fr = Psi(7.5 * lambda * sqrt_fc_psi(fc_ksi));
    Ksi::from(fr).0
}

/// Modulus of elasticity of normal-weight concrete (ksi)
///
/// # Formula (ACI 318-19 19.2.2.1(b))
/// Ec = 57,000 √f'c   (psi)
#[inline]
pub fn elastic_modulus(fc_ksi: f64) -> f64 {
    let ec = Psi(57_000.0 * sqrt_fc_psi(fc_ksi));
    Ksi::from(ec).0
}

/// Modular ratio n = Es / Ec
#[inline]
pub fn modular_ratio(es_ksi: f64, ec_ksi: f64) -> f64 {
    es_ksi / ec_ksi
}

/// Stress-block depth factor β1
///
/// # Formula (ACI 318-19 Table 22.2.2.4.3)
/// - β1 = 0.85 for f'c ≤ 4 ksi
/// - β1 = 0.85 − 0.05 (f'c − 4) for 4 < f'c < 8 ksi
/// - β1 = 0.65 for f'c ≥ 8 ksi
///
/// # Example
/// ```rust
/// use slab_core::equations::concrete::beta1;
///
/// assert_eq!(beta1(4.0), 0.85);
/// assert!((beta1(6.0) - 0.75).abs() < 1e-12);
/// assert_eq!(beta1(10.0), 0.65);
/// ```
#[inline]
pub fn beta1(fc_ksi: f64) -> f64 {
    (0.85 - 0.05 * (fc_ksi - 4.0).max(0.0)).max(0.65)
}

// =============================================================================
// FLEXURAL STRENGTH (Whitney rectangular stress block)
// =============================================================================

/// Depth of the equivalent rectangular stress block
///
/// ```text
///   0.85 f'c
///   ┌────────┐  ─┬─
///   │████████│   a     C = 0.85 f'c a b
///   └────────┘  ─┴─
///       ...
///       • • •          T = As fy
/// ```
///
/// # Formula
/// a = As fy / (0.85 f'c b)
#[inline]
pub fn stress_block_depth(as_in2: f64, fy_ksi: f64, fc_ksi: f64, b: f64) -> f64 {
    as_in2 * fy_ksi / (STRESS_BLOCK_INTENSITY * fc_ksi * b)
}

/// Nominal flexural strength (k-in), tension steel yielding
///
/// # Formula
/// Mn = As fy (d − a/2)
///
/// The lever arm is floored at zero; a stress block deeper than 2d has no
/// physical meaning and is flagged separately as over-reinforcement.
#[inline]
pub fn nominal_moment_kin(as_in2: f64, fy_ksi: f64, d: f64, a: f64) -> f64 {
    as_in2 * fy_ksi * (d - a / 2.0).max(0.0)
}

/// Net tensile strain in the extreme tension steel at nominal strength
///
/// # Formula
/// εt = εcu (d − c) / c
#[inline]
pub fn steel_strain_at_nominal(d: f64, c: f64) -> f64 {
    CONCRETE_CRUSHING_STRAIN * (d - c) / c
}

// =============================================================================
// SHEAR STRENGTH
// =============================================================================

/// One-way shear strength of concrete without shear reinforcement (kips)
///
/// # Formula (ACI 318-11 Eq. 11-3 / ACI 318-19 Table 22.5.5.1(a))
/// Vc = 2 λ √f'c b d   (lb)
#[inline]
pub fn concrete_shear_strength(fc_ksi: f64, lambda: f64, b: f64, d: f64) -> f64 {
    2.0 * lambda * sqrt_fc_psi(fc_ksi) * b * d / 1000.0
}

// =============================================================================
// DETAILING
// =============================================================================

/// Shrinkage and temperature reinforcement ratio
///
/// # Formula (ACI 318-14 Table 7.6.1.1 / 24.4.3.2)
/// - ρ = 0.0020 for fy < 60 ksi
/// - ρ = 0.0018 × 60 / fy ≥ 0.0014 for fy ≥ 60 ksi
#[inline]
pub fn shrinkage_temperature_ratio(fy_ksi: f64) -> f64 {
    if fy_ksi < 60.0 {
        0.0020
    } else {
        (0.0018 * 60.0 / fy_ksi).max(0.0014)
    }
}

/// Allowable service steel stress from the Gergely–Lutz z parameter (ksi)
///
/// # Formula
/// fsa = z / (dc A)^(1/3)
///
/// where `dc` is the cover to the bar centroid and `A` = 2 dc s is the
/// effective tension area of concrete around one bar.
#[inline]
pub fn crack_control_allowable_stress(z_kip_per_in: f64, dc: f64, spacing: f64) -> f64 {
    let area_per_bar = 2.0 * dc * spacing;
    z_kip_per_in / (dc * area_per_bar).cbrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lightweight_factor() {
        assert_eq!(lightweight_factor(150.0), 1.0);
        assert_eq!(lightweight_factor(90.0), 0.75);
        assert!((lightweight_factor(120.0) - 0.9).abs() < 1e-12);
        // Full λ already below 145 pcf
        assert_eq!(lightweight_factor(135.0), 1.0);
        assert!(lightweight_factor(130.0) < 1.0);
    }

    #[test]
    fn test_elastic_modulus() {
        // 57000 × √4000 = 3,605,000 psi
        assert!((elastic_modulus(4.0) - 3605.0).abs() < 1.0);
    }

    #[test]
    fn test_beta1_piecewise() {
        assert_eq!(beta1(2.5), 0.85);
        assert_eq!(beta1(4.0), 0.85);
        assert!((beta1(5.0) - 0.80).abs() < 1e-12);
        assert!((beta1(8.0) - 0.65).abs() < 1e-12);
        assert_eq!(beta1(9.0), 0.65);
    }

    #[test]
    fn test_stress_block_and_moment() {
        // 0.31 in², 60 ksi, 4 ksi, 12 in: a = 18.6 / 40.8 = 0.456 in
        let a = stress_block_depth(0.31, 60.0, 4.0, 12.0);
        assert!((a - 0.4559).abs() < 1e-3);
        let mn = nominal_moment_kin(0.31, 60.0, 6.6875, a);
        assert!((mn - 120.14).abs() < 0.1);
    }

    #[test]
    fn test_shear_strength() {
        // 2 × √4000 × 12 × 6.6875 / 1000 = 10.15 kips
        let vc = concrete_shear_strength(4.0, 1.0, 12.0, 6.6875);
        assert!((vc - 10.15).abs() < 0.01);
    }

    #[test]
    fn test_shrinkage_ratio() {
        assert_eq!(shrinkage_temperature_ratio(40.0), 0.0020);
        assert!((shrinkage_temperature_ratio(60.0) - 0.0018).abs() < 1e-12);
        assert!((shrinkage_temperature_ratio(75.0) - 0.00144).abs() < 1e-12);
        assert_eq!(shrinkage_temperature_ratio(100.0), 0.0014);
    }

    #[test]
    fn test_crack_control_stress() {
        // dc = 1.3125, s = 12: (1.3125 × 31.5)^(1/3) = 3.457
        let fsa = crack_control_allowable_stress(170.0, 1.3125, 12.0);
        assert!((fsa - 49.16).abs() < 0.05);
    }
}
