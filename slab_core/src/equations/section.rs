//! # Cross-Section Property Formulas
//!
//! Geometric properties of a rectangular concrete section, gross and cracked
//! transformed.
//!
//! ## Notation
//!
//! - `b` = Width of section (in)
//! - `h` = Overall height of section (in)
//! - `d` = Effective depth to the tension steel centroid (in)
//! - `As` = Area of tension steel (in²)
//! - `n` = Modular ratio Es/Ec
//! - `c` = Neutral-axis depth measured from the compression face (in)
//!
//! ## References
//!
//! - ACI 318-19 Section 24.2.3.5 (cracked transformed section)
//! - MacGregor & Wight, Reinforced Concrete Mechanics and Design, Ch. 9

// =============================================================================
// GROSS RECTANGULAR SECTION
// =============================================================================

/// Gross area of a rectangular section
///
/// # Formula
/// Ag = b × h
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Gross moment of inertia about the centroid
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │ ════════│ ← centroid at h/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// Ig = b h³ / 12
///
/// For a 12-in design strip this is `12 h³ / 12 = h³`.
///
/// # Example
/// ```rust
/// use slab_core::equations::section::rectangular_moment_of_inertia;
///
/// // 12 in strip, 8 in thick slab
/// let ig = rectangular_moment_of_inertia(12.0, 8.0);
/// assert!((ig - 512.0).abs() < 1e-9);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

/// Distance from the centroid to the extreme tension fiber
///
/// # Formula
/// yt = h / 2
#[inline]
pub fn extreme_fiber_distance(h: f64) -> f64 {
    h / 2.0
}

// =============================================================================
// CRACKED TRANSFORMED SECTION
// Steel replaced by n·As of equivalent concrete; concrete below the neutral
// axis carries no tension.
// =============================================================================

/// Neutral-axis depth of the cracked transformed section
///
/// ```text
///     ┌─────────┐  ─┬─
///     │▓▓▓▓▓▓▓▓▓│   c   compression zone (b × c)
///     │─────────│  ─┴─  neutral axis
///     │         │
///     │  • • •  │  ← n·As at depth d
///     └─────────┘
/// ```
///
/// # Formula
/// First moments about the neutral axis balance:
///
/// ```text
/// ½ b c² = n As (d − c)
/// ½ b c² + n As c − n As d = 0
/// c = [−n As + √((n As)² + 2 b n As d)] / b
/// ```
///
/// Only the positive root is physical.
///
/// # Example
/// ```rust
/// use slab_core::equations::section::cracked_neutral_axis_depth;
///
/// let c = cracked_neutral_axis_depth(12.0, 6.6875, 0.31, 8.04);
/// assert!(c > 0.0 && c < 6.6875);
/// ```
#[inline]
pub fn cracked_neutral_axis_depth(b: f64, d: f64, as_in2: f64, n: f64) -> f64 {
    let nas = n * as_in2;
    (-nas + (nas.powi(2) + 2.0 * b * nas * d).sqrt()) / b
}

/// Moment of inertia of the cracked transformed section about its neutral axis
///
/// # Formula
/// Icr = b c³ / 3 + n As (d − c)²
#[inline]
pub fn cracked_moment_of_inertia(b: f64, d: f64, as_in2: f64, n: f64, c: f64) -> f64 {
    b * c.powi(3) / 3.0 + n * as_in2 * (d - c).powi(2)
}

/// Elastic flexural stress at distance `y` from the neutral axis
///
/// # Formula
/// f = M y / I
#[inline]
pub fn flexural_stress(moment_kin: f64, y: f64, i: f64) -> f64 {
    moment_kin * y / i
}
