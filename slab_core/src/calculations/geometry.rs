//! # Section Geometry
//!
//! Resolves bar layout, steel areas, effective depth, and gross section
//! properties from the section and rebar inputs.
//!
//! ## Steel area conventions
//!
//! - **Per foot (primary)**: `As_per_ft = A_bar × 12 / s`. This is the
//!   one-way slab convention and drives every downstream analysis.
//! - **Total (secondary)**: `As = A_bar × (floor(b / s) + 1)`, bars laid out
//!   at spacing `s` across width `b` starting at one edge. Reported only.
//!
//! The analyses work on the full design width `b`, carrying
//! `As_b = As_per_ft × b / 12` of steel. For the usual 12-in strip
//! `As_b = As_per_ft`.

use serde::{Deserialize, Serialize};

use crate::equations::section as eq;
use crate::errors::{CalcError, CalcResult};
use crate::materials::BarProperties;
use crate::units::{SqIn, INCHES_PER_FOOT};

use super::slab::{Rebar, Section};

/// Resolved section geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionGeometry {
    /// Design width b (in)
    pub width_in: f64,
    /// Overall height h (in)
    pub height_in: f64,
    /// Bar spacing s (in)
    pub spacing_in: f64,
    /// Nominal bar diameter and area
    pub bar: BarProperties,
    /// Bars across the width, floor(b/s) + 1
    pub number_of_bars: u32,
    /// Total steel area of the placed bars (in²)
    pub steel_area_in2: f64,
    /// Steel area per foot of width (in²/ft)
    pub steel_area_per_ft: f64,
    /// Steel area on the design width used in analysis (in²)
    pub design_steel_area_in2: f64,
    /// Effective depth d = h − cover − db/2 (in)
    pub effective_depth_in: f64,
    /// Distance from tension face to bar centroid, h − d (in)
    pub tension_cover_in: f64,
    /// Gross area b h (in²)
    pub gross_area_in2: f64,
    /// Gross moment of inertia b h³/12 (in⁴)
    pub gross_inertia_in4: f64,
    /// Centroid to extreme tension fiber (in)
    pub yt_in: f64,
}

impl SectionGeometry {
    /// Gross section modulus Ig / yt (in³)
    pub fn gross_section_modulus_in3(&self) -> f64 {
        self.gross_inertia_in4 / self.yt_in
    }
}

/// Number of bars placed at `spacing` across `width`, never fewer than one.
///
/// # Errors
///
/// `InvalidInput` on `spacing` when the layout needs more bars than a `u32`
/// can count.
pub fn number_of_bars(width_in: f64, spacing_in: f64) -> CalcResult<u32> {
    let spaces = (width_in / spacing_in).floor();
    if spaces.is_nan() || spaces >= f64::from(u32::MAX) {
        return Err(CalcError::invalid_input(
            "spacing",
            spacing_in.to_string(),
            format!("Spacing places too many bars across a {} in width", width_in),
        ));
    }
    Ok(spaces as u32 + 1)
}

/// Resolve geometry for a validated section and rebar layout.
///
/// # Errors
///
/// - `InvalidGeometry` when the effective depth is not positive (cover plus
///   half a bar diameter consumes the whole height)
/// - `InvalidInput` when the bar count does not fit a `u32`
pub fn resolve(section: &Section, rebar: &Rebar) -> CalcResult<SectionGeometry> {
    let bar = rebar.size.properties();
    let b = section.width_in;
    let h = section.height_in;

    let effective_depth_in = h - section.cover_in - bar.diameter_in / 2.0;
    if effective_depth_in <= 0.0 {
        return Err(CalcError::invalid_geometry(format!(
            "effective depth d = {:.3} in is not positive (h = {}, cover = {}, {} bar)",
            effective_depth_in, h, section.cover_in, rebar.size
        )));
    }

    let number_of_bars = number_of_bars(b, rebar.spacing_in)?;
    let steel_area = SqIn(bar.area_in2) * f64::from(number_of_bars);
    let steel_area_per_ft = SqIn(bar.area_in2) * (INCHES_PER_FOOT / rebar.spacing_in);
    let design_steel_area = steel_area_per_ft * (b / INCHES_PER_FOOT);

    Ok(SectionGeometry {
        width_in: b,
        height_in: h,
        spacing_in: rebar.spacing_in,
        bar,
        number_of_bars,
        steel_area_in2: steel_area.value(),
        steel_area_per_ft: steel_area_per_ft.value(),
        design_steel_area_in2: design_steel_area.value(),
        effective_depth_in,
        tension_cover_in: h - effective_depth_in,
        gross_area_in2: eq::rectangular_area(b, h),
        gross_inertia_in4: eq::rectangular_moment_of_inertia(b, h),
        yt_in: eq::extreme_fiber_distance(h),
    })
}
