//! # Reinforced Concrete Equations
//!
//! All fundamental formulas used by the calculations live here, so they can
//! be checked against code references in one place and reused consistently.
//!
//! ## Modules
//!
//! - [`section`] - Gross and cracked transformed section properties
//! - [`concrete`] - Material relations, flexural/shear strength, detailing
//!
//! ## Sign Conventions
//!
//! - **Moment**: Positive causes tension at the reinforced (bottom) face
//! - **Depths**: Measured from the extreme compression fiber
//! - **Stress**: Reported as magnitudes (compression in concrete, tension in steel)
//!
//! ## References
//!
//! - ACI 318-19: Building Code Requirements for Structural Concrete
//! - AASHTO LRFD Bridge Design Specifications (crack-control exposure classes)

pub mod concrete;
pub mod section;

pub use concrete::{
    beta1,
    concrete_shear_strength,
    crack_control_allowable_stress,
    elastic_modulus,
    lightweight_factor,
    modular_ratio,
    modulus_of_rupture,
    nominal_moment_kin,
    shrinkage_temperature_ratio,
    steel_strain_at_nominal,
    stress_block_depth,
    CONCRETE_CRUSHING_STRAIN,
};

pub use section::{
    cracked_moment_of_inertia,
    cracked_neutral_axis_depth,
    extreme_fiber_distance,
    flexural_stress,
    rectangular_area,
    rectangular_moment_of_inertia,
};
