//! # Slab Calculations
//!
//! The design is split into stages, each a pure function over immutable
//! inputs:
//!
//! - [`geometry`] - Bar layout, steel areas, effective depth, gross properties
//! - [`cracking`] - Self-weight and cracking moment
//! - [`service`] - Cracked/uncracked service stresses
//! - [`strength`] - Factored flexural and shear capacity
//! - [`checks`] - Design quantities and the six pass/fail checks
//! - [`slab`] - Inputs, validation, and the top-level `calculate`
//!
//! Each stage follows the pattern used throughout the crate:
//!
//! - inputs and results are JSON-serializable structs
//! - errors are structured [`CalcError`](crate::errors::CalcError) values

pub mod checks;
mod proptests;
pub mod cracking;
pub mod geometry;
pub mod service;
pub mod slab;
pub mod strength;

// Re-export commonly used types
pub use checks::{DesignCheck, DesignChecks, DesignQuantities, EfficiencyRatio};
pub use cracking::CrackingResult;
pub use geometry::SectionGeometry;
pub use service::{ServiceState, ServiceStress};
pub use slab::{
    calculate, calculate_with, CrackClass, Loads, Rebar, ResistanceFactors, Section, SlabInput, SlabResult,
};
pub use strength::StrengthResult;
