//! # slab_core - One-Way Slab Design Engine
//!
//! `slab_core` checks a one-way reinforced-concrete slab strip (or
//! rectangular beam) against flexural, shear, serviceability, and
//! detailing requirements. All inputs and outputs are JSON-serializable and
//! every calculation is a pure function of its input.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use slab_core::calculations::{calculate, SlabInput};
//!
//! // Default: 12 in × 8 in strip, #5 @ 12 in, f'c = 4 ksi, Grade 60
//! let mut input = SlabInput::default();
//! input.loads.mu_kft = 6.0;
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.checks.moment_capacity);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Section geometry, cracking, service, strength, checks
//! - [`api`] - Client-shaped request/response and request sequencing
//! - [`criteria`] - Tunable code limits (crack-control z, strain limits)
//! - [`equations`] - Individual design formulas
//! - [`materials`] - Concrete, reinforcing steel, and bar tables
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod api;
pub mod calculations;
pub mod criteria;
pub mod equations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use api::{analyze, analyze_json, AnalysisRequest, AnalysisResponse};
pub use calculations::{calculate, SlabInput, SlabResult};
pub use criteria::DesignCriteria;
pub use errors::{CalcError, CalcResult};
