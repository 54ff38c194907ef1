//! # Unit Types
//!
//! Type-safe wrappers for the US customary units the engine works in. They
//! are plain `f64` newtypes so JSON stays clean (just numbers) and the runtime
//! cost is nil.
//!
//! ## Units in use
//!
//! - Area: square inches (in²)
//! - Stress: kips per square inch (ksi), pounds per square inch (psi)
//! - Moment: kip-feet (k-ft), kip-inches (k-in)
//! - Line load: kips per linear foot (klf)
//! - Density: pounds per cubic foot (pcf)
//!
//! ## Example
//!
//! ```rust
//! use slab_core::units::{KipFt, KipIn, Ksi, Psi};
//!
//! let moment = KipFt(10.0);
//! let moment_kin: KipIn = moment.into();
//! assert_eq!(moment_kin.0, 120.0);
//!
//! let fc: Psi = Ksi(4.0).into();
//! assert_eq!(fc.0, 4000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Inches per foot, used when normalizing to a 12-in strip
pub const INCHES_PER_FOOT: f64 = 12.0;

// ============================================================================
// Stress Units
// ============================================================================

/// Stress in pounds per square inch (psi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Psi(pub f64);

/// Stress in kips per square inch (ksi)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ksi(pub f64);

impl From<Psi> for Ksi {
    fn from(psi: Psi) -> Self {
        Ksi(psi.0 / 1000.0)
    }
}

impl From<Ksi> for Psi {
    fn from(ksi: Ksi) -> Self {
        Psi(ksi.0 * 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kip-feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KipFt(pub f64);

/// Moment in kip-inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KipIn(pub f64);

impl From<KipFt> for KipIn {
    fn from(kipft: KipFt) -> Self {
        KipIn(kipft.0 * 12.0)
    }
}

impl From<KipIn> for KipFt {
    fn from(kipin: KipIn) -> Self {
        KipFt(kipin.0 / 12.0)
    }
}

// ============================================================================
// Distributed Load / Density Units
// ============================================================================

/// Distributed load in kips per linear foot (klf)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KlF(pub f64);

/// Unit weight in pounds per cubic foot (pcf)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pcf(pub f64);

impl Pcf {
    /// Line load of a prismatic member with the given cross-section (in²)
    ///
    /// `area (in²) / 144 (in²/ft²) × density (pcf) / 1000 (lb/kip)`
    pub fn line_load(self, area: SqIn) -> KlF {
        KlF(area.0 / 144.0 * self.0 / 1000.0)
    }
}

// ============================================================================
// Section Properties
// ============================================================================

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Psi);
impl_arithmetic!(Ksi);
impl_arithmetic!(KipFt);
impl_arithmetic!(KipIn);
impl_arithmetic!(KlF);
impl_arithmetic!(Pcf);
impl_arithmetic!(SqIn);
