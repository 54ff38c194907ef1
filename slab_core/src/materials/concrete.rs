//! Concrete Material
//!
//! Specified compressive strength and unit weight, plus the derived
//! properties the section analyses need (λ, fr, Ec, β1).

use serde::{Deserialize, Serialize};

use crate::equations::concrete as eq;

/// Lowest specified strength accepted (ksi)
pub const MIN_FC_KSI: f64 = 2.5;

/// Highest specified strength accepted (ksi)
pub const MAX_FC_KSI: f64 = 10.0;

/// Concrete material
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Concrete {
    /// Specified compressive strength f'c (ksi)
    pub fc_ksi: f64,
    /// Unit weight (pcf)
    pub density_pcf: f64,
}

impl Concrete {
    pub fn new(fc_ksi: f64, density_pcf: f64) -> Self {
        Concrete {
            fc_ksi,
            density_pcf,
        }
    }

    /// Lightweight modification factor λ
    pub fn lambda(&self) -> f64 {
        eq::lightweight_factor(self.density_pcf)
    }

    /// Modulus of rupture fr (ksi), reduced by λ
    pub fn modulus_of_rupture_ksi(&self) -> f64 {
        eq::modulus_of_rupture(self.fc_ksi, self.lambda())
    }

    /// Modulus of elasticity Ec (ksi)
    pub fn elastic_modulus_ksi(&self) -> f64 {
        eq::elastic_modulus(self.fc_ksi)
    }

    /// Stress-block factor β1
    pub fn beta1(&self) -> f64 {
        eq::beta1(self.fc_ksi)
    }
}

impl Default for Concrete {
    /// 4 ksi normal-weight concrete at 150 pcf
    fn default() -> Self {
        Concrete::new(4.0, 150.0)
    }
}
