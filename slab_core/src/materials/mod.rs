//! # Materials
//!
//! Material definitions and property lookups for reinforced concrete.
//!
//! - **Rebar**: standard bar designations #3–#11 (the bar table)
//! - **Reinforcing steel**: named grades and fy/Es
//! - **Concrete**: f'c and unit weight with derived properties
//!
//! ## Example
//!
//! ```rust
//! use slab_core::materials::{BarSize, Concrete, ReinforcingSteel, SteelGrade};
//!
//! let bar = BarSize::from_str_flexible("#5").unwrap();
//! assert_eq!(bar.area_in2(), 0.31);
//!
//! let steel = ReinforcingSteel::from_grade(SteelGrade::A615Grade60);
//! let concrete = Concrete::new(4.0, 150.0);
//! println!("fy = {} ksi, fr = {:.3} ksi", steel.fy_ksi, concrete.modulus_of_rupture_ksi());
//! ```

pub mod concrete;
pub mod rebar;
pub mod reinforcing_steel;

pub use concrete::{Concrete, MAX_FC_KSI, MIN_FC_KSI};
pub use rebar::{BarProperties, BarSize};
pub use reinforcing_steel::{ReinforcingSteel, SteelGrade, DEFAULT_ES_KSI};
