//! Black-oil pressure-volume-temperature (PVT) correlations.
//!
//! A PVT model translates pressure, temperature, and composition into the
//! phase properties a flow simulator consumes: formation volume factor,
//! density, viscosity, and fugacity coefficients.
//!
//! Models are calibrated per PVT region (a spatial zone with its own fluid
//! parameters), finalized with `init_end`, and then evaluated as pure
//! functions of `(region, temperature, pressure, composition)`.
//!
//! # Collaborators
//!
//! - [`FluidSystem`] supplies surface conditions and reference densities.
//! - [`ParameterSource`] supplies calibration data read from an input deck.
//!
//! # Example
//!
//! ```
//! use twine_blackoil::support::pvt::{
//!     BlackOilFluidSystem, ConstantCompressibilityOilPvt, OilPvt, ReferenceDensities,
//! };
//! use uom::si::{
//!     f64::{MassDensity, Pressure, Ratio, ThermodynamicTemperature},
//!     mass_density::kilogram_per_cubic_meter,
//!     pressure::bar,
//!     ratio::ratio,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let densities = ReferenceDensities::new(
//!     MassDensity::new::<kilogram_per_cubic_meter>(850.0),
//!     MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
//!     MassDensity::new::<kilogram_per_cubic_meter>(1.0),
//! );
//! let fluid_system = BlackOilFluidSystem::new(vec![densities]).unwrap();
//!
//! let mut oil = ConstantCompressibilityOilPvt::new(fluid_system);
//! oil.set_num_regions(1);
//! oil.set_reference_pressure(0, Pressure::new::<bar>(200.0)).unwrap();
//! oil.init_end();
//!
//! let bo = oil.formation_volume_factor(
//!     0,
//!     ThermodynamicTemperature::new::<degree_celsius>(80.0),
//!     Pressure::new::<bar>(200.0),
//!     Ratio::new::<ratio>(0.0),
//! );
//! assert_eq!(bo.get::<ratio>(), 1.0);
//! ```

mod error;
mod fluid_system;
mod oil;
mod source;

pub use error::PvtError;
pub use fluid_system::{
    BlackOilFluidSystem, Component, FluidSystem, FluidSystemError, Phase, ReferenceDensities,
};
pub use oil::{ConstantCompressibilityOilPvt, OilPvt, RegionParameters};
pub use source::{ParameterSource, PvcdoField, PvcdoRecord, PvcdoTable};
