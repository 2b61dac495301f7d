//! Oil-phase PVT models.

mod constant_compressibility;

pub use constant_compressibility::{ConstantCompressibilityOilPvt, RegionParameters};

use uom::si::f64::{DynamicViscosity, MassDensity, Pressure, Ratio, ThermodynamicTemperature};

use super::Component;

/// Shared contract of oil-phase PVT models.
///
/// Every correlation variant (constant compressibility, tabulated dead oil,
/// live oil, ...) implements this trait, so model-agnostic callers can hold a
/// `Box<dyn OilPvt>` chosen once at simulator setup.
///
/// Evaluation methods are pure functions of their arguments and the calibrated
/// parameters. They take `&self`, so a calibrated model can be evaluated from
/// several threads at once.
///
/// # Panics
///
/// Evaluating a region outside `[0, num_regions)` is a contract violation and
/// panics. Use [`OilPvtModel`](crate::models::reservoir::OilPvtModel) for a
/// checked entry point.
pub trait OilPvt: Send + Sync {
    /// Returns the number of PVT regions.
    fn num_regions(&self) -> usize;

    /// Finishes calibration.
    ///
    /// Must be called after the last setter and before the first evaluation.
    /// Models that derive data from their raw parameters do so here.
    fn init_end(&mut self) {}

    /// Returns the dynamic viscosity of the oil phase.
    fn viscosity(
        &self,
        region: usize,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        gas_mass_fraction: Ratio,
    ) -> DynamicViscosity;

    /// Returns the density of the oil phase.
    fn density(
        &self,
        region: usize,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        gas_mass_fraction: Ratio,
    ) -> MassDensity;

    /// Returns the formation volume factor `B_o` of the oil phase.
    fn formation_volume_factor(
        &self,
        region: usize,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        gas_mass_fraction: Ratio,
    ) -> Ratio;

    /// Returns the fugacity coefficient of `component` in the oil phase.
    fn fugacity_coefficient(
        &self,
        region: usize,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        component: Component,
    ) -> Ratio;

    /// Returns the gas dissolution factor `R_s` of the oil phase.
    fn gas_dissolution_factor(
        &self,
        region: usize,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Ratio;

    /// Returns the saturation pressure of oil holding `gas_mass_fraction` of dissolved gas.
    fn oil_saturation_pressure(
        &self,
        region: usize,
        temperature: ThermodynamicTemperature,
        gas_mass_fraction: Ratio,
    ) -> Pressure;

    /// Returns the mass fraction of gas in gas-saturated oil.
    fn saturated_oil_gas_mass_fraction(
        &self,
        region: usize,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Ratio;

    /// Returns the mole fraction of gas in gas-saturated oil.
    fn saturated_oil_gas_mole_fraction(
        &self,
        region: usize,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Ratio;
}
