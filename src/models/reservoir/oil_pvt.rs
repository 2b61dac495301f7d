//! Oil-phase property evaluation as a Twine model.

use twine_core::Model;
use uom::si::f64::{DynamicViscosity, MassDensity, Pressure, Ratio, ThermodynamicTemperature};

use crate::support::pvt::{OilPvt, PvtError};

/// Conditions at which oil properties are evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OilPvtInput {
    pub region: usize,
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub gas_mass_fraction: Ratio,
}

/// Oil properties consumed by flow-equation assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OilPvtOutput {
    pub formation_volume_factor: Ratio,
    pub density: MassDensity,
    pub viscosity: DynamicViscosity,
    pub gas_dissolution_factor: Ratio,
}

/// Model adapter over a calibrated [`OilPvt`].
///
/// Unlike calling the PVT model directly, the adapter checks the region index
/// and reports an unknown region as [`PvtError::RegionOutOfRange`].
///
/// # Example
///
/// ```
/// use twine_blackoil::{
///     models::reservoir::{OilPvtInput, OilPvtModel},
///     support::pvt::{
///         BlackOilFluidSystem, ConstantCompressibilityOilPvt, PvcdoRecord, PvcdoTable,
///         ReferenceDensities,
///     },
/// };
/// use twine_core::Model;
/// use uom::si::{
///     f64::{MassDensity, Pressure, Ratio, ThermodynamicTemperature},
///     mass_density::kilogram_per_cubic_meter,
///     pressure::bar,
///     ratio::ratio,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let rho = |v| MassDensity::new::<kilogram_per_cubic_meter>(v);
/// let fluid_system =
///     BlackOilFluidSystem::new(vec![ReferenceDensities::new(rho(850.0), rho(1000.0), rho(0.9))])
///         .unwrap();
/// let table = PvcdoTable::new(vec![PvcdoRecord::from_field_units(
///     200.0, 1.2, 1.0e-4, 1.0, 5.0e-5,
/// )]);
/// let oil = ConstantCompressibilityOilPvt::from_source(fluid_system, &table).unwrap();
///
/// let model = OilPvtModel::new(&oil);
/// let output = model
///     .call(&OilPvtInput {
///         region: 0,
///         temperature: ThermodynamicTemperature::new::<degree_celsius>(80.0),
///         pressure: Pressure::new::<bar>(200.0),
///         gas_mass_fraction: Ratio::new::<ratio>(0.0),
///     })
///     .unwrap();
///
/// assert_eq!(output.formation_volume_factor.get::<ratio>(), 1.2);
/// ```
#[derive(Debug)]
pub struct OilPvtModel<'a, Pvt: ?Sized> {
    pvt: &'a Pvt,
}

impl<'a, Pvt: OilPvt + ?Sized> OilPvtModel<'a, Pvt> {
    #[must_use]
    pub fn new(pvt: &'a Pvt) -> Self {
        Self { pvt }
    }
}

impl<Pvt: ?Sized> Clone for OilPvtModel<'_, Pvt> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Pvt: ?Sized> Copy for OilPvtModel<'_, Pvt> {}

impl<Pvt: OilPvt + ?Sized> Model for OilPvtModel<'_, Pvt> {
    type Input = OilPvtInput;
    type Output = OilPvtOutput;
    type Error = PvtError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let OilPvtInput {
            region,
            temperature,
            pressure,
            gas_mass_fraction,
        } = *input;

        let num_regions = self.pvt.num_regions();
        if region >= num_regions {
            return Err(PvtError::RegionOutOfRange {
                region,
                num_regions,
            });
        }

        Ok(OilPvtOutput {
            formation_volume_factor: self.pvt.formation_volume_factor(
                region,
                temperature,
                pressure,
                gas_mass_fraction,
            ),
            density: self
                .pvt
                .density(region, temperature, pressure, gas_mass_fraction),
            viscosity: self
                .pvt
                .viscosity(region, temperature, pressure, gas_mass_fraction),
            gas_dissolution_factor: self
                .pvt
                .gas_dissolution_factor(region, temperature, pressure),
        })
    }
}
