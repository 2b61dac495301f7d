//! Dead oil with constant compressibility and constant "viscosibility".
//!
//! This is the correlation behind the ECLIPSE `PVCDO` keyword. Oil carries no
//! dissolved gas, and its volume and viscosity vary with pressure only.
//!
//! # Correlations
//!
//! With `X = c_o·(p − p_ref)` and `Y = (c_o − c_μ)·(p − p_ref)`:
//!
//! - Formation volume factor: `B_o = B_o,ref / (1 + X·(1 + X/2))`
//! - Viscosity: `μ_o = μ_ref·B_o,ref / ((1 + Y·(1 + Y/2))·B_o)`
//! - Density: `ρ_o = ρ_o,surface / B_o`
//!
//! The denominators are the second-order expansion of `exp(X)` and `exp(Y)`
//! used by ECLIPSE (2011 technical description, p. 116), not the exponential
//! itself. Results match reference simulators only with the truncated form.
//!
//! Temperature and gas mass fraction are accepted for interface compatibility
//! but do not enter any correlation.

use tracing::{debug, trace};
use uom::{
    ConstZero,
    si::{
        dynamic_viscosity::pascal_second,
        f64::{DynamicViscosity, MassDensity, Pressure, Ratio, ThermodynamicTemperature},
        pressure::pascal,
        ratio::ratio,
    },
};

use crate::support::{
    pvt::{Component, FluidSystem, OilPvt, ParameterSource, Phase, PvcdoField, PvtError},
    units::{ReciprocalPressure, reciprocal_pascal},
};

/// Pseudo vapor pressure of the oil component, used to scale fugacity coefficients.
const OIL_FUGACITY_PRESSURE_PA: f64 = 20.0e3;

/// Affinity ratio of water to oil in the oil phase.
const WATER_FUGACITY_FACTOR: f64 = 1.0e8;

/// Affinity ratio of gas to oil in the oil phase.
const GAS_FUGACITY_FACTOR: f64 = 1.01e8;

/// Calibrated parameters of one PVT region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionParameters {
    pub reference_pressure: Pressure,
    pub reference_formation_volume_factor: Ratio,
    pub compressibility: ReciprocalPressure,
    pub reference_viscosity: DynamicViscosity,
    pub viscosibility: ReciprocalPressure,
}

impl RegionParameters {
    /// Returns the parameters of a freshly sized region.
    ///
    /// The reference formation volume factor is one, the reference pressure is
    /// `reference_pressure`, and every other parameter is zero.
    #[must_use]
    pub fn uncalibrated(reference_pressure: Pressure) -> Self {
        Self {
            reference_pressure,
            reference_formation_volume_factor: Ratio::new::<ratio>(1.0),
            compressibility: reciprocal_pascal(0.0),
            reference_viscosity: DynamicViscosity::ZERO,
            viscosibility: reciprocal_pascal(0.0),
        }
    }

    fn from_source(source: &impl ParameterSource, region: usize) -> Result<Self, PvtError> {
        if region >= source.num_regions() {
            return Err(PvtError::MissingRegion { region });
        }
        let read = |field| {
            source
                .field(region, field)
                .ok_or(PvtError::MissingField { region, field })
        };

        Ok(Self {
            reference_pressure: Pressure::new::<pascal>(read(PvcdoField::ReferencePressure)?),
            reference_formation_volume_factor: Ratio::new::<ratio>(read(
                PvcdoField::OilVolumeFactor,
            )?),
            compressibility: reciprocal_pascal(read(PvcdoField::OilCompressibility)?),
            reference_viscosity: DynamicViscosity::new::<pascal_second>(read(
                PvcdoField::OilViscosity,
            )?),
            viscosibility: reciprocal_pascal(read(PvcdoField::OilViscosibility)?),
        })
    }
}

/// Oil PVT model without dissolved gas and with constant compressibility.
///
/// Parameters are stored per PVT region. A model starts with no regions;
/// call [`set_num_regions`](Self::set_num_regions) first, calibrate each
/// region, then call [`OilPvt::init_end`] before evaluating.
#[derive(Debug, Clone)]
pub struct ConstantCompressibilityOilPvt<F> {
    fluid_system: F,
    regions: Vec<RegionParameters>,
}

impl<F: FluidSystem> ConstantCompressibilityOilPvt<F> {
    /// Creates a model with no regions.
    #[must_use]
    pub fn new(fluid_system: F) -> Self {
        Self {
            fluid_system,
            regions: Vec::new(),
        }
    }

    /// Creates a finalized model with one region per record in `source`.
    ///
    /// # Errors
    ///
    /// Returns [`PvtError::MissingField`] if any record lacks a `PVCDO` field.
    pub fn from_source(fluid_system: F, source: &impl ParameterSource) -> Result<Self, PvtError>
    where
        F: Send + Sync,
    {
        let mut model = Self::new(fluid_system);
        model.set_num_regions(source.num_regions());
        model.ingest(source)?;
        model.init_end();
        Ok(model)
    }

    /// Resizes the model to `num_regions` uncalibrated regions.
    ///
    /// Every region gets a reference formation volume factor of one and the
    /// fluid system's surface pressure as its reference pressure.
    /// Any earlier calibration is discarded.
    pub fn set_num_regions(&mut self, num_regions: usize) {
        let defaults = RegionParameters::uncalibrated(self.fluid_system.surface_pressure());
        self.regions.clear();
        self.regions.resize(num_regions, defaults);
        debug!(num_regions, "sized constant compressibility oil PVT");
    }

    /// Sets the reference viscosity of a region and resets its viscosibility to zero.
    ///
    /// # Errors
    ///
    /// Returns [`PvtError::RegionOutOfRange`] if `region` is not a region of this model.
    pub fn set_viscosity(
        &mut self,
        region: usize,
        reference_viscosity: DynamicViscosity,
    ) -> Result<(), PvtError> {
        self.set_viscosity_with_viscosibility(region, reference_viscosity, reciprocal_pascal(0.0))
    }

    /// Sets the reference viscosity and the viscosibility of a region.
    ///
    /// # Errors
    ///
    /// Returns [`PvtError::RegionOutOfRange`] if `region` is not a region of this model.
    pub fn set_viscosity_with_viscosibility(
        &mut self,
        region: usize,
        reference_viscosity: DynamicViscosity,
        viscosibility: ReciprocalPressure,
    ) -> Result<(), PvtError> {
        let params = self.region_mut(region)?;
        params.reference_viscosity = reference_viscosity;
        params.viscosibility = viscosibility;
        Ok(())
    }

    /// Sets the oil compressibility of a region.
    ///
    /// # Errors
    ///
    /// Returns [`PvtError::RegionOutOfRange`] if `region` is not a region of this model.
    pub fn set_compressibility(
        &mut self,
        region: usize,
        compressibility: ReciprocalPressure,
    ) -> Result<(), PvtError> {
        self.region_mut(region)?.compressibility = compressibility;
        Ok(())
    }

    /// Sets the reference pressure of a region.
    ///
    /// # Errors
    ///
    /// Returns [`PvtError::RegionOutOfRange`] if `region` is not a region of this model.
    pub fn set_reference_pressure(
        &mut self,
        region: usize,
        reference_pressure: Pressure,
    ) -> Result<(), PvtError> {
        self.region_mut(region)?.reference_pressure = reference_pressure;
        Ok(())
    }

    /// Sets the formation volume factor at the reference pressure of a region.
    ///
    /// # Errors
    ///
    /// Returns [`PvtError::RegionOutOfRange`] if `region` is not a region of this model.
    pub fn set_reference_formation_volume_factor(
        &mut self,
        region: usize,
        reference_formation_volume_factor: Ratio,
    ) -> Result<(), PvtError> {
        self.region_mut(region)?.reference_formation_volume_factor =
            reference_formation_volume_factor;
        Ok(())
    }

    /// Sets the viscosibility of a region.
    ///
    /// # Errors
    ///
    /// Returns [`PvtError::RegionOutOfRange`] if `region` is not a region of this model.
    pub fn set_viscosibility(
        &mut self,
        region: usize,
        viscosibility: ReciprocalPressure,
    ) -> Result<(), PvtError> {
        self.region_mut(region)?.viscosibility = viscosibility;
        Ok(())
    }

    /// Replaces every parameter of a region at once.
    ///
    /// # Errors
    ///
    /// Returns [`PvtError::RegionOutOfRange`] if `region` is not a region of this model.
    pub fn set_region_parameters(
        &mut self,
        region: usize,
        params: RegionParameters,
    ) -> Result<(), PvtError> {
        *self.region_mut(region)? = params;
        Ok(())
    }

    /// Calibrates one region from its `PVCDO` record in `source`.
    ///
    /// The region is left untouched if any field is missing.
    ///
    /// # Errors
    ///
    /// Returns a [`PvtError`] if `region` is out of range for this model,
    /// if `source` has no record for it, or if the record lacks a field.
    pub fn set_pvcdo(
        &mut self,
        region: usize,
        source: &impl ParameterSource,
    ) -> Result<(), PvtError> {
        let num_regions = self.regions.len();
        let slot = self
            .regions
            .get_mut(region)
            .ok_or(PvtError::RegionOutOfRange {
                region,
                num_regions,
            })?;

        let params = RegionParameters::from_source(source, region)?;
        trace!(region, ?params, "read PVCDO record");
        *slot = params;
        Ok(())
    }

    /// Calibrates every region `source` has a record for.
    ///
    /// Regions beyond the source's record count keep their current parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PvtError::RegionOutOfRange`] if `source` holds more regions than
    /// this model, or [`PvtError::MissingField`] if a record lacks a field.
    pub fn ingest(&mut self, source: &impl ParameterSource) -> Result<(), PvtError> {
        let records = source.num_regions();
        if records > self.regions.len() {
            return Err(PvtError::RegionOutOfRange {
                region: records - 1,
                num_regions: self.regions.len(),
            });
        }

        for region in 0..records {
            self.set_pvcdo(region, source)?;
        }
        debug!(records, "ingested PVCDO records");
        Ok(())
    }

    /// Returns the calibrated parameters of a region, if it exists.
    #[must_use]
    pub fn region_parameters(&self, region: usize) -> Option<&RegionParameters> {
        self.regions.get(region)
    }

    /// Returns the fluid system this model draws reference densities from.
    #[must_use]
    pub fn fluid_system(&self) -> &F {
        &self.fluid_system
    }

    fn region_mut(&mut self, region: usize) -> Result<&mut RegionParameters, PvtError> {
        let num_regions = self.regions.len();
        self.regions
            .get_mut(region)
            .ok_or(PvtError::RegionOutOfRange {
                region,
                num_regions,
            })
    }

    fn region(&self, region: usize) -> &RegionParameters {
        self.check_region(region);
        &self.regions[region]
    }

    /// Panics unless `region` is a region of this model.
    fn check_region(&self, region: usize) {
        assert!(
            region < self.regions.len(),
            "PVT region {region} out of range (model has {} regions)",
            self.regions.len()
        );
    }
}

/// Second-order expansion of `exp(x)`.
fn truncated_exp(x: f64) -> f64 {
    1.0 + x * (1.0 + x / 2.0)
}

impl<F: FluidSystem + Send + Sync> OilPvt for ConstantCompressibilityOilPvt<F> {
    fn num_regions(&self) -> usize {
        self.regions.len()
    }

    fn init_end(&mut self) {
        debug!(
            num_regions = self.regions.len(),
            "constant compressibility oil PVT ready"
        );
    }

    /// Computes viscosity using `μ_o = μ_ref·B_o,ref / ((1 + Y·(1 + Y/2))·B_o)`.
    ///
    /// ECLIPSE evaluates the product `B_o·μ_o` and divides by `B_o`; so does this.
    fn viscosity(
        &self,
        region: usize,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        gas_mass_fraction: Ratio,
    ) -> DynamicViscosity {
        let params = self.region(region);
        let bo_mu_ref = params.reference_viscosity.value
            * params.reference_formation_volume_factor.value;
        let bo = self
            .formation_volume_factor(region, temperature, pressure, gas_mass_fraction)
            .value;

        let y = (params.compressibility.value - params.viscosibility.value)
            * (pressure - params.reference_pressure).value;

        DynamicViscosity::new::<pascal_second>(bo_mu_ref / (truncated_exp(y) * bo))
    }

    /// Computes density using `ρ_o = ρ_o,surface / B_o`.
    fn density(
        &self,
        region: usize,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        gas_mass_fraction: Ratio,
    ) -> MassDensity {
        let bo = self.formation_volume_factor(region, temperature, pressure, gas_mass_fraction);
        let rho_ref = self.fluid_system.reference_density(Phase::Oil, region);

        rho_ref / bo.get::<ratio>()
    }

    /// Computes `B_o = B_o,ref / (1 + X·(1 + X/2))` with `X = c_o·(p − p_ref)`.
    fn formation_volume_factor(
        &self,
        region: usize,
        _temperature: ThermodynamicTemperature,
        pressure: Pressure,
        _gas_mass_fraction: Ratio,
    ) -> Ratio {
        let params = self.region(region);
        let x = params.compressibility.value * (pressure - params.reference_pressure).value;

        Ratio::new::<ratio>(params.reference_formation_volume_factor.value / truncated_exp(x))
    }

    /// Returns a pseudo-realistic fugacity coefficient.
    ///
    /// The oil component gets `φ = 20 kPa / p`. Water and gas are practically
    /// immiscible with dead oil: their coefficients are `1e8·φ` and `1.01e8·φ`.
    fn fugacity_coefficient(
        &self,
        region: usize,
        _temperature: ThermodynamicTemperature,
        pressure: Pressure,
        component: Component,
    ) -> Ratio {
        self.check_region(region);
        let phi_oil: Ratio = Pressure::new::<pascal>(OIL_FUGACITY_PRESSURE_PA) / pressure;

        match component {
            Component::Oil => phi_oil,
            Component::Water => phi_oil * WATER_FUGACITY_FACTOR,
            Component::Gas => phi_oil * GAS_FUGACITY_FACTOR,
        }
    }

    /// Always zero: dead oil holds no dissolved gas.
    fn gas_dissolution_factor(
        &self,
        region: usize,
        _temperature: ThermodynamicTemperature,
        _pressure: Pressure,
    ) -> Ratio {
        self.check_region(region);
        Ratio::ZERO
    }

    /// Always zero: dead oil has no meaningful saturation pressure.
    fn oil_saturation_pressure(
        &self,
        region: usize,
        _temperature: ThermodynamicTemperature,
        _gas_mass_fraction: Ratio,
    ) -> Pressure {
        self.check_region(region);
        Pressure::ZERO
    }

    fn saturated_oil_gas_mass_fraction(
        &self,
        region: usize,
        _temperature: ThermodynamicTemperature,
        _pressure: Pressure,
    ) -> Ratio {
        self.check_region(region);
        Ratio::ZERO
    }

    fn saturated_oil_gas_mole_fraction(
        &self,
        region: usize,
        _temperature: ThermodynamicTemperature,
        _pressure: Pressure,
    ) -> Ratio {
        self.check_region(region);
        Ratio::ZERO
    }
}


#[cfg(test)]
mod proptests {
    use super::*;

    use proptest::prelude::*;
    use uom::si::{
        f64::MassDensity, mass_density::kilogram_per_cubic_meter, thermodynamic_temperature::kelvin,
    };

    use crate::support::pvt::{BlackOilFluidSystem, ReferenceDensities};

    fn model(params: RegionParameters) -> ConstantCompressibilityOilPvt<BlackOilFluidSystem> {
        let rho = MassDensity::new::<kilogram_per_cubic_meter>(800.0);
        let fs = BlackOilFluidSystem::new(vec![ReferenceDensities::new(rho, rho, rho)]).unwrap();

        let mut oil = ConstantCompressibilityOilPvt::new(fs);
        oil.set_num_regions(1);
        oil.set_region_parameters(0, params).unwrap();
        oil.init_end();
        oil
    }

    fn params(
        p_ref: f64,
        bo_ref: f64,
        c_o: f64,
        mu_ref: f64,
        c_mu: f64,
    ) -> RegionParameters {
        RegionParameters {
            reference_pressure: Pressure::new::<pascal>(p_ref),
            reference_formation_volume_factor: Ratio::new::<ratio>(bo_ref),
            compressibility: reciprocal_pascal(c_o),
            reference_viscosity: DynamicViscosity::new::<pascal_second>(mu_ref),
            viscosibility: reciprocal_pascal(c_mu),
        }
    }

    proptest! {
        #[test]
        fn incompressible_oil_has_constant_volume_factor(
            p_ref in 1.0e5_f64..5.0e7,
            bo_ref in 0.8_f64..2.0,
            p in 1.0e5_f64..1.0e8,
            t in 250.0_f64..450.0,
        ) {
            let oil = model(params(p_ref, bo_ref, 0.0, 1.0e-3, 0.0));
            let bo = oil.formation_volume_factor(
                0,
                ThermodynamicTemperature::new::<kelvin>(t),
                Pressure::new::<pascal>(p),
                Ratio::ZERO,
            );
            prop_assert_eq!(bo.get::<ratio>(), bo_ref);
        }

        #[test]
        fn reference_pressure_recovers_reference_values(
            p_ref in 1.0e5_f64..5.0e7,
            bo_ref in 0.8_f64..2.0,
            c_o in -1.0e-8_f64..1.0e-8,
            mu_ref in 1.0e-4_f64..1.0e-1,
            c_mu in -1.0e-8_f64..1.0e-8,
        ) {
            let oil = model(params(p_ref, bo_ref, c_o, mu_ref, c_mu));
            let t = ThermodynamicTemperature::new::<kelvin>(350.0);
            let p = Pressure::new::<pascal>(p_ref);

            let bo = oil.formation_volume_factor(0, t, p, Ratio::ZERO);
            prop_assert_eq!(bo.get::<ratio>(), bo_ref);

            let mu = oil.viscosity(0, t, p, Ratio::ZERO).get::<pascal_second>();
            prop_assert!((mu - mu_ref).abs() <= 4.0 * f64::EPSILON * mu_ref);
        }

        #[test]
        fn positive_compressibility_shrinks_oil_above_reference(
            p_ref in 1.0e5_f64..5.0e7,
            dp in 1.0e3_f64..5.0e7,
            c_o in 1.0e-11_f64..1.0e-8,
        ) {
            let oil = model(params(p_ref, 1.0, c_o, 1.0e-3, 0.0));
            let t = ThermodynamicTemperature::new::<kelvin>(350.0);

            let at_ref = oil.density(0, t, Pressure::new::<pascal>(p_ref), Ratio::ZERO);
            let above = oil.density(0, t, Pressure::new::<pascal>(p_ref + dp), Ratio::ZERO);
            prop_assert!(above > at_ref);
        }

        #[test]
        fn negative_coefficients_follow_truncated_expansion(
            p_ref in 1.0e5_f64..5.0e7,
            dp in 1.0e3_f64..5.0e7,
            bo_ref in 0.8_f64..2.0,
            c_o in -1.0e-8_f64..-1.0e-11,
            mu_ref in 1.0e-4_f64..1.0e-1,
            c_mu in -1.0e-8_f64..-1.0e-11,
        ) {
            let oil = model(params(p_ref, bo_ref, c_o, mu_ref, c_mu));
            let t = ThermodynamicTemperature::new::<kelvin>(350.0);
            let p = Pressure::new::<pascal>(p_ref + dp);

            let x = c_o * dp;
            let bo = oil.formation_volume_factor(0, t, p, Ratio::ZERO).get::<ratio>();
            let expected_bo = bo_ref / (1.0 + x * (1.0 + x / 2.0));
            prop_assert!((bo - expected_bo).abs() <= 1e-12 * expected_bo);
            prop_assert!(bo > bo_ref);

            let y = (c_o - c_mu) * dp;
            let mu = oil.viscosity(0, t, p, Ratio::ZERO).get::<pascal_second>();
            let expected_mu = mu_ref * bo_ref / ((1.0 + y * (1.0 + y / 2.0)) * bo);
            prop_assert!((mu - expected_mu).abs() <= 1e-12 * expected_mu);
        }
    }
}
