//! Fluid-system collaborator for black-oil PVT models.
//!
//! A black-oil fluid system has three phases (oil, water, gas) and three
//! pseudo-components of the same names. PVT models use the phase and component
//! tags to select correlations, and look up the surface (reference) density of
//! each phase per PVT region.

use std::sync::Arc;

use thiserror::Error;
use uom::si::{
    f64::{MassDensity, Pressure},
    pressure::atmosphere,
};

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

/// Fluid phases of the black-oil model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Water,
    Oil,
    Gas,
}

/// Pseudo-components of the black-oil model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Oil,
    Water,
    Gas,
}

/// Services a PVT model needs from the surrounding fluid system.
pub trait FluidSystem {
    /// Returns the pressure at surface (stock-tank) conditions.
    ///
    /// PVT models use this as the default reference pressure.
    fn surface_pressure(&self) -> Pressure;

    /// Returns the density of `phase` at surface conditions in PVT region `region`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `region` is not a region of the fluid system.
    fn reference_density(&self, phase: Phase, region: usize) -> MassDensity;
}

impl<T: FluidSystem + ?Sized> FluidSystem for &T {
    fn surface_pressure(&self) -> Pressure {
        (**self).surface_pressure()
    }

    fn reference_density(&self, phase: Phase, region: usize) -> MassDensity {
        (**self).reference_density(phase, region)
    }
}

impl<T: FluidSystem + ?Sized> FluidSystem for Arc<T> {
    fn surface_pressure(&self) -> Pressure {
        (**self).surface_pressure()
    }

    fn reference_density(&self, phase: Phase, region: usize) -> MassDensity {
        (**self).reference_density(phase, region)
    }
}

/// Errors returned when building a [`BlackOilFluidSystem`] from non-physical constants.
///
/// Each variant carries the offending value and the [`ConstraintError`] it violated.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum FluidSystemError {
    #[error("invalid surface pressure {surface_pressure:?}")]
    SurfacePressure {
        surface_pressure: Pressure,
        source: ConstraintError,
    },
    #[error("invalid {phase:?} reference density in region {region}: {density:?}")]
    ReferenceDensity {
        phase: Phase,
        region: usize,
        density: MassDensity,
        source: ConstraintError,
    },
}

/// Surface densities of the three phases in one PVT region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceDensities {
    pub oil: MassDensity,
    pub water: MassDensity,
    pub gas: MassDensity,
}

impl ReferenceDensities {
    #[must_use]
    pub fn new(oil: MassDensity, water: MassDensity, gas: MassDensity) -> Self {
        Self { oil, water, gas }
    }

    /// Returns the surface density of `phase`.
    #[must_use]
    pub fn get(&self, phase: Phase) -> MassDensity {
        match phase {
            Phase::Oil => self.oil,
            Phase::Water => self.water,
            Phase::Gas => self.gas,
        }
    }
}

type PositiveDensity = Constrained<MassDensity, StrictlyPositive>;

/// Surface densities of one region, each checked to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ValidatedDensities {
    oil: PositiveDensity,
    water: PositiveDensity,
    gas: PositiveDensity,
}

impl ValidatedDensities {
    fn new(densities: &ReferenceDensities, region: usize) -> Result<Self, FluidSystemError> {
        let check = |phase| {
            let density = densities.get(phase);
            StrictlyPositive::new(density).map_err(|source| FluidSystemError::ReferenceDensity {
                phase,
                region,
                density,
                source,
            })
        };

        Ok(Self {
            oil: check(Phase::Oil)?,
            water: check(Phase::Water)?,
            gas: check(Phase::Gas)?,
        })
    }

    fn get(&self, phase: Phase) -> MassDensity {
        match phase {
            Phase::Oil => self.oil,
            Phase::Water => self.water,
            Phase::Gas => self.gas,
        }
        .into_inner()
    }
}

/// A black-oil fluid system with per-region surface densities.
///
/// The surface pressure defaults to one standard atmosphere.
#[derive(Debug, Clone, PartialEq)]
pub struct BlackOilFluidSystem {
    surface_pressure: Constrained<Pressure, StrictlyPositive>,
    reference_densities: Vec<ValidatedDensities>,
}

impl BlackOilFluidSystem {
    /// Creates a fluid system with one set of surface densities per PVT region.
    ///
    /// # Errors
    ///
    /// Returns [`FluidSystemError::ReferenceDensity`] if any density is not strictly positive.
    pub fn new(reference_densities: Vec<ReferenceDensities>) -> Result<Self, FluidSystemError> {
        let reference_densities = reference_densities
            .iter()
            .enumerate()
            .map(|(region, densities)| ValidatedDensities::new(densities, region))
            .collect::<Result<_, _>>()?;

        let surface_pressure = Pressure::new::<atmosphere>(1.0);
        Ok(Self {
            surface_pressure: StrictlyPositive::new(surface_pressure).map_err(|source| {
                FluidSystemError::SurfacePressure {
                    surface_pressure,
                    source,
                }
            })?,
            reference_densities,
        })
    }

    /// Returns this fluid system with a different surface pressure.
    ///
    /// # Errors
    ///
    /// Returns [`FluidSystemError::SurfacePressure`] if `surface_pressure` is not strictly positive.
    pub fn with_surface_pressure(
        mut self,
        surface_pressure: Pressure,
    ) -> Result<Self, FluidSystemError> {
        self.surface_pressure = StrictlyPositive::new(surface_pressure).map_err(|source| {
            FluidSystemError::SurfacePressure {
                surface_pressure,
                source,
            }
        })?;
        Ok(self)
    }

    /// Returns the number of PVT regions with surface densities.
    #[must_use]
    pub fn num_regions(&self) -> usize {
        self.reference_densities.len()
    }
}

impl FluidSystem for BlackOilFluidSystem {
    fn surface_pressure(&self) -> Pressure {
        *self.surface_pressure.as_ref()
    }

    /// # Panics
    ///
    /// Panics if `region` is out of range.
    fn reference_density(&self, phase: Phase, region: usize) -> MassDensity {
        let Some(densities) = self.reference_densities.get(region) else {
            panic!(
                "no reference densities for PVT region {region} (fluid system has {} regions)",
                self.reference_densities.len()
            );
        };
        densities.get(phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{mass_density::kilogram_per_cubic_meter, pressure::pascal};

    fn densities(oil: f64) -> ReferenceDensities {
        ReferenceDensities::new(
            MassDensity::new::<kilogram_per_cubic_meter>(oil),
            MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
            MassDensity::new::<kilogram_per_cubic_meter>(0.9),
        )
    }

    #[test]
    fn looks_up_density_by_phase_and_region() {
        let fs = BlackOilFluidSystem::new(vec![densities(850.0), densities(870.0)]).unwrap();

        assert_eq!(fs.num_regions(), 2);
        assert_eq!(
            fs.reference_density(Phase::Oil, 1),
            MassDensity::new::<kilogram_per_cubic_meter>(870.0)
        );
        assert_eq!(
            fs.reference_density(Phase::Water, 0),
            MassDensity::new::<kilogram_per_cubic_meter>(1000.0)
        );
        assert_eq!(
            fs.reference_density(Phase::Gas, 0),
            MassDensity::new::<kilogram_per_cubic_meter>(0.9)
        );
    }

    #[test]
    fn surface_pressure_defaults_to_one_atmosphere() {
        let fs = BlackOilFluidSystem::new(vec![densities(850.0)]).unwrap();
        assert_eq!(fs.surface_pressure().get::<pascal>(), 101_325.0);

        let fs = fs
            .with_surface_pressure(Pressure::new::<pascal>(100_000.0))
            .unwrap();
        assert_eq!(fs.surface_pressure().get::<pascal>(), 100_000.0);
    }

    #[test]
    fn rejects_non_physical_constants() {
        let error = BlackOilFluidSystem::new(vec![densities(850.0), densities(0.0)]).unwrap_err();
        assert!(matches!(
            error,
            FluidSystemError::ReferenceDensity {
                phase: Phase::Oil,
                region: 1,
                source: ConstraintError::Zero,
                ..
            }
        ));

        let mut gas_is_nan = densities(850.0);
        gas_is_nan.gas = MassDensity::new::<kilogram_per_cubic_meter>(f64::NAN);
        let error = BlackOilFluidSystem::new(vec![gas_is_nan]).unwrap_err();
        assert!(matches!(
            error,
            FluidSystemError::ReferenceDensity {
                phase: Phase::Gas,
                region: 0,
                source: ConstraintError::NotANumber,
                ..
            }
        ));

        let error = BlackOilFluidSystem::new(vec![densities(850.0)])
            .unwrap()
            .with_surface_pressure(Pressure::new::<pascal>(-1.0))
            .unwrap_err();
        assert_eq!(
            error,
            FluidSystemError::SurfacePressure {
                surface_pressure: Pressure::new::<pascal>(-1.0),
                source: ConstraintError::Negative,
            }
        );
    }

    #[test]
    fn error_reports_the_violated_constraint() {
        let error = BlackOilFluidSystem::new(vec![densities(-850.0)]).unwrap_err();
        let source = std::error::Error::source(&error).map(ToString::to_string);

        assert_eq!(source.as_deref(), Some("value must not be negative"));
    }

    #[test]
    fn forwards_through_shared_references() {
        let fs = Arc::new(BlackOilFluidSystem::new(vec![densities(850.0)]).unwrap());

        fn oil_density(fs: impl FluidSystem) -> MassDensity {
            fs.reference_density(Phase::Oil, 0)
        }

        assert_eq!(oil_density(&*fs), oil_density(Arc::clone(&fs)));
    }

    #[test]
    #[should_panic(expected = "no reference densities for PVT region 4")]
    fn unknown_region_panics() {
        let fs = BlackOilFluidSystem::new(vec![densities(850.0)]).unwrap();
        let _ = fs.reference_density(Phase::Oil, 4);
    }
}
