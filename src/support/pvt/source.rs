//! Calibration data sources.
//!
//! Constant-compressibility oil is described in ECLIPSE-style input decks by
//! the `PVCDO` keyword: one record per PVT region holding a reference
//! pressure, the formation volume factor at that pressure, the oil
//! compressibility, the oil viscosity, and the oil "viscosibility".
//!
//! PVT models never parse decks themselves. They read calibration data through
//! the [`ParameterSource`] capability, which a deck reader (or a test) provides.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::si::{
    dynamic_viscosity::{centipoise, pascal_second},
    f64::{DynamicViscosity, Pressure, Ratio},
    pressure::{bar, pascal},
    ratio::ratio,
};

use crate::support::units::{ReciprocalPressure, reciprocal_bar};

/// Named fields of a `PVCDO` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PvcdoField {
    /// Reference pressure [Pa].
    ReferencePressure,
    /// Oil formation volume factor at the reference pressure [-].
    OilVolumeFactor,
    /// Oil compressibility [1/Pa].
    OilCompressibility,
    /// Oil viscosity at the reference pressure [Pa·s].
    OilViscosity,
    /// Oil viscosibility [1/Pa].
    OilViscosibility,
}

impl PvcdoField {
    /// All fields in record order.
    pub const ALL: [PvcdoField; 5] = [
        PvcdoField::ReferencePressure,
        PvcdoField::OilVolumeFactor,
        PvcdoField::OilCompressibility,
        PvcdoField::OilViscosity,
        PvcdoField::OilViscosibility,
    ];

    /// Returns the deck item name of this field.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PvcdoField::ReferencePressure => "P_REF",
            PvcdoField::OilVolumeFactor => "OIL_VOL_FACTOR",
            PvcdoField::OilCompressibility => "OIL_COMPRESSIBILITY",
            PvcdoField::OilViscosity => "OIL_VISCOSITY",
            PvcdoField::OilViscosibility => "OIL_VISCOSIBILITY",
        }
    }
}

impl fmt::Display for PvcdoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A keyed-record reader supplying per-region calibration data.
///
/// Values are SI (`Pa`, `1/Pa`, `Pa·s`); unit conversion is the reader's job.
pub trait ParameterSource {
    /// Returns the number of region records available.
    fn num_regions(&self) -> usize;

    /// Returns the SI value of `field` for `region`, or `None` if the region or field is absent.
    fn field(&self, region: usize, field: PvcdoField) -> Option<f64>;
}

/// One `PVCDO` record.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PvcdoRecord {
    pub reference_pressure: Pressure,
    pub oil_volume_factor: Ratio,
    pub oil_compressibility: ReciprocalPressure,
    pub oil_viscosity: DynamicViscosity,
    pub oil_viscosibility: ReciprocalPressure,
}

impl PvcdoRecord {
    /// Creates a record from deck field units: bar, 1/bar, and centipoise.
    #[must_use]
    pub fn from_field_units(
        reference_pressure_bar: f64,
        oil_volume_factor: f64,
        oil_compressibility_per_bar: f64,
        oil_viscosity_cp: f64,
        oil_viscosibility_per_bar: f64,
    ) -> Self {
        Self {
            reference_pressure: Pressure::new::<bar>(reference_pressure_bar),
            oil_volume_factor: Ratio::new::<ratio>(oil_volume_factor),
            oil_compressibility: reciprocal_bar(oil_compressibility_per_bar),
            oil_viscosity: DynamicViscosity::new::<centipoise>(oil_viscosity_cp),
            oil_viscosibility: reciprocal_bar(oil_viscosibility_per_bar),
        }
    }

    /// Returns the SI value of `field`.
    #[must_use]
    pub fn get(&self, field: PvcdoField) -> f64 {
        match field {
            PvcdoField::ReferencePressure => self.reference_pressure.get::<pascal>(),
            PvcdoField::OilVolumeFactor => self.oil_volume_factor.get::<ratio>(),
            PvcdoField::OilCompressibility => self.oil_compressibility.value,
            PvcdoField::OilViscosity => self.oil_viscosity.get::<pascal_second>(),
            PvcdoField::OilViscosibility => self.oil_viscosibility.value,
        }
    }
}

/// An in-memory `PVCDO` table, one record per region in region order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PvcdoTable {
    records: Vec<PvcdoRecord>,
}

impl PvcdoTable {
    #[must_use]
    pub fn new(records: Vec<PvcdoRecord>) -> Self {
        Self { records }
    }

    /// Appends the record for the next region.
    pub fn push(&mut self, record: PvcdoRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn records(&self) -> &[PvcdoRecord] {
        &self.records
    }
}

impl FromIterator<PvcdoRecord> for PvcdoTable {
    fn from_iter<I: IntoIterator<Item = PvcdoRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl ParameterSource for PvcdoTable {
    fn num_regions(&self) -> usize {
        self.records.len()
    }

    fn field(&self, region: usize, field: PvcdoField) -> Option<f64> {
        self.records.get(region).map(|record| record.get(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn converts_field_units_to_si() {
        let record = PvcdoRecord::from_field_units(250.0, 1.05, 1.0e-4, 2.0, 5.0e-5);

        assert_relative_eq!(record.get(PvcdoField::ReferencePressure), 2.5e7);
        assert_relative_eq!(record.get(PvcdoField::OilVolumeFactor), 1.05);
        assert_relative_eq!(
            record.get(PvcdoField::OilCompressibility),
            1.0e-9,
            max_relative = 1e-15
        );
        assert_relative_eq!(record.get(PvcdoField::OilViscosity), 2.0e-3);
        assert_relative_eq!(
            record.get(PvcdoField::OilViscosibility),
            5.0e-10,
            max_relative = 1e-15
        );
    }

    #[test]
    fn table_reads_fields_by_region() {
        let table: PvcdoTable = [
            PvcdoRecord::from_field_units(100.0, 1.1, 1.0e-4, 1.0, 0.0),
            PvcdoRecord::from_field_units(200.0, 1.2, 2.0e-4, 3.0, 1.0e-5),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.num_regions(), 2);
        assert_eq!(table.field(1, PvcdoField::OilVolumeFactor), Some(1.2));
        assert_eq!(table.field(0, PvcdoField::OilViscosibility), Some(0.0));
        assert_eq!(table.field(2, PvcdoField::ReferencePressure), None);
    }

    #[test]
    fn field_names_match_deck_items() {
        let names: Vec<_> = PvcdoField::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            [
                "P_REF",
                "OIL_VOL_FACTOR",
                "OIL_COMPRESSIBILITY",
                "OIL_VISCOSITY",
                "OIL_VISCOSIBILITY"
            ]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn table_deserializes_from_a_list_of_records() {
        let json = r#"[{
            "reference_pressure": 1.0e7,
            "oil_volume_factor": 1.2,
            "oil_compressibility": 1.0e-9,
            "oil_viscosity": 1.0e-3,
            "oil_viscosibility": 5.0e-10
        }]"#;

        let table: PvcdoTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.num_regions(), 1);
        assert_eq!(table.field(0, PvcdoField::ReferencePressure), Some(1.0e7));
    }
}
