use thiserror::Error;

use super::PvcdoField;

/// Errors that may occur while calibrating or addressing a PVT model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PvtError {
    /// The region index is not in `[0, num_regions)`.
    #[error("PVT region {region} out of range (model has {num_regions} regions)")]
    RegionOutOfRange { region: usize, num_regions: usize },

    /// The parameter source has no record for the region.
    #[error("no PVT record for region {region}")]
    MissingRegion { region: usize },

    /// The parameter source record lacks a required field.
    #[error("PVT record for region {region} is missing {field}")]
    MissingField { region: usize, field: PvcdoField },
}
