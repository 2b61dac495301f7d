//! Reservoir fluid models.
//!
//! This module provides [`twine_core::Model`] implementations over the black-oil
//! PVT correlations in [`crate::support::pvt`].

mod oil_pvt;

pub use oil_pvt::{OilPvtInput, OilPvtModel, OilPvtOutput};
