//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., pressure, density, viscosity).
//! This module provides quantities that are useful for PVT modeling but aren't
//! included in [`uom`].
//!
//! ## Reciprocal pressure
//!
//! Oil compressibility and "viscosibility" are both measured in 1/Pa.
//! [`uom`] has no named quantity or unit for that dimension, so this module
//! provides the [`ReciprocalPressure`] alias along with constructors:
//!
//! ```
//! use twine_blackoil::support::units::{reciprocal_bar, reciprocal_pascal};
//!
//! let c_o = reciprocal_bar(1.0e-4);
//! assert!((c_o.value - reciprocal_pascal(1.0e-9).value).abs() < 1e-24);
//! ```

mod quantities;

pub use quantities::{ReciprocalPressure, reciprocal_bar, reciprocal_pascal};
