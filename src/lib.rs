//! # Twine Black-Oil
//!
//! Black-oil pressure-volume-temperature (PVT) correlations and models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: The PVT correlations, fluid-system collaborators, and the
//!   utilities they are built on.
//!
//! ## Lifecycle
//!
//! PVT models are calibrated once (sized per region, then populated through
//! setters or a [`ParameterSource`](support::pvt::ParameterSource)) and then
//! evaluated many times through `&self`. Evaluation is closed-form arithmetic
//! and never blocks, so a calibrated model can be shared across threads.
//!
//! Note: Modules in [`support`] are part of the public API, but their APIs
//! are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
