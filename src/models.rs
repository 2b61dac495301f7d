//! Public Twine models.
//!
//! Models are organized into domain-specific submodules (e.g., `reservoir`).
//!
//! # Model structure
//!
//! The [`twine_core::Model`] implementations are thin adapters that delegate to
//! the computational APIs in [`crate::support`]. A single support API may be
//! exposed through several adapters.

pub mod reservoir;
