//! # cvact - Complex-Valued Activation Functions
//!
//! `cvact` provides the activation layer used by complex-valued neural
//! networks, such as the unrolled reconstruction networks applied to
//! magnetic-resonance imaging. Real-valued activations discard phase
//! information; the units in this crate operate on complex tensors directly
//! and make an explicit choice about what happens to magnitude and phase.
//!
//! ## Key Features
//!
//! - **Four complex activations**: cReLU, ModReLU, Cardioid and HardSigmoid,
//!   plus an Identity pass-through
//! - **String resolver**: map serialized activation names to units, with the
//!   same alias set accepted by common complex-network configs
//! - **Lazy per-channel bias**: bias-carrying units materialize their bias
//!   vector from the input's trailing (channel) dimension on first call
//! - **Custom units**: any type implementing [`ActivationUnit`] slots into
//!   the same dispatch as the built-in variants
//!
//! ## Quick Start
//!
//! ```rust
//! use cvact::{resolve, Identifier};
//! use ndarray::array;
//! use num_complex::Complex32;
//!
//! let mut act = resolve(Identifier::Name("modrelu".into())).unwrap();
//! assert_eq!(act.name(), "ModReLU");
//!
//! let z = array![[Complex32::new(3.0, 4.0), Complex32::new(-1.0, 0.0)]].into_dyn();
//! let out = act.call(z.view()).unwrap();
//! assert_eq!(out.shape(), z.shape());
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Activation units and the identifier resolver
//! - [`complex`] - Elementwise complex-tensor math helpers
//! - [`error`] - Error types and result handling

pub mod activations;
pub mod complex;
pub mod error;

pub use activations::{resolve, Activation, ActivationUnit, Identifier};
pub use error::{CvactError, Result};

#[cfg(test)]
mod tests;
