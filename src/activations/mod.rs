//! # Complex Activation Functions Module
//!
//! This module provides the activation units applied inside complex-valued
//! network layers, together with the resolver that maps serialized
//! identifiers to units.
//!
//! ## Available Activations
//!
//! - **Identity**: pass-through, `z`
//! - **cReLU**: `complex(relu(re z), relu(im z))` - rectifies real and
//!   imaginary parts independently
//! - **ModReLU**: `relu(|z| + b) * z/|z|` - rectifies the magnitude, keeps
//!   the phase, with a learned per-channel bias `b`
//! - **Cardioid**: `0.5 * (1 + cos(angle z)) * z` - smooth phase-dependent
//!   gate, fully open at phase 0 and closed at phase ±π
//! - **HardSigmoid**: `hard_sigmoid(|z| + b)` - real-valued gate in [0, 1],
//!   returned as a complex number with zero imaginary part
//!
//! ## Usage Example
//!
//! ```rust
//! use cvact::activations::{resolve, Identifier};
//! use ndarray::array;
//! use num_complex::Complex32;
//!
//! // Resolve units from serialized names; `None` means identity
//! let mut crelu = resolve(Identifier::Name("crelu".into())).unwrap();
//! let identity = resolve(Identifier::None).unwrap();
//! assert_eq!(identity.name(), "identity");
//!
//! let z = array![Complex32::new(-1.0, 2.0)].into_dyn();
//! let out = crelu.call(z.view()).unwrap();
//! assert_eq!(out[0], Complex32::new(0.0, 2.0));
//! ```
//!
//! ## Choosing an Activation Function
//!
//! - **cReLU** treats the complex plane as two real channels; phase is not
//!   preserved but it is cheap and a common default
//! - **ModReLU** preserves phase exactly and only gates the magnitude, which
//!   suits reconstruction tasks where phase carries signal
//! - **Cardioid** is smooth everywhere and reduces to ReLU on the real line
//! - **HardSigmoid** collapses to a real-valued gate; use it where a bounded
//!   attention-style weight is wanted rather than a complex feature map

pub mod cardioid;
pub mod functions;
pub mod hard_sigmoid;
pub mod modrelu;
pub mod unit;

pub use cardioid::Cardioid;
pub use functions::{resolve, Activation, Identifier};
pub use hard_sigmoid::HardSigmoid;
pub use modrelu::ModRelu;
pub use unit::{ActivationUnit, ChannelBias};
