use std::fmt;

use ndarray::{ArrayD, ArrayView1, ArrayViewD};
use num_complex::Complex32;

use crate::complex::complex_angle;
use crate::error::Result;
use super::unit::{ActivationUnit, ChannelBias};

/// Phase-gated cardioid activation.
///
/// `Cardioid(z) = 0.5 * (1 + cos(angle z)) * z`: the gate is 1 at phase 0
/// and falls smoothly to 0 at phase ±π. On the real line this reduces to
/// ReLU. A per-channel bias is materialized on first call but does not enter
/// the forward transform.
#[derive(Clone, Debug)]
pub struct Cardioid {
    bias: ChannelBias,
    trainable: bool,
}

impl Cardioid {
    pub fn new() -> Self {
        Self::with_bias(2.0, true)
    }

    /// Create a unit with a custom bias initial value and trainable flag.
    pub fn with_bias(bias_init: f32, trainable: bool) -> Self {
        Cardioid {
            bias: ChannelBias::new(bias_init),
            trainable,
        }
    }
}

impl Default for Cardioid {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivationUnit for Cardioid {
    fn name(&self) -> &str {
        "cardioid"
    }

    fn call(&mut self, z: ArrayViewD<'_, Complex32>) -> Result<ArrayD<Complex32>> {
        // Binds the channel shape and registers the parameter; the gate
        // below is a function of phase only.
        self.bias.materialize(z.shape())?;
        let phase = complex_angle(z.view());
        let mut out = z.to_owned();
        out.zip_mut_with(&phase, |v, &p| *v *= 0.5 * (1.0 + p.cos()));
        Ok(out)
    }

    fn bias(&self) -> Option<ArrayView1<'_, f32>> {
        self.bias.get()
    }

    fn trainable(&self) -> bool {
        self.trainable
    }

    fn clone_box(&self) -> Box<dyn ActivationUnit> {
        Box::new(self.clone())
    }
}

impl fmt::Display for Cardioid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cardioid: bias_init={}, trainable={}",
            self.bias.init_value(),
            self.trainable
        )
    }
}
