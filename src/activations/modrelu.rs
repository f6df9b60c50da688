use std::fmt;

use ndarray::{ArrayD, ArrayView1, ArrayViewD};
use num_complex::Complex32;

use crate::complex::{complex_abs, complex_norm, relu};
use crate::error::Result;
use super::unit::{ActivationUnit, ChannelBias};

/// Modulus-gated rectified linear unit.
///
/// `ModReLU(z) = relu(|z| + b) * z/|z|`: the magnitude is shifted by a
/// learned per-channel bias and rectified, while the phase passes through
/// unchanged. At the origin the output is 0 (see
/// [`complex_norm`](crate::complex::complex_norm)).
#[derive(Clone, Debug)]
pub struct ModRelu {
    bias: ChannelBias,
    trainable: bool,
}

impl ModRelu {
    pub fn new() -> Self {
        Self::with_bias(0.0, true)
    }

    /// Create a unit with a custom bias initial value and trainable flag.
    pub fn with_bias(bias_init: f32, trainable: bool) -> Self {
        ModRelu {
            bias: ChannelBias::new(bias_init),
            trainable,
        }
    }
}

impl Default for ModRelu {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivationUnit for ModRelu {
    fn name(&self) -> &str {
        "ModReLU"
    }

    fn call(&mut self, z: ArrayViewD<'_, Complex32>) -> Result<ArrayD<Complex32>> {
        let bias = self.bias.materialize(z.shape())?;
        let magnitude = relu(&(&complex_abs(z.view()) + bias));
        let mut out = complex_norm(z);
        out.zip_mut_with(&magnitude, |phase, &m| *phase *= m);
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

impl fmt::Display for ModRelu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ModReLU: bias_init={}, trainable={}",
            self.bias.init_value(),
            self.trainable
        )
    }
}
