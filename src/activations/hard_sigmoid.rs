use std::fmt;

use ndarray::{ArrayD, ArrayView1, ArrayViewD};
use num_complex::Complex32;

use crate::complex::{complex_abs, hard_sigmoid};
use crate::error::Result;
use super::unit::{ActivationUnit, ChannelBias};

/// Hard-sigmoid gate over the complex magnitude.
///
/// `HardSigmoid(z) = hard_sigmoid(|z| + b)` returned as a complex number
/// with zero imaginary part. Unlike the other units this discards phase
/// entirely; the output is a real-valued weight in [0, 1].
#[derive(Clone, Debug)]
pub struct HardSigmoid {
    bias: ChannelBias,
    trainable: bool,
}

impl HardSigmoid {
    pub fn new() -> Self {
        Self::with_bias(0.1, true)
    }

    /// Create a unit with a custom bias initial value and trainable flag.
    pub fn with_bias(bias_init: f32, trainable: bool) -> Self {
        HardSigmoid {
            bias: ChannelBias::new(bias_init),
            trainable,
        }
    }
}

impl Default for HardSigmoid {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivationUnit for HardSigmoid {
    fn name(&self) -> &str {
        "hard_sigmoid"
    }

    fn call(&mut self, z: ArrayViewD<'_, Complex32>) -> Result<ArrayD<Complex32>> {
        let bias = self.bias.materialize(z.shape())?;
        let gate = hard_sigmoid(&(&complex_abs(z) + bias));
        Ok(gate.mapv(|g| Complex32::new(g, 0.0)))
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

impl fmt::Display for HardSigmoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HardSigmoid: bias_init={}, trainable={}",
            self.bias.init_value(),
            self.trainable
        )
    }
}
