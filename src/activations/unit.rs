use ndarray::{Array1, ArrayD, ArrayView1, ArrayViewD};
use num_complex::Complex32;

use crate::error::{CvactError, Result};

/// Trait defining the interface for complex activation units.
///
/// `call` takes `&mut self` because bias-carrying units materialize their
/// bias vector on first invocation; the exclusive receiver makes that
/// transition race-free when a unit is shared behind a lock.
pub trait ActivationUnit: Send + Sync {
    /// Canonical name of the unit, used for dispatch and serialization
    fn name(&self) -> &str;

    /// Apply the activation elementwise, returning a tensor of the same shape
    fn call(&mut self, z: ArrayViewD<'_, Complex32>) -> Result<ArrayD<Complex32>>;

    /// Per-channel bias, once materialized by the first call
    fn bias(&self) -> Option<ArrayView1<'_, f32>> {
        None
    }

    /// Whether the bias participates in gradient-based optimization
    fn trainable(&self) -> bool {
        false
    }

    /// Clone the unit into a boxed trait object
    fn clone_box(&self) -> Box<dyn ActivationUnit>;
}

impl Clone for Box<dyn ActivationUnit> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A per-channel bias vector created lazily from the input's trailing
/// dimension.
///
/// The first call to [`materialize`](ChannelBias::materialize) binds the
/// channel count; every later call must present the same trailing dimension
/// or it fails with a shape mismatch instead of silently broadcasting.
#[derive(Clone, Debug)]
pub struct ChannelBias {
    init: f32,
    bias: Option<Array1<f32>>,
}

impl ChannelBias {
    pub fn new(init: f32) -> Self {
        ChannelBias { init, bias: None }
    }

    /// Initial value every bias element is filled with at build time
    pub fn init_value(&self) -> f32 {
        self.init
    }

    /// The bias vector, if already built
    pub fn get(&self) -> Option<ArrayView1<'_, f32>> {
        self.bias.as_ref().map(Array1::view)
    }

    /// Return the bias for an input of the given shape, building it on the
    /// first call.
    pub fn materialize(&mut self, shape: &[usize]) -> Result<&Array1<f32>> {
        let channels = *shape.last().ok_or_else(|| {
            CvactError::shape_mismatch(
                "input with at least one axis".to_string(),
                "0-dimensional input".to_string(),
            )
        })?;
        if let Some(bias) = &self.bias {
            if bias.len() != channels {
                return Err(CvactError::shape_mismatch(
                    format!("trailing dimension {}", bias.len()),
                    format!("trailing dimension {}", channels),
                ));
            }
        }
        Ok(self
            .bias
            .get_or_insert_with(|| Array1::from_elem(channels, self.init)))
    }
}
