//! Elementwise math over complex tensors.
//!
//! Complex tensors are dynamic-dimensional arrays of [`Complex32`]; every
//! helper here maps elementwise and preserves the input shape.

use ndarray::{ArrayD, ArrayViewD};
use num_complex::Complex32;

/// Elementwise modulus `|z|`.
pub fn complex_abs(z: ArrayViewD<'_, Complex32>) -> ArrayD<f32> {
    z.map(|v| v.norm())
}

/// Elementwise unit-phase vector `z / |z|`.
///
/// At the origin the quotient is undefined; this returns exactly 0 there so
/// that magnitude-gated activations produce 0 rather than NaN.
pub fn complex_norm(z: ArrayViewD<'_, Complex32>) -> ArrayD<Complex32> {
    z.map(|v| {
        let modulus = v.norm();
        if modulus == 0.0 {
            Complex32::new(0.0, 0.0)
        } else {
            v / modulus
        }
    })
}

/// Elementwise argument (phase angle) of `z`, in radians.
pub fn complex_angle(z: ArrayViewD<'_, Complex32>) -> ArrayD<f32> {
    z.map(|v| v.arg())
}

/// Elementwise rectifier `max(0, x)`.
pub fn relu(x: &ArrayD<f32>) -> ArrayD<f32> {
    x.mapv(|v| v.max(0.0))
}

/// Elementwise hard sigmoid: the piecewise-linear approximation of the
/// logistic sigmoid, `clamp(0.2x + 0.5, 0, 1)`.
pub fn hard_sigmoid(x: &ArrayD<f32>) -> ArrayD<f32> {
    x.mapv(|v| (0.2 * v + 0.5).clamp(0.0, 1.0))
}
