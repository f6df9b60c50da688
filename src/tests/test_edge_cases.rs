use ndarray::{arr0, ArrayD, IxDyn};
use num_complex::Complex32;

use crate::activations::{Activation, ActivationUnit, ChannelBias, HardSigmoid, ModRelu};
use crate::error::CvactError;

fn filled(shape: &[usize]) -> ArrayD<Complex32> {
    ArrayD::from_elem(IxDyn(shape), Complex32::new(1.0, -1.0))
}

#[test]
fn test_first_call_binds_trailing_dimension() {
    let mut unit = ModRelu::new();
    unit.call(filled(&[2, 4]).view()).unwrap();

    // Same trailing dimension, different leading shape: fine.
    unit.call(filled(&[7, 4]).view()).unwrap();
    unit.call(filled(&[3, 2, 4]).view()).unwrap();

    // Different trailing dimension: explicit error, never a re-build.
    let err = unit.call(filled(&[2, 3]).view()).unwrap_err();
    assert!(matches!(err, CvactError::ShapeMismatch { .. }));
    assert!(err.to_string().contains("trailing dimension 4"));
    assert!(err.to_string().contains("trailing dimension 3"));

    // The original bias shape is untouched by the failed call.
    assert_eq!(unit.bias().unwrap().len(), 4);
}

#[test]
fn test_hard_sigmoid_shape_binding() {
    let mut unit = HardSigmoid::new();
    unit.call(filled(&[5, 8]).view()).unwrap();
    let err = unit.call(filled(&[5, 16]).view()).unwrap_err();
    assert!(matches!(err, CvactError::ShapeMismatch { .. }));
}

#[test]
fn test_zero_dimensional_input_rejected_by_bias_units() {
    let z = arr0(Complex32::new(1.0, 0.0)).into_dyn();
    let mut unit = ModRelu::new();
    let err = unit.call(z.view()).unwrap_err();
    assert!(matches!(err, CvactError::ShapeMismatch { .. }));
    assert!(unit.bias().is_none());
}

#[test]
fn test_zero_dimensional_input_fine_for_stateless_units() {
    let z = arr0(Complex32::new(-1.0, 2.0)).into_dyn();
    let mut crelu = Activation::CRelu;
    let out = crelu.call(z.view()).unwrap();
    assert_eq!(out.shape(), z.shape());
    assert_eq!(out[IxDyn(&[])], Complex32::new(0.0, 2.0));
}

#[test]
fn test_empty_tensors_pass_through() {
    // A trailing dimension of zero channels builds an empty bias.
    let z = filled(&[3, 0]);
    for name in ["identity", "crelu", "modrelu", "cardioid", "hard_sigmoid"] {
        let mut unit = Activation::from_name(name).unwrap();
        let out = unit.call(z.view()).unwrap();
        assert_eq!(out.shape(), z.shape(), "shape changed for {}", name);
    }
}

#[test]
fn test_channel_bias_materializes_once() {
    let mut bias = ChannelBias::new(0.5);
    assert!(bias.get().is_none());
    assert_eq!(bias.init_value(), 0.5);

    bias.materialize(&[2, 3]).unwrap();
    let built = bias.get().unwrap().to_owned();
    assert_eq!(built.len(), 3);

    // Re-materializing with a compatible shape reuses the same vector.
    bias.materialize(&[9, 3]).unwrap();
    assert_eq!(bias.get().unwrap(), built.view());

    assert!(bias.materialize(&[2, 5]).is_err());
    assert!(bias.materialize(&[]).is_err());
}

#[test]
fn test_cloned_unit_keeps_built_state() {
    let mut unit = ModRelu::with_bias(-1.0, true);
    unit.call(filled(&[2, 6]).view()).unwrap();

    let clone = unit.clone();
    assert_eq!(clone.bias().unwrap(), unit.bias().unwrap());

    // The clone is bound to the same trailing dimension as its source.
    let mut clone = clone;
    assert!(clone.call(filled(&[2, 7]).view()).is_err());
}

#[test]
fn test_nan_free_at_origin() {
    let z = ArrayD::from_elem(IxDyn(&[4]), Complex32::new(0.0, 0.0));
    for name in ["crelu", "modrelu", "cardioid", "hard_sigmoid"] {
        let mut unit = Activation::from_name(name).unwrap();
        let out = unit.call(z.view()).unwrap();
        for v in out.iter() {
            assert!(v.re.is_finite() && v.im.is_finite(), "{} produced NaN", name);
        }
    }
}
