use std::fmt;

use ndarray::{ArrayD, ArrayView1, ArrayViewD};
use num_complex::Complex32;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CvactError, Result};
use super::cardioid::Cardioid;
use super::hard_sigmoid::HardSigmoid;
use super::modrelu::ModRelu;
use super::unit::ActivationUnit;

/// An activation identifier as supplied by model-construction code.
///
/// `None` selects the identity unit, `Name` goes through the lookup table,
/// and `Unit` passes an already-built unit through the resolver unchanged.
#[derive(Clone)]
pub enum Identifier {
    None,
    Name(String),
    Unit(Box<dyn ActivationUnit>),
}

impl Identifier {
    /// Interpret a JSON value as an activation identifier.
    ///
    /// Model configs store activations as either `null` or a name string;
    /// any other JSON type fails with an error naming the received type.
    pub fn from_json(value: &serde_json::Value) -> Result<Identifier> {
        match value {
            serde_json::Value::Null => Ok(Identifier::None),
            serde_json::Value::String(s) => Ok(Identifier::Name(s.clone())),
            serde_json::Value::Bool(_) => Err(CvactError::invalid_identifier("bool")),
            serde_json::Value::Number(_) => Err(CvactError::invalid_identifier("number")),
            serde_json::Value::Array(_) => Err(CvactError::invalid_identifier("array")),
            serde_json::Value::Object(_) => Err(CvactError::invalid_identifier("object")),
        }
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::None => f.write_str("None"),
            Identifier::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Identifier::Unit(unit) => f.debug_tuple("Unit").field(&unit.name()).finish(),
        }
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::Name(name.to_string())
    }
}

impl From<Option<&str>> for Identifier {
    fn from(name: Option<&str>) -> Self {
        match name {
            Some(name) => Identifier::Name(name.to_string()),
            None => Identifier::None,
        }
    }
}

/// Resolve an identifier to a runnable activation unit.
pub fn resolve(identifier: Identifier) -> Result<Activation> {
    match identifier {
        Identifier::None => Ok(Activation::Identity),
        Identifier::Name(name) => Activation::from_name(&name),
        Identifier::Unit(unit) => Ok(Activation::Custom(unit)),
    }
}

/// The sealed set of activation unit kinds.
///
/// Stateless kinds (`Identity`, `CRelu`) are plain variants; bias-carrying
/// kinds hold their unit, and `Custom` holds any [`ActivationUnit`]
/// implementation handed to the resolver directly.
#[derive(Clone)]
pub enum Activation {
    Identity,
    CRelu,
    ModRelu(ModRelu),
    Cardioid(Cardioid),
    HardSigmoid(HardSigmoid),
    Custom(Box<dyn ActivationUnit>),
}

impl Activation {
    /// Look up an activation by its serialized name, with default
    /// configuration.
    ///
    /// Accepted names: `"ModReLU"`/`"modrelu"`, `"cReLU"`/`"crelu"`,
    /// `"hard_sigmoid"`, `"cardioid"`, `"identity"`.
    pub fn from_name(name: &str) -> Result<Activation> {
        match name {
            "ModReLU" | "modrelu" => Ok(Activation::ModRelu(ModRelu::new())),
            "cReLU" | "crelu" => Ok(Activation::CRelu),
            "hard_sigmoid" => Ok(Activation::HardSigmoid(HardSigmoid::new())),
            "cardioid" => Ok(Activation::Cardioid(Cardioid::new())),
            "identity" => Ok(Activation::Identity),
            other => Err(CvactError::unknown_activation(other)),
        }
    }

    /// Canonical name of the unit, used for dispatch and serialization.
    pub fn name(&self) -> &str {
        match self {
            Activation::Identity => "identity",
            Activation::CRelu => "cReLU",
            Activation::ModRelu(unit) => unit.name(),
            Activation::Cardioid(unit) => unit.name(),
            Activation::HardSigmoid(unit) => unit.name(),
            Activation::Custom(unit) => unit.name(),
        }
    }

    /// Apply the activation elementwise to a complex tensor.
    pub fn call(&mut self, z: ArrayViewD<'_, Complex32>) -> Result<ArrayD<Complex32>> {
        match self {
            Activation::Identity => Ok(z.to_owned()),
            Activation::CRelu => {
                Ok(z.map(|v| Complex32::new(v.re.max(0.0), v.im.max(0.0))))
            }
            Activation::ModRelu(unit) => unit.call(z),
            Activation::Cardioid(unit) => unit.call(z),
            Activation::HardSigmoid(unit) => unit.call(z),
            Activation::Custom(unit) => unit.call(z),
        }
    }

    /// Per-channel bias of the underlying unit, once materialized.
    pub fn bias(&self) -> Option<ArrayView1<'_, f32>> {
        match self {
            Activation::Identity | Activation::CRelu => None,
            Activation::ModRelu(unit) => unit.bias(),
            Activation::Cardioid(unit) => unit.bias(),
            Activation::HardSigmoid(unit) => unit.bias(),
            Activation::Custom(unit) => unit.bias(),
        }
    }

    /// Whether the underlying unit's bias participates in optimization.
    pub fn trainable(&self) -> bool {
        match self {
            Activation::Identity | Activation::CRelu => false,
            Activation::ModRelu(unit) => unit.trainable(),
            Activation::Cardioid(unit) => unit.trainable(),
            Activation::HardSigmoid(unit) => unit.trainable(),
            Activation::Custom(unit) => unit.trainable(),
        }
    }
}

impl ActivationUnit for Activation {
    fn name(&self) -> &str {
        Activation::name(self)
    }

    fn call(&mut self, z: ArrayViewD<'_, Complex32>) -> Result<ArrayD<Complex32>> {
        Activation::call(self, z)
    }

    fn bias(&self) -> Option<ArrayView1<'_, f32>> {
        Activation::bias(self)
    }

    fn trainable(&self) -> bool {
        Activation::trainable(self)
    }

    fn clone_box(&self) -> Box<dyn ActivationUnit> {
        Box::new(self.clone())
    }
}

impl From<ModRelu> for Activation {
    fn from(unit: ModRelu) -> Self {
        Activation::ModRelu(unit)
    }
}

impl From<Cardioid> for Activation {
    fn from(unit: Cardioid) -> Self {
        Activation::Cardioid(unit)
    }
}

impl From<HardSigmoid> for Activation {
    fn from(unit: HardSigmoid) -> Self {
        Activation::HardSigmoid(unit)
    }
}

impl From<Box<dyn ActivationUnit>> for Activation {
    fn from(unit: Box<dyn ActivationUnit>) -> Self {
        Activation::Custom(unit)
    }
}

impl fmt::Debug for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::Identity => f.write_str("Identity"),
            Activation::CRelu => f.write_str("CRelu"),
            Activation::ModRelu(unit) => fmt::Debug::fmt(unit, f),
            Activation::Cardioid(unit) => fmt::Debug::fmt(unit, f),
            Activation::HardSigmoid(unit) => fmt::Debug::fmt(unit, f),
            Activation::Custom(unit) => f.debug_tuple("Custom").field(&unit.name()).finish(),
        }
    }
}

// An activation serializes to its name string. Deserialization goes back
// through the lookup table, so a round trip preserves the unit kind but
// restores default configuration; callers needing custom bias_init or
// trainable flags must persist those separately.
impl Serialize for Activation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Activation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Activation::from_name(&name).map_err(D::Error::custom)
    }
}
