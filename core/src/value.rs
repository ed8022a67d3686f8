//! Value types for element properties.
//!
//! Values are the atomic data stored in an element's schema. Canopy
//! supports scalar kinds (String, Int, Float, Bool) and two compound
//! kinds (Vec3, Color). `Null` marks a cleared property: writing it
//! removes the entry, and it is how the inverse of a first-write update
//! expresses "unset".

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 3D vector. Used for positions, Euler rotations and scales.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// The identity scale.
    pub const ONE: Vec3 = Vec3 {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// An RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for ColorRgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// A value that can be stored in an element property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Cleared/absent value. Writing Null removes the property.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// 3D vector.
    Vec3(Vec3),
    /// RGBA color.
    Color(ColorRgba),
}

impl Value {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is an integer value.
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns true if this is a float value.
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is a vector value.
    pub fn is_vec3(&self) -> bool {
        matches!(self, Value::Vec3(_))
    }

    /// Returns true if this is a color value.
    pub fn is_color(&self) -> bool {
        matches!(self, Value::Color(_))
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as float if this is a Float value.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as string reference if this is a String value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as vector if this is a Vec3 value.
    pub fn as_vec3(&self) -> Option<Vec3> {
        match self {
            Value::Vec3(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as color if this is a Color value.
    pub fn as_color(&self) -> Option<ColorRgba> {
        match self {
            Value::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Returns the kind name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Vec3(_) => "Vec3",
            Value::Color(_) => "Color",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Vec3(v) => write!(f, "{}", v),
            Value::Color(c) => write!(f, "{}", c),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec3> for Value {
    fn from(v: Vec3) -> Self {
        Value::Vec3(v)
    }
}

impl From<ColorRgba> for Value {
    fn from(c: ColorRgba) -> Self {
        Value::Color(c)
    }
}

/// Conversion between property values and plain Rust types.
///
/// Implemented for every primitive kind. `default_read()` is the defined
/// value a typed read yields for an absent property.
pub trait PropertyKind: Sized {
    /// Kind name used in mismatch diagnostics.
    const KIND: &'static str;

    /// Extract a value of this kind, or None if the value is another kind.
    fn from_value(value: &Value) -> Option<Self>;

    /// Wrap into a Value.
    fn into_value(self) -> Value;

    /// The value a read of an absent property yields.
    fn default_read() -> Self;
}

impl PropertyKind for String {
    const KIND: &'static str = "String";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(|s| s.to_string())
    }

    fn into_value(self) -> Value {
        Value::String(self)
    }

    fn default_read() -> Self {
        String::new()
    }
}

impl PropertyKind for i64 {
    const KIND: &'static str = "Int";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_int()
    }

    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn default_read() -> Self {
        0
    }
}

impl PropertyKind for f64 {
    const KIND: &'static str = "Float";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_float()
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }

    fn default_read() -> Self {
        0.0
    }
}

impl PropertyKind for bool {
    const KIND: &'static str = "Bool";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn default_read() -> Self {
        false
    }
}

impl PropertyKind for Vec3 {
    const KIND: &'static str = "Vec3";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_vec3()
    }

    fn into_value(self) -> Value {
        Value::Vec3(self)
    }

    fn default_read() -> Self {
        Vec3::ZERO
    }
}

impl PropertyKind for ColorRgba {
    const KIND: &'static str = "Color";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_color()
    }

    fn into_value(self) -> Value {
        Value::Color(self)
    }

    fn default_read() -> Self {
        ColorRgba::default()
    }
}

/// Property bag mapping names to values.
pub type Schema = std::collections::HashMap<String, Value>;

/// Convenience macro for building a Schema.
///
/// # Example
/// ```
/// use canopy_core::schema;
/// let s = schema! { "name" => "lamp", "lit" => true };
/// assert_eq!(s.len(), 2);
/// ```
#[macro_export]
macro_rules! schema {
    () => {
        std::collections::HashMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = std::collections::HashMap::new();
            $(
                map.insert($key.to_string(), $crate::Value::from($value));
            )+
            map
        }
    };
}
