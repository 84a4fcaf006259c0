use crate::error::Mismatch;

use std::fmt;
use serde_json::{Number, Value};

/// The representation a tagged field is stored and restored as.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Hash)]
pub enum ValueKind {
    /// Raw passthrough, for nested structures handled by custom logic.
    #[default]
    Object,
    String,
    Int,
    Float,
    Long,
    Boolean,
}

/// A tagged field's value after coercion.
#[derive(PartialEq, Debug, Clone)]
pub enum FieldValue {
    Object(Value),
    String(String),
    Int(i32),
    Float(f32),
    Long(i64),
    Boolean(bool),
}

/// Truncates to the low 32 bits and reinterprets them as a signed integer.
///
/// No range check is done: `3_000_000_000` becomes `-1_294_967_296`.
pub const fn narrow_int(value: i64) -> i32 {
    (value & 0xFFFF_FFFF) as u32 as i32
}

/// Rounds to the nearest representable `f32`.
///
/// Precision loss is silent and magnitudes beyond `f32::MAX` become infinite.
pub const fn narrow_float(value: f64) -> f32 {
    value as f32
}

pub(crate) fn json_type_name(raw: Option<&Value>) -> &'static str {
    match raw {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "bool",
        Some(Value::Number(n)) if n.is_f64() => "float",
        Some(Value::Number(_)) => "integer",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

impl ValueKind {

    pub const ALL: [ValueKind; 6] = [
        ValueKind::Object,
        ValueKind::String,
        ValueKind::Int,
        ValueKind::Float,
        ValueKind::Long,
        ValueKind::Boolean,
    ];

    /// `PartialEq` is not usable in const contexts.
    pub const fn matches(self, other: ValueKind) -> bool {
        self as u8 == other as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Object => "object",
            ValueKind::String => "string",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Long => "long",
            ValueKind::Boolean => "boolean",
        }
    }

    /// Coerces a raw JSON value into this kind. `None` stands for an absent key.
    ///
    /// Only `Object` accepts an absent key, which it maps to `null`.
    pub fn parse(self, raw: Option<&Value>) -> Result<FieldValue, Mismatch> {
        let mismatch = || Mismatch { expected: self, found: json_type_name(raw) };

        match (self, raw) {
            (ValueKind::Object, raw) => Ok(FieldValue::Object(raw.cloned().unwrap_or(Value::Null))),
            (ValueKind::String, Some(Value::String(s))) => Ok(FieldValue::String(s.clone())),
            (ValueKind::Int, Some(Value::Number(n))) => {
                n.as_i64().map(|i| FieldValue::Int(narrow_int(i))).ok_or_else(mismatch)
            },
            (ValueKind::Float, Some(Value::Number(n))) if n.is_f64() => {
                n.as_f64().map(|f| FieldValue::Float(narrow_float(f))).ok_or_else(mismatch)
            },
            (ValueKind::Long, Some(Value::Number(n))) => {
                n.as_i64().map(FieldValue::Long).ok_or_else(mismatch)
            },
            (ValueKind::Boolean, Some(Value::Bool(b))) => Ok(FieldValue::Boolean(*b)),
            _ => Err(mismatch()),
        }
    }

}

impl fmt::Display for ValueKind {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }

}

impl FieldValue {

    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Object(_) => ValueKind::Object,
            FieldValue::String(_) => ValueKind::String,
            FieldValue::Int(_) => ValueKind::Int,
            FieldValue::Float(_) => ValueKind::Float,
            FieldValue::Long(_) => ValueKind::Long,
            FieldValue::Boolean(_) => ValueKind::Boolean,
        }
    }

}

// Going through the shortest decimal form keeps 0.1f32 as 0.1 instead of
// 0.10000000149011612.
fn widen_float(value: f32) -> Value {
    value.to_string()
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map_or(Value::Null, Value::Number)
}

impl From<FieldValue> for Value {

    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Object(v) => v,
            FieldValue::String(s) => Value::String(s),
            FieldValue::Int(i) => Value::from(i),
            FieldValue::Float(f) => widen_float(f),
            FieldValue::Long(l) => Value::from(l),
            FieldValue::Boolean(b) => Value::Bool(b),
        }
    }

}
