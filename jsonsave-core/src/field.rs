use crate::error::Mismatch;
use crate::kind::{FieldValue, ValueKind};

use std::fmt;
use serde_json::Value;

/// Rust types that can back a tagged field, one per [`ValueKind`].
pub trait FieldType: Sized {

    const KIND: ValueKind;

    fn to_field_value(&self) -> FieldValue;
    fn from_field_value(value: FieldValue) -> Result<Self, Mismatch>;

}

macro_rules! impl_field_type {
    ($( $ty:ty => $kind:ident ;)*) => {
        $(
            impl FieldType for $ty {

                const KIND: ValueKind = ValueKind::$kind;

                fn to_field_value(&self) -> FieldValue {
                    FieldValue::$kind(self.clone())
                }

                fn from_field_value(value: FieldValue) -> Result<Self, Mismatch> {
                    match value {
                        FieldValue::$kind(v) => Ok(v),
                        other => Err(Mismatch { expected: Self::KIND, found: other.kind().name() }),
                    }
                }

            }
        )*
    }
}

impl_field_type! {
    Value => Object;
    String => String;
    i32 => Int;
    f32 => Float;
    i64 => Long;
    bool => Boolean;
}

/// Descriptor of one tagged field: its key, its kind and accessors into `T`.
pub struct TaggedField<T> {
    name: &'static str,
    kind: ValueKind,
    get: fn(&T) -> FieldValue,
    set: fn(&mut T, FieldValue) -> Result<(), Mismatch>,
}

impl<T> TaggedField<T> {

    /// Builds a descriptor for a field of Rust type `F`.
    ///
    /// Panics (at compile time when used in a const) if `F` cannot hold `kind`.
    pub const fn new<F: FieldType>(
        name: &'static str,
        kind: ValueKind,
        get: fn(&T) -> FieldValue,
        set: fn(&mut T, FieldValue) -> Result<(), Mismatch>,
    ) -> Self {
        assert!(kind.matches(F::KIND), "json_save kind does not match the field's Rust type");
        TaggedField { name, kind, get, set }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn get(&self, target: &T) -> FieldValue {
        (self.get)(target)
    }

    pub fn set(&self, target: &mut T, value: FieldValue) -> Result<(), Mismatch> {
        (self.set)(target, value)
    }

}

impl<T> fmt::Debug for TaggedField<T> {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedField")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }

}

/// Types with a table of tagged fields, usually via `#[derive(JsonSave)]`.
pub trait JsonSave: Sized + 'static {

    /// Tagged fields in declaration order.
    const TAGGED_FIELDS: &'static [TaggedField<Self>];

}

pub fn discover<T: JsonSave>(_entity: &T) -> &'static [TaggedField<T>] {
    T::TAGGED_FIELDS
}
