pub mod error;
pub use error::{Error, Mismatch, Result};

pub mod kind;
pub use kind::{FieldValue, ValueKind, narrow_float, narrow_int};

pub mod field;
pub use field::{FieldType, JsonSave, TaggedField, discover};

pub mod render;
pub use render::render;

pub mod codec;
pub use codec::{Codec, JsonCodec};

pub mod streamer;
pub use streamer::JsonStreamer;

pub use serde_json::{self, Value};

/// Insertion-ordered JSON object exchanged with entities and the codec.
pub type Object = serde_json::Map<String, Value>;
