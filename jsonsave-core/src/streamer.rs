use crate::{
    Error, Object, Result,
    codec::{Codec, JsonCodec},
    field::JsonSave,
};

use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};
use serde_json::Value;
use tracing::{debug, trace, warn};

/// An entity persisted as one JSON object.
///
/// `serialize`/`deserialize` cover the custom fields; fields tagged with
/// `#[json_save]` are merged in and restored automatically. Tagged values
/// overwrite any key of the same name produced by `serialize`.
pub trait JsonStreamer: JsonSave {

    /// The custom (untagged) part of the persisted object.
    fn serialize(&self) -> Object;

    /// Runs after every tagged field has been assigned from `object`, so it
    /// may read or override them.
    fn deserialize(&mut self, object: &Object) -> Result<()>;

    /// `serialize()` with every tagged field merged in, in declaration order.
    fn to_object(&self) -> Object {
        let mut base = self.serialize();

        for field in Self::TAGGED_FIELDS {
            let value = Value::from(field.get(self));
            if base.insert(field.name().to_string(), value).is_some() {
                warn!(field = field.name(), "tagged field overrides serialized key");
            }
        }

        base
    }

    /// Assigns tagged fields from `object` then calls `deserialize`.
    ///
    /// Stops at the first failing field; fields assigned before it keep their
    /// new values. Use `read_object` to leave `self` untouched on failure.
    fn apply_object(&mut self, object: &Object) -> Result<()> {
        for field in Self::TAGGED_FIELDS {
            let name = field.name();

            let value = field.kind()
                .parse(object.get(name))
                .map_err(|e| Error::field(name, e))?;

            trace!(field = name, kind = %field.kind(), "assigning tagged field");

            field.set(self, value).map_err(|e| Error::field(name, e))?;
        }

        self.deserialize(object)
    }

    /// Applies `object` to a copy of `self` and swaps it in only on success.
    fn read_object(&mut self, object: &Object) -> Result<()>
    where
        Self: Clone,
    {
        let mut staged = self.clone();
        staged.apply_object(object)?;
        *self = staged;
        Ok(())
    }

    fn write_with<C: Codec>(&self, codec: &C, mut writer: impl Write) -> Result<()> {
        let text = codec.encode(&self.to_object());
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn write_to(&self, writer: impl Write) -> Result<()> {
        self.write_with(&JsonCodec, writer)
    }

    /// Truncates and rewrites `path`. Not atomic: a failure midway may leave
    /// a partial file behind.
    fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!(path = %path.display(), tagged = Self::TAGGED_FIELDS.len(), "writing entity");

        let file = File::create(path)?;
        self.write_with(&JsonCodec, file)
    }

    fn read_with<C: Codec>(&mut self, codec: &C, mut reader: impl Read) -> Result<()>
    where
        Self: Clone,
    {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        let object = codec.decode(&text)?;
        self.read_object(&object)
    }

    fn read_from(&mut self, reader: impl Read) -> Result<()>
    where
        Self: Clone,
    {
        self.read_with(&JsonCodec, reader)
    }

    /// Replaces `self` with the entity stored at `path`. On error `self` is
    /// left as it was.
    fn read(&mut self, path: impl AsRef<Path>) -> Result<()>
    where
        Self: Clone,
    {
        let path = path.as_ref();
        debug!(path = %path.display(), tagged = Self::TAGGED_FIELDS.len(), "reading entity");

        let file = File::open(path)?;
        self.read_with(&JsonCodec, file)
    }

    /// Builds a fresh entity from `Default` and reads `path` into it.
    fn load(path: impl AsRef<Path>) -> Result<Self>
    where
        Self: Default,
    {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading entity");

        let text = std::fs::read_to_string(path)?;
        let object = JsonCodec.decode(&text)?;

        let mut entity = Self::default();
        entity.apply_object(&object)?;
        Ok(entity)
    }

}
