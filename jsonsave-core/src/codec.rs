use crate::{Error, Object, Result, render::render};

use serde_json::Value;

/// Turns whole documents into objects and back.
pub trait Codec {

    fn decode(&self, text: &str) -> Result<Object>;
    fn encode(&self, object: &Object) -> String;

}

/// serde_json parsing with canonical tab-indented output.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {

    fn decode(&self, text: &str) -> Result<Object> {
        let value: Value = serde_json::from_str(text).map_err(|e| {
            Error::Parse(e.to_string())
        })?;

        match value {
            Value::Object(object) => Ok(object),
            _ => Err(Error::Parse("top-level value is not an object".into())),
        }
    }

    fn encode(&self, object: &Object) -> String {
        render(object, 0)
    }

}
