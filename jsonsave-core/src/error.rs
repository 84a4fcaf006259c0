use crate::kind::ValueKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Type mismatch on field `{field}`: {source}")]
    TypeMismatch {
        field: String,
        #[source]
        source: Mismatch,
    },

    #[error("ParseError: {0}")]
    Parse(String),

    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),

    #[error("DeserializeError: {0}")]
    Deserialize(String),
}

impl Error {

    /// Failure raised by an entity's own `deserialize` logic.
    pub fn custom(msg: impl std::fmt::Display) -> Self {
        Error::Deserialize(msg.to_string())
    }

    pub(crate) fn field(field: &str, source: Mismatch) -> Self {
        Error::TypeMismatch { field: field.to_string(), source }
    }

}

/// A raw JSON value (or a typed field value) that does not fit the expected kind.
#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
#[error("expected {expected}, found {found}")]
pub struct Mismatch {
    pub expected: ValueKind,
    pub found: &'static str,
}
