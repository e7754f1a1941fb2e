use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// A field the schema declares non-null has no stored value.
    #[error("Cannot return null for non-nullable field {type_name}.{field}.")]
    NullField {
        type_name: &'static str,
        field: &'static str,
    },

    #[error("Cannot assign another id in the {collection} collection")]
    IdSpaceExhausted { collection: &'static str },
}

pub type Result<T> = std::result::Result<T, LibraryError>;

/// Unwraps a stored value for a field declared non-null.
pub fn non_null<T>(value: Option<T>, type_name: &'static str, field: &'static str) -> Result<T> {
    value.ok_or(LibraryError::NullField { type_name, field })
}
