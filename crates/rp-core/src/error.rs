/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while loading or querying reference data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No class with the given name exists in the catalog.
    #[error("class not found: \"{0}\"")]
    NotFound(String),

    /// The catalog contains no classes.
    #[error("class catalog is empty")]
    Empty,

    /// Two classes share the same name.
    #[error("duplicate class: \"{0}\"")]
    DuplicateClass(String),

    /// A class record is structurally valid JSON but violates a data rule.
    #[error("invalid class data: {0}")]
    InvalidData(String),

    /// A name could not be resolved to one of the eight attributes.
    #[error("unknown attribute: \"{0}\"")]
    UnknownAttribute(String),

    /// The reference data is not well-formed JSON.
    #[error("failed to parse class data: {0}")]
    Parse(#[from] serde_json::Error),
}
