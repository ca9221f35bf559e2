use thiserror::Error;

/// Errors that abort emission of a permit
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmitError {
    #[error("Invalid permit type property '{0}'")]
    InvalidPropertyType(String),

    #[error("Filter union must contain at least one shape")]
    EmptyFilterUnion,
}

pub type EmitResult<T> = Result<T, EmitError>;
