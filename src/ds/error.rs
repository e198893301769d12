use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObjectError {
    /// `override_methods` named a member that is missing or not callable.
    #[error("no function to override: {0}")]
    NotOverridable(String),

    #[error("already defined: {0}")]
    AlreadyDefined(String),

    #[error("cannot mixin non-function: {0}")]
    NotMixable(String),

    #[error("cannot delegate to non-function: {0}")]
    NotDelegable(String),

    #[error("not a function: {0}")]
    NotCallable(String),

    #[error("expected an object, got {0}")]
    NotAnObject(String),

    #[error("cyclic prototype chain")]
    CyclicPrototype,

    /// Raised by user supplied functions.
    #[error("{0}")]
    Thrown(String),
}

impl ObjectError {
    pub fn thrown(message: impl Into<String>) -> Self {
        ObjectError::Thrown(message.into())
    }
}
