//! Error kinds surfaced during schema construction and query execution.
//!
//! See `spec.md` §7. Argument/validation errors fail the whole operation;
//! resolve errors participate in null-bubbling and can coexist with partial
//! `data`.

use std::fmt;

/// The path of response keys leading to a field that produced an error.
pub type ErrorPath = Vec<String>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GraphQLError {
    /// Argument coercion failed, or selection collection on a nested object
    /// failed. Fails the whole operation (`data: null`).
    #[error("{0}")]
    ArgumentError(String),

    /// A requested field is not defined on the type it was selected against.
    /// Fails the whole operation (`data: null`).
    #[error("{0}")]
    ValidationError(String),

    /// A field's resolver returned `Err`. Subject to null-bubbling: absorbed
    /// if the field's declared type is nullable, otherwise propagated.
    #[error("{message}")]
    ResolveError { message: String, path: ErrorPath },

    #[error("Mutations are not configured")]
    MutationsNotConfigured,

    #[error("Subscriptions are not configured")]
    SubscriptionsNotConfigured,

    #[error("No operation found in document")]
    NoOperationFound,

    #[error("Operation `{0}` not found in document")]
    OperationNotFound(String),

    #[error("Document contains multiple operations; an operation name is required")]
    OperationNameRequired,
}

impl GraphQLError {
    /// The message to surface in a response's `errors[].message`.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The path to surface in a response's `errors[].path`. Empty for every
    /// error kind except a resolve error with an accumulated field path.
    pub fn path(&self) -> ErrorPath {
        match self {
            GraphQLError::ResolveError { path, .. } => path.clone(),
            _ => Vec::new(),
        }
    }

    pub fn resolve(message: impl Into<String>) -> Self {
        GraphQLError::ResolveError {
            message: message.into(),
            path: Vec::new(),
        }
    }

    /// Prepend a response key to a resolve error's path as it bubbles up
    /// through nested object resolution. A no-op for other error kinds.
    pub fn push_path_segment(mut self, segment: impl Into<String>) -> Self {
        if let GraphQLError::ResolveError { path, .. } = &mut self {
            path.insert(0, segment.into());
        }
        self
    }
}

/// Convert any `Display`-able error into the plain-string `FieldResult`
/// error that resolvers are expected to return, mirroring the reference
/// library's `ResultExt::to_field_err`.
pub trait ResultExt<T, E: fmt::Display> {
    fn to_field_err(self) -> Result<T, String>;
}

impl<T, E: fmt::Display> ResultExt<T, E> for Result<T, E> {
    fn to_field_err(self) -> Result<T, String> {
        self.map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_error_path_grows_innermost_first() {
        let err = GraphQLError::resolve("boom")
            .push_path_segment("name")
            .push_path_segment("hero");
        assert_eq!(err.path(), vec!["hero".to_string(), "name".to_string()]);
    }

    #[test]
    fn non_resolve_errors_have_empty_path() {
        assert_eq!(GraphQLError::ArgumentError("x".into()).path(), Vec::<String>::new());
    }
}
