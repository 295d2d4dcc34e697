//! Field-identified errors and the binder that attaches field names
//!
//! Validation of nested structures only learns field names while unwinding,
//! so errors are created unbound and named afterwards. Binding never mutates:
//! every call returns a new error value.
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use crate::path::join_field_path;
use crate::syntax::SyntaxError;
use crate::validation::ValidationError;
use serde::{Serialize, Serializer};
use std::sync::Arc;
use thiserror::Error;

/// An error that knows which field it belongs to
pub trait ErrorField: std::error::Error {
    /// Field path this error is attached to; empty while unbound
    fn field_name(&self) -> &str;

    /// Human-readable description of the failure
    fn message(&self) -> String {
        self.to_string()
    }
}

impl ErrorField for ValidationError {
    fn field_name(&self) -> &str {
        ValidationError::field_name(self)
    }
}

impl ErrorField for SyntaxError {
    fn field_name(&self) -> &str {
        SyntaxError::field_name(self)
    }
}

/// Every error the validation layer reports
#[derive(Debug, Clone, Error)]
pub enum FieldError {
    /// A value violated a rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A rule expression was malformed
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// Errors from outside this crate; they keep whatever field name they
    /// were created with
    #[error(transparent)]
    Other(Arc<dyn ErrorField + Send + Sync>),
}

impl FieldError {
    /// Wrap a foreign error
    pub fn other<E>(error: E) -> Self
    where
        E: ErrorField + Send + Sync + 'static,
    {
        Self::Other(Arc::new(error))
    }

    /// Copy of this error bound to `field_name`; see [`bind_field_name`]
    pub fn with_field_name<N>(&self, field_name: N) -> Self
    where
        N: Into<String>,
    {
        bind_field_name(self, field_name)
    }

    /// Copy of this error with `parent` prepended to its field path
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldcheck_core::{ErrorField, FieldError, SyntaxError};
    ///
    /// let leaf = FieldError::from(SyntaxError::new("gt=", "=", "missing value"));
    /// let nested = leaf.with_field_name("Age").nested_under("User");
    /// assert_eq!(nested.field_name(), "User.Age");
    /// ```
    pub fn nested_under(&self, parent: &str) -> Self {
        bind_field_name(self, join_field_path(parent, self.field_name()))
    }

    /// Whether the binder can rename this error
    pub fn supports_binding(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl ErrorField for FieldError {
    fn field_name(&self) -> &str {
        match self {
            Self::Validation(e) => e.field_name(),
            Self::Syntax(e) => e.field_name(),
            Self::Other(e) => e.field_name(),
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Syntax(e) => e.to_string(),
            Self::Other(e) => e.message(),
        }
    }
}

/// Foreign errors compare by identity
impl PartialEq for FieldError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (Self::Syntax(a), Self::Syntax(b)) => a == b,
            (Self::Other(a), Self::Other(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum FieldErrorRepr<'a> {
    Validation(&'a ValidationError),
    Syntax(&'a SyntaxError),
    Other { field_name: &'a str, message: String },
}

impl Serialize for FieldError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let repr = match self {
            Self::Validation(e) => FieldErrorRepr::Validation(e),
            Self::Syntax(e) => FieldErrorRepr::Syntax(e),
            Self::Other(e) => FieldErrorRepr::Other {
                field_name: e.field_name(),
                message: e.message(),
            },
        };
        repr.serialize(serializer)
    }
}

/// Return a copy of `error` attached to `field_name`
///
/// Known variants get the new name (replacing any previous one); foreign
/// errors come back unchanged. The input is never modified.
pub fn bind_field_name<N>(error: &FieldError, field_name: N) -> FieldError
where
    N: Into<String>,
{
    match error {
        FieldError::Validation(e) => FieldError::Validation(e.with_field_name(field_name)),
        FieldError::Syntax(e) => FieldError::Syntax(e.with_field_name(field_name)),
        FieldError::Other(e) => {
            log::debug!(
                "error does not support field binding, leaving it unchanged: {}",
                e
            );
            FieldError::Other(Arc::clone(e))
        }
    }
}
