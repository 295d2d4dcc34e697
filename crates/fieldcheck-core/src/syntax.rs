//! Malformed rule expressions
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A rule expression could not be parsed or applied
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub struct SyntaxError {
    field_name: String,
    expression: String,
    near: String,
    comment: String,
}

impl SyntaxError {
    /// Create an unbound syntax error
    pub fn new<E, N, C>(expression: E, near: N, comment: C) -> Self
    where
        E: Into<String>,
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            field_name: String::new(),
            expression: expression.into(),
            near: near.into(),
            comment: comment.into(),
        }
    }

    /// Copy of this error with the field name replaced
    pub fn with_field_name<N>(&self, field_name: N) -> Self
    where
        N: Into<String>,
    {
        Self {
            field_name: field_name.into(),
            ..self.clone()
        }
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// The raw rule text
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Token where parsing broke
    pub fn near(&self) -> &str {
        &self.near
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field_name.is_empty() {
            f.write_str("Syntax error when validating value")?;
        } else {
            write!(f, "Syntax error when validating field \"{}\"", self.field_name)?;
        }
        write!(
            f,
            ", expression \"{}\" near \"{}\": {}",
            self.expression, self.near, self.comment
        )
    }
}
