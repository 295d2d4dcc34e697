//! Semantic rule failures and their message table
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use crate::kind::ValidatorKind;
use crate::value::ObservedValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Constraint value of `empty`/`nil` rules that demand the value be present
const PRESENCE_REQUIRED: &str = "false";

/// A value violated a rule
///
/// Created by the rule engine without a field name; the name is attached
/// later with [`ValidationError::with_field_name`] or the binder in
/// [`crate::field`].
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub struct ValidationError {
    field_name: String,
    value: ObservedValue,
    kind: ValidatorKind,
    constraint: String,
}

impl ValidationError {
    /// Create an unbound validation error
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldcheck_core::{ObservedValue, ValidationError, ValidatorKind};
    ///
    /// let err = ValidationError::new(
    ///     ValidatorKind::GreaterOrEqual,
    ///     ObservedValue::capture(&5).unwrap(),
    ///     "18",
    /// );
    /// assert_eq!(err.with_field_name("Age").to_string(), "Age must be greater than or equal to 18");
    /// ```
    pub fn new<C>(kind: ValidatorKind, value: ObservedValue, constraint: C) -> Self
    where
        C: Into<String>,
    {
        Self {
            field_name: String::new(),
            value,
            kind,
            constraint: constraint.into(),
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

    pub fn value(&self) -> &ObservedValue {
        &self.value
    }

    pub fn kind(&self) -> &ValidatorKind {
        &self.kind
    }

    pub fn constraint(&self) -> &str {
        &self.constraint
    }

    fn write_subject(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field_name.is_empty() {
            Ok(())
        } else {
            write!(f, "{} ", self.field_name)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(phrase) = self.kind.comparison_phrase() {
            self.write_subject(f)?;
            if self.value.shape().is_length_bearing() {
                f.write_str("length ")?;
            }
            return write!(f, "must be {} to {}", phrase, self.constraint);
        }

        match &self.kind {
            ValidatorKind::Empty | ValidatorKind::Nil => {
                self.write_subject(f)?;
                if self.constraint == PRESENCE_REQUIRED {
                    f.write_str("is required")
                } else {
                    write!(f, "must be {}", self.kind)
                }
            }
            ValidatorKind::Format => {
                self.write_subject(f)?;
                write!(f, "must be in {} format", self.constraint)
            }
            ValidatorKind::OneOf => {
                self.write_subject(f)?;
                write!(
                    f,
                    "{} is not an allowed value. Must be one of {}",
                    self.value, self.constraint
                )
            }
            kind => {
                log::trace!("no dedicated wording for validator '{}', using generic message", kind);
                if self.field_name.is_empty() {
                    write!(
                        f,
                        "Validation error in value of type \"{}\" using validator \"{}\"",
                        self.value.type_name(),
                        kind
                    )
                } else {
                    write!(
                        f,
                        "Validation error in field \"{}\" of type \"{}\" using validator \"{}\"",
                        self.field_name,
                        self.value.type_name(),
                        kind
                    )
                }
            }
        }
    }
}
