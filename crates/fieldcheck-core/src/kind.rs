//! Validator kinds used as the dispatch key for message formatting
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The rule that was being checked when a value failed validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ValidatorKind {
    /// `eq`
    Equal,
    /// `ne`
    NotEqual,
    /// `gte`
    GreaterOrEqual,
    /// `gt`
    GreaterThan,
    /// `lt`
    LessThan,
    /// `lte`
    LessOrEqual,
    /// `empty`
    Empty,
    /// `nil`
    Nil,
    /// `format`
    Format,
    /// `one_of`
    OneOf,
    /// Any tag this crate does not know about, kept verbatim
    Other(UnknownTag),
}

/// Tag text of a validator kind this crate does not recognize
///
/// Only built by tag parsing, so it never holds one of the known tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownTag(String);

impl UnknownTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ValidatorKind {
    /// Parse a tag; known tags map to their variant, anything else to `Other`
    pub fn other<T>(tag: T) -> Self
    where
        T: Into<String>,
    {
        Self::from(tag.into())
    }

    /// Canonical tag spelling as it appears in rule expressions
    pub fn tag(&self) -> &str {
        match self {
            Self::Equal => "eq",
            Self::NotEqual => "ne",
            Self::GreaterOrEqual => "gte",
            Self::GreaterThan => "gt",
            Self::LessThan => "lt",
            Self::LessOrEqual => "lte",
            Self::Empty => "empty",
            Self::Nil => "nil",
            Self::Format => "format",
            Self::OneOf => "one_of",
            Self::Other(tag) => tag.as_str(),
        }
    }

    /// Wording used between "must be" and the constraint for ordering and
    /// equality rules; `None` for every other kind.
    pub const fn comparison_phrase(&self) -> Option<&'static str> {
        match self {
            Self::Equal => Some("equal"),
            Self::NotEqual => Some("not equal"),
            Self::GreaterOrEqual => Some("greater than or equal"),
            Self::GreaterThan => Some("greater than"),
            Self::LessThan => Some("less than"),
            Self::LessOrEqual => Some("less than or equal"),
            _ => None,
        }
    }

    /// Whether this is one of the six equality/ordering kinds
    pub const fn is_comparison(&self) -> bool {
        self.comparison_phrase().is_some()
    }

    /// Whether this kind was recognized when parsed
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<&str> for ValidatorKind {
    fn from(tag: &str) -> Self {
        match tag {
            "eq" => Self::Equal,
            "ne" => Self::NotEqual,
            "gte" => Self::GreaterOrEqual,
            "gt" => Self::GreaterThan,
            "lt" => Self::LessThan,
            "lte" => Self::LessOrEqual,
            "empty" => Self::Empty,
            "nil" => Self::Nil,
            "format" => Self::Format,
            "one_of" => Self::OneOf,
            other => Self::Other(UnknownTag(other.to_string())),
        }
    }
}

impl From<String> for ValidatorKind {
    fn from(tag: String) -> Self {
        match Self::from(tag.as_str()) {
            Self::Other(_) => Self::Other(UnknownTag(tag)),
            known => known,
        }
    }
}

impl From<ValidatorKind> for String {
    fn from(kind: ValidatorKind) -> Self {
        match kind {
            ValidatorKind::Other(tag) => tag.0,
            known => known.tag().to_string(),
        }
    }
}

impl FromStr for ValidatorKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}
