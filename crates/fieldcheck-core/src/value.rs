//! The value that failed validation, with enough type information to
//! decide how a message talks about it
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// How a failing value is measured by ordering rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// Numbers, booleans, null
    Scalar,
    /// Text, measured by length
    String,
    /// Key/value containers
    Map,
    /// Slices, arrays and other sequences
    Sequence,
}

impl ValueShape {
    /// Strings, maps and sequences are compared by their length
    pub fn is_length_bearing(self) -> bool {
        !matches!(self, Self::Scalar)
    }
}

/// A failing value captured by the rule engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedValue {
    value: Value,
    type_name: String,
}

impl ObservedValue {
    /// Create an observed value from an already rendered value
    pub fn new<T>(value: Value, type_name: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            value,
            type_name: type_name.into(),
        }
    }

    /// Capture any serializable value, naming it after its Rust type
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldcheck_core::{ObservedValue, ValueShape};
    ///
    /// let observed = ObservedValue::capture(&vec![1u8, 2, 3]).unwrap();
    /// assert_eq!(observed.type_name(), "Vec<u8>");
    /// assert_eq!(observed.shape(), ValueShape::Sequence);
    /// ```
    pub fn capture<T>(value: &T) -> Result<Self, serde_json::Error>
    where
        T: Serialize + ?Sized,
    {
        Ok(Self {
            value: serde_json::to_value(value)?,
            type_name: short_type_name(std::any::type_name::<T>()),
        })
    }

    /// The absent value
    pub fn null() -> Self {
        Self::from(Value::Null)
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn shape(&self) -> ValueShape {
        match self.value {
            Value::String(_) => ValueShape::String,
            Value::Object(_) => ValueShape::Map,
            Value::Array(_) => ValueShape::Sequence,
            Value::Null | Value::Bool(_) | Value::Number(_) => ValueShape::Scalar,
        }
    }
}

impl Default for ObservedValue {
    fn default() -> Self {
        Self::null()
    }
}

impl From<Value> for ObservedValue {
    fn from(value: Value) -> Self {
        let type_name = match &value {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        Self::new(value, type_name)
    }
}

/// Strings render bare; sequences as `[a b]`, maps as `{k:v}`
impl fmt::Display for ObservedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, &self.value)
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::String(s) => f.write_str(s),
        Value::Array(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write_value(f, item)?;
            }
            f.write_str("]")
        }
        Value::Object(entries) => {
            f.write_str("{")?;
            for (i, (key, item)) in entries.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}:", key)?;
                write_value(f, item)?;
            }
            f.write_str("}")
        }
        scalar => write!(f, "{}", scalar),
    }
}

/// Strip module paths from a type name, keeping generic structure:
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                out.truncate(segment_start);
            }
            c if c.is_alphanumeric() || c == '_' => out.push(c),
            c => {
                out.push(c);
                segment_start = out.len();
            }
        }
    }

    out
}
