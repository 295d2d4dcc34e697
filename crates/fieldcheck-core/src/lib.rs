//! Fieldcheck Core - error values and messages for declarative field validation
//!
//! When a validation rule fails, the rule engine builds one of the error
//! values in this crate. The error carries what failed and why, renders a
//! deterministic message, and can be attached to a field path after the fact,
//! since nested validation only learns field names while unwinding.
//!
//! ## Features
//!
//! - **Validator kinds**: closed set of rule tags plus a catch-all for unknown ones
//! - **Validation errors**: one wording per rule, adapted to scalars vs. strings and containers
//! - **Syntax errors**: malformed rule expressions with the offending token
//! - **Field binding**: attach or prepend field paths without mutating the original
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck_core::{bind_field_name, ErrorField, FieldError, ObservedValue, ValidationError, ValidatorKind};
//!
//! let err: FieldError = ValidationError::new(
//!     ValidatorKind::GreaterOrEqual,
//!     ObservedValue::capture("x").unwrap(),
//!     "3",
//! )
//! .into();
//!
//! let bound = bind_field_name(&err, "Name");
//! assert_eq!(bound.message(), "Name length must be greater than or equal to 3");
//! assert_eq!(err.field_name(), "");
//! ```
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

pub mod field;
pub mod kind;
pub mod path;
pub mod syntax;
pub mod validation;
pub mod value;

// Re-export commonly used types for convenience
pub use field::{bind_field_name, ErrorField, FieldError};
pub use kind::{UnknownTag, ValidatorKind};
pub use path::join_field_path;
pub use syntax::SyntaxError;
pub use validation::ValidationError;
pub use value::{ObservedValue, ValueShape};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
