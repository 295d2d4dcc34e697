//! Message and binding scenarios as seen by traversal and report code
//!
//! These tests drive the public API the way a rule engine and a struct
//! walker would: build an unbound error, bind it while unwinding, read it.

use fieldcheck_core::{
    bind_field_name, ErrorField, FieldError, ObservedValue, SyntaxError, ValidationError,
    ValidatorKind,
};
use serde_json::json;

#[cfg(test)]
mod message_scenarios {
    use super::*;

    #[test]
    fn test_scalar_lower_bound() {
        let err: FieldError = ValidationError::new(
            ValidatorKind::GreaterOrEqual,
            ObservedValue::capture(&5).unwrap(),
            "18",
        )
        .into();

        let bound = bind_field_name(&err, "Age");
        assert_eq!(bound.message(), "Age must be greater than or equal to 18");
    }

    #[test]
    fn test_string_length_bound() {
        let err: FieldError = ValidationError::new(
            ValidatorKind::GreaterOrEqual,
            ObservedValue::capture("x").unwrap(),
            "3",
        )
        .into();

        let bound = bind_field_name(&err, "Name");
        assert_eq!(bound.message(), "Name length must be greater than or equal to 3");
    }

    #[test]
    fn test_required_field() {
        let err: FieldError =
            ValidationError::new(ValidatorKind::Empty, ObservedValue::capture("").unwrap(), "false").into();

        assert_eq!(bind_field_name(&err, "Email").message(), "Email is required");
    }

    #[test]
    fn test_disallowed_value() {
        let err: FieldError = ValidationError::new(
            ValidatorKind::OneOf,
            ObservedValue::capture("archived").unwrap(),
            "[active inactive]",
        )
        .into();

        assert_eq!(
            bind_field_name(&err, "Status").message(),
            "Status archived is not an allowed value. Must be one of [active inactive]"
        );
    }

    #[test]
    fn test_syntax_error() {
        let err: FieldError = SyntaxError::new("age >> 5", ">>", "unexpected operator").into();

        assert_eq!(
            bind_field_name(&err, "Rule1").message(),
            "Syntax error when validating field \"Rule1\", expression \"age >> 5\" near \">>\": unexpected operator"
        );
    }

    #[test]
    fn test_binding_leaves_original_unbound() {
        let err: FieldError = ValidationError::new(
            ValidatorKind::GreaterOrEqual,
            ObservedValue::capture(&5).unwrap(),
            "18",
        )
        .into();

        let bound = bind_field_name(&err, "User.Age");
        assert_eq!(bound.field_name(), "User.Age");
        assert_eq!(err.field_name(), "");
    }
}

#[cfg(test)]
mod nested_traversal {
    use super::*;

    /// Mimics a struct walker: leaf errors are named by the field that
    /// produced them, then prefixed by each enclosing level.
    fn unwind(leaf: FieldError, path: &[&str]) -> FieldError {
        path.iter().rev().fold(leaf, |err, segment| err.nested_under(segment))
    }

    #[test]
    fn test_paths_accumulate_while_unwinding() {
        let leaf = FieldError::from(ValidationError::new(
            ValidatorKind::Format,
            ObservedValue::capture("not-an-email").unwrap(),
            "email",
        ))
        .with_field_name("Email");

        let err = unwind(leaf, &["Company", "Contacts", "[2]"]);
        assert_eq!(err.field_name(), "Company.Contacts[2].Email");
        assert_eq!(err.message(), "Company.Contacts[2].Email must be in email format");
    }

    #[test]
    fn test_unbound_leaf_takes_enclosing_name() {
        let err = FieldError::from(ValidationError::new(
            ValidatorKind::LessOrEqual,
            ObservedValue::from(json!([1, 2, 3, 4])),
            "3",
        ));

        let bound = unwind(err.clone(), &["Order", "Items"]);
        assert_eq!(bound.field_name(), "Order.Items");
        assert_eq!(bound.message(), "Order.Items length must be less than or equal to 3");
        assert_eq!(err.message(), "length must be less than or equal to 3");
    }

    #[test]
    fn test_errors_are_usable_as_std_errors() {
        fn check(age: i64) -> Result<(), Box<dyn std::error::Error>> {
            if age < 18 {
                let err = ValidationError::new(
                    ValidatorKind::GreaterOrEqual,
                    ObservedValue::capture(&age)?,
                    "18",
                );
                return Err(FieldError::from(err).with_field_name("Age").into());
            }
            Ok(())
        }

        assert!(check(21).is_ok());
        let err = check(3).unwrap_err();
        assert_eq!(err.to_string(), "Age must be greater than or equal to 18");
    }
}

#[cfg(test)]
mod report_serialization {
    use super::*;

    #[test]
    fn test_report_layer_json() {
        let errors: Vec<FieldError> = vec![
            ValidationError::new(ValidatorKind::Nil, ObservedValue::null(), "false")
                .with_field_name("Owner")
                .into(),
            SyntaxError::new("one_of=", "=", "empty set")
                .with_field_name("Status")
                .into(),
        ];

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json[0]["type"], "validation");
        assert_eq!(json[0]["field_name"], "Owner");
        assert_eq!(json[0]["kind"], "nil");
        assert_eq!(json[1]["type"], "syntax");
        assert_eq!(json[1]["expression"], "one_of=");
        assert_eq!(json[1]["near"], "=");
    }
}
