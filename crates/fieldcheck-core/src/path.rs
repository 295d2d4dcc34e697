//! Field path joining for errors bound while unwinding nested values
//!
//! Copyright (c) 2025 Fieldcheck Team
//! Licensed under the Apache-2.0 license

/// Join an enclosing path and a nested one
///
/// Index segments (`[3]`) attach without a separator.
///
/// ```rust
/// use fieldcheck_core::join_field_path;
///
/// assert_eq!(join_field_path("User", "Age"), "User.Age");
/// assert_eq!(join_field_path("Items", "[0].Name"), "Items[0].Name");
/// assert_eq!(join_field_path("", "Age"), "Age");
/// ```
pub fn join_field_path(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else if child.is_empty() {
        parent.to_string()
    } else if child.starts_with('[') {
        format!("{}{}", parent, child)
    } else {
        format!("{}.{}", parent, child)
    }
}
