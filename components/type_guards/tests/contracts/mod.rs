//! Contract tests for type_guards component
//!
//! These tests pin the observable guarantees of the classifier, the matcher
//! and the derived predicates across arbitrary inputs.

mod test_properties;
