//! Property tests over generated values

use js_value::{ErrorKind, Intrinsic, JsObject, PromiseState, Value};
use proptest::prelude::*;
use type_guards::*;

/// Recipe for a value; the value itself holds `Rc` and is built per case
#[derive(Debug, Clone)]
enum Sample {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Symbol(Option<String>),
    BigInt(i64),
    Plain,
    Orphan,
    Derived,
    Instance,
    Array(usize),
    Date(f64),
    RegExp,
    Map,
    Error,
    Promise,
    Arrow,
    AsyncFunction,
    Constructor(usize),
    Tagged(String),
}

impl Sample {
    fn build(&self) -> Value {
        match self {
            Sample::Undefined => Value::Undefined,
            Sample::Null => Value::Null,
            Sample::Bool(b) => Value::boolean(*b),
            Sample::Number(n) => Value::number(*n),
            Sample::Text(s) => Value::string(s.clone()),
            Sample::Symbol(desc) => Value::symbol(desc.as_deref()),
            Sample::BigInt(n) => Value::bigint(*n),
            Sample::Plain => Value::Object(JsObject::plain()),
            Sample::Orphan => Value::Object(JsObject::null_prototype()),
            Sample::Derived => Value::Object(JsObject::with_prototype(&JsObject::plain())),
            Sample::Instance => match JsObject::class("Sample").construct() {
                Ok(instance) => Value::Object(instance),
                Err(err) => panic!("class construction failed: {}", err),
            },
            Sample::Array(len) => {
                Value::Object(JsObject::array_from(vec![Value::Null; *len]))
            }
            Sample::Date(ms) => Value::Object(JsObject::date_from_millis(*ms)),
            Sample::RegExp => Value::Object(JsObject::regexp("a+", "g").unwrap()),
            Sample::Map => Value::Object(JsObject::map()),
            Sample::Error => Value::Object(JsObject::error(ErrorKind::TypeError, "x")),
            Sample::Promise => Value::Object(JsObject::promise(PromiseState::Pending)),
            Sample::Arrow => Value::Object(JsObject::arrow_function()),
            Sample::AsyncFunction => Value::Object(JsObject::async_function("f")),
            Sample::Constructor(i) => Value::Object(JsObject::intrinsic_constructor(
                Intrinsic::ALL[i % Intrinsic::ALL.len()],
            )),
            Sample::Tagged(tag) => {
                let obj = JsObject::plain();
                obj.set_to_string_tag(tag.clone());
                Value::Object(obj)
            }
        }
    }
}

fn sample() -> impl Strategy<Value = Sample> {
    prop_oneof![
        Just(Sample::Undefined),
        Just(Sample::Null),
        any::<bool>().prop_map(Sample::Bool),
        any::<f64>().prop_map(Sample::Number),
        Just(Sample::Number(f64::NAN)),
        ".{0,8}".prop_map(Sample::Text),
        proptest::option::of("[a-z]{0,4}").prop_map(Sample::Symbol),
        any::<i64>().prop_map(Sample::BigInt),
        Just(Sample::Plain),
        Just(Sample::Orphan),
        Just(Sample::Derived),
        Just(Sample::Instance),
        (0usize..4).prop_map(Sample::Array),
        prop_oneof![Just(f64::NAN), -1e16f64..1e16].prop_map(Sample::Date),
        Just(Sample::RegExp),
        Just(Sample::Map),
        Just(Sample::Error),
        Just(Sample::Promise),
        Just(Sample::Arrow),
        Just(Sample::AsyncFunction),
        any::<usize>().prop_map(Sample::Constructor),
        prop_oneof![
            Just("String".to_string()),
            Just("Number".to_string()),
            Just("Date".to_string()),
            "[A-Za-z]{0,6}",
        ]
        .prop_map(Sample::Tagged),
    ]
}

fn intrinsic() -> impl Strategy<Value = Intrinsic> {
    (0..Intrinsic::ALL.len()).prop_map(|i| Intrinsic::ALL[i])
}

proptest! {
    /// Every value gets exactly one non-empty tag
    #[test]
    fn tag_is_total_and_non_empty(s in sample()) {
        let tag = get_type(&s.build());
        prop_assert!(!tag.as_str().is_empty());
        prop_assert_eq!(tag.as_str(), tag.as_str().to_lowercase());
    }

    /// Classifying the same value twice gives the same tag
    #[test]
    fn classification_is_deterministic(s in sample()) {
        let value = s.build();
        prop_assert_eq!(get_type(&value), get_type(&value));
    }

    /// A plain object is always an object, never the other way round
    #[test]
    fn plain_implies_any_object(s in sample()) {
        let value = s.build();
        if is_plain_object(&value) {
            prop_assert!(is_any_object(&value));
        }
    }

    /// Non-empty and empty strings partition the strings
    #[test]
    fn strings_partition(s in sample()) {
        let value = s.build();
        prop_assert_eq!(
            is_string(&value),
            is_full_string(&value) != is_empty_string(&value)
        );
        prop_assert!(!(is_full_string(&value) && is_empty_string(&value)));
    }

    /// is_number implies the tag, the tag does not imply is_number
    #[test]
    fn number_predicate_refines_tag(n in any::<f64>()) {
        let value = Value::number(n);
        prop_assert_eq!(get_type(&value), TypeTag::NUMBER);
        prop_assert_eq!(is_number(&value), !n.is_nan());
    }

    /// Every intrinsic constructor is a valid descriptor
    #[test]
    fn intrinsic_descriptors_validate(s in sample(), i in intrinsic()) {
        let ctor = Value::Object(JsObject::intrinsic_constructor(i));
        prop_assert!(is_type(&s.build(), &ctor).is_ok());
    }

    /// Primitive descriptors are rejected whatever the payload
    #[test]
    fn primitive_descriptors_fail(s in sample(), n in any::<f64>(), text in ".{0,8}") {
        let payload = s.build();
        for descriptor in [Value::Undefined, Value::Null, Value::number(n), Value::string(text.clone())] {
            let is_not_a_function = matches!(
                is_type(&payload, &descriptor),
                Err(InvalidDescriptorError::NotAFunction { .. })
            );
            prop_assert!(is_not_a_function);
        }
    }

    /// Built-in matching agrees with the tag
    #[test]
    fn builtin_match_agrees_with_tag(s in sample(), i in intrinsic()) {
        let value = s.build();
        let by_tag = get_type(&value).as_str() == i.name().to_lowercase();
        let matched = matches_type(&value, &TypeDescriptor::from(i));
        if by_tag {
            prop_assert!(matched);
        }
    }

    /// Dates built from any time value are dates, valid or not
    #[test]
    fn dates_tagged_regardless_of_validity(ms in prop_oneof![Just(f64::NAN), any::<f64>()]) {
        let date = Value::Object(JsObject::date_from_millis(ms));
        prop_assert_eq!(get_type(&date), TypeTag::DATE);
        let valid = ms.is_finite() && ms.abs() <= 8.64e15;
        prop_assert_eq!(is_date(&date), valid);
    }

    /// Narrowing succeeds exactly when the predicate holds
    #[test]
    fn narrowing_matches_predicates(s in sample()) {
        let value = s.build();
        prop_assert_eq!(as_number(&value).is_some(), is_number(&value));
        prop_assert_eq!(as_string(&value).is_some(), is_string(&value));
        prop_assert_eq!(as_plain_object(&value).is_some(), is_plain_object(&value));
        prop_assert_eq!(as_any_object(&value).is_some(), is_any_object(&value));
        prop_assert_eq!(as_date(&value).is_some(), is_date(&value));
    }
}

#[test]
fn undefined_and_null_are_distinct() {
    assert_eq!(get_type(&Value::Undefined), TypeTag::UNDEFINED);
    assert_eq!(get_type(&Value::Null), TypeTag::NULL);
    assert!(is_undefined(&Value::Undefined) && !is_undefined(&Value::Null));
    assert!(is_null(&Value::Null) && !is_null(&Value::Undefined));
}

#[test]
fn nan_asymmetry() {
    let number = Value::Object(JsObject::intrinsic_constructor(Intrinsic::Number));
    assert_eq!(get_type(&Value::nan()), TypeTag::NUMBER);
    assert_eq!(is_type(&Value::nan(), &number), Ok(true));
    assert!(!is_number(&Value::nan()));
}

#[test]
fn null_is_never_an_object() {
    let object = Value::Object(JsObject::intrinsic_constructor(Intrinsic::Object));
    assert_eq!(is_type(&Value::Null, &object), Ok(false));
    assert!(!is_any_object(&Value::Null));
    assert!(!is_plain_object(&Value::Null));
}
