use typed_json::{decode, BooleanPolicy, DecodeOptions, Decoder, Error, Number, Value};

fn doc(baz: Value) -> Value {
    [("foo", Value::from("bar")), ("baz", baz)].into_iter().collect()
}

#[test]
fn decoded_true_is_a_boolean() {
    let decoded = decode(br#"{"foo":"bar","baz":[true]}"#).unwrap();

    assert_eq!(decoded, doc(Value::from(vec![true])));
    assert_ne!(decoded, doc(Value::from(vec![false])));
    assert_ne!(decoded, doc(Value::from(vec![1])));
    assert_ne!(decoded, doc(Value::from(vec![1.0])));
}

#[test]
fn decoded_two_is_not_true() {
    let decoded = decode(br#"{"foo":"bar","baz":[2]}"#).unwrap();
    assert_ne!(decoded, doc(Value::from(vec![true])));
    assert_eq!(decoded, doc(Value::from(vec![2])));
}

#[test]
fn decoded_one_is_not_true() {
    let decoded = decode(br#"{"foo":"bar","baz":[1]}"#).unwrap();
    assert_ne!(decoded, doc(Value::from(vec![true])));
}

#[test]
fn decoded_zero_is_a_number_not_false() {
    let decoded = decode(br#"{"foo":"bar","baz":[0]}"#).unwrap();

    assert_ne!(decoded, doc(Value::from(vec![true])));
    assert_ne!(decoded, doc(Value::from(vec![false])));
    assert_eq!(decoded, doc(Value::from(vec![0])));
    assert_eq!(decoded, doc(Value::from(vec![0.0])));
}

#[test]
fn integer_and_float_zero_decode_equal() {
    assert_eq!(decode(b"0").unwrap(), decode(b"0.0").unwrap());
    assert_eq!(decode(b"[1]").unwrap(), decode(b"[1.0]").unwrap());
    assert_eq!(decode(b"1e2").unwrap(), Value::Number(Number::from(100)));
    assert_ne!(decode(b"[1]").unwrap(), decode(b"[1.5]").unwrap());
}

#[test]
fn key_order_does_not_affect_equality() {
    let a = decode(br#"{"a":1,"b":{"c":[true,null]}}"#).unwrap();
    let b = decode(br#"{"b":{"c":[true,null]},"a":1}"#).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_containers_differ() {
    assert_ne!(decode(b"[]").unwrap(), decode(b"{}").unwrap());
}

#[test]
fn legacy_numeric_booleans_are_opt_in() {
    let legacy = Decoder::new(DecodeOptions::default().boolean_policy(BooleanPolicy::Numeric));
    let decoded = legacy.decode(br#"{"foo":"bar","baz":[true]}"#).unwrap();
    assert_eq!(decoded, doc(Value::from(vec![1])));
    assert_ne!(decoded, doc(Value::from(vec![true])));
}

#[test]
fn truncated_input_is_a_codec_error() {
    let err = decode(br#"{"foo":"#).unwrap_err();
    assert!(matches!(err, Error::Codec(_)), "unexpected error: {err:?}");
}

#[test]
fn trailing_garbage_is_a_codec_error() {
    assert!(matches!(decode(b"[1] x"), Err(Error::Codec(_))));
    assert!(matches!(decode(b"[1,]"), Err(Error::Codec(_))));
    assert!(matches!(decode(b"tru"), Err(Error::Codec(_))));
}
