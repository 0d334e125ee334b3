use proptest::prelude::*;
use typed_json::decode::DEFAULT_MAX_DEPTH;
use typed_json::{decode, encode, Container, Decoder, EncodeOptions, Error, Object, Value};

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        (-1.0e12..1.0e12f64).prop_map(Value::from),
        ".{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::from),
            prop::collection::vec((".{0,6}", inner), 0..6)
                .prop_map(|entries| entries.into_iter().collect::<Value>()),
        ]
    })
}

proptest! {
    #[test]
    fn decode_inverts_encode(
        v in arb_value(),
        sort_keys in any::<bool>(),
        pretty in any::<bool>(),
    ) {
        let options = EncodeOptions { sort_keys, pretty };
        let bytes = encode(&v, &options);
        prop_assert_eq!(decode(&bytes).unwrap(), v);
    }

    #[test]
    fn object_equality_ignores_order(
        entries in prop::collection::vec((".{0,6}", any::<i32>()), 0..8),
    ) {
        let forward: Object = entries.iter().map(|(k, v)| (k.clone(), Value::from(*v))).collect();
        let mut reversed = forward.clone();
        reversed.reverse();
        prop_assert_eq!(
            Value::from(Container::Object(forward)),
            Value::from(Container::Object(reversed))
        );
    }

    #[test]
    fn booleans_never_equal_numbers(b in any::<bool>(), n in any::<i64>()) {
        prop_assert_ne!(Value::from(b), Value::from(n));
        let text: &[u8] = if b { b"[true]" } else { b"[false]" };
        let flag = decode(text).unwrap();
        prop_assert_ne!(flag, Value::from(vec![n]));
    }
}

fn nested_arrays(depth: usize) -> Value {
    let mut v = Value::Null;
    for _ in 0..depth {
        v = Value::from(vec![v]);
    }
    v
}

fn nested_objects(depth: usize) -> Value {
    let mut v = Value::from(true);
    for _ in 0..depth {
        v = Value::from_iter([("k", v)]);
    }
    v
}

#[test]
fn deepest_default_nesting_round_trips() {
    for v in [nested_arrays(DEFAULT_MAX_DEPTH), nested_objects(DEFAULT_MAX_DEPTH)] {
        for pretty in [false, true] {
            let bytes = encode(&v, &EncodeOptions::default().pretty(pretty));
            assert_eq!(decode(&bytes).unwrap(), v);
        }
    }
}

#[test]
fn one_level_past_the_default_is_rejected() {
    let v = nested_arrays(DEFAULT_MAX_DEPTH + 1);
    let bytes = encode(&v, &EncodeOptions::default());
    assert!(matches!(decode(&bytes), Err(Error::Codec(_))));

    let raw = serde_json::Value::from(&v);
    match Decoder::default().decode_raw(&raw).unwrap_err() {
        Error::DepthLimitExceeded { pointer, limit } => {
            assert_eq!(limit, DEFAULT_MAX_DEPTH);
            assert_eq!(pointer, "/0".repeat(DEFAULT_MAX_DEPTH));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
