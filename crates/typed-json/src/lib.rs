//! A closed, strongly-typed model of JSON values.
//!
//! Generic JSON trees are decoded into [`Value`], whose equality is exact per
//! variant: `true` is never equal to `1`, and `[]` is never equal to `{}`.
//! Numbers compare by magnitude, so `0` equals `0.0`.
//!
//! Parsing and serialization are delegated to `serde_json`; this crate only
//! converts between its tree and the typed model.
//!
//! # Example
//!
//! ```
//! use typed_json::{decode, encode, EncodeOptions, Value};
//!
//! let doc = decode(br#"{"foo":"bar","baz":[true]}"#).unwrap();
//!
//! let expected: Value = [
//!     ("foo", Value::from("bar")),
//!     ("baz", Value::from(vec![true])),
//! ]
//! .into_iter()
//! .collect();
//! assert_eq!(doc, expected);
//! assert_ne!(doc.field("baz"), Some(&Value::from(vec![1])));
//!
//! assert_eq!(doc.get("baz").and_then(|v| v.get(0)), Some(&Value::Bool(true)));
//! assert_eq!(doc.get("missing"), None);
//!
//! let bytes = encode(&doc, &EncodeOptions::default().sort_keys(true));
//! assert_eq!(bytes, br#"{"baz":[true],"foo":"bar"}"#);
//! ```

mod access;
pub use access::{Index, PathStep};

mod convert;

pub mod decode;
pub use decode::{decode, decode_str, DecodeOptions, Decoder};

pub mod detect;
pub use detect::BooleanPolicy;

pub mod encode;
pub use encode::{encode, encode_container, encode_to_string, EncodeOptions, Encoder};

pub mod error;
pub use error::{CodecError, Error, Result};

mod number;
pub use number::Number;

mod pointer;
pub use pointer::{
    escape_component, format_pointer, is_valid_index, parse_pointer, unescape_component,
};

pub mod raw;
pub use raw::{RawNode, RawShape, RawTree, Scalar};

mod value;
pub use value::{Container, Kind, Object, Value};
