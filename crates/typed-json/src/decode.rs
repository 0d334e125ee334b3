//! Raw tree → [`Value`].

use crate::detect::BooleanPolicy;
use crate::error::{Error, Result};
use crate::raw::{self, RawNode, RawShape};
use crate::value::{Container, Object, Value};

/// Nesting limit applied when none is configured.
///
/// serde_json's parser refuses the 128th nested container, so this is the
/// deepest value that survives an encode/decode round trip.
pub const DEFAULT_MAX_DEPTH: usize = 127;

/// Decoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// How `true`/`false` tokens are typed.
    pub boolean_policy: BooleanPolicy,
    /// Maximum number of nested containers.
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            boolean_policy: BooleanPolicy::Distinct,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeOptions {
    /// Sets how `true`/`false` tokens are typed.
    pub fn boolean_policy(mut self, policy: BooleanPolicy) -> Self {
        self.boolean_policy = policy;
        self
    }

    /// Sets the maximum number of nested containers.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Converts raw trees into typed values.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    /// Creates a decoder with the given options.
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// The options this decoder was built with.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Parses `bytes` with the JSON codec, then decodes the tree.
    ///
    /// # Errors
    ///
    /// - [`Error::Codec`] if the bytes are not valid JSON
    /// - [`Error::DepthLimitExceeded`] if nesting exceeds the configured limit
    pub fn decode(&self, bytes: &[u8]) -> Result<Value> {
        tracing::debug!(len = bytes.len(), "decoding JSON document");
        let raw = raw::parse(bytes).inspect_err(|err| {
            tracing::debug!(
                error = %err,
                line = err.line(),
                column = err.column(),
                "JSON codec rejected input"
            );
        })?;
        self.decode_raw(&raw)
    }

    /// Decodes an already parsed tree.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedShape`] if a node is outside the JSON shapes
    /// - [`Error::DepthLimitExceeded`] if nesting exceeds the configured limit
    pub fn decode_raw<N: RawNode>(&self, node: &N) -> Result<Value> {
        self.node(node, 0).inspect_err(|err| {
            tracing::debug!(error = %err, "raw tree rejected");
        })
    }

    fn node<N: RawNode>(&self, node: &N, depth: usize) -> Result<Value> {
        match node.shape() {
            RawShape::Null => Ok(Value::Null),
            RawShape::Scalar(scalar) => Ok(self.options.boolean_policy.resolve(scalar)),
            RawShape::String(s) => Ok(Value::String(s.to_owned())),
            RawShape::Array(items) => {
                self.check_depth(depth)?;
                let mut out = Vec::with_capacity(items.size_hint().0);
                for (i, item) in items.enumerate() {
                    let value = self
                        .node(item, depth + 1)
                        .map_err(|e| e.within(&i.to_string()))?;
                    out.push(value);
                }
                Ok(Value::Container(Container::Array(out)))
            }
            RawShape::Map(entries) => {
                self.check_depth(depth)?;
                let mut out = Object::with_capacity(entries.size_hint().0);
                for (key, item) in entries {
                    let value = self.node(item, depth + 1).map_err(|e| e.within(key))?;
                    out.insert(key.to_owned(), value);
                }
                Ok(Value::Container(Container::Object(out)))
            }
            RawShape::Unsupported(description) => Err(Error::UnsupportedShape {
                pointer: String::new(),
                description,
            }),
        }
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth >= self.options.max_depth {
            return Err(Error::DepthLimitExceeded {
                pointer: String::new(),
                limit: self.options.max_depth,
            });
        }
        Ok(())
    }
}

/// Decodes JSON bytes with the default options.
///
/// # Example
///
/// ```
/// use typed_json::{decode, Value};
///
/// let doc = decode(br#"{"baz":[true]}"#).unwrap();
/// assert_eq!(doc.pointer("/baz/0"), Some(&Value::Bool(true)));
/// ```
///
/// # Errors
///
/// Returns [`Error::Codec`] if the bytes are not valid JSON.
pub fn decode(bytes: &[u8]) -> Result<Value> {
    Decoder::default().decode(bytes)
}

/// Decodes a JSON string with the default options.
///
/// # Errors
///
/// Returns [`Error::Codec`] if the text is not valid JSON.
pub fn decode_str(text: &str) -> Result<Value> {
    decode(text.as_bytes())
}

impl TryFrom<&serde_json::Value> for Value {
    type Error = Error;

    fn try_from(raw: &serde_json::Value) -> Result<Self> {
        Decoder::default().decode_raw(raw)
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = Error;

    fn try_from(raw: serde_json::Value) -> Result<Self> {
        Value::try_from(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Category;
    use crate::number::Number;
    use serde_json::json;

    #[test]
    fn decodes_every_shape() {
        let v = decode(br#"{"n":null,"b":false,"i":3,"f":0.5,"s":"x","a":[],"o":{}}"#).unwrap();
        assert_eq!(v.field("n"), Some(&Value::Null));
        assert_eq!(v.field("b"), Some(&Value::Bool(false)));
        assert_eq!(v.field("i"), Some(&Value::Number(Number::from(3))));
        assert_eq!(v.field("f").and_then(Value::as_f64), Some(0.5));
        assert_eq!(v.field("s"), Some(&Value::String("x".into())));
        assert_eq!(v.field("a"), Some(&Value::Container(Container::Array(vec![]))));
        assert_eq!(v.field("o"), Some(&Value::Container(Container::Object(Object::new()))));
    }

    #[test]
    fn scalar_root_documents() {
        assert_eq!(decode(b"true").unwrap(), Value::Bool(true));
        assert_eq!(decode(b" 12 ").unwrap(), Value::Number(Number::from(12)));
        assert_eq!(decode(b"null").unwrap(), Value::Null);
        assert_eq!(decode_str("\"hi\"").unwrap(), Value::String("hi".into()));
    }

    #[test]
    fn object_keys_keep_source_order() {
        let v = decode(br#"{"z":1,"a":2}"#).unwrap();
        let keys: Vec<&String> = v.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a"]);
    }

    #[test]
    fn numeric_policy_decodes_booleans_as_numbers() {
        let decoder = Decoder::new(DecodeOptions::default().boolean_policy(BooleanPolicy::Numeric));
        let v = decoder.decode(b"[true,false,2]").unwrap();
        let expected: Value = vec![1, 0, 2].into();
        assert_eq!(v, expected);
    }

    #[test]
    fn malformed_input_is_codec_error() {
        match decode(b"{\"foo\":").unwrap_err() {
            Error::Codec(err) => assert_eq!(err.category(), Category::Eof),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(decode(b"{foo}"), Err(Error::Codec(_))));
        assert!(matches!(decode(b""), Err(Error::Codec(_))));
    }

    #[test]
    fn depth_limit_reports_location() {
        let decoder = Decoder::new(DecodeOptions::default().max_depth(2));
        assert!(decoder.decode(br#"{"a":[1]}"#).is_ok());
        match decoder.decode(br#"{"a":[[1]]}"#).unwrap_err() {
            Error::DepthLimitExceeded { pointer, limit } => {
                assert_eq!(pointer, "/a/0");
                assert_eq!(limit, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn try_from_serde_json_value() {
        let v = Value::try_from(json!({"a": [true, 1]})).unwrap();
        assert_eq!(v.pointer("/a/0"), Some(&Value::Bool(true)));
        assert_eq!(v.pointer("/a/1"), Some(&Value::Number(Number::from(1))));
    }
}
