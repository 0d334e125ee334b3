//! [`Value`] → raw tree → bytes.
//!
//! The projection is total over the closed variant set, so encoding has no
//! error path.

use std::fmt;

use crate::raw::{self, RawTree};
use crate::value::{Container, Object, Value};

/// Output formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Emit object keys in lexical (byte-wise) order at every depth.
    /// When unset, keys keep their insertion order.
    pub sort_keys: bool,
    /// Indent with two spaces and put each element on its own line.
    pub pretty: bool,
}

impl EncodeOptions {
    /// Sets [`sort_keys`](Self::sort_keys).
    pub fn sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    /// Sets [`pretty`](Self::pretty).
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Writes typed values through the JSON codec.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    /// Creates an encoder with the given options.
    pub fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    /// The options this encoder was built with.
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encodes a value to JSON bytes.
    pub fn encode(&self, value: &Value) -> Vec<u8> {
        self.write(&self.to_raw(value))
    }

    /// Encodes a container to JSON bytes without wrapping it in a [`Value`].
    pub fn encode_container(&self, container: &Container) -> Vec<u8> {
        self.write(&self.container_to_raw(container))
    }

    fn write(&self, raw: &RawTree) -> Vec<u8> {
        let out = raw::serialize(raw, &self.options);
        tracing::debug!(
            len = out.len(),
            sort_keys = self.options.sort_keys,
            pretty = self.options.pretty,
            "encoded JSON document"
        );
        out
    }

    /// Projects a value onto the codec's tree, applying key ordering.
    pub fn to_raw(&self, value: &Value) -> RawTree {
        match value {
            Value::Null => RawTree::Null,
            Value::Bool(b) => RawTree::Bool(*b),
            Value::Number(n) => RawTree::Number(n.as_json().clone()),
            Value::String(s) => RawTree::String(s.clone()),
            Value::Container(container) => self.container_to_raw(container),
        }
    }

    /// Projects a container onto the codec's tree, applying key ordering.
    pub fn container_to_raw(&self, container: &Container) -> RawTree {
        match container {
            Container::Array(items) => {
                RawTree::Array(items.iter().map(|item| self.to_raw(item)).collect())
            }
            Container::Object(entries) => RawTree::Object(self.map(entries)),
        }
    }

    fn map(&self, entries: &Object) -> serde_json::Map<String, RawTree> {
        let mut out = serde_json::Map::with_capacity(entries.len());
        if self.options.sort_keys {
            let mut sorted: Vec<(&String, &Value)> = entries.iter().collect();
            sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
            for (key, value) in sorted {
                out.insert(key.clone(), self.to_raw(value));
            }
        } else {
            for (key, value) in entries {
                out.insert(key.clone(), self.to_raw(value));
            }
        }
        out
    }
}

/// Encodes a value to JSON bytes.
///
/// # Example
///
/// ```
/// use typed_json::{decode, encode, EncodeOptions};
///
/// let doc = decode(br#"{"foo":"bar","baz":[true]}"#).unwrap();
/// let bytes = encode(&doc, &EncodeOptions::default().sort_keys(true));
/// assert_eq!(bytes, br#"{"baz":[true],"foo":"bar"}"#);
/// ```
pub fn encode(value: &Value, options: &EncodeOptions) -> Vec<u8> {
    Encoder::new(*options).encode(value)
}

/// Encodes a container to JSON bytes.
pub fn encode_container(container: &Container, options: &EncodeOptions) -> Vec<u8> {
    Encoder::new(*options).encode_container(container)
}

/// Encodes a value to a JSON string.
pub fn encode_to_string(value: &Value, options: &EncodeOptions) -> String {
    into_text(encode(value, options))
}

fn into_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        Encoder::default().to_raw(value)
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}

/// Compact JSON; `{:#}` pretty-prints.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = EncodeOptions::default().pretty(f.alternate());
        let raw = Encoder::new(options).to_raw(self);
        f.write_str(&into_text(raw::serialize(&raw, &options)))
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = EncodeOptions::default().pretty(f.alternate());
        let raw = Encoder::new(options).container_to_raw(self);
        f.write_str(&into_text(raw::serialize(&raw, &options)))
    }
}
