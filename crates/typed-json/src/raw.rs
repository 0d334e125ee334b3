//! The untyped tree produced by the JSON codec, and the codec boundary.
//!
//! The decoder does not walk `serde_json::Value` directly. It asks each node
//! for its [`RawShape`], so any tree that can describe itself that way can be
//! decoded. Scalars that a codec might box through one numeric
//! representation are reported as a [`Scalar`], which records whether the
//! source token was the `true`/`false` keyword or a numeric literal.

use crate::error::CodecError;
use crate::number::Number;
use crate::EncodeOptions;

/// The tree type of the bundled codec.
pub type RawTree = serde_json::Value;

/// Children of an array node, in order.
pub type RawItems<'a, N> = Box<dyn Iterator<Item = &'a N> + 'a>;

/// Entries of a map node, in the order the codec kept them.
pub type RawEntries<'a, N> = Box<dyn Iterator<Item = (&'a str, &'a N)> + 'a>;

/// A scalar that generic codecs tend to box the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// The source token was `true` or `false`.
    Keyword(bool),
    /// The source token was a numeric literal.
    Literal(Number),
}

/// What a raw node looks like to the decoder.
pub enum RawShape<'a, N: 'a> {
    Null,
    Scalar(Scalar),
    String(&'a str),
    Array(RawItems<'a, N>),
    Map(RawEntries<'a, N>),
    /// Anything else, with a human-readable description of the node.
    Unsupported(String),
}

/// A node of an untyped decoded tree.
pub trait RawNode {
    fn shape(&self) -> RawShape<'_, Self>
    where
        Self: Sized;
}

impl RawNode for serde_json::Value {
    fn shape(&self) -> RawShape<'_, Self> {
        match self {
            serde_json::Value::Null => RawShape::Null,
            serde_json::Value::Bool(b) => RawShape::Scalar(Scalar::Keyword(*b)),
            serde_json::Value::Number(n) => {
                RawShape::Scalar(Scalar::Literal(Number::from(n.clone())))
            }
            serde_json::Value::String(s) => RawShape::String(s),
            serde_json::Value::Array(items) => RawShape::Array(Box::new(items.iter())),
            serde_json::Value::Object(map) => {
                RawShape::Map(Box::new(map.iter().map(|(k, v)| (k.as_str(), v))))
            }
        }
    }
}

/// Parses bytes into a raw tree. Codec failures are returned as-is.
///
/// The codec refuses input nested deeper than
/// [`DEFAULT_MAX_DEPTH`](crate::decode::DEFAULT_MAX_DEPTH) containers.
pub fn parse(bytes: &[u8]) -> Result<RawTree, CodecError> {
    serde_json::from_slice(bytes).map_err(CodecError::from)
}

/// Writes a raw tree to bytes.
///
/// Only [`EncodeOptions::pretty`] is read here; key order is whatever the
/// tree already holds.
pub fn serialize(raw: &RawTree, options: &EncodeOptions) -> Vec<u8> {
    let mut out = Vec::with_capacity(128);
    let written = if options.pretty {
        serde_json::to_writer_pretty(&mut out, raw)
    } else {
        serde_json::to_writer(&mut out, raw)
    };
    // serde_json only fails on I/O or non-string map keys; neither can occur
    // when writing a `serde_json::Value` into a `Vec`.
    if let Err(err) = written {
        tracing::error!(error = %err, "serializer rejected a raw tree");
        out.clear();
    }
    out
}
