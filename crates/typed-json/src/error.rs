//! Error types for decoding.
//!
//! Encoding has no error type: every [`Value`](crate::Value) can be written.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The input bytes are not valid JSON.
    #[error(transparent)]
    Codec(#[from] CodecError),
    /// A raw node is none of null, scalar, string, array or map.
    #[error("unsupported node at \"{pointer}\": {description}")]
    UnsupportedShape { pointer: String, description: String },
    /// Nesting is deeper than [`DecodeOptions::max_depth`](crate::DecodeOptions::max_depth).
    #[error("nesting deeper than {limit} at \"{pointer}\"")]
    DepthLimitExceeded { pointer: String, limit: usize },
}

impl Error {
    /// Prepends one reference token to the pointer of a located error.
    pub(crate) fn within(mut self, segment: &str) -> Self {
        if let Error::UnsupportedShape { pointer, .. } | Error::DepthLimitExceeded { pointer, .. } =
            &mut self
        {
            let escaped = crate::pointer::escape_component(segment);
            let mut located = String::with_capacity(pointer.len() + escaped.len() + 1);
            located.push('/');
            located.push_str(&escaped);
            located.push_str(pointer);
            *pointer = located;
        }
        self
    }
}

/// What went wrong inside the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// The input is not syntactically valid JSON.
    Syntax,
    /// The input ended before a complete value was read.
    Eof,
    /// Syntactically valid input the codec refused to represent.
    Data,
    /// Reading the input failed.
    Io,
}

/// A parse failure reported by the JSON codec, carried unchanged.
#[derive(Debug, Error)]
#[error("{inner}")]
pub struct CodecError {
    #[source]
    inner: serde_json::Error,
}

impl CodecError {
    /// 1-based line of the failure.
    pub fn line(&self) -> usize {
        self.inner.line()
    }

    /// 1-based column of the failure.
    pub fn column(&self) -> usize {
        self.inner.column()
    }

    /// The codec's classification of the failure.
    pub fn category(&self) -> Category {
        match self.inner.classify() {
            serde_json::error::Category::Syntax => Category::Syntax,
            serde_json::error::Category::Eof => Category::Eof,
            serde_json::error::Category::Data => Category::Data,
            serde_json::error::Category::Io => Category::Io,
        }
    }

    /// The codec's own error.
    pub fn into_inner(self) -> serde_json::Error {
        self.inner
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(inner: serde_json::Error) -> Self {
        CodecError { inner }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Codec(CodecError::from(e))
    }
}
