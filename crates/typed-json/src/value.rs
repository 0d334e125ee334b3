//! The closed JSON data model: [`Value`] and [`Container`].
//!
//! Equality is variant-wise. A `Bool` is never equal to a `Number`, and an
//! `Array` is never equal to an `Object`, whatever their payloads look like.

use indexmap::IndexMap;
use std::fmt;

use crate::number::Number;

/// Key/value pairs of a JSON object.
///
/// Insertion order is kept for output but ignored by equality.
pub type Object = IndexMap<String, Value>;

/// A JSON value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Container(Container),
}

/// A JSON array or object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Container {
    Array(Vec<Value>),
    Object(Object),
}

/// The variant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    /// The JSON type name, e.g. `"boolean"` or `"object"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// The variant of this value. Containers report `Array` or `Object`.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Container(c) => c.kind(),
        }
    }

    /// Whether this is `Null`. An absent lookup is `None`, not `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Whether this is an array or an object.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Container(_))
    }

    /// The payload of a `Bool`. Numbers never convert.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The payload of a `Number`.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// A `Number` that is an integer token fitting in `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::as_i64)
    }

    /// A `Number` that is a non-negative integer token fitting in `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        self.as_number().and_then(Number::as_u64)
    }

    /// Any `Number`, as `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::as_f64)
    }

    /// The payload of a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The payload of a `Container`.
    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Value::Container(c) => Some(c),
            _ => None,
        }
    }

    /// The elements of an array value.
    pub fn as_array(&self) -> Option<&[Value]> {
        self.as_container().and_then(Container::as_array)
    }

    /// The entries of an object value.
    pub fn as_object(&self) -> Option<&Object> {
        self.as_container().and_then(Container::as_object)
    }

    /// Takes the container out of the value.
    pub fn into_container(self) -> Option<Container> {
        match self {
            Value::Container(c) => Some(c),
            _ => None,
        }
    }
}

impl Container {
    /// `Kind::Array` or `Kind::Object`.
    pub fn kind(&self) -> Kind {
        match self {
            Container::Array(_) => Kind::Array,
            Container::Object(_) => Kind::Object,
        }
    }

    /// Number of elements or entries.
    pub fn len(&self) -> usize {
        match self {
            Container::Array(items) => items.len(),
            Container::Object(entries) => entries.len(),
        }
    }

    /// Whether there are no elements or entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The elements, if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Container::Array(items) => Some(items),
            Container::Object(_) => None,
        }
    }

    /// The entries, if this is an object.
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Container::Object(entries) => Some(entries),
            Container::Array(_) => None,
        }
    }
}
