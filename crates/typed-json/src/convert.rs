//! Building values from Rust primitives and collections.
//!
//! A `bool` always becomes [`Value::Bool`] and a numeric primitive always
//! becomes [`Value::Number`]; there is no path through which one turns into
//! the other.

use indexmap::IndexMap;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use crate::number::Number;
use crate::value::{Container, Object, Value};

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

macro_rules! from_integer {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for Value {
                fn from(i: $ty) -> Self {
                    Value::Number(Number::from(i))
                }
            }
        )*
    };
}

from_integer! {
    i8 i16 i32 i64 isize
    u8 u16 u32 u64 usize
}

/// NaN and infinities have no JSON form and become [`Value::Null`].
impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Number::from_f64(f).map_or(Value::Null, Value::Number)
    }
}

/// NaN and infinities have no JSON form and become [`Value::Null`].
impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::from(f64::from(f))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl<'a> From<Cow<'a, str>> for Value {
    fn from(s: Cow<'a, str>) -> Self {
        Value::String(s.into_owned())
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl From<Container> for Value {
    fn from(c: Container) -> Self {
        Value::Container(c)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Container(Container::from(items))
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(items: &[T]) -> Self {
        Value::Container(Container::from(items))
    }
}

impl<K: Into<String>, T: Into<Value>> From<IndexMap<K, T>> for Value {
    fn from(entries: IndexMap<K, T>) -> Self {
        Value::Container(Container::from(entries))
    }
}

impl<K: Into<String>, T: Into<Value>> From<BTreeMap<K, T>> for Value {
    fn from(entries: BTreeMap<K, T>) -> Self {
        Value::Container(Container::from(entries))
    }
}

impl<K: Into<String>, T: Into<Value>, S> From<HashMap<K, T, S>> for Value {
    fn from(entries: HashMap<K, T, S>) -> Self {
        Value::Container(Container::from_iter(entries))
    }
}

/// Collects into an array.
impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Container(Container::from_iter(iter))
    }
}

/// Collects into an object. Later duplicates replace earlier ones.
impl<K: Into<String>, T: Into<Value>> FromIterator<(K, T)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Value::Container(Container::from_iter(iter))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Container {
    fn from(items: Vec<T>) -> Self {
        Container::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Container {
    fn from(items: &[T]) -> Self {
        Container::Array(items.iter().cloned().map(Into::into).collect())
    }
}

impl<K: Into<String>, T: Into<Value>> From<IndexMap<K, T>> for Container {
    fn from(entries: IndexMap<K, T>) -> Self {
        Container::from_iter(entries)
    }
}

impl<K: Into<String>, T: Into<Value>> From<BTreeMap<K, T>> for Container {
    fn from(entries: BTreeMap<K, T>) -> Self {
        Container::from_iter(entries)
    }
}

impl<T: Into<Value>> FromIterator<T> for Container {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Container::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, T: Into<Value>> FromIterator<(K, T)> for Container {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Container::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect::<Object>(),
        )
    }
}
