//! Navigation by array index or object key.
//!
//! Every lookup returns `None` when the step does not apply: index out of
//! bounds, missing key, a key used on an array, an index used on an object,
//! or any step into a scalar. Nothing here panics.

use std::fmt;

use crate::value::{Container, Value};

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl Sealed for super::PathStep {}
    impl<T: ?Sized + Sealed> Sealed for &T {}
}

/// A single navigation step into a [`Container`].
///
/// Implemented for `usize` (array index), `str`/`String` (object key),
/// [`PathStep`], and references to any of them.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, container: &'v Container) -> Option<&'v Value>;
}

impl Index for usize {
    fn index_into<'v>(&self, container: &'v Container) -> Option<&'v Value> {
        match container {
            Container::Array(items) => items.get(*self),
            Container::Object(_) => None,
        }
    }
}

impl Index for str {
    fn index_into<'v>(&self, container: &'v Container) -> Option<&'v Value> {
        match container {
            Container::Object(entries) => entries.get(self),
            Container::Array(_) => None,
        }
    }
}

impl Index for String {
    fn index_into<'v>(&self, container: &'v Container) -> Option<&'v Value> {
        self.as_str().index_into(container)
    }
}

impl<T: ?Sized + Index> Index for &T {
    fn index_into<'v>(&self, container: &'v Container) -> Option<&'v Value> {
        (**self).index_into(container)
    }
}

/// An owned step, for paths that mix indices and keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
    Index(usize),
    Key(String),
}

impl Index for PathStep {
    fn index_into<'v>(&self, container: &'v Container) -> Option<&'v Value> {
        match self {
            PathStep::Index(i) => i.index_into(container),
            PathStep::Key(k) => k.index_into(container),
        }
    }
}

impl From<usize> for PathStep {
    fn from(i: usize) -> Self {
        PathStep::Index(i)
    }
}

impl From<&str> for PathStep {
    fn from(k: &str) -> Self {
        PathStep::Key(k.to_owned())
    }
}

impl From<String> for PathStep {
    fn from(k: String) -> Self {
        PathStep::Key(k)
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Index(i) => write!(f, "[{i}]"),
            PathStep::Key(k) => write!(f, ".{k}"),
        }
    }
}

impl Container {
    /// Looks up an element by index or an entry by key.
    ///
    /// ```
    /// use typed_json::{Container, Value};
    ///
    /// let arr = Container::from(vec!["a", "b"]);
    /// assert_eq!(arr.get(1), Some(&Value::from("b")));
    /// assert_eq!(arr.get(2), None);
    /// assert_eq!(arr.get("a"), None);
    /// ```
    pub fn get<I: Index>(&self, index: I) -> Option<&Value> {
        index.index_into(self)
    }

    /// Reads an object entry as if it were a named field. Same as `get(name)`.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl Value {
    /// Looks up an element or entry of a container value.
    ///
    /// Scalars have no children, so this is `None` for them.
    pub fn get<I: Index>(&self, index: I) -> Option<&Value> {
        self.as_container()?.get(index)
    }

    /// Reads an object entry as if it were a named field. Same as `get(name)`.
    ///
    /// ```
    /// use typed_json::{decode, Value};
    ///
    /// let doc = decode(br#"{"foo":{"bar":{"baz":"boo"}}}"#).unwrap();
    /// let baz = doc.field("foo").and_then(|v| v.field("bar")).and_then(|v| v.field("baz"));
    /// assert_eq!(baz, Some(&Value::from("boo")));
    /// assert_eq!(baz, doc.get("foo").and_then(|v| v.get("bar")).and_then(|v| v.get("baz")));
    /// ```
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }

    /// Follows each step in turn, stopping at the first one that is absent.
    ///
    /// ```
    /// use typed_json::{decode, PathStep, Value};
    ///
    /// let doc = decode(br#"[[],[[],[],["foo"]]]"#).unwrap();
    /// assert_eq!(doc.get_path([1usize, 2, 0]), Some(&Value::from("foo")));
    ///
    /// let doc = decode(br#"{"a":[{"b":true}]}"#).unwrap();
    /// let path = [PathStep::from("a"), PathStep::from(0usize), PathStep::from("b")];
    /// assert_eq!(doc.get_path(&path), Some(&Value::Bool(true)));
    /// ```
    pub fn get_path<P>(&self, path: P) -> Option<&Value>
    where
        P: IntoIterator,
        P::Item: Index,
    {
        path.into_iter().try_fold(self, |current, step| current.get(step))
    }
}
