//! JSON Pointer (RFC 6901) over [`Value`].
//!
//! Pointer lookups follow the same rules as [`Value::get`]: a token that does
//! not resolve yields `None`. Against an array a token must be a canonical
//! index (`0`, `17`, no leading zeros); `-` never resolves.

use std::borrow::Cow;

use crate::value::{Container, Value};

/// Unescapes a reference token: `~1` becomes `/`, then `~0` becomes `~`.
///
/// ```
/// use typed_json::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// assert_eq!(unescape_component("~01"), "~1");
/// ```
pub fn unescape_component(component: &str) -> Cow<'_, str> {
    if !component.contains('~') {
        return Cow::Borrowed(component);
    }
    // ~1 first, so that "~01" decodes to "~1" and not "/".
    Cow::Owned(component.replace("~1", "/").replace("~0", "~"))
}

/// Escapes a reference token: `~` becomes `~0`, then `/` becomes `~1`.
pub fn escape_component(component: &str) -> Cow<'_, str> {
    if !component.contains(['/', '~']) {
        return Cow::Borrowed(component);
    }
    Cow::Owned(component.replace('~', "~0").replace('/', "~1"))
}

/// Splits a pointer into unescaped tokens.
///
/// The empty pointer is the root. Anything else must start with `/`.
///
/// ```
/// use typed_json::parse_pointer;
///
/// assert_eq!(parse_pointer(""), Some(vec![]));
/// assert_eq!(parse_pointer("/"), Some(vec!["".to_string()]));
/// assert_eq!(parse_pointer("/a~1b/0"), Some(vec!["a/b".to_string(), "0".to_string()]));
/// assert_eq!(parse_pointer("foo"), None);
/// ```
pub fn parse_pointer(pointer: &str) -> Option<Vec<String>> {
    tokens(pointer).map(|tokens| tokens.map(Cow::into_owned).collect())
}

/// Joins tokens into a pointer, escaping each one.
pub fn format_pointer<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push('/');
        out.push_str(&escape_component(token.as_ref()));
    }
    out
}

/// Whether `token` is a canonical array index: digits only, no leading zero.
pub fn is_valid_index(token: &str) -> bool {
    let bytes = token.as_bytes();
    match bytes {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        _ => bytes.iter().all(u8::is_ascii_digit),
    }
}

fn tokens(pointer: &str) -> Option<impl Iterator<Item = Cow<'_, str>>> {
    let rest = match pointer {
        "" => None,
        _ => Some(pointer.strip_prefix('/')?),
    };
    Some(rest.into_iter().flat_map(|rest| rest.split('/')).map(unescape_component))
}

fn step<'v>(container: &'v Container, token: &str) -> Option<&'v Value> {
    match container {
        Container::Array(items) => {
            if !is_valid_index(token) {
                return None;
            }
            items.get(token.parse::<usize>().ok()?)
        }
        Container::Object(entries) => entries.get(token),
    }
}

impl Value {
    /// Looks up a value by JSON Pointer.
    ///
    /// ```
    /// use typed_json::{decode, Value};
    ///
    /// let doc = decode(br#"{"a/b":[10,{"~":true}]}"#).unwrap();
    /// assert_eq!(doc.pointer(""), Some(&doc));
    /// assert_eq!(doc.pointer("/a~1b/1/~0"), Some(&Value::Bool(true)));
    /// assert_eq!(doc.pointer("/a~1b/01"), None);
    /// assert_eq!(doc.pointer("a~1b"), None);
    /// ```
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        tokens(pointer)?.try_fold(self, |current, token| step(current.as_container()?, &token))
    }
}

impl Container {
    /// Looks up a value by JSON Pointer. The empty pointer has no container
    /// counterpart and yields `None`.
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        let mut tokens = tokens(pointer)?;
        let first = step(self, &tokens.next()?)?;
        tokens.try_fold(first, |current, token| step(current.as_container()?, &token))
    }
}
