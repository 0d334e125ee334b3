//! [`Number`] — the payload of [`Value::Number`](crate::Value::Number).
//!
//! The numeric token is kept as produced by the codec so that integers render
//! without a fractional part, but comparison is by magnitude: `0` and `0.0`
//! are the same number.

use std::cmp::Ordering;
use std::fmt;

/// A finite JSON number compared by magnitude.
#[derive(Clone)]
pub struct Number(serde_json::Number);

/// Integer view used for exact comparison.
enum Exact {
    Int(i128),
    Float(f64),
}

impl Number {
    /// Builds a number from a float. Returns `None` for NaN and infinities,
    /// which JSON cannot represent.
    ///
    /// # Example
    ///
    /// ```
    /// use typed_json::Number;
    ///
    /// assert!(Number::from_f64(1.5).is_some());
    /// assert!(Number::from_f64(f64::NAN).is_none());
    /// ```
    pub fn from_f64(f: f64) -> Option<Number> {
        serde_json::Number::from_f64(f).map(Number)
    }

    /// Whether the token was written without a fraction or exponent.
    pub fn is_integer(&self) -> bool {
        !self.0.is_f64()
    }

    /// Whether the token has a fraction or exponent.
    pub fn is_f64(&self) -> bool {
        self.0.is_f64()
    }

    /// The value as `i64`, if it is an integer token that fits.
    pub fn as_i64(&self) -> Option<i64> {
        self.0.as_i64()
    }

    /// The value as `u64`, if it is a non-negative integer token that fits.
    pub fn as_u64(&self) -> Option<u64> {
        self.0.as_u64()
    }

    /// The value as `f64`. Large integers may lose precision.
    pub fn as_f64(&self) -> f64 {
        // Without `arbitrary_precision` every serde_json number has an f64 view.
        self.0.as_f64().unwrap_or(0.0)
    }

    /// The underlying codec token.
    pub fn as_json(&self) -> &serde_json::Number {
        &self.0
    }

    fn exact(&self) -> Exact {
        if let Some(i) = self.0.as_i64() {
            Exact::Int(i128::from(i))
        } else if let Some(u) = self.0.as_u64() {
            Exact::Int(i128::from(u))
        } else {
            Exact::Float(self.as_f64())
        }
    }
}

/// Compares an integer with a float without routing the integer through `f64`
/// when the float is integral and in range.
fn cmp_int_float(i: i128, f: f64) -> Ordering {
    // i128 covers every i64/u64 exactly; floats beyond ±2^127 are out of reach.
    const LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;
    if f >= LIMIT {
        return Ordering::Less;
    }
    if f < -LIMIT {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    match i.cmp(&(whole as i128)) {
        Ordering::Equal if f > whole => Ordering::Less,
        Ordering::Equal if f < whole => Ordering::Greater,
        ord => ord,
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.exact(), other.exact()) {
            (Exact::Int(a), Exact::Int(b)) => a.cmp(&b),
            (Exact::Int(a), Exact::Float(b)) => cmp_int_float(a, b),
            (Exact::Float(a), Exact::Int(b)) => cmp_int_float(b, a).reverse(),
            // Finite by construction, so total_cmp only differs on -0.0.
            (Exact::Float(a), Exact::Float(b)) => {
                if a == b {
                    Ordering::Equal
                } else {
                    a.total_cmp(&b)
                }
            }
        }
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<serde_json::Number> for Number {
    fn from(n: serde_json::Number) -> Self {
        Number(n)
    }
}

impl From<Number> for serde_json::Number {
    fn from(n: Number) -> Self {
        n.0
    }
}

macro_rules! from_integer {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for Number {
                fn from(i: $ty) -> Self {
                    Number(serde_json::Number::from(i))
                }
            }
        )*
    };
}

from_integer! {
    i8 i16 i32 i64 isize
    u8 u16 u32 u64 usize
}
