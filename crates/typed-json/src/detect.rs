//! Turning a raw [`Scalar`] into a `Bool` or a `Number`.

use crate::number::Number;
use crate::raw::Scalar;
use crate::value::Value;

/// How keyword scalars (`true`/`false`) are typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BooleanPolicy {
    /// Keywords become [`Value::Bool`], literals become [`Value::Number`].
    #[default]
    Distinct,
    /// Keywords become `Number(1)` / `Number(0)`.
    ///
    /// Earlier releases decoded every boolean this way. Opt in only for
    /// consumers that still compare booleans against numbers.
    Numeric,
}

impl BooleanPolicy {
    /// Types a scalar according to this policy.
    ///
    /// # Example
    ///
    /// ```
    /// use typed_json::{BooleanPolicy, Number, Scalar, Value};
    ///
    /// let t = BooleanPolicy::Distinct.resolve(Scalar::Keyword(true));
    /// assert_eq!(t, Value::Bool(true));
    ///
    /// let legacy = BooleanPolicy::Numeric.resolve(Scalar::Keyword(true));
    /// assert_eq!(legacy, Value::Number(Number::from(1)));
    /// ```
    pub fn resolve(self, scalar: Scalar) -> Value {
        match (self, scalar) {
            (_, Scalar::Literal(n)) => Value::Number(n),
            (BooleanPolicy::Distinct, Scalar::Keyword(b)) => Value::Bool(b),
            (BooleanPolicy::Numeric, Scalar::Keyword(b)) => {
                Value::Number(Number::from(u8::from(b)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_keeps_keywords_boolean() {
        let policy = BooleanPolicy::default();
        assert_eq!(policy.resolve(Scalar::Keyword(false)), Value::Bool(false));
        assert_eq!(
            policy.resolve(Scalar::Literal(Number::from(0))),
            Value::Number(Number::from(0))
        );
    }

    #[test]
    fn numeric_folds_keywords_into_numbers() {
        let policy = BooleanPolicy::Numeric;
        assert_eq!(policy.resolve(Scalar::Keyword(false)), Value::Number(Number::from(0)));
        assert_eq!(policy.resolve(Scalar::Keyword(true)), Value::Number(Number::from(1)));
        assert_ne!(policy.resolve(Scalar::Keyword(true)), Value::Bool(true));
    }

    #[test]
    fn literals_are_never_booleans() {
        for policy in [BooleanPolicy::Distinct, BooleanPolicy::Numeric] {
            let v = policy.resolve(Scalar::Literal(Number::from(1)));
            assert_eq!(v.as_bool(), None);
        }
    }
}
