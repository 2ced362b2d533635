//! The result shape shared by all scalar coercers.
//!
//! A [`Coerced<T>`] pairs the converted value with a recognized flag. An
//! unrecognized outcome always carries `T::default()`, so callers must read the
//! flag rather than the value to tell "not convertible" apart from "converted to
//! zero".
//!
//! ```rust
//! use value_as::{to_bool, Value};
//!
//! let zero = to_bool(&Value::from(0));
//! let junk = to_bool(&Value::from("asdf"));
//!
//! assert_eq!(zero.value(), junk.value());
//! assert!(zero.is_recognized());
//! assert!(!junk.is_recognized());
//! ```

/// A converted value paired with whether the input was recognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coerced<T> {
    value: T,
    recognized: bool,
}

impl<T> Coerced<T> {
    /// A recognized outcome holding `value`.
    #[inline]
    #[must_use]
    pub const fn recognized(value: T) -> Self {
        Coerced {
            value,
            recognized: true,
        }
    }

    /// An unrecognized outcome holding the zero value of `T`.
    #[inline]
    #[must_use]
    pub fn unrecognized() -> Self
    where
        T: Default,
    {
        Coerced {
            value: T::default(),
            recognized: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        self.recognized
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Splits the outcome into `(value, recognized)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_as::{to_i64, Value};
    ///
    /// assert_eq!(to_i64(&Value::from(true)).into_parts(), (1, true));
    /// assert_eq!(to_i64(&Value::from("abcde")).into_parts(), (0, false));
    /// ```
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (T, bool) {
        (self.value, self.recognized)
    }

    /// Returns `Some(value)` when recognized.
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        if self.recognized {
            Some(self.value)
        } else {
            None
        }
    }

    pub(crate) fn from_option(value: Option<T>) -> Self
    where
        T: Default,
    {
        match value {
            Some(v) => Coerced::recognized(v),
            None => Coerced::unrecognized(),
        }
    }

    /// Applies `f` to a recognized value; unrecognized outcomes stay unrecognized.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Coerced<U>
    where
        U: Default,
        F: FnOnce(T) -> U,
    {
        if self.recognized {
            Coerced::recognized(f(self.value))
        } else {
            Coerced::unrecognized()
        }
    }
}

impl<T> From<Coerced<T>> for (T, bool) {
    fn from(outcome: Coerced<T>) -> Self {
        outcome.into_parts()
    }
}

impl<T> From<Coerced<T>> for Option<T> {
    fn from(outcome: Coerced<T>) -> Self {
        outcome.into_option()
    }
}

impl<T: PartialEq> PartialEq<(T, bool)> for Coerced<T> {
    fn eq(&self, other: &(T, bool)) -> bool {
        self.value == other.0 && self.recognized == other.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_is_zero() {
        let outcome: Coerced<i64> = Coerced::unrecognized();
        assert_eq!(outcome.into_parts(), (0, false));

        let outcome: Coerced<String> = Coerced::unrecognized();
        assert_eq!(outcome.value(), "");
    }

    #[test]
    fn test_option_round() {
        assert_eq!(Coerced::recognized(3u8).into_option(), Some(3));
        assert_eq!(Coerced::<u8>::from_option(None), (0, false));
        assert_eq!(Coerced::from_option(Some(false)), (false, true));
    }

    #[test]
    fn test_map_keeps_flag() {
        let outcome = Coerced::recognized(2i64).map(|n| n * 2);
        assert_eq!(outcome, (4, true));

        let outcome = Coerced::<i64>::unrecognized().map(|n| n + 1);
        assert_eq!(outcome, (0, false));
    }

    #[test]
    fn test_into_tuple() {
        let pair: (bool, bool) = Coerced::recognized(true).into();
        assert_eq!(pair, (true, true));
    }
}
