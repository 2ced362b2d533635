//! Configuration options for coercion.
//!
//! This module provides types to tune the few places where coercion has a choice:
//!
//! - [`CoerceOptions`]: Main configuration struct
//! - [`Overflow`]: What happens when an integer does not fit the target width
//!
//! ## Examples
//!
//! ```rust
//! use value_as::{to_u64_with_options, CoerceOptions, Overflow, Value};
//!
//! let value = Value::from(-1i32);
//!
//! // Default: two's-complement wraparound
//! let wrapped = to_u64_with_options(&value, &CoerceOptions::new());
//! assert_eq!(wrapped.into_parts(), (u64::MAX, true));
//!
//! // Clamp into the target range instead
//! let options = CoerceOptions::new().with_overflow(Overflow::Saturate);
//! assert_eq!(to_u64_with_options(&value, &options).into_parts(), (0, true));
//! ```

/// Policy for integers that fall outside the target type's range.
///
/// Applies to negative inputs coerced to unsigned targets, unsigned inputs above
/// `i64::MAX` coerced to signed targets, and 64-bit inputs narrowed to a 32-bit
/// `isize`/`usize`.
///
/// # Examples
///
/// ```rust
/// use value_as::Overflow;
///
/// assert_eq!(Overflow::default(), Overflow::Wrap);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Overflow {
    /// Two's-complement wraparound, the semantics of an `as` cast.
    #[default]
    Wrap,
    /// Clamp to the nearest representable value.
    Saturate,
}

/// Configuration options for coercion.
///
/// # Examples
///
/// ```rust
/// use value_as::{CoerceOptions, Overflow};
///
/// let options = CoerceOptions::new()
///     .with_overflow(Overflow::Saturate)
///     .with_trimmed_literals(true);
/// assert_eq!(options.overflow, Overflow::Saturate);
/// assert!(options.trim_literals);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoerceOptions {
    pub overflow: Overflow,
    /// Trim surrounding whitespace from strings before classifying them as literals.
    pub trim_literals: bool,
}

impl CoerceOptions {
    /// Creates default options (wraparound, untrimmed literals).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_as::{CoerceOptions, Overflow};
    ///
    /// let options = CoerceOptions::new();
    /// assert_eq!(options.overflow, Overflow::Wrap);
    /// assert!(!options.trim_literals);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the out-of-range policy for integer targets.
    #[must_use]
    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Enables or disables whitespace trimming of string literals.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_as::{to_bool_with_options, CoerceOptions, Value};
    ///
    /// let options = CoerceOptions::new().with_trimmed_literals(true);
    /// let outcome = to_bool_with_options(&Value::from(" true\n"), &options);
    /// assert_eq!(outcome.into_parts(), (true, true));
    /// ```
    #[must_use]
    pub fn with_trimmed_literals(mut self, trim: bool) -> Self {
        self.trim_literals = trim;
        self
    }

    pub(crate) fn literal<'a>(&self, s: &'a str) -> &'a str {
        if self.trim_literals {
            s.trim()
        } else {
            s
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_trimming() {
        let options = CoerceOptions::new();
        assert_eq!(options.literal(" 1 "), " 1 ");

        let options = options.with_trimmed_literals(true);
        assert_eq!(options.literal(" 1 "), "1");
        assert_eq!(options.literal("\t"), "");
    }

    #[test]
    fn test_builder_keeps_other_fields() {
        let options = CoerceOptions::new()
            .with_trimmed_literals(true)
            .with_overflow(Overflow::Saturate);
        assert!(options.trim_literals);
        assert_eq!(options.overflow, Overflow::Saturate);
    }
}
