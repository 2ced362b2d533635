//! Classification of textual literals.
//!
//! Every coercer that accepts strings (boolean, integer, unsigned, float) goes
//! through this module, so the accepted grammar is the same everywhere.
//!
//! ## Grammar
//!
//! | Literal | Accepted |
//! |---------|----------|
//! | Boolean | `true` `True` `T` `t` `1`, `false` `False` `F` `f` `0` |
//! | Integer | optional `+`/`-`, then one or more ASCII digits, within `i64::MIN ..= u64::MAX` |
//! | Float | optional sign, digits with optional fraction, optional exponent; finite only |
//!
//! Nothing is case folded and no surrounding whitespace is accepted. Malformed
//! input yields `None`; classification never panics.
//!
//! ## Examples
//!
//! ```rust
//! use value_as::literal::{classify, parse_float, parse_integer};
//!
//! assert_eq!(parse_integer("-42"), Some(-42));
//! assert_eq!(parse_integer("4.2"), None);
//! assert_eq!(parse_float("4.2e1"), Some(42.0));
//!
//! let literal = classify("1");
//! assert_eq!(literal.boolean, Some(true));
//! assert_eq!(literal.integer, Some(1));
//! assert_eq!(literal.float, Some(1.0));
//! ```

/// Every reading a string admits as a literal.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Literal {
    pub boolean: Option<bool>,
    pub integer: Option<i128>,
    pub float: Option<f64>,
}

impl Literal {
    /// Returns `true` if the string reads as an integer or a float.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.integer.is_some() || self.float.is_some()
    }

    /// Returns `true` if the string admits no literal reading at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.boolean.is_none() && !self.is_numeric()
    }
}

/// Classifies `s` against all three literal grammars.
#[must_use]
pub fn classify(s: &str) -> Literal {
    Literal {
        boolean: parse_bool(s),
        integer: parse_integer(s),
        float: parse_float(s),
    }
}

/// Parses a boolean literal.
///
/// # Examples
///
/// ```rust
/// use value_as::literal::parse_bool;
///
/// assert_eq!(parse_bool("T"), Some(true));
/// assert_eq!(parse_bool("False"), Some(false));
/// assert_eq!(parse_bool("TRUE"), None);
/// assert_eq!(parse_bool("yes"), None);
/// ```
#[must_use]
pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "true" | "True" | "T" | "t" | "1" => Some(true),
        "false" | "False" | "F" | "f" | "0" => Some(false),
        _ => None,
    }
}

/// Parses a base-10 integer literal.
///
/// The result covers both 64-bit families: anything from `i64::MIN` up to
/// `u64::MAX` is accepted.
///
/// # Examples
///
/// ```rust
/// use value_as::literal::parse_integer;
///
/// assert_eq!(parse_integer("+7"), Some(7));
/// assert_eq!(parse_integer("18446744073709551615"), Some(u64::MAX as i128));
/// assert_eq!(parse_integer("18446744073709551616"), None);
/// assert_eq!(parse_integer("1_000"), None);
/// ```
#[must_use]
pub fn parse_integer(s: &str) -> Option<i128> {
    let n = s.parse::<i128>().ok()?;
    if n < i128::from(i64::MIN) || n > i128::from(u64::MAX) {
        return None;
    }
    Some(n)
}

/// Parses a finite floating-point literal.
///
/// # Examples
///
/// ```rust
/// use value_as::literal::parse_float;
///
/// assert_eq!(parse_float("-1.5"), Some(-1.5));
/// assert_eq!(parse_float(".5"), Some(0.5));
/// assert_eq!(parse_float("1e3"), Some(1000.0));
/// assert_eq!(parse_float("NaN"), None);
/// assert_eq!(parse_float("1e400"), None);
/// ```
#[must_use]
pub fn parse_float(s: &str) -> Option<f64> {
    let admissible = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !admissible || !s.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<f64>().ok().filter(|f| f.is_finite())
}
