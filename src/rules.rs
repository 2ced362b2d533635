//! Conversion Rules
//!
//! This module documents the complete conversion table implemented by the
//! coercers. It contains no code.
//!
//! # Overview
//!
//! Every scalar coercer answers two questions about its input: *is this a shape I
//! understand?* and, if so, *what value does it denote?* The first answer is the
//! recognized flag of [`Coerced`](crate::Coerced); an unrecognized input always
//! comes back with the zero value of the target type.
//!
//! # Conversion Table
//!
//! | Input | `to_bool` | `to_i64` / `to_u64` | `to_f64` | `to_string` | `to_sequence` |
//! |-------|-----------|---------------------|----------|-------------|---------------|
//! | nil | no | no | no | no | empty |
//! | `bool` | itself | `1` / `0` | `1.0` / `0.0` | `true` / `false` | error |
//! | integer | `== 1` | by value | widened | base 10 | error |
//! | float | `== 1.0` | truncated | widened | shortest decimal, `+Inf` / `-Inf` / `NaN` | error |
//! | string | boolean literal | integer literal | float literal | itself | error |
//! | sequence | no | no | no | `[a b c]` | elements |
//! | map | no | no | no | no | error |
//! | indirection | followed, nil is `false` | no | no | no | error |
//! | described | no | no | no | error text, else diagnostic text | error |
//! | function | no | no | no | no | error |
//!
//! "no" means unrecognized; "error" means
//! [`Error::InvalidType`](crate::Error::InvalidType).
//!
//! # Literals
//!
//! Strings are classified by [`literal`](crate::literal):
//!
//! - **Boolean**: `true`, `True`, `T`, `t`, `1` and `false`, `False`, `F`, `f`, `0`.
//!   Nothing else, not even `TRUE`.
//! - **Integer**: optional sign, ASCII digits, between `i64::MIN` and `u64::MAX`.
//! - **Float**: optional sign, digits, optional fraction and exponent. The words
//!   `inf` and `NaN` are rejected, as are literals too large to be finite.
//!
//! With [`CoerceOptions::with_trimmed_literals`](crate::CoerceOptions::with_trimmed_literals)
//! surrounding whitespace is removed before classification.
//!
//! ```rust
//! use value_as::{to_bool, to_f64, to_i64, Value};
//!
//! assert_eq!(to_bool(&Value::from("1")).into_parts(), (true, true));
//! assert_eq!(to_i64(&Value::from("1")).into_parts(), (1, true));
//! assert_eq!(to_f64(&Value::from("1")).into_parts(), (1.0, true));
//! assert_eq!(to_bool(&Value::from("TRUE")).into_parts(), (false, false));
//! ```
//!
//! # Integer Ranges
//!
//! Integer inputs are widened to 128 bits and then fitted into the target. When the
//! value does not fit, [`Overflow`](crate::Overflow) decides:
//!
//! | Input | Target | `Wrap` (default) | `Saturate` |
//! |-------|--------|------------------|------------|
//! | `-1` | `u64` | `18446744073709551615` | `0` |
//! | `u64::MAX` | `i64` | `-1` | `i64::MAX` |
//! | `-1.5` | `u64` | `18446744073709551615` | `0` |
//! | `NaN` | any | `0` | `0` |
//!
//! Floats are truncated toward zero before fitting. On 64-bit targets `isize` and
//! `usize` behave exactly like `i64` and `u64`.
//!
//! # Boolean Numbers
//!
//! A number is `true` only when it equals one exactly. Zero, negative numbers and
//! fractions are all recognized as `false`:
//!
//! ```rust
//! use value_as::{to_bool, Value};
//!
//! for n in [0.0, -1.0, 2.0, 0.999] {
//!     assert_eq!(to_bool(&Value::from(n)).into_parts(), (false, true));
//! }
//! ```
//!
//! # Aggregate Rendering
//!
//! Sequences render as their elements separated by single spaces inside brackets.
//! Elements render as `to_string` would, with a few additions for shapes that
//! `to_string` rejects at the top level:
//!
//! | Element | Rendering |
//! |---------|-----------|
//! | nil | `<nil>` |
//! | nil indirection | `<nil>` |
//! | indirection | `&` followed by the target |
//! | map | `map[key:value key:value]`, insertion order |
//! | function | its signature |
//! | infinite or NaN float | `+Inf`, `-Inf`, `NaN` |
//!
//! ```rust
//! use value_as::{indirect, to_string, value, Value};
//!
//! let mixed = Value::from(vec![value!(nil), indirect(value!(1)), value!([1.5, "x"])]);
//! assert_eq!(to_string(&mixed).into_parts(), ("[<nil> &1 [1.5 x]]".to_string(), true));
//! ```
