//! # value_as
//!
//! Lenient coercion of dynamically-typed values into strongly-typed Rust values.
//!
//! ## What is it for?
//!
//! Data that arrives loosely typed, from configuration files, untyped map decoding
//! or external APIs, often holds the right information in the wrong shape: a port
//! as `"8080"`, a flag as `1`, a ratio as `"0.5"`. This crate provides one set of
//! rule-consistent coercers so that every call site normalizes such data the same
//! way.
//!
//! ## Key Features
//!
//! - **Six coercers**: boolean, signed integer, unsigned integer, float, string
//!   and sequence
//! - **Explicit outcome**: scalar coercers return a [`Coerced<T>`], a value paired
//!   with a recognized flag, so "not convertible" is never confused with zero
//! - **Width aware**: [`Value`] keeps the native width of every number
//! - **Serde Compatible**: decode any serde format into a [`Value`], or build one
//!   from any `Serialize` type with [`to_value`]
//! - **Pure**: no shared state; every function is safe to call from any thread
//!
//! ## Quick Start
//!
//! ```rust
//! use value_as::{to_bool, to_f64, to_i64, to_string, Value};
//!
//! assert_eq!(to_bool(&Value::from("True")).into_parts(), (true, true));
//! assert_eq!(to_bool(&Value::from(2)).into_parts(), (false, true));
//! assert_eq!(to_i64(&Value::from(1.0)).into_parts(), (1, true));
//! assert_eq!(to_f64(&Value::from("2.5")).into_parts(), (2.5, true));
//! assert_eq!(to_string(&Value::from(vec![0])).into_parts(), ("[0]".to_string(), true));
//!
//! // Unrecognized input pairs the zero value with `false`
//! assert_eq!(to_i64(&Value::from("abcde")).into_parts(), (0, false));
//! ```
//!
//! ### Sequences
//!
//! ```rust
//! use value_as::{to_sequence, Value};
//!
//! let items = to_sequence(&Value::from(vec![1, 2, 3])).unwrap();
//! assert_eq!(items.len(), 3);
//!
//! assert!(to_sequence(&Value::Nil).unwrap().is_empty());
//! assert!(to_sequence(&Value::from("abcde")).is_err());
//! ```
//!
//! ### Decoded data
//!
//! ```rust
//! use value_as::{to_u64, to_value, Value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Settings { workers: String }
//!
//! let value = to_value(&Settings { workers: "4".to_string() }).unwrap();
//! let workers = value.as_map().and_then(|m| m.get("workers")).map(to_u64);
//! assert_eq!(workers.map(|c| c.into_parts()), Some((4, true)));
//! ```
//!
//! ## Conversion rules
//!
//! See the [`rules`] module for the full conversion table.

mod boolean;
pub mod error;
mod float;
mod integer;
pub mod literal;
pub mod macros;
pub mod map;
pub mod options;
pub mod outcome;
pub mod rules;
pub mod sequence;
pub mod ser;
mod string;
pub mod value;

pub use error::{Error, Result};
pub use map::ValueMap;
pub use options::{CoerceOptions, Overflow};
pub use outcome::Coerced;
pub use ser::ValueSerializer;
pub use value::{Described, Indirect, Kind, Number, Value};

use serde::Serialize;

/// Coerces `value` to a boolean.
///
/// # Examples
///
/// ```rust
/// use value_as::{indirect, to_bool, Indirect, Kind, Value};
///
/// assert_eq!(to_bool(&Value::from("t")).into_parts(), (true, true));
/// assert_eq!(to_bool(&Value::from(1u8)).into_parts(), (true, true));
/// assert_eq!(to_bool(&Value::from(-1.0)).into_parts(), (false, true));
/// assert_eq!(to_bool(&indirect(Value::from(true))).into_parts(), (true, true));
/// assert_eq!(to_bool(&Value::from(Indirect::nil(Kind::Bool))).into_parts(), (false, true));
/// assert_eq!(to_bool(&Value::from("")).into_parts(), (false, false));
/// assert_eq!(to_bool(&Value::Nil).into_parts(), (false, false));
/// ```
#[must_use]
pub fn to_bool(value: &Value) -> Coerced<bool> {
    to_bool_with_options(value, &CoerceOptions::default())
}

/// Coerces `value` to a boolean with custom options.
#[must_use]
pub fn to_bool_with_options(value: &Value, options: &CoerceOptions) -> Coerced<bool> {
    boolean::coerce(value, options)
}

/// Coerces `value` to an `i64`.
///
/// # Examples
///
/// ```rust
/// use value_as::{to_i64, Value};
///
/// assert_eq!(to_i64(&Value::from(true)).into_parts(), (1, true));
/// assert_eq!(to_i64(&Value::from(-2.7)).into_parts(), (-2, true));
/// assert_eq!(to_i64(&Value::from("-15")).into_parts(), (-15, true));
/// assert_eq!(to_i64(&Value::from("1.5")).into_parts(), (0, false));
/// ```
#[must_use]
pub fn to_i64(value: &Value) -> Coerced<i64> {
    to_i64_with_options(value, &CoerceOptions::default())
}

/// Coerces `value` to an `i64` with custom options.
#[must_use]
pub fn to_i64_with_options(value: &Value, options: &CoerceOptions) -> Coerced<i64> {
    integer::coerce(value, options)
}

/// Coerces `value` to a platform-width signed integer.
#[must_use]
pub fn to_int(value: &Value) -> Coerced<isize> {
    to_int_with_options(value, &CoerceOptions::default())
}

/// Coerces `value` to a platform-width signed integer with custom options.
#[must_use]
pub fn to_int_with_options(value: &Value, options: &CoerceOptions) -> Coerced<isize> {
    integer::coerce(value, options)
}

/// Coerces `value` to a `u64`.
///
/// Negative inputs follow [`CoerceOptions::overflow`]; by default they wrap.
///
/// # Examples
///
/// ```rust
/// use value_as::{to_u64, Value};
///
/// assert_eq!(to_u64(&Value::from(1u32)).into_parts(), (1, true));
/// assert_eq!(to_u64(&Value::from(-1)).into_parts(), (u64::MAX, true));
/// assert_eq!(to_u64(&Value::Nil).into_parts(), (0, false));
/// ```
#[must_use]
pub fn to_u64(value: &Value) -> Coerced<u64> {
    to_u64_with_options(value, &CoerceOptions::default())
}

/// Coerces `value` to a `u64` with custom options.
#[must_use]
pub fn to_u64_with_options(value: &Value, options: &CoerceOptions) -> Coerced<u64> {
    integer::coerce(value, options)
}

/// Coerces `value` to a platform-width unsigned integer.
#[must_use]
pub fn to_uint(value: &Value) -> Coerced<usize> {
    to_uint_with_options(value, &CoerceOptions::default())
}

/// Coerces `value` to a platform-width unsigned integer with custom options.
#[must_use]
pub fn to_uint_with_options(value: &Value, options: &CoerceOptions) -> Coerced<usize> {
    integer::coerce(value, options)
}

/// Coerces `value` to an `f64`.
///
/// # Examples
///
/// ```rust
/// use value_as::{to_f64, Value};
///
/// assert_eq!(to_f64(&Value::from(false)).into_parts(), (0.0, true));
/// assert_eq!(to_f64(&Value::from(3u16)).into_parts(), (3.0, true));
/// assert_eq!(to_f64(&Value::from("1e-3")).into_parts(), (0.001, true));
/// ```
#[must_use]
pub fn to_f64(value: &Value) -> Coerced<f64> {
    to_f64_with_options(value, &CoerceOptions::default())
}

/// Coerces `value` to an `f64` with custom options.
#[must_use]
pub fn to_f64_with_options(value: &Value, options: &CoerceOptions) -> Coerced<f64> {
    float::coerce(value, options)
}

/// Renders `value` as a string.
///
/// Indirections are not followed: even a non-nil indirection is unrecognized.
///
/// # Examples
///
/// ```rust
/// use value_as::{to_string, Described, Indirect, Kind, Value};
///
/// assert_eq!(to_string(&Value::from(1.0)).into_parts(), ("1".to_string(), true));
/// assert_eq!(to_string(&Value::from(vec![0])).into_parts(), ("[0]".to_string(), true));
///
/// let null = Described::diagnostic("demo::Null", "null");
/// assert_eq!(to_string(&Value::from(null)).into_parts(), ("null".to_string(), true));
///
/// let nil = Value::from(Indirect::nil(Kind::Bool));
/// assert_eq!(to_string(&nil).into_parts(), (String::new(), false));
/// ```
#[must_use]
pub fn to_string(value: &Value) -> Coerced<String> {
    string::coerce(value)
}

/// Returns the elements of a sequence.
///
/// Nil yields an empty sequence. Any other non-sequence input is an
/// [`Error::InvalidType`] naming `"array or slice"` and the observed type.
///
/// # Examples
///
/// ```rust
/// use value_as::{to_sequence, Error, Value};
///
/// let items = to_sequence(&Value::from(vec![1, 2, 3])).unwrap();
/// assert_eq!(items, vec![Value::from(1), Value::from(2), Value::from(3)]);
///
/// let err = to_sequence(&Value::from(true)).unwrap_err();
/// assert_eq!(err, Error::invalid_type("array or slice", "bool"));
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidType`] if `value` is neither nil nor a sequence.
pub fn to_sequence(value: &Value) -> Result<Vec<Value>> {
    sequence::coerce(value)
}

/// Boxes `value` behind one level of indirection.
///
/// # Examples
///
/// ```rust
/// use value_as::{indirect, Kind, Value};
///
/// let boxed = indirect(Value::from(true));
/// assert_eq!(boxed.kind(), Kind::Indirect);
/// assert_eq!(boxed.type_name(), "*bool");
/// ```
#[must_use]
pub fn indirect(value: Value) -> Value {
    Value::Indirect(Indirect::new(value))
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for enum variants that carry data, and
/// propagates custom errors raised by `T`'s `Serialize` implementation.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}
