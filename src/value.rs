//! Dynamic value representation for coercion inputs.
//!
//! This module provides the [`Value`] enum, the closed set of shapes the coercers
//! accept. Values are usually built from native Rust data with `From`, with the
//! [`value!`](crate::value!) macro, or decoded from any serde format.
//!
//! ## Core Types
//!
//! - [`Value`]: nil, bool, number, string, sequence, map, indirection, described, function
//! - [`Number`]: one variant per native numeric width
//! - [`Indirect`]: a one-level pointer-like wrapper, possibly nil
//! - [`Described`]: a value that exposes error text and/or diagnostic text
//! - [`Kind`]: the flat shape tag of a value
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use value_as::{indirect, Indirect, Kind, Value};
//!
//! let nil = Value::Nil;
//! let flag = Value::from(true);
//! let small = Value::from(7u8);
//! let list = Value::from(vec![1, 2, 3]);
//! let boxed = indirect(Value::from(false));
//! let dangling = Value::from(Indirect::nil(Kind::Bool));
//! ```
//!
//! ### Rendering
//!
//! `Display` renders values the way aggregate formatting prints them: sequences are
//! bracketed and space separated, nil is `<nil>`.
//!
//! ```rust
//! use value_as::Value;
//!
//! let list = Value::from(vec![Value::from(1), Value::Nil, Value::from("a")]);
//! assert_eq!(list.to_string(), "[1 <nil> a]");
//! ```

use crate::ValueMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The shape tag of a [`Value`], without its payload.
///
/// # Examples
///
/// ```rust
/// use value_as::{Kind, Value};
///
/// assert_eq!(Value::from(1u32).kind(), Kind::U32);
/// assert_eq!(Kind::U32.as_str(), "u32");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Nil,
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    String,
    Sequence,
    Map,
    Indirect,
    Described,
    Function,
}

impl Kind {
    /// Returns the name used for this kind in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Kind::Nil => "nil",
            Kind::Bool => "bool",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::Isize => "isize",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::Usize => "usize",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::String => "string",
            Kind::Sequence => "sequence",
            Kind::Map => "map",
            Kind::Indirect => "indirect",
            Kind::Described => "described",
            Kind::Function => "function",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric value tagged with its native width.
///
/// Keeping the width lets coercion apply the conversion rules of the actual
/// source type, and lets error messages name it.
///
/// # Examples
///
/// ```rust
/// use value_as::Number;
///
/// assert!(Number::U8(1).is_unit());
/// assert!(Number::F64(1.0).is_unit());
/// assert!(!Number::I32(-1).is_unit());
/// assert_eq!(Number::F64(2.5).to_string(), "2.5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
}

impl Number {
    /// Returns the width tag of this number.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Number::I8(_) => Kind::I8,
            Number::I16(_) => Kind::I16,
            Number::I32(_) => Kind::I32,
            Number::I64(_) => Kind::I64,
            Number::Isize(_) => Kind::Isize,
            Number::U8(_) => Kind::U8,
            Number::U16(_) => Kind::U16,
            Number::U32(_) => Kind::U32,
            Number::U64(_) => Kind::U64,
            Number::Usize(_) => Kind::Usize,
            Number::F32(_) => Kind::F32,
            Number::F64(_) => Kind::F64,
        }
    }

    /// Returns `true` for floating-point widths.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::F32(_) | Number::F64(_))
    }

    /// Returns `true` for signed and unsigned integer widths.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        !self.is_float()
    }

    /// Returns the exact value of an integer width. Floats return `None`.
    ///
    /// Every 64-bit signed and unsigned value fits in an `i128`.
    #[inline]
    #[must_use]
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Number::I8(n) => Some(n.into()),
            Number::I16(n) => Some(n.into()),
            Number::I32(n) => Some(n.into()),
            Number::I64(n) => Some(n.into()),
            Number::Isize(n) => Some(n as i128),
            Number::U8(n) => Some(n.into()),
            Number::U16(n) => Some(n.into()),
            Number::U32(n) => Some(n.into()),
            Number::U64(n) => Some(n.into()),
            Number::Usize(n) => Some(n as i128),
            Number::F32(_) | Number::F64(_) => None,
        }
    }

    /// Converts this number to an `f64`, rounding integers beyond 2^53.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::F32(f) => f64::from(f),
            Number::F64(f) => f,
            Number::I8(n) => f64::from(n),
            Number::I16(n) => f64::from(n),
            Number::I32(n) => f64::from(n),
            Number::I64(n) => n as f64,
            Number::Isize(n) => n as f64,
            Number::U8(n) => f64::from(n),
            Number::U16(n) => f64::from(n),
            Number::U32(n) => f64::from(n),
            Number::U64(n) => n as f64,
            Number::Usize(n) => n as f64,
        }
    }

    /// Returns `true` if the value is exactly one.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        match self.as_i128() {
            Some(n) => n == 1,
            None => self.as_f64() == 1.0,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I8(n) => write!(f, "{}", n),
            Number::I16(n) => write!(f, "{}", n),
            Number::I32(n) => write!(f, "{}", n),
            Number::I64(n) => write!(f, "{}", n),
            Number::Isize(n) => write!(f, "{}", n),
            Number::U8(n) => write!(f, "{}", n),
            Number::U16(n) => write!(f, "{}", n),
            Number::U32(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            Number::Usize(n) => write!(f, "{}", n),
            Number::F32(n) => write_float(f, f64::from(*n), n),
            Number::F64(n) => write_float(f, *n, n),
        }
    }
}

// Non-finite floats use the `+Inf` / `-Inf` / `NaN` spelling of aggregate formatting.
fn write_float(f: &mut fmt::Formatter<'_>, wide: f64, n: &dyn fmt::Display) -> fmt::Result {
    if wide.is_nan() {
        f.write_str("NaN")
    } else if wide.is_infinite() {
        f.write_str(if wide > 0.0 { "+Inf" } else { "-Inf" })
    } else {
        write!(f, "{}", n)
    }
}

/// A one-level indirection to a value, which may be nil.
///
/// A nil indirection still knows the kind it points to, the way a typed null
/// pointer does.
///
/// # Examples
///
/// ```rust
/// use value_as::{Indirect, Kind, Value};
///
/// let some = Indirect::new(Value::from(true));
/// assert_eq!(some.pointee(), Kind::Bool);
/// assert_eq!(some.target(), Some(&Value::Bool(true)));
///
/// let nil = Indirect::nil(Kind::Bool);
/// assert!(nil.is_nil());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Indirect {
    pointee: Kind,
    target: Option<Box<Value>>,
}

impl Indirect {
    /// Boxes `value` behind an indirection.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Indirect {
            pointee: value.kind(),
            target: Some(Box::new(value)),
        }
    }

    /// A nil indirection to a value of kind `pointee`.
    #[must_use]
    pub const fn nil(pointee: Kind) -> Self {
        Indirect {
            pointee,
            target: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn pointee(&self) -> Kind {
        self.pointee
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> Option<&Value> {
        self.target.as_deref()
    }

    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        self.target.is_none()
    }
}

/// A value that exposes a textual representation: error text, diagnostic text, or both.
///
/// The text is captured when the value is built, so a `Described` is plain data
/// that can be cloned, compared and sent across threads.
///
/// # Examples
///
/// ```rust
/// use value_as::Described;
///
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
/// let described = Described::from_error(&err);
/// assert_eq!(described.error_text(), Some("disk on fire"));
/// assert_eq!(described.text(), "disk on fire");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Described {
    type_name: String,
    error: Option<String>,
    diagnostic: Option<String>,
}

impl Described {
    /// A value of type `type_name` exposing only error text.
    #[must_use]
    pub fn error(type_name: impl Into<String>, text: impl Into<String>) -> Self {
        Described {
            type_name: type_name.into(),
            error: Some(text.into()),
            diagnostic: None,
        }
    }

    /// A value of type `type_name` exposing only diagnostic text.
    #[must_use]
    pub fn diagnostic(type_name: impl Into<String>, text: impl Into<String>) -> Self {
        Described {
            type_name: type_name.into(),
            error: None,
            diagnostic: Some(text.into()),
        }
    }

    /// Adds error text to this value.
    #[must_use]
    pub fn with_error(mut self, text: impl Into<String>) -> Self {
        self.error = Some(text.into());
        self
    }

    /// Adds diagnostic text to this value.
    #[must_use]
    pub fn with_diagnostic(mut self, text: impl Into<String>) -> Self {
        self.diagnostic = Some(text.into());
        self
    }

    /// Captures an error's message and type name.
    #[must_use]
    pub fn from_error<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Described::error(std::any::type_name::<E>(), err.to_string())
    }

    /// Captures a displayable value's text and type name.
    #[must_use]
    pub fn from_display<T>(value: &T) -> Self
    where
        T: fmt::Display + ?Sized,
    {
        Described::diagnostic(std::any::type_name::<T>(), value.to_string())
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[must_use]
    pub fn error_text(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn diagnostic_text(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    /// The preferred text: error text when present, otherwise diagnostic text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.error
            .as_deref()
            .or(self.diagnostic.as_deref())
            .unwrap_or_default()
    }
}

/// A dynamically-typed input value.
///
/// # Examples
///
/// ```rust
/// use value_as::{Kind, Value};
///
/// let value = Value::from("42");
/// assert!(value.is_string());
/// assert_eq!(value.kind(), Kind::String);
/// assert_eq!(value.type_name(), "string");
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Nil,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Value>),
    Map(ValueMap),
    Indirect(Indirect),
    Described(Described),
    /// An opaque function value, identified by its signature.
    Function(String),
}

impl Value {
    /// Captures an error as a [`Described`] value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_as::{to_string, Value};
    ///
    /// let err = std::io::Error::new(std::io::ErrorKind::Other, "error value");
    /// assert_eq!(to_string(&Value::error(&err)).into_parts(), ("error value".to_string(), true));
    /// ```
    #[must_use]
    pub fn error<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        Value::Described(Described::from_error(err))
    }

    /// Captures a displayable value as a [`Described`] value.
    #[must_use]
    pub fn display<T>(value: &T) -> Self
    where
        T: fmt::Display + ?Sized,
    {
        Value::Described(Described::from_display(value))
    }

    /// A function value with the given signature, e.g. `"fn()"`.
    #[must_use]
    pub fn function(signature: impl Into<String>) -> Self {
        Value::Function(signature.into())
    }

    /// Returns the shape tag of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Nil => Kind::Nil,
            Value::Bool(_) => Kind::Bool,
            Value::Number(n) => n.kind(),
            Value::String(_) => Kind::String,
            Value::Sequence(_) => Kind::Sequence,
            Value::Map(_) => Kind::Map,
            Value::Indirect(_) => Kind::Indirect,
            Value::Described(_) => Kind::Described,
            Value::Function(_) => Kind::Function,
        }
    }

    /// Returns the observed type name reported in errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use value_as::{indirect, Value};
    ///
    /// assert_eq!(Value::from(1.5).type_name(), "f64");
    /// assert_eq!(indirect(Value::from(true)).type_name(), "*bool");
    /// assert_eq!(Value::function("fn()").type_name(), "fn()");
    /// assert_eq!(indirect(indirect(Value::from(true))).type_name(), "**bool");
    /// ```
    #[must_use]
    pub fn type_name(&self) -> String {
        match self {
            Value::Indirect(ind) => match ind.target() {
                Some(target) => format!("*{}", target.type_name()),
                None => format!("*{}", ind.pointee()),
            },
            Value::Described(d) => d.type_name().to_string(),
            Value::Function(signature) => signature.clone(),
            other => other.kind().as_str().to_string(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_indirect(&self) -> bool {
        matches!(self, Value::Indirect(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// This is a strict accessor; use [`to_bool`](crate::to_bool) for coercion.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("<nil>"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Map(map) => {
                f.write_str("map[")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}:{}", key, value)?;
                }
                f.write_str("]")
            }
            Value::Indirect(ind) => match ind.target() {
                Some(target) => write!(f, "&{}", target),
                None => f.write_str("<nil>"),
            },
            Value::Described(d) => f.write_str(d.text()),
            Value::Function(signature) => f.write_str(signature),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Nil => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => match *n {
                Number::I8(v) => serializer.serialize_i8(v),
                Number::I16(v) => serializer.serialize_i16(v),
                Number::I32(v) => serializer.serialize_i32(v),
                Number::I64(v) => serializer.serialize_i64(v),
                Number::Isize(v) => serializer.serialize_i64(v as i64),
                Number::U8(v) => serializer.serialize_u8(v),
                Number::U16(v) => serializer.serialize_u16(v),
                Number::U32(v) => serializer.serialize_u32(v),
                Number::U64(v) => serializer.serialize_u64(v),
                Number::Usize(v) => serializer.serialize_u64(v as u64),
                Number::F32(v) => serializer.serialize_f32(v),
                Number::F64(v) => serializer.serialize_f64(v),
            },
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Map(map) => {
                use serde::ser::SerializeMap;
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
            Value::Indirect(ind) => match ind.target() {
                Some(target) => serializer.serialize_some(target),
                None => serializer.serialize_none(),
            },
            Value::Described(d) => serializer.serialize_str(d.text()),
            Value::Function(signature) => Err(serde::ser::Error::custom(format!(
                "cannot serialize function value {}",
                signature
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::I64(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::U64(value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::F64(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Nil)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Nil)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    items.push(elem);
                }
                Ok(Value::Sequence(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = ValueMap::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    values.insert(key, value);
                }
                Ok(Value::Map(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

macro_rules! impl_from_number {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::$variant(value)
                }
            }

            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Number(Number::$variant(value))
                }
            }
        )*
    };
}

impl_from_number! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(value: [T; N]) -> Self {
        Value::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Value::Map(value)
    }
}

impl From<Indirect> for Value {
    fn from(value: Indirect) -> Self {
        Value::Indirect(value)
    }
}

impl From<Described> for Value {
    fn from(value: Described) -> Self {
        Value::Described(value)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Sequence(iter.into_iter().map(Into::into).collect())
    }
}
