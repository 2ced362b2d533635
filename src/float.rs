//! Floating-point coercion.
//!
//! Accepts what the integer coercers accept, but always produces an `f64`:
//! booleans become `1.0`/`0.0`, integers widen (rounding beyond 2^53), `f32`
//! widens exactly, and strings must be float literals (see
//! [`literal::parse_float`](crate::literal::parse_float)).

use crate::literal;
use crate::{CoerceOptions, Coerced, Value};

pub(crate) fn coerce(value: &Value, options: &CoerceOptions) -> Coerced<f64> {
    match value {
        Value::Bool(b) => Coerced::recognized(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => Coerced::recognized(n.as_f64()),
        Value::String(s) => {
            let parsed = literal::parse_float(options.literal(s));
            if parsed.is_none() {
                tracing::trace!(input = %s, "string is not a float literal");
            }
            Coerced::from_option(parsed)
        }
        Value::Nil
        | Value::Sequence(_)
        | Value::Map(_)
        | Value::Indirect(_)
        | Value::Described(_)
        | Value::Function(_) => Coerced::unrecognized(),
    }
}
