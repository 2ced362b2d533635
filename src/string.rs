//! String coercion.
//!
//! Rules, first match wins:
//!
//! 1. a string is returned unchanged
//! 2. a boolean renders as `true` / `false`
//! 3. an integer renders in base 10
//! 4. a float renders as its shortest round-trip decimal, so `1.0` becomes `"1"`;
//!    infinities and NaN render as `+Inf`, `-Inf` and `NaN`
//! 5. a described value renders its error text
//! 6. a described value without error text renders its diagnostic text
//! 7. a sequence renders as `[a b c]`
//! 8. nil, indirections, maps and functions are unrecognized
//!
//! Indirections are not followed here, unlike boolean coercion: a nil
//! indirection is unrecognized rather than rendered.

use crate::{Coerced, Value};

pub(crate) fn coerce(value: &Value) -> Coerced<String> {
    match value {
        Value::String(s) => Coerced::recognized(s.clone()),
        Value::Bool(b) => Coerced::recognized(b.to_string()),
        Value::Number(n) => Coerced::recognized(n.to_string()),
        Value::Described(d) => match d.error_text().or(d.diagnostic_text()) {
            Some(text) => Coerced::recognized(text.to_string()),
            None => Coerced::unrecognized(),
        },
        Value::Sequence(_) => Coerced::recognized(value.to_string()),
        Value::Nil | Value::Indirect(_) | Value::Map(_) | Value::Function(_) => {
            Coerced::unrecognized()
        }
    }
}
