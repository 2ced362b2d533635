//! Sequence coercion.
//!
//! Unlike the scalar coercers, a shape mismatch here is an error: asking for the
//! elements of something that has none is treated as a caller mistake.

use crate::{Error, Result, Value};

/// Shape name reported when the input is not a sequence.
pub const EXPECTED: &str = "array or slice";

pub(crate) fn coerce(value: &Value) -> Result<Vec<Value>> {
    match value {
        Value::Nil => Ok(Vec::new()),
        Value::Sequence(items) => Ok(items.clone()),
        other => {
            let have = other.type_name();
            tracing::trace!(expected = EXPECTED, have = %have, "value is not a sequence");
            Err(Error::invalid_type(EXPECTED, &have))
        }
    }
}
