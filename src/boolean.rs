//! Boolean coercion.
//!
//! Rules, first match wins:
//!
//! 1. a boolean is returned unchanged
//! 2. an indirection is followed; a nil indirection is `false`
//! 3. a string must be a boolean literal (see [`literal::parse_bool`](crate::literal::parse_bool))
//! 4. any number is recognized, and is `true` only when it equals exactly one
//! 5. everything else is unrecognized
//!
//! Rule 4 is a unit test, not a truthiness test: `2`, `-1` and `0.5` are all
//! recognized as `false`.

use crate::literal;
use crate::{CoerceOptions, Coerced, Value};

pub(crate) fn coerce(value: &Value, options: &CoerceOptions) -> Coerced<bool> {
    match value {
        Value::Bool(b) => Coerced::recognized(*b),
        Value::Indirect(ind) => match ind.target() {
            Some(target) => coerce(target, options),
            None => Coerced::recognized(false),
        },
        Value::String(s) => {
            let parsed = literal::parse_bool(options.literal(s));
            if parsed.is_none() {
                tracing::trace!(input = %s, "string is not a boolean literal");
            }
            Coerced::from_option(parsed)
        }
        Value::Number(n) => Coerced::recognized(n.is_unit()),
        Value::Nil
        | Value::Sequence(_)
        | Value::Map(_)
        | Value::Described(_)
        | Value::Function(_) => Coerced::unrecognized(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{indirect, Indirect, Kind};

    fn check(value: Value) -> (bool, bool) {
        coerce(&value, &CoerceOptions::default()).into_parts()
    }

    #[test]
    fn test_numbers_compare_with_one() {
        assert_eq!(check(Value::from(1)), (true, true));
        assert_eq!(check(Value::from(1u64)), (true, true));
        assert_eq!(check(Value::from(1.0f32)), (true, true));
        assert_eq!(check(Value::from(0)), (false, true));
        assert_eq!(check(Value::from(2)), (false, true));
        assert_eq!(check(Value::from(-1)), (false, true));
        assert_eq!(check(Value::from(-1.0)), (false, true));
        assert_eq!(check(Value::from(0.5)), (false, true));
    }

    #[test]
    fn test_indirections() {
        assert_eq!(check(indirect(Value::from(true))), (true, true));
        assert_eq!(check(indirect(Value::from(false))), (false, true));
        assert_eq!(check(Value::from(Indirect::nil(Kind::Bool))), (false, true));
        assert_eq!(check(indirect(Value::from("asdf"))), (false, false));
    }

    #[test]
    fn test_strings_need_literals() {
        assert_eq!(check(Value::from("t")), (true, true));
        assert_eq!(check(Value::from("F")), (false, true));
        assert_eq!(check(Value::from("1234")), (false, false));
        assert_eq!(check(Value::from("")), (false, false));
    }

    #[test]
    fn test_trimmed_literals() {
        let options = CoerceOptions::new().with_trimmed_literals(true);
        let outcome = coerce(&Value::from("  True  "), &options);
        assert_eq!(outcome.into_parts(), (true, true));
    }

    #[test]
    fn test_other_shapes_unrecognized() {
        assert_eq!(check(Value::Nil), (false, false));
        assert_eq!(check(Value::from(vec![0])), (false, false));
        assert_eq!(check(Value::function("fn()")), (false, false));
    }
}
