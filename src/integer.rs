//! Signed and unsigned integer coercion.
//!
//! Both directions accept the same inputs:
//!
//! - booleans become `1` or `0`
//! - integers of any width convert by value
//! - floats truncate toward zero
//! - strings must be integer literals (see [`literal::parse_integer`](crate::literal::parse_integer))
//!
//! Inputs are first widened to an `i128`, which holds every 64-bit signed and
//! unsigned value exactly, and then fitted into the target type according to the
//! configured [`Overflow`] policy.

use crate::literal;
use crate::{CoerceOptions, Coerced, Number, Overflow, Value};

/// An integer type that coercion can produce.
pub(crate) trait Target: Sized + Default + Copy {
    const NAME: &'static str;

    fn fit(n: i128, overflow: Overflow) -> Self;
}

macro_rules! impl_target {
    ($($t:ty),* $(,)?) => {
        $(
            impl Target for $t {
                const NAME: &'static str = stringify!($t);

                fn fit(n: i128, overflow: Overflow) -> Self {
                    match overflow {
                        Overflow::Wrap => n as $t,
                        Overflow::Saturate => {
                            let clamped = n.clamp(<$t>::MIN as i128, <$t>::MAX as i128);
                            if clamped != n {
                                tracing::trace!(input = %n, width = Self::NAME, "integer saturated");
                            }
                            clamped as $t
                        }
                    }
                }
            }
        )*
    };
}

impl_target!(i64, u64, isize, usize);

/// Widens any accepted input to an `i128`.
fn widen(value: &Value, options: &CoerceOptions) -> Option<i128> {
    match value {
        Value::Bool(b) => Some(i128::from(*b)),
        Value::Number(n) => Some(widen_number(n)),
        Value::String(s) => {
            let parsed = literal::parse_integer(options.literal(s));
            if parsed.is_none() {
                tracing::trace!(input = %s, "string is not an integer literal");
            }
            parsed
        }
        Value::Nil
        | Value::Sequence(_)
        | Value::Map(_)
        | Value::Indirect(_)
        | Value::Described(_)
        | Value::Function(_) => None,
    }
}

fn widen_number(n: &Number) -> i128 {
    match n.as_i128() {
        Some(i) => i,
        // saturating, NaN becomes 0
        None => n.as_f64().trunc() as i128,
    }
}

pub(crate) fn coerce<T: Target>(value: &Value, options: &CoerceOptions) -> Coerced<T> {
    Coerced::from_option(widen(value, options).map(|n| T::fit(n, options.overflow)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indirect;

    fn signed(value: Value) -> (i64, bool) {
        coerce::<i64>(&value, &CoerceOptions::default()).into_parts()
    }

    fn unsigned(value: Value, overflow: Overflow) -> (u64, bool) {
        let options = CoerceOptions::new().with_overflow(overflow);
        coerce::<u64>(&value, &options).into_parts()
    }

    #[test]
    fn test_fit_wrap() {
        assert_eq!(u64::fit(-1, Overflow::Wrap), u64::MAX);
        assert_eq!(i64::fit(u64::MAX as i128, Overflow::Wrap), -1);
        assert_eq!(i64::fit(i64::MIN as i128, Overflow::Wrap), i64::MIN);
    }

    #[test]
    fn test_fit_saturate() {
        assert_eq!(u64::fit(-1, Overflow::Saturate), 0);
        assert_eq!(i64::fit(u64::MAX as i128, Overflow::Saturate), i64::MAX);
        assert_eq!(usize::fit(5, Overflow::Saturate), 5);
    }

    #[test]
    fn test_floats_truncate_toward_zero() {
        assert_eq!(signed(Value::from(1.9)), (1, true));
        assert_eq!(signed(Value::from(-1.9)), (-1, true));
        assert_eq!(signed(Value::from(0.5f32)), (0, true));
        assert_eq!(signed(Value::from(f64::NAN)), (0, true));
    }

    #[test]
    fn test_negative_float_to_unsigned() {
        assert_eq!(unsigned(Value::from(-1.0), Overflow::Wrap), (u64::MAX, true));
        assert_eq!(unsigned(Value::from(-1.0), Overflow::Saturate), (0, true));
        assert_eq!(unsigned(Value::from(1e30), Overflow::Saturate), (u64::MAX, true));
        assert_eq!(unsigned(Value::from(f64::INFINITY), Overflow::Saturate), (u64::MAX, true));
        assert_eq!(unsigned(Value::from(f64::NEG_INFINITY), Overflow::Saturate), (0, true));
    }

    #[test]
    fn test_strings() {
        assert_eq!(signed(Value::from("-12")), (-12, true));
        assert_eq!(signed(Value::from("1.0")), (0, false));
        assert_eq!(unsigned(Value::from("18446744073709551615"), Overflow::Wrap), (u64::MAX, true));
        assert_eq!(unsigned(Value::from("-1"), Overflow::Saturate), (0, true));
    }

    #[test]
    fn test_indirections_are_not_followed() {
        assert_eq!(signed(indirect(Value::from(3))), (0, false));
    }
}
