//! Boundary values for every numeric family against every scalar coercer.

use value_as::{
    to_bool, to_f64, to_i64, to_int, to_int_with_options, to_string, to_u64,
    to_u64_with_options, to_uint, to_uint_with_options, CoerceOptions, Overflow, Value,
};

#[test]
fn test_signed_family() {
    assert_eq!(to_i64(&Value::from(0i8)).into_parts(), (0, true));
    assert_eq!(to_i64(&Value::from(1i16)).into_parts(), (1, true));
    assert_eq!(to_i64(&Value::from(-1i32)).into_parts(), (-1, true));
    assert_eq!(to_i64(&Value::from(i8::MIN)).into_parts(), (-128, true));
    assert_eq!(to_i64(&Value::from(i64::MAX)).into_parts(), (i64::MAX, true));
    assert_eq!(to_i64(&Value::from(i64::MIN)).into_parts(), (i64::MIN, true));
    assert_eq!(to_int(&Value::from(isize::MAX)).into_parts(), (isize::MAX, true));

    assert_eq!(to_bool(&Value::from(0i64)).into_parts(), (false, true));
    assert_eq!(to_bool(&Value::from(1i64)).into_parts(), (true, true));
    assert_eq!(to_bool(&Value::from(-1i64)).into_parts(), (false, true));
    assert_eq!(to_bool(&Value::from(i64::MAX)).into_parts(), (false, true));

    assert_eq!(to_f64(&Value::from(-1i8)).into_parts(), (-1.0, true));
    assert_eq!(to_f64(&Value::from(i32::MAX)).into_parts(), (2_147_483_647.0, true));
    assert_eq!(to_f64(&Value::from(i64::MAX)).into_parts(), (i64::MAX as f64, true));

    assert_eq!(
        to_string(&Value::from(i64::MIN)).into_parts(),
        ("-9223372036854775808".to_string(), true)
    );
    assert_eq!(to_string(&Value::from(-1i8)).into_parts(), ("-1".to_string(), true));
}

#[test]
fn test_signed_family_into_unsigned() {
    assert_eq!(to_u64(&Value::from(0i32)).into_parts(), (0, true));
    assert_eq!(to_u64(&Value::from(1i32)).into_parts(), (1, true));
    assert_eq!(to_u64(&Value::from(-1i64)).into_parts(), (u64::MAX, true));
    assert_eq!(to_u64(&Value::from(i64::MIN)).into_parts(), (1 << 63, true));
    assert_eq!(to_u64(&Value::from(i64::MAX)).into_parts(), (i64::MAX as u64, true));
    assert_eq!(to_uint(&Value::from(-1i8)).into_parts(), (usize::MAX, true));

    let saturate = CoerceOptions::new().with_overflow(Overflow::Saturate);
    assert_eq!(
        to_u64_with_options(&Value::from(i64::MIN), &saturate).into_parts(),
        (0, true)
    );
}

#[test]
fn test_unsigned_family() {
    assert_eq!(to_u64(&Value::from(0u8)).into_parts(), (0, true));
    assert_eq!(to_u64(&Value::from(1u16)).into_parts(), (1, true));
    assert_eq!(to_u64(&Value::from(u32::MAX)).into_parts(), (u32::MAX as u64, true));
    assert_eq!(to_u64(&Value::from(u64::MAX)).into_parts(), (u64::MAX, true));
    assert_eq!(to_uint(&Value::from(usize::MAX)).into_parts(), (usize::MAX, true));

    assert_eq!(to_i64(&Value::from(u8::MAX)).into_parts(), (255, true));
    assert_eq!(to_i64(&Value::from(u64::MAX)).into_parts(), (-1, true));

    assert_eq!(to_bool(&Value::from(0u64)).into_parts(), (false, true));
    assert_eq!(to_bool(&Value::from(1u8)).into_parts(), (true, true));
    assert_eq!(to_bool(&Value::from(u64::MAX)).into_parts(), (false, true));

    assert_eq!(to_f64(&Value::from(u64::MAX)).into_parts(), (u64::MAX as f64, true));
    assert_eq!(
        to_string(&Value::from(u64::MAX)).into_parts(),
        ("18446744073709551615".to_string(), true)
    );
}

#[test]
fn test_float_family() {
    assert_eq!(to_i64(&Value::from(0.0f32)).into_parts(), (0, true));
    assert_eq!(to_i64(&Value::from(1.0f32)).into_parts(), (1, true));
    assert_eq!(to_i64(&Value::from(-1.0)).into_parts(), (-1, true));
    assert_eq!(to_i64(&Value::from(-0.9)).into_parts(), (0, true));
    assert_eq!(to_i64(&Value::from(9.99)).into_parts(), (9, true));

    let saturate = CoerceOptions::new().with_overflow(Overflow::Saturate);
    assert_eq!(
        value_as::to_i64_with_options(&Value::from(f64::MAX), &saturate).into_parts(),
        (i64::MAX, true)
    );
    assert_eq!(
        value_as::to_i64_with_options(&Value::from(f64::MIN), &saturate).into_parts(),
        (i64::MIN, true)
    );

    assert_eq!(to_u64(&Value::from(1.0)).into_parts(), (1, true));
    assert_eq!(to_u64(&Value::from(-1.0)).into_parts(), (u64::MAX, true));

    assert_eq!(to_bool(&Value::from(0.0f32)).into_parts(), (false, true));
    assert_eq!(to_bool(&Value::from(1.0f32)).into_parts(), (true, true));
    assert_eq!(to_bool(&Value::from(-1.0)).into_parts(), (false, true));
    assert_eq!(to_bool(&Value::from(f64::MAX)).into_parts(), (false, true));

    assert_eq!(to_f64(&Value::from(f32::MAX)).into_parts(), (f64::from(f32::MAX), true));
    assert_eq!(to_f64(&Value::from(f64::MIN)).into_parts(), (f64::MIN, true));

    assert_eq!(to_string(&Value::from(0.0)).into_parts(), ("0".to_string(), true));
    assert_eq!(to_string(&Value::from(1.0f32)).into_parts(), ("1".to_string(), true));
    assert_eq!(to_string(&Value::from(-1.5)).into_parts(), ("-1.5".to_string(), true));
}

#[test]
fn test_numeric_strings_at_the_edges() {
    assert_eq!(
        to_i64(&Value::from("9223372036854775807")).into_parts(),
        (i64::MAX, true)
    );
    assert_eq!(
        to_i64(&Value::from("-9223372036854775808")).into_parts(),
        (i64::MIN, true)
    );
    assert_eq!(
        to_u64(&Value::from("18446744073709551615")).into_parts(),
        (u64::MAX, true)
    );
    assert_eq!(
        to_u64(&Value::from("18446744073709551616")).into_parts(),
        (0, false)
    );
    assert_eq!(to_u64(&Value::from("-1")).into_parts(), (u64::MAX, true));
    assert_eq!(to_f64(&Value::from("-0")).into_parts().1, true);
}

#[test]
fn test_platform_width_narrowing() {
    let wrap = CoerceOptions::new();
    let saturate = CoerceOptions::new().with_overflow(Overflow::Saturate);
    let top = Value::from(u64::MAX);

    assert_eq!(to_int_with_options(&top, &wrap).into_parts(), (-1, true));
    assert_eq!(to_int_with_options(&top, &saturate).into_parts(), (isize::MAX, true));
    assert_eq!(to_uint_with_options(&top, &wrap).into_parts(), (usize::MAX, true));
    assert_eq!(to_uint_with_options(&top, &saturate).into_parts(), (usize::MAX, true));

    let top = Value::from("18446744073709551615");
    assert_eq!(to_int_with_options(&top, &wrap).into_parts(), (-1, true));
    assert_eq!(to_int_with_options(&top, &saturate).into_parts(), (isize::MAX, true));
}

#[test]
fn test_platform_width_from_floats() {
    let wrap = CoerceOptions::new();
    let saturate = CoerceOptions::new().with_overflow(Overflow::Saturate);

    for options in [&wrap, &saturate] {
        assert_eq!(to_int_with_options(&Value::from(0.0), options).into_parts(), (0, true));
        assert_eq!(to_int_with_options(&Value::from(1.0f32), options).into_parts(), (1, true));
        assert_eq!(to_int_with_options(&Value::from(-2.7), options).into_parts(), (-2, true));
        assert_eq!(to_uint_with_options(&Value::from(9.99), options).into_parts(), (9, true));
        assert_eq!(to_int_with_options(&Value::from(f64::NAN), options).into_parts(), (0, true));
        assert_eq!(to_uint_with_options(&Value::from(f64::NAN), options).into_parts(), (0, true));
    }

    assert_eq!(to_uint_with_options(&Value::from(-1.0), &wrap).into_parts(), (usize::MAX, true));
    assert_eq!(to_uint_with_options(&Value::from(-1.0), &saturate).into_parts(), (0, true));

    assert_eq!(
        to_int_with_options(&Value::from(f64::MAX), &saturate).into_parts(),
        (isize::MAX, true)
    );
    assert_eq!(
        to_int_with_options(&Value::from(f64::MIN), &saturate).into_parts(),
        (isize::MIN, true)
    );
    assert_eq!(
        to_uint_with_options(&Value::from(1e30), &saturate).into_parts(),
        (usize::MAX, true)
    );
    assert_eq!(
        to_uint_with_options(&Value::from(f32::NEG_INFINITY), &saturate).into_parts(),
        (0, true)
    );
}
