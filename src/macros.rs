/// Builds a [`Value`](crate::Value) inline.
///
/// `nil`, `true`, `false`, bracketed lists and `{ "key": value }` objects are
/// matched structurally; anything else goes through `Value::from`, which keeps
/// numeric widths (`value!(1u8)` is a `u8`).
///
/// # Examples
///
/// ```rust
/// use value_as::{to_string, value};
///
/// let list = value!([1, nil, "a", [true]]);
/// assert_eq!(to_string(&list).into_parts(), ("[1 <nil> a [true]]".to_string(), true));
/// ```
#[macro_export]
macro_rules! value {
    (nil) => {
        $crate::Value::Nil
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Sequence(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Sequence(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Map($crate::ValueMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ValueMap::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Map(object)
    }};

    ($e:expr) => {
        $crate::Value::from($e)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Number, Value, ValueMap};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(nil), Value::Nil);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(42), Value::Number(Number::I32(42)));
        assert_eq!(value!(42u64), Value::Number(Number::U64(42)));
        assert_eq!(value!(3.5), Value::Number(Number::F64(3.5)));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_sequences() {
        assert_eq!(value!([]), Value::Sequence(vec![]));
        assert_eq!(
            value!([1, nil]),
            Value::Sequence(vec![Value::Number(Number::I32(1)), Value::Nil])
        );
    }

    #[test]
    fn test_value_macro_maps() {
        assert_eq!(value!({}), Value::Map(ValueMap::new()));

        let obj = value!({ "debug": "t", "port": 8080 });
        let map = obj.as_map().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("debug"), Some(&Value::from("t")));
    }
}
