/// Builds a [`Value`](crate::Value) from a literal-like syntax.
///
/// - `nil` is [`Value::Nil`](crate::Value::Nil)
/// - `[a, b, ..]` is an array
/// - `{ k => v, .. }` is a map, pairs inserted in order
/// - anything else goes through `Value::from`
///
/// Each element is a single token tree, so negative numbers and other
/// multi-token expressions need parentheses: `value!([1, (-1)])`.
///
/// ```
/// use rawpack_value::{Value, value};
///
/// let v = value!({ "compact" => true, "schema" => 0 });
/// let map = v.as_map().unwrap();
/// assert_eq!(map.get(&Value::from("schema")), Some(&Value::Integer(0)));
/// ```
#[macro_export]
macro_rules! value {
    (nil) => {
        $crate::Value::Nil
    };
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(::std::vec![ $( $crate::value!($elem) ),* ])
    };
    ({ $($key:tt => $val:tt),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut map = $crate::VMap::new();
        $( map.insert($crate::value!($key), $crate::value!($val)); )*
        $crate::Value::Map(map)
    }};
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
