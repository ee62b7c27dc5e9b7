//! Translation of positional key/value argument lists into structured fields.
//!
//! Named-logger callers pass context as one flat list, `[k1, v1, k2, v2, ..]`.
//! Engines attach context as key/value pairs. [`pair_args`] is the single point
//! where one becomes the other, and every emission path and `with` go through it.
//!
//! Boundary policy:
//! - an odd-length list loses its trailing key
//! - a pair whose key is not a JSON string is dropped whole

use serde_json::Value;

/// One structured field: key and value.
pub type Field = (String, Value);

/// Key/value pairs in the order they were supplied.
pub type Fields = Vec<Field>;

/// Pair up an alternating key/value argument list.
///
/// # Example
///
/// ```rust
/// use named_log_bridge::{args, pair_args};
/// use serde_json::json;
///
/// let fields = pair_args(&args!["peer", "node2", 7, "dropped", "term"]);
/// assert_eq!(fields, vec![("peer".to_string(), json!("node2"))]);
/// ```
pub fn pair_args(args: &[Value]) -> Fields {
    args.chunks_exact(2)
        .filter_map(|pair| match &pair[0] {
            Value::String(key) => Some((key.clone(), pair[1].clone())),
            _ => None,
        })
        .collect()
}

/// Build an alternating key/value argument list from plain Rust values.
///
/// Each element goes through `serde_json::json!`, so anything serialisable can
/// be used as a value.
///
/// ```rust
/// use named_log_bridge::args;
///
/// let list = args!["term", 3, "leader", "node1"];
/// assert_eq!(list.len(), 4);
/// assert!(args![].is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::__private::serde_json::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::__private::serde_json::json!($arg)),+]
    };
}
