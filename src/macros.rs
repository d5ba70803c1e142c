/// Builds a [`MicroYamlMap`](crate::MicroYamlMap) from `key: value` pairs.
///
/// Keys and values may be any expression implementing `ToString`, so
/// numbers and other displayable values are stored in their text form.
///
/// ```rust
/// use micro_yaml::{micro_yaml, to_string, WriterOptions};
///
/// let version = 3;
/// let map = micro_yaml! {
///     "name": "demo",
///     "version": version,
/// };
/// assert_eq!(map.get("version"), Some("3"));
/// assert_eq!(to_string(&map, WriterOptions::bare()).unwrap(), "name: demo\nversion: 3\n");
/// ```
#[macro_export]
macro_rules! micro_yaml {
    () => {
        $crate::MicroYamlMap::new()
    };

    ($($key:tt : $value:expr),+ $(,)?) => {{
        let mut map = $crate::MicroYamlMap::new();
        $(
            map.insert(
                ::std::string::ToString::to_string(&$key),
                ::std::string::ToString::to_string(&$value),
            );
        )+
        map
    }};
}

#[cfg(test)]
mod tests {
    use crate::MicroYamlMap;

    #[test]
    fn test_empty_map() {
        assert_eq!(micro_yaml!(), MicroYamlMap::new());
    }

    #[test]
    fn test_pairs_in_order() {
        let map = micro_yaml! {
            "b": "two",
            "a": 1,
            "flag": true
        };
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a", "flag"]);
        assert_eq!(map.get("a"), Some("1"));
        assert_eq!(map.get("flag"), Some("true"));
    }

    #[test]
    fn test_later_duplicate_wins() {
        let map = micro_yaml! { "k": "old", "k": "new" };
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("k"), Some("new"));
    }
}
