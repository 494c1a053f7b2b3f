use indexmap::IndexMap;

/// Builds a fresh map holding the `base` entries overlaid with the `additional` ones.
///
/// Keys present in both keep their position from `base` and take the value from
/// `additional`; keys only in `additional` are appended in their own order.
/// Neither input is modified.
pub fn overlay_map<V: Clone>(
    base: &IndexMap<String, V>,
    additional: Option<&IndexMap<String, V>>,
) -> IndexMap<String, V> {
    let mut merged = base.clone();

    if let Some(additional) = additional {
        for (key, value) in additional {
            merged.insert(key.to_owned(), value.clone());
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::overlay_map;

    #[test]
    fn test_additional_entries_win_and_keep_base_order() {
        let base = IndexMap::from([
            ("a".to_string(), 1),
            ("b".to_string(), 2),
        ]);
        let additional = IndexMap::from([
            ("c".to_string(), 3),
            ("a".to_string(), 10),
        ]);

        let merged = overlay_map(&base, Some(&additional));
        let entries: Vec<(&str, i32)> = merged.iter().map(|(k, v)| (k.as_str(), *v)).collect();

        assert_eq!(entries, vec![("a", 10), ("b", 2), ("c", 3)]);
        assert_eq!(base.len(), 2);
        assert_eq!(base["a"], 1);
    }

    #[test]
    fn test_missing_additional_returns_base_copy() {
        let base = IndexMap::from([("a".to_string(), 1)]);

        assert_eq!(overlay_map(&base, None), base);
    }
}
