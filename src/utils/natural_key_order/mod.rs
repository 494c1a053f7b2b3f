use indexmap::IndexMap;

/// Largest value a key may hold to count as an array index.
const MAX_ARRAY_INDEX: u64 = 4_294_967_294;

/// Parses `key` as a canonical array index: ASCII digits, no leading zero
/// (except `"0"` itself), at most `MAX_ARRAY_INDEX`.
pub fn array_index(key: &str) -> Option<u64> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if key.len() > 1 && key.starts_with('0') {
        return None;
    }

    key.parse::<u64>()
        .ok()
        .filter(|index| *index <= MAX_ARRAY_INDEX)
}

/// Returns the map entries in the order object keys are enumerated by UI hosts:
/// array-index keys first in ascending numeric order, then every other key in insertion order.
pub fn natural_key_order<V>(map: &IndexMap<String, V>) -> Vec<(&String, &V)> {
    let (mut indexed, named): (Vec<_>, Vec<_>) = map
        .iter()
        .partition(|(key, _)| array_index(key).is_some());

    indexed.sort_by_key(|(key, _)| array_index(key));
    indexed.extend(named);

    indexed
}
