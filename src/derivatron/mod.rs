use crate::{
    types::{BemValue, ClassList, MixMap, ModifierMap},
    utils::{natural_key_order::natural_key_order, normalize_value::normalize_value},
};

/// Derives the full class list for a block or element.
///
/// The resulting sequence is ordered as: `base_name`, the literal `class_name` (when present
/// and non-empty), the modifier tokens prefixed with `{base_name}_`, and finally the mix tokens,
/// which carry no prefix.
///
/// # Parameters
/// - `base_name`: The block or element name every modifier is attached to.
/// - `class_name`: An optional literal class appended right after the base name.
/// - `mods`: Modifiers of the block or element. `None` behaves like an empty map.
/// - `mix`: Classes mixed in from another naming scheme. `None` behaves like an empty map.
///
/// # Returns
/// The ordered `ClassList`. Entries whose value cannot produce a token are skipped.
pub fn derive_class_list(
    base_name: &str,
    class_name: Option<&str>,
    mods: Option<&ModifierMap>,
    mix: Option<&MixMap>,
) -> ClassList {
    let mut class_list: ClassList = vec![base_name.to_string()];

    if let Some(class_name) = class_name.filter(|name| !name.is_empty()) {
        class_list.push(class_name.to_string());
    }

    if let Some(mods) = mods {
        class_list.extend(derive_tokens_from_map(mods, &format!("{}_", base_name)));
    }

    if let Some(mix) = mix {
        class_list.extend(derive_tokens_from_map(mix, ""));
    }

    tracing::debug!(
        "Derived class list for '{}': {:?}",
        base_name,
        class_list
    );

    class_list
}

/// Derives the class tokens contributed by a modifier or mix map.
///
/// A `true` entry yields `{prefix}{key}`, a number or string entry yields
/// `{prefix}{key}_{value}` with whitespace runs in the value collapsed into `-`.
/// `false` and unsupported entries yield nothing.
///
/// Entries are visited with array-index keys (`"0"`, `"1"`, ...) first in ascending
/// order, then the remaining keys in insertion order.
pub fn derive_tokens_from_map(map: &ModifierMap, prefix: &str) -> Vec<String> {
    natural_key_order(map)
        .into_iter()
        .filter_map(|(key, value)| match value {
            BemValue::Bool(true) => Some(format!("{}{}", prefix, key)),
            BemValue::Bool(false) | BemValue::Unsupported => None,
            BemValue::Number(_) | BemValue::Text(_) => value
                .as_token_value()
                .map(|raw| format!("{}{}_{}", prefix, key, normalize_value(&raw))),
        })
        .collect()
}
