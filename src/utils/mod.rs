pub mod join_class_list;
pub mod natural_key_order;
pub mod normalize_value;
pub mod overlay_map;
