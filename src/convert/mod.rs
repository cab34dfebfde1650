//! Serialization-based structural conversion helpers.

pub mod structural;

pub use structural::{
    coerce_to_string_map, map_any_to_map_string, map_string_to_map_any, struct_to_map,
};
