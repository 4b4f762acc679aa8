use serde::Deserialize;
use serde_json::{Map, Value};

use super::MergeError;

/// Options controlling merge behavior.
///
/// Derives `Deserialize` with per-field defaults so hosts can read the
/// options straight out of their own configuration data.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    /// Remove top-level keys whose merged value is null.
    pub clear_none: bool,
    /// Concatenate arrays instead of overwriting them.
    pub merge_lists: bool,
}

/// Recursively merges `update` into `destination` and returns the result.
///
/// Absent (`None`) or null arguments are treated as empty mappings. Any other
/// non-mapping argument fails with [`MergeError::NotAMapping`].
///
/// For each key of `update`: if both sides hold mappings the merge recurses;
/// if both sides hold arrays and `merge_lists` is set, the update's items are
/// appended after the destination's; otherwise the update value overwrites.
/// Keys present only in `destination` are preserved unchanged.
///
/// With `clear_none`, top-level keys whose merged value is null are removed.
/// Pruning is deliberately shallow; nested nulls are kept.
///
/// `destination` is consumed rather than mutated through a reference, so
/// ownership of the merged mapping transfers explicitly to the caller. Use
/// [`merge_copy`] to merge borrowed values.
///
/// ## Example
///
/// ```
/// use pillar_utils::{merge, MergeOptions};
/// use serde_json::json;
///
/// let merged = merge(
///     Some(json!({"server": {"host": "localhost"}})),
///     Some(json!({"server": {"port": 8080}})),
///     &MergeOptions::default(),
/// )?;
/// assert_eq!(merged["server"]["host"], json!("localhost"));
/// assert_eq!(merged["server"]["port"], json!(8080));
/// # Ok::<(), pillar_utils::MergeError>(())
/// ```
pub fn merge(
    destination: Option<Value>,
    update: Option<Value>,
    options: &MergeOptions,
) -> Result<Map<String, Value>, MergeError> {
    let mut destination = require_mapping(destination, "destination")?;
    let update = require_mapping(update, "update")?;

    merge_into(&mut destination, update, options.merge_lists);

    if options.clear_none {
        destination.retain(|_, value| !value.is_null());
    }

    Ok(destination)
}

/// Like [`merge`], but operates on clones of the borrowed arguments.
///
/// The caller's values are never modified. Null-pruning is evaluated against
/// the merged result, so update keys absent from the destination survive
/// unless their value is null.
pub fn merge_copy(
    destination: Option<&Value>,
    update: Option<&Value>,
    options: &MergeOptions,
) -> Result<Map<String, Value>, MergeError> {
    merge(destination.cloned(), update.cloned(), options)
}

fn require_mapping(
    value: Option<Value>,
    argument: &'static str,
) -> Result<Map<String, Value>, MergeError> {
    match value {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(MergeError::NotAMapping { argument }),
    }
}

fn merge_into(base: &mut Map<String, Value>, overlay: Map<String, Value>, merge_lists: bool) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(Value::Object(base_map)), Value::Object(overlay_map)) => {
                merge_into(base_map, overlay_map, merge_lists);
            }
            (Some(Value::Array(base_items)), Value::Array(mut overlay_items))
                if merge_lists =>
            {
                base_items.append(&mut overlay_items);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
