//! Structural deep merge shared by the token store and theme derivation

use crate::tokens::{TokenMap, TokenValue};

/// Merge `overlay` into `target` in place.
///
/// Map-into-map merges recurse key by key; every other combination
/// (scalar, list, or a map replacing a scalar) overwrites. Keys absent from
/// `target` are appended in `overlay` order, existing keys keep their position.
pub fn merge_into(target: &mut TokenMap, overlay: &TokenMap) {
    for (key, incoming) in overlay {
        match (target.get_mut(key), incoming) {
            (Some(TokenValue::Map(existing)), TokenValue::Map(nested)) => {
                merge_into(existing, nested);
            }
            (Some(slot), _) => *slot = incoming.clone(),
            (None, _) => {
                target.insert(key.clone(), incoming.clone());
            }
        }
    }
}

/// Pure form of [`merge_into`]: returns `base` with `overlay` merged over it.
pub fn deep_merge(base: &TokenMap, overlay: &TokenMap) -> TokenMap {
    let mut merged = base.clone();
    merge_into(&mut merged, overlay);
    merged
}
