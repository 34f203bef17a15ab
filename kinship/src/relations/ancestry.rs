//! Ancestry walks over the parent forest

use std::collections::HashSet;

use tracing::warn;

use crate::error::{KinshipError, Result};
use crate::registry::Registry;

/// Names from `name` up to its root, leaf first.
///
/// The walk stops at a member with no parent, or whose parent is not
/// registered; that member is the root for this query. A name seen twice
/// means the parent links loop, and the walk fails instead of spinning.
pub fn ancestor_chain(registry: &Registry, name: &str) -> Result<Vec<String>> {
    let mut current = registry
        .get(name)
        .ok_or_else(|| KinshipError::NotFound(name.to_string()))?;

    let mut chain = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();

    loop {
        if !visited.insert(current.name.as_str()) {
            warn!(start = name, repeated = %current.name, "parent links form a cycle");
            return Err(KinshipError::CycleDetected {
                start: name.to_string(),
                repeated: current.name.clone(),
            });
        }
        chain.push(current.name.clone());

        match current.parent().and_then(|parent| registry.get(parent)) {
            Some(parent) => current = parent,
            None => break,
        }
    }

    Ok(chain)
}
