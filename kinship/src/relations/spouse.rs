//! Spousal links
//!
//! Only one of the two records needs to name the other.

use std::collections::HashSet;

use crate::registry::Registry;

/// True when either record names the other as spouse.
pub fn is_spouse_of(registry: &Registry, a: &str, b: &str) -> bool {
    let names = |from: &str, to: &str| {
        registry
            .get(from)
            .and_then(|m| m.spouse())
            .is_some_and(|spouse| spouse == to)
    };
    names(a, b) || names(b, a)
}

/// Every spouse pair whose members are both registered, once per pair.
///
/// Pairs come out name-ordered (`a < b`) in the order their first link
/// appears in the registry.
pub fn spouse_pairs(registry: &Registry) -> Vec<(String, String)> {
    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut pairs = Vec::new();

    for member in registry.list() {
        let Some(spouse) = member.spouse() else { continue };
        if spouse == member.name || !registry.contains(spouse) {
            continue;
        }

        let key = if member.name.as_str() < spouse {
            (member.name.as_str(), spouse)
        } else {
            (spouse, member.name.as_str())
        };
        if seen.insert(key) {
            pairs.push((key.0.to_string(), key.1.to_string()));
        }
    }

    pairs
}
