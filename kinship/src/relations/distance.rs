//! Common-ancestor and generation-distance calculation

use serde::Serialize;

use crate::error::{KinshipError, Result};
use crate::registry::Registry;
use crate::relations::{ancestry::ancestor_chain, spouse::is_spouse_of};

/// Generation distance between two members through their common ancestor.
///
/// `up` is how far the target climbs to reach the ancestor, `down` is how far
/// the ancestor descends to the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Distance {
    pub up: u32,
    pub down: u32,
}

impl Distance {
    pub const fn new(up: u32, down: u32) -> Self {
        Self { up, down }
    }

    /// Korean degree of kinship: one chon per parent-child hop
    pub fn chon(&self) -> u32 {
        self.up + self.down
    }
}

/// How a reference member connects to a target member
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    Identity,
    Spouse,
    Kin { ancestor: String, distance: Distance },
    Unrelated,
}

/// Connect `reference` to `target`.
///
/// Identity, spouse, and direct parent/child are settled before any chain is
/// walked. Fails when either name is unregistered or either walk hits a
/// cycle.
pub fn measure(registry: &Registry, reference: &str, target: &str) -> Result<Link> {
    let ref_member = registry
        .get(reference)
        .ok_or_else(|| KinshipError::NotFound(reference.to_string()))?;
    let target_member = registry
        .get(target)
        .ok_or_else(|| KinshipError::NotFound(target.to_string()))?;

    if reference == target {
        return Ok(Link::Identity);
    }
    if is_spouse_of(registry, reference, target) {
        return Ok(Link::Spouse);
    }
    if target_member.parent() == Some(reference) {
        return Ok(Link::Kin {
            ancestor: reference.to_string(),
            distance: Distance::new(1, 0),
        });
    }
    if ref_member.parent() == Some(target) {
        return Ok(Link::Kin {
            ancestor: target.to_string(),
            distance: Distance::new(0, 1),
        });
    }

    let ref_chain = ancestor_chain(registry, reference)?;
    let target_chain = ancestor_chain(registry, target)?;

    Ok(match common_ancestor(&ref_chain, &target_chain) {
        Some((ancestor, distance)) => Link::Kin { ancestor, distance },
        None => Link::Unrelated,
    })
}

/// Nearest shared member of two leaf-first chains.
///
/// Both chains are aligned at the root end and compared walking toward the
/// leaves; the last agreeing position is the common ancestor.
pub fn common_ancestor(ref_chain: &[String], target_chain: &[String]) -> Option<(String, Distance)> {
    let shared = ref_chain
        .iter()
        .rev()
        .zip(target_chain.iter().rev())
        .take_while(|(a, b)| a == b)
        .count();

    if shared == 0 {
        return None;
    }

    let ancestor = ref_chain[ref_chain.len() - shared].clone();
    let distance = Distance::new(
        (target_chain.len() - shared) as u32,
        (ref_chain.len() - shared) as u32,
    );
    Some((ancestor, distance))
}
