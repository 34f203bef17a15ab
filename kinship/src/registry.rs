//! Member Registry - owns every member record
//!
//! Records keep their first-insert position; an upsert of a known name
//! overwrites the record in place. There is no single-member removal, only
//! a global reset.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use tracing::debug;

use crate::components::{Gender, Member};
use crate::error::{KinshipError, Result};
use crate::relations::{self, NodeLabel, Resolution};

#[derive(Debug, Clone, Default)]
pub struct Registry {
    members: Vec<Member>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a member or overwrite every field of an existing one.
    ///
    /// The parent and spouse names are stored as given, even when they do
    /// not name a registered member yet.
    pub fn upsert(
        &mut self,
        name: &str,
        gender: Gender,
        parent_name: Option<&str>,
        spouse_name: Option<&str>,
    ) -> Result<&Member> {
        let mut member = Member::new(name, gender);
        member.parent_name = parent_name.map(str::to_string);
        member.spouse_name = spouse_name.map(str::to_string);
        self.upsert_member(member)
    }

    /// Record form of [`Registry::upsert`].
    pub fn upsert_member(&mut self, member: Member) -> Result<&Member> {
        if member.name.trim().is_empty() {
            return Err(KinshipError::EmptyName);
        }

        let slot = match self.index.get(&member.name) {
            Some(&slot) => {
                debug!(name = %member.name, "overwriting member");
                self.members[slot] = member;
                slot
            }
            None => {
                debug!(name = %member.name, "registering member");
                let slot = self.members.len();
                self.index.insert(member.name.clone(), slot);
                self.members.push(member);
                slot
            }
        };

        Ok(&self.members[slot])
    }

    /// Drop every record.
    pub fn reset(&mut self) {
        debug!(count = self.members.len(), "resetting registry");
        self.members.clear();
        self.index.clear();
    }

    pub fn get(&self, name: &str) -> Option<&Member> {
        self.index.get(name).map(|&slot| &self.members[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Members in first-insert order
    pub fn list(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn ancestor_chain(&self, name: &str) -> Result<Vec<String>> {
        relations::ancestor_chain(self, name)
    }

    pub fn is_spouse_of(&self, a: &str, b: &str) -> bool {
        relations::is_spouse_of(self, a, b)
    }

    pub fn resolve(&self, reference: &str, target: &str) -> Resolution {
        relations::resolve(self, reference, target)
    }

    pub fn relationship_title(&self, reference: &str, target: &str) -> String {
        relations::relationship_title(self, reference, target)
    }

    pub fn label_all(&self, reference: &str) -> Vec<NodeLabel> {
        relations::label_all(self, reference)
    }
}

// ============================================================================
// Shared handle
// ============================================================================

/// Registry handle for one writer and many readers.
///
/// Mutations hold the write lock for their whole duration, so readers only
/// ever see a registry before or after an upsert, never in between.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl SharedRegistry {
    pub fn new(registry: Registry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Consistent snapshot for a batch of queries.
    ///
    /// A panicked writer cannot leave a half-written record (every mutation
    /// is a single assignment), so a poisoned lock is still safe to read.
    pub fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn upsert(
        &self,
        name: &str,
        gender: Gender,
        parent_name: Option<&str>,
        spouse_name: Option<&str>,
    ) -> Result<Member> {
        self.write(|r| r.upsert(name, gender, parent_name, spouse_name).cloned())
    }

    pub fn reset(&self) {
        self.write(Registry::reset)
    }

    pub fn relationship_title(&self, reference: &str, target: &str) -> String {
        self.read().relationship_title(reference, target)
    }
}
