//! Snapshot export/import of registry state
//!
//! Serializes the registry to a versioned JSON document and restores it.
//! Used as an interchange format for loading families; nothing here writes
//! to disk.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::components::Member;
use crate::error::{KinshipError, Result};
use crate::registry::Registry;

pub const SNAPSHOT_VERSION: u8 = 1;

/// Complete registry state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportData {
    pub version: u8, // Schema version for forward compatibility
    pub members: Vec<Member>,
}

/// Result of an import
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportResult {
    pub members: u32,
    /// Parent links that name a registered member
    pub parents: u32,
    /// Spouse links that name a registered member
    pub spouses: u32,
    /// Parent or spouse links left pointing at unregistered names
    pub dangling: u32,
}

impl Registry {
    pub fn export_data(&self) -> ExportData {
        ExportData {
            version: SNAPSHOT_VERSION,
            members: self.list().to_vec(),
        }
    }

    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.export_data())?)
    }

    /// Replace the whole registry with the snapshot in `json`.
    ///
    /// The new state is assembled off to the side; on any error the current
    /// registry is left untouched.
    pub fn import_json(&mut self, json: &str) -> Result<ImportResult> {
        let data: ExportData = serde_json::from_str(json)?;
        self.import_data(data)
    }

    pub fn import_data(&mut self, data: ExportData) -> Result<ImportResult> {
        if data.version != SNAPSHOT_VERSION {
            return Err(KinshipError::UnsupportedVersion(data.version));
        }

        let mut staged = Registry::new();
        for member in data.members {
            staged.upsert_member(member)?;
        }

        let mut result = ImportResult {
            members: staged.len() as u32,
            parents: 0,
            spouses: 0,
            dangling: 0,
        };
        for member in staged.list() {
            match member.parent() {
                Some(parent) if staged.contains(parent) => result.parents += 1,
                Some(_) => result.dangling += 1,
                None => {}
            }
            match member.spouse() {
                Some(spouse) if staged.contains(spouse) => result.spouses += 1,
                Some(_) => result.dangling += 1,
                None => {}
            }
        }

        *self = staged;
        info!(
            members = result.members,
            parents = result.parents,
            spouses = result.spouses,
            dangling = result.dangling,
            "imported registry snapshot"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Gender;

    #[test]
    fn test_import_counts_links() {
        let json = r#"{
            "version": 1,
            "members": [
                { "name": "A", "gender": "Male", "spouse_name": "W" },
                { "name": "W", "gender": "Female" },
                { "name": "B", "gender": "Female", "parent_name": "A" },
                { "name": "C", "gender": "Male", "parent_name": "Ghost" }
            ]
        }"#;

        let mut reg = Registry::new();
        let result = reg.import_json(json).unwrap();
        assert_eq!(
            result,
            ImportResult { members: 4, parents: 1, spouses: 1, dangling: 1 }
        );
        assert_eq!(reg.relationship_title("A", "B"), "father");
    }

    #[test]
    fn test_failed_import_leaves_registry_alone() {
        let mut reg = Registry::new();
        reg.upsert("Keep", Gender::Male, None, None).unwrap();

        let bad_version = r#"{ "version": 9, "members": [] }"#;
        assert!(matches!(
            reg.import_json(bad_version),
            Err(KinshipError::UnsupportedVersion(9))
        ));

        let empty_name = r#"{ "version": 1, "members": [{ "name": "", "gender": "Male" }] }"#;
        assert!(matches!(reg.import_json(empty_name), Err(KinshipError::EmptyName)));

        assert!(matches!(reg.import_json("not json"), Err(KinshipError::Snapshot(_))));
        assert!(reg.contains("Keep"));
    }

    #[test]
    fn test_export_preserves_order_and_links() {
        let mut reg = Registry::new();
        reg.upsert("Z", Gender::Female, None, None).unwrap();
        reg.upsert("A", Gender::Male, Some("Z"), Some("Q")).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&reg.export_json().unwrap()).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["members"][0]["name"], "Z");
        assert!(value["members"][0].get("parent_name").is_none());
        assert_eq!(value["members"][1]["parent_name"], "Z");
        assert_eq!(value["members"][1]["spouse_name"], "Q");
    }
}
