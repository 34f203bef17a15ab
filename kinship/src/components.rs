//! Member records held by the registry
//!
//! A member names at most one parent and at most one spouse.
//! Neither reference has to resolve when it is written.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::KinshipError;

// ============================================================================
// Gender
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("male"),
            Gender::Female => f.write_str("female"),
        }
    }
}

impl FromStr for Gender {
    type Err = KinshipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Ok(Gender::Male),
            "f" | "female" => Ok(Gender::Female),
            other => Err(KinshipError::UnknownGender(other.to_string())),
        }
    }
}

// ============================================================================
// Member
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub gender: Gender,
    /// Name of the single parent (None = root of its tree)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    /// Name of the spouse; the link only needs to be stored on one side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse_name: Option<String>,
}

impl Member {
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
            gender,
            parent_name: None,
            spouse_name: None,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_name = Some(parent.into());
        self
    }

    pub fn with_spouse(mut self, spouse: impl Into<String>) -> Self {
        self.spouse_name = Some(spouse.into());
        self
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent_name.as_deref()
    }

    pub fn spouse(&self) -> Option<&str> {
        self.spouse_name.as_deref()
    }
}
