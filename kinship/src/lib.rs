//! Kinship Resolution Engine
//!
//! Names the relationship between two members of a family registry using
//! degree-of-kinship (chon) distances. Members carry a single parent and an
//! optional spouse; the registry is a forest of parent trees.

pub mod components;
pub mod error;
pub mod generator;
pub mod persistence;
pub mod registry;
pub mod relations;
pub mod table;

pub use components::*;
pub use error::{KinshipError, Result};
pub use registry::{Registry, SharedRegistry};
pub use relations::{
    ancestor_chain, degree_table, is_spouse_of, label_all, relationship_title, resolve,
    spouse_pairs, Distance, NodeLabel, Resolution, Title, DEFAULT_MAX_DEGREE, UNKNOWN,
    UNRELATED,
};
pub use persistence::{ExportData, ImportResult};
pub use table::{RelationKind, DEGREE_TABLE};
