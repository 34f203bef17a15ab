//! Relation queries - pure reads over a registry snapshot
//!
//! Registry → ancestry / spouse → distance → title → caller.

pub mod ancestry;
pub mod degree_table;
pub mod distance;
pub mod spouse;
pub mod title;

pub use ancestry::ancestor_chain;
pub use degree_table::{degree_table, DEFAULT_MAX_DEGREE};
pub use distance::{common_ancestor, measure, Distance, Link};
pub use spouse::{is_spouse_of, spouse_pairs};
pub use title::{
    label_all, relationship_title, resolve, title_for_distance, Direction, NodeLabel,
    Resolution, Title, UNKNOWN, UNRELATED,
};
