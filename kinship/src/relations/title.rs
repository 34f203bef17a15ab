//! Title Resolution - turns a measured link into a kinship title
//!
//! Lookup order for kin: exact table entry, then the equal-depth cousin
//! rule, then a synthesized "N generations up/down" label. The title names
//! the reference's role toward the target and takes the reference's gender.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::components::Gender;
use crate::registry::Registry;
use crate::relations::distance::{measure, Distance, Link};
use crate::table::{RelationKind, DEGREE_TABLE};

/// Marker for two members whose ancestries never meet
pub const UNRELATED: &str = "unrelated";

/// Marker for queries that could not be answered (unregistered name, cycle)
pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Title {
    Kind(RelationKind),
    /// Equal depth past the table; `depth` 5 is a fourth cousin.
    CousinGeneration { depth: u32 },
    Generations { degree: u32, direction: Direction },
    Unrelated,
    Unknown,
}

impl Title {
    pub fn render(&self, gender: Option<Gender>) -> String {
        match *self {
            Title::Kind(kind) => kind.label(gender).to_string(),
            Title::CousinGeneration { depth } => {
                format!("{} cousin", ordinal(depth.saturating_sub(1)))
            }
            Title::Generations { degree, direction: Direction::Up } => {
                format!("{} generations up", degree)
            }
            Title::Generations { degree, direction: Direction::Down } => {
                format!("{} generations down", degree)
            }
            Title::Unrelated => UNRELATED.to_string(),
            Title::Unknown => UNKNOWN.to_string(),
        }
    }
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Gender-free title for a bare distance pair.
pub fn title_for_distance(up: u32, down: u32) -> Title {
    if let Some(kind) = DEGREE_TABLE.get(up, down) {
        Title::Kind(kind)
    } else if up == down {
        Title::CousinGeneration { depth: up }
    } else if up > down {
        Title::Generations { degree: up, direction: Direction::Up }
    } else {
        Title::Generations { degree: down, direction: Direction::Down }
    }
}

/// Typed answer to "what is `reference` to `target`?"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub title: Title,
    pub distance: Option<Distance>,
    pub ancestor: Option<String>,
    /// Gender of the reference, used for the surface form
    pub gender: Option<Gender>,
}

impl Resolution {
    fn bare(title: Title, gender: Option<Gender>) -> Self {
        Self { title, distance: None, ancestor: None, gender }
    }

    pub fn label(&self) -> String {
        self.title.render(self.gender)
    }

    /// Degree of kinship; self and spouse are zero, unrelated has none.
    pub fn chon(&self) -> Option<u32> {
        match self.title {
            Title::Kind(RelationKind::Identity | RelationKind::Spouse) => Some(0),
            Title::Unrelated | Title::Unknown => None,
            _ => self.distance.map(|d| d.chon()),
        }
    }
}

pub fn resolve(registry: &Registry, reference: &str, target: &str) -> Resolution {
    let gender = registry.get(reference).map(|m| m.gender);

    match measure(registry, reference, target) {
        Ok(Link::Identity) => Resolution {
            title: Title::Kind(RelationKind::Identity),
            distance: Some(Distance::new(0, 0)),
            ancestor: Some(reference.to_string()),
            gender,
        },
        Ok(Link::Spouse) => Resolution::bare(Title::Kind(RelationKind::Spouse), gender),
        Ok(Link::Kin { ancestor, distance }) => Resolution {
            title: title_for_distance(distance.up, distance.down),
            distance: Some(distance),
            ancestor: Some(ancestor),
            gender,
        },
        Ok(Link::Unrelated) => Resolution::bare(Title::Unrelated, gender),
        Err(err) => {
            debug!(reference, target, error = %err, "relation unresolved");
            Resolution::bare(Title::Unknown, gender)
        }
    }
}

/// Title of `reference` as seen from `target`. Never fails; unresolvable
/// queries come back as [`UNRELATED`] or [`UNKNOWN`].
pub fn relationship_title(registry: &Registry, reference: &str, target: &str) -> String {
    resolve(registry, reference, target).label()
}

/// One node label for a rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeLabel {
    pub name: String,
    pub title: String,
    pub chon: Option<u32>,
}

/// Label every member relative to `reference`, in list order.
pub fn label_all(registry: &Registry, reference: &str) -> Vec<NodeLabel> {
    registry
        .list()
        .par_iter()
        .map(|member| {
            let resolution = resolve(registry, &member.name, reference);
            NodeLabel {
                name: member.name.clone(),
                title: resolution.label(),
                chon: resolution.chon(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_hits() {
        assert_eq!(title_for_distance(2, 1), Title::Kind(RelationKind::ParentsSibling));
        assert_eq!(title_for_distance(0, 4).render(None), "great-great-grandchild");
    }

    #[test]
    fn test_equal_depth_generalizes_cousins() {
        assert_eq!(title_for_distance(5, 5).render(None), "4th cousin");
        assert_eq!(title_for_distance(12, 12).render(None), "11th cousin");
        assert_eq!(title_for_distance(23, 23).render(None), "22nd cousin");
    }

    #[test]
    fn test_beyond_table_uses_larger_distance() {
        assert_eq!(title_for_distance(6, 0).render(None), "6 generations up");
        assert_eq!(title_for_distance(2, 5).render(None), "5 generations down");
        assert_eq!(title_for_distance(7, 3).render(Some(Gender::Male)), "7 generations up");
    }

    #[test]
    fn test_chon_counts() {
        let mut reg = Registry::new();
        reg.upsert("A", Gender::Male, None, Some("W")).unwrap();
        reg.upsert("W", Gender::Female, None, None).unwrap();
        reg.upsert("B", Gender::Male, Some("A"), None).unwrap();
        reg.upsert("C", Gender::Female, Some("A"), None).unwrap();
        reg.upsert("D", Gender::Male, Some("C"), None).unwrap();

        assert_eq!(resolve(&reg, "A", "A").chon(), Some(0));
        assert_eq!(resolve(&reg, "W", "A").chon(), Some(0));
        assert_eq!(resolve(&reg, "A", "B").chon(), Some(1));
        assert_eq!(resolve(&reg, "B", "D").chon(), Some(3));
        assert_eq!(resolve(&reg, "W", "B").chon(), None);
    }

    #[test]
    fn test_label_all_keeps_order() {
        let mut reg = Registry::new();
        reg.upsert("A", Gender::Female, None, None).unwrap();
        reg.upsert("B", Gender::Male, Some("A"), None).unwrap();
        reg.upsert("X", Gender::Male, None, None).unwrap();

        let labels = label_all(&reg, "B");
        let titles: Vec<&str> = labels.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["mother", "self", "unrelated"]);
    }
}
