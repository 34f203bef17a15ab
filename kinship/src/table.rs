//! Canonical degree-of-kinship table
//!
//! Maps a generation distance pair to a [`RelationKind`]. `up` counts the
//! generations the target climbs to the common ancestor and `down` counts the
//! generations from that ancestor down to the member being named, so `(1, 0)`
//! reads "the named member is the target's parent".
//!
//! The live resolver and the reference grid both read [`DEGREE_TABLE`]; there
//! is no second copy of the data.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::components::Gender;
use crate::error::{KinshipError, Result};

/// Largest distance on either axis with a tabulated entry
pub const TABULATED_MAX: u32 = 4;

// ============================================================================
// Relation kinds
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    Identity,
    Spouse,
    // Lineal ascendants
    Parent,
    Grandparent,
    GreatGrandparent,
    GreatGreatGrandparent,
    // Lineal descendants
    Child,
    Grandchild,
    GreatGrandchild,
    GreatGreatGrandchild,
    // Collateral
    Sibling,
    ParentsSibling,
    SiblingsChild,
    Cousin,
    GrandparentsSibling,
    SiblingsGrandchild,
    ParentsCousin,
    CousinsChild,
    SecondCousin,
    GreatGrandparentsSibling,
    SiblingsGreatGrandchild,
    GrandparentsCousin,
    CousinsGrandchild,
    ParentsSecondCousin,
    SecondCousinsChild,
    ThirdCousin,
}

/// Surface forms of one relation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub neutral: &'static str,
    pub male: &'static str,
    pub female: &'static str,
}

impl Labels {
    const fn gendered(neutral: &'static str, male: &'static str, female: &'static str) -> Self {
        Self { neutral, male, female }
    }

    /// Same text regardless of gender. Sibling and cousin words would need
    /// birth order to split further, which members do not carry.
    const fn neutral(text: &'static str) -> Self {
        Self { neutral: text, male: text, female: text }
    }

    pub fn pick(&self, gender: Option<Gender>) -> &'static str {
        match gender {
            Some(Gender::Male) => self.male,
            Some(Gender::Female) => self.female,
            None => self.neutral,
        }
    }
}

impl RelationKind {
    pub fn labels(self) -> Labels {
        use RelationKind::*;
        match self {
            Identity => Labels::neutral("self"),
            Spouse => Labels::neutral("spouse"),
            Parent => Labels::gendered("parent", "father", "mother"),
            Grandparent => Labels::gendered("grandparent", "grandfather", "grandmother"),
            GreatGrandparent => Labels::gendered(
                "great-grandparent",
                "great-grandfather",
                "great-grandmother",
            ),
            GreatGreatGrandparent => Labels::gendered(
                "great-great-grandparent",
                "great-great-grandfather",
                "great-great-grandmother",
            ),
            Child => Labels::gendered("child", "son", "daughter"),
            Grandchild => Labels::gendered("grandchild", "grandson", "granddaughter"),
            GreatGrandchild => Labels::gendered(
                "great-grandchild",
                "great-grandson",
                "great-granddaughter",
            ),
            GreatGreatGrandchild => Labels::gendered(
                "great-great-grandchild",
                "great-great-grandson",
                "great-great-granddaughter",
            ),
            Sibling => Labels::neutral("sibling"),
            ParentsSibling => Labels::gendered("parent's sibling", "uncle", "aunt"),
            SiblingsChild => Labels::gendered("sibling's child", "nephew", "niece"),
            Cousin => Labels::neutral("cousin"),
            GrandparentsSibling => {
                Labels::gendered("grandparent's sibling", "great-uncle", "great-aunt")
            }
            SiblingsGrandchild => {
                Labels::gendered("sibling's grandchild", "grandnephew", "grandniece")
            }
            ParentsCousin => Labels::neutral("parent's cousin"),
            CousinsChild => Labels::neutral("cousin's child"),
            SecondCousin => Labels::neutral("second cousin"),
            GreatGrandparentsSibling => Labels::gendered(
                "great-grandparent's sibling",
                "great-great-uncle",
                "great-great-aunt",
            ),
            SiblingsGreatGrandchild => Labels::gendered(
                "sibling's great-grandchild",
                "great-grandnephew",
                "great-grandniece",
            ),
            GrandparentsCousin => Labels::neutral("grandparent's cousin"),
            CousinsGrandchild => Labels::neutral("cousin's grandchild"),
            ParentsSecondCousin => Labels::neutral("parent's second cousin"),
            SecondCousinsChild => Labels::neutral("second cousin's child"),
            ThirdCousin => Labels::neutral("third cousin"),
        }
    }

    pub fn label(self, gender: Option<Gender>) -> &'static str {
        self.labels().pick(gender)
    }
}

// ============================================================================
// Table
// ============================================================================

/// Every (up, down) cell in [0, TABULATED_MAX]².
const CANONICAL_ENTRIES: &[((u32, u32), RelationKind)] = &[
    ((0, 0), RelationKind::Identity),
    ((1, 0), RelationKind::Parent),
    ((2, 0), RelationKind::Grandparent),
    ((3, 0), RelationKind::GreatGrandparent),
    ((4, 0), RelationKind::GreatGreatGrandparent),
    ((0, 1), RelationKind::Child),
    ((0, 2), RelationKind::Grandchild),
    ((0, 3), RelationKind::GreatGrandchild),
    ((0, 4), RelationKind::GreatGreatGrandchild),
    ((1, 1), RelationKind::Sibling),
    ((2, 1), RelationKind::ParentsSibling),
    ((1, 2), RelationKind::SiblingsChild),
    ((2, 2), RelationKind::Cousin),
    ((3, 1), RelationKind::GrandparentsSibling),
    ((1, 3), RelationKind::SiblingsGrandchild),
    ((3, 2), RelationKind::ParentsCousin),
    ((2, 3), RelationKind::CousinsChild),
    ((3, 3), RelationKind::SecondCousin),
    ((4, 1), RelationKind::GreatGrandparentsSibling),
    ((1, 4), RelationKind::SiblingsGreatGrandchild),
    ((4, 2), RelationKind::GrandparentsCousin),
    ((2, 4), RelationKind::CousinsGrandchild),
    ((4, 3), RelationKind::ParentsSecondCousin),
    ((3, 4), RelationKind::SecondCousinsChild),
    ((4, 4), RelationKind::ThirdCousin),
];

pub static DEGREE_TABLE: Lazy<DegreeTable> = Lazy::new(|| {
    DegreeTable::build(CANONICAL_ENTRIES, TABULATED_MAX)
        .expect("canonical degree table must be complete and free of duplicates")
});

#[derive(Debug, Clone)]
pub struct DegreeTable {
    entries: HashMap<(u32, u32), RelationKind>,
    max: u32,
}

impl DegreeTable {
    /// Build a table, rejecting duplicate keys and any hole in [0, max]².
    pub fn build(entries: &[((u32, u32), RelationKind)], max: u32) -> Result<Self> {
        let mut map = HashMap::with_capacity(entries.len());
        for &((up, down), kind) in entries {
            if map.insert((up, down), kind).is_some() {
                return Err(KinshipError::DuplicateEntry(up, down));
            }
        }

        for up in 0..=max {
            for down in 0..=max {
                if !map.contains_key(&(up, down)) {
                    return Err(KinshipError::MissingEntry(up, down));
                }
            }
        }

        Ok(Self { entries: map, max })
    }

    pub fn get(&self, up: u32, down: u32) -> Option<RelationKind> {
        self.entries.get(&(up, down)).copied()
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}
