// Integration tests for relationship resolution

use kinship::{
    ancestor_chain, degree_table, spouse_pairs, Gender, KinshipError, Registry, SharedRegistry,
    UNKNOWN, UNRELATED,
};

// ─── helpers ─────────────────────────────────────────────────────────────────

/// A(M) ─┬─ B(F) ── D(F)
///       └─ C(M)
fn scenario() -> Registry {
    let mut reg = Registry::new();
    reg.upsert("A", Gender::Male, None, None).unwrap();
    reg.upsert("B", Gender::Female, Some("A"), None).unwrap();
    reg.upsert("C", Gender::Male, Some("A"), None).unwrap();
    reg.upsert("D", Gender::Female, Some("B"), None).unwrap();
    reg
}

// ─── identity & spouse ───────────────────────────────────────────────────────

#[test]
fn test_self_title_for_every_member() {
    let reg = scenario();
    for member in reg.list() {
        assert_eq!(reg.relationship_title(&member.name, &member.name), "self");
    }
}

#[test]
fn test_spouse_symmetry_with_one_sided_link() {
    let mut reg = Registry::new();
    reg.upsert("A", Gender::Male, None, Some("B")).unwrap();
    reg.upsert("B", Gender::Female, None, None).unwrap();

    assert_eq!(reg.relationship_title("A", "B"), "spouse");
    assert_eq!(reg.relationship_title("B", "A"), "spouse");
    assert_eq!(spouse_pairs(&reg).len(), 1);
}

// ─── direct & gendered relations ─────────────────────────────────────────────

#[test]
fn test_mother_form_for_female_parent() {
    let mut reg = Registry::new();
    reg.upsert("A", Gender::Female, None, None).unwrap();
    reg.upsert("B", Gender::Female, Some("A"), None).unwrap();

    assert_eq!(reg.relationship_title("A", "B"), "mother");
    assert_eq!(reg.relationship_title("B", "A"), "daughter");
}

#[test]
fn test_scenario_titles() {
    let reg = scenario();
    assert_eq!(reg.relationship_title("B", "C"), "sibling");
    assert_eq!(reg.relationship_title("A", "D"), "grandfather");
    assert_eq!(reg.relationship_title("C", "D"), "uncle");
    assert_eq!(reg.relationship_title("B", "D"), "mother");
    assert_eq!(reg.relationship_title("D", "C"), "niece");
    assert_eq!(reg.relationship_title("D", "A"), "granddaughter");
}

#[test]
fn test_cousins_meet_at_grandparent() {
    let mut reg = scenario();
    reg.upsert("E", Gender::Male, Some("C"), None).unwrap();

    let resolution = reg.resolve("D", "E");
    assert_eq!(resolution.label(), "cousin");
    assert_eq!(resolution.ancestor.as_deref(), Some("A"));
    assert_eq!(resolution.chon(), Some(4));
}

#[test]
fn test_deep_lineal_line_stays_lineal() {
    let mut reg = Registry::new();
    reg.upsert("G0", Gender::Male, None, None).unwrap();
    for i in 1..=6 {
        let parent = format!("G{}", i - 1);
        reg.upsert(&format!("G{}", i), Gender::Female, Some(&parent), None)
            .unwrap();
    }

    assert_eq!(reg.relationship_title("G0", "G3"), "great-grandfather");
    assert_eq!(reg.relationship_title("G0", "G4"), "great-great-grandfather");
    assert_eq!(reg.relationship_title("G0", "G6"), "6 generations up");
    assert_eq!(reg.relationship_title("G6", "G1"), "5 generations down");
}

// ─── unrelated & unknown ─────────────────────────────────────────────────────

#[test]
fn test_disjoint_forests_are_unrelated() {
    let mut reg = scenario();
    reg.upsert("X", Gender::Male, None, None).unwrap();
    reg.upsert("Y", Gender::Female, Some("X"), None).unwrap();

    assert_eq!(reg.relationship_title("D", "Y"), UNRELATED);
    assert_eq!(reg.relationship_title("Y", "D"), UNRELATED);
}

#[test]
fn test_upsert_replaces_parent_edge() {
    let mut reg = Registry::new();
    reg.upsert("A", Gender::Male, None, None).unwrap();
    reg.upsert("C", Gender::Male, Some("A"), None).unwrap();
    assert_eq!(reg.relationship_title("A", "C"), "father");
    assert_eq!(reg.relationship_title("C", "A"), "son");

    reg.upsert("C", Gender::Male, None, None).unwrap();
    assert_eq!(reg.relationship_title("A", "C"), UNRELATED);
}

#[test]
fn test_dangling_parent_is_not_fatal() {
    let mut reg = Registry::new();
    reg.upsert("B", Gender::Female, Some("Missing"), None).unwrap();
    reg.upsert("C", Gender::Male, Some("Missing"), None).unwrap();

    assert_eq!(ancestor_chain(&reg, "B").unwrap(), vec!["B"]);
    assert_eq!(reg.relationship_title("B", "C"), UNRELATED);
    assert_eq!(reg.relationship_title("B", "Missing"), UNKNOWN);

    // the forward reference resolves once the parent registers
    reg.upsert("Missing", Gender::Male, None, None).unwrap();
    assert_eq!(reg.relationship_title("B", "C"), "sibling");
}

// ─── cycles ──────────────────────────────────────────────────────────────────

#[test]
fn test_cycle_introduced_later_fails_fast() {
    let mut reg = scenario();
    reg.upsert("A", Gender::Male, Some("D"), None).unwrap();

    for name in ["A", "B", "D"] {
        assert!(matches!(
            ancestor_chain(&reg, name),
            Err(KinshipError::CycleDetected { .. })
        ));
    }
    assert_eq!(reg.relationship_title("C", "D"), UNKNOWN);

    // independent queries and the registry itself are unaffected
    reg.upsert("Solo", Gender::Female, None, None).unwrap();
    assert_eq!(reg.relationship_title("Solo", "Solo"), "self");
    assert_eq!(reg.len(), 5);
}

// ─── degree table ────────────────────────────────────────────────────────────

#[test]
fn test_degree_table_anchors() {
    for max in 2..=6 {
        let grid = degree_table(max);
        assert_eq!(grid.len(), max as usize + 1);
        assert_eq!(grid[1][0], "parent");
        assert_eq!(grid[0][1], "child");
        assert_eq!(grid[1][1], "sibling");
        assert_eq!(grid[2][2], "cousin");
    }
}

#[test]
fn test_degree_table_matches_live_queries() {
    let reg = scenario();
    let grid = degree_table(4);
    let d = reg.resolve("C", "D").distance.unwrap();
    assert_eq!(grid[d.up as usize][d.down as usize], "parent's sibling");
}

// ─── shared handle ───────────────────────────────────────────────────────────

#[test]
fn test_concurrent_readers_see_whole_upserts() {
    let shared = SharedRegistry::new(scenario());

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let handle = shared.clone();
            std::thread::spawn(move || {
                for _ in 0..100 {
                    let title = handle.relationship_title("C", "D");
                    assert!(title == "uncle" || title == "aunt", "saw {}", title);
                }
            })
        })
        .collect();

    for i in 0..100 {
        let gender = if i % 2 == 0 { Gender::Female } else { Gender::Male };
        shared.upsert("C", gender, Some("A"), None).unwrap();
    }

    for reader in readers {
        reader.join().unwrap();
    }
}
