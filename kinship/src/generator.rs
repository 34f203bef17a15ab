//! Random family generation
//!
//! Builds multi-generation families with Korean given names, for demos and
//! benchmarks.

use rand::Rng;

use crate::components::{Gender, Member};
use crate::error::Result;
use crate::registry::Registry;

const MALE_GIVEN_NAMES: &[&str] = &[
    "Minjun", "Seojun", "Dohyun", "Jiho", "Jihoon", "Junwoo", "Hyunwoo", "Yejun",
    "Geonwoo", "Woojin", "Seonwoo", "Minjae", "Hajun", "Jiwan", "Sihu", "Eunwoo",
    "Yoonho", "Taeyang", "Jaewon", "Sungmin", "Donghyun", "Kyungho", "Sangwoo",
];

const FEMALE_GIVEN_NAMES: &[&str] = &[
    "Seoyeon", "Seoyun", "Jiwoo", "Seohyun", "Minseo", "Hayoon", "Haeun", "Jiyu",
    "Yuna", "Chaewon", "Jimin", "Subin", "Soyeon", "Eunji", "Dahye", "Yerin",
    "Sora", "Hana", "Mirae", "Areum", "Boram", "Nari", "Sujin",
];

const FAMILY_NAMES: &[&str] = &[
    "Kim", "Lee", "Park", "Choi", "Jung", "Kang", "Cho", "Yoon", "Jang", "Lim",
    "Han", "Oh", "Seo", "Shin", "Kwon", "Hwang", "Ahn", "Song", "Jeon", "Hong",
];

/// Shape of a generated family
#[derive(Debug, Clone, Copy)]
pub struct FamilyShape {
    /// Generations below the founder
    pub generations: u32,
    /// Upper bound on children per bloodline member
    pub max_children: u32,
    /// Chance that a bloodline member gets a registered spouse
    pub spouse_rate: f64,
}

impl Default for FamilyShape {
    fn default() -> Self {
        Self {
            generations: 3,
            max_children: 3,
            spouse_rate: 0.6,
        }
    }
}

fn random_gender(rng: &mut impl Rng) -> Gender {
    if rng.gen::<bool>() { Gender::Male } else { Gender::Female }
}

fn pick<'a>(rng: &mut impl Rng, names: &[&'a str]) -> &'a str {
    names[rng.gen_range(0..names.len())]
}

/// A full name not yet used in `registry`.
fn unique_name(rng: &mut impl Rng, registry: &Registry, family: &str, gender: Gender) -> String {
    let given = match gender {
        Gender::Male => pick(rng, MALE_GIVEN_NAMES),
        Gender::Female => pick(rng, FEMALE_GIVEN_NAMES),
    };
    let base = format!("{} {}", family, given);
    if !registry.contains(&base) {
        return base;
    }
    (2..)
        .map(|n| format!("{} {}", base, n))
        .find(|name| !registry.contains(name))
        .unwrap_or(base)
}

/// Generate a family tree rooted at one founder.
///
/// Every bloodline member shares the founder's family name; spouses get a
/// random one and point back at their partner.
pub fn generate_family(rng: &mut impl Rng, shape: FamilyShape) -> Result<Registry> {
    let mut registry = Registry::new();
    let family = pick(rng, FAMILY_NAMES);

    let founder_gender = random_gender(rng);
    let founder = unique_name(rng, &registry, family, founder_gender);
    registry.upsert_member(Member::new(founder.clone(), founder_gender))?;

    let mut generation = vec![founder];
    for _ in 0..shape.generations {
        let mut next = Vec::new();

        for parent in &generation {
            if rng.gen_bool(shape.spouse_rate.clamp(0.0, 1.0)) {
                let spouse_gender = random_gender(rng);
                let spouse_family = pick(rng, FAMILY_NAMES);
                let spouse = unique_name(rng, &registry, spouse_family, spouse_gender);
                registry.upsert_member(
                    Member::new(spouse, spouse_gender).with_spouse(parent.clone()),
                )?;
            }

            let children = rng.gen_range(1..=shape.max_children.max(1));
            for _ in 0..children {
                let gender = random_gender(rng);
                let child = unique_name(rng, &registry, family, gender);
                registry.upsert_member(Member::new(child.clone(), gender).with_parent(parent.clone()))?;
                next.push(child);
            }
        }

        generation = next;
    }

    Ok(registry)
}
