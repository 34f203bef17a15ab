use anyhow::{bail, Result};

use kinship::spouse_pairs;

use crate::state::{AppState, LabelData, SpouseData, SpousePair, TitleData};

pub fn title(state: &AppState, reference: &str, target: &str) -> Result<()> {
    let resolution = state.registry.read().resolve(reference, target);

    state.emit(&TitleData {
        reference: reference.to_string(),
        target: target.to_string(),
        title: resolution.label(),
        up: resolution.distance.map(|d| d.up),
        down: resolution.distance.map(|d| d.down),
        chon: resolution.chon(),
        common_ancestor: resolution.ancestor,
    })
}

pub fn labels(state: &AppState, reference: &str) -> Result<()> {
    let labels = {
        let r = state.registry.read();
        if !r.contains(reference) {
            bail!("member not found: {}", reference);
        }
        r.label_all(reference)
    };

    state.emit(&LabelData {
        reference: reference.to_string(),
        labels,
    })
}

pub fn spouses(state: &AppState) -> Result<()> {
    let pairs = spouse_pairs(&state.registry.read())
        .into_iter()
        .map(|(a, b)| SpousePair { a, b })
        .collect();

    state.emit(&SpouseData { pairs })
}
