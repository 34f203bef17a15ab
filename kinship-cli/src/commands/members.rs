use anyhow::{anyhow, Result};

use crate::state::{AppState, ChainData, MemberData, MemberList};

pub fn list(state: &AppState) -> Result<()> {
    let report = MemberList {
        members: state.registry.read().list().to_vec(),
    };
    state.emit(&report)
}

pub fn show(state: &AppState, name: &str) -> Result<()> {
    let report = {
        let r = state.registry.read();
        let member = r
            .get(name)
            .ok_or_else(|| anyhow!("member not found: {}", name))?;
        MemberData {
            member: member.clone(),
            registered_parent: member.parent().is_some_and(|p| r.contains(p)),
            registered_spouse: member.spouse().is_some_and(|s| r.contains(s)),
        }
    };
    state.emit(&report)
}

pub fn chain(state: &AppState, name: &str) -> Result<()> {
    let chain = state.registry.read().ancestor_chain(name)?;
    state.emit(&ChainData {
        name: name.to_string(),
        chain,
    })
}
