use anyhow::Result;

use kinship::degree_table;

use crate::state::{AppState, TableData};

pub fn table(state: &AppState, max_degree: Option<u32>) -> Result<()> {
    let max_degree = max_degree.unwrap_or(state.settings.table.max_degree);
    state.emit(&TableData {
        max_degree,
        rows: degree_table(max_degree),
    })
}
