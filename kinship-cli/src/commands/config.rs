use anyhow::Result;

use crate::state::AppState;

pub fn get_config(state: &AppState) -> Result<()> {
    state.emit(&state.settings)
}
