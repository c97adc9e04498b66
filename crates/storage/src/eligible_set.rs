use std::{collections::BTreeSet, fs, path::Path};

use ics_performance::operator::OperatorId;
use tracing::info;

use crate::errors::StoreError;

pub const DEFAULT_ELIGIBLE_FILE: &str = "eligible_node_operators.json";

/// Writes the eligible operators as a JSON array in ascending order.
pub fn write_eligible_set(
    path: impl AsRef<Path>,
    eligible: &BTreeSet<OperatorId>,
) -> Result<(), StoreError> {
    let path = path.as_ref();
    create_parent_dir(path)?;

    let contents = serde_json::to_string(eligible).map_err(StoreError::json(path))?;
    fs::write(path, contents).map_err(StoreError::io(path))?;
    info!(
        "Wrote {} eligible operators to {}",
        eligible.len(),
        path.display()
    );
    Ok(())
}

pub fn read_eligible_set(path: impl AsRef<Path>) -> Result<BTreeSet<OperatorId>, StoreError> {
    let path = path.as_ref();
    let contents = fs::read(path).map_err(StoreError::io(path))?;
    serde_json::from_slice(&contents).map_err(StoreError::json(path))
}

pub(crate) fn create_parent_dir(path: &Path) -> Result<(), StoreError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent).map_err(StoreError::io(parent))
        }
        _ => Ok(()),
    }
}
