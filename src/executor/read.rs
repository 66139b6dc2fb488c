use super::single_name;
use crate::core::{DbError, Result, Row};
use crate::plan::ReadRel;
use crate::storage::TableStore;

pub(super) fn execute(store: &TableStore, read: &ReadRel) -> Result<Vec<Row>> {
    let name = single_name(read.table.as_ref(), "READ")?;
    let table = store
        .table(name)
        .ok_or_else(|| DbError::TableNotFound(name.to_string()))?;
    // Snapshot copy, in table order. No filtering or projection.
    Ok(table.rows().to_vec())
}
