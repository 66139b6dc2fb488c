use super::single_name;
use crate::core::{DbError, Result, Row};
use crate::plan::{DdlOp, DdlRel};
use crate::storage::TableStore;

pub(super) fn execute(store: &mut TableStore, ddl: &DdlRel) -> Result<Vec<Row>> {
    match ddl.op {
        DdlOp::Create => create_table(store, ddl),
        DdlOp::Drop => drop_table(store, ddl),
    }
}

fn create_table(store: &mut TableStore, ddl: &DdlRel) -> Result<Vec<Row>> {
    let name = single_name(ddl.object.as_ref(), "CREATE TABLE")?;
    let schema = ddl
        .schema
        .as_ref()
        .ok_or_else(|| DbError::InvalidPlan("CREATE TABLE requires a schema".into()))?;

    if store.create_table(name, schema.clone()).is_none() {
        return Err(DbError::TableExists(name.to_string()));
    }
    Ok(Vec::new())
}

fn drop_table(store: &mut TableStore, ddl: &DdlRel) -> Result<Vec<Row>> {
    let name = single_name(ddl.object.as_ref(), "DROP TABLE")?;

    if !store.drop_table(name) {
        return Err(DbError::TableNotFound(name.to_string()));
    }
    Ok(Vec::new())
}
