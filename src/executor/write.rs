use super::single_name;
use crate::core::{DbError, Result, Row, Value};
use crate::plan::{Expression, Literal, Rel, WriteOp, WriteRel};
use crate::storage::TableStore;

pub(super) fn execute(store: &mut TableStore, write: &WriteRel) -> Result<Vec<Row>> {
    let name = single_name(write.table.as_ref(), "WRITE")?;
    // The table is resolved before op dispatch, so UPDATE against a missing
    // table reports TableNotFound rather than Unimplemented.
    let table = store
        .table_mut(name)
        .ok_or_else(|| DbError::TableNotFound(name.to_string()))?;

    match write.op {
        WriteOp::Unspecified | WriteOp::Insert => {
            let input = write
                .input
                .as_ref()
                .ok_or_else(|| DbError::InvalidPlan("INSERT requires an input".into()))?;
            let row = decode_row(input)?;
            table.push_row(row);
            Ok(Vec::new())
        }
        WriteOp::Delete => {
            table.clear_rows();
            Ok(Vec::new())
        }
        WriteOp::Update => Err(DbError::Unimplemented("UPDATE".into())),
    }
}

/// Decode an INSERT payload: a literal leaf whose struct fields become the
/// row's values, in field order.
fn decode_row(input: &Rel) -> Result<Row> {
    let Rel::ExtensionLeaf(leaf) = input else {
        return Err(DbError::InvalidPlan(
            "INSERT input must be a literal leaf".into(),
        ));
    };
    let Some(Expression::Literal(literal)) = leaf.detail.as_ref() else {
        return Err(DbError::InvalidPlan(
            "INSERT input carries no literal".into(),
        ));
    };
    let Literal::Struct(fields) = literal else {
        return Err(DbError::InvalidPlan(
            "INSERT literal must be a struct".into(),
        ));
    };

    fields
        .iter()
        .map(|field| match field {
            Literal::I32(i) => Ok(Value::Integer(*i)),
            Literal::Text(s) => Ok(Value::Text(s.clone())),
            other => Err(DbError::InvalidPlan(format!(
                "unsupported literal kind in row: {:?}",
                other
            ))),
        })
        .collect()
}
