//! Plan interpretation.
//!
//! One call validates and executes exactly one plan against the store. The
//! outer shape (exactly one relation, a root, an input) is checked here;
//! operation semantics live in the per-kind submodules.

mod ddl;
mod read;
mod write;

use crate::core::{DbError, Result, Row};
use crate::plan::{NamedObject, Plan, Rel};
use crate::storage::TableStore;

/// Execute one plan, returning the resulting rows.
///
/// Non-read operations return an empty row set. No operation triggers a save;
/// persistence runs on its own schedule.
pub fn execute(store: &mut TableStore, plan: &Plan) -> Result<Vec<Row>> {
    let [relation] = plan.relations.as_slice() else {
        return Err(DbError::InvalidPlan(
            "plan must have exactly one relation".into(),
        ));
    };
    let root = relation
        .root
        .as_ref()
        .ok_or_else(|| DbError::InvalidPlan("relation must have a root".into()))?;
    let input = root
        .input
        .as_ref()
        .ok_or_else(|| DbError::InvalidPlan("root must have an input".into()))?;

    match input {
        Rel::Ddl(rel) => ddl::execute(store, rel),
        Rel::Write(rel) => write::execute(store, rel),
        Rel::Read(rel) => read::execute(store, rel),
        Rel::ExtensionLeaf(_) => Err(DbError::Unsupported(
            "extension leaf is not executable".into(),
        )),
    }
}

/// Resolve an object reference that must carry exactly one name.
fn single_name<'a>(object: Option<&'a NamedObject>, op: &str) -> Result<&'a str> {
    let object =
        object.ok_or_else(|| DbError::InvalidPlan(format!("{op} requires a named object")))?;
    object
        .single_name()
        .ok_or_else(|| DbError::InvalidPlan(format!("{op} requires exactly one name")))
}
