//! Relational plan tree.
//!
//! Plans arrive already parsed and strongly typed; this module only defines
//! the shapes the executor recognizes. A plan carries exactly one relation
//! whose root input is one of the executable node kinds (DDL, write, read).
//! The executor never mutates a plan.

use crate::core::{Row, Value};

/// A plan describing one relational operation.
#[derive(Debug, Clone)]
pub struct Plan {
    pub relations: Vec<PlanRel>,
}

#[derive(Debug, Clone)]
pub struct PlanRel {
    pub root: Option<RelRoot>,
}

#[derive(Debug, Clone)]
pub struct RelRoot {
    pub input: Option<Rel>,
}

/// Relation nodes - one per operation kind.
///
/// `ExtensionLeaf` carries an embedded expression payload; it appears as the
/// input of an INSERT and is not executable on its own.
#[derive(Debug, Clone)]
pub enum Rel {
    Ddl(DdlRel),
    Write(Box<WriteRel>),
    Read(ReadRel),
    ExtensionLeaf(ExtensionLeafRel),
}

/// Create or drop a table.
#[derive(Debug, Clone)]
pub struct DdlRel {
    pub op: DdlOp,
    pub object: Option<NamedObject>,
    /// Column names for CREATE TABLE.
    pub schema: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DdlOp {
    Create,
    Drop,
}

/// Mutate a table's rows.
#[derive(Debug, Clone)]
pub struct WriteRel {
    pub op: WriteOp,
    pub table: Option<NamedObject>,
    /// Row payload for INSERT, as a wrapped literal relation.
    pub input: Option<Rel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOp {
    /// Treated as INSERT.
    Unspecified,
    Insert,
    Delete,
    Update,
}

/// Read a table's full row snapshot.
#[derive(Debug, Clone)]
pub struct ReadRel {
    pub table: Option<NamedObject>,
}

/// A leaf relation wrapping an opaque expression payload.
#[derive(Debug, Clone)]
pub struct ExtensionLeafRel {
    pub detail: Option<Expression>,
}

#[derive(Debug, Clone)]
pub enum Expression {
    Literal(Literal),
}

#[derive(Debug, Clone)]
pub enum Literal {
    I32(i32),
    Text(String),
    Bool(bool),
    /// An ordered list of literal fields, read as one row.
    Struct(Vec<Literal>),
}

/// A dotted object reference. All operations here require exactly one name.
#[derive(Debug, Clone)]
pub struct NamedObject {
    pub names: Vec<String>,
}

impl NamedObject {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The single name, or `None` when the reference is empty or dotted.
    pub fn single_name(&self) -> Option<&str> {
        match self.names.as_slice() {
            [name] => Some(name),
            _ => None,
        }
    }
}

impl Plan {
    /// Wrap a single relation node in the root/input nesting.
    pub fn single(input: Rel) -> Self {
        Self {
            relations: vec![PlanRel {
                root: Some(RelRoot { input: Some(input) }),
            }],
        }
    }
}

impl ExtensionLeafRel {
    /// Wrap a row of values as the struct-literal payload INSERT expects.
    pub fn row(values: Row) -> Self {
        let fields = values
            .into_iter()
            .map(|value| match value {
                Value::Integer(i) => Literal::I32(i),
                Value::Text(s) => Literal::Text(s),
            })
            .collect();
        Self {
            detail: Some(Expression::Literal(Literal::Struct(fields))),
        }
    }
}
