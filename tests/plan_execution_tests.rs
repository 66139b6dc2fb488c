//! End-to-end plan execution tests
//!
//! Exercises the full DDL/write/read surface through the `Database` facade.
//! Run with: cargo test --test plan_execution_tests

use relstore::plan::{
    DdlOp, DdlRel, ExtensionLeafRel, NamedObject, Plan, ReadRel, Rel, WriteOp, WriteRel,
};
use relstore::{Database, DatabaseConfig, DbError, Value};
use tempfile::TempDir;

fn create_plan(table: &str, columns: &[&str]) -> Plan {
    Plan::single(Rel::Ddl(DdlRel {
        op: DdlOp::Create,
        object: Some(NamedObject::new([table])),
        schema: Some(columns.iter().map(|c| c.to_string()).collect()),
    }))
}

fn drop_plan(table: &str) -> Plan {
    Plan::single(Rel::Ddl(DdlRel {
        op: DdlOp::Drop,
        object: Some(NamedObject::new([table])),
        schema: None,
    }))
}

fn insert_plan(table: &str, values: Vec<Value>) -> Plan {
    Plan::single(Rel::Write(Box::new(WriteRel {
        op: WriteOp::Insert,
        table: Some(NamedObject::new([table])),
        input: Some(Rel::ExtensionLeaf(ExtensionLeafRel::row(values))),
    })))
}

fn delete_plan(table: &str) -> Plan {
    Plan::single(Rel::Write(Box::new(WriteRel {
        op: WriteOp::Delete,
        table: Some(NamedObject::new([table])),
        input: None,
    })))
}

fn update_plan(table: &str) -> Plan {
    Plan::single(Rel::Write(Box::new(WriteRel {
        op: WriteOp::Update,
        table: Some(NamedObject::new([table])),
        input: None,
    })))
}

fn read_plan(table: &str) -> Plan {
    Plan::single(Rel::Read(ReadRel {
        table: Some(NamedObject::new([table])),
    }))
}

fn open_db(dir: &TempDir) -> Database {
    Database::open(DatabaseConfig::new(dir.path().join("tables.db"))).unwrap()
}

#[tokio::test]
async fn test_create_then_read_is_empty() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);

    db.execute(&create_plan("users", &["id", "name"])).await.unwrap();
    let rows = db.execute(&read_plan("users")).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_duplicate_create() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);

    db.execute(&create_plan("users", &["id"])).await.unwrap();
    db.execute(&insert_plan("users", vec![Value::Integer(1)]))
        .await
        .unwrap();

    let err = db
        .execute(&create_plan("users", &["other"]))
        .await
        .unwrap_err();
    assert!(matches!(err, DbError::TableExists(name) if name == "users"));

    // The failed attempt left schema and rows untouched.
    let rows = db.execute(&read_plan("users")).await.unwrap();
    assert_eq!(rows, vec![vec![Value::Integer(1)]]);
}

#[tokio::test]
async fn test_drop_table() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);

    let err = db.execute(&drop_plan("ghost")).await.unwrap_err();
    assert!(matches!(err, DbError::TableNotFound(_)));

    db.execute(&create_plan("users", &["id"])).await.unwrap();
    db.execute(&drop_plan("users")).await.unwrap();

    let err = db.execute(&read_plan("users")).await.unwrap_err();
    assert!(matches!(err, DbError::TableNotFound(_)));
}

#[tokio::test]
async fn test_insert_then_read() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);

    db.execute(&create_plan("users", &["id", "name"])).await.unwrap();
    db.execute(&insert_plan(
        "users",
        vec![Value::Integer(42), Value::from("Alice")],
    ))
    .await
    .unwrap();

    let rows = db.execute(&read_plan("users")).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], vec![Value::Integer(42), Value::from("Alice")]);
}

#[tokio::test]
async fn test_delete_all_rows() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);

    db.execute(&create_plan("users", &["id"])).await.unwrap();
    for i in 0..5 {
        db.execute(&insert_plan("users", vec![Value::Integer(i)]))
            .await
            .unwrap();
    }

    db.execute(&delete_plan("users")).await.unwrap();
    let rows = db.execute(&read_plan("users")).await.unwrap();
    assert!(rows.is_empty());

    // The table survives and accepts new rows.
    db.execute(&insert_plan("users", vec![Value::Integer(9)]))
        .await
        .unwrap();
    let rows = db.execute(&read_plan("users")).await.unwrap();
    assert_eq!(rows, vec![vec![Value::Integer(9)]]);
}

#[tokio::test]
async fn test_update_always_unimplemented() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);

    db.execute(&create_plan("users", &["id"])).await.unwrap();
    let err = db.execute(&update_plan("users")).await.unwrap_err();
    assert!(matches!(err, DbError::Unimplemented(_)));

    db.execute(&insert_plan("users", vec![Value::Integer(1)]))
        .await
        .unwrap();
    let err = db.execute(&update_plan("users")).await.unwrap_err();
    assert!(matches!(err, DbError::Unimplemented(_)));
}

#[tokio::test]
async fn test_mixed_value_kinds_preserve_order() {
    let dir = TempDir::new().unwrap();
    let db = open_db(&dir);

    db.execute(&create_plan("events", &["code", "tag", "count"]))
        .await
        .unwrap();
    db.execute(&insert_plan(
        "events",
        vec![Value::Integer(-7), Value::from("boot"), Value::Integer(0)],
    ))
    .await
    .unwrap();

    let rows = db.execute(&read_plan("events")).await.unwrap();
    assert_eq!(
        rows[0],
        vec![Value::Integer(-7), Value::from("boot"), Value::Integer(0)]
    );
}
