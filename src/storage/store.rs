use super::Table;
use crate::core::{DbError, Result};
use log::info;
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// The table registry and its on-disk schema mirror.
///
/// Tables are kept in creation order; `save` serializes one line per table in
/// that order. Only table identity and schema are persisted - rows never
/// survive a save/restart cycle. That is a stated limitation of this
/// persistence layer, not an oversight.
pub struct TableStore {
    path: PathBuf,
    tables: Vec<Table>,
}

impl TableStore {
    /// Open a store against `path`, loading any schemas persisted there.
    ///
    /// A missing backing file is not an error; the registry starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let mut store = Self {
            path: path.into(),
            tables: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Create a table, or return `None` when the name is already taken.
    pub fn create_table(&mut self, name: &str, schema: Vec<String>) -> Option<&mut Table> {
        if self.table(name).is_some() {
            return None;
        }
        self.tables.push(Table::new(name, schema));
        self.tables.last_mut()
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name() == name)
    }

    pub fn table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|table| table.name() == name)
    }

    /// Remove the named table. Returns whether a removal occurred.
    pub fn drop_table(&mut self, name: &str) -> bool {
        let before = self.tables.len();
        self.tables.retain(|table| table.name() != name);
        self.tables.len() != before
    }

    pub fn table_names(&self) -> Vec<&str> {
        self.tables.iter().map(Table::name).collect()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the registry to the backing file, one `name:col1,col2,...`
    /// line per table. Row data is not written.
    pub fn save(&self) -> Result<()> {
        let file = File::create(&self.path)
            .map_err(|e| DbError::Internal(format!("failed to open {:?} for writing: {}", self.path, e)))?;
        let mut writer = BufWriter::new(file);
        for table in &self.tables {
            writeln!(writer, "{}:{}", table.name(), table.schema().join(","))
                .map_err(|e| DbError::Internal(format!("failed to write {:?}: {}", self.path, e)))?;
        }
        writer
            .flush()
            .map_err(|e| DbError::Internal(format!("failed to flush {:?}: {}", self.path, e)))?;
        Ok(())
    }

    /// Populate the registry from the backing file. Invoked once, at open.
    ///
    /// Lines split on the first `:`; the remainder splits on `,` into column
    /// names. Neither separator can be escaped, so names containing them do
    /// not round-trip.
    fn load(&mut self) -> Result<()> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(DbError::Internal(format!(
                    "failed to read {:?}: {}",
                    self.path, e
                )));
            }
        };
        for line in contents.lines() {
            let (name, schema_part) = line.split_once(':').unwrap_or((line, ""));
            let schema = if schema_part.is_empty() {
                Vec::new()
            } else {
                schema_part.split(',').map(str::to_string).collect()
            };
            self.create_table(name, schema);
        }
        if !self.tables.is_empty() {
            info!(
                "recovered {} table schema(s) from {:?}",
                self.tables.len(),
                self.path
            );
        }
        Ok(())
    }
}
