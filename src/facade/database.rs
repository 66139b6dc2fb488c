use super::saver::{SaveWorker, spawn_save_worker};
use crate::config::DatabaseConfig;
use crate::core::{DbError, Result, Row};
use crate::executor;
use crate::plan::Plan;
use crate::storage::TableStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The crate's facade: owns the table store and the background save worker.
///
/// Plan execution and the periodic save share the store through one lock;
/// every executed plan is a single atomic registry mutation.
///
/// # Examples
///
/// ```no_run
/// use relstore::{Database, DatabaseConfig};
///
/// # tokio_test::block_on(async {
/// let mut db = Database::open(DatabaseConfig::new("./tables.db")).unwrap();
/// db.start().unwrap();
/// // ... execute plans ...
/// db.stop().await.unwrap();
/// # });
/// ```
pub struct Database {
    config: DatabaseConfig,
    store: Arc<RwLock<TableStore>>,
    saver: Option<SaveWorker>,
}

impl Database {
    /// Open a database against the configured backing file.
    ///
    /// Persisted schemas are loaded immediately; the save worker is not
    /// started until [`start`](Self::start) is called.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        let store = TableStore::open(&config.path)?;
        Ok(Self {
            config,
            store: Arc::new(RwLock::new(store)),
            saver: None,
        })
    }

    /// Start the background save worker.
    pub fn start(&mut self) -> Result<()> {
        if self.saver.is_some() {
            return Err(DbError::Internal("save worker already running".into()));
        }
        self.saver = Some(spawn_save_worker(
            self.store.clone(),
            self.config.save_interval,
        ));
        Ok(())
    }

    /// Stop the background save worker and wait for it to exit.
    ///
    /// No final save is performed: schema changes since the last tick (and
    /// all row data, which is never persisted) are lost on shutdown.
    /// Idempotent when the worker is not running.
    pub async fn stop(&mut self) -> Result<()> {
        if let Some(saver) = self.saver.take() {
            saver.stop().await?;
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.saver.is_some()
    }

    /// Execute one plan, returning the resulting rows.
    pub async fn execute(&self, plan: &Plan) -> Result<Vec<Row>> {
        let mut store = self.store.write().await;
        executor::execute(&mut store, plan)
    }

    /// Save the registry's schemas now, outside the periodic schedule.
    pub async fn save(&self) -> Result<()> {
        self.store.read().await.save()
    }
}
