use async_trait::async_trait;
use contracts::shared::view::{LoadState, Record, RecordSchema, RecordSchemaOwned, ViewInfo};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::source::{DataSource, DataSourceError};
use crate::shared::view_engine::{Snapshot, ViewError};

/// Why a load did not publish
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error(transparent)]
    Source(#[from] DataSourceError),
    #[error("invalid records: {0}")]
    Invalid(#[from] ViewError),
    #[error("load #{generation} superseded by a newer request")]
    Stale { generation: u64 },
}

/// Holder of one dataset's current snapshot.
///
/// Readers clone the `Arc` out of the watch channel and derive views without
/// holding any lock. Loads are tagged with a generation; a response that
/// arrives after a newer request was issued is dropped. A failed load keeps
/// the last good snapshot published.
pub struct DatasetStore<R: Record> {
    source: Arc<dyn DataSource<R>>,
    snapshot: watch::Sender<Arc<Snapshot<R>>>,
    state: watch::Sender<LoadState>,
    generation: AtomicU64,
}

impl<R: Record> DatasetStore<R> {
    pub fn new(source: Arc<dyn DataSource<R>>) -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Snapshot::empty()));
        let (state, _) = watch::channel(LoadState::Loading);
        Self {
            source,
            snapshot,
            state,
            generation: AtomicU64::new(0),
        }
    }

    pub fn schema(&self) -> &'static RecordSchema {
        R::schema()
    }

    /// Current snapshot
    pub fn current(&self) -> Arc<Snapshot<R>> {
        self.snapshot.borrow().clone()
    }

    /// Notified on every publish
    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot<R>>> {
        self.snapshot.subscribe()
    }

    pub fn load_state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Fetch from the data source and publish the result
    pub async fn reload(&self) -> Result<Arc<Snapshot<R>>, LoadError> {
        let view = R::schema().id;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!("{}: load #{} started", view, generation);

        let result = self.source.fetch().await;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("{}: discarding stale load #{}", view, generation);
            return Err(LoadError::Stale { generation });
        }

        let snapshot = match result
            .map_err(LoadError::from)
            .and_then(|records| Snapshot::new(records, generation).map_err(LoadError::from))
        {
            Ok(snapshot) => Arc::new(snapshot),
            Err(e) => {
                warn!("{}: load #{} failed, keeping last snapshot: {}", view, generation, e);
                self.state.send_replace(LoadState::Failed {
                    message: e.to_string(),
                });
                return Err(e);
            }
        };

        let published = self.snapshot.send_if_modified(|current| {
            // a newer load may have started while this one was validated
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            *current = snapshot.clone();
            true
        });
        if !published {
            debug!("{}: discarding stale load #{}", view, generation);
            return Err(LoadError::Stale { generation });
        }

        self.state.send_replace(LoadState::Ready);
        info!("{}: load #{} published {} records", view, generation, snapshot.len());
        Ok(snapshot)
    }

    /// Publish a successor of the current snapshot computed by `f`.
    ///
    /// Returns `Ok(false)` when nothing is loaded yet.
    pub fn update<F>(&self, f: F) -> Result<bool, ViewError>
    where
        F: FnOnce(&[R]) -> Vec<R>,
    {
        let mut outcome = Ok(false);
        self.snapshot.send_if_modified(|current| {
            if current.is_empty() {
                return false;
            }
            match current.next(f(current.records())) {
                Ok(next) => {
                    *current = Arc::new(next);
                    outcome = Ok(true);
                    true
                }
                Err(e) => {
                    outcome = Err(e);
                    false
                }
            }
        });
        outcome
    }
}

/// Type-erased access used by the dataset listing and reload endpoints
#[async_trait]
pub trait DatasetHandle: Send + Sync {
    fn schema(&self) -> &'static RecordSchema;

    fn info(&self) -> ViewInfo;

    async fn reload_dataset(&self) -> Result<usize, LoadError>;
}

#[async_trait]
impl<R: Record> DatasetHandle for DatasetStore<R> {
    fn schema(&self) -> &'static RecordSchema {
        R::schema()
    }

    fn info(&self) -> ViewInfo {
        let snapshot = self.current();
        let load_state = self.load_state();
        ViewInfo {
            schema: RecordSchemaOwned::from(R::schema()),
            snapshot_at: (load_state != LoadState::Loading).then(|| snapshot.published_at()),
            record_count: snapshot.len(),
            load_state,
        }
    }

    async fn reload_dataset(&self) -> Result<usize, LoadError> {
        self.reload().await.map(|snapshot| snapshot.len())
    }
}
