use chrono::Utc;
use contracts::dashboards::d501_ticket_sales::TicketSalesItem;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::dashboards::d501_ticket_sales::simulation::{apply_tick, RefreshPolicy};
use crate::shared::config::RefreshConfig;
use crate::shared::data::store::DatasetStore;
use crate::shared::format::format_percent_change;
use crate::shared::view_engine::aggregate::percent_change;
use crate::shared::view_engine::ViewError;

/// Background worker simulating live ticket sales.
pub struct RefreshWorker {
    store: Arc<DatasetStore<TicketSalesItem>>,
    policy: RefreshPolicy,
    interval: Duration,
}

impl RefreshWorker {
    pub fn new(store: Arc<DatasetStore<TicketSalesItem>>, config: &RefreshConfig) -> Self {
        Self::with_policy(store, RefreshPolicy::from(config), config.interval())
    }

    pub fn with_policy(
        store: Arc<DatasetStore<TicketSalesItem>>,
        policy: RefreshPolicy,
        interval: Duration,
    ) -> Self {
        Self {
            store,
            policy,
            interval,
        }
    }

    /// Spawn the loop on the current runtime.
    pub fn spawn(self) -> RefreshHandle {
        let (shutdown, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(self.run_loop(shutdown_rx));
        RefreshHandle {
            shutdown,
            task: Some(task),
        }
    }

    /// Tick until shutdown is signalled or the handle is gone.
    async fn run_loop(self, mut shutdown: watch::Receiver<bool>) {
        info!(
            "Ticket sales refresh worker started with interval {:?}",
            self.interval
        );
        let mut rng = StdRng::from_entropy();
        let mut interval = time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // first tick completes immediately
        interval.tick().await;

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Err(e) = self.tick(&mut rng) {
                        error!("Ticket sales refresh failed: {}", e);
                    }
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
        info!("Ticket sales refresh worker stopped");
    }

    /// Apply one tick to the published snapshot; `Ok(None)` when nothing is loaded yet.
    pub fn tick<G: Rng + ?Sized>(&self, rng: &mut G) -> Result<Option<usize>, ViewError> {
        let mut changed = 0;
        let published = self.store.update(|items| {
            let outcome = apply_tick(items, &self.policy, rng, Utc::now());
            changed = outcome.changed;
            outcome.items
        })?;

        if !published {
            debug!("Ticket sales not loaded yet, skipping refresh tick");
            return Ok(None);
        }

        let snapshot = self.store.current();
        let total: i64 = snapshot.records().iter().map(|i| i.total_tickets).sum();
        let previous: i64 = snapshot.records().iter().map(|i| i.previous_total).sum();
        info!(
            "Ticket sales refreshed: {} of {} rows changed, overall {}",
            changed,
            snapshot.len(),
            format_percent_change(percent_change(total as f64, previous as f64))
        );
        Ok(Some(changed))
    }
}

/// Owner of a running refresh worker; dropping it cancels the worker.
pub struct RefreshHandle {
    shutdown: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    /// Ask the loop to exit after its current tick.
    pub fn stop(&self) {
        self.shutdown.send_replace(true);
    }

    /// Stop and wait for the loop to exit.
    pub async fn join(mut self) {
        self.stop();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    error!("Ticket sales refresh worker panicked: {}", e);
                }
            }
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.shutdown.send_replace(true);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d501_ticket_sales::mock_data;
    use crate::shared::data::source::MockDataSource;

    async fn loaded_store() -> Arc<DatasetStore<TicketSalesItem>> {
        let store = Arc::new(DatasetStore::new(Arc::new(MockDataSource::new(
            mock_data::records,
            Duration::ZERO,
        ))));
        store.reload().await.unwrap();
        store
    }

    fn always() -> RefreshPolicy {
        RefreshPolicy {
            update_probability: 1.0,
            ..RefreshPolicy::default()
        }
    }

    #[tokio::test]
    async fn test_tick_before_load_is_skipped() {
        let store = Arc::new(DatasetStore::new(Arc::new(MockDataSource::new(
            mock_data::records,
            Duration::ZERO,
        ))));
        let worker = RefreshWorker::with_policy(store, always(), Duration::from_secs(15));
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(worker.tick(&mut rng), Ok(None));
    }

    #[tokio::test]
    async fn test_tick_publishes_new_snapshot() {
        let store = loaded_store().await;
        let before = store.current();
        let worker = RefreshWorker::with_policy(store.clone(), always(), Duration::from_secs(15));

        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(worker.tick(&mut rng), Ok(Some(5)));

        let after = store.current();
        assert_eq!(after.revision(), before.revision() + 1);
        assert_eq!(after.generation(), before.generation());
        // readers holding the old snapshot keep the old figures
        let totals: Vec<i64> = before.records().iter().map(|i| i.total_tickets).collect();
        assert_eq!(totals, vec![823, 612, 405, 347, 289]);
    }

    #[tokio::test]
    async fn test_worker_ticks_until_stopped() {
        let store = loaded_store().await;
        let mut updates = store.subscribe();
        updates.borrow_and_update();

        let handle =
            RefreshWorker::with_policy(store.clone(), always(), Duration::from_millis(20)).spawn();

        time::timeout(Duration::from_secs(2), updates.changed())
            .await
            .expect("no refresh within timeout")
            .unwrap();
        assert!(store.current().revision() >= 1);

        time::timeout(Duration::from_secs(2), handle.join())
            .await
            .expect("worker did not stop within timeout");
    }

    #[tokio::test]
    async fn test_drop_cancels_worker() {
        let store = loaded_store().await;
        let handle =
            RefreshWorker::with_policy(store.clone(), always(), Duration::from_millis(10)).spawn();
        drop(handle);

        time::sleep(Duration::from_millis(30)).await;
        let revision = store.current().revision();
        time::sleep(Duration::from_millis(60)).await;
        assert_eq!(store.current().revision(), revision);
    }
}
