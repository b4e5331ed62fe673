use async_trait::async_trait;
use contracts::shared::view::Record;
use std::time::Duration;
use thiserror::Error;

/// Failure of an upstream fetch
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataSourceError {
    #[error("network error: {0}")]
    Network(String),
    #[error("data source returned no records")]
    EmptyResult,
}

/// Upstream collaborator delivering a full record set
#[async_trait]
pub trait DataSource<R: Record>: Send + Sync {
    async fn fetch(&self) -> Result<Vec<R>, DataSourceError>;
}

/// In-memory fixtures served after an artificial delay
pub struct MockDataSource<R> {
    fixtures: fn() -> Vec<R>,
    delay: Duration,
}

impl<R: Record> MockDataSource<R> {
    pub fn new(fixtures: fn() -> Vec<R>, delay: Duration) -> Self {
        Self { fixtures, delay }
    }
}

#[async_trait]
impl<R: Record> DataSource<R> for MockDataSource<R> {
    async fn fetch(&self) -> Result<Vec<R>, DataSourceError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let records = (self.fixtures)();
        if records.is_empty() {
            return Err(DataSourceError::EmptyResult);
        }
        Ok(records)
    }
}
