use contracts::dashboards::d501_ticket_sales::TicketSalesItem;
use contracts::dashboards::d502_cinema_metrics::CinemaData;
use contracts::dashboards::d503_showtime_metrics::ShowtimeData;
use contracts::dashboards::d504_top_movies::MovieRanking;
use contracts::dashboards::d505_sentiment_posts::SentimentPost;
use contracts::dashboards::d506_trending_topics::TrendingTopic;
use contracts::dashboards::d507_cinema_heatmap::HeatmapCinema;
use contracts::dashboards::d508_movie_comparison::ComparisonMovie;
use contracts::shared::view::Record;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use super::source::MockDataSource;
use super::store::{DatasetHandle, DatasetStore};
use crate::dashboards::{
    d501_ticket_sales, d502_cinema_metrics, d503_showtime_metrics, d504_top_movies,
    d505_sentiment_posts, d506_trending_topics, d507_cinema_heatmap, d508_movie_comparison,
};
use crate::shared::config::DataConfig;

/// One store per dashboard dataset
pub struct Datasets {
    pub ticket_sales: Arc<DatasetStore<TicketSalesItem>>,
    pub cinema_metrics: Arc<DatasetStore<CinemaData>>,
    pub showtime_metrics: Arc<DatasetStore<ShowtimeData>>,
    pub top_movies: Arc<DatasetStore<MovieRanking>>,
    pub sentiment_posts: Arc<DatasetStore<SentimentPost>>,
    pub trending_topics: Arc<DatasetStore<TrendingTopic>>,
    pub cinema_heatmap: Arc<DatasetStore<HeatmapCinema>>,
    pub movie_comparison: Arc<DatasetStore<ComparisonMovie>>,
}

fn mock_store<R: Record>(fixtures: fn() -> Vec<R>, delay: Duration) -> Arc<DatasetStore<R>> {
    Arc::new(DatasetStore::new(Arc::new(MockDataSource::new(
        fixtures, delay,
    ))))
}

impl Datasets {
    /// Stores backed by the bundled fixtures
    pub fn with_mock_sources(config: &DataConfig) -> Self {
        let delay = config.load_delay();
        Self {
            ticket_sales: mock_store(d501_ticket_sales::mock_data::records, delay),
            cinema_metrics: mock_store(d502_cinema_metrics::mock_data::records, delay),
            showtime_metrics: mock_store(d503_showtime_metrics::mock_data::records, delay),
            top_movies: mock_store(d504_top_movies::mock_data::records, delay),
            sentiment_posts: mock_store(d505_sentiment_posts::mock_data::records, delay),
            trending_topics: mock_store(d506_trending_topics::mock_data::records, delay),
            cinema_heatmap: mock_store(d507_cinema_heatmap::mock_data::records, delay),
            movie_comparison: mock_store(d508_movie_comparison::mock_data::records, delay),
        }
    }

    /// All datasets in dashboard order
    pub fn handles(&self) -> Vec<Arc<dyn DatasetHandle>> {
        vec![
            self.ticket_sales.clone() as Arc<dyn DatasetHandle>,
            self.cinema_metrics.clone(),
            self.showtime_metrics.clone(),
            self.top_movies.clone(),
            self.sentiment_posts.clone(),
            self.trending_topics.clone(),
            self.cinema_heatmap.clone(),
            self.movie_comparison.clone(),
        ]
    }

    pub fn find(&self, view_id: &str) -> Option<Arc<dyn DatasetHandle>> {
        self.handles()
            .into_iter()
            .find(|handle| handle.schema().id == view_id)
    }

    /// Start the first load of every dataset in the background
    pub fn spawn_initial_loads(&self) -> Vec<JoinHandle<()>> {
        self.handles()
            .into_iter()
            .map(|handle| {
                tokio::spawn(async move {
                    if let Err(e) = handle.reload_dataset().await {
                        tracing::error!("{}: initial load failed: {}", handle.schema().id, e);
                    }
                })
            })
            .collect()
    }

    /// Load every dataset and wait for completion
    #[cfg(test)]
    pub async fn load_all(&self) -> anyhow::Result<()> {
        for handle in self.handles() {
            handle.reload_dataset().await?;
        }
        Ok(())
    }
}
