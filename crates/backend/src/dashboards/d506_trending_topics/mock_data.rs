use contracts::dashboards::d506_trending_topics::{TopicSource, Trend, TrendingTopic};

fn topic(id: u32, topic: &str, volume: i64, source: TopicSource, trend: Trend, percentage: f64) -> TrendingTopic {
    TrendingTopic {
        id,
        topic: topic.to_string(),
        volume,
        source,
        trend,
        percentage,
    }
}

pub fn records() -> Vec<TrendingTopic> {
    use TopicSource::*;
    vec![
        topic(1, "Godzilla x Kong: The New Empire", 27500, Youtube, Trend::Up, 12.0),
        topic(2, "Dune: Part Two", 25300, X, Trend::Up, 8.0),
        topic(3, "KKN di Desa Penari", 19800, Tiktok, Trend::Up, 15.0),
        topic(4, "Agak Laen", 18200, Instagram, Trend::Down, 3.0),
        topic(5, "Siksa Kubur", 16900, Google, Trend::Up, 10.0),
        topic(6, "Deadpool & Wolverine", 15600, Youtube, Trend::Stable, 0.0),
        topic(7, "Imlie - Season 3", 14300, News, Trend::Up, 5.0),
        topic(8, "The Strangers: Chapter 1", 12800, Facebook, Trend::Down, 2.0),
    ]
}
