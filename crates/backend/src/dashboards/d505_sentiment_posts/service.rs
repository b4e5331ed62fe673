use contracts::dashboards::d505_sentiment_posts::{
    Sentiment, SentimentCounts, SentimentPost, SentimentPostsResponse,
};
use contracts::shared::view::ViewParams;

use crate::shared::view_engine::{derive_view, Snapshot, ViewError};

/// Post list plus filter-button badges; counts cover every post
pub fn get_sentiment_posts(
    snapshot: &Snapshot<SentimentPost>,
    params: &ViewParams,
) -> Result<SentimentPostsResponse, ViewError> {
    let view = derive_view(snapshot, params)?;
    Ok(SentimentPostsResponse {
        view,
        sentiment_counts: count_sentiments(snapshot.records()),
    })
}

fn count_sentiments(posts: &[SentimentPost]) -> SentimentCounts {
    posts.iter().fold(
        SentimentCounts {
            positive: 0,
            negative: 0,
            neutral: 0,
        },
        |mut counts, post| {
            match post.sentiment {
                Sentiment::Positive => counts.positive += 1,
                Sentiment::Negative => counts.negative += 1,
                Sentiment::Neutral => counts.neutral += 1,
            }
            counts
        },
    )
}
