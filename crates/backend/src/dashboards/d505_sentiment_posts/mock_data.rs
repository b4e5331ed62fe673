use chrono::NaiveDate;
use contracts::dashboards::d505_sentiment_posts::{Sentiment, SentimentPost};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Social posts mentioning the studio's releases
pub fn records() -> Vec<SentimentPost> {
    vec![
        SentimentPost {
            id: 1,
            username: "filmfan_id".into(),
            platform: "Instagram".into(),
            post: "KKN di Desa Penari is absolutely terrifying! MD Entertainment has outdone themselves with this horror masterpiece. #KKNdiDesaPenari #MDEntertainment".into(),
            sentiment: Sentiment::Positive,
            engagements: 1243,
            impressions: 8750,
            reaches: 7200,
            date: date(2023, 5, 15),
        },
        SentimentPost {
            id: 2,
            username: "movie_critic".into(),
            platform: "Twitter".into(),
            post: "Not impressed with Agak Laen. The storyline is confusing and the acting is mediocre at best. Expected more from MD Entertainment. #AgakLaen".into(),
            sentiment: Sentiment::Negative,
            engagements: 567,
            impressions: 3850,
            reaches: 3100,
            date: date(2023, 6, 2),
        },
        SentimentPost {
            id: 3,
            username: "indonesian_cinema".into(),
            platform: "Facebook".into(),
            post: "Just watched Siksa Kubur. It was okay - some good scares but the plot was predictable. MD Entertainment's horror films are hit or miss. #SiksaKubur".into(),
            sentiment: Sentiment::Neutral,
            engagements: 321,
            impressions: 2150,
            reaches: 1800,
            date: date(2023, 6, 20),
        },
        SentimentPost {
            id: 4,
            username: "movie_enthusiast".into(),
            platform: "TikTok".into(),
            post: "KKN di Desa Penari deserves all the hype! The cinematography and sound design create such an immersive horror experience. MD Entertainment is raising the bar for Indonesian horror. #MDEntertainment #IndonesianCinema".into(),
            sentiment: Sentiment::Positive,
            engagements: 3567,
            impressions: 25430,
            reaches: 20100,
            date: date(2023, 5, 18),
        },
        SentimentPost {
            id: 5,
            username: "film_review".into(),
            platform: "YouTube".into(),
            post: "My detailed analysis of Agak Laen is now up on my channel! While the concept is fresh, the execution fell short. MD Entertainment needs to focus more on script development. Link in bio. #FilmReview #AgakLaen".into(),
            sentiment: Sentiment::Negative,
            engagements: 1254,
            impressions: 8900,
            reaches: 7500,
            date: date(2023, 6, 5),
        },
    ]
}
