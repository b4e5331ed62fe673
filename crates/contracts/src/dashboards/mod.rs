pub mod d501_ticket_sales;
pub mod d502_cinema_metrics;
pub mod d503_showtime_metrics;
pub mod d504_top_movies;
pub mod d505_sentiment_posts;
pub mod d506_trending_topics;
pub mod d507_cinema_heatmap;
pub mod d508_movie_comparison;
