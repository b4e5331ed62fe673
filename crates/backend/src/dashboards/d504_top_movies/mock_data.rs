use contracts::dashboards::d504_top_movies::MovieRanking;

#[allow(clippy::too_many_arguments)]
fn movie(
    id: &str,
    rank: u32,
    previous_rank: u32,
    title: &str,
    genre: &str,
    year: u32,
    rating: f64,
    tickets_sold: i64,
    market_share: f64,
) -> MovieRanking {
    MovieRanking {
        id: id.to_string(),
        rank,
        previous_rank,
        title: title.to_string(),
        genre: genre.to_string(),
        year,
        rating,
        tickets_sold,
        market_share,
    }
}

pub fn records() -> Vec<MovieRanking> {
    vec![
        movie("m1", 1, 1, "Interstellar 2", "Sci-Fi", 2023, 9.2, 15284, 28.4),
        movie("m2", 2, 3, "Quantum Valley", "Thriller", 2023, 8.7, 10572, 19.7),
        movie("m3", 3, 2, "Blue Symphony", "Drama", 2023, 8.3, 8196, 15.2),
        movie("m4", 4, 4, "Eternal Dawn", "Fantasy", 2023, 7.9, 6521, 12.1),
        movie("m5", 5, 6, "Neon Knights", "Action", 2023, 7.6, 5145, 9.6),
        movie("m6", 6, 5, "Silent Echo", "Mystery", 2023, 7.4, 4023, 7.5),
        movie("m7", 7, 8, "Crystal Memories", "Romance", 2022, 7.2, 2178, 4.1),
        movie("m8", 8, 7, "Desert Bloom", "Adventure", 2022, 6.9, 1845, 3.4),
    ]
}
