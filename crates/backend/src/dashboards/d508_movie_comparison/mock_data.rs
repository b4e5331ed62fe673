use contracts::dashboards::d508_movie_comparison::{AgeShare, ComparisonMovie};

const BRACKETS: [&str; 5] = ["18-24", "25-34", "35-44", "45-54", "55+"];

fn demographics(percents: [u32; 5]) -> Vec<AgeShare> {
    BRACKETS
        .iter()
        .zip(percents)
        .map(|(bracket, percent)| AgeShare {
            bracket: bracket.to_string(),
            percent,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn movie(
    id: u32,
    title: &str,
    genre: &str,
    year: u32,
    duration: u32,
    rating: f64,
    (admission, gross_income, showtimes): (i64, f64, i64),
    percents: [u32; 5],
    description: &str,
    poster: &str,
) -> ComparisonMovie {
    ComparisonMovie {
        id,
        title: title.to_string(),
        description: description.to_string(),
        poster_url: format!(
            "https://images.unsplash.com/{}?q=80&w=300&auto=format&fit=crop",
            poster
        ),
        genre: genre.to_string(),
        year,
        duration,
        rating,
        admission,
        gross_income,
        showtimes,
        demographics: demographics(percents),
    }
}

pub fn records() -> Vec<ComparisonMovie> {
    vec![
        movie(
            1,
            "Interstellar",
            "Sci-Fi/Adventure",
            2014,
            169,
            8.6,
            (85000, 1250000.0, 245),
            [32, 45, 30, 20, 12],
            "A team of explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
            "photo-1578374173705-969cbe6f2d6b",
        ),
        movie(
            2,
            "The Matrix",
            "Sci-Fi/Action",
            1999,
            136,
            8.7,
            (67000, 980000.0, 198),
            [28, 42, 32, 15, 8],
            "A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.",
            "photo-1598899134739-24c46f58b8c0",
        ),
        movie(
            3,
            "Inception",
            "Sci-Fi/Action",
            2010,
            148,
            8.8,
            (92000, 1430000.0, 267),
            [35, 40, 35, 18, 10],
            "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
            "photo-1536440136628-849c177e76a1",
        ),
        movie(
            4,
            "Pulp Fiction",
            "Crime/Drama",
            1994,
            154,
            8.9,
            (45000, 670000.0, 154),
            [22, 35, 30, 25, 18],
            "The lives of two mob hitmen, a boxer, a gangster and his wife, and a pair of diner bandits intertwine in four tales of violence and redemption.",
            "photo-1614846384571-1e31fbd12a3f",
        ),
        movie(
            5,
            "The Shawshank Redemption",
            "Drama",
            1994,
            142,
            9.3,
            (52000, 780000.0, 132),
            [18, 30, 28, 32, 22],
            "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
            "photo-1602170284347-c49accb7e749",
        ),
        movie(
            6,
            "The Dark Knight",
            "Action/Crime",
            2008,
            152,
            9.0,
            (98000, 1580000.0, 289),
            [38, 43, 31, 17, 9],
            "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
            "photo-1531259683007-016a7b628fc3",
        ),
    ]
}
