use contracts::dashboards::d502_cinema_metrics::{CinemaData, TopMovie};

#[allow(clippy::too_many_arguments)]
fn cinema(
    id: &str,
    name: &str,
    city: &str,
    state: &str,
    total_showtimes: i64,
    total_tickets: i64,
    occupancy_rate: i64,
    total_revenue: f64,
    average_ticket_price: f64,
    top_movie: (&str, u32),
) -> CinemaData {
    CinemaData {
        id: id.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        total_showtimes,
        total_tickets,
        occupancy_rate,
        total_revenue,
        average_ticket_price,
        top_movie: Some(TopMovie {
            title: top_movie.0.to_string(),
            showtimes: top_movie.1,
        }),
    }
}

pub fn records() -> Vec<CinemaData> {
    vec![
        cinema("c1", "Empire Cinema", "New York", "NY", 56, 3850, 82, 61600.0, 16.0, ("Interstellar 2", 12)),
        cinema("c2", "Manhattan Screens", "New York", "NY", 51, 3105, 74, 52785.0, 17.0, ("Quantum Valley", 10)),
        cinema("c3", "Hollywood Dreams", "Los Angeles", "CA", 42, 3105, 86, 49680.0, 16.0, ("Interstellar 2", 11)),
        cinema("c4", "LA Cineplex", "Los Angeles", "CA", 38, 2765, 78, 44240.0, 16.0, ("Blue Symphony", 9)),
        cinema("c5", "Windy City Cinema", "Chicago", "IL", 38, 2345, 68, 37520.0, 16.0, ("Interstellar 2", 8)),
        cinema("c6", "Chicago Screens", "Chicago", "IL", 34, 2105, 72, 33680.0, 16.0, ("Quantum Valley", 7)),
        cinema("c7", "Golden Gate Movies", "San Francisco", "CA", 29, 1984, 76, 33728.0, 17.0, ("Interstellar 2", 7)),
        cinema("c8", "Harbor Cinemas", "Boston", "MA", 22, 1705, 82, 27280.0, 16.0, ("Eternal Dawn", 6)),
    ]
}
