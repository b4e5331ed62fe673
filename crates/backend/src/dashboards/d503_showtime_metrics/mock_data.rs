use contracts::dashboards::d503_showtime_metrics::ShowtimeData;

fn showtime(rank: u32, title: &str, market_share: f64, showtime_count: u32, color: &str) -> ShowtimeData {
    ShowtimeData {
        rank,
        title: title.to_string(),
        market_share,
        showtime_count,
        color: color.to_string(),
    }
}

/// Daily showtimes per movie, "Other Films" aggregating the tail
pub fn records() -> Vec<ShowtimeData> {
    vec![
        showtime(1, "Interstellar 2", 28.4, 186, "#4361ee"),
        showtime(2, "Quantum Valley", 19.7, 142, "#3a0ca3"),
        showtime(3, "Blue Symphony", 15.2, 98, "#4895ef"),
        showtime(4, "Eternal Dawn", 12.1, 85, "#560bad"),
        showtime(5, "Neon Knights", 9.6, 67, "#7209b7"),
        showtime(6, "Other Films", 15.0, 104, "#b5b5b5"),
    ]
}
