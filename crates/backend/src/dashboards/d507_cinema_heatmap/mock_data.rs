use contracts::dashboards::d507_cinema_heatmap::{Density, HeatmapCinema};

fn cinema(id: &str, city: &str, name: &str, showtimes: i64, lat: f64, lng: f64, density: Density) -> HeatmapCinema {
    HeatmapCinema {
        id: id.to_string(),
        city: city.to_string(),
        name: name.to_string(),
        showtimes,
        latitude: lat,
        longitude: lng,
        density,
    }
}

pub fn records() -> Vec<HeatmapCinema> {
    use Density::*;
    vec![
        cinema("1", "New York", "Empire Cinema", 56, 40.7128, -74.0060, High),
        cinema("2", "Los Angeles", "Hollywood Dreams", 42, 34.0522, -118.2437, High),
        cinema("3", "Chicago", "Windy City Cinema", 38, 41.8781, -87.6298, Medium),
        cinema("4", "San Francisco", "Golden Gate Movies", 29, 37.7749, -122.4194, Medium),
        cinema("5", "New York", "Manhattan Screens", 51, 40.7831, -73.9712, High),
        cinema("6", "Boston", "Harbor Cinemas", 22, 42.3601, -71.0589, Low),
        cinema("7", "Seattle", "Emerald Screens", 26, 47.6062, -122.3321, Medium),
        cinema("8", "Denver", "Mile High Movies", 19, 39.7392, -104.9903, Low),
    ]
}
