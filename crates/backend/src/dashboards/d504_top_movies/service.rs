use contracts::dashboards::d504_top_movies::{MovementEntry, MovieRanking, TopMoviesResponse};
use contracts::shared::view::ViewParams;

use crate::shared::view_engine::{derive_view, Snapshot, ViewError};

pub fn get_top_movies(
    snapshot: &Snapshot<MovieRanking>,
    params: &ViewParams,
) -> Result<TopMoviesResponse, ViewError> {
    let view = derive_view(snapshot, params)?;
    let movements = view.records.iter().map(movement_entry).collect();
    Ok(TopMoviesResponse { view, movements })
}

/// Movement indicator of one row; `places` is positive when the movie climbed
fn movement_entry(movie: &MovieRanking) -> MovementEntry {
    let places = if movie.previous_rank == 0 {
        0
    } else {
        movie.previous_rank as i64 - movie.rank as i64
    };
    MovementEntry {
        id: movie.id.clone(),
        movement: movie.movement(),
        places,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d504_top_movies::mock_data;
    use contracts::dashboards::d504_top_movies::RankMovement;

    #[test]
    fn test_movements_follow_rows() {
        let snapshot = Snapshot::new(mock_data::records(), 1).unwrap();
        let response = get_top_movies(&snapshot, &ViewParams::new()).unwrap();

        assert_eq!(response.movements.len(), 8);
        let m: Vec<RankMovement> = response.movements.iter().map(|e| e.movement).collect();
        assert_eq!(m[0], RankMovement::Same);
        assert_eq!(m[1], RankMovement::Up);
        assert_eq!(m[2], RankMovement::Down);
        assert_eq!(response.movements[1].places, 1);
        assert_eq!(response.movements[2].places, -1);
    }

    #[test]
    fn test_new_entry() {
        let mut records = mock_data::records();
        records[7].previous_rank = 0;
        let snapshot = Snapshot::new(records, 1).unwrap();
        let response = get_top_movies(&snapshot, &ViewParams::new()).unwrap();
        let last = response.movements.last().unwrap();
        assert_eq!(last.movement, RankMovement::New);
        assert_eq!(last.places, 0);
    }

    #[test]
    fn test_genre_filter_and_rating_sort() {
        let snapshot = Snapshot::new(mock_data::records(), 1).unwrap();
        let mut params = ViewParams::new();
        params.set_sort("rating");
        let response = get_top_movies(&snapshot, &params).unwrap();
        assert_eq!(response.view.records[0].title, "Interstellar 2");
        assert_eq!(response.movements[0].id, "m1");

        params.set_category("Drama");
        let response = get_top_movies(&snapshot, &params).unwrap();
        assert_eq!(response.view.records.len(), 1);
        assert_eq!(response.view.records[0].id, "m3");
    }
}
