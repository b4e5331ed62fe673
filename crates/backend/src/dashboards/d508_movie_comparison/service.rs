use contracts::dashboards::d508_movie_comparison::{
    AvailableMovie, ComparisonData, ComparisonMovie, ComparisonParams, DemographicsRow,
    MetricBar, MovieComparisonResponse, MovieShare, MAX_COMPARED_MOVIES,
};
use contracts::shared::view::Record;

use super::selection::{MovieSelection, SelectionError};
use crate::shared::view_engine::Snapshot;

/// Comparison chart for the selected movies.
///
/// Single-value metrics keep only the selected movies, in dataset order.
/// Demographics always cover every movie of the dataset.
pub fn get_movie_comparison(
    snapshot: &Snapshot<ComparisonMovie>,
    params: &ComparisonParams,
) -> Result<MovieComparisonResponse, SelectionError> {
    let selection = match params.movies.as_deref() {
        Some(raw) => MovieSelection::parse(raw)?,
        None => MovieSelection::default(),
    };
    let movies = snapshot.records();
    selection.ensure_known(movies)?;

    let metric = params.metric.unwrap_or_default();
    let data = match metric.field_id() {
        Some(field_id) => ComparisonData::Bars(metric_bars(movies, &selection, field_id)),
        None => ComparisonData::Demographics(demographics(movies)),
    };

    let selected = selection
        .ids()
        .iter()
        .filter_map(|id| movies.iter().find(|movie| movie.id == *id))
        .cloned()
        .collect();

    let available = if selection.is_full() {
        Vec::new()
    } else {
        movies
            .iter()
            .filter(|movie| !selection.contains(movie.id))
            .map(|movie| AvailableMovie {
                id: movie.id,
                title: movie.title.clone(),
            })
            .collect()
    };

    Ok(MovieComparisonResponse {
        metric,
        metric_label: metric.label().to_string(),
        selected,
        available,
        max_selected: MAX_COMPARED_MOVIES,
        data,
    })
}

fn metric_bars(
    movies: &[ComparisonMovie],
    selection: &MovieSelection,
    field_id: &str,
) -> Vec<MetricBar> {
    movies
        .iter()
        .filter(|movie| selection.contains(movie.id))
        .filter_map(|movie| {
            movie.number_field(field_id).map(|value| MetricBar {
                movie_id: movie.id,
                title: movie.title.clone(),
                value,
            })
        })
        .collect()
}

/// One row per age bracket, brackets in first-seen order
fn demographics(movies: &[ComparisonMovie]) -> Vec<DemographicsRow> {
    let mut rows: Vec<DemographicsRow> = Vec::new();
    for movie in movies {
        for share in &movie.demographics {
            let entry = MovieShare {
                movie_id: movie.id,
                title: movie.title.clone(),
                percent: share.percent,
            };
            match rows.iter_mut().find(|row| row.bracket == share.bracket) {
                Some(row) => row.shares.push(entry),
                None => rows.push(DemographicsRow {
                    bracket: share.bracket.clone(),
                    shares: vec![entry],
                }),
            }
        }
    }
    rows
}
