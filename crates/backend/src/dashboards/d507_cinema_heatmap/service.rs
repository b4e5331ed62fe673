use contracts::dashboards::d507_cinema_heatmap::{CinemaHeatmapResponse, HeatmapCinema};
use contracts::shared::view::ViewParams;

use crate::shared::view_engine::{derive_view, Snapshot, ViewError};

pub fn get_cinema_heatmap(
    snapshot: &Snapshot<HeatmapCinema>,
    params: &ViewParams,
) -> Result<CinemaHeatmapResponse, ViewError> {
    let view = derive_view(snapshot, params)?;
    let total_showtimes = view.records.iter().map(|c| c.showtimes).sum();
    Ok(CinemaHeatmapResponse {
        view,
        total_showtimes,
    })
}
