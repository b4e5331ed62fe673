use contracts::dashboards::d502_cinema_metrics::{
    CinemaData, CinemaMetricsResponse, CinemaMetricsSummary,
};
use contracts::shared::view::ViewParams;

use crate::shared::view_engine::aggregate::{mean, ratio, round_to};
use crate::shared::view_engine::{derive_view, Snapshot, ViewError};

/// Cinema table with the summary cards above it
pub fn get_cinema_metrics(
    snapshot: &Snapshot<CinemaData>,
    params: &ViewParams,
) -> Result<CinemaMetricsResponse, ViewError> {
    let view = derive_view(snapshot, params)?;
    let summary = summarize(&view.records);
    Ok(CinemaMetricsResponse { view, summary })
}

fn summarize(cinemas: &[CinemaData]) -> CinemaMetricsSummary {
    let total_showtimes: i64 = cinemas.iter().map(|c| c.total_showtimes).sum();
    let total_tickets: i64 = cinemas.iter().map(|c| c.total_tickets).sum();
    let total_revenue: f64 = cinemas.iter().map(|c| c.total_revenue).sum();
    let occupancy: Vec<f64> = cinemas.iter().map(|c| c.occupancy_rate as f64).collect();

    CinemaMetricsSummary {
        cinema_count: cinemas.len(),
        total_showtimes,
        total_tickets,
        total_revenue,
        average_occupancy: mean(&occupancy).map(|m| round_to(m, 0)),
        average_ticket_price: ratio(total_revenue, total_tickets as f64, 2),
        revenue_per_showtime: ratio(total_revenue, total_showtimes as f64, 2),
    }
}
