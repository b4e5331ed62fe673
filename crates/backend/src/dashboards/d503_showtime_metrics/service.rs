use contracts::dashboards::d503_showtime_metrics::{ShowtimeData, ShowtimeMetricsResponse};
use contracts::shared::view::ViewParams;

use crate::shared::view_engine::{derive_view, Snapshot, ViewError};

/// Showtime chart rows, ranked order unless another preset is chosen
pub fn get_showtime_metrics(
    snapshot: &Snapshot<ShowtimeData>,
    params: &ViewParams,
) -> Result<ShowtimeMetricsResponse, ViewError> {
    derive_view(snapshot, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d503_showtime_metrics::mock_data;

    fn ranks(response: &ShowtimeMetricsResponse) -> Vec<u32> {
        response.records.iter().map(|r| r.rank).collect()
    }

    #[test]
    fn test_default_rank_order() {
        let snapshot = Snapshot::new(mock_data::records(), 1).unwrap();
        let response = get_showtime_metrics(&snapshot, &ViewParams::new()).unwrap();
        assert_eq!(ranks(&response), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(response.aggregates.sum("showtime_count"), 682.0);
    }

    #[test]
    fn test_market_share_then_back_to_rank() {
        let snapshot = Snapshot::new(mock_data::records(), 1).unwrap();
        let mut params = ViewParams::new();

        params.set_sort("market_share");
        let by_share = get_showtime_metrics(&snapshot, &params).unwrap();
        assert_eq!(ranks(&by_share), vec![1, 2, 3, 6, 4, 5]);

        params.set_sort("rank");
        let by_rank = get_showtime_metrics(&snapshot, &params).unwrap();
        assert_eq!(ranks(&by_rank), vec![1, 2, 3, 4, 5, 6]);
    }
}
