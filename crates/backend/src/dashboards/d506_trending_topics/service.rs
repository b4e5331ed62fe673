use contracts::dashboards::d506_trending_topics::{TrendingTopic, TrendingTopicsResponse};
use contracts::shared::view::ViewParams;

use crate::shared::view_engine::{derive_view, Snapshot, ViewError};

pub fn get_trending_topics(
    snapshot: &Snapshot<TrendingTopic>,
    params: &ViewParams,
) -> Result<TrendingTopicsResponse, ViewError> {
    derive_view(snapshot, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d506_trending_topics::mock_data;

    fn ids(response: &TrendingTopicsResponse) -> Vec<u32> {
        response.records.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_presets() {
        let snapshot = Snapshot::new(mock_data::records(), 1).unwrap();
        let mut params = ViewParams::new();

        let response = get_trending_topics(&snapshot, &params).unwrap();
        assert_eq!(ids(&response), vec![1, 2, 3, 4, 5, 6, 7, 8]);

        params.set_sort("growth");
        let response = get_trending_topics(&snapshot, &params).unwrap();
        assert_eq!(ids(&response), vec![3, 1, 5, 2, 7, 4, 8, 6]);
    }

    #[test]
    fn test_group_by_trend() {
        let snapshot = Snapshot::new(mock_data::records(), 1).unwrap();
        let mut params = ViewParams::new();
        params.set_group_by("trend");
        let response = get_trending_topics(&snapshot, &params).unwrap();

        let keys: Vec<&str> = response.groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["down", "stable", "up"]);
        assert_eq!(response.groups[0].count, 2);
        assert_eq!(response.groups[0].subtotals["volume"], 31000.0);
        assert_eq!(response.groups[2].count, 5);
    }

    #[test]
    fn test_source_filter() {
        let snapshot = Snapshot::new(mock_data::records(), 1).unwrap();
        let mut params = ViewParams::new();
        params.set_category("youtube");
        let response = get_trending_topics(&snapshot, &params).unwrap();
        assert_eq!(ids(&response), vec![1, 6]);
        assert_eq!(response.aggregates.sum("volume"), 43100.0);
    }
}
