//! Tabular view engine
//!
//! Pure functions over an immutable snapshot: filter, sort, aggregate and
//! group. Nothing here touches I/O or shared state.

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod query;
pub mod snapshot;
pub mod sort;
pub mod tree_builder;

pub use error::ViewError;
pub use query::{SortRule, ViewQuery};
pub use snapshot::Snapshot;

use contracts::shared::view::{DerivedView, Record, ViewParams};

use tree_builder::GroupBuilder;

/// Derive the view of `snapshot` for `params`.
///
/// Aggregates and groups are computed over the filtered subset; the
/// category list covers the whole snapshot.
pub fn derive_view<R: Record>(
    snapshot: &Snapshot<R>,
    params: &ViewParams,
) -> Result<DerivedView<R>, ViewError> {
    let schema = R::schema();
    let query = ViewQuery::compile(schema, params)?;

    let filtered = filter::filter_records(snapshot.records(), &query);
    let records = match &query.sort {
        Some(rule) => sort::sort_records(&filtered, rule),
        None => filtered,
    };

    let aggregates = aggregate::summarize(&records, schema);

    let groups = match query.group_by {
        Some(field) => {
            let columns = schema
                .aggregate_fields()
                .map(|f| f.id.to_string())
                .collect();
            GroupBuilder::new(field.id, columns).build(&records)
        }
        None => vec![],
    };

    let categories = schema
        .category_field
        .map(|field_id| filter::distinct_values(snapshot.records(), field_id))
        .unwrap_or_default();

    Ok(DerivedView {
        view_id: schema.id.to_string(),
        source_count: snapshot.len(),
        records,
        aggregates,
        groups,
        categories,
        applied_sort: query.sort.as_ref().map(SortRule::applied),
        snapshot_at: snapshot.published_at(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d502_cinema_metrics::{CinemaData, CINEMA_METRICS_SCHEMA};
    use contracts::shared::view::SortDirection;

    fn cinema(id: &str, city: &str, state: &str, tickets: i64, occupancy: i64) -> CinemaData {
        CinemaData {
            id: id.to_string(),
            name: format!("Cinema {id}"),
            city: city.to_string(),
            state: state.to_string(),
            total_showtimes: 30,
            total_tickets: tickets,
            occupancy_rate: occupancy,
            total_revenue: tickets as f64 * 16.0,
            average_ticket_price: 16.0,
            top_movie: None,
        }
    }

    fn snapshot() -> Snapshot<CinemaData> {
        Snapshot::new(
            vec![
                cinema("c1", "New York", "NY", 3850, 82),
                cinema("c2", "New York", "NY", 3105, 74),
                cinema("c3", "Chicago", "IL", 2345, 68),
            ],
            1,
        )
        .unwrap()
    }

    #[test]
    fn test_aggregates_follow_filter() {
        let mut params = ViewParams::new();
        params.set_category("New York");
        let view = derive_view(&snapshot(), &params).unwrap();

        assert_eq!(view.view_id, CINEMA_METRICS_SCHEMA.id);
        assert_eq!(view.source_count, 3);
        assert_eq!(view.records.len(), 2);
        assert_eq!(view.aggregates.count, 2);
        assert_eq!(view.aggregates.sum("total_tickets"), 6955.0);
        assert_eq!(view.aggregates.mean("occupancy_rate"), Some(78.0));
        assert_eq!(view.categories, vec!["New York", "Chicago"]);
        assert!(view.groups.is_empty());
        assert!(view.applied_sort.is_none());
    }

    #[test]
    fn test_sort_and_group() {
        let mut params = ViewParams::new();
        params.set_sort("tickets").set_group_by("state");
        let view = derive_view(&snapshot(), &params).unwrap();

        let ids: Vec<&str> = view.records.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);
        let applied = view.applied_sort.unwrap();
        assert_eq!(applied.field_id, "total_tickets");
        assert_eq!(applied.direction, SortDirection::Desc);

        assert_eq!(view.groups.len(), 2);
        assert_eq!(view.groups[0].key, "IL");
        assert_eq!(view.groups[1].key, "NY");
        assert_eq!(view.groups[1].subtotals["total_tickets"], 6955.0);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let mut params = ViewParams::new();
        params.set_search("boston");
        let view = derive_view(&snapshot(), &params).unwrap();
        assert!(view.records.is_empty());
        assert_eq!(view.aggregates.sum("total_tickets"), 0.0);
        assert_eq!(view.aggregates.mean("occupancy_rate"), None);
        assert_eq!(view.categories.len(), 2);
    }

    #[test]
    fn test_invalid_params_fail_before_filtering() {
        let mut params = ViewParams::new();
        params.set_sort("popularity");
        assert!(matches!(
            derive_view(&snapshot(), &params),
            Err(ViewError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_snapshot_not_mutated() {
        let snapshot = snapshot();
        let before: Vec<CinemaData> = snapshot.records().to_vec();
        let mut params = ViewParams::new();
        params.set_sort("name").set_direction(SortDirection::Desc);
        let _ = derive_view(&snapshot, &params).unwrap();
        assert_eq!(snapshot.records(), before.as_slice());
    }
}
