use std::cmp::Ordering;

use contracts::shared::view::{Record, SortDirection};

use super::query::SortRule;

/// Return a new sequence ordered by `rule`.
///
/// Numeric fields compare numerically, everything else lexicographically.
/// The sort is stable in both directions; records without the key go last.
pub fn sort_records<R: Record>(records: &[R], rule: &SortRule) -> Vec<R> {
    let field_id = rule.field.id;
    if rule.field.value_type.is_numeric() {
        sort_keyed(
            records,
            |r| r.number_field(field_id),
            |a: &f64, b: &f64| a.total_cmp(b),
            rule.direction,
        )
    } else {
        sort_keyed(
            records,
            |r| r.text_field(field_id),
            |a: &String, b: &String| a.cmp(b),
            rule.direction,
        )
    }
}

fn sort_keyed<R, K, F, C>(records: &[R], key: F, cmp: C, direction: SortDirection) -> Vec<R>
where
    R: Clone,
    F: Fn(&R) -> Option<K>,
    C: Fn(&K, &K) -> Ordering,
{
    let mut keyed: Vec<(Option<K>, &R)> = records.iter().map(|r| (key(r), r)).collect();

    // slice::sort_by is stable
    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Asc => cmp(a, b),
            SortDirection::Desc => cmp(b, a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    keyed.into_iter().map(|(_, r)| r.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::view_engine::query::ViewQuery;
    use contracts::dashboards::d502_cinema_metrics::{CinemaData, TopMovie, CINEMA_METRICS_SCHEMA};
    use contracts::dashboards::d503_showtime_metrics::{ShowtimeData, SHOWTIME_METRICS_SCHEMA};
    use contracts::shared::view::ViewParams;

    fn showtimes() -> Vec<ShowtimeData> {
        [
            (1, "Interstellar 2", 28.4, 186),
            (2, "Quantum Valley", 19.7, 142),
            (3, "Blue Symphony", 15.2, 98),
            (4, "Eternal Dawn", 12.1, 85),
            (5, "Neon Knights", 9.6, 67),
            (6, "Other Films", 15.0, 104),
        ]
        .into_iter()
        .map(|(rank, title, market_share, showtime_count)| ShowtimeData {
            rank,
            title: title.to_string(),
            market_share,
            showtime_count,
            color: "#4361ee".to_string(),
        })
        .collect()
    }

    fn rule(params: &ViewParams) -> SortRule {
        ViewQuery::compile(&SHOWTIME_METRICS_SCHEMA, params)
            .unwrap()
            .sort
            .unwrap()
    }

    fn ranks(rows: &[ShowtimeData]) -> Vec<u32> {
        rows.iter().map(|r| r.rank).collect()
    }

    #[test]
    fn test_market_share_then_rank_restores_order() {
        let source = showtimes();
        let mut params = ViewParams::new();

        params.set_sort("market_share");
        let by_share = sort_records(&source, &rule(&params));
        assert_eq!(ranks(&by_share), vec![1, 2, 3, 6, 4, 5]);

        params.set_sort("rank");
        let by_rank = sort_records(&by_share, &rule(&params));
        assert_eq!(ranks(&by_rank), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(by_rank, source);
    }

    #[test]
    fn test_source_untouched() {
        let source = showtimes();
        let snapshot = source.clone();
        let mut params = ViewParams::new();
        params.set_sort("market_share");
        let _ = sort_records(&source, &rule(&params));
        assert_eq!(source, snapshot);
    }

    #[test]
    fn test_idempotent() {
        let mut params = ViewParams::new();
        params.set_sort("title");
        let once = sort_records(&showtimes(), &rule(&params));
        let twice = sort_records(&once, &rule(&params));
        assert_eq!(once, twice);
        assert_eq!(once[0].title, "Blue Symphony");
    }

    #[test]
    fn test_stable_for_duplicate_keys_in_both_directions() {
        let mut rows = showtimes();
        for row in rows.iter_mut() {
            row.showtime_count = if row.rank % 2 == 0 { 100 } else { 50 };
        }

        let mut params = ViewParams::new();
        params.set_sort("showtime_count");
        let asc = sort_records(&rows, &rule(&params));
        assert_eq!(ranks(&asc), vec![1, 3, 5, 2, 4, 6]);

        params.set_direction(SortDirection::Desc);
        let desc = sort_records(&rows, &rule(&params));
        assert_eq!(ranks(&desc), vec![2, 4, 6, 1, 3, 5]);
    }

    #[test]
    fn test_missing_keys_sort_last() {
        let with_movie = |id: &str, title: Option<&str>| CinemaData {
            id: id.to_string(),
            name: id.to_string(),
            city: "Boston".to_string(),
            state: "MA".to_string(),
            total_showtimes: 1,
            total_tickets: 1,
            occupancy_rate: 1,
            total_revenue: 1.0,
            average_ticket_price: 1.0,
            top_movie: title.map(|t| TopMovie {
                title: t.to_string(),
                showtimes: 1,
            }),
        };
        let rows = vec![
            with_movie("a", None),
            with_movie("b", Some("Eternal Dawn")),
            with_movie("c", None),
            with_movie("d", Some("Blue Symphony")),
        ];

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let mut params = ViewParams::new();
            params.set_sort("top_movie").set_direction(direction);
            let rule = ViewQuery::compile(&CINEMA_METRICS_SCHEMA, &params)
                .unwrap()
                .sort
                .unwrap();
            let sorted: Vec<String> = sort_records(&rows, &rule)
                .into_iter()
                .map(|c| c.id)
                .collect();
            let expected = match direction {
                SortDirection::Asc => vec!["d", "b", "a", "c"],
                SortDirection::Desc => vec!["b", "d", "a", "c"],
            };
            assert_eq!(sorted, expected);
        }
    }

    #[test]
    fn test_empty_input() {
        let params = ViewParams::new();
        assert!(sort_records::<ShowtimeData>(&[], &rule(&params)).is_empty());
    }
}
