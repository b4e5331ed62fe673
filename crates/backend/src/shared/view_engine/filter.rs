use contracts::shared::view::Record;

use super::query::ViewQuery;

/// Keep the records matching every active predicate, in their original order
pub fn filter_records<R: Record>(records: &[R], query: &ViewQuery) -> Vec<R> {
    records
        .iter()
        .filter(|record| matches(*record, query))
        .cloned()
        .collect()
}

/// Search and category predicates combined with AND
pub fn matches<R: Record>(record: &R, query: &ViewQuery) -> bool {
    matches_search(record, query) && matches_category(record, query)
}

/// Case-insensitive substring match over the searchable fields.
/// A field the record does not carry never matches.
fn matches_search<R: Record>(record: &R, query: &ViewQuery) -> bool {
    let Some(needle) = query.needle.as_deref() else {
        return true;
    };

    query.schema.searchable_fields().any(|field| {
        record
            .text_field(field.id)
            .is_some_and(|value| value.to_lowercase().contains(needle))
    })
}

/// Exact, case-sensitive match on the category field
fn matches_category<R: Record>(record: &R, query: &ViewQuery) -> bool {
    match &query.category {
        Some((field_id, expected)) => record
            .text_field(field_id)
            .is_some_and(|value| value == *expected),
        None => true,
    }
}

/// Distinct text values of a field in first-seen order
pub fn distinct_values<R: Record>(records: &[R], field_id: &str) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for record in records {
        if let Some(value) = record.text_field(field_id) {
            if !values.contains(&value) {
                values.push(value);
            }
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d502_cinema_metrics::{CinemaData, TopMovie, CINEMA_METRICS_SCHEMA};
    use contracts::shared::view::ViewParams;

    fn cinema(id: &str, name: &str, city: &str, top_movie: Option<&str>) -> CinemaData {
        CinemaData {
            id: id.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            state: "NY".to_string(),
            total_showtimes: 40,
            total_tickets: 3000,
            occupancy_rate: 75,
            total_revenue: 48000.0,
            average_ticket_price: 16.0,
            top_movie: top_movie.map(|title| TopMovie {
                title: title.to_string(),
                showtimes: 10,
            }),
        }
    }

    fn cinemas() -> Vec<CinemaData> {
        vec![
            cinema("c1", "Empire Cinema", "New York", Some("Interstellar 2")),
            cinema("c2", "Windy City Cinema", "Chicago", None),
            cinema("c3", "Manhattan Screens", "New York", Some("Quantum Valley")),
        ]
    }

    fn query(params: &ViewParams) -> ViewQuery {
        ViewQuery::compile(&CINEMA_METRICS_SCHEMA, params).unwrap()
    }

    fn ids(records: &[CinemaData]) -> Vec<&str> {
        records.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_no_params_returns_everything_in_order() {
        let mut params = ViewParams::new();
        params.set_search("").set_category("all");
        let source = cinemas();
        let result = filter_records(&source, &query(&params));
        assert_eq!(result, source);
    }

    #[test]
    fn test_city_filter_keeps_order() {
        let mut params = ViewParams::new();
        params.set_category("New York");
        let result = filter_records(&cinemas(), &query(&params));
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|c| c.city == "New York"));
        assert_eq!(ids(&result), vec!["c1", "c3"]);
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let mut params = ViewParams::new();
        params.set_category("new york");
        assert!(filter_records(&cinemas(), &query(&params)).is_empty());
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let mut params = ViewParams::new();
        params.set_search("  CINEMA ");
        let result = filter_records(&cinemas(), &query(&params));
        assert_eq!(ids(&result), vec!["c1", "c2"]);

        // matches on the city as well as the name
        params.set_search("chicago");
        assert_eq!(ids(&filter_records(&cinemas(), &query(&params))), vec!["c2"]);
    }

    #[test]
    fn test_search_ignores_top_movie() {
        let mut params = ViewParams::new();
        params.set_search("quantum");
        assert!(filter_records(&cinemas(), &query(&params)).is_empty());
    }

    #[test]
    fn test_search_and_category_combine() {
        let mut params = ViewParams::new();
        params.set_search("screens").set_category("Chicago");
        assert!(filter_records(&cinemas(), &query(&params)).is_empty());

        params.set_category("New York");
        assert_eq!(ids(&filter_records(&cinemas(), &query(&params))), vec!["c3"]);
    }

    #[test]
    fn test_result_is_ordered_subset() {
        let source = cinemas();
        let mut params = ViewParams::new();
        params.set_search("e");
        let result = filter_records(&source, &query(&params));

        let mut cursor = 0;
        for record in &result {
            let pos = source[cursor..]
                .iter()
                .position(|c| c == record)
                .expect("filtered record must come from the source in order");
            cursor += pos + 1;
        }
    }

    #[test]
    fn test_empty_input() {
        let mut params = ViewParams::new();
        params.set_search("anything");
        assert!(filter_records::<CinemaData>(&[], &query(&params)).is_empty());
    }

    #[test]
    fn test_distinct_values_first_seen_order() {
        assert_eq!(
            distinct_values(&cinemas(), "city"),
            vec!["New York".to_string(), "Chicago".to_string()]
        );
        assert!(distinct_values(&cinemas(), "nope").is_empty());
    }
}
