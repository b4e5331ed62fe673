use contracts::shared::view::{GroupRow, Record};
use std::collections::HashMap;

/// Groups a filtered subset by one field and sums the aggregated columns per group
pub struct GroupBuilder {
    /// Grouping field ID
    grouping_column: String,
    /// Aggregated field IDs
    aggregated_columns: Vec<String>,
}

impl GroupBuilder {
    /// Create a new group builder
    pub fn new(grouping_column: impl Into<String>, aggregated_columns: Vec<String>) -> Self {
        Self {
            grouping_column: grouping_column.into(),
            aggregated_columns,
        }
    }

    /// Build group rows ordered by key
    pub fn build<R: Record>(&self, records: &[R]) -> Vec<GroupRow> {
        if records.is_empty() {
            return vec![];
        }

        let mut groups: HashMap<String, Vec<&R>> = HashMap::new();
        for record in records {
            let key = record
                .field(&self.grouping_column)
                .map(|v| v.to_key_string())
                .unwrap_or_default();
            groups.entry(key).or_default().push(record);
        }

        let mut group_keys: Vec<_> = groups.keys().cloned().collect();
        group_keys.sort();

        group_keys
            .into_iter()
            .filter_map(|key| {
                let members = groups.remove(&key)?;
                let subtotals = self
                    .aggregated_columns
                    .iter()
                    .map(|col| (col.clone(), self.calculate_subtotal(&members, col)))
                    .collect();
                Some(GroupRow {
                    field_id: self.grouping_column.clone(),
                    key,
                    count: members.len(),
                    subtotals,
                })
            })
            .collect()
    }

    /// Sum of the numeric values of a column; missing values are skipped
    fn calculate_subtotal<R: Record>(&self, records: &[&R], column: &str) -> f64 {
        records.iter().filter_map(|r| r.number_field(column)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d506_trending_topics::{TopicSource, Trend, TrendingTopic};

    fn topic(id: u32, volume: i64, source: TopicSource, trend: Trend) -> TrendingTopic {
        TrendingTopic {
            id,
            topic: format!("Topic {id}"),
            volume,
            source,
            trend,
            percentage: 5.0,
        }
    }

    #[test]
    fn test_simple_grouping() {
        let rows = vec![
            topic(1, 27500, TopicSource::Youtube, Trend::Up),
            topic(2, 25300, TopicSource::X, Trend::Up),
            topic(3, 15600, TopicSource::Youtube, Trend::Stable),
        ];

        let builder = GroupBuilder::new("source", vec!["volume".to_string()]);
        let groups = builder.build(&rows);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "x");
        assert_eq!(groups[0].count, 1);
        assert_eq!(groups[1].key, "youtube");
        assert_eq!(groups[1].count, 2);
        assert_eq!(groups[1].subtotals["volume"], 43100.0);
    }

    #[test]
    fn test_missing_group_field_lands_in_empty_key() {
        let rows = vec![topic(1, 10, TopicSource::News, Trend::Down)];
        let groups = GroupBuilder::new("region", vec![]).build(&rows);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, "");
    }

    #[test]
    fn test_empty_input() {
        let groups = GroupBuilder::new("source", vec![]).build::<TrendingTopic>(&[]);
        assert!(groups.is_empty());
    }
}
