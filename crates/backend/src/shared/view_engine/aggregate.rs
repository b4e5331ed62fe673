use std::collections::HashMap;

use contracts::shared::view::{
    AggregateSummary, ChangeSummary, FieldAggregate, Record, RecordSchema,
};

/// Decimals kept for percentages
pub const PERCENT_DECIMALS: u32 = 1;

/// Round half away from zero to `decimals` places.
///
/// Values that round to zero come back as `+0.0`, never `-0.0`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor + 0.0
}

/// `(current - previous) / previous * 100`, one decimal.
///
/// A zero `previous` yields 0 rather than infinity or NaN.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    round_to((current - previous) / previous * 100.0, PERCENT_DECIMALS)
}

/// Mean of `values`, `None` when empty
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// `numerator / denominator` rounded, `None` when the denominator is 0
pub fn ratio(numerator: f64, denominator: f64, decimals: u32) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(round_to(numerator / denominator, decimals))
    }
}

/// Sum of a numeric field; records without the field contribute nothing
pub fn sum_field<R: Record>(records: &[R], field_id: &str) -> f64 {
    records.iter().filter_map(|r| r.number_field(field_id)).sum()
}

/// count/sum/mean/min/max of one numeric field
pub fn field_aggregate<R: Record>(records: &[R], field_id: &str) -> FieldAggregate {
    let values: Vec<f64> = records
        .iter()
        .filter_map(|r| r.number_field(field_id))
        .collect();

    FieldAggregate {
        field_id: field_id.to_string(),
        count: values.len(),
        sum: values.iter().sum(),
        mean: mean(&values),
        min: values.iter().copied().reduce(f64::min),
        max: values.iter().copied().reduce(f64::max),
    }
}

/// Current vs previous totals over the subset
pub fn change_summary<R: Record>(records: &[R], current: &str, previous: &str) -> ChangeSummary {
    let current_total = sum_field(records, current);
    let previous_total = sum_field(records, previous);
    ChangeSummary {
        current_field: current.to_string(),
        previous_field: previous.to_string(),
        current_total,
        previous_total,
        percent_change: if records.is_empty() {
            None
        } else {
            Some(percent_change(current_total, previous_total))
        },
    }
}

/// Aggregates of every `can_aggregate` field plus the change pair
pub fn summarize<R: Record>(records: &[R], schema: &RecordSchema) -> AggregateSummary {
    let fields: HashMap<String, FieldAggregate> = schema
        .aggregate_fields()
        .map(|field| (field.id.to_string(), field_aggregate(records, field.id)))
        .collect();

    AggregateSummary {
        count: records.len(),
        fields,
        change: schema
            .change_pair
            .map(|(current, previous)| change_summary(records, current, previous)),
    }
}
