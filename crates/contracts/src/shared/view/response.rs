use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::params::SortDirection;
use super::schema::RecordSchemaOwned;

/// Filtered, sorted and aggregated result for one view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedView<R> {
    /// Dataset identifier
    pub view_id: String,
    /// Number of records in the source snapshot
    pub source_count: usize,
    /// Filtered and sorted records
    pub records: Vec<R>,
    /// Summaries over `records`
    pub aggregates: AggregateSummary,
    /// Present only when the view was grouped
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupRow>,
    /// Distinct category values over the whole snapshot, first-seen order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Sort that was actually applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_sort: Option<AppliedSort>,
    /// When the snapshot behind this view was published
    pub snapshot_at: DateTime<Utc>,
}

/// Resolved sort rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedSort {
    pub field_id: String,
    pub direction: SortDirection,
}

/// Scalar summaries computed over the filtered subset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// Number of records in the subset
    pub count: usize,
    /// Per-field aggregates, keyed by field id
    pub fields: HashMap<String, FieldAggregate>,
    /// Current vs previous comparison, when the dataset defines one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<ChangeSummary>,
}

impl AggregateSummary {
    pub fn sum(&self, field_id: &str) -> f64 {
        self.fields.get(field_id).map(|f| f.sum).unwrap_or(0.0)
    }

    pub fn mean(&self, field_id: &str) -> Option<f64> {
        self.fields.get(field_id).and_then(|f| f.mean)
    }
}

/// Aggregates for one numeric field.
///
/// `sum` is 0 on an empty subset; `mean`, `min` and `max` are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldAggregate {
    pub field_id: String,
    /// Records that carried a numeric value for this field
    pub count: usize,
    pub sum: f64,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Percentage change between two summed fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeSummary {
    pub current_field: String,
    pub previous_field: String,
    pub current_total: f64,
    pub previous_total: f64,
    /// One decimal; `None` when the subset is empty
    pub percent_change: Option<f64>,
}

/// One group of a grouped view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRow {
    /// Group field id
    pub field_id: String,
    /// Group value (empty for records without the field)
    pub key: String,
    /// Number of records in the group
    pub count: usize,
    /// Sums of the aggregate fields within the group
    pub subtotals: HashMap<String, f64>,
}

/// Load state of a dataset store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadState {
    /// Nothing published yet
    Loading,
    /// Latest load succeeded
    Ready,
    /// Latest load failed; the previous snapshot (if any) stays published
    Failed { message: String },
}

/// Entry of the dataset listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewInfo {
    pub schema: RecordSchemaOwned,
    pub load_state: LoadState,
    pub record_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_at: Option<DateTime<Utc>>,
}

/// Response listing available datasets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListViewsResponse {
    pub views: Vec<ViewInfo>,
}

/// Error body returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response after a reload request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadResponse {
    pub view_id: String,
    pub load_state: LoadState,
    pub record_count: usize,
}
