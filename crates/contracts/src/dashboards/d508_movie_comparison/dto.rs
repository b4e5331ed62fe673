use serde::{Deserialize, Serialize};

use crate::shared::view::{
    CellValue, FieldDef, Record, RecordSchema, SortDirection, SortPreset, ValueType,
};

/// Most movies one comparison can hold
pub const MAX_COMPARED_MOVIES: usize = 6;

/// Selection used when the request names none
pub const DEFAULT_SELECTION: [u32; 3] = [1, 2, 3];

/// Audience share of one age bracket, in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeShare {
    pub bracket: String,
    pub percent: u32,
}

/// A film available for side-by-side comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMovie {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub poster_url: String,
    pub genre: String,
    pub year: u32,
    /// Running time in minutes
    pub duration: u32,
    pub rating: f64,
    pub admission: i64,
    pub gross_income: f64,
    pub showtimes: i64,
    /// Brackets in display order
    pub demographics: Vec<AgeShare>,
}

/// Figure shown on the comparison chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMetric {
    #[default]
    Admission,
    GrossIncome,
    Showtimes,
    Demographics,
}

impl ComparisonMetric {
    /// Record field behind a single-value metric; `None` for demographics
    pub fn field_id(self) -> Option<&'static str> {
        match self {
            ComparisonMetric::Admission => Some("admission"),
            ComparisonMetric::GrossIncome => Some("gross_income"),
            ComparisonMetric::Showtimes => Some("showtimes"),
            ComparisonMetric::Demographics => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComparisonMetric::Admission => "Admission",
            ComparisonMetric::GrossIncome => "Gross Income",
            ComparisonMetric::Showtimes => "Showtimes",
            ComparisonMetric::Demographics => "Demographics",
        }
    }
}

/// Query of the comparison page
/// (`?metric=gross_income&movies=1,3,6`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric: Option<ComparisonMetric>,
    /// Comma-separated movie ids; absent means the default selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movies: Option<String>,
}

static FIELDS: &[FieldDef] = &[
    FieldDef::new("id", "ID", ValueType::Integer),
    FieldDef::new("title", "Film", ValueType::Text)
        .searchable()
        .sortable(),
    FieldDef::new("genre", "Genre", ValueType::Category)
        .searchable()
        .sortable()
        .groupable(),
    FieldDef::new("year", "Year", ValueType::Integer).sortable(),
    FieldDef::new("duration", "Duration, min", ValueType::Integer).sortable(),
    FieldDef::new("rating", "Rating", ValueType::Numeric)
        .sortable()
        .aggregate(),
    FieldDef::new("admission", "Admission", ValueType::Integer)
        .sortable()
        .aggregate(),
    FieldDef::new("gross_income", "Gross Income", ValueType::Numeric)
        .sortable()
        .aggregate(),
    FieldDef::new("showtimes", "Showtimes", ValueType::Integer)
        .sortable()
        .aggregate(),
];

static PRESETS: &[SortPreset] = &[SortPreset {
    alias: "admission",
    label: "By Admission",
    field_id: "admission",
    direction: SortDirection::Desc,
}];

pub static MOVIE_COMPARISON_SCHEMA: RecordSchema = RecordSchema {
    id: "d508_movie_comparison",
    name: "Film Comparison",
    fields: FIELDS,
    category_field: Some("genre"),
    sort_presets: PRESETS,
    default_sort: None,
    change_pair: None,
};

impl Record for ComparisonMovie {
    fn schema() -> &'static RecordSchema {
        &MOVIE_COMPARISON_SCHEMA
    }

    fn field(&self, field_id: &str) -> Option<CellValue> {
        match field_id {
            "id" => Some(self.id.into()),
            "title" => Some(self.title.as_str().into()),
            "genre" => Some(self.genre.as_str().into()),
            "year" => Some(self.year.into()),
            "duration" => Some(self.duration.into()),
            "rating" => Some(self.rating.into()),
            "admission" => Some(self.admission.into()),
            "gross_income" => Some(self.gross_income.into()),
            "showtimes" => Some(self.showtimes.into()),
            _ => None,
        }
    }
}

/// One bar of a single-value metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricBar {
    pub movie_id: u32,
    pub title: String,
    pub value: f64,
}

/// Audience share of one movie within an age bracket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieShare {
    pub movie_id: u32,
    pub title: String,
    pub percent: u32,
}

/// One age bracket with the share of every movie in the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicsRow {
    pub bracket: String,
    /// In dataset order
    pub shares: Vec<MovieShare>,
}

/// Chart data of the active metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum ComparisonData {
    Bars(Vec<MetricBar>),
    Demographics(Vec<DemographicsRow>),
}

/// Id and title of a movie that can still be added
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableMovie {
    pub id: u32,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieComparisonResponse {
    pub metric: ComparisonMetric,
    pub metric_label: String,
    /// Selected movies in selection order
    pub selected: Vec<ComparisonMovie>,
    /// Unselected movies; empty once the selection is full
    pub available: Vec<AvailableMovie>,
    pub max_selected: usize,
    pub data: ComparisonData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_query_names() {
        let params: ComparisonParams =
            serde_json::from_str(r#"{"metric":"gross_income","movies":"1,6"}"#).unwrap();
        assert_eq!(params.metric, Some(ComparisonMetric::GrossIncome));
        assert_eq!(params.movies.as_deref(), Some("1,6"));
        assert_eq!(ComparisonMetric::default(), ComparisonMetric::Admission);
        assert_eq!(ComparisonMetric::Demographics.field_id(), None);
    }

    #[test]
    fn test_data_is_tagged() {
        let data = ComparisonData::Bars(vec![MetricBar {
            movie_id: 1,
            title: "Interstellar".into(),
            value: 245.0,
        }]);
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["kind"], "bars");
        assert_eq!(json["rows"][0]["value"], 245.0);
    }
}
