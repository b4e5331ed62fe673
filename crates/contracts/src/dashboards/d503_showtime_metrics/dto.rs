use serde::{Deserialize, Serialize};

use crate::shared::view::{
    CellValue, DerivedView, FieldDef, Record, RecordSchema, SortDirection, SortPreset, ValueType,
};

/// Daily showtime share of one film
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowtimeData {
    pub rank: u32,
    pub title: String,
    /// Percent of all showtimes
    pub market_share: f64,
    pub showtime_count: u32,
    /// Chart color (hex)
    pub color: String,
}

static FIELDS: &[FieldDef] = &[
    FieldDef::new("rank", "Rank", ValueType::Integer).sortable(),
    FieldDef::new("title", "Title", ValueType::Text)
        .searchable()
        .sortable(),
    FieldDef::new("market_share", "Market Share, %", ValueType::Numeric)
        .sortable()
        .aggregate(),
    FieldDef::new("showtime_count", "Showtimes", ValueType::Integer)
        .sortable()
        .aggregate(),
    FieldDef::new("color", "Color", ValueType::Text),
];

static PRESETS: &[SortPreset] = &[
    SortPreset {
        alias: "rank",
        label: "By Rank",
        field_id: "rank",
        direction: SortDirection::Asc,
    },
    SortPreset {
        alias: "market_share",
        label: "By Market Share",
        field_id: "market_share",
        direction: SortDirection::Desc,
    },
];

pub static SHOWTIME_METRICS_SCHEMA: RecordSchema = RecordSchema {
    id: "d503_showtime_metrics",
    name: "Daily Showtime Metrics",
    fields: FIELDS,
    category_field: None,
    sort_presets: PRESETS,
    default_sort: Some("rank"),
    change_pair: None,
};

impl Record for ShowtimeData {
    fn schema() -> &'static RecordSchema {
        &SHOWTIME_METRICS_SCHEMA
    }

    fn field(&self, field_id: &str) -> Option<CellValue> {
        match field_id {
            "rank" => Some(self.rank.into()),
            "title" => Some(self.title.as_str().into()),
            "market_share" => Some(self.market_share.into()),
            "showtime_count" => Some(self.showtime_count.into()),
            "color" => Some(self.color.as_str().into()),
            _ => None,
        }
    }
}

pub type ShowtimeMetricsResponse = DerivedView<ShowtimeData>;
