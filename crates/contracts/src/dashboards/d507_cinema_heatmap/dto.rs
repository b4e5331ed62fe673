use serde::{Deserialize, Serialize};

use crate::shared::view::{
    CellValue, DerivedView, FieldDef, Record, RecordSchema, SortDirection, SortPreset, ValueType,
};

/// Showtime density bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    Low,
    Medium,
    High,
}

impl Density {
    pub fn as_str(&self) -> &'static str {
        match self {
            Density::Low => "low",
            Density::Medium => "medium",
            Density::High => "high",
        }
    }
}

/// Cinema location with its daily showtimes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCinema {
    pub id: String,
    pub city: String,
    pub name: String,
    pub showtimes: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub density: Density,
}

static FIELDS: &[FieldDef] = &[
    FieldDef::new("id", "ID", ValueType::Text),
    FieldDef::new("city", "City", ValueType::Category)
        .searchable()
        .sortable()
        .groupable(),
    FieldDef::new("name", "Cinema", ValueType::Text)
        .searchable()
        .sortable(),
    FieldDef::new("showtimes", "Showtimes", ValueType::Integer)
        .sortable()
        .aggregate(),
    FieldDef::new("latitude", "Latitude", ValueType::Numeric),
    FieldDef::new("longitude", "Longitude", ValueType::Numeric),
    FieldDef::new("density", "Density", ValueType::Category)
        .sortable()
        .groupable(),
];

static PRESETS: &[SortPreset] = &[
    SortPreset {
        alias: "showtimes",
        label: "By Showtimes",
        field_id: "showtimes",
        direction: SortDirection::Desc,
    },
    SortPreset {
        alias: "name",
        label: "By Name",
        field_id: "name",
        direction: SortDirection::Asc,
    },
];

pub static CINEMA_HEATMAP_SCHEMA: RecordSchema = RecordSchema {
    id: "d507_cinema_heatmap",
    name: "Cinema Heatmap",
    fields: FIELDS,
    category_field: Some("city"),
    sort_presets: PRESETS,
    default_sort: None,
    change_pair: None,
};

impl Record for HeatmapCinema {
    fn schema() -> &'static RecordSchema {
        &CINEMA_HEATMAP_SCHEMA
    }

    fn field(&self, field_id: &str) -> Option<CellValue> {
        match field_id {
            "id" => Some(self.id.as_str().into()),
            "city" => Some(self.city.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "showtimes" => Some(self.showtimes.into()),
            "latitude" => Some(self.latitude.into()),
            "longitude" => Some(self.longitude.into()),
            "density" => Some(self.density.as_str().into()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CinemaHeatmapResponse {
    pub view: DerivedView<HeatmapCinema>,
    pub total_showtimes: i64,
}
