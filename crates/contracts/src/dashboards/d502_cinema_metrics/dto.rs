use serde::{Deserialize, Serialize};

use crate::shared::view::{
    CellValue, DerivedView, FieldDef, Record, RecordSchema, SortDirection, SortPreset, ValueType,
};

/// Best-selling movie of a cinema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMovie {
    pub title: String,
    pub showtimes: u32,
}

/// Performance figures of one cinema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CinemaData {
    pub id: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub total_showtimes: i64,
    pub total_tickets: i64,
    /// Percent of seats sold
    pub occupancy_rate: i64,
    pub total_revenue: f64,
    pub average_ticket_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_movie: Option<TopMovie>,
}

static FIELDS: &[FieldDef] = &[
    FieldDef::new("id", "ID", ValueType::Text),
    FieldDef::new("name", "Cinema", ValueType::Text)
        .searchable()
        .sortable(),
    FieldDef::new("city", "City", ValueType::Category)
        .searchable()
        .sortable()
        .groupable(),
    FieldDef::new("state", "State", ValueType::Category)
        .sortable()
        .groupable(),
    FieldDef::new("total_showtimes", "Showtimes", ValueType::Integer)
        .sortable()
        .aggregate(),
    FieldDef::new("total_tickets", "Tickets", ValueType::Integer)
        .sortable()
        .aggregate(),
    FieldDef::new("occupancy_rate", "Occupancy, %", ValueType::Integer)
        .sortable()
        .aggregate(),
    FieldDef::new("total_revenue", "Revenue", ValueType::Numeric)
        .sortable()
        .aggregate(),
    FieldDef::new("average_ticket_price", "Avg. Ticket Price", ValueType::Numeric)
        .sortable()
        .aggregate(),
    FieldDef::new("top_movie", "Top Movie", ValueType::Text)
        .sortable()
        .optional(),
];

static PRESETS: &[SortPreset] = &[
    SortPreset {
        alias: "revenue",
        label: "By Revenue",
        field_id: "total_revenue",
        direction: SortDirection::Desc,
    },
    SortPreset {
        alias: "tickets",
        label: "By Tickets",
        field_id: "total_tickets",
        direction: SortDirection::Desc,
    },
    SortPreset {
        alias: "occupancy",
        label: "By Occupancy",
        field_id: "occupancy_rate",
        direction: SortDirection::Desc,
    },
    SortPreset {
        alias: "name",
        label: "By Name",
        field_id: "name",
        direction: SortDirection::Asc,
    },
];

pub static CINEMA_METRICS_SCHEMA: RecordSchema = RecordSchema {
    id: "d502_cinema_metrics",
    name: "Cinema Metrics",
    fields: FIELDS,
    category_field: Some("city"),
    sort_presets: PRESETS,
    default_sort: None,
    change_pair: None,
};

impl Record for CinemaData {
    fn schema() -> &'static RecordSchema {
        &CINEMA_METRICS_SCHEMA
    }

    fn field(&self, field_id: &str) -> Option<CellValue> {
        match field_id {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "city" => Some(self.city.as_str().into()),
            "state" => Some(self.state.as_str().into()),
            "total_showtimes" => Some(self.total_showtimes.into()),
            "total_tickets" => Some(self.total_tickets.into()),
            "occupancy_rate" => Some(self.occupancy_rate.into()),
            "total_revenue" => Some(self.total_revenue.into()),
            "average_ticket_price" => Some(self.average_ticket_price.into()),
            "top_movie" => self
                .top_movie
                .as_ref()
                .map(|m| CellValue::text(m.title.as_str())),
            _ => None,
        }
    }
}

/// Page header figures over the filtered cinemas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CinemaMetricsSummary {
    pub cinema_count: usize,
    pub total_showtimes: i64,
    pub total_tickets: i64,
    pub total_revenue: f64,
    /// Rounded to a whole percent
    pub average_occupancy: Option<f64>,
    /// Revenue per ticket, two decimals
    pub average_ticket_price: Option<f64>,
    /// Revenue per showtime, two decimals
    pub revenue_per_showtime: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CinemaMetricsResponse {
    pub view: DerivedView<CinemaData>,
    pub summary: CinemaMetricsSummary,
}
