use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::view::{
    CellValue, DerivedView, FieldDef, Record, RecordSchema, SortDirection, SortPreset, ValueType,
};

/// Ticket sales of one cinema, current day vs previous day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketSalesItem {
    pub id: String,
    pub city_name: String,
    pub cinema_name: String,
    pub total_tickets: i64,
    pub previous_total: i64,
    /// Change vs `previous_total`, one decimal
    pub percent_change: f64,
    pub last_updated: DateTime<Utc>,
}

static FIELDS: &[FieldDef] = &[
    FieldDef::new("id", "ID", ValueType::Text),
    FieldDef::new("city_name", "City", ValueType::Category)
        .searchable()
        .sortable()
        .groupable(),
    FieldDef::new("cinema_name", "Cinema", ValueType::Text)
        .searchable()
        .sortable(),
    FieldDef::new("total_tickets", "Tickets", ValueType::Integer)
        .sortable()
        .aggregate(),
    FieldDef::new("previous_total", "Previous Tickets", ValueType::Integer)
        .sortable()
        .aggregate(),
    FieldDef::new("percent_change", "Change, %", ValueType::Numeric).sortable(),
    FieldDef::new("last_updated", "Last Updated", ValueType::Date).sortable(),
];

static PRESETS: &[SortPreset] = &[
    SortPreset {
        alias: "tickets",
        label: "By Tickets",
        field_id: "total_tickets",
        direction: SortDirection::Desc,
    },
    SortPreset {
        alias: "change",
        label: "By Change",
        field_id: "percent_change",
        direction: SortDirection::Desc,
    },
    SortPreset {
        alias: "cinema",
        label: "By Cinema",
        field_id: "cinema_name",
        direction: SortDirection::Asc,
    },
];

pub static TICKET_SALES_SCHEMA: RecordSchema = RecordSchema {
    id: "d501_ticket_sales",
    name: "Near Real-Time Ticket Sales",
    fields: FIELDS,
    category_field: Some("city_name"),
    sort_presets: PRESETS,
    default_sort: None,
    change_pair: Some(("total_tickets", "previous_total")),
};

impl Record for TicketSalesItem {
    fn schema() -> &'static RecordSchema {
        &TICKET_SALES_SCHEMA
    }

    fn field(&self, field_id: &str) -> Option<CellValue> {
        match field_id {
            "id" => Some(self.id.as_str().into()),
            "city_name" => Some(self.city_name.as_str().into()),
            "cinema_name" => Some(self.cinema_name.as_str().into()),
            "total_tickets" => Some(self.total_tickets.into()),
            "previous_total" => Some(self.previous_total.into()),
            "percent_change" => Some(self.percent_change.into()),
            "last_updated" => Some(CellValue::Text(
                self.last_updated.to_rfc3339_opts(SecondsFormat::Millis, true),
            )),
            _ => None,
        }
    }
}

/// Card header figures over the filtered cinemas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketSalesSummary {
    pub total_tickets: i64,
    pub previous_total: i64,
    /// One decimal; `None` when no cinema matched
    pub overall_change: Option<f64>,
    /// Denominator for per-cinema progress bars, never below 1
    pub max_tickets: i64,
    /// Timestamp of the first listed cinema
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketSalesResponse {
    pub view: DerivedView<TicketSalesItem>,
    pub summary: TicketSalesSummary,
}
