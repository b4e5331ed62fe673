use serde::{Deserialize, Serialize};

use super::params::SortDirection;

/// Record schema for a dataset (static version for backend)
#[derive(Debug, Clone)]
pub struct RecordSchema {
    /// Unique identifier for the dataset (e.g., "d502_cinema_metrics")
    pub id: &'static str,
    /// Human-readable name (e.g., "Cinema Metrics")
    pub name: &'static str,
    /// Available fields in this dataset
    pub fields: &'static [FieldDef],
    /// Enum-like field used by the category selector
    pub category_field: Option<&'static str>,
    /// Named sort aliases ("by rank", "by share")
    pub sort_presets: &'static [SortPreset],
    /// Preset applied when the request carries no sort key
    pub default_sort: Option<&'static str>,
    /// (current, previous) pair used for the percentage change summary
    pub change_pair: Option<(&'static str, &'static str)>,
}

impl RecordSchema {
    /// Find a field definition by id
    pub fn field(&self, field_id: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    /// Find a sort preset by alias
    pub fn preset(&self, alias: &str) -> Option<&'static SortPreset> {
        self.sort_presets.iter().find(|p| p.alias == alias)
    }

    /// Fields covered by free-text search
    pub fn searchable_fields(&self) -> impl Iterator<Item = &'static FieldDef> {
        self.fields.iter().filter(|f| f.searchable)
    }

    /// Numeric fields that get sum/mean/min/max
    pub fn aggregate_fields(&self) -> impl Iterator<Item = &'static FieldDef> {
        self.fields.iter().filter(|f| f.can_aggregate)
    }
}

/// Definition of a single field in a record (static version)
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Unique field identifier (e.g., "total_tickets")
    pub id: &'static str,
    /// Human-readable field name (e.g., "Total Tickets")
    pub name: &'static str,
    /// Declared type of the value
    pub value_type: ValueType,
    /// Must be present on every record
    pub required: bool,
    /// Included in free-text search
    pub searchable: bool,
    /// Can be used as a sort key
    pub can_sort: bool,
    /// Can be used as a group key
    pub can_group: bool,
    /// Can be aggregated (sum, mean, min, max)
    pub can_aggregate: bool,
}

impl FieldDef {
    /// Plain required field with every capability turned off
    pub const fn new(id: &'static str, name: &'static str, value_type: ValueType) -> Self {
        Self {
            id,
            name,
            value_type,
            required: true,
            searchable: false,
            can_sort: false,
            can_group: false,
            can_aggregate: false,
        }
    }

    pub const fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub const fn sortable(mut self) -> Self {
        self.can_sort = true;
        self
    }

    pub const fn groupable(mut self) -> Self {
        self.can_group = true;
        self
    }

    pub const fn aggregate(mut self) -> Self {
        self.can_aggregate = true;
        self
    }

    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Value type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Integer type
    Integer,
    /// Numeric type (floating point)
    Numeric,
    /// Free text
    Text,
    /// Enum-like text with a small closed set of values
    Category,
    /// ISO date or datetime, compared as text
    Date,
}

impl ValueType {
    /// Numeric comparison and aggregation apply
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueType::Integer | ValueType::Numeric)
    }

    /// Text-like comparison applies
    pub fn is_textual(&self) -> bool {
        matches!(self, ValueType::Text | ValueType::Category | ValueType::Date)
    }

    /// Get canonical name for display and error messages
    pub fn canonical_name(&self) -> &'static str {
        match self {
            ValueType::Integer => "integer",
            ValueType::Numeric => "numeric",
            ValueType::Text => "text",
            ValueType::Category => "category",
            ValueType::Date => "date",
        }
    }
}

/// Named sort alias resolving to a field and direction
#[derive(Debug, Clone)]
pub struct SortPreset {
    /// Alias accepted in the `sort` parameter (e.g., "market_share")
    pub alias: &'static str,
    /// Human-readable label (e.g., "By Market Share")
    pub label: &'static str,
    /// Field to sort by
    pub field_id: &'static str,
    /// Default direction for this alias
    pub direction: SortDirection,
}

/// Owned version of RecordSchema for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSchemaOwned {
    pub id: String,
    pub name: String,
    pub fields: Vec<FieldDefOwned>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_field: Option<String>,
    pub sort_presets: Vec<SortPresetOwned>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<String>,
}

impl From<&RecordSchema> for RecordSchemaOwned {
    fn from(schema: &RecordSchema) -> Self {
        Self {
            id: schema.id.to_string(),
            name: schema.name.to_string(),
            fields: schema.fields.iter().map(|f| f.into()).collect(),
            category_field: schema.category_field.map(|s| s.to_string()),
            sort_presets: schema.sort_presets.iter().map(|p| p.into()).collect(),
            default_sort: schema.default_sort.map(|s| s.to_string()),
        }
    }
}

/// Owned version of FieldDef for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefOwned {
    pub id: String,
    pub name: String,
    pub value_type: ValueType,
    pub required: bool,
    pub searchable: bool,
    pub can_sort: bool,
    pub can_group: bool,
    pub can_aggregate: bool,
}

impl From<&FieldDef> for FieldDefOwned {
    fn from(field: &FieldDef) -> Self {
        Self {
            id: field.id.to_string(),
            name: field.name.to_string(),
            value_type: field.value_type,
            required: field.required,
            searchable: field.searchable,
            can_sort: field.can_sort,
            can_group: field.can_group,
            can_aggregate: field.can_aggregate,
        }
    }
}

/// Owned version of SortPreset for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortPresetOwned {
    pub alias: String,
    pub label: String,
    pub field_id: String,
    pub direction: SortDirection,
}

impl From<&SortPreset> for SortPresetOwned {
    fn from(preset: &SortPreset) -> Self {
        Self {
            alias: preset.alias.to_string(),
            label: preset.label.to_string(),
            field_id: preset.field_id.to_string(),
            direction: preset.direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIELDS: &[FieldDef] = &[
        FieldDef::new("name", "Name", ValueType::Text).searchable().sortable(),
        FieldDef::new("tickets", "Tickets", ValueType::Integer)
            .sortable()
            .aggregate(),
        FieldDef::new("note", "Note", ValueType::Text).optional(),
    ];

    static SCHEMA: RecordSchema = RecordSchema {
        id: "test",
        name: "Test",
        fields: FIELDS,
        category_field: None,
        sort_presets: &[SortPreset {
            alias: "top",
            label: "Top",
            field_id: "tickets",
            direction: SortDirection::Desc,
        }],
        default_sort: Some("top"),
        change_pair: None,
    };

    #[test]
    fn test_builder_flags() {
        let tickets = SCHEMA.field("tickets").unwrap();
        assert!(tickets.required);
        assert!(tickets.can_sort && tickets.can_aggregate);
        assert!(!tickets.searchable);
        assert!(!SCHEMA.field("note").unwrap().required);
        assert!(SCHEMA.field("missing").is_none());
    }

    #[test]
    fn test_owned_schema_serializes() {
        let owned = RecordSchemaOwned::from(&SCHEMA);
        let json = serde_json::to_value(&owned).unwrap();
        assert_eq!(json["fields"][1]["value_type"], "integer");
        assert_eq!(json["sort_presets"][0]["direction"], "desc");
        assert!(json.get("category_field").is_none());
    }
}
