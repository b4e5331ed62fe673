use serde::{Deserialize, Serialize};

use crate::shared::view::{
    CellValue, DerivedView, FieldDef, Record, RecordSchema, SortDirection, SortPreset, ValueType,
};

/// Where a topic is trending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicSource {
    Instagram,
    X,
    Tiktok,
    Youtube,
    Facebook,
    Google,
    News,
}

impl TopicSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicSource::Instagram => "instagram",
            TopicSource::X => "x",
            TopicSource::Tiktok => "tiktok",
            TopicSource::Youtube => "youtube",
            TopicSource::Facebook => "facebook",
            TopicSource::Google => "google",
            TopicSource::News => "news",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }
}

/// Trending topic with mention volume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingTopic {
    pub id: u32,
    pub topic: String,
    /// Mentions
    pub volume: i64,
    pub source: TopicSource,
    pub trend: Trend,
    /// Growth, percent
    pub percentage: f64,
}

static FIELDS: &[FieldDef] = &[
    FieldDef::new("id", "Position", ValueType::Integer).sortable(),
    FieldDef::new("topic", "Topic", ValueType::Text)
        .searchable()
        .sortable(),
    FieldDef::new("volume", "Mentions", ValueType::Integer)
        .sortable()
        .aggregate(),
    FieldDef::new("source", "Source", ValueType::Category)
        .sortable()
        .groupable(),
    FieldDef::new("trend", "Trend", ValueType::Category)
        .sortable()
        .groupable(),
    FieldDef::new("percentage", "Growth, %", ValueType::Numeric)
        .sortable()
        .aggregate(),
];

static PRESETS: &[SortPreset] = &[
    SortPreset {
        alias: "position",
        label: "By Position",
        field_id: "id",
        direction: SortDirection::Asc,
    },
    SortPreset {
        alias: "volume",
        label: "By Mentions",
        field_id: "volume",
        direction: SortDirection::Desc,
    },
    SortPreset {
        alias: "growth",
        label: "By Growth",
        field_id: "percentage",
        direction: SortDirection::Desc,
    },
];

pub static TRENDING_TOPICS_SCHEMA: RecordSchema = RecordSchema {
    id: "d506_trending_topics",
    name: "Current Trending Topics",
    fields: FIELDS,
    category_field: Some("source"),
    sort_presets: PRESETS,
    default_sort: Some("position"),
    change_pair: None,
};

impl Record for TrendingTopic {
    fn schema() -> &'static RecordSchema {
        &TRENDING_TOPICS_SCHEMA
    }

    fn field(&self, field_id: &str) -> Option<CellValue> {
        match field_id {
            "id" => Some(self.id.into()),
            "topic" => Some(self.topic.as_str().into()),
            "volume" => Some(self.volume.into()),
            "source" => Some(self.source.as_str().into()),
            "trend" => Some(self.trend.as_str().into()),
            "percentage" => Some(self.percentage.into()),
            _ => None,
        }
    }
}

pub type TrendingTopicsResponse = DerivedView<TrendingTopic>;
