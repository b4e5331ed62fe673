use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::view::{
    CellValue, DerivedView, FieldDef, Record, RecordSchema, SortDirection, SortPreset, ValueType,
};

/// Sentiment category of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

/// Social media post about a film
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentPost {
    pub id: u32,
    pub username: String,
    pub platform: String,
    pub post: String,
    pub sentiment: Sentiment,
    pub engagements: i64,
    pub impressions: i64,
    pub reaches: i64,
    pub date: NaiveDate,
}

static FIELDS: &[FieldDef] = &[
    FieldDef::new("id", "ID", ValueType::Integer).sortable(),
    FieldDef::new("username", "User", ValueType::Text)
        .searchable()
        .sortable(),
    FieldDef::new("platform", "Platform", ValueType::Category)
        .searchable()
        .sortable()
        .groupable(),
    FieldDef::new("post", "Post", ValueType::Text).searchable(),
    FieldDef::new("sentiment", "Sentiment", ValueType::Category)
        .sortable()
        .groupable(),
    FieldDef::new("engagements", "Engagements", ValueType::Integer)
        .sortable()
        .aggregate(),
    FieldDef::new("impressions", "Impressions", ValueType::Integer)
        .sortable()
        .aggregate(),
    FieldDef::new("reaches", "Reaches", ValueType::Integer)
        .sortable()
        .aggregate(),
    FieldDef::new("date", "Date", ValueType::Date).sortable(),
];

static PRESETS: &[SortPreset] = &[
    SortPreset {
        alias: "recent",
        label: "Most Recent",
        field_id: "date",
        direction: SortDirection::Desc,
    },
    SortPreset {
        alias: "engagement",
        label: "By Engagement",
        field_id: "engagements",
        direction: SortDirection::Desc,
    },
];

pub static SENTIMENT_POSTS_SCHEMA: RecordSchema = RecordSchema {
    id: "d505_sentiment_posts",
    name: "Sentiment Posts",
    fields: FIELDS,
    category_field: Some("sentiment"),
    sort_presets: PRESETS,
    default_sort: None,
    change_pair: None,
};

impl Record for SentimentPost {
    fn schema() -> &'static RecordSchema {
        &SENTIMENT_POSTS_SCHEMA
    }

    fn field(&self, field_id: &str) -> Option<CellValue> {
        match field_id {
            "id" => Some(self.id.into()),
            "username" => Some(self.username.as_str().into()),
            "platform" => Some(self.platform.as_str().into()),
            "post" => Some(self.post.as_str().into()),
            "sentiment" => Some(self.sentiment.as_str().into()),
            "engagements" => Some(self.engagements.into()),
            "impressions" => Some(self.impressions.into()),
            "reaches" => Some(self.reaches.into()),
            "date" => Some(CellValue::Text(self.date.format("%Y-%m-%d").to_string())),
            _ => None,
        }
    }
}

/// Post counts per sentiment over the whole dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentPostsResponse {
    pub view: DerivedView<SentimentPost>,
    pub sentiment_counts: SentimentCounts,
}
