use serde::{Deserialize, Serialize};

use crate::shared::view::{
    CellValue, DerivedView, FieldDef, Record, RecordSchema, SortDirection, SortPreset, ValueType,
};

/// One row of the top-performing movies table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRanking {
    pub id: String,
    pub rank: u32,
    /// 0 when the movie was not ranked before
    pub previous_rank: u32,
    pub title: String,
    pub genre: String,
    pub year: u32,
    pub rating: f64,
    pub tickets_sold: i64,
    pub market_share: f64,
}

/// Rank movement since the previous period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankMovement {
    /// Not ranked previously
    New,
    Up,
    Down,
    Same,
}

impl MovieRanking {
    pub fn movement(&self) -> RankMovement {
        if self.previous_rank == 0 {
            RankMovement::New
        } else if self.rank < self.previous_rank {
            RankMovement::Up
        } else if self.rank > self.previous_rank {
            RankMovement::Down
        } else {
            RankMovement::Same
        }
    }
}

static FIELDS: &[FieldDef] = &[
    FieldDef::new("id", "ID", ValueType::Text),
    FieldDef::new("rank", "Rank", ValueType::Integer).sortable(),
    FieldDef::new("previous_rank", "Previous Rank", ValueType::Integer).sortable(),
    FieldDef::new("title", "Movie", ValueType::Text)
        .searchable()
        .sortable(),
    FieldDef::new("genre", "Genre", ValueType::Category)
        .searchable()
        .sortable()
        .groupable(),
    FieldDef::new("year", "Year", ValueType::Integer)
        .sortable()
        .groupable(),
    FieldDef::new("rating", "Rating", ValueType::Numeric)
        .sortable()
        .aggregate(),
    FieldDef::new("tickets_sold", "Tickets", ValueType::Integer)
        .sortable()
        .aggregate(),
    FieldDef::new("market_share", "Share, %", ValueType::Numeric)
        .sortable()
        .aggregate(),
];

static PRESETS: &[SortPreset] = &[
    SortPreset {
        alias: "rank",
        label: "By Rank",
        field_id: "rank",
        direction: SortDirection::Asc,
    },
    SortPreset {
        alias: "tickets",
        label: "By Tickets",
        field_id: "tickets_sold",
        direction: SortDirection::Desc,
    },
    SortPreset {
        alias: "rating",
        label: "By Rating",
        field_id: "rating",
        direction: SortDirection::Desc,
    },
    SortPreset {
        alias: "market_share",
        label: "By Share",
        field_id: "market_share",
        direction: SortDirection::Desc,
    },
];

pub static TOP_MOVIES_SCHEMA: RecordSchema = RecordSchema {
    id: "d504_top_movies",
    name: "Top Performing Movies",
    fields: FIELDS,
    category_field: Some("genre"),
    sort_presets: PRESETS,
    default_sort: Some("rank"),
    change_pair: None,
};

impl Record for MovieRanking {
    fn schema() -> &'static RecordSchema {
        &TOP_MOVIES_SCHEMA
    }

    fn field(&self, field_id: &str) -> Option<CellValue> {
        match field_id {
            "id" => Some(self.id.as_str().into()),
            "rank" => Some(self.rank.into()),
            "previous_rank" => Some(self.previous_rank.into()),
            "title" => Some(self.title.as_str().into()),
            "genre" => Some(self.genre.as_str().into()),
            "year" => Some(self.year.into()),
            "rating" => Some(self.rating.into()),
            "tickets_sold" => Some(self.tickets_sold.into()),
            "market_share" => Some(self.market_share.into()),
            _ => None,
        }
    }
}

/// Movement of one listed movie, in record order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementEntry {
    pub id: String,
    pub movement: RankMovement,
    /// Places gained (positive) or lost (negative); 0 for new entries
    pub places: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopMoviesResponse {
    pub view: DerivedView<MovieRanking>,
    pub movements: Vec<MovementEntry>,
}
