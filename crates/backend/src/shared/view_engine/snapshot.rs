use chrono::{DateTime, Utc};
use contracts::shared::view::{CellValue, Record};

use super::error::ViewError;

/// Immutable, validated record set.
///
/// Views only ever borrow it; a change (reload or refresh tick) produces a
/// new snapshot.
#[derive(Debug, Clone)]
pub struct Snapshot<R> {
    records: Vec<R>,
    published_at: DateTime<Utc>,
    /// Load request that produced the records
    generation: u64,
    /// Bumped on every publish, including refresh ticks
    revision: u64,
}

impl<R: Record> Snapshot<R> {
    /// Validate `records` against the record schema
    pub fn new(records: Vec<R>, generation: u64) -> Result<Self, ViewError> {
        validate_records(&records)?;
        Ok(Self {
            records,
            published_at: Utc::now(),
            generation,
            revision: 0,
        })
    }

    /// Placeholder published before the first load completes
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            published_at: Utc::now(),
            generation: 0,
            revision: 0,
        }
    }

    /// Successor snapshot with new records from the same load
    pub fn next(&self, records: Vec<R>) -> Result<Self, ViewError> {
        validate_records(&records)?;
        Ok(Self {
            records,
            published_at: Utc::now(),
            generation: self.generation,
            revision: self.revision + 1,
        })
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Every required field present, every present value of the declared type
pub fn validate_records<R: Record>(records: &[R]) -> Result<(), ViewError> {
    let schema = R::schema();
    for (index, record) in records.iter().enumerate() {
        for field in schema.fields {
            match record.field(field.id) {
                None | Some(CellValue::Null) => {
                    if field.required {
                        return Err(ViewError::MissingField {
                            view: schema.id,
                            index,
                            field: field.id,
                        });
                    }
                }
                Some(value) => {
                    if !value.fits(field.value_type) {
                        return Err(ViewError::TypeMismatch {
                            view: schema.id,
                            index,
                            field: field.id,
                            expected: field.value_type.canonical_name(),
                        });
                    }
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::view::{FieldDef, RecordSchema, ValueType};
    use serde::Serialize;

    static FIELDS: &[FieldDef] = &[
        FieldDef::new("title", "Title", ValueType::Text),
        FieldDef::new("rating", "Rating", ValueType::Numeric),
    ];

    static SCHEMA: RecordSchema = RecordSchema {
        id: "loose",
        name: "Loose",
        fields: FIELDS,
        category_field: None,
        sort_presets: &[],
        default_sort: None,
        change_pair: None,
    };

    /// Record whose fields are whatever the test puts in
    #[derive(Debug, Clone, Serialize)]
    struct Loose {
        title: Option<String>,
        rating: Option<CellValue>,
    }

    impl Record for Loose {
        fn schema() -> &'static RecordSchema {
            &SCHEMA
        }

        fn field(&self, field_id: &str) -> Option<CellValue> {
            match field_id {
                "title" => self.title.clone().map(CellValue::Text),
                "rating" => self.rating.clone(),
                _ => None,
            }
        }
    }

    #[test]
    fn test_valid_records() {
        let records = vec![Loose {
            title: Some("Dune".into()),
            rating: Some(CellValue::Integer(8)),
        }];
        let snapshot = Snapshot::new(records, 3).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.generation(), 3);
        assert_eq!(snapshot.revision(), 0);
    }

    #[test]
    fn test_missing_required_field() {
        let records = vec![
            Loose {
                title: Some("Dune".into()),
                rating: Some(CellValue::Number(8.1)),
            },
            Loose {
                title: None,
                rating: Some(CellValue::Number(7.0)),
            },
        ];
        assert_eq!(
            Snapshot::new(records, 1).unwrap_err(),
            ViewError::MissingField {
                view: "loose",
                index: 1,
                field: "title"
            }
        );
    }

    #[test]
    fn test_type_mismatch() {
        let records = vec![Loose {
            title: Some("Dune".into()),
            rating: Some(CellValue::text("great")),
        }];
        assert!(matches!(
            Snapshot::new(records, 1),
            Err(ViewError::TypeMismatch {
                field: "rating",
                expected: "numeric",
                ..
            })
        ));
    }

    #[test]
    fn test_next_bumps_revision_keeps_generation() {
        let first = Snapshot::new(
            vec![Loose {
                title: Some("Dune".into()),
                rating: Some(CellValue::Number(8.1)),
            }],
            2,
        )
        .unwrap();
        let second = first.next(first.records().to_vec()).unwrap();
        assert_eq!(second.generation(), 2);
        assert_eq!(second.revision(), 1);
        assert!(Snapshot::<Loose>::empty().is_empty());
    }
}
