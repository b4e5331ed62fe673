use contracts::shared::view::{
    AppliedSort, FieldDef, RecordSchema, SortDirection, ViewParams,
};

use super::error::ViewError;

/// Resolved sort rule
#[derive(Debug, Clone)]
pub struct SortRule {
    pub field: &'static FieldDef,
    pub direction: SortDirection,
}

impl SortRule {
    pub fn applied(&self) -> AppliedSort {
        AppliedSort {
            field_id: self.field.id.to_string(),
            direction: self.direction,
        }
    }
}

/// View parameters checked against a record schema.
///
/// Every field reference is resolved here, so filtering and sorting never
/// meet an unknown field at run time.
#[derive(Debug, Clone)]
pub struct ViewQuery {
    pub schema: &'static RecordSchema,
    /// Trimmed, lower-cased search text
    pub needle: Option<String>,
    /// (category field, required value)
    pub category: Option<(&'static str, String)>,
    pub sort: Option<SortRule>,
    pub group_by: Option<&'static FieldDef>,
}

impl ViewQuery {
    pub fn compile(schema: &'static RecordSchema, params: &ViewParams) -> Result<Self, ViewError> {
        let category = match params.active_category() {
            Some(value) => {
                let field = schema
                    .category_field
                    .ok_or(ViewError::NoCategoryField { view: schema.id })?;
                Some((field, value.to_string()))
            }
            None => None,
        };

        let sort_key = params.sort.as_deref().or(schema.default_sort);
        let sort = match sort_key {
            Some(key) => Some(resolve_sort(schema, key, params.direction)?),
            None => None,
        };

        let group_by = match params.group_by.as_deref() {
            Some(field_id) => {
                let field = lookup(schema, field_id)?;
                if !field.can_group {
                    return Err(ViewError::NotGroupable {
                        view: schema.id,
                        field: field_id.to_string(),
                    });
                }
                Some(field)
            }
            None => None,
        };

        Ok(Self {
            schema,
            needle: params.search_needle(),
            category,
            sort,
            group_by,
        })
    }
}

fn lookup(schema: &'static RecordSchema, field_id: &str) -> Result<&'static FieldDef, ViewError> {
    schema.field(field_id).ok_or_else(|| ViewError::UnknownField {
        view: schema.id,
        field: field_id.to_string(),
    })
}

/// Presets win over field ids; an explicit direction overrides the preset one
fn resolve_sort(
    schema: &'static RecordSchema,
    key: &str,
    direction: Option<SortDirection>,
) -> Result<SortRule, ViewError> {
    if let Some(preset) = schema.preset(key) {
        let field = lookup(schema, preset.field_id)?;
        return Ok(SortRule {
            field,
            direction: direction.unwrap_or(preset.direction),
        });
    }

    let field = lookup(schema, key)?;
    if !field.can_sort {
        return Err(ViewError::NotSortable {
            view: schema.id,
            field: key.to_string(),
        });
    }
    Ok(SortRule {
        field,
        direction: direction.unwrap_or(SortDirection::Asc),
    })
}
