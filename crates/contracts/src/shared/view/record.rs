use serde::{Deserialize, Serialize};

use super::schema::{RecordSchema, ValueType};

/// Value of a single record field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Integer value
    Integer(i64),
    /// Null value
    Null,
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Whether this value may live in a field declared as `value_type`
    pub fn fits(&self, value_type: ValueType) -> bool {
        match (self, value_type) {
            (CellValue::Null, _) => true,
            (CellValue::Integer(_), ValueType::Integer | ValueType::Numeric) => true,
            (CellValue::Number(_), ValueType::Numeric) => true,
            (CellValue::Text(_), t) => t.is_textual(),
            _ => false,
        }
    }

    /// String form used as a grouping key
    pub fn to_key_string(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Null => String::new(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Integer(i)
    }
}

impl From<u32> for CellValue {
    fn from(i: u32) -> Self {
        CellValue::Integer(i as i64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

/// A flat, named-field data item with a closed static schema.
///
/// `field` returns `None` for fields the record does not carry; an
/// absent value never matches a filter and sorts after present values.
pub trait Record: Clone + Send + Sync + Serialize + 'static {
    fn schema() -> &'static RecordSchema;

    fn field(&self, field_id: &str) -> Option<CellValue>;

    /// Text value of a field, if present and textual
    fn text_field(&self, field_id: &str) -> Option<String> {
        match self.field(field_id)? {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value of a field, if present and numeric
    fn number_field(&self, field_id: &str) -> Option<f64> {
        self.field(field_id)?.as_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_declared_type() {
        assert!(CellValue::Integer(3).fits(ValueType::Integer));
        assert!(CellValue::Integer(3).fits(ValueType::Numeric));
        assert!(!CellValue::Number(3.5).fits(ValueType::Integer));
        assert!(CellValue::text("x").fits(ValueType::Category));
        assert!(!CellValue::text("x").fits(ValueType::Numeric));
        assert!(CellValue::Null.fits(ValueType::Date));
    }

    #[test]
    fn test_untagged_json() {
        let values = vec![
            CellValue::text("Chicago"),
            CellValue::Integer(405),
            CellValue::Number(4.7),
            CellValue::Null,
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"["Chicago",405,4.7,null]"#);
    }
}
