use thiserror::Error;

/// Errors raised while compiling a view query or validating a snapshot.
///
/// All of them are caller or schema mistakes; an empty record set or a
/// filter that matches nothing is never an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewError {
    #[error("unknown field '{field}' in view '{view}'")]
    UnknownField { view: &'static str, field: String },

    #[error("field '{field}' of view '{view}' is not sortable")]
    NotSortable { view: &'static str, field: String },

    #[error("field '{field}' of view '{view}' cannot be grouped")]
    NotGroupable { view: &'static str, field: String },

    #[error("view '{view}' has no category filter")]
    NoCategoryField { view: &'static str },

    #[error("record #{index} of view '{view}' is missing required field '{field}'")]
    MissingField {
        view: &'static str,
        index: usize,
        field: &'static str,
    },

    #[error("record #{index} of view '{view}': field '{field}' is not {expected}")]
    TypeMismatch {
        view: &'static str,
        index: usize,
        field: &'static str,
        expected: &'static str,
    },
}
