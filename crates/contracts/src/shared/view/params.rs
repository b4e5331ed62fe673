use serde::{Deserialize, Serialize};

/// Sentinel category value meaning "no category filter"
pub const CATEGORY_ALL: &str = "all";

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// User-controlled inputs of a single view.
///
/// Deserializes straight from the query string
/// (`?search=empire&category=New%20York&sort=rank&direction=desc&group_by=city`).
/// Mutation goes through the setters so the render side never pokes at
/// half-updated state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewParams {
    /// Free-text search; empty or whitespace means no search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Category value; `"all"` or absent means no category filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Sort preset alias or sortable field id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Overrides the preset direction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
    /// Groupable field id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<String>,
}

impl ViewParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, search: impl Into<String>) -> &mut Self {
        self.search = Some(search.into());
        self
    }

    pub fn set_category(&mut self, category: impl Into<String>) -> &mut Self {
        self.category = Some(category.into());
        self
    }

    pub fn clear_category(&mut self) -> &mut Self {
        self.category = None;
        self
    }

    /// Set sort key; resets any direction override so the preset default applies
    pub fn set_sort(&mut self, sort: impl Into<String>) -> &mut Self {
        self.sort = Some(sort.into());
        self.direction = None;
        self
    }

    pub fn set_direction(&mut self, direction: SortDirection) -> &mut Self {
        self.direction = Some(direction);
        self
    }

    /// Flip the current direction; with no explicit direction yet, flips `current`
    pub fn toggle_direction(&mut self, current: SortDirection) -> &mut Self {
        let base = self.direction.unwrap_or(current);
        self.direction = Some(base.reversed());
        self
    }

    pub fn set_group_by(&mut self, field_id: impl Into<String>) -> &mut Self {
        self.group_by = Some(field_id.into());
        self
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Normalized search needle: trimmed, lower-cased, `None` when empty
    pub fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    /// Active category value, `None` for the "all" sentinel
    pub fn active_category(&self) -> Option<&str> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty() && *c != CATEGORY_ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_needle_normalized() {
        let mut params = ViewParams::new();
        assert_eq!(params.search_needle(), None);
        params.set_search("   ");
        assert_eq!(params.search_needle(), None);
        params.set_search("  Empire ");
        assert_eq!(params.search_needle().as_deref(), Some("empire"));
    }

    #[test]
    fn test_all_sentinel_is_no_category() {
        let mut params = ViewParams::new();
        params.set_category(CATEGORY_ALL);
        assert_eq!(params.active_category(), None);
        params.set_category("Chicago");
        assert_eq!(params.active_category(), Some("Chicago"));
        params.clear_category();
        assert_eq!(params.active_category(), None);
    }

    #[test]
    fn test_set_sort_drops_direction_override() {
        let mut params = ViewParams::new();
        params.set_sort("rank").set_direction(SortDirection::Desc);
        assert_eq!(params.direction, Some(SortDirection::Desc));
        params.set_sort("market_share");
        assert_eq!(params.direction, None);
    }

    #[test]
    fn test_toggle_direction() {
        let mut params = ViewParams::new();
        params.toggle_direction(SortDirection::Asc);
        assert_eq!(params.direction, Some(SortDirection::Desc));
        params.toggle_direction(SortDirection::Asc);
        assert_eq!(params.direction, Some(SortDirection::Asc));
    }

    #[test]
    fn test_deserialize_from_json() {
        let params: ViewParams =
            serde_json::from_str(r#"{"category":"New York","direction":"desc"}"#).unwrap();
        assert_eq!(params.category.as_deref(), Some("New York"));
        assert_eq!(params.direction, Some(SortDirection::Desc));
        assert!(params.search.is_none());

        let mut reset = params.clone();
        reset.reset();
        assert_eq!(reset, ViewParams::default());
    }
}
