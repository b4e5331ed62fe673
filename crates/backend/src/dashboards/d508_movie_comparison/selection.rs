use contracts::dashboards::d508_movie_comparison::{
    ComparisonMovie, DEFAULT_SELECTION, MAX_COMPARED_MOVIES,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("at most {max} movies can be compared")]
    TooMany { max: usize },

    #[error("movie {0} is selected twice")]
    Duplicate(u32),

    #[error("invalid movie id '{0}'")]
    InvalidId(String),

    #[error("unknown movie {0}")]
    UnknownMovie(u32),
}

/// Movies picked for comparison, in pick order, without repeats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieSelection {
    ids: Vec<u32>,
}

impl Default for MovieSelection {
    fn default() -> Self {
        Self {
            ids: DEFAULT_SELECTION.to_vec(),
        }
    }
}

impl MovieSelection {
    pub fn new(ids: impl IntoIterator<Item = u32>) -> Result<Self, SelectionError> {
        let mut selection = Self { ids: Vec::new() };
        for id in ids {
            selection.add(id)?;
        }
        Ok(selection)
    }

    /// Parse `"1, 3,6"`; blank segments are skipped, so `""` is an empty selection
    pub fn parse(raw: &str) -> Result<Self, SelectionError> {
        let ids = raw
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| SelectionError::InvalidId(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(ids)
    }

    pub fn add(&mut self, id: u32) -> Result<(), SelectionError> {
        if self.contains(id) {
            return Err(SelectionError::Duplicate(id));
        }
        if self.is_full() {
            return Err(SelectionError::TooMany {
                max: MAX_COMPARED_MOVIES,
            });
        }
        self.ids.push(id);
        Ok(())
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_COMPARED_MOVIES
    }

    /// First selected id missing from `movies` is an error
    pub fn ensure_known(&self, movies: &[ComparisonMovie]) -> Result<(), SelectionError> {
        match self
            .ids
            .iter()
            .find(|id| !movies.iter().any(|movie| movie.id == **id))
        {
            Some(id) => Err(SelectionError::UnknownMovie(*id)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d508_movie_comparison::mock_data;

    #[test]
    fn test_default_selection() {
        assert_eq!(MovieSelection::default().ids(), &[1, 2, 3]);
    }

    #[test]
    fn test_cap_at_six() {
        let mut selection = MovieSelection::new(1..=6).unwrap();
        assert!(selection.is_full());
        assert_eq!(
            selection.add(7),
            Err(SelectionError::TooMany {
                max: MAX_COMPARED_MOVIES
            })
        );
        assert_eq!(selection.ids().len(), 6);

        assert_eq!(
            MovieSelection::parse("1,2,3,4,5,6,7"),
            Err(SelectionError::TooMany { max: 6 })
        );
    }

    #[test]
    fn test_no_duplicates() {
        let mut selection = MovieSelection::new([4, 2]).unwrap();
        assert_eq!(selection.add(4), Err(SelectionError::Duplicate(4)));
        assert_eq!(selection.ids(), &[4, 2]);
    }

    #[test]
    fn test_parse() {
        assert_eq!(MovieSelection::parse(" 6, 1 ,").unwrap().ids(), &[6, 1]);
        assert!(MovieSelection::parse("").unwrap().ids().is_empty());
        assert_eq!(
            MovieSelection::parse("1,x"),
            Err(SelectionError::InvalidId("x".into()))
        );
    }

    #[test]
    fn test_unknown_movie() {
        let movies = mock_data::records();
        assert!(MovieSelection::new([1, 6]).unwrap().ensure_known(&movies).is_ok());
        assert_eq!(
            MovieSelection::new([2, 9]).unwrap().ensure_known(&movies),
            Err(SelectionError::UnknownMovie(9))
        );
    }
}
