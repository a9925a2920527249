use crate::{
    error::ApiError,
    popularity::{self, Comparison},
    types::Artist,
};

pub const MAX_SELECTED: usize = 2;

/// Artists picked for a popularity comparison.
///
/// Holds at most two artists. Adding the second one runs the comparison.
#[derive(Debug, Default)]
pub struct SelectionManager {
    selected: Vec<Artist>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self {
            selected: Vec::new(),
        }
    }

    /// Adds an artist to the selection and compares once two are selected.
    ///
    /// Returns [`ApiError::Precondition`] when the selection is already full
    /// or the artist is already part of it.
    pub fn add(&mut self, artist: Artist) -> Result<Option<Comparison>, ApiError> {
        if self.has(&artist.id) {
            return Err(ApiError::Precondition(format!(
                "{} is already selected",
                artist.name
            )));
        }
        if self.is_full() {
            return Err(ApiError::Precondition(format!(
                "only {} artists can be selected, reset the selection first",
                MAX_SELECTED
            )));
        }

        self.selected.push(artist);
        if self.is_full() {
            return popularity::compare_two(&self.selected).map(Some);
        }
        Ok(None)
    }

    pub fn has(&self, artist_id: &str) -> bool {
        self.selected.iter().any(|a| a.id == artist_id)
    }

    pub fn is_full(&self) -> bool {
        self.selected.len() >= MAX_SELECTED
    }

    pub fn get_selected(&self) -> &[Artist] {
        &self.selected
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
