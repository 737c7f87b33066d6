//! Catalog - The ordered, densely numbered set of alternatives.

use super::{Alternative, AlternativeDraft, CatalogError};
use crate::domain::analysis::DecisionMatrix;
use crate::domain::foundation::AlternativeId;

/// In-memory catalog whose ids always form the contiguous range 1..=N.
///
/// Pure aggregate: callers persist the result of each mutation themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    alternatives: Vec<Alternative>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from stored rows, renumbering them in row order.
    pub fn from_rows(rows: Vec<Alternative>) -> Self {
        let mut catalog = Self { alternatives: rows };
        catalog.renumber();
        catalog
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }

    pub fn get(&self, id: AlternativeId) -> Option<&Alternative> {
        self.position(id).map(|i| &self.alternatives[i])
    }

    /// Appends an alternative with id = count + 1.
    pub fn add(&mut self, draft: AlternativeDraft) -> Alternative {
        let id = AlternativeId::from_position(self.alternatives.len());
        let alternative = Alternative::from_draft(id, draft);
        self.alternatives.push(alternative.clone());
        alternative
    }

    /// Replaces names and levels of an existing alternative, keeping its id.
    pub fn update(
        &mut self,
        id: AlternativeId,
        draft: AlternativeDraft,
    ) -> Result<Alternative, CatalogError> {
        let index = self.position(id).ok_or(CatalogError::NotFound(id))?;
        let alternative = Alternative::from_draft(id, draft);
        self.alternatives[index] = alternative.clone();
        Ok(alternative)
    }

    /// Removes an alternative and renumbers the rest to stay dense.
    ///
    /// Ids after the removed one shift down by one, so ids held elsewhere
    /// go stale.
    pub fn remove(&mut self, id: AlternativeId) -> Result<Alternative, CatalogError> {
        let index = self.position(id).ok_or(CatalogError::NotFound(id))?;
        let removed = self.alternatives.remove(index);
        self.renumber();
        Ok(removed)
    }

    /// Expands every alternative's levels into the decision matrix.
    pub fn decision_matrix(&self) -> DecisionMatrix {
        DecisionMatrix::new(self.alternatives.iter().map(Alternative::values).collect())
    }

    fn position(&self, id: AlternativeId) -> Option<usize> {
        self.alternatives.iter().position(|a| a.id == id)
    }

    fn renumber(&mut self) {
        for (position, alternative) in self.alternatives.iter_mut().enumerate() {
            alternative.id = AlternativeId::from_position(position);
        }
    }
}
