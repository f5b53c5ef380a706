//! # Nucleus Wizard Drafts
//!
//! The assistant pages collect draft rows (a name and a type) before anything
//! exists in the data store. Drafts are only promoted when the user leaves the
//! wizard forward into the regular pages; see `commit_drafts`.

use log::info;

use crate::core::data::{DataError, DataStore};

/// Which committed collection a wizard page feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftKind {
    Souls,
    Spaces,
}

/// One unsaved row in a wizard page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftItem {
    pub name: String,
    pub kind: String,
}

impl DraftItem {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Rows without a name are untouched template rows, not user intent.
    pub fn is_filled(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Editable list of drafts with a cursor, owned by a wizard page.
#[derive(Debug, Clone, Default)]
pub struct DraftList {
    items: Vec<DraftItem>,
    selected: usize,
}

impl DraftList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[DraftItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.selected)
    }

    /// Append a blank row and move the cursor onto it.
    pub fn push_blank(&mut self) {
        self.items.push(DraftItem::default());
        self.selected = self.items.len() - 1;
    }

    /// The row under the cursor, creating one if the list is empty.
    pub fn current_mut(&mut self) -> &mut DraftItem {
        if self.items.is_empty() {
            self.push_blank();
        }
        &mut self.items[self.selected]
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() {
            self.selected = (self.selected + 1).min(self.items.len() - 1);
        }
    }

    pub fn remove_selected(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.remove(self.selected);
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.selected = 0;
    }
}

/// What a wizard commit produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub nucleus_id: String,
    pub souls: usize,
    pub spaces: usize,
}

/// Promote drafts into a brand-new nucleus. Names and types are copied;
/// unfilled rows are skipped.
pub fn commit_drafts(
    data: &mut dyn DataStore,
    souls: &[DraftItem],
    spaces: &[DraftItem],
) -> Result<CommitSummary, DataError> {
    let nucleus = data.new_nucleus();
    nucleus.name = String::new();
    let nucleus_id = nucleus.id.clone();

    let mut soul_count = 0;
    for draft in souls.iter().filter(|d| d.is_filled()) {
        let soul = data.new_soul(&nucleus_id)?;
        soul.name = draft.name.clone();
        soul.kind = draft.kind.clone();
        soul_count += 1;
    }

    let mut space_count = 0;
    for draft in spaces.iter().filter(|d| d.is_filled()) {
        let space = data.new_space(&nucleus_id)?;
        space.name = draft.name.clone();
        space.kind = draft.kind.clone();
        space_count += 1;
    }

    info!(
        "Committed wizard into nucleus {} ({} souls, {} spaces)",
        nucleus_id, soul_count, space_count
    );

    Ok(CommitSummary {
        nucleus_id,
        souls: soul_count,
        spaces: space_count,
    })
}
