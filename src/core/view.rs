//! View state machines for the listing and the detail sheet.
//!
//! Neither view renders anything itself; the command layer turns their state
//! into terminal output through the template module.

use crate::core::generation::Generation;
use crate::core::model::{EntityDetail, EntityReference};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Idle,
    Loading { generation: Generation },
    Ready {
        generation: Generation,
        entries: Vec<Arc<EntityDetail>>,
    },
}

/// Listing state with last-trigger-wins commits
#[derive(Debug)]
pub struct ListView {
    state: ListState,
    references: Vec<EntityReference>,
    last_entries: Vec<Arc<EntityDetail>>,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    pub fn new() -> Self {
        Self {
            state: ListState::Idle,
            references: Vec::new(),
            last_entries: Vec::new(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading { .. })
    }

    pub fn entries(&self) -> &[Arc<EntityDetail>] {
        match &self.state {
            ListState::Ready { entries, .. } => entries,
            _ => &[],
        }
    }

    /// Switch to loading for a new trigger; any older trigger becomes stale
    pub fn begin_loading(&mut self, generation: Generation) {
        self.state = ListState::Loading { generation };
    }

    fn loading_generation(&self) -> Option<Generation> {
        match self.state {
            ListState::Loading { generation } => Some(generation),
            _ => None,
        }
    }

    /// Entries to reuse when `references` matches the last committed set
    pub fn reusable_entries(&self, references: &[EntityReference]) -> Option<Vec<Arc<EntityDetail>>> {
        if self.references.as_slice() == references {
            Some(self.last_entries.clone())
        } else {
            None
        }
    }

    /// Commit results of `generation`; returns false when it is stale
    pub fn commit(
        &mut self,
        generation: Generation,
        references: Vec<EntityReference>,
        entries: Vec<Arc<EntityDetail>>,
    ) -> bool {
        if self.loading_generation() != Some(generation) {
            log::debug!("Discarding stale listing from generation {generation}");
            return false;
        }

        self.references = references;
        self.last_entries = entries.clone();
        self.state = ListState::Ready { generation, entries };
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Success(Arc<EntityDetail>),
    Failure(String),
}

/// Detail sheet for a single entity: `Loading -> Success | Failure`
#[derive(Debug)]
pub struct DetailView {
    name: String,
    state: DetailState,
}

impl DetailView {
    pub fn navigate(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: DetailState::Loading,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Move to another entity. Navigating to the current one keeps a loaded
    /// record but starts over after a failure.
    pub fn navigate_to(&mut self, name: &str) {
        if self.name != name || matches!(self.state, DetailState::Failure(_)) {
            self.name = name.to_string();
            self.state = DetailState::Loading;
        }
    }

    /// Apply the outcome of the lookup. Only `Loading` accepts an outcome.
    pub fn complete<E: std::fmt::Display>(&mut self, outcome: Result<Arc<EntityDetail>, E>) {
        if self.state != DetailState::Loading {
            return;
        }
        self.state = match outcome {
            Ok(detail) => DetailState::Success(detail),
            Err(e) => {
                log::warn!("Failed to fetch details for {}: {e}", self.name);
                DetailState::Failure(e.to_string())
            }
        };
    }
}
