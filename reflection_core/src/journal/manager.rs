//! The reflection manager - single source of truth for saved reflections
//! and story progress.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use story_catalog::{Catalog, Story};

use super::entry::{ReflectionEntry, ReflectionId};
use super::storage::{StorageBackend, PROGRESS_KEY, REFLECTIONS_KEY};

/// Owns the persisted reflection list and the completed-story set.
///
/// Every mutating operation writes its record back through the storage
/// backend before returning, so a restarted process observes the latest
/// state. Storage failures are logged and absorbed: the in-memory effect
/// stands, and the next mutation rewrites the whole record. This favors
/// availability over strict durability, which fits the stakes of a local
/// journal.
///
/// Progress is keyed by story *title*. Two distinct stories sharing a title
/// would collide on the same progress slot; the built-in catalog has unique
/// titles, and completion badges in the UI rely on the title keying, so the
/// key is kept as-is rather than switched to the story ID.
pub struct ReflectionManager<S: StorageBackend> {
    reflections: Vec<ReflectionEntry>,
    completed: HashSet<String>,
    storage: S,
}

impl<S: StorageBackend> ReflectionManager<S> {
    /// Create a manager, loading both records from storage.
    ///
    /// A missing or unreadable record starts as an empty collection - a
    /// corrupt blob never fails startup.
    pub fn new(storage: S) -> Self {
        let reflections = load_record(&storage, REFLECTIONS_KEY).unwrap_or_default();
        let completed = load_record(&storage, PROGRESS_KEY).unwrap_or_default();

        Self {
            reflections,
            completed,
            storage,
        }
    }

    // ---- Story progress ----

    /// Check whether a story has been completed. Pure lookup.
    pub fn is_completed(&self, story: &Story) -> bool {
        self.completed.contains(&story.title)
    }

    /// Mark a story as completed. Idempotent; persists before returning.
    pub fn mark_completed(&mut self, story: &Story) {
        if self.completed.insert(story.title.clone()) {
            debug!("marked '{}' completed", story.title);
        }
        self.persist_progress();
    }

    /// Number of completed stories.
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Completed and total story counts for the progress display. The
    /// total comes from the catalog collaborator.
    pub fn progress(&self, catalog: &Catalog) -> (usize, usize) {
        (self.completed_count(), catalog.story_count())
    }

    /// Empty the progress set. Leaves reflections untouched; persists.
    pub fn reset_progress(&mut self) {
        self.completed.clear();
        self.persist_progress();
    }

    // ---- Reflections ----

    /// Saved reflections, newest first.
    pub fn reflections(&self) -> &[ReflectionEntry] {
        &self.reflections
    }

    /// Save a new reflection for a finished story.
    ///
    /// Marks the story completed, builds a denormalized entry with a fresh
    /// ID and the current timestamp, prepends it (the list stays newest
    /// first), persists, and returns the entry. Empty feelings and empty
    /// notes are both valid; gating the save button is the screen's job.
    pub fn save_reflection(
        &mut self,
        story: &Story,
        feelings: impl IntoIterator<Item = impl Into<String>>,
        notes: impl Into<String>,
    ) -> ReflectionEntry {
        self.mark_completed(story);

        let entry = ReflectionEntry::for_story(story, feelings, notes);
        self.reflections.insert(0, entry.clone());
        self.persist_reflections();

        debug!("saved reflection {} for '{}'", entry.id, entry.story_title);
        entry
    }

    /// Delete a reflection by ID. A missing ID is a no-op; persists.
    pub fn delete_reflection(&mut self, id: ReflectionId) {
        let before = self.reflections.len();
        self.reflections.retain(|e| e.id != id);
        if self.reflections.len() == before {
            debug!("delete of absent reflection {} ignored", id);
        }
        self.persist_reflections();
    }

    /// Delete reflections by position in the current list.
    ///
    /// Indices refer to the list as it was before the call - removing one
    /// entry never shifts which entries the other indices name. Duplicate
    /// and out-of-range indices are ignored. Persists.
    pub fn delete_reflections_at(&mut self, indices: &[usize]) {
        let mut sorted: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.reflections.len())
            .collect();
        sorted.sort_unstable();
        sorted.dedup();

        // Remove back to front so earlier positions stay valid.
        for &index in sorted.iter().rev() {
            self.reflections.remove(index);
        }
        self.persist_reflections();
    }

    /// Remove every reflection. Leaves the progress set untouched; persists.
    pub fn clear_all_reflections(&mut self) {
        self.reflections.clear();
        self.persist_reflections();
    }

    // ---- Persistence ----

    fn persist_reflections(&mut self) {
        persist_record(&mut self.storage, REFLECTIONS_KEY, &self.reflections);
    }

    fn persist_progress(&mut self) {
        persist_record(&mut self.storage, PROGRESS_KEY, &self.completed);
    }
}

/// Read and decode one record; `None` covers both a missing blob and a
/// corrupt one.
fn load_record<S: StorageBackend, T: DeserializeOwned>(storage: &S, key: &str) -> Option<T> {
    let bytes = match storage.read(key) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return None,
        Err(err) => {
            warn!("could not read record '{}': {}", key, err);
            return None;
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("record '{}' is corrupt, starting empty: {}", key, err);
            None
        }
    }
}

/// Encode and write one record, absorbing failures.
fn persist_record<S: StorageBackend, T: Serialize>(storage: &mut S, key: &str, value: &T) {
    let bytes = match serde_json::to_vec(value) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("could not encode record '{}': {}", key, err);
            return;
        }
    };

    if let Err(err) = storage.write(key, &bytes) {
        warn!("could not persist record '{}': {}", key, err);
    }
}
