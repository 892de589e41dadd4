//! Reflection entry definitions - what gets saved after a story.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use story_catalog::{GradientStop, Story};
use uuid::Uuid;

/// The feeling labels offered on the reflection screen.
///
/// The store accepts any label; this vocabulary is what the UI presents.
pub const FEELING_CHOICES: [&str; 12] = [
    "Happy",
    "Curious",
    "Peaceful",
    "Surprised",
    "Grateful",
    "Thoughtful",
    "Connected",
    "Sad",
    "Hopeful",
    "Confused",
    "Inspired",
    "Calm",
];

/// Unique identifier for reflection entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReflectionId(pub Uuid);

impl ReflectionId {
    /// Create a new random reflection ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReflectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReflectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user's saved reflection on a story they finished.
///
/// Story title, country, and gradient are copied in at save time rather
/// than referenced live, so the entry still renders correctly if the
/// catalog changes underneath it. Immutable once created, except for
/// deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectionEntry {
    pub id: ReflectionId,
    pub created_at: DateTime<Utc>,
    pub story_title: String,
    pub story_country: String,
    /// Feeling labels the user picked. May be empty.
    pub feelings: Vec<String>,
    /// Free-text notes. May be empty.
    pub notes: String,
    /// Copy of the story's display gradient for rendering the entry card.
    pub gradient: [GradientStop; 2],
}

impl ReflectionEntry {
    /// Build a fresh entry for a story with the current timestamp.
    pub fn for_story(
        story: &Story,
        feelings: impl IntoIterator<Item = impl Into<String>>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: ReflectionId::new(),
            created_at: Utc::now(),
            story_title: story.title.clone(),
            story_country: story.country.clone(),
            feelings: feelings.into_iter().map(Into::into).collect(),
            notes: notes.into(),
            gradient: story.gradient,
        }
    }

    /// Check whether the entry has any user-authored content.
    pub fn is_empty(&self) -> bool {
        self.feelings.is_empty() && self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_story() -> Story {
        Story::new("Celebration", "India")
            .with_paragraphs(["The smell hits me first."])
            .with_gradient(
                GradientStop::new(0.95, 0.6, 0.35),
                GradientStop::new(0.95, 0.5, 0.65),
            )
    }

    #[test]
    fn test_entry_denormalizes_story_fields() {
        let story = sample_story();
        let entry = ReflectionEntry::for_story(&story, ["Happy", "Grateful"], "Loved it");

        assert_eq!(entry.story_title, "Celebration");
        assert_eq!(entry.story_country, "India");
        assert_eq!(entry.feelings, vec!["Happy", "Grateful"]);
        assert_eq!(entry.notes, "Loved it");
        assert_eq!(entry.gradient, story.gradient);
    }

    #[test]
    fn test_empty_entry_is_still_valid() {
        let entry = ReflectionEntry::for_story(&sample_story(), Vec::<String>::new(), "");
        assert!(entry.is_empty());
        assert_eq!(entry.story_title, "Celebration");
    }

    #[test]
    fn test_entries_get_distinct_ids() {
        let story = sample_story();
        let a = ReflectionEntry::for_story(&story, ["Calm"], "");
        let b = ReflectionEntry::for_story(&story, ["Calm"], "");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_feeling_vocabulary_is_distinct() {
        use std::collections::HashSet;

        let unique: HashSet<_> = FEELING_CHOICES.iter().collect();
        assert_eq!(unique.len(), FEELING_CHOICES.len());
    }

    #[test]
    fn test_entry_accepts_labels_outside_vocabulary() {
        let entry = ReflectionEntry::for_story(&sample_story(), ["Nostalgic"], "");
        assert!(!FEELING_CHOICES.contains(&"Nostalgic"));
        assert_eq!(entry.feelings, vec!["Nostalgic"]);
    }

    #[test]
    fn test_entry_round_trips_through_json() {
        let entry = ReflectionEntry::for_story(&sample_story(), ["Hopeful"], "A note");

        let encoded = serde_json::to_string(&entry).unwrap();
        let decoded: ReflectionEntry = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, entry);
    }
}
