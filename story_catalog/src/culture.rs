//! Culture definitions - the grouping that owns stories.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::story::Story;

/// Unique identifier for cultures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CultureId(pub Uuid);

impl CultureId {
    /// Create a new random culture ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CultureId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CultureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cultural category. Each culture exclusively owns its ordered story
/// list; a story belongs to exactly one culture. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Culture {
    pub id: CultureId,
    pub name: String,
    pub description: String,
    pub region: String,
    pub stories: Vec<Story>,
}

impl Culture {
    /// Create a new culture with the given name, description, and region.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            id: CultureId::new(),
            name: name.into(),
            description: description.into(),
            region: region.into(),
            stories: Vec::new(),
        }
    }

    /// Set the owned stories.
    pub fn with_stories(mut self, stories: impl IntoIterator<Item = Story>) -> Self {
        self.stories = stories.into_iter().collect();
        self
    }

    /// Number of stories this culture owns.
    pub fn story_count(&self) -> usize {
        self.stories.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_culture_builder() {
        let culture = Culture::new("India", "A land of vibrant festivals.", "South Asia")
            .with_stories([Story::new("Celebration", "India")]);

        assert_eq!(culture.name, "India");
        assert_eq!(culture.region, "South Asia");
        assert_eq!(culture.story_count(), 1);
    }
}
