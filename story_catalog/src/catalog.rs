//! Catalog queries over the fixed culture/story content.

use crate::culture::Culture;
use crate::data;
use crate::story::Story;

/// The read-only content catalog consumed by every screen.
///
/// Cultures keep their load order; `all_stories` flattens in culture order
/// then story order. The catalog is built once and never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    cultures: Vec<Culture>,
}

impl Catalog {
    /// Create a catalog from an ordered list of cultures.
    pub fn new(cultures: impl IntoIterator<Item = Culture>) -> Self {
        Self {
            cultures: cultures.into_iter().collect(),
        }
    }

    /// The built-in content table.
    pub fn builtin() -> Self {
        Self::new(data::all_cultures())
    }

    /// All cultures, in catalog order.
    pub fn cultures(&self) -> &[Culture] {
        &self.cultures
    }

    /// All stories flattened: culture order, then story order within each.
    pub fn all_stories(&self) -> impl Iterator<Item = &Story> {
        self.cultures.iter().flat_map(|c| c.stories.iter())
    }

    /// Total number of stories across all cultures.
    pub fn story_count(&self) -> usize {
        self.cultures.iter().map(Culture::story_count).sum()
    }

    /// The culture that owns the given story, matched by story ID.
    pub fn culture_for(&self, story: &Story) -> Option<&Culture> {
        self.cultures
            .iter()
            .find(|c| c.stories.iter().any(|s| s.id == story.id))
    }

    /// Look up a story by its title.
    ///
    /// Titles happen to be unique in the built-in table; the first match
    /// wins if that ever stops holding.
    pub fn story_by_title(&self, title: &str) -> Option<&Story> {
        self.all_stories().find(|s| s.title == title)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_populated() {
        let catalog = Catalog::builtin();
        assert!(!catalog.cultures().is_empty());
        assert_eq!(catalog.story_count(), catalog.all_stories().count());

        // Every catalog story has at least one page.
        for story in catalog.all_stories() {
            assert!(!story.paragraphs.is_empty(), "{} has no pages", story.title);
        }
    }

    #[test]
    fn test_all_stories_follows_culture_order() {
        let catalog = Catalog::builtin();
        let first_culture = &catalog.cultures()[0];
        let flattened: Vec<_> = catalog.all_stories().collect();

        for (i, story) in first_culture.stories.iter().enumerate() {
            assert_eq!(flattened[i].id, story.id);
        }
    }

    #[test]
    fn test_culture_for_finds_owner() {
        let catalog = Catalog::builtin();
        let story = catalog.all_stories().next().unwrap().clone();

        let culture = catalog.culture_for(&story);
        assert!(culture.is_some());
        assert_eq!(culture.unwrap().name, story.country);
    }

    #[test]
    fn test_culture_for_unknown_story_is_none() {
        let catalog = Catalog::builtin();
        let stray = Story::new("Not In Catalog", "Nowhere");
        assert!(catalog.culture_for(&stray).is_none());
    }

    #[test]
    fn test_story_by_title() {
        let catalog = Catalog::builtin();
        let story = catalog.story_by_title("Celebration");
        assert!(story.is_some());
        assert_eq!(story.unwrap().country, "India");

        assert!(catalog.story_by_title("No Such Story").is_none());
    }

    #[test]
    fn test_builtin_titles_are_unique() {
        use std::collections::HashSet;

        let catalog = Catalog::builtin();
        let titles: HashSet<_> = catalog.all_stories().map(|s| s.title.as_str()).collect();
        assert_eq!(titles.len(), catalog.story_count());
    }
}
