//! Story definitions - the unit of content the reader pages through.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for stories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryId(pub Uuid);

impl StoryId {
    /// Create a new random story ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil/empty story ID (useful for defaults).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for StoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One stop of a story's display gradient. Channels are in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl GradientStop {
    /// Create a gradient stop, clamping each channel into [0.0, 1.0].
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }
}

/// A cultural story: an ordered sequence of first-person paragraphs plus the
/// metadata the reader and the reflection journal need.
///
/// Constructed once at catalog load and immutable afterwards. `images` holds
/// icon tokens addressed independently of `paragraphs` - the two sequences
/// may differ in length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub country: String,
    /// The readable pages, in order. Never empty for catalog stories.
    pub paragraphs: Vec<String>,
    /// Icon tokens shown alongside pages, addressed by index.
    pub images: Vec<String>,
    /// Two-stop display gradient, denormalized into saved reflections.
    pub gradient: [GradientStop; 2],
    /// Background shown after the reader finishes the story.
    pub cultural_context: String,
}

impl Story {
    /// Create a new story with the given title and country.
    pub fn new(title: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id: StoryId::new(),
            title: title.into(),
            country: country.into(),
            paragraphs: Vec::new(),
            images: Vec::new(),
            gradient: [GradientStop::new(0.5, 0.5, 0.5); 2],
            cultural_context: String::new(),
        }
    }

    /// Set the paragraphs.
    pub fn with_paragraphs(mut self, paragraphs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.paragraphs = paragraphs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the image tokens.
    pub fn with_images(mut self, images: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// Set the two-stop gradient.
    pub fn with_gradient(mut self, from: GradientStop, to: GradientStop) -> Self {
        self.gradient = [from, to];
        self
    }

    /// Set the cultural context text.
    pub fn with_cultural_context(mut self, context: impl Into<String>) -> Self {
        self.cultural_context = context.into();
        self
    }

    /// Total number of pages in the story.
    pub fn page_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Paragraph at the given index, or the empty string when out of range.
    pub fn paragraph(&self, index: usize) -> &str {
        self.paragraphs.get(index).map(String::as_str).unwrap_or("")
    }

    /// Image token at the given index, if any.
    pub fn image(&self, index: usize) -> Option<&str> {
        self.images.get(index).map(String::as_str)
    }

    /// Icon token for the story card - the first image, or a book fallback.
    pub fn icon(&self) -> &str {
        self.image(0).unwrap_or("book.fill")
    }

    /// Estimated reading time in minutes, assuming ~200 words per minute.
    /// Always at least one minute.
    pub fn reading_time_minutes(&self) -> usize {
        let total_words: usize = self
            .paragraphs
            .iter()
            .map(|p| p.split_whitespace().count())
            .sum();
        ((total_words + 199) / 200).max(1)
    }

    /// Formatted reading time string, e.g. `"2 min read"`.
    pub fn reading_time_text(&self) -> String {
        format!("{} min read", self.reading_time_minutes())
    }
}
