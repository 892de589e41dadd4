//! Route definitions - the closed set of logical screens.

use story_catalog::Story;

/// One logical screen the user can navigate to, with the payload needed to
/// render it.
#[derive(Debug, Clone)]
pub enum Route {
    Onboarding,
    ChooseMoment,
    StoryReader(Story),
    Reflection(Story),
    Settings,
}

impl Route {
    /// Whether two routes name the same logical screen.
    ///
    /// Parameterized variants compare only the carried story's *title*: a
    /// screen pushed with a reconstructed or stale `Story` value still
    /// counts as the same screen as long as the title matches. This is the
    /// weak-equality rule the stack relies on, kept as an explicit function
    /// rather than an `Eq` impl so structural equality stays untangled
    /// from screen identity.
    pub fn same_screen(&self, other: &Route) -> bool {
        match (self, other) {
            (Route::Onboarding, Route::Onboarding) => true,
            (Route::ChooseMoment, Route::ChooseMoment) => true,
            (Route::Settings, Route::Settings) => true,
            (Route::StoryReader(a), Route::StoryReader(b)) => a.title == b.title,
            (Route::Reflection(a), Route::Reflection(b)) => a.title == b.title,
            _ => false,
        }
    }

    /// Short name of the screen for logging.
    pub fn screen_name(&self) -> &'static str {
        match self {
            Route::Onboarding => "onboarding",
            Route::ChooseMoment => "choose_moment",
            Route::StoryReader(_) => "story_reader",
            Route::Reflection(_) => "reflection",
            Route::Settings => "settings",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::StoryReader(story) => write!(f, "story_reader({})", story.title),
            Route::Reflection(story) => write!(f, "reflection({})", story.title),
            other => write!(f, "{}", other.screen_name()),
        }
    }
}
