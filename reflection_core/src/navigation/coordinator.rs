//! The navigation coordinator - stack operations over routes.

use log::debug;

use super::route::Route;

/// Maintains the ordered stack of screens above the implicit welcome root.
///
/// All operations are synchronous and total: every call leaves the stack in
/// a valid state, and popping past the bottom is a no-op rather than an
/// error.
#[derive(Debug, Clone, Default)]
pub struct NavigationCoordinator {
    stack: Vec<Route>,
}

impl NavigationCoordinator {
    /// Create a coordinator showing the welcome root (empty stack).
    pub fn new() -> Self {
        Self::default()
    }

    /// The current stack, bottom first.
    pub fn stack(&self) -> &[Route] {
        &self.stack
    }

    /// The topmost route, if any screen is pushed over the root.
    pub fn current(&self) -> Option<&Route> {
        self.stack.last()
    }

    /// Number of screens above the root.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether the welcome root is showing.
    pub fn is_at_root(&self) -> bool {
        self.stack.is_empty()
    }

    /// Push a screen onto the stack. Always succeeds.
    pub fn push(&mut self, route: Route) {
        debug!("push {}", route);
        self.stack.push(route);
    }

    /// Pop the top screen. No-op when already at the root.
    pub fn pop(&mut self) {
        if let Some(route) = self.stack.pop() {
            debug!("pop {}", route);
        }
    }

    /// Clear the stack, returning to the welcome root.
    pub fn pop_to_root(&mut self) {
        debug!("pop to root from depth {}", self.depth());
        self.stack.clear();
    }

    /// Return to the browse screen after a reader/reflection flow.
    ///
    /// Rebuilds the fixed prefix `[Onboarding, ChooseMoment]` instead of
    /// searching the stack for the browse screen. This matches the app's
    /// one flow topology (welcome -> onboarding -> browse -> ...), and it
    /// is a known fragility: if the browse screen ever becomes reachable
    /// through another path, the rebuilt prefix will silently be wrong.
    /// `truncate_after` is the topology-independent alternative.
    pub fn pop_to_browse(&mut self) {
        debug!("pop to browse from depth {}", self.depth());
        self.stack = vec![Route::Onboarding, Route::ChooseMoment];
    }

    /// Truncate everything above the last route matching the predicate.
    ///
    /// Leaves the stack unchanged when nothing matches. Unlike
    /// `pop_to_browse`, this works for any flow topology because it keeps
    /// whatever actually precedes the target instead of assuming it.
    pub fn truncate_after<F>(&mut self, predicate: F)
    where
        F: Fn(&Route) -> bool,
    {
        if let Some(index) = self.stack.iter().rposition(|r| predicate(r)) {
            debug!("truncate to depth {}", index + 1);
            self.stack.truncate(index + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_catalog::Story;

    fn story(title: &str) -> Story {
        Story::new(title, "India").with_paragraphs(["One page."])
    }

    fn screen_names(coordinator: &NavigationCoordinator) -> Vec<&'static str> {
        coordinator.stack().iter().map(Route::screen_name).collect()
    }

    #[test]
    fn test_starts_at_root() {
        let coordinator = NavigationCoordinator::new();
        assert!(coordinator.is_at_root());
        assert!(coordinator.current().is_none());
        assert_eq!(coordinator.depth(), 0);
    }

    #[test]
    fn test_push_then_pop_restores_previous_stack() {
        let mut coordinator = NavigationCoordinator::new();
        coordinator.push(Route::Onboarding);
        coordinator.push(Route::ChooseMoment);
        coordinator.pop();

        assert_eq!(screen_names(&coordinator), vec!["onboarding"]);
        assert!(coordinator.current().unwrap().same_screen(&Route::Onboarding));
    }

    #[test]
    fn test_pop_on_empty_stack_is_noop() {
        let mut coordinator = NavigationCoordinator::new();
        coordinator.pop();
        assert!(coordinator.is_at_root());
    }

    #[test]
    fn test_pop_to_root_clears_everything() {
        let mut coordinator = NavigationCoordinator::new();
        coordinator.push(Route::Onboarding);
        coordinator.push(Route::ChooseMoment);
        coordinator.push(Route::StoryReader(story("Celebration")));

        coordinator.pop_to_root();
        assert!(coordinator.is_at_root());
    }

    #[test]
    fn test_pop_to_browse_rebuilds_fixed_prefix() {
        let mut coordinator = NavigationCoordinator::new();
        coordinator.push(Route::Onboarding);
        coordinator.push(Route::ChooseMoment);
        coordinator.push(Route::StoryReader(story("Celebration")));
        coordinator.push(Route::Reflection(story("Celebration")));

        coordinator.pop_to_browse();

        assert_eq!(screen_names(&coordinator), vec!["onboarding", "choose_moment"]);
    }

    #[test]
    fn test_pop_to_browse_rebuilds_even_without_browse_on_stack() {
        // The fixed-prefix rule reconstructs, it does not search: the
        // prefix appears even if the user reached the reader another way.
        let mut coordinator = NavigationCoordinator::new();
        coordinator.push(Route::Settings);

        coordinator.pop_to_browse();
        assert_eq!(screen_names(&coordinator), vec!["onboarding", "choose_moment"]);
    }

    #[test]
    fn test_truncate_after_keeps_actual_prefix() {
        let mut coordinator = NavigationCoordinator::new();
        coordinator.push(Route::Settings);
        coordinator.push(Route::ChooseMoment);
        coordinator.push(Route::StoryReader(story("Celebration")));

        coordinator.truncate_after(|r| r.same_screen(&Route::ChooseMoment));

        assert_eq!(screen_names(&coordinator), vec!["settings", "choose_moment"]);
    }

    #[test]
    fn test_truncate_after_without_match_is_noop() {
        let mut coordinator = NavigationCoordinator::new();
        coordinator.push(Route::Onboarding);
        coordinator.push(Route::StoryReader(story("Celebration")));

        coordinator.truncate_after(|r| r.same_screen(&Route::Settings));

        assert_eq!(screen_names(&coordinator), vec!["onboarding", "story_reader"]);
    }

    #[test]
    fn test_truncate_after_matches_reconstructed_payload() {
        let mut coordinator = NavigationCoordinator::new();
        coordinator.push(Route::StoryReader(story("Celebration")));
        coordinator.push(Route::Reflection(story("Celebration")));

        // Target built independently of the pushed payload.
        let target = Route::StoryReader(story("Celebration"));
        coordinator.truncate_after(|r| r.same_screen(&target));

        assert_eq!(screen_names(&coordinator), vec!["story_reader"]);
    }

    #[test]
    fn test_reader_flow_round_trip() {
        // welcome -> onboarding -> browse -> reader -> reflection -> save.
        let mut coordinator = NavigationCoordinator::new();
        coordinator.push(Route::Onboarding);
        coordinator.push(Route::ChooseMoment);
        coordinator.push(Route::StoryReader(story("Celebration")));
        coordinator.push(Route::Reflection(story("Celebration")));
        assert_eq!(coordinator.depth(), 4);

        coordinator.pop_to_browse();
        assert!(coordinator.current().unwrap().same_screen(&Route::ChooseMoment));
        assert_eq!(coordinator.depth(), 2);
    }
}
