//! Visibility controller for overlay surfaces (mobile sidebar, profile menu).
//!
//! Two states only. Animation is a CSS concern and never shows up here.

/// Open/closed state of an overlay panel. Starts `Closed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelVisibility {
    Open,
    #[default]
    Closed,
}

/// Request to the router to go to `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationIntent {
    pub target: String,
}

impl NavigationIntent {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

/// Result of activating a link inside a panel: where to go, and the panel
/// state to commit in the same event handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkActivation {
    pub intent: NavigationIntent,
    pub next: PanelVisibility,
}

impl PanelVisibility {
    pub fn is_open(&self) -> bool {
        matches!(self, PanelVisibility::Open)
    }

    pub fn open_requested(self) -> Self {
        PanelVisibility::Open
    }

    /// Close affordance, backdrop click and Escape all land here.
    pub fn close_requested(self) -> Self {
        PanelVisibility::Closed
    }

    pub fn toggled(self) -> Self {
        match self {
            PanelVisibility::Open => PanelVisibility::Closed,
            PanelVisibility::Closed => PanelVisibility::Open,
        }
    }

    /// Link activation always yields the intent; an open panel closes with it.
    pub fn navigation_activated(self, target: &str) -> LinkActivation {
        LinkActivation {
            intent: NavigationIntent::new(target),
            next: PanelVisibility::Closed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelVisibility::Open => "open",
            PanelVisibility::Closed => "closed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert_eq!(PanelVisibility::default(), PanelVisibility::Closed);
        assert!(!PanelVisibility::default().is_open());
    }

    #[test]
    fn test_open_then_close() {
        let state = PanelVisibility::default().open_requested();
        assert_eq!(state, PanelVisibility::Open);
        assert_eq!(state.close_requested(), PanelVisibility::Closed);
    }

    #[test]
    fn test_repeated_requests_are_idempotent() {
        let open = PanelVisibility::Open.open_requested();
        assert_eq!(open, PanelVisibility::Open);
        assert_eq!(PanelVisibility::Closed.close_requested(), PanelVisibility::Closed);
    }

    #[test]
    fn test_navigation_while_open_closes_and_emits_intent() {
        let activation = PanelVisibility::Open.navigation_activated("/alerts");
        assert_eq!(activation.intent, NavigationIntent::new("/alerts"));
        assert_eq!(activation.next, PanelVisibility::Closed);
    }

    #[test]
    fn test_navigation_while_closed_stays_closed() {
        let activation = PanelVisibility::Closed.navigation_activated("/history");
        assert_eq!(activation.intent.target, "/history");
        assert_eq!(activation.next, PanelVisibility::Closed);
    }

    #[test]
    fn test_toggled() {
        assert_eq!(PanelVisibility::Closed.toggled(), PanelVisibility::Open);
        assert_eq!(PanelVisibility::Open.toggled(), PanelVisibility::Closed);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(PanelVisibility::Open.as_str(), "open");
        assert_eq!(PanelVisibility::Closed.as_str(), "closed");
    }
}
