use crate::domain::services::{NavigationIntent, PanelVisibility};
use crate::shared::logging::{log_navigation_intent, log_panel_transition};
use dioxus::prelude::*;

/// Handle on one overlay panel's visibility.
///
/// Created once by the component that owns the panel and passed down as a
/// prop; children only see the transitions, never the raw signal.
#[derive(Clone, Copy, PartialEq)]
pub struct UsePanelReturn {
    name: &'static str,
    visibility: Signal<PanelVisibility>,
}

impl UsePanelReturn {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn visibility(&self) -> PanelVisibility {
        *self.visibility.read()
    }

    pub fn is_open(&self) -> bool {
        self.visibility().is_open()
    }

    pub fn open(&mut self) {
        let from = self.visibility();
        self.commit(from, from.open_requested(), "open_requested");
    }

    pub fn close(&mut self, trigger: &str) {
        let from = self.visibility();
        self.commit(from, from.close_requested(), trigger);
    }

    pub fn toggle(&mut self) {
        let from = self.visibility();
        self.commit(from, from.toggled(), "toggle");
    }

    /// Hands the intent to the router and closes the panel in the same
    /// event handler, so no frame shows the panel over the new page.
    pub fn navigate(&mut self, target: &str) {
        let from = self.visibility();
        let activation = from.navigation_activated(target);
        push_intent(activation.intent, self.name);
        self.commit(from, activation.next, "navigation_activated");
    }

    fn commit(&mut self, from: PanelVisibility, to: PanelVisibility, trigger: &str) {
        if from == to {
            return;
        }
        log_panel_transition(self.name, from, to, trigger);
        self.visibility.set(to);
    }
}

/// Hook to manage a panel that starts closed
pub fn use_panel(name: &'static str) -> UsePanelReturn {
    let visibility = use_signal(PanelVisibility::default);

    UsePanelReturn { name, visibility }
}

pub fn push_intent(intent: NavigationIntent, origin: &str) {
    log_navigation_intent(&intent, origin);
    navigator().push(intent.target);
}

/// Link activation from any surface. Inside a panel the panel closes too.
pub fn activate_link(panel: Option<UsePanelReturn>, target: &str, origin: &'static str) {
    match panel {
        Some(mut panel) => panel.navigate(target),
        None => push_intent(NavigationIntent::new(target), origin),
    }
}
