//! Structured logging helpers for the navigation shell
//!
//! Keeps field names consistent across hooks and components.

use crate::domain::services::{NavigationIntent, PanelVisibility};
use crate::shared::errors::ShellError;

/// Operation tag attached to every shell log line
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    PanelTransition,
    NavigationIntent,
    ConfigValidation,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::PanelTransition => "panel_transition",
            LogOperation::NavigationIntent => "navigation_intent",
            LogOperation::ConfigValidation => "config_validation",
        }
    }
}

/// Log a visibility change of an overlay panel
pub fn log_panel_transition(panel: &str, from: PanelVisibility, to: PanelVisibility, trigger: &str) {
    tracing::debug!(
        operation = LogOperation::PanelTransition.as_str(),
        panel = panel,
        from = from.as_str(),
        to = to.as_str(),
        trigger = trigger,
        "Panel visibility changed"
    );
}

/// Log a navigation request handed to the router
pub fn log_navigation_intent(intent: &NavigationIntent, origin: &str) {
    tracing::debug!(
        operation = LogOperation::NavigationIntent.as_str(),
        destination = %intent.target,
        origin = origin,
        "Navigation requested"
    );
}

/// Log the outcome of validating the navigation tables
pub fn log_config_validation(defects: &[ShellError]) {
    if defects.is_empty() {
        tracing::info!(
            operation = LogOperation::ConfigValidation.as_str(),
            "Navigation tables validated"
        );
        return;
    }

    for defect in defects {
        tracing::warn!(
            operation = LogOperation::ConfigValidation.as_str(),
            defect = %defect,
            "Navigation configuration defect"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::PanelTransition.as_str(), "panel_transition");
        assert_eq!(LogOperation::NavigationIntent.as_str(), "navigation_intent");
        assert_eq!(LogOperation::ConfigValidation.as_str(), "config_validation");
    }
}
