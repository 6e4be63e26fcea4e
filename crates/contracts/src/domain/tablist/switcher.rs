use super::{TabNode, TabScope, Visual};
use crate::shared::error::TabsError;

/// What a click changed. Used by tests and debug logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwitchOutcome {
    /// Tabs that were selected before the click
    pub demoted: usize,
    pub panel_shown: bool,
    pub image_shown: bool,
}

/// Switches the visible panel and image to the clicked tab.
///
/// Works from the clicked element only; the keyboard cycler's focus index is
/// not consulted or updated.
pub struct PanelSwitcher;

impl PanelSwitcher {
    pub fn on_click<S: TabScope>(scope: &S, clicked: &S::Tab) -> SwitchOutcome {
        let mut outcome = SwitchOutcome::default();

        for tab in scope.tabs().iter().filter(|tab| tab.is_selected()) {
            tab.demote();
            outcome.demoted += 1;
        }
        if outcome.demoted == 0 {
            log::debug!("no tab was selected before click");
        }
        clicked.promote();

        outcome.panel_shown = Self::show_panel(scope, clicked);
        outcome.image_shown = Self::show_image(scope, clicked);

        log::debug!(
            "tab {:?} selected: {:?}",
            clicked.id().unwrap_or_default(),
            outcome
        );
        outcome
    }

    // An unresolved panel leaves the current panel visible.
    fn show_panel<S: TabScope>(scope: &S, clicked: &S::Tab) -> bool {
        let Some(id) = clicked.controls() else {
            log::warn!(
                "tab {:?} has no aria-controls",
                clicked.id().unwrap_or_default()
            );
            return false;
        };
        let Some(target) = scope.panel_by_id(&id) else {
            log::warn!("{}", TabsError::MissingElement { id });
            return false;
        };

        for panel in scope.panels() {
            panel.set_shown(false);
        }
        target.set_shown(true);
        true
    }

    // Images are always hidden; only a resolved image is shown again.
    fn show_image<S: TabScope>(scope: &S, clicked: &S::Tab) -> bool {
        for image in scope.images() {
            image.set_shown(false);
        }

        let Some(id) = clicked.image() else {
            return false;
        };
        match scope.image_by_id(&id) {
            Some(target) => {
                target.set_shown(true);
                true
            }
            None => {
                log::warn!("{}", TabsError::MissingElement { id });
                false
            }
        }
    }
}
