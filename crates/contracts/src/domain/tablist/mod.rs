//! Tab focus / selection state machine.
//!
//! The logic here never touches a document directly. The frontend implements
//! [`TabNode`], [`Visual`] and [`TabScope`] over `web_sys::Element`; tests use
//! an in-memory page.

pub mod cycler;
pub mod model;
pub mod switcher;

#[cfg(test)]
pub(crate) mod testing;

pub use cycler::KeyboardTabCycler;
pub use model::{FocusIndex, TabCollection};
pub use switcher::{PanelSwitcher, SwitchOutcome};

/// A tab element. Setters take `&self`: handles alias shared page state.
pub trait TabNode {
    fn id(&self) -> Option<String>;
    fn is_selected(&self) -> bool;
    fn set_selected(&self, selected: bool);
    fn set_focusable(&self, focusable: bool);
    /// Move input focus to this tab
    fn focus(&self);
    /// Id of the panel this tab controls (`aria-controls`)
    fn controls(&self) -> Option<String>;
    /// Id of the image shown with this tab (`data-image`)
    fn image(&self) -> Option<String>;

    /// Selected and reachable with Tab.
    fn promote(&self) {
        self.set_selected(true);
        self.set_focusable(true);
    }

    fn demote(&self) {
        self.set_selected(false);
        self.set_focusable(false);
    }
}

/// A panel or image whose visibility follows the selected tab.
pub trait Visual {
    fn id(&self) -> Option<String>;
    fn set_shown(&self, shown: bool);
}

/// Elements of one widget instance, resolved once when it is attached.
pub trait TabScope {
    type Tab: TabNode;
    type Panel: Visual;
    type Image: Visual;

    fn tabs(&self) -> &[Self::Tab];
    fn panels(&self) -> &[Self::Panel];
    fn images(&self) -> &[Self::Image];

    fn panel_by_id(&self, id: &str) -> Option<&Self::Panel> {
        find_by_id(self.panels(), id)
    }

    fn image_by_id(&self, id: &str) -> Option<&Self::Image> {
        find_by_id(self.images(), id)
    }
}

fn find_by_id<'a, V: Visual>(items: &'a [V], id: &str) -> Option<&'a V> {
    items.iter().find(|item| item.id().as_deref() == Some(id))
}
