use super::model::{FocusIndex, TabCollection};
use super::TabNode;
use crate::enums::NavKey;
use crate::shared::config::TabsConfig;
use crate::shared::error::TabsError;

/// Moves focus and selection through a tab list with the arrow keys.
#[derive(Debug)]
pub struct KeyboardTabCycler<T> {
    tabs: TabCollection<T>,
    focus: FocusIndex,
}

impl<T: TabNode> KeyboardTabCycler<T> {
    /// Focus starts on the tab selected in the initial markup.
    pub fn new(tabs: TabCollection<T>) -> Result<Self, TabsError> {
        let focus = FocusIndex::new(tabs.initial_index(), tabs.len())?;
        Ok(Self { tabs, focus })
    }

    pub fn focus(&self) -> FocusIndex {
        self.focus
    }

    /// Handle a raw `KeyboardEvent.key`. Returns `None` for keys the widget
    /// does not consume.
    pub fn handle_key(&mut self, config: &TabsConfig, key: &str) -> Option<FocusIndex> {
        config.nav_key(key).map(|nav| self.on_key(nav))
    }

    pub fn on_key(&mut self, key: NavKey) -> FocusIndex {
        let old = self.focus;
        let new = old.step(key);

        self.demote(old.get(), new.get());

        if let Some(tab) = self.tabs.get(new.get()) {
            tab.promote();
            tab.focus();
        }
        self.focus = new;

        log::debug!(
            "tab focus {} -> {} ({key}, {} tabs)",
            old.get(),
            new.get(),
            new.len()
        );
        new
    }

    // A click may have selected a tab other than the focused one; it is
    // demoted too so at most one tab stays selected.
    fn demote(&self, old: usize, next: usize) {
        if let Some(tab) = self.tabs.get(old) {
            tab.demote();
        }
        for i in self.tabs.selected_indices() {
            if i != next {
                if let Some(tab) = self.tabs.get(i) {
                    tab.demote();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tablist::testing::FakePage;
    use crate::domain::tablist::PanelSwitcher;

    fn cycler(page: &FakePage) -> KeyboardTabCycler<crate::domain::tablist::testing::FakeTab> {
        KeyboardTabCycler::new(TabCollection::new(page.tabs.clone()).unwrap()).unwrap()
    }

    #[test]
    fn test_next_moves_selection_and_focus() {
        let page = FakePage::new(&["a", "b", "c"], 0);
        let mut cycler = cycler(&page);

        let focus = cycler.on_key(NavKey::Next);
        assert_eq!(focus.get(), 1);
        assert_eq!(page.selected(), vec![1]);
        assert_eq!(page.focusable(), vec![1]);
        assert_eq!(page.focused().as_deref(), Some("b"));
    }

    #[test]
    fn test_next_wraps_to_first() {
        let page = FakePage::new(&["a", "b", "c"], 0);
        let mut cycler = cycler(&page);

        cycler.on_key(NavKey::Next);
        cycler.on_key(NavKey::Next);
        let focus = cycler.on_key(NavKey::Next);
        assert_eq!(focus.get(), 0);
        assert_eq!(page.selected(), vec![0]);
        assert_eq!(page.focused().as_deref(), Some("a"));
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let page = FakePage::new(&["a", "b", "c"], 0);
        let mut cycler = cycler(&page);

        let focus = cycler.on_key(NavKey::Previous);
        assert_eq!(focus.get(), 2);
        assert_eq!(page.selected(), vec![2]);
        assert_eq!(page.focusable(), vec![2]);
    }

    #[test]
    fn test_starts_from_initial_selection() {
        let page = FakePage::new(&["a", "b", "c", "d"], 2);
        let mut cycler = cycler(&page);
        assert_eq!(cycler.focus().get(), 2);

        assert_eq!(cycler.on_key(NavKey::Next).get(), 3);
        assert_eq!(page.selected(), vec![3]);
    }

    #[test]
    fn test_unrecognized_key_is_ignored() {
        let page = FakePage::new(&["a", "b", "c"], 0);
        let mut cycler = cycler(&page);
        let config = TabsConfig::tablist();

        assert_eq!(cycler.handle_key(&config, "Enter"), None);
        assert_eq!(cycler.handle_key(&config, "ArrowUp"), None);
        assert_eq!(cycler.focus().get(), 0);
        assert_eq!(page.selected(), vec![0]);
        assert_eq!(page.focused(), None);

        let focus = cycler.handle_key(&config, "ArrowRight").unwrap();
        assert_eq!(focus.get(), 1);
    }

    #[test]
    fn test_single_tab_stays_selected() {
        let page = FakePage::new(&["only"], 0);
        let mut cycler = cycler(&page);

        assert_eq!(cycler.on_key(NavKey::Next).get(), 0);
        assert_eq!(cycler.on_key(NavKey::Previous).get(), 0);
        assert_eq!(page.selected(), vec![0]);
        assert_eq!(page.focusable(), vec![0]);
    }

    #[test]
    fn test_previous_after_click_leaves_one_selected() {
        let page = FakePage::new(&["a", "b", "c"], 0);
        let mut cycler = cycler(&page);

        PanelSwitcher::on_click(&page, &page.tabs[1]);
        let focus = cycler.on_key(NavKey::Previous);

        assert_eq!(focus.get(), 2);
        assert_eq!(page.selected(), vec![2]);
        assert_eq!(page.focusable(), vec![2]);
        assert_eq!(page.focused().as_deref(), Some("c"));
    }

    #[test]
    fn test_one_selected_after_mixed_input() {
        let page = FakePage::new(&["a", "b", "c", "d"], 0);
        let mut cycler = cycler(&page);

        // focus index stays at 0 while the click selects "c"
        PanelSwitcher::on_click(&page, &page.tabs[2]);
        assert_eq!(page.selected(), vec![2]);

        cycler.on_key(NavKey::Next);
        assert_eq!(page.selected(), vec![1]);
        assert_eq!(page.focusable(), vec![1]);

        let keys = [
            NavKey::Previous,
            NavKey::Previous,
            NavKey::Next,
            NavKey::Previous,
            NavKey::Previous,
        ];
        for (step, key) in keys.into_iter().enumerate() {
            cycler.on_key(key);
            PanelSwitcher::on_click(&page, &page.tabs[step % 4]);
            assert_eq!(page.selected().len(), 1);
            cycler.on_key(key);
            assert_eq!(page.selected().len(), 1);
            assert!(cycler.focus().get() < 4);
        }
    }
}
