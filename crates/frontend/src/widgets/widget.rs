use super::dom::{elements, DomScope, DomTab};
use contracts::domain::tablist::{KeyboardTabCycler, PanelSwitcher, TabCollection, TabScope};
use contracts::shared::config::TabsConfig;
use contracts::shared::error::TabsError;
use contracts::shared::markup::{role_selector, ATTR_TABS_ATTACHED, ATTR_TABS_CONFIG};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, KeyboardEvent, MouseEvent};

/// One tab list with its resolved elements and focus state.
pub struct TabWidget {
    list: Element,
    config: Rc<TabsConfig>,
    scope: Rc<DomScope>,
    cycler: Rc<RefCell<KeyboardTabCycler<DomTab>>>,
}

impl TabWidget {
    /// Resolve elements under `list` and validate the initial markup.
    pub fn resolve(list: &Element, config: TabsConfig) -> Result<Self, TabsError> {
        let scope = DomScope::resolve(list, &config)?;
        let tabs = TabCollection::new(scope.tabs().to_vec())?;
        tabs.sync_focusable();
        let cycler = KeyboardTabCycler::new(tabs)?;

        Ok(Self {
            list: list.clone(),
            config: Rc::new(config),
            scope: Rc::new(scope),
            cycler: Rc::new(RefCell::new(cycler)),
        })
    }

    /// Tabs, panels and images resolved for this list.
    pub fn scope(&self) -> &DomScope {
        &self.scope
    }

    pub fn tab_count(&self) -> usize {
        self.scope().tabs().len()
    }

    /// Register the event listeners and return the number of tabs.
    ///
    /// Listeners live as long as the page, so their closures are leaked.
    pub fn attach(self) -> usize {
        let count = self.tab_count();

        let config = self.config.clone();
        let cycler = self.cycler.clone();
        let keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            let Ok(mut cycler) = cycler.try_borrow_mut() else {
                return;
            };
            if cycler.handle_key(&config, &event.key()).is_some() {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        let _ = self
            .list
            .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
        keydown.forget();

        if self.config.switch_on_click {
            for tab in self.scope().tabs() {
                let scope = self.scope.clone();
                let clicked = tab.clone();
                let click = Closure::wrap(Box::new(move |_: MouseEvent| {
                    PanelSwitcher::on_click(&*scope, &clicked);
                }) as Box<dyn FnMut(MouseEvent)>);
                let _ = tab
                    .element()
                    .add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
                click.forget();
            }
        }

        let _ = self.list.set_attribute(ATTR_TABS_ATTACHED, "true");
        count
    }
}

/// Attach a widget to every tab list and dot list in `document`.
///
/// Lists that are already attached are skipped; a list with invalid markup is
/// logged and left alone. Returns the number of widgets attached.
pub fn attach_all(document: &Document) -> usize {
    let mut attached = 0;

    for preset in TabsConfig::presets() {
        let selector = role_selector(&preset.list_role);
        let lists = match document.query_selector_all(&selector) {
            Ok(nodes) => elements(&nodes),
            Err(_) => {
                log::warn!("{}", TabsError::InvalidSelector { selector });
                continue;
            }
        };

        for list in lists {
            if list.has_attribute(ATTR_TABS_ATTACHED) {
                continue;
            }
            match attach_list(&list, &preset) {
                Ok(count) => {
                    log::debug!("{selector}: attached {count} tabs");
                    attached += 1;
                }
                Err(err) => log::warn!("{selector} skipped: {err}"),
            }
        }
    }

    attached
}

fn attach_list(list: &Element, preset: &TabsConfig) -> Result<usize, TabsError> {
    let config = match list.get_attribute(ATTR_TABS_CONFIG) {
        Some(json) => preset.with_overrides(&json)?,
        None => preset.clone(),
    };
    Ok(TabWidget::resolve(list, config)?.attach())
}
