//! In-memory page used by the state machine tests.

use super::{TabNode, TabScope, Visual};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct TabState {
    pub id: String,
    pub selected: bool,
    pub focusable: bool,
    pub controls: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FakeTab {
    pub state: Rc<RefCell<TabState>>,
    active: Rc<RefCell<Option<String>>>,
}

impl TabNode for FakeTab {
    fn id(&self) -> Option<String> {
        Some(self.state.borrow().id.clone())
    }

    fn is_selected(&self) -> bool {
        self.state.borrow().selected
    }

    fn set_selected(&self, selected: bool) {
        self.state.borrow_mut().selected = selected;
    }

    fn set_focusable(&self, focusable: bool) {
        self.state.borrow_mut().focusable = focusable;
    }

    fn focus(&self) {
        *self.active.borrow_mut() = self.id();
    }

    fn controls(&self) -> Option<String> {
        self.state.borrow().controls.clone()
    }

    fn image(&self) -> Option<String> {
        self.state.borrow().image.clone()
    }
}

#[derive(Debug, Clone)]
pub struct FakeVisual {
    pub id: String,
    pub shown: Rc<RefCell<bool>>,
}

impl Visual for FakeVisual {
    fn id(&self) -> Option<String> {
        Some(self.id.clone())
    }

    fn set_shown(&self, shown: bool) {
        *self.shown.borrow_mut() = shown;
    }
}

/// Tab `name` controls panel `{name}-panel` and shows image `{name}-image`.
pub struct FakePage {
    pub tabs: Vec<FakeTab>,
    pub panels: Vec<FakeVisual>,
    pub images: Vec<FakeVisual>,
    active: Rc<RefCell<Option<String>>>,
}

impl FakePage {
    pub fn new(names: &[&str], selected: usize) -> Self {
        let active = Rc::new(RefCell::new(None));
        let visual = |id: String, shown: bool| FakeVisual {
            id,
            shown: Rc::new(RefCell::new(shown)),
        };

        let tabs = names
            .iter()
            .enumerate()
            .map(|(i, name)| FakeTab {
                state: Rc::new(RefCell::new(TabState {
                    id: name.to_string(),
                    selected: i == selected,
                    focusable: i == selected,
                    controls: Some(format!("{name}-panel")),
                    image: Some(format!("{name}-image")),
                })),
                active: active.clone(),
            })
            .collect();
        let panels = names
            .iter()
            .enumerate()
            .map(|(i, name)| visual(format!("{name}-panel"), i == selected))
            .collect();
        let images = names
            .iter()
            .enumerate()
            .map(|(i, name)| visual(format!("{name}-image"), i == selected))
            .collect();

        Self {
            tabs,
            panels,
            images,
            active,
        }
    }

    pub fn selected(&self) -> Vec<usize> {
        self.tabs
            .iter()
            .enumerate()
            .filter(|(_, tab)| tab.is_selected())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn focusable(&self) -> Vec<usize> {
        self.tabs
            .iter()
            .enumerate()
            .filter(|(_, tab)| tab.state.borrow().focusable)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn focused(&self) -> Option<String> {
        self.active.borrow().clone()
    }

    pub fn shown_panels(&self) -> Vec<String> {
        shown(&self.panels)
    }

    pub fn shown_images(&self) -> Vec<String> {
        shown(&self.images)
    }
}

fn shown(items: &[FakeVisual]) -> Vec<String> {
    items
        .iter()
        .filter(|item| *item.shown.borrow())
        .map(|item| item.id.clone())
        .collect()
}

impl TabScope for FakePage {
    type Tab = FakeTab;
    type Panel = FakeVisual;
    type Image = FakeVisual;

    fn tabs(&self) -> &[FakeTab] {
        &self.tabs
    }

    fn panels(&self) -> &[FakeVisual] {
        &self.panels
    }

    fn images(&self) -> &[FakeVisual] {
        &self.images
    }
}
