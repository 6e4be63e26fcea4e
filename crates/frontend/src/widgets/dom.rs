use contracts::domain::tablist::{TabNode, TabScope, Visual};
use contracts::shared::config::TabsConfig;
use contracts::shared::error::TabsError;
use contracts::shared::markup::{
    bool_attr, is_true_attr, role_selector, tabindex_attr, ATTR_ARIA_CONTROLS,
    ATTR_ARIA_SELECTED, ATTR_DATA_IMAGE, ATTR_HIDDEN, ATTR_TABINDEX, DISPLAY_HIDDEN,
    DISPLAY_SHOWN, STYLE_DISPLAY,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, NodeList};

#[derive(Debug, Clone)]
pub struct DomTab(Element);

impl DomTab {
    pub fn element(&self) -> &Element {
        &self.0
    }
}

impl TabNode for DomTab {
    fn id(&self) -> Option<String> {
        non_empty(Some(self.0.id()))
    }

    fn is_selected(&self) -> bool {
        is_true_attr(self.0.get_attribute(ATTR_ARIA_SELECTED).as_deref())
    }

    fn set_selected(&self, selected: bool) {
        let _ = self.0.set_attribute(ATTR_ARIA_SELECTED, bool_attr(selected));
    }

    fn set_focusable(&self, focusable: bool) {
        let _ = self.0.set_attribute(ATTR_TABINDEX, tabindex_attr(focusable));
    }

    fn focus(&self) {
        if let Some(el) = self.0.dyn_ref::<HtmlElement>() {
            let _ = el.focus();
        }
    }

    fn controls(&self) -> Option<String> {
        non_empty(self.0.get_attribute(ATTR_ARIA_CONTROLS))
    }

    fn image(&self) -> Option<String> {
        non_empty(self.0.get_attribute(ATTR_DATA_IMAGE))
    }
}

/// Panel toggled through the `hidden` attribute.
#[derive(Debug, Clone)]
pub struct DomPanel(Element);

impl Visual for DomPanel {
    fn id(&self) -> Option<String> {
        non_empty(Some(self.0.id()))
    }

    fn set_shown(&self, shown: bool) {
        if shown {
            let _ = self.0.remove_attribute(ATTR_HIDDEN);
        } else {
            let _ = self.0.set_attribute(ATTR_HIDDEN, "true");
        }
    }
}

/// Picture toggled through `style.display`.
#[derive(Debug, Clone)]
pub struct DomImage(HtmlElement);

impl Visual for DomImage {
    fn id(&self) -> Option<String> {
        non_empty(Some(self.0.id()))
    }

    fn set_shown(&self, shown: bool) {
        let display = if shown { DISPLAY_SHOWN } else { DISPLAY_HIDDEN };
        let _ = self.0.style().set_property(STYLE_DISPLAY, display);
    }
}

/// Elements of one widget: tabs inside the list, panels and pictures inside
/// the list's parent.
#[derive(Debug)]
pub struct DomScope {
    tabs: Vec<DomTab>,
    panels: Vec<DomPanel>,
    images: Vec<DomImage>,
}

impl DomScope {
    pub fn resolve(list: &Element, config: &TabsConfig) -> Result<Self, TabsError> {
        let root = list.parent_element().ok_or(TabsError::MissingContainer)?;

        let tabs = query_all(list, &role_selector(&config.tab_role))?
            .into_iter()
            .map(DomTab)
            .collect();
        let panels = query_all(&root, &role_selector(&config.panel_role))?
            .into_iter()
            .map(DomPanel)
            .collect();
        let images = query_all(&root, &config.image_selector)?
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .map(DomImage)
            .collect();

        Ok(Self {
            tabs,
            panels,
            images,
        })
    }
}

impl TabScope for DomScope {
    type Tab = DomTab;
    type Panel = DomPanel;
    type Image = DomImage;

    fn tabs(&self) -> &[DomTab] {
        &self.tabs
    }

    fn panels(&self) -> &[DomPanel] {
        &self.panels
    }

    fn images(&self) -> &[DomImage] {
        &self.images
    }
}

pub(crate) fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, TabsError> {
    root.query_selector_all(selector)
        .map(|nodes| elements(&nodes))
        .map_err(|_| TabsError::InvalidSelector {
            selector: selector.to_string(),
        })
}

pub(crate) fn elements(nodes: &NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
