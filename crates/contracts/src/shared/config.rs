//! Widget configuration.
//!
//! Both tab sets on a page run the same widget; they differ only in the roles
//! they look up. A container may override any field through a JSON
//! `data-tabs-config` attribute, e.g. `{"switch_on_click": false}`.

use super::error::TabsError;
use super::markup::{
    IMAGE_SELECTOR, KEY_ARROW_LEFT, KEY_ARROW_RIGHT, ROLE_DOT, ROLE_DOTLIST, ROLE_TAB,
    ROLE_TABLIST, ROLE_TABPANEL,
};
use crate::enums::NavKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Role of the container receiving `keydown`
    pub list_role: String,
    /// Role of the tabs inside the container
    pub tab_role: String,
    pub panel_role: String,
    /// CSS selector of the images toggled on click
    pub image_selector: String,
    pub prev_key: String,
    pub next_key: String,
    /// Attach the click handler that switches panels and images
    pub switch_on_click: bool,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self::tablist()
    }
}

impl TabsConfig {
    /// Tab list driving panels and pictures.
    pub fn tablist() -> Self {
        Self {
            list_role: ROLE_TABLIST.to_string(),
            tab_role: ROLE_TAB.to_string(),
            panel_role: ROLE_TABPANEL.to_string(),
            image_selector: IMAGE_SELECTOR.to_string(),
            prev_key: KEY_ARROW_LEFT.to_string(),
            next_key: KEY_ARROW_RIGHT.to_string(),
            switch_on_click: true,
        }
    }

    /// Dot navigation (crew page). Same behaviour, different roles.
    pub fn dotlist() -> Self {
        Self {
            list_role: ROLE_DOTLIST.to_string(),
            tab_role: ROLE_DOT.to_string(),
            ..Self::tablist()
        }
    }

    /// Every preset `attach_all` looks for.
    pub fn presets() -> Vec<TabsConfig> {
        vec![Self::tablist(), Self::dotlist()]
    }

    /// Apply a JSON object of overrides on top of this config.
    ///
    /// Fields absent from `json` keep their current value, so a dot list
    /// container can override one key without falling back to tab list roles.
    pub fn with_overrides(&self, json: &str) -> Result<Self, TabsError> {
        let overrides: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut merged = match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        merged.extend(overrides);
        Ok(serde_json::from_value(serde_json::Value::Object(merged))?)
    }

    /// Map a `KeyboardEvent.key` value to a direction.
    pub fn nav_key(&self, key: &str) -> Option<NavKey> {
        if key == self.next_key {
            Some(NavKey::Next)
        } else if key == self.prev_key {
            Some(NavKey::Previous)
        } else {
            None
        }
    }
}
