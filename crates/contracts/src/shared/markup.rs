//! Markup contract shared by the tab widgets.
//!
//! The widgets never render markup themselves. They read and write the
//! attributes below on elements found by role:
//!   - `[role="tablist"]` / `[role="dotlist"]` containers hold the tabs;
//!   - each `[role="tab"]` / `[role="dot"]` carries `aria-selected`, `tabindex`,
//!     `aria-controls` (panel id) and optionally `data-image` (picture id);
//!   - panels are `[role="tabpanel"]` siblings toggled through `hidden`;
//!   - pictures are toggled through the `display` style property.

pub const ROLE_TABLIST: &str = "tablist";
pub const ROLE_TAB: &str = "tab";
pub const ROLE_TABPANEL: &str = "tabpanel";
pub const ROLE_DOTLIST: &str = "dotlist";
pub const ROLE_DOT: &str = "dot";

pub const ATTR_ROLE: &str = "role";
pub const ATTR_ARIA_SELECTED: &str = "aria-selected";
pub const ATTR_TABINDEX: &str = "tabindex";
pub const ATTR_ARIA_CONTROLS: &str = "aria-controls";
pub const ATTR_DATA_IMAGE: &str = "data-image";
pub const ATTR_HIDDEN: &str = "hidden";

/// Per-container JSON overrides for [`crate::shared::config::TabsConfig`].
pub const ATTR_TABS_CONFIG: &str = "data-tabs-config";
/// Set on a container once listeners are attached to it.
pub const ATTR_TABS_ATTACHED: &str = "data-tabs-attached";

pub const IMAGE_SELECTOR: &str = "picture";

pub const STYLE_DISPLAY: &str = "display";
pub const DISPLAY_SHOWN: &str = "inline";
pub const DISPLAY_HIDDEN: &str = "none";

pub const KEY_ARROW_LEFT: &str = "ArrowLeft";
pub const KEY_ARROW_RIGHT: &str = "ArrowRight";

pub const TABINDEX_FOCUSABLE: &str = "0";
pub const TABINDEX_SKIPPED: &str = "-1";

/// `[role="..."]` selector for a role name.
pub fn role_selector(role: &str) -> String {
    format!("[{ATTR_ROLE}=\"{role}\"]")
}

pub fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub fn tabindex_attr(focusable: bool) -> &'static str {
    if focusable {
        TABINDEX_FOCUSABLE
    } else {
        TABINDEX_SKIPPED
    }
}

/// Inline `style` for a picture's initial visibility.
pub fn display_style(shown: bool) -> String {
    let display = if shown { DISPLAY_SHOWN } else { DISPLAY_HIDDEN };
    format!("{STYLE_DISPLAY}: {display}")
}

/// Reads an `aria-selected`-style value. Anything but `"true"` is unselected.
pub fn is_true_attr(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("true"))
}
