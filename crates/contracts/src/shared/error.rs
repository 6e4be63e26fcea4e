use thiserror::Error;

/// Errors raised while building a tab widget.
///
/// Event handlers never return these: a lookup that resolves to nothing at
/// click time is logged and skipped.
#[derive(Debug, Error)]
pub enum TabsError {
    #[error("tab list has no tabs")]
    EmptyCollection,

    #[error("no tab is marked aria-selected=\"true\"")]
    NoInitialSelection,

    #[error("{count} tabs are marked selected, expected exactly one")]
    MultipleSelected { count: usize },

    #[error("focus index {index} is out of range for {len} tabs")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("element `#{id}` not found")]
    MissingElement { id: String },

    #[error("tab list has no enclosing container")]
    MissingContainer,

    #[error("selector `{selector}` could not be queried")]
    InvalidSelector { selector: String },

    #[error("invalid tabs config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
