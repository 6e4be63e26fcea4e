use serde::{Deserialize, Serialize};

/// Direction of a keyboard step through a tab list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavKey {
    Previous,
    Next,
}

impl NavKey {
    pub fn code(&self) -> &'static str {
        match self {
            NavKey::Previous => "previous",
            NavKey::Next => "next",
        }
    }
}

impl std::fmt::Display for NavKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
