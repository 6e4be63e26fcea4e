use super::TabNode;
use crate::enums::NavKey;
use crate::shared::error::TabsError;

/// Position of the keyboard-focused tab. Always a valid index for `len` tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusIndex {
    index: usize,
    len: usize,
}

impl FocusIndex {
    pub fn new(index: usize, len: usize) -> Result<Self, TabsError> {
        if len == 0 {
            return Err(TabsError::EmptyCollection);
        }
        if index >= len {
            return Err(TabsError::IndexOutOfRange { index, len });
        }
        Ok(Self { index, len })
    }

    pub fn get(self) -> usize {
        self.index
    }

    pub fn len(self) -> usize {
        self.len
    }

    /// One step in `key` direction, wrapping at both ends.
    pub fn step(self, key: NavKey) -> Self {
        let index = match key {
            NavKey::Next => (self.index + 1) % self.len,
            NavKey::Previous => (self.index + self.len - 1) % self.len,
        };
        Self { index, ..self }
    }
}

/// Tabs of one widget in document order. Fixed for the page lifetime.
#[derive(Debug, Clone)]
pub struct TabCollection<T> {
    tabs: Vec<T>,
    initial: usize,
}

impl<T: TabNode> TabCollection<T> {
    /// Requires at least one tab and exactly one marked selected.
    pub fn new(tabs: Vec<T>) -> Result<Self, TabsError> {
        if tabs.is_empty() {
            return Err(TabsError::EmptyCollection);
        }

        match selected_indices(&tabs).as_slice() {
            [] => Err(TabsError::NoInitialSelection),
            [initial] => Ok(Self {
                initial: *initial,
                tabs,
            }),
            many => Err(TabsError::MultipleSelected { count: many.len() }),
        }
    }

    /// Index of the tab selected in the initial markup.
    pub fn initial_index(&self) -> usize {
        self.initial
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.tabs.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.tabs.iter()
    }

    /// Only the initially selected tab stays reachable with Tab.
    pub fn sync_focusable(&self) {
        for (i, tab) in self.tabs.iter().enumerate() {
            tab.set_focusable(i == self.initial);
        }
    }

    /// Indices of every tab currently flagged selected.
    pub fn selected_indices(&self) -> Vec<usize> {
        selected_indices(&self.tabs)
    }
}

fn selected_indices<T: TabNode>(tabs: &[T]) -> Vec<usize> {
    tabs.iter()
        .enumerate()
        .filter(|(_, tab)| tab.is_selected())
        .map(|(i, _)| i)
        .collect()
}
