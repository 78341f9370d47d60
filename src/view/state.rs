//! State cells owned by root views.
//!
//! Each transition is a plain method so the root view stays the only
//! writer of its own state.

use super::focus::Edit;

/// Integer counter with +1/-1 transitions.
///
/// This is the reusable counter hook: any view can embed one and get the
/// same increment/decrement behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    count: i64,
}

impl Counter {
    pub fn new(initial: i64) -> Self {
        Self { count: initial }
    }

    pub fn value(&self) -> i64 {
        self.count
    }

    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.count = self.count.saturating_sub(1);
    }
}

/// Boolean flag flipped by a toggle action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toggle(bool);

impl Toggle {
    pub fn new(on: bool) -> Self {
        Self(on)
    }

    pub fn is_on(&self) -> bool {
        self.0
    }

    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }
}

/// Text bound to an input. Always the literal result of the last edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextValue {
    value: String,
}

impl TextValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn apply(&mut self, edit: Edit) {
        match edit {
            Edit::Insert(c) => self.value.push(c),
            Edit::Backspace => {
                self.value.pop();
            }
        }
    }
}

/// Identity of a list item, fixed when the item is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(u64);

/// Ordered list whose items carry stable keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedList<T> {
    items: Vec<(ItemKey, T)>,
}

impl<T> KeyedList<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemKey, &T)> {
        self.items.iter().map(|(key, item)| (*key, item))
    }

    pub fn keys(&self) -> Vec<ItemKey> {
        self.items.iter().map(|(key, _)| *key).collect()
    }

    pub fn get(&self, key: ItemKey) -> Option<&T> {
        self.items.iter().find(|(k, _)| *k == key).map(|(_, item)| item)
    }
}

impl<T> FromIterator<T> for KeyedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .enumerate()
                .map(|(i, item)| (ItemKey(i as u64), item))
                .collect(),
        }
    }
}

impl KeyedList<String> {
    /// Build from string literals.
    pub fn of(items: &[&str]) -> Self {
        items.iter().map(|s| s.to_string()).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.items.iter().map(|(_, s)| s.as_str()).collect()
    }
}
