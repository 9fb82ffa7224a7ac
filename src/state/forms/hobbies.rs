//! Hobby list with position-independent entry ids

use std::fmt;
use uuid::Uuid;

/// Stable identity of a hobby row, assigned at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HobbyId(Uuid);

impl HobbyId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HobbyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HobbyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HobbyEntry {
    pub id: HobbyId,
    pub hobby: String,
}

/// Ordered hobby rows
///
/// Positions are derived from the current order; anything that must follow a
/// row across removals keys on its [`HobbyId`].
#[derive(Debug, Clone, Default)]
pub struct HobbyList {
    entries: Vec<HobbyEntry>,
}

impl HobbyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty row and return its id
    pub fn append(&mut self) -> HobbyId {
        let id = HobbyId::new();
        self.entries.push(HobbyEntry {
            id,
            hobby: String::new(),
        });
        id
    }

    /// Remove the row at `index`; `None` if out of range
    pub fn remove(&mut self, index: usize) -> Option<HobbyEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index_of(&self, id: HobbyId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn id_at(&self, index: usize) -> Option<HobbyId> {
        self.entries.get(index).map(|e| e.id)
    }

    pub fn get(&self, id: HobbyId) -> Option<&HobbyEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: HobbyId) -> Option<&mut HobbyEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HobbyEntry> {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<HobbyId> {
        self.entries.iter().map(|e| e.id).collect()
    }
}
