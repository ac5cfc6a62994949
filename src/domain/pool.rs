//! Pool - The Current Set of Drawable Energizers
//!
//! Seeded once from the built-in list. Items only ever leave the pool.

use crate::domain::energizer::{self, Energizer, ItemId};

/// Ordered collection of energizers still in play
#[derive(Debug, Clone, Default)]
pub struct Pool {
    items: Vec<Energizer>,
}

impl Pool {
    /// Create a pool from the given items
    pub fn new(items: Vec<Energizer>) -> Self {
        Self { items }
    }

    /// Create a pool from the built-in energizers
    pub fn seed() -> Self {
        Self::new(energizer::built_in())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Energizer> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Energizer> {
        self.items.iter()
    }

    /// Labels in wheel order
    pub fn labels(&self) -> Vec<&str> {
        self.items.iter().map(|e| e.label.as_str()).collect()
    }

    /// Index of the energizer with this exact label
    pub fn position_of(&self, label: &str) -> Option<usize> {
        self.items.iter().position(|e| e.label == label)
    }

    /// Remove the energizer with this exact label
    pub fn remove_by_label(&mut self, label: &str) -> Option<Energizer> {
        let pos = self.position_of(label)?;
        Some(self.items.remove(pos))
    }

    /// Remove the energizer with this id
    pub fn remove_by_id(&mut self, id: ItemId) -> Option<Energizer> {
        let pos = self.items.iter().position(|e| e.id == id)?;
        Some(self.items.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_by_label_shifts_following_items() {
        let mut pool = Pool::seed();
        let removed = pool.remove_by_label("Steen-papier-schaar toernooi");
        assert!(removed.is_some());
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.position_of("Gekke loopjes"), Some(1));
    }

    #[test]
    fn test_remove_missing_label() {
        let mut pool = Pool::seed();
        assert!(pool.remove_by_label("Limbo").is_none());
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn test_remove_by_id() {
        let mut pool = Pool::seed();
        let id = pool.get(3).map(|e| e.id).expect("seeded");
        let removed = pool.remove_by_id(id).expect("present");
        assert_eq!(removed.label, "Stoelendans");
        assert!(pool.remove_by_id(id).is_none());
        assert_eq!(pool.labels(), vec!["Ninja", "Steen-papier-schaar toernooi", "Gekke loopjes"]);
    }
}
