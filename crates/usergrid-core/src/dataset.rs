//! Dataset store - the authoritative record collection
//!
//! Insertion order is display order. Every mutation preserves the relative
//! order of the records that survive it, and no two records ever share an
//! identity.

use std::collections::HashSet;

use crate::Record;

#[derive(Debug, Clone)]
pub struct Dataset<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Default for Dataset<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> Dataset<R> {
    /// Build the store from an initial collection.
    ///
    /// When two records share an identity the first one wins and the later
    /// one is dropped.
    pub fn new(records: impl IntoIterator<Item = R>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        for record in records {
            let id = record.id();
            if seen.insert(id.clone()) {
                kept.push(record);
            } else {
                tracing::warn!("Dropping record with duplicate identity {:?}", id);
            }
        }
        Self { records: kept }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.records.iter().find(|r| &r.id() == id)
    }

    pub fn contains(&self, id: &R::Id) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &R::Id) -> Option<usize> {
        self.records.iter().position(|r| &r.id() == id)
    }

    /// Remove the record with the given identity, returning it
    pub fn delete_one(&mut self, id: &R::Id) -> Option<R> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }

    /// Remove every record whose identity is listed, returning how many went
    pub fn delete_many(&mut self, ids: &[R::Id]) -> usize {
        if ids.is_empty() {
            return 0;
        }
        let doomed: HashSet<&R::Id> = ids.iter().collect();
        let before = self.records.len();
        self.records.retain(|r| !doomed.contains(&r.id()));
        before - self.records.len()
    }

    /// Replace the record sharing `record`'s identity.
    ///
    /// Never inserts: returns false and leaves the store untouched when the
    /// identity is unknown.
    pub fn update(&mut self, record: R) -> bool {
        match self.position(&record.id()) {
            Some(index) => {
                self.records[index] = record;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::User;
    use pretty_assertions::assert_eq;

    fn user(id: &str, name: &str) -> User {
        User::new(id, name, format!("{}@example.com", name.to_lowercase()), "member")
    }

    fn names(dataset: &Dataset<User>) -> Vec<&str> {
        dataset.records().iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn test_duplicate_identity_keeps_first() {
        let dataset = Dataset::new(vec![user("1", "Ann"), user("2", "Bob"), user("1", "Cat")]);
        assert_eq!(names(&dataset), vec!["Ann", "Bob"]);
    }

    #[test]
    fn test_delete_one_preserves_order() {
        let mut dataset =
            Dataset::new(vec![user("1", "Ann"), user("2", "Bob"), user("3", "Cat")]);
        let removed = dataset.delete_one(&"2".to_string());
        assert_eq!(removed.map(|u| u.name), Some("Bob".to_string()));
        assert_eq!(names(&dataset), vec!["Ann", "Cat"]);
    }

    #[test]
    fn test_delete_one_missing_is_noop() {
        let mut dataset = Dataset::new(vec![user("1", "Ann")]);
        assert!(dataset.delete_one(&"9".to_string()).is_none());
        assert_eq!(dataset.len(), 1);
        assert!(dataset.contains(&"1".to_string()));
    }

    #[test]
    fn test_delete_many() {
        let mut dataset = Dataset::new(vec![
            user("1", "Ann"),
            user("2", "Bob"),
            user("3", "Cat"),
            user("4", "Dan"),
        ]);
        let removed = dataset.delete_many(&["4".to_string(), "2".to_string(), "9".to_string()]);
        assert_eq!(removed, 2);
        assert_eq!(names(&dataset), vec!["Ann", "Cat"]);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut dataset = Dataset::new(vec![user("1", "Ann"), user("2", "Bob")]);
        assert!(dataset.update(user("1", "Anna")));
        assert_eq!(names(&dataset), vec!["Anna", "Bob"]);
    }

    #[test]
    fn test_update_never_inserts() {
        let mut dataset = Dataset::new(vec![user("1", "Ann")]);
        assert!(!dataset.update(user("2", "Bob")));
        assert_eq!(names(&dataset), vec!["Ann"]);
    }
}
