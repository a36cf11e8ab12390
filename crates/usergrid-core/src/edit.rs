//! Edit transaction: at most one row under inline edit
//!
//! States are `Idle` and `Editing`. Beginning an edit seeds a draft with a
//! full copy of the row; field edits only touch the draft; commit hands the
//! buffer back to the caller, whose draft replaces the stored row, and
//! cancel drops it.
//! Beginning a new edit while one is open discards the open one.

use std::collections::BTreeMap;

use crate::Record;

/// Staged, uncommitted edits for one row
#[derive(Debug, Clone, PartialEq)]
pub struct EditBuffer<R: Record> {
    target: R::Id,
    draft: R,
    /// Fields written since the edit began, with their latest value
    changes: BTreeMap<String, String>,
}

impl<R: Record> EditBuffer<R> {
    fn seed(row: &R) -> Self {
        Self {
            target: row.id(),
            draft: row.clone(),
            changes: BTreeMap::new(),
        }
    }

    /// Identity of the row being edited
    pub fn target(&self) -> &R::Id {
        &self.target
    }

    /// The row as it would look if committed now
    pub fn draft(&self) -> &R {
        &self.draft
    }

    /// Current draft value of a field
    pub fn value(&self, field: &str) -> Option<String> {
        self.draft.field(field).map(|v| v.into_owned())
    }

    /// Fields written since the edit began
    pub fn changed_fields(&self) -> impl Iterator<Item = &str> {
        self.changes.keys().map(String::as_str)
    }

    pub fn is_dirty(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Consume the buffer, yielding the row to store
    pub fn into_draft(self) -> R {
        self.draft
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStart {
    /// The transaction was idle and is now editing the row
    Started,
    /// An open edit on another (or the same) row was discarded first
    Replaced,
    /// The row is no longer in the dataset; nothing changed
    StaleTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The draft replaced the stored row
    Committed,
    /// The target was deleted while being edited; the edit was dropped
    StaleTarget,
    /// There was no open edit
    NotEditing,
}

#[derive(Debug, Clone)]
enum EditState<R: Record> {
    Idle,
    Editing(EditBuffer<R>),
}

impl<R: Record> Default for EditState<R> {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Debug, Clone)]
pub struct EditTransaction<R: Record> {
    state: EditState<R>,
}

impl<R: Record> Default for EditTransaction<R> {
    fn default() -> Self {
        Self {
            state: EditState::Idle,
        }
    }
}

impl<R: Record> EditTransaction<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing(_))
    }

    /// Whether `id` is the row currently under edit
    pub fn is_editing_row(&self, id: &R::Id) -> bool {
        self.buffer().is_some_and(|buffer| &buffer.target == id)
    }

    pub fn buffer(&self) -> Option<&EditBuffer<R>> {
        match &self.state {
            EditState::Idle => None,
            EditState::Editing(buffer) => Some(buffer),
        }
    }

    /// Open an edit on `row`, discarding any edit already open
    pub fn begin(&mut self, row: &R) -> EditStart {
        let previous = std::mem::replace(&mut self.state, EditState::Editing(EditBuffer::seed(row)));
        match previous {
            EditState::Idle => EditStart::Started,
            EditState::Editing(discarded) => {
                tracing::debug!(
                    "Discarding open edit on {:?} ({} changed fields)",
                    discarded.target,
                    discarded.changes.len()
                );
                EditStart::Replaced
            }
        }
    }

    /// Stage one field value. No validation is performed.
    ///
    /// Returns false when idle or when the record refuses the field.
    pub fn set_field(&mut self, field: &str, value: &str) -> bool {
        let EditState::Editing(buffer) = &mut self.state else {
            return false;
        };
        if !buffer.draft.set_field(field, value) {
            return false;
        }
        buffer.changes.insert(field.to_string(), value.to_string());
        true
    }

    /// Close the transaction, handing back the buffer to be applied
    pub fn take(&mut self) -> Option<EditBuffer<R>> {
        match std::mem::take(&mut self.state) {
            EditState::Idle => None,
            EditState::Editing(buffer) => Some(buffer),
        }
    }

    /// Drop the open edit without applying it, returning whether one was open
    pub fn cancel(&mut self) -> bool {
        self.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::User;
    use pretty_assertions::assert_eq;

    fn ann() -> User {
        User::new("1", "Ann", "ann@example.com", "member")
    }

    fn bob() -> User {
        User::new("2", "Bob", "bob@example.com", "admin")
    }

    #[test]
    fn test_begin_seeds_full_copy() {
        let mut edit = EditTransaction::new();
        assert_eq!(edit.begin(&ann()), EditStart::Started);

        let buffer = edit.buffer().unwrap();
        assert_eq!(buffer.target(), "1");
        assert_eq!(buffer.draft(), &ann());
        assert!(!buffer.is_dirty());
    }

    #[test]
    fn test_set_field_when_idle_is_noop() {
        let mut edit: EditTransaction<User> = EditTransaction::new();
        assert!(!edit.set_field("name", "X"));
        assert!(!edit.is_editing());
    }

    #[test]
    fn test_set_field_refuses_identity() {
        let mut edit = EditTransaction::new();
        edit.begin(&ann());
        assert!(!edit.set_field("id", "9"));
        assert!(!edit.set_field("nickname", "A"));
        assert!(!edit.buffer().unwrap().is_dirty());
    }

    #[test]
    fn test_commit_yields_draft() {
        let mut edit = EditTransaction::new();
        edit.begin(&ann());
        assert!(edit.set_field("name", "X"));
        assert!(edit.set_field("name", "Y"));

        let buffer = edit.take().unwrap();
        assert_eq!(buffer.changed_fields().collect::<Vec<_>>(), vec!["name"]);
        assert_eq!(buffer.value("name").as_deref(), Some("Y"));

        let committed = buffer.into_draft();
        assert_eq!(committed, User::new("1", "Y", "ann@example.com", "member"));
        assert!(!edit.is_editing());
    }

    #[test]
    fn test_begin_while_editing_discards() {
        let mut edit = EditTransaction::new();
        edit.begin(&ann());
        edit.set_field("name", "X");

        assert_eq!(edit.begin(&bob()), EditStart::Replaced);
        let buffer = edit.buffer().unwrap();
        assert_eq!(buffer.target(), "2");
        assert_eq!(buffer.draft(), &bob());
        assert!(edit.is_editing_row(&"2".to_string()));
        assert!(!edit.is_editing_row(&"1".to_string()));
    }

    #[test]
    fn test_cancel() {
        let mut edit = EditTransaction::new();
        assert!(!edit.cancel());
        edit.begin(&ann());
        edit.set_field("email", "x@example.com");
        assert!(edit.cancel());
        assert!(edit.buffer().is_none());
    }
}
