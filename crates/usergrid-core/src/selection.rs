//! Selection manager
//!
//! Tracks the rows marked for bulk action. Membership is decided by the
//! row-equality strategy supplied at construction, never by position, so a
//! selection survives filtering and page changes.

use crate::{ByIdentity, RowEquality};

pub struct Selection<R, E = ByIdentity> {
    members: Vec<R>,
    equality: E,
}

impl<R: std::fmt::Debug, E> std::fmt::Debug for Selection<R, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selection")
            .field("members", &self.members)
            .finish_non_exhaustive()
    }
}

impl<R: Clone, E: RowEquality<R>> Selection<R, E> {
    pub fn new(equality: E) -> Self {
        Self {
            members: Vec::new(),
            equality,
        }
    }

    pub fn equality(&self) -> &E {
        &self.equality
    }

    /// Selected rows, in the order they were selected
    pub fn members(&self) -> &[R] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_selected(&self, row: &R) -> bool {
        self.members
            .iter()
            .any(|member| self.equality.rows_equal(member, row))
    }

    /// Whether every row in `rows` is selected; false when `rows` is empty
    pub fn are_all_selected<'a>(&self, rows: impl IntoIterator<Item = &'a R>) -> bool
    where
        R: 'a,
    {
        let mut any = false;
        for row in rows {
            if !self.is_selected(row) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Add `row` unless an equal row is already selected
    pub fn select(&mut self, row: &R) -> bool {
        if self.is_selected(row) {
            return false;
        }
        self.members.push(row.clone());
        true
    }

    /// Remove every member equal to `row`, returning whether any went
    pub fn deselect(&mut self, row: &R) -> bool {
        let before = self.members.len();
        let equality = &self.equality;
        self.members
            .retain(|member| !equality.rows_equal(member, row));
        before != self.members.len()
    }

    /// Deselect `row` if it is selected, otherwise select it
    pub fn toggle(&mut self, row: &R) {
        if !self.deselect(row) {
            self.members.push(row.clone());
        }
    }

    /// Select exactly `visible`, or clear everything if `visible` is
    /// already fully selected.
    ///
    /// This replaces the selection rather than extending it, so invoking it
    /// twice from an empty selection returns to empty.
    pub fn select_all<'a>(&mut self, visible: impl IntoIterator<Item = &'a R>)
    where
        R: 'a,
    {
        let visible: Vec<&R> = visible.into_iter().collect();
        let all_selected = self.are_all_selected(visible.iter().copied());
        self.members.clear();
        if all_selected {
            return;
        }
        for row in visible {
            self.select(row);
        }
    }

    /// Swap members equal to `old` for `new`, keeping their position.
    ///
    /// A replaced member that now equals an earlier member is dropped, so no
    /// two members are ever equal under the strategy.
    pub fn refresh(&mut self, old: &R, new: &R) {
        let members = std::mem::take(&mut self.members);
        for member in members {
            let member = if self.equality.rows_equal(&member, old) {
                new.clone()
            } else {
                member
            };
            if !self.is_selected(&member) {
                self.members.push(member);
            }
        }
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }
}

impl<R: Clone, E: RowEquality<R> + Default> Default for Selection<R, E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ByValue, User};
    use pretty_assertions::assert_eq;

    fn users(n: usize) -> Vec<User> {
        (1..=n)
            .map(|i| {
                User::new(
                    i.to_string(),
                    format!("user{}", i),
                    format!("user{}@example.com", i),
                    "member",
                )
            })
            .collect()
    }

    fn selected_ids<E: RowEquality<User>>(selection: &Selection<User, E>) -> Vec<String> {
        selection.members().iter().map(|u| u.id.clone()).collect()
    }

    #[test]
    fn test_toggle_is_symmetric() {
        let rows = users(15);
        let mut selection: Selection<User> = Selection::default();

        selection.toggle(&rows[0]);
        assert!(selection.is_selected(&rows[0]));
        selection.toggle(&rows[0]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_uses_equality_not_value() {
        let rows = users(3);
        let mut selection: Selection<User> = Selection::default();
        selection.toggle(&rows[1]);

        let mut edited = rows[1].clone();
        edited.name = "renamed".into();
        assert!(selection.is_selected(&edited));

        selection.toggle(&edited);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_by_value_treats_edited_row_as_different() {
        let rows = users(3);
        let mut selection = Selection::new(ByValue);
        selection.toggle(&rows[1]);

        let mut edited = rows[1].clone();
        edited.name = "renamed".into();
        assert!(!selection.is_selected(&edited));
    }

    #[test]
    fn test_select_all_replaces() {
        let rows = users(20);
        let mut selection: Selection<User> = Selection::default();
        selection.toggle(&rows[15]);

        selection.select_all(&rows[..10]);
        assert_eq!(selected_ids(&selection), (1..=10).map(|i| i.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn test_select_all_twice_restores_empty() {
        let rows = users(10);
        let mut selection: Selection<User> = Selection::default();
        selection.select_all(&rows);
        assert!(selection.are_all_selected(&rows));
        selection.select_all(&rows);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_clears_rows_from_other_pages() {
        let rows = users(20);
        let mut selection: Selection<User> = Selection::default();
        selection.select_all(&rows[..10]);
        selection.toggle(&rows[12]);

        selection.select_all(&rows[..10]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_on_empty_page() {
        let rows = users(3);
        let mut selection: Selection<User> = Selection::default();
        selection.toggle(&rows[0]);

        let empty_page: Vec<User> = Vec::new();
        assert!(!selection.are_all_selected(&empty_page));
        selection.select_all(&empty_page);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_never_duplicates() {
        let rows = users(2);
        let doubled = vec![rows[0].clone(), rows[1].clone(), rows[0].clone()];
        let mut selection: Selection<User> = Selection::default();
        selection.select_all(&doubled);
        assert_eq!(selected_ids(&selection), vec!["1", "2"]);
    }

    #[test]
    fn test_deselect() {
        let rows = users(3);
        let mut selection: Selection<User> = Selection::default();
        selection.toggle(&rows[0]);
        selection.toggle(&rows[2]);

        assert!(selection.deselect(&rows[0]));
        assert!(!selection.deselect(&rows[1]));
        assert_eq!(selected_ids(&selection), vec!["3"]);
    }

    #[test]
    fn test_operations_on_empty_are_noops() {
        let mut selection: Selection<User> = Selection::default();
        selection.clear();
        assert!(!selection.deselect(&users(1)[0]));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_refresh_keeps_by_value_member_selected() {
        let rows = users(2);
        let mut selection = Selection::new(ByValue);
        selection.toggle(&rows[0]);
        selection.toggle(&rows[1]);

        let mut edited = rows[0].clone();
        edited.role = "admin".into();
        selection.refresh(&rows[0], &edited);

        assert!(selection.is_selected(&edited));
        assert!(!selection.is_selected(&rows[0]));
        assert_eq!(selection.members()[0], edited);
    }

    #[test]
    fn test_refresh_drops_member_that_becomes_a_duplicate() {
        let rows = users(3);
        let same_email = |a: &User, b: &User| a.email == b.email;
        let mut selection = Selection::new(same_email);
        selection.toggle(&rows[0]);
        selection.toggle(&rows[1]);
        selection.toggle(&rows[2]);

        let mut edited = rows[0].clone();
        edited.email = rows[1].email.clone();
        selection.refresh(&rows[0], &edited);

        assert_eq!(selected_ids(&selection), vec!["1", "3"]);
        let members = selection.members();
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                assert!(!selection.equality().rows_equal(a, b));
            }
        }
    }
}
