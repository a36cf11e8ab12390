//! The row abstraction shared by every grid stage

use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

/// A row managed by the grid.
///
/// The engine assumes nothing about a record beyond a stable identity and
/// fields that can be read and written by name. Field values are exposed as
/// text because that is what the search term is matched against and what
/// inline editing produces. `PartialEq` compares full content and tells the
/// grid whether a write actually changed a row.
pub trait Record: Clone + Debug + PartialEq {
    /// Stable identity distinguishing records regardless of field edits
    type Id: Clone + Eq + Hash + Debug;

    /// The record's identity
    fn id(&self) -> Self::Id;

    /// Read a field by name, `None` when the record has no such field
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Write a field by name.
    ///
    /// Returns false when the field does not exist or may not be edited.
    /// The identity field must never be writable.
    fn set_field(&mut self, name: &str, value: &str) -> bool;
}
