//! Row equality strategies
//!
//! The Selection Manager needs to know when a visible row is "already
//! selected". What counts as the same row is the caller's decision, so it is
//! supplied as a strategy when the grid is constructed.

use crate::Record;

/// Decides whether two rows denote the same row
pub trait RowEquality<R> {
    fn rows_equal(&self, a: &R, b: &R) -> bool;
}

/// Rows are equal when their identities are equal (the default)
#[derive(Debug, Clone, Copy, Default)]
pub struct ByIdentity;

impl<R: Record> RowEquality<R> for ByIdentity {
    fn rows_equal(&self, a: &R, b: &R) -> bool {
        a.id() == b.id()
    }
}

/// Rows are equal only when every field is equal
#[derive(Debug, Clone, Copy, Default)]
pub struct ByValue;

impl<R: PartialEq> RowEquality<R> for ByValue {
    fn rows_equal(&self, a: &R, b: &R) -> bool {
        a == b
    }
}

impl<R, F> RowEquality<R> for F
where
    F: Fn(&R, &R) -> bool,
{
    fn rows_equal(&self, a: &R, b: &R) -> bool {
        self(a, b)
    }
}
