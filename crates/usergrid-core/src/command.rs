//! Commands accepted by the grid and the events they produce

use crate::{CommitOutcome, EditStart, Record};

/// One user-triggered grid command
#[derive(Debug, Clone)]
pub enum GridCommand<R: Record> {
    /// Replace the search term
    SetSearchTerm(String),
    /// Jump to a page; any integer is accepted and clamped
    GoToPage(i64),
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,
    /// Toggle one row in or out of the selection
    ToggleRow(R),
    /// Select the visible page, or clear if it is already fully selected
    SelectAll,
    ClearSelection,
    /// Open an inline edit on a row
    BeginEdit(R),
    /// Stage a field value in the open edit
    SetField { field: String, value: String },
    CommitEdit,
    CancelEdit,
    /// Row-action delete by identity
    DeleteRow(R::Id),
    /// Bulk delete of the selection
    DeleteSelected,
}

/// What a command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// The search term changed; `matches` is the filtered view length
    SearchChanged { matches: usize },
    /// The current page after a navigation command
    PageChanged(usize),
    /// The selection size after a selection command
    SelectionChanged { selected: usize },
    EditStarted(EditStart),
    /// Whether a staged field value was accepted
    FieldStaged { accepted: bool },
    EditCommitted(CommitOutcome),
    EditCancelled { was_editing: bool },
    /// Number of records removed from the dataset
    RowsDeleted { deleted: usize },
}
