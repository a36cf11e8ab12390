//! Grid state container
//!
//! `GridState` owns the dataset and every piece of view state derived from
//! or layered over it. Data flows one way: dataset, then filter, then page.
//! Selection and editing read rows from those stages and write back only
//! through the dataset.
//!
//! Every command is a single `&mut self` call, so no reader can observe a
//! half-applied transaction (a delete without its selection pruning, a
//! commit without the edit closing).
//!
//! Page policy: any command that changes which records the filtered view
//! holds, their order, or the content of one of them sends the grid back to
//! page 1. Changes that leave the filtered view as it was keep the page.

use crate::pagination::Pagination;
use crate::{
    ByIdentity, CommitOutcome, Dataset, EditBuffer, EditStart, EditTransaction, GridCommand,
    GridConfig, GridEvent, PageRange, Record, Result, RowEquality, Selection, filter_indices,
};

pub struct GridState<R: Record, E = ByIdentity> {
    config: GridConfig,
    dataset: Dataset<R>,
    search_term: String,
    /// Dataset positions of the filtered view, recomputed on every change
    filtered: Vec<usize>,
    pagination: Pagination,
    selection: Selection<R, E>,
    edit: EditTransaction<R>,
}

impl<R: Record, E> std::fmt::Debug for GridState<R, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridState")
            .field("records", &self.dataset.len())
            .field("search_term", &self.search_term)
            .field("filtered", &self.filtered.len())
            .field("pagination", &self.pagination)
            .field("selection", &self.selection)
            .field("editing", &self.edit.is_editing())
            .finish()
    }
}

impl<R: Record> GridState<R, ByIdentity> {
    /// Grid with the default configuration and identity equality
    pub fn from_records(records: impl IntoIterator<Item = R>) -> Self {
        Self::build(records, GridConfig::default(), ByIdentity)
    }
}

impl<R: Record, E: RowEquality<R> + Default> GridState<R, E> {
    pub fn new(records: impl IntoIterator<Item = R>, config: GridConfig) -> Result<Self> {
        Self::with_equality(records, config, E::default())
    }
}

impl<R: Record, E: RowEquality<R>> GridState<R, E> {
    /// Grid whose selection compares rows with `equality`
    pub fn with_equality(
        records: impl IntoIterator<Item = R>,
        config: GridConfig,
        equality: E,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(records, config, equality))
    }

    fn build(records: impl IntoIterator<Item = R>, config: GridConfig, equality: E) -> Self {
        let dataset = Dataset::new(records);
        let filtered = filter_indices(dataset.records(), "", &config.search_fields);
        tracing::debug!(
            "Grid created with {} records, page_size={}",
            dataset.len(),
            config.page_size
        );
        Self {
            pagination: Pagination::new(config.page_size),
            config,
            dataset,
            search_term: String::new(),
            filtered,
            selection: Selection::new(equality),
            edit: EditTransaction::new(),
        }
    }

    // ============ Reads ============

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Every record in display order
    pub fn records(&self) -> &[R] {
        self.dataset.records()
    }

    pub fn has_records(&self) -> bool {
        !self.dataset.is_empty()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Records matching the search term, in display order
    pub fn filtered_rows(&self) -> Vec<&R> {
        self.filtered
            .iter()
            .map(|&idx| &self.dataset.records()[idx])
            .collect()
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The current page of the filtered view
    pub fn visible_rows(&self) -> Vec<&R> {
        page_rows(&self.dataset, &self.filtered, &self.pagination)
    }

    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.filtered.len())
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn can_go_previous(&self) -> bool {
        self.pagination.can_go_previous()
    }

    pub fn can_go_next(&self) -> bool {
        self.pagination.can_go_next(self.filtered.len())
    }

    pub fn page_numbers(&self) -> std::ops::RangeInclusive<usize> {
        self.pagination.page_numbers(self.filtered.len())
    }

    pub fn page_range(&self) -> PageRange {
        self.pagination.range(self.filtered.len())
    }

    /// Selected rows, in selection order
    pub fn selection(&self) -> &[R] {
        self.selection.members()
    }

    pub fn is_selected(&self, row: &R) -> bool {
        self.selection.is_selected(row)
    }

    /// Whether the visible page is non-empty and fully selected
    pub fn are_all_selected(&self) -> bool {
        self.selection.are_all_selected(self.visible_rows())
    }

    pub fn edit_buffer(&self) -> Option<&EditBuffer<R>> {
        self.edit.buffer()
    }

    pub fn is_editing_row(&self, id: &R::Id) -> bool {
        self.edit.is_editing_row(id)
    }

    // ============ Filtering & pagination ============

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search_term {
            return;
        }
        let before = self.filtered_ids();
        self.search_term = term;
        self.refresh_view(before, None);
        tracing::debug!(
            "Search term {:?} matched {} records",
            self.search_term,
            self.filtered.len()
        );
    }

    pub fn go_to_page(&mut self, page: i64) {
        self.pagination.go_to(page, self.filtered.len());
    }

    pub fn first_page(&mut self) {
        self.pagination.first();
    }

    pub fn last_page(&mut self) {
        self.pagination.last(self.filtered.len());
    }

    pub fn next_page(&mut self) {
        self.pagination.next(self.filtered.len());
    }

    pub fn previous_page(&mut self) {
        self.pagination.previous();
    }

    // ============ Selection ============

    /// Deselect `row` if selected, otherwise select the stored version of it.
    ///
    /// The stored version is found with the selection's row equality.
    /// Selecting a row with no stored counterpart is ignored.
    pub fn toggle_row(&mut self, row: &R) {
        if self.selection.deselect(row) {
            return;
        }
        let equality = self.selection.equality();
        let stored = self
            .dataset
            .records()
            .iter()
            .find(|record| equality.rows_equal(record, row));
        match stored {
            Some(current) => {
                self.selection.select(current);
            }
            None => tracing::warn!("Ignoring selection of missing record {:?}", row.id()),
        }
    }

    /// Select the visible page, or clear everything if it is already selected
    pub fn select_all(&mut self) {
        let visible = page_rows(&self.dataset, &self.filtered, &self.pagination);
        self.selection.select_all(visible);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ============ Editing ============

    /// Open an inline edit seeded from the stored version of `row`
    pub fn begin_edit(&mut self, row: &R) -> EditStart {
        match self.dataset.get(&row.id()) {
            Some(current) => self.edit.begin(current),
            None => {
                tracing::warn!("Cannot edit missing record {:?}", row.id());
                EditStart::StaleTarget
            }
        }
    }

    pub fn set_field(&mut self, field: &str, value: &str) -> bool {
        self.edit.set_field(field, value)
    }

    /// Store the open edit's draft and close the edit.
    ///
    /// The edit closes even when its target has been deleted in the
    /// meantime; the dataset is left untouched in that case.
    pub fn commit_edit(&mut self) -> CommitOutcome {
        let Some(buffer) = self.edit.take() else {
            return CommitOutcome::NotEditing;
        };
        let Some(original) = self.dataset.get(buffer.target()) else {
            tracing::warn!(
                "Dropping edit for deleted record {:?}",
                buffer.target()
            );
            return CommitOutcome::StaleTarget;
        };

        let target = buffer.target().clone();
        let committed = buffer.into_draft();
        let touched = (committed != *original).then(|| target.clone());
        self.selection.refresh(original, &committed);

        let before = self.filtered_ids();
        self.dataset.update(committed);
        self.refresh_view(before, touched);
        tracing::debug!("Committed edit for {:?}", target);
        CommitOutcome::Committed
    }

    pub fn cancel_edit(&mut self) -> bool {
        self.edit.cancel()
    }

    // ============ Mutation ============

    /// Row-action delete. Also drops the row from the selection.
    pub fn delete_row(&mut self, id: &R::Id) -> bool {
        let before = self.filtered_ids();
        let Some(removed) = self.dataset.delete_one(id) else {
            return false;
        };
        self.selection.deselect(&removed);
        self.refresh_view(before, None);
        tracing::debug!("Deleted record {:?}", id);
        true
    }

    /// Delete every selected record and clear the selection
    pub fn delete_selected(&mut self) -> usize {
        let ids: Vec<R::Id> = self
            .dataset
            .records()
            .iter()
            .filter(|record| self.selection.is_selected(record))
            .map(Record::id)
            .collect();

        let before = self.filtered_ids();
        let deleted = self.dataset.delete_many(&ids);
        self.selection.clear();
        self.refresh_view(before, None);
        tracing::debug!("Deleted {} selected records", deleted);
        deleted
    }

    /// Replace a stored record outright, bypassing the edit transaction.
    ///
    /// Unknown identities are ignored; nothing is ever inserted.
    pub fn update(&mut self, record: R) -> bool {
        let id = record.id();
        let Some(original) = self.dataset.get(&id) else {
            return false;
        };
        let touched = (record != *original).then(|| id.clone());
        self.selection.refresh(original, &record);

        let before = self.filtered_ids();
        self.dataset.update(record);
        self.refresh_view(before, touched);
        true
    }

    // ============ Dispatch ============

    pub fn dispatch(&mut self, command: GridCommand<R>) -> GridEvent {
        match command {
            GridCommand::SetSearchTerm(term) => {
                self.set_search_term(term);
                GridEvent::SearchChanged {
                    matches: self.filtered_len(),
                }
            }
            GridCommand::GoToPage(page) => {
                self.go_to_page(page);
                GridEvent::PageChanged(self.current_page())
            }
            GridCommand::FirstPage => {
                self.first_page();
                GridEvent::PageChanged(self.current_page())
            }
            GridCommand::PreviousPage => {
                self.previous_page();
                GridEvent::PageChanged(self.current_page())
            }
            GridCommand::NextPage => {
                self.next_page();
                GridEvent::PageChanged(self.current_page())
            }
            GridCommand::LastPage => {
                self.last_page();
                GridEvent::PageChanged(self.current_page())
            }
            GridCommand::ToggleRow(row) => {
                self.toggle_row(&row);
                GridEvent::SelectionChanged {
                    selected: self.selection.len(),
                }
            }
            GridCommand::SelectAll => {
                self.select_all();
                GridEvent::SelectionChanged {
                    selected: self.selection.len(),
                }
            }
            GridCommand::ClearSelection => {
                self.clear_selection();
                GridEvent::SelectionChanged { selected: 0 }
            }
            GridCommand::BeginEdit(row) => GridEvent::EditStarted(self.begin_edit(&row)),
            GridCommand::SetField { field, value } => GridEvent::FieldStaged {
                accepted: self.set_field(&field, &value),
            },
            GridCommand::CommitEdit => GridEvent::EditCommitted(self.commit_edit()),
            GridCommand::CancelEdit => GridEvent::EditCancelled {
                was_editing: self.cancel_edit(),
            },
            GridCommand::DeleteRow(id) => GridEvent::RowsDeleted {
                deleted: usize::from(self.delete_row(&id)),
            },
            GridCommand::DeleteSelected => GridEvent::RowsDeleted {
                deleted: self.delete_selected(),
            },
        }
    }

    // ============ Internals ============

    fn filtered_ids(&self) -> Vec<R::Id> {
        self.filtered
            .iter()
            .map(|&idx| self.dataset.records()[idx].id())
            .collect()
    }

    /// Recompute the filtered view and apply the page policy.
    ///
    /// `before` is the filtered view's identities prior to the change;
    /// `touched` names a record whose content changed.
    fn refresh_view(&mut self, before: Vec<R::Id>, touched: Option<R::Id>) {
        self.filtered = filter_indices(
            self.dataset.records(),
            &self.search_term,
            &self.config.search_fields,
        );
        let after = self.filtered_ids();
        let content_changed =
            touched.is_some_and(|id| before.contains(&id) || after.contains(&id));

        if before != after || content_changed {
            self.pagination.reset();
        } else {
            self.pagination.clamp_to(self.filtered.len());
        }
    }
}

/// Rows of the current page, borrowed straight from the dataset
fn page_rows<'a, R: Record>(
    dataset: &'a Dataset<R>,
    filtered: &[usize],
    pagination: &Pagination,
) -> Vec<&'a R> {
    filtered[pagination.bounds(filtered.len())]
        .iter()
        .map(|&idx| &dataset.records()[idx])
        .collect()
}
