//! Usergrid Core - state engine for a client-side data grid
//!
//! Takes an in-memory collection of records and keeps a filtered,
//! paginated, selectable and editable view over it consistent while the
//! records are mutated. It defines:
//!
//! - `Record` - Trait for the rows the grid manages, plus the `User` row
//! - `RowEquality` - Strategy deciding when two rows are "the same" row
//! - `Dataset` - Authoritative, ordered record store
//! - `filter_records` / `Pagination` - Pure derivation stages
//! - `Selection` / `EditTransaction` - Bulk-action and inline-edit state
//! - `GridState` - The state container and command dispatcher tying them together

mod command;
mod config;
mod dataset;
pub mod edit;
mod equality;
mod error;
mod filter;
mod grid;
pub mod pagination;
mod record;
pub mod selection;
mod user;

pub use command::*;
pub use config::*;
pub use dataset::*;
pub use edit::{CommitOutcome, EditBuffer, EditStart, EditTransaction};
pub use equality::*;
pub use error::*;
pub use filter::*;
pub use grid::*;
pub use pagination::{PageRange, Pagination};
pub use record::*;
pub use selection::Selection;
pub use user::*;
