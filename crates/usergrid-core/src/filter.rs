//! Filter stage: search-term matching over configured fields

use crate::Record;

/// Whether any of `fields` contains `term`, ignoring case.
///
/// `term_lower` must already be lowercased. The term is matched literally,
/// so surrounding whitespace is significant. An empty term matches every
/// record.
pub fn record_matches<R: Record>(record: &R, term_lower: &str, fields: &[String]) -> bool {
    if term_lower.is_empty() {
        return true;
    }
    fields.iter().any(|name| {
        record
            .field(name)
            .is_some_and(|value| value.to_lowercase().contains(term_lower))
    })
}

/// Positions (into `records`) of the records matching `term`, in order
pub fn filter_indices<R: Record>(records: &[R], term: &str, fields: &[String]) -> Vec<usize> {
    let term_lower = term.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record_matches(*record, &term_lower, fields))
        .map(|(idx, _)| idx)
        .collect()
}

/// The records matching `term`, in their original relative order
pub fn filter_records<'a, R: Record>(records: &'a [R], term: &str, fields: &[String]) -> Vec<&'a R> {
    filter_indices(records, term, fields)
        .into_iter()
        .map(|idx| &records[idx])
        .collect()
}
