//! Criteria matching over the source list.
//!
//! Filtering is a linear scan that materializes every match, in source order.
//! There are no error conditions: criteria referencing unknown authors or
//! genres simply match nothing for that predicate.

use crate::models::{BookRecord, FilterCriteria};
use tracing::instrument;

/// Returns every record in `source` that satisfies all of `criteria`,
/// preserving source order.
#[instrument(level = "debug", skip(source))]
pub fn apply<'a>(source: impl IntoIterator<Item = &'a BookRecord>, criteria: &FilterCriteria) -> Vec<&'a BookRecord> {
    let matches: Vec<&BookRecord> = source.into_iter().filter(|book| criteria.matches(book)).collect();
    tracing::debug!(matches = matches.len(), "Filter applied");
    matches
}
