//! Search Pipeline
//!
//! The pure filter/sort pass behind the results page. Filters run
//! conjunctively, then a stable sort orders what survived.

pub mod filters;
pub mod sort;

use shared::models::Hotel;
use shared::query::SearchQuery;

/// Apply a query to a catalog snapshot
///
/// Total over its inputs: an empty or partially loaded catalog and
/// over-tight filters yield an empty sequence, never an error. The inputs
/// are left untouched; the result borrows from the catalog slice.
pub fn apply<'a>(hotels: &'a [Hotel], query: &SearchQuery) -> Vec<&'a Hotel> {
    let mut results: Vec<&Hotel> = hotels
        .iter()
        .filter(|hotel| filters::matches_query(hotel, query))
        .collect();

    sort::sort_results(&mut results, query.sort);

    tracing::debug!(
        candidates = hotels.len(),
        matches = results.len(),
        sort = query.sort.as_str(),
        "applied search query"
    );

    results
}
