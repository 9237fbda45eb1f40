pub mod fuzzy;
pub mod score;
pub mod time;

pub use score::*;
pub use time::*;

use rayon::prelude::*;
use std::cmp::Ordering;

const MIN_SEARCH_SCORE: f64 = 0.1;

pub trait Identifiable {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn normalized_name(&self) -> &str;
}

/// Generic fuzzy search function built for multithreaded searching.
/// A needle contained in the display name (e.g. `玉里`) always matches.
pub fn search<'a, T>(needle: &str, haystack: &'a [T]) -> Vec<&'a T>
where
    T: Send + Sync + Identifiable,
{
    let needle = needle.trim();
    if needle.is_empty() {
        return Vec::new();
    }
    let normalized_needle = fuzzy::normalize(needle);
    let mut results: Vec<(&T, f64)> = haystack
        .par_iter()
        .filter_map(|hay| {
            let score = if hay.name().contains(needle) {
                1.0
            } else {
                fuzzy::score(&normalized_needle, hay.normalized_name())
            };
            if score > MIN_SEARCH_SCORE {
                Some((hay, score))
            } else {
                None
            }
        })
        .collect();

    // Stable so equal scores keep table order
    results.par_sort_by(|(_, a): &(_, f64), (_, b): &(_, f64)| {
        b.partial_cmp(a).unwrap_or(Ordering::Equal)
    });
    results.into_iter().map(|(entity, _)| entity).collect()
}
