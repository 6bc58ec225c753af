//! Caller-side random selection.
//!
//! Picking an item is deliberately not store logic: the UI picks, then
//! reports the result through
//! [`DecisionStore::record_selection`](crate::store::DecisionStore::record_selection).
//! These helpers cover the pick itself, including the empty-list guard the
//! caller is responsible for.

use rand::Rng;
use rand::seq::SliceRandom;

/// Picks one element uniformly at random, or `None` if `items` is empty.
pub fn pick_uniform<'a, T>(items: &'a [T], rng: &mut impl Rng) -> Option<&'a T> {
    items.choose(rng)
}

/// [`pick_uniform`] with the thread-local RNG.
pub fn pick<T>(items: &[T]) -> Option<&T> {
    pick_uniform(items, &mut rand::thread_rng())
}
