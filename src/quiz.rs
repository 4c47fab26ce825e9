//! Quiz draws: choose one question the player has not seen yet.

use std::collections::HashSet;

use rand::Rng;

use crate::types::Question;

/// Drops every candidate whose id appears in `previous`.
pub fn unseen(candidates: Vec<Question>, previous: &[i64]) -> Vec<Question> {
    if previous.is_empty() {
        return candidates;
    }
    let seen: HashSet<i64> = previous.iter().copied().collect();
    candidates.into_iter().filter(|q| !seen.contains(&q.id)).collect()
}

/// Picks one element uniformly at random, or `None` if there is nothing left.
pub fn pick<T, R: Rng + ?Sized>(mut candidates: Vec<T>, rng: &mut R) -> Option<T> {
    if candidates.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..candidates.len());
    Some(candidates.swap_remove(idx))
}

/// Filters out previously seen questions and draws one of the rest.
pub fn draw<R: Rng + ?Sized>(candidates: Vec<Question>, previous: &[i64], rng: &mut R) -> Option<Question> {
    pick(unseen(candidates, previous), rng)
}
