//! Frequency-weighted token multisets with stable insertion order.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;

use crate::error::MarkovError;
use crate::generator::NumberGenerator;

/// A weighted multiset over tokens.
///
/// Records how often each token has been observed and supports selection
/// weighted by those counts. Every distinct token keeps the zero-based index
/// at which it was first recorded; `pick` walks tokens in exactly that order,
/// so a given draw maps to the same token for a given recording history. That
/// stability is what makes recorded draw sequences replayable.
///
/// The token type is unconstrained: in particular `Option<String>` is used
/// for successor tables, where `None` is the end-of-sentence sentinel.
#[derive(Debug, Clone)]
pub struct Distribution<T> {
    counts: HashMap<T, usize>,
    /// Distinct tokens in first-seen order.
    order: Vec<T>,
    total: usize,
}

impl<T> Distribution<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates an empty distribution.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            order: Vec::new(),
            total: 0,
        }
    }

    /// Records one occurrence of `token`.
    ///
    /// A token seen for the first time is appended to the stable order and
    /// starts at count 1; its index never changes afterwards.
    pub fn record(&mut self, token: T) {
        self.total += 1;
        match self.counts.entry(token) {
            Entry::Occupied(mut entry) => *entry.get_mut() += 1,
            Entry::Vacant(entry) => {
                self.order.push(entry.key().clone());
                entry.insert(1);
            }
        }
    }

    /// Returns the recorded count for `token`, or 0 if never recorded.
    pub fn count<Q>(&self, token: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Returns the stable first-seen index of `token`, or `None` if it was
    /// never recorded.
    pub fn index_of<Q>(&self, token: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.order.iter().position(|t| t.borrow() == token)
    }

    /// Returns the smallest draw that `pick` maps to `token`, or `None` if
    /// the token was never recorded.
    ///
    /// This is the lower bound of the token's cumulative-count range: token
    /// `i` owns the half-open draw range starting at the sum of all counts
    /// recorded before it in the stable order. Replaying this value through
    /// `pick` therefore yields exactly `token`, which is not true of the
    /// ordinal [`index_of`](Self::index_of) once any earlier token has a
    /// count above 1.
    pub fn draw_for<Q>(&self, token: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut cumulative = 0;
        for t in &self.order {
            if t.borrow() == token {
                return Some(cumulative);
            }
            cumulative += self.counts[t.borrow()];
        }
        None
    }

    /// Total number of recorded occurrences (0 for an empty distribution).
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct recorded tokens.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The distinct tokens in stable first-seen order.
    pub fn tokens(&self) -> &[T] {
        &self.order
    }

    /// Iterates `(token, count)` pairs in stable first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = (&T, usize)> {
        self.order.iter().map(|t| (t, self.counts[t]))
    }

    /// Picks a token with probability proportional to its recorded count.
    ///
    /// Draws `r` in `[0, total)` from `generator`, then walks the stable
    /// token order accumulating counts until the cumulative sum exceeds `r`.
    /// Token `i` thus owns the half-open range
    /// `[cumulative_before_i, cumulative_before_i + count_i)`, and `r` falls
    /// into exactly one range.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::EmptyDistribution`] if nothing has been
    /// recorded, [`MarkovError::DrawOutOfRange`] if a replayed draw is not
    /// below the total, and propagates generator failures.
    pub fn pick(&self, generator: &mut dyn NumberGenerator) -> Result<T, MarkovError> {
        if self.total == 0 {
            return Err(MarkovError::EmptyDistribution);
        }
        let draw = generator.next(self.total)?;
        let mut cumulative = 0;
        for token in &self.order {
            cumulative += self.counts[token];
            if cumulative > draw {
                return Ok(token.clone());
            }
        }
        Err(MarkovError::DrawOutOfRange {
            draw,
            total: self.total,
        })
    }
}

impl<T> Default for Distribution<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for Distribution<T>
where
    T: Eq + Hash + Clone + fmt::Display,
{
    /// Renders `token: count` pairs in stable first-seen order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (token, count) in self.entries() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{token}: {count}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{RandomNumberGenerator, ReplayNumberGenerator};

    fn dist_of(tokens: &[&str]) -> Distribution<String> {
        let mut dist = Distribution::new();
        for t in tokens {
            dist.record(t.to_string());
        }
        dist
    }

    #[test]
    fn record_and_count() {
        let dist = dist_of(&["a", "b", "a", "a"]);
        assert_eq!(dist.count("a"), 3);
        assert_eq!(dist.count("b"), 1);
        assert_eq!(dist.count("c"), 0);
    }

    #[test]
    fn total_matches_sum_of_counts() {
        let dist = dist_of(&["x", "y", "x", "z", "z", "z"]);
        let sum: usize = dist.tokens().iter().map(|t| dist.count(t.as_str())).sum();
        assert_eq!(dist.total(), sum);
        assert_eq!(dist.total(), 6);
    }

    #[test]
    fn empty_distribution() {
        let dist: Distribution<String> = Distribution::new();
        assert_eq!(dist.total(), 0);
        assert_eq!(dist.len(), 0);
        assert!(dist.is_empty());
        assert_eq!(dist.index_of("a"), None);
        assert_eq!(dist.draw_for("a"), None);
    }

    #[test]
    fn indices_are_dense_and_stable() {
        let mut dist = dist_of(&["a", "b", "c"]);
        assert_eq!(dist.index_of("a"), Some(0));
        assert_eq!(dist.index_of("b"), Some(1));
        assert_eq!(dist.index_of("c"), Some(2));

        // Re-recording existing tokens must not move anything.
        dist.record("c".to_string());
        dist.record("a".to_string());
        assert_eq!(dist.index_of("a"), Some(0));
        assert_eq!(dist.index_of("b"), Some(1));
        assert_eq!(dist.index_of("c"), Some(2));

        // Indices are exactly {0, .., k-1}: no gaps, no repeats.
        let mut seen: Vec<usize> = dist
            .tokens()
            .iter()
            .map(|t| dist.index_of(t.as_str()).unwrap())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn draw_for_skips_full_count_ranges() {
        // With counts {"a": 2, "b": 1}, "b" owns draws starting at 2, while
        // its ordinal index is 1. Replaying the ordinal would pick "a".
        let dist = dist_of(&["a", "a", "b"]);
        assert_eq!(dist.index_of("b"), Some(1));
        assert_eq!(dist.draw_for("b"), Some(2));
        assert_eq!(dist.draw_for("a"), Some(0));

        let mut replay = ReplayNumberGenerator::new(vec![2]);
        assert_eq!(dist.pick(&mut replay).unwrap(), "b");
    }

    #[test]
    fn pick_empty_errors() {
        let dist: Distribution<String> = Distribution::new();
        let mut generator = RandomNumberGenerator::from_seed(1);
        assert!(matches!(
            dist.pick(&mut generator),
            Err(MarkovError::EmptyDistribution)
        ));
    }

    #[test]
    fn pick_maps_each_draw_to_its_range_owner() {
        let dist = dist_of(&["a", "a", "b", "c"]);
        // Ranges: a -> [0, 2), b -> [2, 3), c -> [3, 4).
        for (draw, expected) in [(0, "a"), (1, "a"), (2, "b"), (3, "c")] {
            let mut replay = ReplayNumberGenerator::new(vec![draw]);
            assert_eq!(dist.pick(&mut replay).unwrap(), expected, "draw {draw}");
        }
    }

    #[test]
    fn pick_draw_out_of_range_errors() {
        let dist = dist_of(&["a", "b"]);
        let mut replay = ReplayNumberGenerator::new(vec![2]);
        assert!(matches!(
            dist.pick(&mut replay),
            Err(MarkovError::DrawOutOfRange { draw: 2, total: 2 })
        ));
    }

    #[test]
    fn pick_frequencies_track_counts() {
        // 1 "a" : 3 "b" should pick "b" about three quarters of the time.
        let dist = dist_of(&["a", "b", "b", "b"]);
        let mut generator = RandomNumberGenerator::from_seed(42);
        let n = 10_000;
        let mut b_count = 0usize;
        for _ in 0..n {
            if dist.pick(&mut generator).unwrap() == "b" {
                b_count += 1;
            }
        }
        let frac = b_count as f64 / n as f64;
        assert!(
            (frac - 0.75).abs() < 0.03,
            "'b' frequency {frac}, expected ~0.75"
        );
    }

    #[test]
    fn end_sentinel_is_a_recordable_token() {
        let mut dist: Distribution<Option<String>> = Distribution::new();
        dist.record(Some("word".to_string()));
        dist.record(None);
        dist.record(None);
        assert_eq!(dist.count(&None::<String>), 2);
        assert_eq!(dist.index_of(&None::<String>), Some(1));
        assert_eq!(dist.draw_for(&None::<String>), Some(1));
        assert_eq!(dist.total(), 3);
    }

    #[test]
    fn display_renders_in_stable_order() {
        let dist = dist_of(&["table", "banana", "banana"]);
        assert_eq!(dist.to_string(), "table: 1, banana: 2");
    }

    #[test]
    fn entries_walk_stable_order() {
        let dist = dist_of(&["c", "a", "b", "a"]);
        let pairs: Vec<(String, usize)> = dist
            .entries()
            .map(|(t, c)| (t.clone(), c))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("c".to_string(), 1),
                ("a".to_string(), 2),
                ("b".to_string(), 1)
            ]
        );
    }
}
