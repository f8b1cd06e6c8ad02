//! Error types for the mimus-markov crate.

/// Error type for all fallible operations in the mimus-markov crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkovError {
    /// Returned when picking from a distribution with no recorded tokens.
    #[error("cannot pick from an empty distribution")]
    EmptyDistribution,

    /// Returned when a draw does not fall inside any token's cumulative
    /// count range. Only reachable with a replay generator whose recorded
    /// values are inconsistent with the distribution they are drawn against.
    #[error("draw {draw} is outside the cumulative range of a distribution with total {total}")]
    DrawOutOfRange {
        /// The offending draw.
        draw: usize,
        /// Total weight of the distribution.
        total: usize,
    },

    /// Returned when a uniform draw is requested with an empty range.
    #[error("draw bound must be >= 1, got {bound}")]
    InvalidBound {
        /// The invalid bound.
        bound: usize,
    },

    /// Returned when a replay generator has consumed all recorded draws.
    #[error("replay generator has no recorded draws left")]
    ReplayExhausted,

    /// Returned when `next_word` is called on an exhausted walk.
    #[error("walk is exhausted: no current word")]
    WalkExhausted,

    /// Returned when `fix_distribution` is given an empty word list.
    #[error("cannot fix a distribution around an empty word list")]
    EmptyWordList,

    /// Returned when a word required to start a sentence was never recorded
    /// as a start word.
    #[error("word '{word}' is not a recorded start word")]
    NotAStartWord {
        /// The offending word.
        word: String,
    },

    /// Returned when a word in a target sequence was never recorded as a
    /// successor of the word before it.
    #[error("word '{word}' is not a recorded successor of '{of}'")]
    NotASuccessor {
        /// The word that could not be reached.
        word: String,
        /// The predecessor it was required to follow.
        of: String,
    },
}
