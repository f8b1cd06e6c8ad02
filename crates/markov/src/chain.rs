//! First-order bigram chain: training, random walks, forced walks.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::distribution::Distribution;
use crate::error::MarkovError;
use crate::generator::{NumberGenerator, RandomNumberGenerator, ReplayNumberGenerator};

/// A first-order Markov chain over word bigrams.
///
/// Training records, for every observed word, how often each word follows it
/// and how often a sentence ends after it, plus how often each word starts a
/// sentence. Walking the chain replays that frequency information: `reset`
/// samples a start word, and each `next_word` call returns the current word
/// after sampling its successor as the new cursor, until the end sentinel is
/// drawn.
///
/// Successor tables use `None` as the end-of-sentence sentinel; it is never
/// equal to a real word. All sampling goes through the chain's single
/// [`NumberGenerator`], which [`fix_distribution`](Self::fix_distribution)
/// can swap for a replay recording to force an exact walk.
#[derive(Debug)]
pub struct MarkovChain {
    /// Successor frequencies per observed predecessor word. Ordered keys are
    /// for deterministic iteration and printing only.
    chain: BTreeMap<String, Distribution<Option<String>>>,
    /// How often each word has started a training sentence.
    start_words: Distribution<String>,
    /// Walk cursor: the word the next `next_word` call will return, or
    /// `None` once the end sentinel has been drawn.
    current: Option<String>,
    generator: Box<dyn NumberGenerator>,
}

impl MarkovChain {
    /// Creates an empty chain backed by an OS-seeded random generator.
    pub fn new() -> Self {
        Self::with_generator(Box::new(RandomNumberGenerator::new()))
    }

    /// Creates an empty chain with a reproducible random generator.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_generator(Box::new(RandomNumberGenerator::from_seed(seed)))
    }

    /// Creates an empty chain that draws from `generator`.
    pub fn with_generator(generator: Box<dyn NumberGenerator>) -> Self {
        Self {
            chain: BTreeMap::new(),
            start_words: Distribution::new(),
            current: None,
            generator,
        }
    }

    /// Records one observation of `second` following `first`.
    ///
    /// `second` may be the end sentinel (`None`), meaning a sentence ended
    /// after `first`.
    pub fn add_bigram(&mut self, first: String, second: Option<String>) {
        self.chain.entry(first).or_default().record(second);
    }

    /// Adds one sentence of training data.
    ///
    /// The first word is recorded as a start word; each adjacent pair is
    /// recorded as a bigram; the last word is recorded as ending a sentence.
    /// The sentence is consumed exactly once, in order. An empty sentence is
    /// a no-op.
    pub fn train<I>(&mut self, sentence: I)
    where
        I: IntoIterator<Item = String>,
    {
        let mut words = sentence.into_iter();
        let Some(first) = words.next() else {
            return;
        };
        self.start_words.record(first.clone());
        let mut previous = first;
        for word in words {
            self.add_bigram(previous, Some(word.clone()));
            previous = word;
        }
        self.add_bigram(previous, None);
    }

    /// Returns the successor distribution for `word`, or `None` if the word
    /// was never seen as a predecessor.
    pub fn get(&self, word: &str) -> Option<&Distribution<Option<String>>> {
        self.chain.get(word)
    }

    /// The distribution of sentence-starting words.
    pub fn start_words(&self) -> &Distribution<String> {
        &self.start_words
    }

    /// Number of distinct words observed as predecessors.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns true if the chain has no recorded bigrams.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Places the walk cursor.
    ///
    /// `Some(word)` makes the next `next_word` call return `word`; the word
    /// need not exist in the chain (if it has no successors the walk stalls
    /// on it). `None` clears the cursor, so `has_next` is false regardless
    /// of prior state.
    pub fn reset_to(&mut self, start: Option<String>) {
        self.current = start;
    }

    /// Starts a new walk from a sampled start word.
    ///
    /// If no sentence has been trained, the cursor is cleared instead and
    /// the walk is immediately exhausted.
    ///
    /// # Errors
    ///
    /// Propagates generator failures from the start-word pick.
    pub fn reset(&mut self) -> Result<(), MarkovError> {
        if self.start_words.total() == 0 {
            self.reset_to(None);
            return Ok(());
        }
        let start = self.start_words.pick(self.generator.as_mut())?;
        self.reset_to(Some(start));
        Ok(())
    }

    /// Returns true if `next_word` will return a word.
    pub fn has_next(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the current word and advances the cursor.
    ///
    /// The new cursor is a successor sampled from the current word's
    /// distribution, possibly the end sentinel. A word with no successor
    /// table at all leaves the cursor unchanged: the walk stalls rather
    /// than terminates on untrained words.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::WalkExhausted`] when the cursor is unset, and
    /// propagates pick failures (the cursor is left in place so the failure
    /// is observable, not swallowed).
    pub fn next_word(&mut self) -> Result<String, MarkovError> {
        let word = self.current.clone().ok_or(MarkovError::WalkExhausted)?;
        if let Some(successors) = self.chain.get(&word) {
            self.current = successors.pick(self.generator.as_mut())?;
        }
        Ok(word)
    }

    /// Rewires the chain's generator so subsequent walks reproduce `words`.
    ///
    /// Walks the target sequence, recording for each transition the exact
    /// draw that makes `pick` select the required next word (the lower bound
    /// of its cumulative-count range). When a word does not follow its
    /// predecessor directly but the predecessor can end a sentence and the
    /// word can start one, the sentence boundary is crossed implicitly: an
    /// end-sentinel draw plus a start-word draw are recorded. One final
    /// end-sentinel draw is appended when the last word can end a sentence,
    /// so the forced walk terminates cleanly.
    ///
    /// With `record_start`, the first word's start draw is recorded too, for
    /// walks that begin with [`reset`](Self::reset) rather than
    /// [`reset_to`](Self::reset_to).
    ///
    /// Only the generator is replaced; no frequency table is touched.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::EmptyWordList`] for an empty target,
    /// [`MarkovError::NotAStartWord`] if the first word (or a word opening
    /// an implicit restart) never started a training sentence, and
    /// [`MarkovError::NotASuccessor`] for a transition the training data
    /// cannot produce.
    pub fn fix_distribution<S>(
        &mut self,
        words: &[S],
        record_start: bool,
    ) -> Result<(), MarkovError>
    where
        S: AsRef<str>,
    {
        let first = words.first().ok_or(MarkovError::EmptyWordList)?.as_ref();
        let Some(start_draw) = self.start_words.draw_for(first) else {
            return Err(MarkovError::NotAStartWord {
                word: first.to_string(),
            });
        };

        let mut draws = Vec::new();
        if record_start {
            draws.push(start_draw);
        }

        let mut current = first.to_string();
        for next in &words[1..] {
            let next = next.as_ref();
            let successors = self.chain.get(&current);
            match successors.and_then(|d| d.draw_for(&Some(next.to_string()))) {
                Some(draw) => draws.push(draw),
                None => {
                    // Sentence boundary: the current word must be able to
                    // end a sentence and the next word to start one.
                    let end_draw = successors
                        .and_then(|d| d.draw_for(&None::<String>))
                        .ok_or_else(|| MarkovError::NotASuccessor {
                            word: next.to_string(),
                            of: current.clone(),
                        })?;
                    let restart_draw = self.start_words.draw_for(next).ok_or_else(|| {
                        MarkovError::NotAStartWord {
                            word: next.to_string(),
                        }
                    })?;
                    draws.push(end_draw);
                    draws.push(restart_draw);
                }
            }
            current = next.to_string();
        }

        // Close the final sentence when the last word can end one, so the
        // forced walk terminates instead of exhausting the replay mid-pick.
        if let Some(end_draw) = self
            .chain
            .get(&current)
            .and_then(|d| d.draw_for(&None::<String>))
        {
            draws.push(end_draw);
        }

        debug!(n_draws = draws.len(), "distribution fixed to replay recording");
        self.generator = Box::new(ReplayNumberGenerator::new(draws));
        Ok(())
    }
}

impl Default for MarkovChain {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for MarkovChain {
    type Item = Result<String, MarkovError>;

    /// Yields walk words until the walk is exhausted.
    ///
    /// A failed draw is yielded as `Err` with the cursor left in place;
    /// callers should stop at the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            Some(self.next_word())
        } else {
            None
        }
    }
}

impl fmt::Display for MarkovChain {
    /// Renders one `word: successor: count, ...` line per chain entry, in
    /// key order, with the end sentinel printed as `<END>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (word, successors) in &self.chain {
            write!(f, "{word}: ")?;
            let mut first = true;
            for (successor, count) in successors.entries() {
                if !first {
                    write!(f, ", ")?;
                }
                match successor {
                    Some(s) => write!(f, "{s}: {count}")?,
                    None => write!(f, "<END>: {count}")?,
                }
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
