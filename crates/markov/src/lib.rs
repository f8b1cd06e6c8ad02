//! First-order Markov chain over word bigrams.
//!
//! This crate models sentences as a first-order Markov chain: training
//! records how often each word follows each other word (and how often words
//! start and end sentences), and generation walks the chain, sampling each
//! successor in proportion to its recorded frequency.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │    train      │────▶│  Distribution  │────▶│      walk        │
//!  │  (bigrams)    │     │  (frequencies) │     │  (reset / next)  │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! All sampling flows through a pluggable [`NumberGenerator`]; swapping in a
//! [`ReplayNumberGenerator`] (which [`MarkovChain::fix_distribution`] does)
//! makes a walk reproduce an exact target sentence, which is how generated
//! output is verified.
//!
//! # Quick start
//!
//! ```rust
//! use mimus_markov::MarkovChain;
//!
//! let mut chain = MarkovChain::from_seed(42);
//! chain.train(["a", "table"].map(String::from));
//! chain.train(["a", "banana"].map(String::from));
//!
//! chain.reset()?;
//! let mut sentence = Vec::new();
//! while chain.has_next() {
//!     sentence.push(chain.next_word()?);
//! }
//! assert_eq!(sentence[0], "a");
//! # Ok::<(), mimus_markov::MarkovError>(())
//! ```

pub mod chain;
pub mod distribution;
pub mod error;
pub mod generator;

pub use chain::MarkovChain;
pub use distribution::Distribution;
pub use error::MarkovError;
pub use generator::{NumberGenerator, RandomNumberGenerator, ReplayNumberGenerator};
