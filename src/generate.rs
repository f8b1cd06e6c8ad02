use std::fs;

use anyhow::{Context, Result, ensure};
use tracing::info;

use mimus_markov::MarkovChain;

use crate::cli::GenerateArgs;
use crate::config::MimusConfig;
use crate::corpus;

/// Run the `generate` subcommand: train, then assemble tweets.
pub fn run(args: GenerateArgs) -> Result<()> {
    let config = MimusConfig::load(&args.config)?;

    // CLI overrides win over config.
    let corpus_path = args.corpus.or(config.corpus.path).ok_or_else(|| {
        anyhow::anyhow!("no corpus path: set [corpus].path in config or use --corpus")
    })?;
    let count = args.count.unwrap_or(config.tweet.count);
    let length = args.length.unwrap_or(config.tweet.length);
    let seed = args.seed.or(config.seed);
    ensure!(length > 0, "tweet length must be >= 1");

    let mut chain = match seed {
        Some(s) => MarkovChain::from_seed(s),
        None => MarkovChain::new(),
    };

    corpus::train_from_file(&mut chain, &corpus_path, config.corpus.column)?;
    ensure!(
        chain.start_words().total() > 0,
        "corpus produced no training sentences: {}",
        corpus_path.display()
    );

    let mut tweets = Vec::with_capacity(count);
    for i in 0..count {
        let tweet = compose_tweet(&mut chain, length)
            .with_context(|| format!("failed to compose tweet {}", i + 1))?;
        tweets.push(tweet);
    }
    info!(count = tweets.len(), "tweets assembled");

    match &args.output {
        Some(path) => {
            fs::write(path, tweets.join("\n") + "\n")
                .with_context(|| format!("failed to write tweets: {}", path.display()))?;
            info!(path = %path.display(), "tweets written");
        }
        None => {
            for tweet in &tweets {
                println!("{tweet}");
            }
        }
    }

    Ok(())
}

/// Assembles one tweet of at most `budget` characters.
///
/// Sentences come from repeated reset-and-walk passes over the chain; each
/// is joined with spaces, terminated with a period, and appended while it
/// fits. A first sentence longer than the whole budget is truncated at a
/// word boundary so the tweet is never empty.
fn compose_tweet(chain: &mut MarkovChain, budget: usize) -> Result<String> {
    let mut tweet = String::new();
    loop {
        let words = walk_sentence(chain)?;
        ensure!(!words.is_empty(), "chain produced an empty sentence");
        let mut sentence = words.join(" ");
        sentence.push('.');

        if tweet.is_empty() {
            if sentence.len() > budget {
                return Ok(truncate_at_word(&sentence, budget));
            }
            tweet = sentence;
        } else {
            if tweet.len() + 1 + sentence.len() > budget {
                break;
            }
            tweet.push(' ');
            tweet.push_str(&sentence);
        }
    }
    Ok(tweet)
}

/// Runs one full walk: reset, then next until the end sentinel.
fn walk_sentence(chain: &mut MarkovChain) -> Result<Vec<String>> {
    chain.reset().context("start-word pick failed")?;
    let mut words = Vec::new();
    while chain.has_next() {
        words.push(chain.next_word().context("successor pick failed")?);
    }
    Ok(words)
}

/// Cuts `text` at the last word boundary that fits in `budget` characters.
///
/// Cleaned corpus words are ASCII, so byte indexing is safe here.
fn truncate_at_word(text: &str, budget: usize) -> String {
    match text[..budget].rfind(' ') {
        Some(cut) => text[..cut].to_string(),
        None => text[..budget].to_string(),
    }
}
