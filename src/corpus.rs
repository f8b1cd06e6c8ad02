use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use mimus_io::LineSource;
use mimus_markov::MarkovChain;
use mimus_text::{extract_column, sentences};

/// Counters describing one training pass.
#[derive(Debug, Default)]
pub struct TrainStats {
    /// Corpus lines read.
    pub lines: usize,
    /// Lines skipped for lacking the configured CSV column.
    pub skipped_lines: usize,
    /// Sentences fed to the chain.
    pub sentences: usize,
}

/// Trains `chain` on every sentence of the corpus at `path`.
///
/// When `column` is set, the tweet text is that comma-separated field of
/// each line; lines with too few fields are skipped. Lines are read lazily
/// and consumed exactly once.
pub fn train_from_file(
    chain: &mut MarkovChain,
    path: &Path,
    column: Option<usize>,
) -> Result<TrainStats> {
    let source = LineSource::open(path)
        .with_context(|| format!("failed to open corpus: {}", path.display()))?;

    let mut stats = TrainStats::default();
    for line in source {
        stats.lines += 1;
        let text: &str = match column {
            Some(c) => match extract_column(&line, c) {
                Some(t) => t,
                None => {
                    debug!(line = stats.lines, "skipping line without tweet column");
                    stats.skipped_lines += 1;
                    continue;
                }
            },
            None => &line,
        };
        for sentence in sentences(text) {
            chain.train(sentence);
            stats.sentences += 1;
        }
    }

    info!(
        lines = stats.lines,
        skipped = stats.skipped_lines,
        sentences = stats.sentences,
        words = chain.len(),
        "training complete"
    );
    Ok(stats)
}
