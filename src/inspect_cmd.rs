use anyhow::Result;

use mimus_markov::MarkovChain;

use crate::cli::InspectArgs;
use crate::config::MimusConfig;
use crate::corpus;

/// Run the `inspect` subcommand: train, then print the chain.
pub fn run(args: InspectArgs) -> Result<()> {
    let config = MimusConfig::load(&args.config)?;
    let corpus_path = args.corpus.or(config.corpus.path).ok_or_else(|| {
        anyhow::anyhow!("no corpus path: set [corpus].path in config or use --corpus")
    })?;

    let mut chain = match config.seed {
        Some(s) => MarkovChain::from_seed(s),
        None => MarkovChain::new(),
    };
    let stats = corpus::train_from_file(&mut chain, &corpus_path, config.corpus.column)?;

    println!(
        "{} lines, {} sentences, {} start words, {} chain words",
        stats.lines,
        stats.sentences,
        chain.start_words().len(),
        chain.len()
    );
    println!("start words: {}", chain.start_words());
    print!("{chain}");

    Ok(())
}
