use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level mimus configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MimusConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Corpus settings.
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// Tweet assembly settings.
    #[serde(default)]
    pub tweet: TweetConfig,
}

/// Where the training text comes from.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorpusConfig {
    /// Path to the corpus file (one tweet per line, or a naive CSV).
    pub path: Option<PathBuf>,

    /// Comma-separated field holding the tweet text; the whole line is the
    /// tweet when absent.
    #[serde(default)]
    pub column: Option<usize>,
}

/// How tweets are assembled from chain walks.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TweetConfig {
    /// Character budget per tweet.
    #[serde(default = "default_length")]
    pub length: usize,

    /// Number of tweets to generate.
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_length() -> usize {
    280
}
fn default_count() -> usize {
    10
}

impl Default for TweetConfig {
    fn default() -> Self {
        Self {
            length: default_length(),
            count: default_count(),
        }
    }
}

impl MimusConfig {
    /// Loads the configuration at `path`, falling back to pure defaults when
    /// no such file exists.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}
