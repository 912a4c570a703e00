//! `likeness score` — similarity of two strings or token lists.
//!
//! The measure comes from an optional TOML config file; flags given on the
//! command line override the file.

use crate::cmd::split_tokens;
use crate::output::{CliError, OutputMode, render, render_error};
use clap::{Args, ValueEnum};
use likeness_core::ConfigError;
use likeness_core::config::{MeasureConfig, MeasureKind, load_config};
use likeness_core::tokenize::TokenizerKind;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MeasureArg {
    Jaccard,
    Levenshtein,
}

impl From<MeasureArg> for MeasureKind {
    fn from(arg: MeasureArg) -> Self {
        match arg {
            MeasureArg::Jaccard => Self::Jaccard,
            MeasureArg::Levenshtein => Self::Levenshtein,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TokenizerArg {
    Char,
    Whitespace,
    Qgram,
}

impl From<TokenizerArg> for TokenizerKind {
    fn from(arg: TokenizerArg) -> Self {
        match arg {
            TokenizerArg::Char => Self::Char,
            TokenizerArg::Whitespace => Self::Whitespace,
            TokenizerArg::Qgram => Self::QGram,
        }
    }
}

#[derive(Args, Debug)]
#[command(
    about = "Score the similarity of two inputs",
    long_about = "Score two strings (or two comma-separated token lists) with a Jaccard or\n\
                  Levenshtein measure. Scores are in [0, 1]; bag-semantics Jaccard tops out at 0.5.",
    after_help = "EXAMPLES:\n    # Edit-distance similarity\n    likeness score kitten sitting --measure levenshtein\n\n\
                  # Count adjacent swaps as one edit\n    likeness score ab ba --measure levenshtein --transposition\n\n\
                  # Bag Jaccard over padded trigrams\n    likeness score night nacht --bag --tokenizer qgram -q 3 --padding\n\n\
                  # Pre-tokenized input\n    likeness score x,x x --tokens --bag --json"
)]
pub struct ScoreArgs {
    /// First input.
    pub a: String,

    /// Second input.
    pub b: String,

    /// Similarity measure (default: jaccard, or the config file's choice).
    #[arg(short, long, value_enum)]
    pub measure: Option<MeasureArg>,

    /// Jaccard: count duplicate tokens (multiset semantics).
    #[arg(long)]
    pub bag: bool,

    /// Levenshtein: count an adjacent swap as a single edit.
    #[arg(long)]
    pub transposition: bool,

    /// Jaccard tokenizer for string inputs.
    #[arg(short, long, value_enum)]
    pub tokenizer: Option<TokenizerArg>,

    /// Q-gram size for `--tokenizer qgram`.
    #[arg(short, long, value_name = "N")]
    pub q: Option<usize>,

    /// Frame q-grams with `#` padding.
    #[arg(long)]
    pub padding: bool,

    /// Treat both inputs as comma-separated token lists.
    #[arg(long)]
    pub tokens: bool,

    /// TOML measure config; flags override its values.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl ScoreArgs {
    fn resolve_config(&self) -> Result<MeasureConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => MeasureConfig::default(),
        };

        if let Some(measure) = self.measure {
            config.measure.kind = measure.into();
        }
        config.measure.bag_semantics |= self.bag;
        config.measure.with_transposition |= self.transposition;
        if let Some(tokenizer) = self.tokenizer {
            config.tokenizer.kind = Some(tokenizer.into());
        }
        if let Some(q) = self.q {
            config.tokenizer.size = Some(q);
        }
        config.tokenizer.padding |= self.padding;

        Ok(config)
    }
}

/// JSON shape of `likeness score`.
#[derive(Debug, Serialize)]
pub struct ScoreOutput {
    pub measure: &'static str,
    pub bag_semantics: bool,
    pub with_transposition: bool,
    /// `None` when the inputs were pre-tokenized.
    pub tokenizer: Option<&'static str>,
    pub score: f64,
}

/// Execute `likeness score`.
///
/// # Errors
///
/// Returns an error if the config file is missing or invalid, or if the
/// resulting measure configuration is inconsistent.
pub fn run_score(args: &ScoreArgs, output: OutputMode) -> anyhow::Result<()> {
    if let Some(path) = args.config.as_ref().filter(|path| !path.exists()) {
        render_error(
            output,
            &CliError {
                message: format!("config file {} not found", path.display()),
                suggestion: Some("pass an existing TOML file or drop --config".to_string()),
                error_code: Some("config_not_found".to_string()),
            },
        )?;
        anyhow::bail!("config file {} not found", path.display());
    }

    let built = args
        .resolve_config()
        .and_then(|config| config.build().map(|measure| (config, measure)));
    let (config, measure) = match built {
        Ok(pair) => pair,
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            return Err(anyhow::Error::new(err).context("invalid measure configuration"));
        }
    };

    let score = if args.tokens {
        measure.calculate_tokens(&split_tokens(&args.a), &split_tokens(&args.b))
    } else {
        measure.calculate(&args.a, &args.b)
    };

    let tokenizer = if args.tokens {
        None
    } else {
        Some(match config.measure.kind {
            MeasureKind::Jaccard => config.tokenizer.kind.unwrap_or_default().as_str(),
            MeasureKind::Levenshtein => TokenizerKind::Char.as_str(),
        })
    };

    debug!(measure = config.measure.kind.as_str(), score, "scored inputs");

    let result = ScoreOutput {
        measure: config.measure.kind.as_str(),
        bag_semantics: config.measure.bag_semantics,
        with_transposition: config.measure.with_transposition,
        tokenizer,
        score,
    };

    render(output, &result, |r, w| writeln!(w, "{:.6}", r.score))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: ScoreArgs,
    }

    fn parse(argv: &[&str]) -> ScoreArgs {
        let mut full = vec!["score"];
        full.extend_from_slice(argv);
        Wrapper::parse_from(full).args
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse(&["a", "b", "--measure", "levenshtein", "--transposition"]);
        let config = args.resolve_config().expect("resolve");
        assert_eq!(config.measure.kind, MeasureKind::Levenshtein);
        assert!(config.measure.with_transposition);
        assert!(!config.measure.bag_semantics);
    }

    #[test]
    fn qgram_flags_reach_tokenizer_section() {
        let args = parse(&["a", "b", "--tokenizer", "qgram", "-q", "3", "--padding"]);
        let config = args.resolve_config().expect("resolve");
        assert_eq!(config.tokenizer.kind, Some(TokenizerKind::QGram));
        assert_eq!(config.tokenizer.size, Some(3));
        assert!(config.tokenizer.padding);
    }

    #[test]
    fn defaults_are_set_jaccard() {
        let args = parse(&["a", "b"]);
        let config = args.resolve_config().expect("resolve");
        assert_eq!(config, MeasureConfig::default());
    }
}
