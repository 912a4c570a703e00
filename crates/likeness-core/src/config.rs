use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::ConfigError;
use crate::jaccard::Jaccard;
use crate::levenshtein::Levenshtein;
use crate::measure::SimilarityMeasure;
use crate::tokenize::TokenizerKind;

/// A measure picked at runtime; safe to share across threads.
pub type DynMeasure = Box<dyn SimilarityMeasure + Send + Sync>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureConfig {
    #[serde(default)]
    pub measure: MeasureSection,
    #[serde(default)]
    pub tokenizer: TokenizerSection,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureKind {
    #[default]
    Jaccard,
    Levenshtein,
}

impl MeasureKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jaccard => "jaccard",
            Self::Levenshtein => "levenshtein",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureSection {
    #[serde(default)]
    pub kind: MeasureKind,
    #[serde(default)]
    pub bag_semantics: bool,
    #[serde(default)]
    pub with_transposition: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerSection {
    /// Unset means "the measure's natural tokenizer": whitespace for
    /// jaccard, characters for levenshtein.
    #[serde(default)]
    pub kind: Option<TokenizerKind>,
    /// Q-gram size; defaults to [`DEFAULT_QGRAM_SIZE`]. Only valid with
    /// `kind = "qgram"`.
    #[serde(default)]
    pub size: Option<usize>,
    /// Only valid with `kind = "qgram"`.
    #[serde(default)]
    pub padding: bool,
}

pub const DEFAULT_QGRAM_SIZE: usize = 2;

impl TokenizerSection {
    /// Reject q-gram options on any other tokenizer.
    fn check_qgram_options(&self) -> Result<(), ConfigError> {
        if self.kind == Some(TokenizerKind::QGram) {
            return Ok(());
        }
        if self.size.is_some() {
            return Err(ConfigError::QGramOnly { option: "size" });
        }
        if self.padding {
            return Err(ConfigError::QGramOnly { option: "padding" });
        }
        Ok(())
    }
}

impl MeasureConfig {
    /// Validate the configuration and construct the measure it describes.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NotApplicable`] when an option belongs to the other
    ///   measure, or a non-char tokenizer is requested for levenshtein.
    /// - [`ConfigError::QGramOnly`] when `size` or `padding` is set without
    ///   the qgram tokenizer.
    /// - [`ConfigError::InvalidQGramSize`] for a q-gram size outside
    ///   `1..=MAX_QGRAM_SIZE`.
    pub fn build(&self) -> Result<DynMeasure, ConfigError> {
        let MeasureSection {
            kind,
            bag_semantics,
            with_transposition,
        } = self.measure;
        self.tokenizer.check_qgram_options()?;

        let measure: DynMeasure = match kind {
            MeasureKind::Jaccard => {
                if with_transposition {
                    return Err(ConfigError::NotApplicable {
                        option: "with_transposition",
                        measure: kind.as_str(),
                    });
                }
                let tokenizer = self
                    .tokenizer
                    .kind
                    .unwrap_or_default()
                    .build(
                        self.tokenizer.size.unwrap_or(DEFAULT_QGRAM_SIZE),
                        self.tokenizer.padding,
                    )?;
                Box::new(Jaccard::new(tokenizer, bag_semantics))
            }
            MeasureKind::Levenshtein => {
                if bag_semantics {
                    return Err(ConfigError::NotApplicable {
                        option: "bag_semantics",
                        measure: kind.as_str(),
                    });
                }
                match self.tokenizer.kind {
                    None | Some(TokenizerKind::Char) => {}
                    Some(other) => {
                        return Err(ConfigError::NotApplicable {
                            option: other.as_str(),
                            measure: kind.as_str(),
                        });
                    }
                }
                Box::new(Levenshtein::new(with_transposition))
            }
        };

        debug!(
            measure = kind.as_str(),
            bag_semantics,
            with_transposition,
            tokenizer = ?self.tokenizer.kind,
            "built similarity measure"
        );
        Ok(measure)
    }
}

/// Parse a measure config from TOML text.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed TOML or unknown values.
pub fn parse_config(content: &str) -> Result<MeasureConfig, ConfigError> {
    Ok(toml::from_str::<MeasureConfig>(content)?)
}

/// Load a measure config from `path`, falling back to defaults when the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Read`] if the file exists but cannot be read, or
/// [`ConfigError::Parse`] if its contents are invalid.
pub fn load_config(path: &Path) -> Result<MeasureConfig, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "no measure config, using defaults");
        return Ok(MeasureConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&content)
}
