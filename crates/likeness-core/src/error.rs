use std::path::PathBuf;

/// Errors from building a measure or tokenizer out of configuration.
///
/// Scoring itself is total; these only arise before a measure exists.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A q-gram size outside `1..=MAX_QGRAM_SIZE`.
    #[error(
        "q-gram size must be between 1 and {max}, got {0}",
        max = crate::tokenize::MAX_QGRAM_SIZE
    )]
    InvalidQGramSize(usize),

    /// `size` or `padding` was set for a tokenizer other than qgram.
    #[error("option `{option}` only applies to the qgram tokenizer")]
    QGramOnly { option: &'static str },

    /// An option was set for a measure that does not use it.
    #[error("option `{option}` does not apply to the {measure} measure")]
    NotApplicable {
        option: &'static str,
        measure: &'static str,
    },

    /// The config file could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config text is not valid TOML for [`crate::MeasureConfig`].
    #[error("failed to parse measure config")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    /// Stable machine-readable identifier.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidQGramSize(_) => "invalid_qgram_size",
            Self::NotApplicable { .. } => "option_not_applicable",
            Self::QGramOnly { .. } => "qgram_option_not_applicable",
            Self::Read { .. } => "config_read_failed",
            Self::Parse(_) => "config_parse_failed",
        }
    }

    /// Optional remediation hint for terminal output.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidQGramSize(_) => Some("Use `size = 2` or `size = 3` for typical q-grams."),
            Self::NotApplicable { .. } => Some(
                "`bag_semantics` is a jaccard option; `with_transposition` and the char \
                 tokenizer belong to levenshtein.",
            ),
            Self::QGramOnly { .. } => {
                Some("Set `kind = \"qgram\"` under [tokenizer], or drop the option.")
            }
            Self::Read { .. } => Some("Check that the config path exists and is readable."),
            Self::Parse(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigError;

    #[test]
    fn invalid_qgram_message_names_size() {
        let err = ConfigError::InvalidQGramSize(0);
        assert_eq!(err.to_string(), "q-gram size must be between 1 and 64, got 0");
        assert!(err.hint().is_some());
    }

    #[test]
    fn not_applicable_message_names_option_and_measure() {
        let err = ConfigError::NotApplicable {
            option: "bag_semantics",
            measure: "levenshtein",
        };
        assert_eq!(
            err.to_string(),
            "option `bag_semantics` does not apply to the levenshtein measure"
        );
    }

    #[test]
    fn qgram_only_message_names_option() {
        let err = ConfigError::QGramOnly { option: "padding" };
        assert_eq!(err.to_string(), "option `padding` only applies to the qgram tokenizer");
        assert_eq!(err.code(), "qgram_option_not_applicable");
    }

    #[test]
    fn parse_error_converts_from_toml() {
        let toml_err = toml::from_str::<toml::Value>("[measure").expect_err("invalid toml");
        let err: ConfigError = toml_err.into();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.hint().is_none());
    }
}
