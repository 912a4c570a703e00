//! Shared output layer: human text or stable JSON for every command.

use likeness_core::ConfigError;
use serde::Serialize;
use std::io::{self, Write};

/// Output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

/// Structured error payload for CLI output.
#[derive(Debug, Clone, Serialize)]
pub struct CliError {
    /// Human-readable error message.
    pub message: String,
    /// Optional suggestion for how to fix the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Machine-readable error code (e.g. "invalid_qgram_size").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl From<&ConfigError> for CliError {
    fn from(err: &ConfigError) -> Self {
        Self {
            message: err.to_string(),
            suggestion: err.hint().map(str::to_owned),
            error_code: Some(err.code().to_owned()),
        }
    }
}

/// Render a serializable value to stdout in the requested format.
///
/// In JSON mode the value is serialized with `serde_json`; in text mode
/// `human_fn` writes the output.
pub fn render<T: Serialize>(
    mode: OutputMode,
    value: &T,
    human_fn: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        OutputMode::Json => {
            serde_json::to_writer_pretty(&mut out, value)?;
            writeln!(out)?;
        }
        OutputMode::Text => {
            human_fn(value, &mut out)?;
        }
    }
    Ok(())
}

/// Render an error to stderr in the requested format.
pub fn render_error(mode: OutputMode, error: &CliError) -> anyhow::Result<()> {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    match mode {
        OutputMode::Json => {
            let wrapper = serde_json::json!({
                "error": error,
            });
            serde_json::to_writer_pretty(&mut out, &wrapper)?;
            writeln!(out)?;
        }
        OutputMode::Text => {
            writeln!(out, "error: {}", error.message)?;
            if let Some(ref suggestion) = error.suggestion {
                writeln!(out, "  suggestion: {suggestion}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_maps_code_and_hint() {
        let err = ConfigError::InvalidQGramSize(0);
        let cli = CliError::from(&err);
        assert_eq!(cli.error_code.as_deref(), Some("invalid_qgram_size"));
        assert!(cli.suggestion.is_some());
        assert!(cli.message.contains("between 1 and"));
    }

    #[test]
    fn cli_error_json_omits_missing_fields() {
        let cli = CliError {
            message: "boom".to_string(),
            suggestion: None,
            error_code: None,
        };
        let json = serde_json::to_value(&cli).expect("serialize");
        assert_eq!(json, serde_json::json!({ "message": "boom" }));
    }
}
