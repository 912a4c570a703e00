#![forbid(unsafe_code)]
//! likeness-core library.
//!
//! Normalized similarity scores between two strings or two token sequences:
//!
//! - [`Jaccard`] — set or multiset (bag) overlap of unordered tokens.
//! - [`Levenshtein`] — edit-distance alignment, optionally counting an
//!   adjacent transposition as a single edit (Damerau extension).
//!
//! Both implement [`SimilarityMeasure`], so callers can pick a measure at
//! runtime (see [`config::MeasureConfig::build`]).
//!
//! # Conventions
//!
//! - **Errors**: scoring never fails; configuration errors are
//!   [`ConfigError`] values.
//! - **Logging**: Use `tracing` macros (`debug!`, `trace!`).

pub mod config;
pub mod error;
pub mod jaccard;
pub mod levenshtein;
pub mod measure;
pub mod tokenize;

pub use config::{MeasureConfig, load_config, parse_config};
pub use error::ConfigError;
pub use jaccard::Jaccard;
pub use levenshtein::{Levenshtein, similarity_from_distance};
pub use measure::SimilarityMeasure;
pub use tokenize::{CharTokenizer, QGramTokenizer, Tokenizer, WhitespaceTokenizer};
