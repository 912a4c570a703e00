//! Jaccard overlap with set or bag (multiset) semantics.
//!
//! # Set semantics
//!
//! Duplicates collapse, and the score is `|A ∩ B| / |A ∪ B|`. Equal
//! non-empty sets score `1.0`.
//!
//! # Bag semantics
//!
//! Each token keeps its multiplicity. The intersection counts
//! `min(count_a, count_b)` per shared token and is divided by the sum of
//! both input lengths, not by the union size:
//!
//! ```text
//! score = Σ min(count_a(t), count_b(t)) / (len_a + len_b)
//! ```
//!
//! Identical multisets therefore score `0.5`, and every bag score lies in
//! `[0.0, 0.5]` when both sides are non-empty. This ceiling is part of the
//! measure and callers comparing against set scores must account for it.
//!
//! # Edge cases
//!
//! - Both inputs empty: `1.0`.
//! - Exactly one input empty: `0.0`.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use tracing::trace;

use crate::measure::{SimilarityMeasure, boundary_score};
use crate::tokenize::{Tokenizer, WhitespaceTokenizer};

/// Jaccard similarity over the tokens produced by `K`.
#[derive(Debug, Clone, Default)]
pub struct Jaccard<K = WhitespaceTokenizer> {
    tokenizer: K,
    bag_semantics: bool,
}

impl<K: Tokenizer> Jaccard<K> {
    #[must_use]
    pub const fn new(tokenizer: K, bag_semantics: bool) -> Self {
        Self {
            tokenizer,
            bag_semantics,
        }
    }

    /// Duplicate tokens collapse before comparison.
    #[must_use]
    pub const fn set(tokenizer: K) -> Self {
        Self::new(tokenizer, false)
    }

    /// Duplicate tokens are counted; the maximum score is `0.5`.
    #[must_use]
    pub const fn bag(tokenizer: K) -> Self {
        Self::new(tokenizer, true)
    }

    #[must_use]
    pub const fn bag_semantics(&self) -> bool {
        self.bag_semantics
    }

    #[must_use]
    pub const fn tokenizer(&self) -> &K {
        &self.tokenizer
    }

    /// Score two token sequences of any hashable element type.
    #[must_use]
    pub fn score<T: Eq + Hash>(&self, a: &[T], b: &[T]) -> f64 {
        let score = boundary_score(a.len(), b.len()).unwrap_or_else(|| {
            if self.bag_semantics {
                bag_jaccard(a, b)
            } else {
                set_jaccard(a, b)
            }
        });
        trace!(
            len_a = a.len(),
            len_b = b.len(),
            bag = self.bag_semantics,
            score,
            "jaccard"
        );
        score
    }
}

impl<K: Tokenizer> SimilarityMeasure for Jaccard<K> {
    fn calculate(&self, a: &str, b: &str) -> f64 {
        let tokens_a = self.tokenizer.tokenize(a);
        let tokens_b = self.tokenizer.tokenize(b);
        self.score(&tokens_a, &tokens_b)
    }

    fn calculate_tokens(&self, a: &[String], b: &[String]) -> f64 {
        self.score(a, b)
    }
}

fn set_jaccard<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    let set_a: HashSet<&T> = a.iter().collect();
    let set_b: HashSet<&T> = b.iter().collect();

    let intersection = set_a.intersection(&set_b).count();
    let union_size = set_a.len() + set_b.len() - intersection;
    debug_assert!(union_size > 0);
    intersection as f64 / union_size as f64
}

fn bag_jaccard<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    let counts_a = counts(a);
    let counts_b = counts(b);

    let intersection: usize = counts_a
        .iter()
        .filter_map(|(token, &count_a)| counts_b.get(token).map(|&count_b| count_a.min(count_b)))
        .sum();

    let total = a.len() + b.len();
    debug_assert!(total > 0);
    intersection as f64 / total as f64
}

fn counts<T: Eq + Hash>(tokens: &[T]) -> HashMap<&T, usize> {
    let mut map: HashMap<&T, usize> = HashMap::with_capacity(tokens.len());
    for token in tokens {
        *map.entry(token).or_insert(0) += 1;
    }
    map
}
