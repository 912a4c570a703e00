//! Levenshtein similarity, optionally with the Damerau transposition rule.
//!
//! # Algorithm
//!
//! Classic dynamic programming over a conceptual `(n+1) x (m+1)` grid where
//! cell `(i, j)` is the cheapest way to turn the first `i` elements of one
//! input into the first `j` of the other:
//!
//! ```text
//! cell(i, 0) = i
//! cell(0, j) = j
//! cell(i, j) = min(cell(i-1, j) + 1,            deletion
//!                  cell(i, j-1) + 1,            insertion
//!                  cell(i-1, j-1) + cost)       substitution (cost 0 on match)
//! ```
//!
//! With transposition enabled, when the last two elements of each side are
//! swapped copies (`a[i-1] == b[j-2] && a[i-2] == b[j-1]`) the cell may also
//! take `cell(i-2, j-2) + 1`. Only adjacent swaps are discounted (optimal
//! string alignment).
//!
//! The grid is never materialized. Three rows of `min(n, m) + 1` cells hold
//! the row two back, the previous row, and the row being filled, and they
//! rotate after every outer step.
//!
//! # Normalization
//!
//! `similarity = 1 - distance / max(n, m)`. Two empty inputs score `1.0`
//! and are handled before any division; one empty input scores `0.0`.

use std::mem;

use tracing::trace;

use crate::measure::{SimilarityMeasure, boundary_score};

/// Edit-distance similarity over characters or tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein {
    with_transposition: bool,
}

impl Levenshtein {
    #[must_use]
    pub const fn new(with_transposition: bool) -> Self {
        Self { with_transposition }
    }

    /// Insertions, deletions and substitutions only.
    #[must_use]
    pub const fn plain() -> Self {
        Self::new(false)
    }

    /// Adds adjacent transpositions as a single edit.
    #[must_use]
    pub const fn damerau() -> Self {
        Self::new(true)
    }

    #[must_use]
    pub const fn with_transposition(&self) -> bool {
        self.with_transposition
    }

    /// Edit distance between two strings, compared per `char`.
    #[must_use]
    pub fn distance(&self, a: &str, b: &str) -> usize {
        let chars_a: Vec<char> = a.chars().collect();
        let chars_b: Vec<char> = b.chars().collect();
        self.distance_tokens(&chars_a, &chars_b)
    }

    /// Edit distance between two sequences of any comparable element.
    #[must_use]
    pub fn distance_tokens<T: PartialEq>(&self, a: &[T], b: &[T]) -> usize {
        edit_distance(a, b, self.with_transposition)
    }

    /// Similarity between two sequences of any comparable element.
    #[must_use]
    pub fn score<T: PartialEq>(&self, a: &[T], b: &[T]) -> f64 {
        let score = boundary_score(a.len(), b.len()).unwrap_or_else(|| {
            similarity_from_distance(self.distance_tokens(a, b), a.len(), b.len())
        });
        trace!(
            len_a = a.len(),
            len_b = b.len(),
            transposition = self.with_transposition,
            score,
            "levenshtein"
        );
        score
    }
}

impl SimilarityMeasure for Levenshtein {
    fn calculate(&self, a: &str, b: &str) -> f64 {
        let chars_a: Vec<char> = a.chars().collect();
        let chars_b: Vec<char> = b.chars().collect();
        self.score(&chars_a, &chars_b)
    }

    fn calculate_tokens(&self, a: &[String], b: &[String]) -> f64 {
        self.score(a, b)
    }
}

/// Turn an edit distance already computed for inputs of `len_a` and `len_b`
/// elements into a similarity, without rerunning the DP.
///
/// Applies the same empty-input boundaries as [`Levenshtein::score`].
#[must_use]
pub fn similarity_from_distance(distance: usize, len_a: usize, len_b: usize) -> f64 {
    boundary_score(len_a, len_b).unwrap_or_else(|| normalize(distance, len_a.max(len_b)))
}

/// `1 - distance / max_len`; `max_len` must be non-zero.
fn normalize(distance: usize, max_len: usize) -> f64 {
    debug_assert!(max_len > 0 && distance <= max_len);
    1.0 - distance as f64 / max_len as f64
}

/// Optimal-string-alignment distance using three rolling rows.
///
/// The shorter input runs along the rows, so working memory is
/// `O(min(n, m))`. The distance is symmetric, which makes the swap safe.
fn edit_distance<T: PartialEq>(a: &[T], b: &[T], with_transposition: bool) -> usize {
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if inner.is_empty() {
        return outer.len();
    }

    let width = inner.len() + 1;
    let mut two_back: Vec<usize> = vec![0; width];
    let mut previous: Vec<usize> = (0..width).collect();
    let mut current: Vec<usize> = vec![0; width];

    for (j, outer_item) in (1..).zip(outer) {
        current[0] = j;
        for i in 1..width {
            let cost = usize::from(inner[i - 1] != *outer_item);
            let mut value = (previous[i] + 1)
                .min(current[i - 1] + 1)
                .min(previous[i - 1] + cost);

            if with_transposition
                && i > 1
                && j > 1
                && inner[i - 1] == outer[j - 2]
                && inner[i - 2] == outer[j - 1]
            {
                value = value.min(two_back[i - 2] + 1);
            }

            current[i] = value;
        }

        // two_back <- previous, previous <- current, current <- stale buffer
        mem::swap(&mut two_back, &mut previous);
        mem::swap(&mut previous, &mut current);
    }

    previous[width - 1]
}
