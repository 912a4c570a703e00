//! The capability shared by every similarity measure.

/// Produces a similarity score for two inputs.
///
/// Scores are in `[0.0, 1.0]`. Two empty inputs are vacuously identical
/// and score `1.0`; an empty input against a non-empty one scores `0.0`.
///
/// The trait is object safe so a measure chosen at runtime can be held as
/// `Box<dyn SimilarityMeasure>`. Concrete measures additionally offer a
/// generic sequence entry point over any comparable element type.
pub trait SimilarityMeasure {
    /// Tokenize both strings and score the resulting sequences.
    fn calculate(&self, a: &str, b: &str) -> f64;

    /// Score two pre-tokenized sequences.
    fn calculate_tokens(&self, a: &[String], b: &[String]) -> f64;

    /// Like [`calculate`](Self::calculate), treating `None` as the empty
    /// string.
    fn calculate_opt(&self, a: Option<&str>, b: Option<&str>) -> f64 {
        self.calculate(a.unwrap_or_default(), b.unwrap_or_default())
    }

    /// Like [`calculate_tokens`](Self::calculate_tokens), treating `None`
    /// as the empty sequence.
    fn calculate_tokens_opt(&self, a: Option<&[String]>, b: Option<&[String]>) -> f64 {
        self.calculate_tokens(a.unwrap_or_default(), b.unwrap_or_default())
    }
}

impl<M: SimilarityMeasure + ?Sized> SimilarityMeasure for Box<M> {
    fn calculate(&self, a: &str, b: &str) -> f64 {
        (**self).calculate(a, b)
    }

    fn calculate_tokens(&self, a: &[String], b: &[String]) -> f64 {
        (**self).calculate_tokens(a, b)
    }
}

/// Both-empty and one-empty boundary scores shared by all measures.
///
/// Returns `None` when both inputs are non-empty and the measure has to do
/// real work.
pub(crate) const fn boundary_score(len_a: usize, len_b: usize) -> Option<f64> {
    match (len_a, len_b) {
        (0, 0) => Some(1.0),
        (0, _) | (_, 0) => Some(0.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl SimilarityMeasure for Fixed {
        fn calculate(&self, a: &str, b: &str) -> f64 {
            boundary_score(a.len(), b.len()).unwrap_or(0.25)
        }

        fn calculate_tokens(&self, a: &[String], b: &[String]) -> f64 {
            boundary_score(a.len(), b.len()).unwrap_or(0.25)
        }
    }

    #[test]
    fn boundary_both_empty_is_one() {
        assert_eq!(boundary_score(0, 0), Some(1.0));
    }

    #[test]
    fn boundary_one_empty_is_zero() {
        assert_eq!(boundary_score(0, 3), Some(0.0));
        assert_eq!(boundary_score(4, 0), Some(0.0));
    }

    #[test]
    fn boundary_non_empty_defers() {
        assert_eq!(boundary_score(1, 1), None);
    }

    #[test]
    fn absent_inputs_are_empty() {
        let m = Fixed;
        assert_eq!(m.calculate_opt(None, None), 1.0);
        assert_eq!(m.calculate_opt(None, Some("x")), 0.0);
        assert_eq!(m.calculate_tokens_opt(Some(&["x".to_string()]), None), 0.0);
        assert_eq!(m.calculate_tokens_opt(None, None), 1.0);
    }

    #[test]
    fn boxed_measure_delegates() {
        let m: Box<dyn SimilarityMeasure> = Box::new(Fixed);
        assert_eq!(m.calculate("a", "b"), 0.25);
        assert_eq!(m.calculate_opt(Some(""), None), 1.0);
    }
}
