#![no_main]

use libfuzzer_sys::fuzz_target;
use likeness_core::{Jaccard, QGramTokenizer, SimilarityMeasure, WhitespaceTokenizer};

fuzz_target!(|input: (&str, &str, u8)| {
    let (a, b, q) = input;

    for bag in [false, true] {
        let words = Jaccard::new(WhitespaceTokenizer, bag);
        let score = words.calculate(a, b);
        assert!((0.0..=1.0).contains(&score));
        assert_eq!(score, words.calculate(b, a));
    }

    // Zero is rejected at construction; anything else must tokenize cleanly.
    if let Ok(tokenizer) = QGramTokenizer::new(usize::from(q % 8), true) {
        let grams = Jaccard::bag(tokenizer);
        let score = grams.calculate(a, b);
        if !a.is_empty() && !b.is_empty() {
            assert!(score <= 0.5);
        }
    }
});
