#![no_main]

use libfuzzer_sys::fuzz_target;
use likeness_core::{Levenshtein, SimilarityMeasure};

fuzz_target!(|input: (&str, &str, bool)| {
    let (a, b, with_transposition) = input;
    let lev = Levenshtein::new(with_transposition);

    let forward = lev.calculate(a, b);
    assert!((0.0..=1.0).contains(&forward));
    assert_eq!(forward, lev.calculate(b, a));

    let distance = lev.distance(a, b);
    let longest = a.chars().count().max(b.chars().count());
    assert!(distance <= longest);
    assert!(lev.distance(a, a) == 0);
});
