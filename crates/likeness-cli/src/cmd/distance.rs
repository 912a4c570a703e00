//! `likeness distance` — raw edit distance between two inputs.

use crate::cmd::split_tokens;
use crate::output::{OutputMode, render};
use clap::Args;
use likeness_core::{Levenshtein, similarity_from_distance};
use serde::Serialize;

#[derive(Args, Debug)]
#[command(
    about = "Print the edit distance between two inputs",
    after_help = "EXAMPLES:\n    # Levenshtein distance\n    likeness distance kitten sitting\n\n\
                  # Damerau (optimal string alignment) distance over tokens\n    likeness distance new,york york,new --tokens --transposition"
)]
pub struct DistanceArgs {
    /// First input.
    pub a: String,

    /// Second input.
    pub b: String,

    /// Count an adjacent swap as a single edit.
    #[arg(long)]
    pub transposition: bool,

    /// Treat both inputs as comma-separated token lists.
    #[arg(long)]
    pub tokens: bool,
}

/// JSON shape of `likeness distance`.
#[derive(Debug, Serialize)]
pub struct DistanceOutput {
    pub distance: usize,
    pub similarity: f64,
    pub with_transposition: bool,
}

/// Execute `likeness distance`.
///
/// # Errors
///
/// Returns an error only if writing the output fails.
pub fn run_distance(args: &DistanceArgs, output: OutputMode) -> anyhow::Result<()> {
    let lev = Levenshtein::new(args.transposition);

    let (distance, len_a, len_b) = if args.tokens {
        let a = split_tokens(&args.a);
        let b = split_tokens(&args.b);
        (lev.distance_tokens(&a, &b), a.len(), b.len())
    } else {
        let a: Vec<char> = args.a.chars().collect();
        let b: Vec<char> = args.b.chars().collect();
        (lev.distance_tokens(&a, &b), a.len(), b.len())
    };
    let similarity = similarity_from_distance(distance, len_a, len_b);

    let result = DistanceOutput {
        distance,
        similarity,
        with_transposition: args.transposition,
    };

    render(output, &result, |r, w| writeln!(w, "{}", r.distance))
}
