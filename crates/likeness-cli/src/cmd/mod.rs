pub mod distance;
pub mod score;

/// Split a `--tokens` argument into its comma-separated tokens.
///
/// Empty pieces are dropped, so `""` is the empty sequence and `"a,,b"` is
/// `["a", "b"]`. Tokens are otherwise taken verbatim (no trimming).
#[must_use]
pub fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
