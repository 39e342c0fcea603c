//! Tokenizer for stacc source.
//!
//! The language has no string literals, comments, or bracket syntax, so
//! tokenization is exactly whitespace splitting. Classification of the
//! resulting tokens (literal, primitive, structural keyword) happens in
//! the engine's dispatch loop.

/// Split source text into whitespace-delimited tokens.
pub fn tokenize(source: &str) -> Vec<&str> {
    source.split_whitespace().collect()
}

/// Check whether a token is one of the structural keywords.
///
/// Structural keywords only carry meaning as construct boundaries; a bare
/// one encountered at dispatch level is skipped, not executed.
pub fn is_structural(token: &str) -> bool {
    matches!(
        token,
        "IF" | "THEN" | "ELSE" | "END" | "WHILE" | "DO" | "FOR"
    )
}
