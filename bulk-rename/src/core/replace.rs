// src/core/replace.rs
use crate::models::Replacement;

/// Applies each replacement in order, every step working on the output of
/// the one before it. An earlier replacement's output can therefore be
/// matched by a later key.
///
/// Replacements with an empty `from` are skipped.
///
/// # Arguments
///
/// * `content` - The text to transform
/// * `replacements` - Ordered literal substitutions
///
/// # Returns
///
/// * `String` - The transformed text
#[must_use]
pub fn apply_replacements(content: &str, replacements: &[Replacement]) -> String {
    replacements
        .iter()
        .filter(|r| !r.from.is_empty())
        .fold(content.to_owned(), |acc, r| acc.replace(&r.from, &r.to))
}
