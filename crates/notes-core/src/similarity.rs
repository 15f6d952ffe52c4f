use std::collections::HashSet;

/// Jaccard ratio above which two notes count as the same thought.
pub const SIMILARITY_THRESHOLD: f64 = 0.3;

fn tokens(text: &str) -> HashSet<&str> {
    text.split_whitespace().collect()
}

/// Token-set Jaccard ratio of two texts, split on whitespace.
///
/// Returns `None` when either side has no tokens.
pub fn jaccard(a: &str, b: &str) -> Option<f64> {
    let words_a = tokens(a);
    let words_b = tokens(b);
    if words_a.is_empty() || words_b.is_empty() {
        return None;
    }
    let common = words_a.intersection(&words_b).count();
    let union = words_a.union(&words_b).count();
    Some(common as f64 / union as f64)
}

/// Whether two notes share enough tokens to be treated as one thought.
///
/// Purely lexical: paraphrases sharing no tokens are never similar.
pub fn similar(a: &str, b: &str) -> bool {
    jaccard(a, b).is_some_and(|ratio| ratio > SIMILARITY_THRESHOLD)
}
