//! Vector and token-set similarity.


use std::collections::HashSet;

/// Cosine similarity of two embeddings.
///
/// Compares over the shorter of the two lengths. Returns `0.0` when either
/// side has a zero norm inside that window. The result is not clamped:
/// unrelated texts can yield negative values.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f64, 0.0f64, 0.0f64), |(dot, na, nb), (&av, &bv)| {
                let av = f64::from(av);
                let bv = f64::from(bv);
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    if norm_a_sq == 0.0 || norm_b_sq == 0.0 {
        0.0
    } else {
        dot / (norm_a_sq.sqrt() * norm_b_sq.sqrt())
    }
}

/// Whether `v` can take part in a cosine comparison: non-empty and every
/// component finite.
pub fn is_usable_vector(v: &[f32]) -> bool {
    !v.is_empty() && v.iter().all(|x| x.is_finite())
}

/// Jaccard similarity of the whitespace token sets of two normalized strings.
///
/// Two blank inputs are identical (`1.0`).
pub fn token_set_similarity(a: &str, b: &str) -> f64 {
    let left: HashSet<&str> = a.split_whitespace().collect();
    let right: HashSet<&str> = b.split_whitespace().collect();

    if left.is_empty() && right.is_empty() {
        return 1.0;
    }

    let union = left.union(&right).count();
    if union == 0 {
        return 0.0;
    }

    left.intersection(&right).count() as f64 / union as f64
}
