use crate::error::DataError;
use crate::models::ComparisonRow;

/// Pair two classifier runs index-wise over the same ordered corpus.
///
/// Alignment is purely positional; both label sequences must come from the
/// identical ordered post list. Length mismatch means the precondition was
/// broken and the comparison would be meaningless, so it is an error rather
/// than a silent zip-to-shortest.
pub fn pair(
    labels_a: &[String],
    labels_b: &[String],
    posts: &[String],
) -> Result<Vec<ComparisonRow>, DataError> {
    if labels_a.len() != labels_b.len() || labels_a.len() != posts.len() {
        return Err(DataError::MisalignedComparison {
            left: labels_a.len(),
            right: labels_b.len(),
            posts: posts.len(),
        });
    }

    Ok(labels_a
        .iter()
        .zip(labels_b)
        .zip(posts)
        .map(|((a, b), post)| ComparisonRow {
            label_a: a.clone(),
            label_b: b.clone(),
            post: post.clone(),
        })
        .collect())
}
