//! lcsubstr - longest common contiguous substring matching
//!
//! Finds the longest run of symbols shared by two sequences using an
//! O(m*n) dynamic-programming matcher with working space of two table
//! rows rather than the full table.
//!
//! # Features
//! - Generic slice core usable with chars, bytes or any `Eq` symbols
//! - Grapheme-cluster matching for Unicode text
//! - A brute-force reference matcher kept as a test oracle
//! - Parallel batch processing for many-haystack workloads

pub mod algorithms;

pub use algorithms::substring::{
    common_run, common_run_brute, common_run_len, longest_common_substring,
    longest_common_substring_graphemes, longest_common_substring_len, substring_similarity,
    substring_similarity_max, CommonSubstring, RunMatch, SubstringRatio,
};
pub use algorithms::Similarity;

/// Minimum input size for parallel processing.
///
/// For inputs smaller than this threshold, sequential processing is faster
/// due to the overhead of thread pool coordination.
const PARALLEL_THRESHOLD: usize = 100;

/// Match every haystack against `query`, returning results aligned with
/// the input order.
///
/// In each result, `start_a` is the offset within the haystack and
/// `start_b` the offset within the query. Uses parallel processing for
/// large inputs and sequential processing for smaller inputs to avoid
/// thread pool overhead.
#[must_use]
pub fn batch_longest_common_substring(
    haystacks: &[String],
    query: &str,
) -> Vec<Option<CommonSubstring>> {
    if haystacks.len() >= PARALLEL_THRESHOLD {
        use rayon::prelude::*;
        haystacks
            .par_iter()
            .map(|s| longest_common_substring(s, query))
            .collect()
    } else {
        haystacks
            .iter()
            .map(|s| longest_common_substring(s, query))
            .collect()
    }
}

/// Find the choice sharing the longest contiguous run with `query`.
///
/// Returns the index of the best choice together with its match, or `None`
/// when no choice shares a run of at least `min_len` symbols (`min_len` of
/// 0 is treated as 1; an empty overlap is never a match). Ties between
/// equally long overlaps go to the earliest index, consistent with the
/// matcher's first-occurrence policy.
#[must_use]
pub fn find_longest_overlap(
    query: &str,
    choices: &[String],
    min_len: usize,
) -> Option<(usize, CommonSubstring)> {
    let min_len = min_len.max(1);
    let mut best: Option<(usize, CommonSubstring)> = None;

    for (i, found) in batch_longest_common_substring(choices, query)
        .into_iter()
        .enumerate()
    {
        let Some(found) = found else { continue };
        if found.len < min_len {
            continue;
        }
        match &best {
            Some((_, current)) if current.len >= found.len => {}
            _ => best = Some((i, found)),
        }
    }

    best
}
