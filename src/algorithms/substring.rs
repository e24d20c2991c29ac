//! Longest Common Substring (contiguous) implementation
//!
//! Finds the longest contiguous run of symbols shared by two sequences.
//! Unlike the Longest Common Subsequence family, a mismatch resets the
//! running match, so the result is a substring of both inputs.
//!
//! # Complexity
//! - Time: O(m*n) for the table-based matcher
//! - Space: two rolling rows of n+1 cells; the best coordinate is tracked
//!   separately, so the full (m+1)x(n+1) suffix table is never
//!   materialized and inputs of tens of thousands of symbols stay practical
//!
//! The brute-force variant in this module is O(m*n*min(m,n)) worst case
//! and exists purely as a correctness oracle for tests. It is never the
//! production path.
//!
//! # Tie-breaking
//!
//! When several common runs share the maximal length, the run found first
//! in row-major scan order wins: smallest ending position in `a`, then
//! smallest ending position in `b`. This is a documented policy of the
//! public API, not an incidental artifact of the implementation.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use super::Similarity;

/// Location of a common run within two input sequences.
///
/// Indices count symbols (slice elements), not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMatch {
    /// Start offset of the run in the first sequence
    pub start_a: usize,
    /// Start offset of the run in the second sequence
    pub start_b: usize,
    /// Number of symbols in the run (always > 0)
    pub len: usize,
}

/// A longest common substring match between two strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonSubstring {
    /// The matched text, exactly as it appears in both inputs
    pub text: String,
    /// Match length in symbols (chars or graphemes depending on the API used)
    pub len: usize,
    /// Start offset in the first input, in symbols
    pub start_a: usize,
    /// Start offset in the second input, in symbols
    pub start_b: usize,
}

/// Find the longest contiguous run of symbols common to both slices.
///
/// Generic over any `Eq` symbol type, so the same matcher serves `char`
/// sequences, raw bytes and grapheme clusters. Returns `None` when the
/// slices share no symbol at all; that is a normal outcome, not an error,
/// and the function never panics for any input pair.
///
/// Ties between equal-length runs go to the run ending earliest in `a`
/// (then earliest in `b`); see the module docs.
#[must_use]
pub fn common_run<T: Eq>(a: &[T], b: &[T]) -> Option<RunMatch> {
    let m = a.len();
    let n = b.len();

    if m == 0 || n == 0 {
        return None;
    }

    // Cell (i, j) of the conceptual suffix table holds the length of the
    // longest common suffix of a[0..i) and b[0..j). It only depends on
    // (i-1, j-1), so two rolling rows suffice.
    let mut prev: Vec<usize> = vec![0; n + 1];
    let mut curr: Vec<usize> = vec![0; n + 1];

    let mut best_len = 0;
    let mut best_end_a = 0;
    let mut best_end_b = 0;

    for i in 1..=m {
        curr[0] = 0; // Reset first element for this row
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                curr[j] = prev[j - 1] + 1;
                // Strict increase only: the first maximum in row-major
                // scan order wins
                if curr[j] > best_len {
                    best_len = curr[j];
                    best_end_a = i;
                    best_end_b = j;
                }
            } else {
                curr[j] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    if best_len == 0 {
        return None;
    }

    Some(RunMatch {
        start_a: best_end_a - best_len,
        start_b: best_end_b - best_len,
        len: best_len,
    })
}

/// Length of the longest common run, or 0 when no symbol is shared.
#[must_use]
pub fn common_run_len<T: Eq>(a: &[T], b: &[T]) -> usize {
    common_run(a, b).map_or(0, |run| run.len)
}

/// Brute-force reference matcher.
///
/// Enumerates every starting pair `(i, j)` and extends symbol-by-symbol,
/// updating only on strict increase, which selects exactly the run the
/// table-based matcher reports (the ordering by run end coincides with the
/// ordering by run start for equal lengths). Test oracle only.
#[must_use]
pub fn common_run_brute<T: Eq>(a: &[T], b: &[T]) -> Option<RunMatch> {
    let m = a.len();
    let n = b.len();

    let mut best: Option<RunMatch> = None;
    let mut best_len = 0;

    for i in 0..m {
        for j in 0..n {
            let mut k = 0;
            while i + k < m && j + k < n && a[i + k] == b[j + k] {
                k += 1;
                if k > best_len {
                    best_len = k;
                    best = Some(RunMatch {
                        start_a: i,
                        start_b: j,
                        len: k,
                    });
                }
            }
        }
    }

    best
}

/// Find the longest contiguous substring common to both strings.
///
/// Operates on Unicode scalar values (`char`s). Returns `None` when the
/// strings share no character at all, so callers can distinguish "no
/// match" from a genuine match without inspecting an empty string.
///
/// # Examples
/// ```
/// use lcsubstr::longest_common_substring;
///
/// let m = longest_common_substring("abcdxyz", "xyzabcd").unwrap();
/// assert_eq!(m.text, "abcd");
/// assert_eq!(m.len, 4);
///
/// assert!(longest_common_substring("abc", "xyz").is_none());
/// ```
#[must_use]
pub fn longest_common_substring(a: &str, b: &str) -> Option<CommonSubstring> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    common_run(&a_chars, &b_chars).map(|run| CommonSubstring {
        text: a_chars[run.start_a..run.start_a + run.len].iter().collect(),
        len: run.len,
        start_a: run.start_a,
        start_b: run.start_b,
    })
}

/// Length of the longest common substring in `char`s, or 0 if none.
#[must_use]
pub fn longest_common_substring_len(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    common_run_len(&a_chars, &b_chars)
}

/// Grapheme-cluster variant of [`longest_common_substring`].
///
/// Treats extended grapheme clusters as single symbols, so emoji sequences
/// and combining marks match as whole units instead of as individual code
/// points. Offsets and `len` count graphemes.
#[must_use]
pub fn longest_common_substring_graphemes(a: &str, b: &str) -> Option<CommonSubstring> {
    let a_graphemes: Vec<&str> = a.graphemes(true).collect();
    let b_graphemes: Vec<&str> = b.graphemes(true).collect();

    common_run(&a_graphemes, &b_graphemes).map(|run| CommonSubstring {
        text: a_graphemes[run.start_a..run.start_a + run.len].concat(),
        len: run.len,
        start_a: run.start_a,
        start_b: run.start_b,
    })
}

/// Substring-based similarity calculator
///
/// Stateless calculator - all instances are equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstringRatio;

impl SubstringRatio {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Similarity for SubstringRatio {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        substring_similarity(a, b)
    }

    fn name(&self) -> &'static str {
        "substring"
    }
}

/// Substring similarity (0.0 to 1.0).
/// Uses the formula: 2 * run_length / (len(a) + len(b))
#[must_use]
pub fn substring_similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let len_a = a.chars().count();
    let len_b = b.chars().count();

    if len_a == 0 && len_b == 0 {
        return 1.0;
    }

    if len_a == 0 || len_b == 0 {
        return 0.0;
    }

    let run_len = longest_common_substring_len(a, b);

    // Dice coefficient formula
    (2.0 * run_len as f64) / (len_a + len_b) as f64
}

/// Alternative similarity using max length as denominator
#[must_use]
pub fn substring_similarity_max(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let max_len = len_a.max(len_b);

    if max_len == 0 {
        return 1.0;
    }

    longest_common_substring_len(a, b) as f64 / max_len as f64
}
