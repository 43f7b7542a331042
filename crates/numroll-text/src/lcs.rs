#![forbid(unsafe_code)]

//! Longest-common-subsequence alignment.
//!
//! Classic O(n·m) dynamic programming over char slices, returning the
//! matched index pairs of one maximal alignment. Quadratic in both time
//! and space, which is fine for the short numeric strings this crate
//! handles (tens of characters); not a general-purpose diff.

/// Matched `(index_in_a, index_in_b)` pairs of a longest common
/// subsequence of `a` and `b`, in increasing order on both sides.
pub(crate) fn lcs_match(a: &[char], b: &[char]) -> Vec<(usize, usize)> {
    let (n, m) = (a.len(), b.len());
    if n == 0 || m == 0 {
        return Vec::new();
    }

    // lengths[i][j] = LCS length of a[i..] and b[j..], flattened row-major.
    let width = m + 1;
    let mut lengths = vec![0u32; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lengths[i * width + j] = if a[i] == b[j] {
                lengths[(i + 1) * width + j + 1] + 1
            } else {
                lengths[(i + 1) * width + j].max(lengths[i * width + j + 1])
            };
        }
    }

    let mut pairs = Vec::with_capacity(lengths[0] as usize);
    let (mut i, mut j) = (0usize, 0usize);
    while i < n && j < m {
        if a[i] == b[j] {
            pairs.push((i, j));
            i += 1;
            j += 1;
        } else if lengths[(i + 1) * width + j] >= lengths[i * width + j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn empty_inputs() {
        assert!(lcs_match(&[], &chars("abc")).is_empty());
        assert!(lcs_match(&chars("abc"), &[]).is_empty());
    }

    #[test]
    fn identical_strings_match_fully() {
        let a = chars("1234");
        let pairs = lcs_match(&a, &a);
        assert_eq!(pairs, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn disjoint_strings_match_nothing() {
        assert!(lcs_match(&chars("123"), &chars("456")).is_empty());
    }

    #[test]
    fn insertion_in_the_middle() {
        // "1234" → "12934": the 9 is unmatched.
        let pairs = lcs_match(&chars("1234"), &chars("12934"));
        assert_eq!(pairs, vec![(0, 0), (1, 1), (2, 3), (3, 4)]);
    }

    #[test]
    fn pairs_are_strictly_increasing() {
        let pairs = lcs_match(&chars("90210"), &chars("09012100"));
        for w in pairs.windows(2) {
            assert!(w[0].0 < w[1].0);
            assert!(w[0].1 < w[1].1);
        }
        for &(i, j) in &pairs {
            assert_eq!("90210".as_bytes()[i], "09012100".as_bytes()[j]);
        }
    }

    #[test]
    fn matches_are_maximal() {
        // LCS of "1224" and "224" has length 3.
        assert_eq!(lcs_match(&chars("1224"), &chars("224")).len(), 3);
    }
}
