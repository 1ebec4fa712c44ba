//! Repeated-pattern detector - finds substrings made of a repeating unit.

use super::fold_char;

/// Returns the total length of repeated patterns in the password.
///
/// A repeated pattern is a non-empty unit immediately followed by one or
/// more exact repeats of itself ("aaaa" is "a" repeated, "abab" is "ab"
/// repeated). Matching is case-insensitive and spans are non-overlapping:
/// at each position the shortest repeating unit wins, its maximal run is
/// counted in full, and the scan resumes after the run.
///
/// Callers typically compare the result against the password length as a
/// weakness ratio.
pub(crate) fn repeated_patterns_length(password: &str) -> usize {
    let chars: Vec<char> = password.chars().map(fold_char).collect();
    let n = chars.len();

    let mut total = 0;
    let mut i = 0;
    while i < n {
        let mut matched = false;
        for unit in 1..=(n - i) / 2 {
            // Count how many times the unit repeats right after itself
            let mut repeats = 0;
            let mut j = i + unit;
            while j + unit <= n && chars[j..j + unit] == chars[i..i + unit] {
                repeats += 1;
                j += unit;
            }
            if repeats > 0 {
                let span = unit * (repeats + 1);
                #[cfg(feature = "tracing")]
                tracing::debug!("repeated pattern: unit {} spanning {} characters", unit, span);
                total += span;
                i += span;
                matched = true;
                break;
            }
        }
        if !matched {
            i += 1;
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_char_runs() {
        assert_eq!(repeated_patterns_length("aaaa"), 4);
        assert_eq!(repeated_patterns_length("aa"), 2);
    }

    #[test]
    fn test_multi_char_units() {
        assert_eq!(repeated_patterns_length("abab"), 4);
        assert_eq!(repeated_patterns_length("abcabc-1234"), 6);
        assert_eq!(repeated_patterns_length("abcabcab-1234"), 6);
        assert_eq!(repeated_patterns_length("abcabcabc-1234"), 9);
    }

    #[test]
    fn test_no_repeats() {
        assert_eq!(repeated_patterns_length("abcd"), 0);
        assert_eq!(repeated_patterns_length("a"), 0);
        assert_eq!(repeated_patterns_length(""), 0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(repeated_patterns_length("AbAb"), 4);
        assert_eq!(repeated_patterns_length("XyZxYz"), 6);
    }

    #[test]
    fn test_multiple_disjoint_runs() {
        // "xx" + "abcabc" + "yy"
        assert_eq!(repeated_patterns_length("xxabcabcyy"), 10);
    }

    #[test]
    fn test_unit_may_contain_any_character() {
        assert_eq!(repeated_patterns_length("ab\nab\n"), 6);
        assert_eq!(repeated_patterns_length("аяаяаб"), 4);
    }
}
