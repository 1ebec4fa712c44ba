//! Sequence detector - finds runs that follow a known weak ordering.

use std::sync::LazyLock;

use super::fold_char;

/// Known weak orderings, scanned in both directions.
const FORWARD: &str = concat!(
    "abcdefghijklmnopqrstuvwxyz", // Alphabet
    "qwertyuiopasdfghjklzxcvbnm", // Keyboard
    "~!@#$%^&*()_+-=",            // Keyboard special, top row
    "01234567890",                // Numbers
);

/// The sequence table: the weak orderings followed by their reverse, so
/// both forward and backward runs are found by one substring search.
/// Built once and shared read-only across all analyses.
static SEQUENCES: LazyLock<Vec<char>> = LazyLock::new(|| {
    let forward: Vec<char> = FORWARD.chars().collect();
    let mut table = forward.clone();
    table.extend(forward.iter().rev());

    #[cfg(feature = "tracing")]
    tracing::debug!("sequence table initialized: {} entries", table.len());

    table
});

/// Returns the total length of weak sequence runs in the password.
///
/// A run is a substring of length >= 2 that appears contiguously in the
/// sequence table: alphabetic ("abcd"), keyboard-adjacent ("qwerty"),
/// shifted top-row symbols ("!@#$"), numeric ("1234"), or any of those
/// reversed. Matching is case-insensitive.
///
/// The scan keeps an explicit cursor: at each position the longest common
/// prefix between the password suffix and every table suffix starting with
/// the same character is computed, the best run (if >= 2) is counted, and
/// the cursor skips past it, so no character inside a counted run is ever
/// rescanned.
pub(crate) fn sequences_length(password: &str) -> usize {
    let chars: Vec<char> = password.chars().map(fold_char).collect();
    let table = &*SEQUENCES;

    let mut total = 0;
    let mut i = 0;
    while i < chars.len() {
        let suffix = &chars[i..];

        // A character may occur at several table positions; keep the best run.
        let mut common_length = 1;
        for (j, &t) in table.iter().enumerate() {
            if t != suffix[0] {
                continue;
            }
            let common_here = suffix
                .iter()
                .zip(&table[j..])
                .take_while(|(a, b)| a == b)
                .count();
            common_length = common_length.max(common_here);
        }

        if common_length > 1 {
            #[cfg(feature = "tracing")]
            tracing::debug!("sequence run of {} characters", common_length);
            total += common_length;
        }

        i += common_length;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_run() {
        assert_eq!(sequences_length("abcdef"), 6);
        assert_eq!(sequences_length("qwe"), 3);
    }

    #[test]
    fn test_keyboard_run() {
        assert_eq!(sequences_length("qwerty"), 6);
        assert_eq!(sequences_length("asdfghjkl"), 9);
    }

    #[test]
    fn test_symbol_and_number_runs() {
        assert_eq!(sequences_length("~!@#$%"), 6);
        assert_eq!(sequences_length("0123456789"), 10);
    }

    #[test]
    fn test_reversed_runs() {
        assert_eq!(sequences_length("zyxwvu"), 6);
        assert_eq!(sequences_length("654321"), 6);
        assert_eq!(sequences_length("ytrewq"), 6);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(sequences_length("ABCDEF"), sequences_length("abcdef"));
        assert_eq!(sequences_length("QWERTY"), 6);
    }

    #[test]
    fn test_no_sequences() {
        assert_eq!(sequences_length(""), 0);
        assert_eq!(sequences_length("a1b2"), 0);
        assert_eq!(sequences_length("qazwsx"), 0);
    }

    #[test]
    fn test_runs_inside_noise() {
        // "ZZ" + "qwerty" + "ZZ" + "1234" - only the runs count
        assert_eq!(sequences_length("ZZqwertyZZ1234"), 10);
    }

    #[test]
    fn test_cursor_skips_counted_run() {
        // "cba" is one reversed run of 3, not a run of 3 plus a run of 2
        assert_eq!(sequences_length("cba"), 3);
    }
}
