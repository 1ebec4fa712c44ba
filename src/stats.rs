//! Password statistics - character classes, entropy, weakness signals.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::OnceLock;

use num_bigint::BigUint;
use num_traits::Pow;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::categories;
use crate::detectors;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatsError {
    #[error("no strength normalization formula is defined")]
    StrengthNotImplemented,
}

/// Statistics for a single password.
///
/// The password is never mutated after construction; every derived value is
/// a pure function of it, computed on first access and cached for the
/// lifetime of the instance, so repeated calls return identical results.
/// Caching uses [`OnceLock`], so a shared instance is safe to query from
/// several threads.
///
/// # Example
///
/// ```rust
/// use pwd_stats::PasswordStats;
///
/// let stats = PasswordStats::new("Tr0ub4dor&3");
/// assert_eq!(stats.length(), 11);
/// assert_eq!(stats.letters_uppercase(), 1);
/// assert_eq!(stats.numbers(), 3);
/// assert_eq!(stats.special_characters(), 1);
/// println!("entropy: {:.2} bits", stats.entropy_bits());
/// ```
pub struct PasswordStats {
    password: String,
    length: OnceLock<usize>,
    alphabet: OnceLock<HashSet<char>>,
    char_categories_detailed: OnceLock<HashMap<&'static str, usize>>,
    char_categories: OnceLock<HashMap<char, usize>>,
    combinations: OnceLock<BigUint>,
    repeated_patterns_length: OnceLock<usize>,
    sequences_length: OnceLock<usize>,
}

impl PasswordStats {
    /// Creates statistics for the given password.
    ///
    /// Any valid Unicode string is accepted, including the empty string.
    /// Nothing is computed until the first accessor call.
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            length: OnceLock::new(),
            alphabet: OnceLock::new(),
            char_categories_detailed: OnceLock::new(),
            char_categories: OnceLock::new(),
            combinations: OnceLock::new(),
            repeated_patterns_length: OnceLock::new(),
            sequences_length: OnceLock::new(),
        }
    }

    /// Creates statistics from a [`SecretString`].
    ///
    /// The secret is exposed only to copy it into the analysis instance;
    /// the instance itself never logs or prints the password.
    pub fn from_secret(password: &SecretString) -> Self {
        Self::new(password.expose_secret())
    }

    /// The analyzed password.
    pub fn password(&self) -> &str {
        &self.password
    }

    // region: Statistics

    /// The alphabet: set of distinct characters used in the password.
    pub fn alphabet(&self) -> &HashSet<char> {
        self.alphabet
            .get_or_init(|| self.password.chars().collect())
    }

    /// Alphabet cardinality: number of distinct characters.
    pub fn alphabet_cardinality(&self) -> usize {
        self.alphabet().len()
    }

    /// Character count per Unicode general category, detailed format.
    ///
    /// Keys are two-letter category codes, see
    /// <http://www.unicode.org/reports/tr44/#GC_Values_Table>.
    pub fn char_categories_detailed(&self) -> &HashMap<&'static str, usize> {
        self.char_categories_detailed.get_or_init(|| {
            let mut counts = HashMap::new();
            for c in self.password.chars() {
                *counts.entry(categories::category_code(c)).or_insert(0) += 1;
            }
            counts
        })
    }

    /// Character count per top-level category.
    ///
    /// The following top-level categories are defined:
    ///
    /// - `L`: letter
    /// - `M`: mark
    /// - `N`: number
    /// - `P`: punctuation
    /// - `S`: symbol
    /// - `Z`: separator
    /// - `C`: other
    pub fn char_categories(&self) -> &HashMap<char, usize> {
        self.char_categories.get_or_init(|| {
            let mut counts = HashMap::new();
            for (code, n) in self.char_categories_detailed() {
                *counts.entry(categories::top_level(code)).or_insert(0) += *n;
            }
            counts
        })
    }

    // endregion

    // region: Counters

    /// Password length in code points.
    pub fn length(&self) -> usize {
        *self.length.get_or_init(|| self.password.chars().count())
    }

    /// Count of all letters.
    pub fn letters(&self) -> usize {
        self.top_category_count('L')
    }

    /// Count of uppercase letters.
    pub fn letters_uppercase(&self) -> usize {
        self.detailed_category_count("Lu")
    }

    /// Count of lowercase letters.
    pub fn letters_lowercase(&self) -> usize {
        self.detailed_category_count("Ll")
    }

    /// Count of numbers.
    pub fn numbers(&self) -> usize {
        self.top_category_count('N')
    }

    /// Count of characters belonging to the given top-level categories.
    pub fn count(&self, categories: &[char]) -> usize {
        self.char_categories()
            .iter()
            .filter(|&(cat, _)| categories.contains(cat))
            .map(|(_, n)| *n)
            .sum()
    }

    /// Count of characters belonging to none of the given top-level
    /// categories.
    pub fn count_except(&self, categories: &[char]) -> usize {
        self.char_categories()
            .iter()
            .filter(|&(cat, _)| !categories.contains(cat))
            .map(|(_, n)| *n)
            .sum()
    }

    /// Count of special characters: everything that is not a letter or a
    /// number.
    pub fn special_characters(&self) -> usize {
        self.count_except(&['L', 'N'])
    }

    fn detailed_category_count(&self, code: &str) -> usize {
        self.char_categories_detailed()
            .get(code)
            .copied()
            .unwrap_or(0)
    }

    fn top_category_count(&self, category: char) -> usize {
        self.char_categories()
            .get(&category)
            .copied()
            .unwrap_or(0)
    }

    // endregion

    // region: Security

    /// The number of possible passwords with the current alphabet and
    /// length: `alphabet_cardinality ^ length`.
    ///
    /// Exact value; grows without bound, hence the big integer.
    pub fn combinations(&self) -> &BigUint {
        self.combinations.get_or_init(|| {
            Pow::pow(
                BigUint::from(self.alphabet_cardinality()),
                self.length(),
            )
        })
    }

    /// Information entropy bits: log2 of the number of possible passwords.
    ///
    /// `0.0` for the empty password and for a single-character alphabet.
    pub fn entropy_bits(&self) -> f64 {
        let length = self.length();
        let cardinality = self.alphabet_cardinality();
        if length == 0 || cardinality <= 1 {
            return 0.0;
        }
        length as f64 * (cardinality as f64).log2()
    }

    /// Information entropy density factor, ranged 0..1: the alphabet
    /// cardinality's logarithm in base `length`.
    ///
    /// `0.0` for passwords shorter than two characters and for a
    /// single-character alphabet.
    pub fn entropy_density(&self) -> f64 {
        let length = self.length();
        let cardinality = self.alphabet_cardinality();
        if length <= 1 || cardinality <= 1 {
            return 0.0;
        }
        (cardinality as f64).log2() / (length as f64).log2()
    }

    /// Password strength as a number normalized to range 0..1.
    ///
    /// No normalization formula has been defined yet, so this always
    /// returns [`StatsError::StrengthNotImplemented`] rather than a
    /// misleading value.
    pub fn strength(&self) -> Result<f64, StatsError> {
        Err(StatsError::StrengthNotImplemented)
    }

    // endregion

    // region: Detectors

    /// Total length of repeated patterns: substrings made of a shorter
    /// unit repeated two or more times contiguously, matched
    /// case-insensitively without overlap.
    ///
    /// You will probably be comparing it with the length of the password
    /// itself, banning when it covers too large a share.
    pub fn repeated_patterns_length(&self) -> usize {
        *self
            .repeated_patterns_length
            .get_or_init(|| detectors::repeated_patterns_length(&self.password))
    }

    /// Total length of weak sequence runs, matched case-insensitively in
    /// both directions:
    ///
    /// - Alphabet letters: abcd...
    /// - Keyboard letters: qwerty, etc
    /// - Keyboard special characters in the top row: ~!@#$%^&*()_+
    /// - Numbers: 0123456
    ///
    /// and all of those reversed.
    pub fn sequences_length(&self) -> usize {
        *self
            .sequences_length
            .get_or_init(|| detectors::sequences_length(&self.password))
    }

    /// Combined weak-span proportion, ranged 0..1: the share of the
    /// password covered by repeated patterns and sequence runs, capped at
    /// `1.0`. The two detector spans are reported independently and may
    /// overlap, which the cap absorbs.
    pub fn weakness_factor(&self) -> f64 {
        let length = self.length();
        if length == 0 {
            return 0.0;
        }
        let weak = (self.repeated_patterns_length() + self.sequences_length()) as f64;
        (weak / length as f64).min(1.0)
    }

    // endregion
}

impl fmt::Debug for PasswordStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The password itself stays out of debug output
        f.debug_struct("PasswordStats")
            .field("length", &self.length())
            .field("alphabet_cardinality", &self.alphabet_cardinality())
            .finish_non_exhaustive()
    }
}
