//! Password statistics library
//!
//! This library computes quantitative statistics and weakness signals for
//! a single password: character-class composition, alphabet size,
//! information-entropy estimate, and detection of repeated or sequence
//! substrings. It is a pure analysis engine; acceptance thresholds and
//! policy decisions belong to the calling code.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_stats::PasswordStats;
//!
//! // Character classes and entropy
//! let stats = PasswordStats::new("Tr0ub4dor&3");
//! assert_eq!(stats.length(), 11);
//! assert_eq!(stats.letters(), 7);
//! assert_eq!(stats.numbers(), 3);
//! assert_eq!(stats.special_characters(), 1);
//! println!("{:.2} bits", stats.entropy_bits());
//!
//! // Weak-pattern detectors flag predictable structure
//! let weak = PasswordStats::new("qwerty");
//! assert_eq!(weak.sequences_length(), 6);
//! assert_eq!(PasswordStats::new("abcabcabc").repeated_patterns_length(), 9);
//!
//! // A caller might ban anything with more than 10% weak coverage
//! assert!(weak.weakness_factor() > 0.1);
//! ```

// Internal modules
mod categories;
mod detectors;
mod stats;

// Public API
pub use stats::{PasswordStats, StatsError};
