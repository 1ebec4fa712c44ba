//! Unicode general category classification.
//!
//! Thin adapter over the Unicode character database: every code point maps
//! to one of the 30 two-letter general-category codes from UAX #44.

use unicode_general_category::{GeneralCategory, get_general_category};

/// Returns the two-letter Unicode general-category code for a character.
///
/// The first letter of the code is the top-level category: L (letter),
/// M (mark), N (number), P (punctuation), S (symbol), Z (separator),
/// C (other).
pub(crate) fn category_code(c: char) -> &'static str {
    match get_general_category(c) {
        GeneralCategory::UppercaseLetter => "Lu",
        GeneralCategory::LowercaseLetter => "Ll",
        GeneralCategory::TitlecaseLetter => "Lt",
        GeneralCategory::ModifierLetter => "Lm",
        GeneralCategory::OtherLetter => "Lo",
        GeneralCategory::NonspacingMark => "Mn",
        GeneralCategory::SpacingMark => "Mc",
        GeneralCategory::EnclosingMark => "Me",
        GeneralCategory::DecimalNumber => "Nd",
        GeneralCategory::LetterNumber => "Nl",
        GeneralCategory::OtherNumber => "No",
        GeneralCategory::ConnectorPunctuation => "Pc",
        GeneralCategory::DashPunctuation => "Pd",
        GeneralCategory::OpenPunctuation => "Ps",
        GeneralCategory::ClosePunctuation => "Pe",
        GeneralCategory::InitialPunctuation => "Pi",
        GeneralCategory::FinalPunctuation => "Pf",
        GeneralCategory::OtherPunctuation => "Po",
        GeneralCategory::MathSymbol => "Sm",
        GeneralCategory::CurrencySymbol => "Sc",
        GeneralCategory::ModifierSymbol => "Sk",
        GeneralCategory::OtherSymbol => "So",
        GeneralCategory::SpaceSeparator => "Zs",
        GeneralCategory::LineSeparator => "Zl",
        GeneralCategory::ParagraphSeparator => "Zp",
        GeneralCategory::Control => "Cc",
        GeneralCategory::Format => "Cf",
        GeneralCategory::Surrogate => "Cs",
        GeneralCategory::PrivateUse => "Co",
        GeneralCategory::Unassigned => "Cn",
    }
}

/// Returns the top-level category letter for a two-letter code.
pub(crate) fn top_level(code: &str) -> char {
    code.as_bytes()[0] as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_code_letters() {
        assert_eq!(category_code('A'), "Lu");
        assert_eq!(category_code('a'), "Ll");
        assert_eq!(category_code('б'), "Ll");
        assert_eq!(category_code('漢'), "Lo");
    }

    #[test]
    fn test_category_code_numbers_and_punctuation() {
        assert_eq!(category_code('0'), "Nd");
        assert_eq!(category_code('9'), "Nd");
        assert_eq!(category_code('!'), "Po");
        assert_eq!(category_code('-'), "Pd");
    }

    #[test]
    fn test_category_code_symbols_separators_other() {
        assert_eq!(category_code('°'), "So");
        assert_eq!(category_code('+'), "Sm");
        assert_eq!(category_code('$'), "Sc");
        assert_eq!(category_code(' '), "Zs");
        assert_eq!(category_code('\0'), "Cc");
    }

    #[test]
    fn test_top_level() {
        assert_eq!(top_level("Lu"), 'L');
        assert_eq!(top_level("Nd"), 'N');
        assert_eq!(top_level("Zs"), 'Z');
    }
}
