//! Credential format validation rules
//!
//! One static rule per payment channel. Both are pure functions of their
//! input string: they depend on no account state, have no side effects,
//! and return the same result on repeated calls. Format validity is
//! independent of whether the credential matches anything stored on an
//! account.

/// Check whether a string is a well-formed card number
///
/// A card number is exactly 16 ASCII digits, nothing else. No Luhn check
/// or issuer ranges; the channel contract is a literal format match.
///
/// # Examples
///
/// ```
/// use payments_ledger::core::validation::is_valid_card_format;
///
/// assert!(is_valid_card_format("1234567890123456"));
/// assert!(!is_valid_card_format("1234-5678-9012-3456"));
/// ```
pub fn is_valid_card_format(card_number: &str) -> bool {
    card_number.len() == 16 && card_number.bytes().all(|b| b.is_ascii_digit())
}

/// Check whether a string is a well-formed wallet email
///
/// The rule is deliberately loose: the string must contain both `@` and
/// `.`. Full RFC address parsing is out of scope for a literal-match
/// credential.
///
/// # Examples
///
/// ```
/// use payments_ledger::core::validation::is_valid_email_format;
///
/// assert!(is_valid_email_format("user1@example.com"));
/// assert!(!is_valid_email_format("invalid"));
/// ```
pub fn is_valid_email_format(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::all_zeroes("0000000000000000", true)]
    #[case::typical("1234567890123456", true)]
    #[case::fifteen_digits("123456789012345", false)]
    #[case::seventeen_digits("12345678901234567", false)]
    #[case::with_dashes("1234-5678-9012-34", false)]
    #[case::with_letter("123456789012345a", false)]
    #[case::with_space("123456789012345 ", false)]
    #[case::empty("", false)]
    fn test_card_format(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_valid_card_format(input), expected);
    }

    #[rstest]
    #[case::typical("user1@example.com", true)]
    #[case::subdomain("a@b.co.il", true)]
    #[case::dot_before_at("first.last@example", true)]
    #[case::no_at("user1.example.com", false)]
    #[case::no_dot("user1@example", false)]
    #[case::neither("invalid", false)]
    #[case::empty("", false)]
    fn test_email_format(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email_format(input), expected);
    }

    #[test]
    fn test_validators_are_stable_across_calls() {
        let card = "1234567890123456";
        let email = "user1@example.com";

        for _ in 0..3 {
            assert!(is_valid_card_format(card));
            assert!(is_valid_email_format(email));
        }
    }
}
