use crate::error::{MaidenheadError, Result, ValidationRule};
use crate::index::constants::LOCATOR_LENGTH;
use tracing::debug;

/// Per-position checks, evaluated left to right. The first failing rule is reported.
const POSITION_RULES: [(fn(char) -> bool, ValidationRule); LOCATOR_LENGTH] = [
    (is_field_letter, ValidationRule::FirstChar),
    (is_field_letter, ValidationRule::SecondChar),
    (is_square_digit, ValidationRule::ThirdChar),
    (is_square_digit, ValidationRule::FourthChar),
    (is_subsquare_letter, ValidationRule::FifthChar),
    (is_subsquare_letter, ValidationRule::SixthChar),
];

fn is_field_letter(c: char) -> bool {
    ('A'..='R').contains(&c)
}

fn is_square_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_subsquare_letter(c: char) -> bool {
    ('a'..='x').contains(&c)
}

/// Folds a locator to the canonical `AA99aa` case pattern.
///
/// Only six-character input is touched: the field letters are uppercased and the
/// subsquare letters lowercased, digits are left alone. Anything else is returned
/// unchanged. No validation happens here.
///
/// # Example
/// ```
/// use maidenhead_rs::normalize;
///
/// assert_eq!(normalize("jN58Td"), "JN58td");
/// assert_eq!(normalize("JN58T"), "JN58T");
/// ```
pub fn normalize(input: &str) -> String {
    if input.chars().count() != LOCATOR_LENGTH {
        return input.to_string();
    }

    input
        .chars()
        .enumerate()
        .map(|(i, c)| match i {
            0 | 1 => c.to_ascii_uppercase(),
            4 | 5 => c.to_ascii_lowercase(),
            _ => c,
        })
        .collect()
}

/// Checks an already normalized locator against the `AA99aa` grammar.
///
/// # Grammar
///
/// | Position | Accepts | Meaning                    |
/// |----------|---------|----------------------------|
/// | 0        | `A-R`   | Longitude field (20°)      |
/// | 1        | `A-R`   | Latitude field (10°)       |
/// | 2        | `0-9`   | Longitude square (2°)      |
/// | 3        | `0-9`   | Latitude square (1°)       |
/// | 4        | `a-x`   | Longitude subsquare (5')   |
/// | 5        | `a-x`   | Latitude subsquare (2.5')  |
///
/// Case is checked strictly, so `"an58td"` is rejected. Call [`normalize`] first
/// when accepting user input.
///
/// # Errors
///
/// [`MaidenheadError::InvalidGridSquare`] carrying the first rule broken, checked
/// length first and then position by position.
pub fn validate(input: &str) -> Result<()> {
    let chars: Vec<char> = input.chars().collect();

    if chars.len() != LOCATOR_LENGTH {
        debug!(input = %input, rule = %ValidationRule::Length, "rejected locator");
        return Err(MaidenheadError::invalid(input, ValidationRule::Length));
    }

    for (&c, (check, rule)) in chars.iter().zip(POSITION_RULES.iter()) {
        if !check(c) {
            debug!(input = %input, rule = %rule, "rejected locator");
            return Err(MaidenheadError::invalid(input, *rule));
        }
    }

    Ok(())
}

/// Normalizes then validates, returning the canonical locator.
pub fn canonicalize(input: &str) -> Result<String> {
    let normalized = normalize(input);
    validate(&normalized)?;
    Ok(normalized)
}
