//! Constrained random password generation.
//!
//! Every password contains at least one uppercase letter, one digit and
//! one special character; the rest is drawn from the full alphabet and
//! the result is shuffled so the guaranteed characters can land anywhere.

use std::fmt;

use zeroize::Zeroizing;

use crate::crypto::random;
use crate::errors::Result;

/// Shortest password we will produce.
pub const MIN_LENGTH: usize = 8;

/// Longest password we will produce.
pub const MAX_LENGTH: usize = 32;

/// Length used when the request is missing or unusable.
pub const DEFAULT_LENGTH: usize = 10;

/// Lowercase letters; the filler alphabet always includes them.
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
/// Uppercase letters; at least one per password.
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Decimal digits; at least one per password.
pub const DIGITS: &[u8] = b"0123456789";
/// Special characters; at least one per password.
pub const SPECIAL: &[u8] = b"!@#$%^&*()-_=+";

/// Why a requested length was not used as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthNotice {
    /// The input was not a number.
    Unparsable,
    /// The input was above `MAX_LENGTH`.
    ExceedsMaximum,
    /// The input was zero or negative.
    NonPositive,
    /// The input was positive but below `MIN_LENGTH`.
    RaisedToMinimum,
}

impl fmt::Display for LengthNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthNotice::Unparsable => write!(
                f,
                "Invalid input, please enter a numeric value. Using default length of {DEFAULT_LENGTH}."
            ),
            LengthNotice::ExceedsMaximum => write!(
                f,
                "Password length cannot exceed {MAX_LENGTH}. Using default length of {DEFAULT_LENGTH}."
            ),
            LengthNotice::NonPositive => write!(
                f,
                "Password length must be positive. Using default length of {DEFAULT_LENGTH}."
            ),
            LengthNotice::RaisedToMinimum => write!(
                f,
                "Password length must be at least {MIN_LENGTH}. Using {MIN_LENGTH}."
            ),
        }
    }
}

/// The length that will actually be generated, plus the reason if it
/// differs from what was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthChoice {
    pub length: usize,
    pub notice: Option<LengthNotice>,
}

/// Clamp a numeric length request into `[MIN_LENGTH, MAX_LENGTH]`.
pub fn effective_length(requested: i64) -> LengthChoice {
    let (length, notice) = if requested <= 0 {
        (DEFAULT_LENGTH, Some(LengthNotice::NonPositive))
    } else if requested > MAX_LENGTH as i64 {
        (DEFAULT_LENGTH, Some(LengthNotice::ExceedsMaximum))
    } else if requested < MIN_LENGTH as i64 {
        (MIN_LENGTH, Some(LengthNotice::RaisedToMinimum))
    } else {
        (requested as usize, None)
    };
    LengthChoice { length, notice }
}

/// Resolve a length typed by the user.
///
/// Blank input silently selects the default.
pub fn resolve_length(input: &str) -> LengthChoice {
    let input = input.trim();
    if input.is_empty() {
        return LengthChoice {
            length: DEFAULT_LENGTH,
            notice: None,
        };
    }
    match input.parse::<i64>() {
        Ok(n) => effective_length(n),
        Err(_) => LengthChoice {
            length: DEFAULT_LENGTH,
            notice: Some(LengthNotice::Unparsable),
        },
    }
}

/// Generate a password of (clamped) `length` characters.
///
/// Fails only if the OS randomness source does.
pub fn generate(length: usize) -> Result<Zeroizing<String>> {
    let length = effective_length(i64::try_from(length).unwrap_or(i64::MAX)).length;
    let universe: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, SPECIAL].concat();

    let mut chars = Zeroizing::new(Vec::with_capacity(length));
    chars.push(pick(UPPERCASE)?);
    chars.push(pick(DIGITS)?);
    chars.push(pick(SPECIAL)?);
    while chars.len() < length {
        chars.push(pick(&universe)?);
    }

    // Fisher–Yates.
    for i in (1..chars.len()).rev() {
        let j = random::index_below(i + 1)?;
        chars.swap(i, j);
    }

    let password: String = chars.iter().map(|b| char::from(*b)).collect();
    Ok(Zeroizing::new(password))
}

fn pick(set: &[u8]) -> Result<u8> {
    Ok(set[random::index_below(set.len())?])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_universe(c: char) -> bool {
        let b = c as u32;
        b < 128
            && [LOWERCASE, UPPERCASE, DIGITS, SPECIAL]
                .iter()
                .any(|set| set.contains(&(b as u8)))
    }

    #[test]
    fn every_valid_length_meets_composition_rules() {
        for len in MIN_LENGTH..=MAX_LENGTH {
            for _ in 0..20 {
                let pw = generate(len).unwrap();
                assert_eq!(pw.len(), len);
                assert!(pw.chars().any(|c| c.is_ascii_uppercase()), "{}", *pw);
                assert!(pw.chars().any(|c| c.is_ascii_digit()), "{}", *pw);
                assert!(
                    pw.bytes().any(|b| SPECIAL.contains(&b)),
                    "no special char in {}",
                    *pw
                );
                assert!(pw.chars().all(in_universe));
            }
        }
    }

    #[test]
    fn short_requests_are_raised_to_minimum() {
        for len in 1..MIN_LENGTH {
            assert_eq!(generate(len).unwrap().len(), MIN_LENGTH);
        }
    }

    #[test]
    fn zero_and_oversized_requests_use_default() {
        assert_eq!(generate(0).unwrap().len(), DEFAULT_LENGTH);
        assert_eq!(generate(33).unwrap().len(), DEFAULT_LENGTH);
        assert_eq!(generate(usize::MAX).unwrap().len(), DEFAULT_LENGTH);
    }

    #[test]
    fn guaranteed_classes_are_not_pinned_to_the_front() {
        // With a real shuffle the first character is a digit only ~1/8 of
        // the time at length 8; never seeing it across 300 runs would mean
        // the guaranteed characters stay in fixed slots.
        let moved = (0..300).any(|_| {
            let pw = generate(MIN_LENGTH).unwrap();
            let first = pw.as_bytes()[0];
            !first.is_ascii_uppercase()
        });
        assert!(moved);
    }

    #[test]
    fn consecutive_passwords_differ() {
        let a = generate(16).unwrap();
        let b = generate(16).unwrap();
        assert_ne!(*a, *b);
    }

    #[test]
    fn resolve_length_blank_uses_default_silently() {
        assert_eq!(
            resolve_length("  "),
            LengthChoice {
                length: DEFAULT_LENGTH,
                notice: None
            }
        );
    }

    #[test]
    fn resolve_length_distinguishes_unparsable_from_too_long() {
        let bad = resolve_length("twelve");
        let long = resolve_length("40");
        assert_eq!(bad.length, DEFAULT_LENGTH);
        assert_eq!(long.length, DEFAULT_LENGTH);
        assert_eq!(bad.notice, Some(LengthNotice::Unparsable));
        assert_eq!(long.notice, Some(LengthNotice::ExceedsMaximum));
        assert_ne!(bad.notice.unwrap().to_string(), long.notice.unwrap().to_string());
    }

    #[test]
    fn resolve_length_clamps_numbers() {
        assert_eq!(resolve_length("12").length, 12);
        assert_eq!(resolve_length("12").notice, None);
        assert_eq!(resolve_length("32").length, 32);
        assert_eq!(resolve_length("3").length, MIN_LENGTH);
        assert_eq!(
            resolve_length("3").notice,
            Some(LengthNotice::RaisedToMinimum)
        );
        assert_eq!(resolve_length("0").length, DEFAULT_LENGTH);
        assert_eq!(resolve_length("-5").notice, Some(LengthNotice::NonPositive));
    }
}
