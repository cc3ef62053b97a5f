//! Amount Arithmetic
//!
//! All ledger quantities are raw base units stored as `u64`.
//! `decimals` only says where the decimal point goes when a human reads
//! the number; it never rescales what is stored.
//!
//! ```text
//! decimals = 6
//! base units 1_500_000  <->  "1.5"
//! ```
//!
//! Every operation here fails instead of wrapping or truncating.

use crate::error::TokenError;
use solana_program::program_error::ProgramError;

/// Largest decimals value a mint may be created with.
pub const MAX_DECIMALS: u8 = 9;

// =============================================================================
// CHECKED ARITHMETIC
// =============================================================================

/// `a + b`, or `Overflow` if the sum does not fit in a u64.
///
/// ```ignore
/// mint.supply = checked_add(mint.supply, amount)?;
/// ```
pub fn checked_add(a: u64, b: u64) -> Result<u64, ProgramError> {
    a.checked_add(b).ok_or_else(|| TokenError::Overflow.into())
}

/// `a - b`, or `Underflow` if `b > a`.
///
/// Processors compare against the balance first and report
/// `InsufficientFunds`; this is the backstop.
pub fn checked_sub(a: u64, b: u64) -> Result<u64, ProgramError> {
    a.checked_sub(b).ok_or_else(|| TokenError::Underflow.into())
}

/// Validate a decimals argument against `MAX_DECIMALS`.
pub fn assert_valid_decimals(decimals: u8) -> Result<(), ProgramError> {
    if decimals > MAX_DECIMALS {
        return Err(TokenError::InvalidDecimals.into());
    }
    Ok(())
}

// =============================================================================
// UI AMOUNTS
// =============================================================================

/// Render base units as a decimal string with trailing zeros trimmed.
///
/// ```ignore
/// assert_eq!(amount_to_ui_string(1_500_000, 6), "1.5");
/// assert_eq!(amount_to_ui_string(42, 0), "42");
/// ```
pub fn amount_to_ui_string(amount: u64, decimals: u8) -> String {
    let decimals = decimals as usize;
    if decimals == 0 {
        return amount.to_string();
    }

    // Left-pad so there is always at least one whole digit
    let digits = format!("{:0>width$}", amount, width = decimals + 1);
    let (whole, fraction) = digits.split_at(digits.len() - decimals);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction)
    }
}

/// Parse a decimal string into base units.
///
/// Trailing fractional zeros are accepted; any other digit past
/// `decimals` would be lost, so the string is rejected instead.
///
/// # Errors
///
/// * `InvalidAmountString` - empty, non-digit, or too many fractional digits
/// * `Overflow` - value does not fit in a u64
pub fn ui_string_to_amount(ui_amount: &str, decimals: u8) -> Result<u64, ProgramError> {
    let (whole, fraction) = ui_amount.split_once('.').unwrap_or((ui_amount, ""));

    if whole.is_empty() && fraction.is_empty() {
        return Err(TokenError::InvalidAmountString.into());
    }
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole) || !is_digits(fraction) {
        return Err(TokenError::InvalidAmountString.into());
    }

    let fraction = fraction.trim_end_matches('0');
    if fraction.len() > decimals as usize {
        return Err(TokenError::InvalidAmountString.into());
    }

    let scale = 10u64
        .checked_pow(decimals as u32)
        .ok_or(TokenError::Overflow)?;

    let whole_units = parse_digits(whole)?
        .checked_mul(scale)
        .ok_or(TokenError::Overflow)?;

    // "5" with 3 decimals means 500 base units
    let padding = 10u64
        .checked_pow((decimals as usize - fraction.len()) as u32)
        .ok_or(TokenError::Overflow)?;
    let fraction_units = parse_digits(fraction)?
        .checked_mul(padding)
        .ok_or(TokenError::Overflow)?;

    checked_add(whole_units, fraction_units)
}

fn parse_digits(digits: &str) -> Result<u64, ProgramError> {
    digits.bytes().try_fold(0u64, |acc, b| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(u64::from(b - b'0')))
            .ok_or_else(|| TokenError::Overflow.into())
    })
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add() {
        assert_eq!(checked_add(100, 200).unwrap(), 300);
        assert_eq!(checked_add(u64::MAX - 1, 1).unwrap(), u64::MAX);
        assert_eq!(
            checked_add(u64::MAX, 1).unwrap_err(),
            TokenError::Overflow.into()
        );
    }

    #[test]
    fn test_checked_sub() {
        assert_eq!(checked_sub(300, 200).unwrap(), 100);
        assert_eq!(checked_sub(100, 100).unwrap(), 0);
        assert_eq!(
            checked_sub(0, 1).unwrap_err(),
            TokenError::Underflow.into()
        );
    }

    #[test]
    fn test_decimals_bound() {
        for decimals in 0..=MAX_DECIMALS {
            assert!(assert_valid_decimals(decimals).is_ok());
        }
        assert_eq!(
            assert_valid_decimals(10).unwrap_err(),
            TokenError::InvalidDecimals.into()
        );
        assert!(assert_valid_decimals(u8::MAX).is_err());
    }

    #[test]
    fn test_amount_to_ui_string() {
        assert_eq!(amount_to_ui_string(1_500_000, 6), "1.5");
        assert_eq!(amount_to_ui_string(0, 9), "0");
        assert_eq!(amount_to_ui_string(1, 9), "0.000000001");
        assert_eq!(amount_to_ui_string(1_000_000_000_000, 9), "1000");
        assert_eq!(amount_to_ui_string(42, 0), "42");
        assert_eq!(
            amount_to_ui_string(u64::MAX, 9),
            "18446744073.709551615"
        );
    }

    #[test]
    fn test_ui_string_to_amount() {
        assert_eq!(ui_string_to_amount("1.5", 6).unwrap(), 1_500_000);
        assert_eq!(ui_string_to_amount("1000", 9).unwrap(), 1_000_000_000_000);
        assert_eq!(ui_string_to_amount(".5", 1).unwrap(), 5);
        assert_eq!(ui_string_to_amount("2.", 2).unwrap(), 200);
        assert_eq!(ui_string_to_amount("0.10", 1).unwrap(), 1);
        assert_eq!(ui_string_to_amount("7", 0).unwrap(), 7);
    }

    #[test]
    fn test_ui_string_to_amount_rejects_truncation() {
        assert_eq!(
            ui_string_to_amount("0.001", 2).unwrap_err(),
            TokenError::InvalidAmountString.into()
        );
        assert_eq!(
            ui_string_to_amount("1.5", 0).unwrap_err(),
            TokenError::InvalidAmountString.into()
        );
    }

    #[test]
    fn test_ui_string_to_amount_rejects_garbage() {
        for bad in ["", ".", "abc", "1.2.3", "-1", "1e9", " 1"] {
            assert_eq!(
                ui_string_to_amount(bad, 9).unwrap_err(),
                TokenError::InvalidAmountString.into(),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_ui_string_to_amount_overflow() {
        assert_eq!(
            ui_string_to_amount("18446744074", 9).unwrap_err(),
            TokenError::Overflow.into()
        );
        assert_eq!(
            ui_string_to_amount("99999999999999999999", 0).unwrap_err(),
            TokenError::Overflow.into()
        );
        assert_eq!(
            ui_string_to_amount("18446744073.709551615", 9).unwrap(),
            u64::MAX
        );
    }
}
