//! Custom Error Types
//!
//! Every error the ledger can return. Each variant maps to a stable
//! numeric code inside `ProgramError::Custom`, so clients can match on it.
//!
//! # Error Code Ranges
//!
//! | Range | Category |
//! |-------|----------|
//! | 0-4 | Account validation |
//! | 5-7 | Authority and ownership |
//! | 8-13 | Amount and balance |
//! | 14-19 | Mint and metadata parameters |
//! | 20-22 | Addressing and decoding |
//!
//! # Usage
//!
//! ```ignore
//! if amount == 0 {
//!     return Err(TokenError::InvalidAmount.into());
//! }
//! ```

use num_traits::FromPrimitive;
use solana_program::{
    decode_error::DecodeError,
    msg,
    program_error::{PrintProgramError, ProgramError},
};
use thiserror::Error;

// =============================================================================
// ERROR ENUM
// =============================================================================

/// Errors that may be returned by the token ledger program.
///
/// The code of a variant is its position in this enum.
/// Never reorder variants after deployment; append new ones at the end.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenError {
    // =========================================================================
    // ACCOUNT VALIDATION (0-4)
    // =========================================================================

    /// Error 0: Account is not owned by the ledger program.
    ///
    /// Records the program did not create cannot be trusted,
    /// whatever their bytes look like.
    #[error("Account not owned by token ledger program")]
    InvalidAccountOwner,

    /// Error 1: Account data has the wrong length for its record type.
    #[error("Invalid account data length")]
    InvalidAccountDataLength,

    /// Error 2: Mint account does not hold enough lamports to be rent exempt.
    #[error("Account is not rent exempt")]
    NotRentExempt,

    /// Error 3: Mint or metadata record already exists.
    ///
    /// A mint identity must be fresh, and metadata is created once.
    #[error("Account already initialized")]
    AlreadyInitialized,

    /// Error 4: Referenced mint or token account does not exist.
    #[error("Account not initialized")]
    UninitializedAccount,

    // =========================================================================
    // AUTHORITY AND OWNERSHIP (5-7)
    // =========================================================================

    /// Error 5: Signer is not the mint authority.
    #[error("Invalid authority: signer is not the mint authority")]
    InvalidAuthority,

    /// Error 6: Signer is not the owner of the token account.
    #[error("Invalid owner: signer does not own the token account")]
    InvalidOwner,

    /// Error 7: The mint authority has been revoked.
    ///
    /// Revocation is terminal: no mint or authority change can follow it.
    #[error("Mint authority required: authority has been revoked")]
    MintAuthorityRequired,

    // =========================================================================
    // AMOUNT AND BALANCE (8-13)
    // =========================================================================

    /// Error 8: Amount must be greater than zero.
    #[error("Invalid amount: amount must be greater than 0")]
    InvalidAmount,

    /// Error 9: Source and destination of a transfer are the same account.
    #[error("Invalid transfer: cannot transfer to the same account")]
    InvalidTransfer,

    /// Error 10: Debit exceeds the available balance.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// Error 11: A credit would exceed u64::MAX.
    #[error("Arithmetic overflow")]
    Overflow,

    /// Error 12: A debit would go below zero.
    ///
    /// Balance debits are guarded by `InsufficientFunds` first, so this
    /// only fires when a supply and its balances disagree.
    #[error("Arithmetic underflow")]
    Underflow,

    /// Error 13: Token account belongs to a different mint.
    #[error("Mint mismatch")]
    MintMismatch,

    // =========================================================================
    // MINT AND METADATA PARAMETERS (14-19)
    // =========================================================================

    /// Error 14: Decimals above the maximum of 9.
    #[error("Invalid decimals: decimals must be between 0 and 9")]
    InvalidDecimals,

    /// Error 15: Metadata name is empty.
    #[error("Invalid name: metadata name must not be empty")]
    InvalidName,

    /// Error 16: Metadata name longer than the fixed field.
    #[error("Metadata name too long")]
    NameTooLong,

    /// Error 17: Metadata symbol longer than the fixed field.
    #[error("Metadata symbol too long")]
    SymbolTooLong,

    /// Error 18: Metadata URI longer than the fixed field.
    #[error("Metadata URI too long")]
    UriTooLong,

    /// Error 19: Seller fee above 10000 basis points (100%).
    #[error("Invalid seller fee basis points")]
    InvalidSellerFeeBasisPoints,

    // =========================================================================
    // ADDRESSING AND DECODING (20-22)
    // =========================================================================

    /// Error 20: Account address does not match its derived address.
    ///
    /// Token accounts and metadata live at program-derived addresses;
    /// any other address is rejected.
    #[error("Account address does not match derived address")]
    InvalidAccountAddress,

    /// Error 21: Instruction data could not be parsed.
    #[error("Invalid instruction")]
    InvalidInstruction,

    /// Error 22: UI amount string is not a valid decimal for the mint.
    #[error("Invalid UI amount string")]
    InvalidAmountString,
}

impl TokenError {
    /// All variants in code order.
    const ALL: [TokenError; 23] = [
        TokenError::InvalidAccountOwner,
        TokenError::InvalidAccountDataLength,
        TokenError::NotRentExempt,
        TokenError::AlreadyInitialized,
        TokenError::UninitializedAccount,
        TokenError::InvalidAuthority,
        TokenError::InvalidOwner,
        TokenError::MintAuthorityRequired,
        TokenError::InvalidAmount,
        TokenError::InvalidTransfer,
        TokenError::InsufficientFunds,
        TokenError::Overflow,
        TokenError::Underflow,
        TokenError::MintMismatch,
        TokenError::InvalidDecimals,
        TokenError::InvalidName,
        TokenError::NameTooLong,
        TokenError::SymbolTooLong,
        TokenError::UriTooLong,
        TokenError::InvalidSellerFeeBasisPoints,
        TokenError::InvalidAccountAddress,
        TokenError::InvalidInstruction,
        TokenError::InvalidAmountString,
    ];
}

// =============================================================================
// CONVERSIONS
// =============================================================================

/// `TokenError::InvalidAmount.into()` yields `ProgramError::Custom(8)`,
/// which is what lets processors use `?` on ledger errors.
impl From<TokenError> for ProgramError {
    fn from(e: TokenError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

/// Decodes a custom error code back into the variant.
impl FromPrimitive for TokenError {
    fn from_i64(n: i64) -> Option<Self> {
        u64::try_from(n).ok().and_then(Self::from_u64)
    }

    fn from_u64(n: u64) -> Option<Self> {
        usize::try_from(n)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

impl<T> DecodeError<T> for TokenError {
    fn type_of() -> &'static str {
        "TokenError"
    }
}

impl PrintProgramError for TokenError {
    fn print<E>(&self)
    where
        E: 'static + std::error::Error + DecodeError<E> + PrintProgramError + FromPrimitive,
    {
        msg!("Error: {}", self);
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================
