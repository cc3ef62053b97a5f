//! Assertion Helper Functions
//!
//! Common validation checks used across all processors.
//!
//! # Usage Pattern
//!
//! ```ignore
//! pub fn process(...) -> ProgramResult {
//!     // Validate everything first
//!     assert_exists(mint_info)?;
//!     assert_owned_by(mint_info, program_id)?;
//!     assert_writable(mint_info)?;
//!     assert_data_length(mint_info, Mint::LEN)?;
//!
//!     // Then compute, then write
//!     ...
//! }
//! ```

use crate::error::TokenError;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    system_program,
};

// =============================================================================
// OWNERSHIP CHECKS
// =============================================================================

/// Assert that an account is owned by the expected program.
///
/// A record owned by anyone else could hold forged bytes shaped like a
/// valid Mint or token account.
///
/// # Errors
///
/// Returns `InvalidAccountOwner` if the owner doesn't match.
pub fn assert_owned_by(account: &AccountInfo, owner: &Pubkey) -> ProgramResult {
    if account.owner != owner {
        Err(TokenError::InvalidAccountOwner.into())
    } else {
        Ok(())
    }
}

/// Assert that a record has been allocated at this address.
///
/// An address with nothing stored at it is reported as uninitialized,
/// whoever happens to own it.
///
/// # Errors
///
/// Returns `UninitializedAccount` if the account holds no data.
pub fn assert_exists(account: &AccountInfo) -> ProgramResult {
    if account.data_len() == 0 {
        Err(TokenError::UninitializedAccount.into())
    } else {
        Ok(())
    }
}

/// Assert that an account holds no data yet and is not owned by this program.
///
/// This is the "does not exist" state of a PDA before the program
/// allocates it. It may already hold lamports.
///
/// # Errors
///
/// Returns `AlreadyInitialized` if the account already holds data.
pub fn assert_unallocated(account: &AccountInfo, program_id: &Pubkey) -> ProgramResult {
    if account.data_len() > 0 || account.owner == program_id {
        Err(TokenError::AlreadyInitialized.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// SIGNER AND WRITABLE CHECKS
// =============================================================================

/// Assert that an account signed the transaction.
///
/// # Errors
///
/// Returns `MissingRequiredSignature` if not a signer.
pub fn assert_signer(account: &AccountInfo) -> ProgramResult {
    if !account.is_signer {
        Err(ProgramError::MissingRequiredSignature)
    } else {
        Ok(())
    }
}

/// Assert that an account is writable.
///
/// The runtime would reject the write anyway; checking up front gives a
/// clearer error before any work is done.
///
/// # Errors
///
/// Returns `InvalidAccountData` if not writable.
pub fn assert_writable(account: &AccountInfo) -> ProgramResult {
    if !account.is_writable {
        Err(ProgramError::InvalidAccountData)
    } else {
        Ok(())
    }
}

// =============================================================================
// SIZE AND RENT CHECKS
// =============================================================================

/// Assert that an account has the expected data length.
///
/// # Errors
///
/// Returns `InvalidAccountDataLength` if length doesn't match.
pub fn assert_data_length(account: &AccountInfo, expected: usize) -> ProgramResult {
    if account.data_len() != expected {
        Err(TokenError::InvalidAccountDataLength.into())
    } else {
        Ok(())
    }
}

/// Assert that an account holds enough lamports to be rent exempt.
///
/// # Errors
///
/// Returns `NotRentExempt` if it doesn't.
pub fn assert_rent_exempt(rent: &Rent, account: &AccountInfo) -> ProgramResult {
    if !rent.is_exempt(account.lamports(), account.data_len()) {
        Err(TokenError::NotRentExempt.into())
    } else {
        Ok(())
    }
}

// =============================================================================
// PROGRAM CHECKS
// =============================================================================

/// Assert that the account passed as the system program really is it.
///
/// # Errors
///
/// Returns `IncorrectProgramId` otherwise.
pub fn assert_system_program(account: &AccountInfo) -> ProgramResult {
    if !system_program::check_id(account.key) {
        Err(ProgramError::IncorrectProgramId)
    } else {
        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn account_info<'a>(
        key: &'a Pubkey,
        is_signer: bool,
        is_writable: bool,
        lamports: &'a mut u64,
        data: &'a mut [u8],
        owner: &'a Pubkey,
    ) -> AccountInfo<'a> {
        AccountInfo::new(key, is_signer, is_writable, lamports, data, owner, false, 0)
    }

    #[test]
    fn test_assert_owned_by() {
        let key = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data: [u8; 0] = [];
        let account = account_info(&key, false, false, &mut lamports, &mut data, &program_id);

        assert!(assert_owned_by(&account, &program_id).is_ok());
        assert_eq!(
            assert_owned_by(&account, &Pubkey::new_unique()).unwrap_err(),
            TokenError::InvalidAccountOwner.into()
        );
    }

    #[test]
    fn test_assert_exists() {
        let key = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let system = system_program::id();

        let mut lamports = 0;
        let mut data: [u8; 0] = [];
        let missing = account_info(&key, false, false, &mut lamports, &mut data, &system);
        assert_eq!(
            assert_exists(&missing).unwrap_err(),
            TokenError::UninitializedAccount.into()
        );

        let mut lamports = 1_000;
        let mut data = [0u8; 8];
        let present = account_info(&key, false, false, &mut lamports, &mut data, &program_id);
        assert!(assert_exists(&present).is_ok());
    }

    #[test]
    fn test_assert_unallocated() {
        let key = Pubkey::new_unique();
        let program_id = Pubkey::new_unique();
        let system = system_program::id();

        // Pre-funded but empty system account still counts as absent
        let mut lamports = 1_000;
        let mut data: [u8; 0] = [];
        let empty = account_info(&key, false, true, &mut lamports, &mut data, &system);
        assert!(assert_unallocated(&empty, &program_id).is_ok());

        let mut lamports = 1_000;
        let mut data = [0u8; 8];
        let allocated = account_info(&key, false, true, &mut lamports, &mut data, &program_id);
        assert_eq!(
            assert_unallocated(&allocated, &program_id).unwrap_err(),
            TokenError::AlreadyInitialized.into()
        );
    }

    #[test]
    fn test_assert_signer_and_writable() {
        let key = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data: [u8; 0] = [];
        let account = account_info(&key, false, false, &mut lamports, &mut data, &owner);

        assert_eq!(
            assert_signer(&account).unwrap_err(),
            ProgramError::MissingRequiredSignature
        );
        assert_eq!(
            assert_writable(&account).unwrap_err(),
            ProgramError::InvalidAccountData
        );
    }

    #[test]
    fn test_assert_data_length() {
        let key = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data = [0u8; 10];
        let account = account_info(&key, false, false, &mut lamports, &mut data, &owner);

        assert!(assert_data_length(&account, 10).is_ok());
        assert_eq!(
            assert_data_length(&account, 11).unwrap_err(),
            TokenError::InvalidAccountDataLength.into()
        );
    }

    #[test]
    fn test_assert_system_program() {
        let system = system_program::id();
        let loader = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data: [u8; 0] = [];
        let account = account_info(&system, false, false, &mut lamports, &mut data, &loader);
        assert!(assert_system_program(&account).is_ok());

        let other = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data: [u8; 0] = [];
        let account = account_info(&other, false, false, &mut lamports, &mut data, &loader);
        assert_eq!(
            assert_system_program(&account).unwrap_err(),
            ProgramError::IncorrectProgramId
        );
    }
}
