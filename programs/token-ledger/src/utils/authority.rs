//! Authority Validation Utilities
//!
//! Two kinds of authority gate ledger mutations:
//!
//! 1. **Mint authority**: an optional key on the Mint. Present means
//!    that key alone may mint or rotate the authority. Absent means
//!    revoked, and nothing can ever pass this check again.
//! 2. **Account owner**: the key recorded in a token account. Only the
//!    owner may transfer out of or burn from it.
//!
//! Both checks compare keys first and signatures second, so a wrong key
//! is reported as a wrong key even when it did sign.

use crate::error::TokenError;
use crate::state::COption;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    program_error::ProgramError,
    pubkey::Pubkey,
};

// =============================================================================
// MINT AUTHORITY
// =============================================================================

/// Validate that `authority_info` is the mint authority and signed.
///
/// # Errors
///
/// * `MintAuthorityRequired` - the authority was revoked
/// * `InvalidAuthority` - a different key was provided
/// * `MissingRequiredSignature` - right key, no signature
///
/// # Example
///
/// ```ignore
/// validate_mint_authority(&mint.mint_authority, authority_info)?;
/// ```
pub fn validate_mint_authority(
    mint_authority: &COption<Pubkey>,
    authority_info: &AccountInfo,
) -> ProgramResult {
    let expected = mint_authority
        .as_ref()
        .ok_or(TokenError::MintAuthorityRequired)?;

    if authority_info.key != expected {
        return Err(TokenError::InvalidAuthority.into());
    }
    if !authority_info.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    Ok(())
}

// =============================================================================
// ACCOUNT OWNER
// =============================================================================

/// Validate that `owner_info` is the recorded owner and signed.
///
/// # Errors
///
/// * `InvalidOwner` - a different key was provided
/// * `MissingRequiredSignature` - right key, no signature
pub fn validate_owner(expected_owner: &Pubkey, owner_info: &AccountInfo) -> ProgramResult {
    if owner_info.key != expected_owner {
        return Err(TokenError::InvalidOwner.into());
    }
    if !owner_info.is_signer {
        return Err(ProgramError::MissingRequiredSignature);
    }

    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn signer_info<'a>(
        key: &'a Pubkey,
        is_signer: bool,
        lamports: &'a mut u64,
        data: &'a mut [u8],
        owner: &'a Pubkey,
    ) -> AccountInfo<'a> {
        AccountInfo::new(key, is_signer, false, lamports, data, owner, false, 0)
    }

    #[test]
    fn test_mint_authority_valid() {
        let key = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data: [u8; 0] = [];
        let authority = signer_info(&key, true, &mut lamports, &mut data, &owner);

        assert!(validate_mint_authority(&COption::some(key), &authority).is_ok());
    }

    #[test]
    fn test_mint_authority_revoked() {
        let key = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data: [u8; 0] = [];
        let authority = signer_info(&key, true, &mut lamports, &mut data, &owner);

        assert_eq!(
            validate_mint_authority(&COption::none(), &authority).unwrap_err(),
            TokenError::MintAuthorityRequired.into()
        );
    }

    #[test]
    fn test_mint_authority_wrong_key() {
        let expected = Pubkey::new_unique();
        let wrong = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data: [u8; 0] = [];
        let authority = signer_info(&wrong, true, &mut lamports, &mut data, &owner);

        assert_eq!(
            validate_mint_authority(&COption::some(expected), &authority).unwrap_err(),
            TokenError::InvalidAuthority.into()
        );
    }

    #[test]
    fn test_mint_authority_not_signer() {
        let key = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data: [u8; 0] = [];
        let authority = signer_info(&key, false, &mut lamports, &mut data, &owner);

        assert_eq!(
            validate_mint_authority(&COption::some(key), &authority).unwrap_err(),
            ProgramError::MissingRequiredSignature
        );
    }

    #[test]
    fn test_owner_valid_and_invalid() {
        let owner_key = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let system = Pubkey::new_unique();

        let mut lamports = 0;
        let mut data: [u8; 0] = [];
        let owner = signer_info(&owner_key, true, &mut lamports, &mut data, &system);
        assert!(validate_owner(&owner_key, &owner).is_ok());

        let mut lamports = 0;
        let mut data: [u8; 0] = [];
        let other = signer_info(&stranger, true, &mut lamports, &mut data, &system);
        assert_eq!(
            validate_owner(&owner_key, &other).unwrap_err(),
            TokenError::InvalidOwner.into()
        );
    }

    #[test]
    fn test_owner_wrong_key_reported_before_missing_signature() {
        let owner_key = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let system = Pubkey::new_unique();
        let mut lamports = 0;
        let mut data: [u8; 0] = [];
        let other = signer_info(&stranger, false, &mut lamports, &mut data, &system);

        assert_eq!(
            validate_owner(&owner_key, &other).unwrap_err(),
            TokenError::InvalidOwner.into()
        );
    }
}
