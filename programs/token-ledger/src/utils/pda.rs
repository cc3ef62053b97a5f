//! Program-Derived Addresses
//!
//! Token accounts and metadata records live at addresses derived from
//! their logical key, so a caller computes a record's location without
//! any lookup table:
//!
//! ```text
//! token account: [b"token_account", mint, owner] -> PDA
//! metadata:      [b"metadata", mint]             -> PDA
//! ```
//!
//! Only this program can sign for these addresses, which is what lets it
//! allocate them on the caller's behalf.

use crate::error::TokenError;
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

/// Seed prefix for token account addresses.
pub const TOKEN_ACCOUNT_SEED: &[u8] = b"token_account";

/// Seed prefix for metadata addresses.
pub const METADATA_SEED: &[u8] = b"metadata";

/// Derive the token account address and bump for `(mint, owner)`.
pub fn find_token_account_address(
    program_id: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[TOKEN_ACCOUNT_SEED, mint.as_ref(), owner.as_ref()],
        program_id,
    )
}

/// Token account address for `(mint, owner)` under the deployed program id.
pub fn get_token_account_address(mint: &Pubkey, owner: &Pubkey) -> Pubkey {
    find_token_account_address(&crate::id(), mint, owner).0
}

/// Derive the metadata address and bump for `mint`.
pub fn find_metadata_address(program_id: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[METADATA_SEED, mint.as_ref()], program_id)
}

/// Metadata address for `mint` under the deployed program id.
pub fn get_metadata_address(mint: &Pubkey) -> Pubkey {
    find_metadata_address(&crate::id(), mint).0
}

/// Check that `address` is the token account PDA of `(mint, owner)`.
///
/// Returns the bump so the caller can sign for the address.
pub fn assert_token_account_address(
    program_id: &Pubkey,
    address: &Pubkey,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Result<u8, ProgramError> {
    let (expected, bump) = find_token_account_address(program_id, mint, owner);
    if *address != expected {
        return Err(TokenError::InvalidAccountAddress.into());
    }
    Ok(bump)
}

/// Check that `address` is the metadata PDA of `mint`.
pub fn assert_metadata_address(
    program_id: &Pubkey,
    address: &Pubkey,
    mint: &Pubkey,
) -> Result<u8, ProgramError> {
    let (expected, bump) = find_metadata_address(program_id, mint);
    if *address != expected {
        return Err(TokenError::InvalidAccountAddress.into());
    }
    Ok(bump)
}
