//! InitializeMint Instruction Processor
//!
//! Turns a pre-allocated, zeroed account into a mint with zero supply.

use crate::error::TokenError;
use crate::state::{Mint, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    sysvar::Sysvar,
};

/// Process InitializeMint instruction
///
/// Accounts expected:
/// 0. `[writable]` Mint account to initialize
/// 1. `[]` Rent sysvar
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    decimals: u8,
    mint_authority: Pubkey,
    freeze_authority: Option<Pubkey>,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Mint account
    let mint_info = next_account_info(account_info_iter)?;

    // Account 1: Rent sysvar
    let rent_info = next_account_info(account_info_iter)?;
    let rent = Rent::from_account_info(rent_info)?;

    assert_uninitialized_mint(program_id, mint_info, &rent)?;
    assert_valid_decimals(decimals)?;

    let mint = Mint::new(decimals, mint_authority, freeze_authority);
    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;

    msg!(
        "Initialized mint {} with {} decimals, authority {}",
        mint_info.key,
        decimals,
        mint_authority
    );

    Ok(())
}

/// Checks shared by both mint-creating instructions: the account is
/// ours, writable, sized for a Mint, rent exempt, and still zeroed.
pub(crate) fn assert_uninitialized_mint(
    program_id: &Pubkey,
    mint_info: &AccountInfo,
    rent: &Rent,
) -> Result<(), ProgramError> {
    assert_owned_by(mint_info, program_id)?;
    assert_writable(mint_info)?;
    assert_data_length(mint_info, Mint::LEN)?;
    assert_rent_exempt(rent, mint_info)?;

    let mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;
    if mint.is_initialized {
        return Err(TokenError::AlreadyInitialized.into());
    }

    Ok(())
}
