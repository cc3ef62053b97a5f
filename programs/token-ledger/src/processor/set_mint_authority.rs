//! SetMintAuthority Instruction Processor
//!
//! Rotates the mint authority to a new key, or revokes it. Revocation is
//! terminal: with no authority left, nothing can pass the authority check
//! again, so neither minting nor this instruction can ever succeed.

use crate::state::{COption, Mint, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process SetMintAuthority instruction
///
/// Accounts expected:
/// 0. `[writable]` Mint
/// 1. `[signer]` Current mint authority
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    new_authority: Option<Pubkey>,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let mint_info = next_account_info(account_info_iter)?;
    let authority_info = next_account_info(account_info_iter)?;

    assert_exists(mint_info)?;
    assert_owned_by(mint_info, program_id)?;
    assert_writable(mint_info)?;
    assert_data_length(mint_info, Mint::LEN)?;

    let mut mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;
    mint.require_initialized()?;

    validate_mint_authority(&mint.mint_authority, authority_info)?;

    mint.mint_authority = COption::from(new_authority);
    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;

    match new_authority {
        Some(authority) => msg!("Mint authority of {} set to {}", mint_info.key, authority),
        None => msg!("Mint authority of {} revoked", mint_info.key),
    }

    Ok(())
}
