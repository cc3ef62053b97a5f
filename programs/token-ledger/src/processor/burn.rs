//! Burn Instruction Processor
//!
//! Destroys tokens held by the signer, lowering the mint's supply by the
//! same amount.

use crate::error::TokenError;
use crate::state::{Account, Mint, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process Burn instruction
///
/// Accounts expected:
/// 0. `[writable]` Token account to burn from
/// 1. `[writable]` Mint
/// 2. `[signer]` Account owner
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    // Account 0: Token account
    let account_info = next_account_info(account_info_iter)?;

    // Account 1: Mint
    let mint_info = next_account_info(account_info_iter)?;

    // Account 2: Owner
    let owner_info = next_account_info(account_info_iter)?;

    // Validate token account
    assert_exists(account_info)?;
    assert_owned_by(account_info, program_id)?;
    assert_writable(account_info)?;
    assert_data_length(account_info, Account::LEN)?;

    // Validate mint
    assert_exists(mint_info)?;
    assert_owned_by(mint_info, program_id)?;
    assert_writable(mint_info)?;
    assert_data_length(mint_info, Mint::LEN)?;

    let mut account = Account::unpack_from_slice(&account_info.data.borrow())?;
    let mut mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;
    account.require_initialized()?;
    mint.require_initialized()?;

    validate_owner(&account.owner, owner_info)?;

    if amount == 0 {
        return Err(TokenError::InvalidAmount.into());
    }

    if account.mint != *mint_info.key {
        return Err(TokenError::MintMismatch.into());
    }

    if account.amount < amount {
        return Err(TokenError::InsufficientFunds.into());
    }

    account.amount = checked_sub(account.amount, amount)?;
    mint.supply = checked_sub(mint.supply, amount)?;

    account.pack_into_slice(&mut account_info.data.borrow_mut())?;
    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;

    msg!(
        "Burned {} ({} base units) from {}, supply now {}",
        amount_to_ui_string(amount, mint.decimals),
        amount,
        account.owner,
        mint.supply
    );

    Ok(())
}
