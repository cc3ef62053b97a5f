//! MintTo Instruction Processor
//!
//! Mints new tokens to an owner's token account, creating the account
//! on first credit.

use crate::error::TokenError;
use crate::processor::{load_credit_target, store_credit_target};
use crate::state::{Mint, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process MintTo instruction
///
/// Accounts expected:
/// 0. `[writable]` Mint
/// 1. `[writable]` Destination token account PDA
/// 2. `[]` Destination owner
/// 3. `[signer]` Mint authority
/// 4. `[writable, signer]` Payer, used only if the destination is new
/// 5. `[]` System program
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let mint_info = next_account_info(account_info_iter)?;
    let dest_info = next_account_info(account_info_iter)?;
    let dest_owner_info = next_account_info(account_info_iter)?;
    let authority_info = next_account_info(account_info_iter)?;
    let payer_info = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;

    // Validate mint
    assert_exists(mint_info)?;
    assert_owned_by(mint_info, program_id)?;
    assert_writable(mint_info)?;
    assert_data_length(mint_info, Mint::LEN)?;

    let mut mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;
    mint.require_initialized()?;

    // Validate destination
    let mut dest = load_credit_target(program_id, dest_info, mint_info.key, dest_owner_info.key)?;

    validate_mint_authority(&mint.mint_authority, authority_info)?;

    if amount == 0 {
        return Err(TokenError::InvalidAmount.into());
    }

    // Compute both new values before writing either
    mint.supply = checked_add(mint.supply, amount)?;
    dest.account.amount = checked_add(dest.account.amount, amount)?;

    store_credit_target(program_id, &dest, dest_info, payer_info, system_program_info)?;
    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;

    msg!(
        "Minted {} ({} base units) to {}, supply now {}",
        amount_to_ui_string(amount, mint.decimals),
        amount,
        dest_owner_info.key,
        mint.supply
    );

    Ok(())
}
