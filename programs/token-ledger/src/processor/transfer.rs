//! Transfer Instruction Processor
//!
//! Moves tokens between two owners of the same mint. The mint itself is
//! not touched: supply is unchanged by a transfer.

use crate::error::TokenError;
use crate::processor::{load_credit_target, store_credit_target};
use crate::state::{Account, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Process Transfer instruction
///
/// Accounts expected:
/// 0. `[writable]` Source token account PDA
/// 1. `[writable]` Destination token account PDA
/// 2. `[]` Destination owner
/// 3. `[signer]` Source owner
/// 4. `[writable, signer]` Payer, used only if the destination is new
/// 5. `[]` System program
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], amount: u64) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let source_info = next_account_info(account_info_iter)?;
    let dest_info = next_account_info(account_info_iter)?;
    let dest_owner_info = next_account_info(account_info_iter)?;
    let owner_info = next_account_info(account_info_iter)?;
    let payer_info = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;

    // Validate source
    assert_exists(source_info)?;
    assert_owned_by(source_info, program_id)?;
    assert_writable(source_info)?;
    assert_data_length(source_info, Account::LEN)?;

    let mut source = Account::unpack_from_slice(&source_info.data.borrow())?;
    source.require_initialized()?;

    // Validate destination, which must hold the same mint
    let mut dest = load_credit_target(program_id, dest_info, &source.mint, dest_owner_info.key)?;

    validate_owner(&source.owner, owner_info)?;

    if amount == 0 {
        return Err(TokenError::InvalidAmount.into());
    }

    if source_info.key == dest_info.key {
        return Err(TokenError::InvalidTransfer.into());
    }

    if source.amount < amount {
        return Err(TokenError::InsufficientFunds.into());
    }

    source.amount = checked_sub(source.amount, amount)?;
    dest.account.amount = checked_add(dest.account.amount, amount)?;

    store_credit_target(program_id, &dest, dest_info, payer_info, system_program_info)?;
    source.pack_into_slice(&mut source_info.data.borrow_mut())?;

    msg!(
        "Transferred {} base units from {} to {}",
        amount,
        source.owner,
        dest_owner_info.key
    );

    Ok(())
}
