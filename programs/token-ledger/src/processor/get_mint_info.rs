//! GetMintInfo Instruction Processor
//!
//! Read-only. Publishes the packed `MintInfo` of a mint as return data so
//! callers (and other programs via CPI) can read it without parsing the
//! Mint layout themselves.

use crate::state::{Mint, MintInfo, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::set_return_data,
    pubkey::Pubkey,
};

/// Process GetMintInfo instruction
///
/// Accounts expected:
/// 0. `[]` Mint
pub fn process(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let mint_info = next_account_info(account_info_iter)?;

    assert_exists(mint_info)?;
    assert_owned_by(mint_info, program_id)?;
    assert_data_length(mint_info, Mint::LEN)?;

    let mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;
    mint.require_initialized()?;

    let info = MintInfo::from(&mint);
    let mut data = [0u8; MintInfo::LEN];
    info.pack_into_slice(&mut data)?;
    set_return_data(&data);

    msg!(
        "Mint {}: supply {}, decimals {}",
        mint_info.key,
        amount_to_ui_string(info.supply, info.decimals),
        info.decimals
    );

    Ok(())
}
