//! CreateTokenWithMetadata Instruction Processor
//!
//! Initializes a mint and allocates its metadata record in one
//! instruction. Either both records exist afterwards or neither does:
//! every check runs before the metadata PDA is allocated, and any later
//! failure aborts the whole transaction.

use crate::instruction::MetadataArgs;
use crate::processor::initialize_mint::assert_uninitialized_mint;
use crate::state::{Metadata, Mint, Pack};
use crate::utils::*;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
    rent::Rent,
    sysvar::Sysvar,
};

/// Process CreateTokenWithMetadata instruction
///
/// Accounts expected:
/// 0. `[writable]` Mint account to initialize
/// 1. `[writable]` Metadata PDA of the mint
/// 2. `[writable, signer]` Payer for the metadata account
/// 3. `[]` System program
/// 4. `[]` Rent sysvar
pub fn process(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    decimals: u8,
    mint_authority: Pubkey,
    freeze_authority: Option<Pubkey>,
    args: MetadataArgs,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let mint_info = next_account_info(account_info_iter)?;
    let metadata_info = next_account_info(account_info_iter)?;
    let payer_info = next_account_info(account_info_iter)?;
    let system_program_info = next_account_info(account_info_iter)?;
    let rent_info = next_account_info(account_info_iter)?;
    let rent = Rent::from_account_info(rent_info)?;

    // Existence: a fresh mint, and a free metadata slot at its PDA
    assert_uninitialized_mint(program_id, mint_info, &rent)?;
    let bump = assert_metadata_address(program_id, metadata_info.key, mint_info.key)?;
    assert_writable(metadata_info)?;
    assert_unallocated(metadata_info, program_id)?;
    assert_signer(payer_info)?;
    assert_writable(payer_info)?;
    assert_system_program(system_program_info)?;

    // Structure
    assert_valid_decimals(decimals)?;
    Metadata::validate_fields(
        &args.name,
        &args.symbol,
        &args.uri,
        args.seller_fee_basis_points,
    )?;

    let mint = Mint::new(decimals, mint_authority, freeze_authority);
    let metadata = Metadata {
        is_initialized: true,
        mint: *mint_info.key,
        update_authority: args.update_authority,
        name: args.name,
        symbol: args.symbol,
        uri: args.uri,
        seller_fee_basis_points: args.seller_fee_basis_points,
        bump,
    };

    create_pda_account(
        payer_info,
        metadata_info,
        system_program_info,
        program_id,
        &rent,
        Metadata::LEN,
        &[METADATA_SEED, mint_info.key.as_ref(), &[bump]],
    )?;

    metadata.pack_into_slice(&mut metadata_info.data.borrow_mut())?;
    mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;

    msg!(
        "Created mint {} ({}, {}) with {} decimals",
        mint_info.key,
        metadata.name,
        metadata.symbol,
        decimals
    );

    Ok(())
}
