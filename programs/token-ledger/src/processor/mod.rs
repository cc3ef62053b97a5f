//! Instruction Processors
//!
//! Business logic for each instruction, one file per instruction.
//!
//! Every processor follows the same shape: collect accounts, validate,
//! compute every new value, and only then write. A failure at any step
//! returns before the first write.

pub mod burn;
pub mod create_token_with_metadata;
pub mod get_mint_info;
pub mod initialize_mint;
pub mod mint_to;
pub mod set_mint_authority;
pub mod transfer;

use crate::error::TokenError;
use crate::instruction::TokenInstruction;
use crate::state::{Account, Pack};
use crate::utils::*;
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    msg,
    program_error::ProgramError,
    pubkey::Pubkey,
    rent::Rent,
    sysvar::Sysvar,
};

/// Main processor that routes instructions to specific handlers
pub struct Processor;

impl Processor {
    /// Process a token ledger instruction
    pub fn process(
        program_id: &Pubkey,
        accounts: &[AccountInfo],
        instruction_data: &[u8],
    ) -> ProgramResult {
        let instruction = TokenInstruction::unpack(instruction_data)?;

        match instruction {
            TokenInstruction::InitializeMint {
                decimals,
                mint_authority,
                freeze_authority,
            } => {
                msg!("Instruction: InitializeMint");
                initialize_mint::process(
                    program_id,
                    accounts,
                    decimals,
                    mint_authority,
                    freeze_authority,
                )
            }

            TokenInstruction::CreateTokenWithMetadata {
                decimals,
                mint_authority,
                freeze_authority,
                metadata,
            } => {
                msg!("Instruction: CreateTokenWithMetadata");
                create_token_with_metadata::process(
                    program_id,
                    accounts,
                    decimals,
                    mint_authority,
                    freeze_authority,
                    metadata,
                )
            }

            TokenInstruction::MintTo { amount } => {
                msg!("Instruction: MintTo");
                mint_to::process(program_id, accounts, amount)
            }

            TokenInstruction::Transfer { amount } => {
                msg!("Instruction: Transfer");
                transfer::process(program_id, accounts, amount)
            }

            TokenInstruction::Burn { amount } => {
                msg!("Instruction: Burn");
                burn::process(program_id, accounts, amount)
            }

            TokenInstruction::SetMintAuthority { new_authority } => {
                msg!("Instruction: SetMintAuthority");
                set_mint_authority::process(program_id, accounts, new_authority)
            }

            TokenInstruction::GetMintInfo => {
                msg!("Instruction: GetMintInfo");
                get_mint_info::process(program_id, accounts)
            }
        }
    }
}

// =============================================================================
// CREDIT TARGETS
// =============================================================================

/// The token account on the receiving side of MintTo or Transfer.
///
/// If the record does not exist yet it is built in memory here and only
/// allocated by `store_credit_target`, after every check has passed.
pub(crate) struct CreditTarget {
    pub account: Account,
    pub exists: bool,
}

/// Load the token account of `(mint, owner)` at `target_info`, or prepare
/// a fresh one if nothing is stored there yet.
///
/// # Errors
///
/// * `InvalidAccountAddress` - `target_info` is not the PDA of `(mint, owner)`
/// * `AlreadyInitialized` - the address holds data the program does not own
/// * `InvalidAccountDataLength` / `UninitializedAccount` - corrupt record
/// * `MintMismatch` - the record belongs to another mint
pub(crate) fn load_credit_target(
    program_id: &Pubkey,
    target_info: &AccountInfo,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Result<CreditTarget, ProgramError> {
    let bump = assert_token_account_address(program_id, target_info.key, mint, owner)?;
    assert_writable(target_info)?;

    if target_info.owner != program_id {
        assert_unallocated(target_info, program_id)?;
        return Ok(CreditTarget {
            account: Account::new(*mint, *owner, bump),
            exists: false,
        });
    }

    assert_data_length(target_info, Account::LEN)?;
    let account = Account::unpack_from_slice(&target_info.data.borrow())?;
    account.require_initialized()?;
    if account.mint != *mint {
        return Err(TokenError::MintMismatch.into());
    }

    Ok(CreditTarget {
        account,
        exists: true,
    })
}

/// Write a credit target back, allocating its PDA first if needed.
///
/// The payer funds rent for a new record.
pub(crate) fn store_credit_target<'a>(
    program_id: &Pubkey,
    target: &CreditTarget,
    target_info: &AccountInfo<'a>,
    payer_info: &AccountInfo<'a>,
    system_program_info: &AccountInfo<'a>,
) -> ProgramResult {
    if !target.exists {
        assert_signer(payer_info)?;
        assert_writable(payer_info)?;
        assert_system_program(system_program_info)?;

        let rent = Rent::get()?;
        let account = &target.account;
        create_pda_account(
            payer_info,
            target_info,
            system_program_info,
            program_id,
            &rent,
            Account::LEN,
            &[
                TOKEN_ACCOUNT_SEED,
                account.mint.as_ref(),
                account.owner.as_ref(),
                &[account.bump],
            ],
        )?;
        msg!("Created token account {} for owner {}", target_info.key, account.owner);
    }

    target
        .account
        .pack_into_slice(&mut target_info.data.borrow_mut())
}
