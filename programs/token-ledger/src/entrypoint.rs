//! Program Entrypoint
//!
//! The Solana runtime calls `process_instruction` once for every ledger
//! instruction in a transaction. All real work happens in `Processor`.

// Another program that depends on this crate for its instruction builders
// and state types must not get a second entrypoint symbol.
#![cfg(not(feature = "no-entrypoint"))]

use crate::error::TokenError;
use crate::processor::Processor;
use solana_program::{
    account_info::AccountInfo, entrypoint, entrypoint::ProgramResult,
    program_error::PrintProgramError, pubkey::Pubkey,
};

entrypoint!(process_instruction);

/// Dispatch one instruction and log a readable message for any ledger
/// error before returning it to the runtime.
///
/// On error the runtime discards every account change made by the
/// transaction, so a failed instruction never leaves a partial update.
pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if let Err(error) = Processor::process(program_id, accounts, instruction_data) {
        error.print::<TokenError>();
        return Err(error);
    }
    Ok(())
}

/*
=============================================================================
ERROR FLOW
=============================================================================

Processor returns Err(ProgramError::Custom(9))
     │
     ▼
┌──────────────────────────────────────────┐
│ process_instruction()                    │
│   error.print::<TokenError>()            │
│     Custom(9) -> TokenError::from_u32    │
│     logs "Error: Invalid transfer: ..."  │
└────────────┬─────────────────────────────┘
             │ Err returned unchanged
             ▼
┌──────────────────────────────────────────┐
│ Runtime                                  │
│   transaction fails                      │
│   all account writes rolled back         │
│   client sees InstructionError::Custom(9)│
└──────────────────────────────────────────┘

Errors that are not custom (MissingRequiredSignature, IncorrectProgramId,
...) are printed by their ProgramError name instead.
*/
