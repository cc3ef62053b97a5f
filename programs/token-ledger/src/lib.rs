//! # Token Ledger
//!
//! A fungible-token ledger program. Mints define token types, owners
//! hold balances in token accounts, and every change of supply or
//! balance goes through a checked, all-or-nothing instruction.
//!
//! ## Overview
//!
//! This program allows you to:
//! - Create token mints, optionally with a name, symbol and URI
//! - Mint new tokens (increase supply)
//! - Transfer tokens between owners
//! - Burn tokens (decrease supply)
//! - Rotate or permanently revoke the mint authority
//! - Read a mint's supply, decimals and authorities
//!
//! Token accounts are never created explicitly. Each lives at the
//! program-derived address of its `(mint, owner)` pair and is allocated
//! by the first MintTo or Transfer that credits it.
//!
//! ## Account Types
//!
//! | Account Type | Size | Description |
//! |--------------|------|-------------|
//! | Mint | 82 bytes | Defines a token type |
//! | Account | 74 bytes | Holds tokens for an owner |
//! | Metadata | 322 bytes | Name, symbol and URI of a mint |
//!
//! ## Instructions
//!
//! | # | Instruction | Description |
//! |---|-------------|-------------|
//! | 0 | InitializeMint | Create a new token mint |
//! | 1 | CreateTokenWithMetadata | Create a mint and its metadata together |
//! | 2 | MintTo | Mint new tokens |
//! | 3 | Transfer | Transfer tokens |
//! | 4 | Burn | Burn tokens |
//! | 5 | SetMintAuthority | Change or revoke the mint authority |
//! | 6 | GetMintInfo | Return supply, decimals and authorities |
//!
//! ## Invariants
//!
//! - A mint's supply equals the sum of its token account balances.
//! - Balances and supply never go below zero or wrap.
//! - Once revoked, a mint authority can never be set again.

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Program entrypoint - where Solana calls into our program
pub mod entrypoint;

/// Custom error types with unique codes
pub mod error;

/// Instruction definitions, parsing and builders
pub mod instruction;

/// Instruction processors (business logic)
pub mod processor;

/// Account state structures (Mint, Account, Metadata) and MintInfo
pub mod state;

/// Validation, arithmetic, address derivation and allocation helpers
pub mod utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use error::TokenError;
pub use instruction::{MetadataArgs, TokenInstruction};
pub use processor::Processor;
pub use state::{Account, Metadata, Mint, MintInfo, Pack};
pub use utils::pda::{get_metadata_address, get_token_account_address};

// =============================================================================
// PROGRAM ID
// =============================================================================

solana_program::declare_id!("GV5hMeyznNNy3dvjGfGgaMHqczjCdjTdRAv9K24yJHBC");
