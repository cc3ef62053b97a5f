//! Instruction Types
//!
//! Every instruction the ledger accepts, its byte encoding, and builder
//! functions that assemble the account list a caller must pass.
//!
//! # Instruction Format
//!
//! ```text
//! [discriminant: u8][data: varies]
//! ```
//!
//! | Value | Instruction |
//! |-------|-------------|
//! | 0 | InitializeMint |
//! | 1 | CreateTokenWithMetadata |
//! | 2 | MintTo |
//! | 3 | Transfer |
//! | 4 | Burn |
//! | 5 | SetMintAuthority |
//! | 6 | GetMintInfo |
//!
//! Integers are little-endian. `Option<Pubkey>` is a 0/1 byte followed by
//! 32 bytes when present. Strings are a u32 length followed by UTF-8 bytes.

use crate::error::TokenError;
use crate::utils::pda::{find_metadata_address, find_token_account_address};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program_error::ProgramError,
    pubkey::Pubkey,
    system_program, sysvar,
};

// =============================================================================
// METADATA ARGUMENTS
// =============================================================================

/// Descriptive fields supplied when a mint is created with metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct MetadataArgs {
    /// Display name. Must not be empty.
    pub name: String,
    pub symbol: String,
    pub uri: String,
    /// Royalty fraction, 0 through 10000.
    pub seller_fee_basis_points: u16,
    /// Key recorded as allowed to manage the metadata.
    pub update_authority: Pubkey,
}

// =============================================================================
// TOKEN INSTRUCTION ENUM
// =============================================================================

/// All instructions supported by the ledger.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenInstruction {
    /// Initialize a pre-allocated mint account.
    ///
    /// | # | Account | Writable | Signer |
    /// |---|---------|----------|--------|
    /// | 0 | mint | ✓ | |
    /// | 1 | rent sysvar | | |
    ///
    /// ```text
    /// [0]: 0
    /// [1]: decimals
    /// [2..34]: mint_authority
    /// [34]: freeze_authority option, then 32 bytes if 1
    /// ```
    InitializeMint {
        decimals: u8,
        mint_authority: Pubkey,
        freeze_authority: Option<Pubkey>,
    },

    /// Initialize a mint and create its metadata record, all or nothing.
    ///
    /// | # | Account | Writable | Signer |
    /// |---|---------|----------|--------|
    /// | 0 | mint | ✓ | |
    /// | 1 | metadata PDA | ✓ | |
    /// | 2 | payer | ✓ | ✓ |
    /// | 3 | system program | | |
    /// | 4 | rent sysvar | | |
    ///
    /// ```text
    /// [0]: 1
    /// InitializeMint fields, then
    /// name, symbol, uri (u32 len + bytes each)
    /// seller_fee_basis_points (u16)
    /// update_authority (32 bytes)
    /// ```
    CreateTokenWithMetadata {
        decimals: u8,
        mint_authority: Pubkey,
        freeze_authority: Option<Pubkey>,
        metadata: MetadataArgs,
    },

    /// Mint new tokens to the owner's token account, creating it if absent.
    ///
    /// | # | Account | Writable | Signer |
    /// |---|---------|----------|--------|
    /// | 0 | mint | ✓ | |
    /// | 1 | destination token account PDA | ✓ | |
    /// | 2 | destination owner | | |
    /// | 3 | mint authority | | ✓ |
    /// | 4 | payer | ✓ | ✓ |
    /// | 5 | system program | | |
    ///
    /// ```text
    /// [0]: 2
    /// [1..9]: amount
    /// ```
    MintTo { amount: u64 },

    /// Move tokens between two owners of the same mint, creating the
    /// destination account if absent.
    ///
    /// | # | Account | Writable | Signer |
    /// |---|---------|----------|--------|
    /// | 0 | source token account PDA | ✓ | |
    /// | 1 | destination token account PDA | ✓ | |
    /// | 2 | destination owner | | |
    /// | 3 | source owner | | ✓ |
    /// | 4 | payer | ✓ | ✓ |
    /// | 5 | system program | | |
    ///
    /// ```text
    /// [0]: 3
    /// [1..9]: amount
    /// ```
    Transfer { amount: u64 },

    /// Destroy tokens from the owner's account, lowering the supply.
    ///
    /// | # | Account | Writable | Signer |
    /// |---|---------|----------|--------|
    /// | 0 | token account PDA | ✓ | |
    /// | 1 | mint | ✓ | |
    /// | 2 | owner | | ✓ |
    ///
    /// ```text
    /// [0]: 4
    /// [1..9]: amount
    /// ```
    Burn { amount: u64 },

    /// Rotate or revoke the mint authority. `None` is permanent.
    ///
    /// | # | Account | Writable | Signer |
    /// |---|---------|----------|--------|
    /// | 0 | mint | ✓ | |
    /// | 1 | current mint authority | | ✓ |
    ///
    /// ```text
    /// [0]: 5
    /// [1]: option, then 32 bytes if 1
    /// ```
    SetMintAuthority { new_authority: Option<Pubkey> },

    /// Return the mint's public state as `MintInfo` return data.
    ///
    /// | # | Account | Writable | Signer |
    /// |---|---------|----------|--------|
    /// | 0 | mint | | |
    ///
    /// ```text
    /// [0]: 6
    /// ```
    GetMintInfo,
}

// =============================================================================
// INSTRUCTION PARSING (UNPACK)
// =============================================================================

impl TokenInstruction {
    /// Parse instruction data.
    ///
    /// # Errors
    ///
    /// `InvalidInstruction` for an unknown discriminant, short data, a
    /// bad option tag, a string that is not UTF-8, or bytes left over
    /// after the last field.
    pub fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let (&discriminant, rest) = input
            .split_first()
            .ok_or(TokenError::InvalidInstruction)?;

        let (instruction, rest) = match discriminant {
            0 => {
                let (decimals, mint_authority, freeze_authority, rest) =
                    Self::unpack_mint_fields(rest)?;
                let instruction = TokenInstruction::InitializeMint {
                    decimals,
                    mint_authority,
                    freeze_authority,
                };
                (instruction, rest)
            }

            1 => {
                let (decimals, mint_authority, freeze_authority, rest) =
                    Self::unpack_mint_fields(rest)?;
                let (name, rest) = Self::unpack_string(rest)?;
                let (symbol, rest) = Self::unpack_string(rest)?;
                let (uri, rest) = Self::unpack_string(rest)?;
                let (seller_fee_basis_points, rest) = Self::unpack_u16(rest)?;
                let (update_authority, rest) = Self::unpack_pubkey(rest)?;
                let instruction = TokenInstruction::CreateTokenWithMetadata {
                    decimals,
                    mint_authority,
                    freeze_authority,
                    metadata: MetadataArgs {
                        name,
                        symbol,
                        uri,
                        seller_fee_basis_points,
                        update_authority,
                    },
                };
                (instruction, rest)
            }

            2 => {
                let (amount, rest) = Self::unpack_u64(rest)?;
                (TokenInstruction::MintTo { amount }, rest)
            }

            3 => {
                let (amount, rest) = Self::unpack_u64(rest)?;
                (TokenInstruction::Transfer { amount }, rest)
            }

            4 => {
                let (amount, rest) = Self::unpack_u64(rest)?;
                (TokenInstruction::Burn { amount }, rest)
            }

            5 => {
                let (new_authority, rest) = Self::unpack_option_pubkey(rest)?;
                (TokenInstruction::SetMintAuthority { new_authority }, rest)
            }

            6 => (TokenInstruction::GetMintInfo, rest),

            _ => return Err(TokenError::InvalidInstruction.into()),
        };

        // Every layout is exact
        if !rest.is_empty() {
            return Err(TokenError::InvalidInstruction.into());
        }

        Ok(instruction)
    }

    fn unpack_mint_fields(input: &[u8]) -> Result<(u8, Pubkey, Option<Pubkey>, &[u8]), ProgramError> {
        let (&decimals, rest) = input
            .split_first()
            .ok_or(TokenError::InvalidInstruction)?;
        let (mint_authority, rest) = Self::unpack_pubkey(rest)?;
        let (freeze_authority, rest) = Self::unpack_option_pubkey(rest)?;
        Ok((decimals, mint_authority, freeze_authority, rest))
    }

    fn unpack_pubkey(input: &[u8]) -> Result<(Pubkey, &[u8]), ProgramError> {
        if input.len() < 32 {
            return Err(TokenError::InvalidInstruction.into());
        }
        let (key, rest) = input.split_at(32);
        let key = Pubkey::try_from(key).map_err(|_| TokenError::InvalidInstruction)?;
        Ok((key, rest))
    }

    fn unpack_option_pubkey(input: &[u8]) -> Result<(Option<Pubkey>, &[u8]), ProgramError> {
        match input.split_first() {
            Some((&0, rest)) => Ok((None, rest)),
            Some((&1, rest)) => {
                let (key, rest) = Self::unpack_pubkey(rest)?;
                Ok((Some(key), rest))
            }
            _ => Err(TokenError::InvalidInstruction.into()),
        }
    }

    fn unpack_u16(input: &[u8]) -> Result<(u16, &[u8]), ProgramError> {
        let bytes = input.get(..2).ok_or(TokenError::InvalidInstruction)?;
        let value = u16::from_le_bytes(
            bytes
                .try_into()
                .map_err(|_| TokenError::InvalidInstruction)?,
        );
        Ok((value, &input[2..]))
    }

    fn unpack_u64(input: &[u8]) -> Result<(u64, &[u8]), ProgramError> {
        let bytes = input.get(..8).ok_or(TokenError::InvalidInstruction)?;
        let value = u64::from_le_bytes(
            bytes
                .try_into()
                .map_err(|_| TokenError::InvalidInstruction)?,
        );
        Ok((value, &input[8..]))
    }

    fn unpack_string(input: &[u8]) -> Result<(String, &[u8]), ProgramError> {
        let len_bytes = input.get(..4).ok_or(TokenError::InvalidInstruction)?;
        let len = u32::from_le_bytes(
            len_bytes
                .try_into()
                .map_err(|_| TokenError::InvalidInstruction)?,
        ) as usize;
        let rest = &input[4..];
        let bytes = rest.get(..len).ok_or(TokenError::InvalidInstruction)?;
        let value =
            String::from_utf8(bytes.to_vec()).map_err(|_| TokenError::InvalidInstruction)?;
        Ok((value, &rest[len..]))
    }

    // =========================================================================
    // INSTRUCTION PACKING
    // =========================================================================

    /// Encode into instruction data. Inverse of `unpack`.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        match self {
            TokenInstruction::InitializeMint {
                decimals,
                mint_authority,
                freeze_authority,
            } => {
                buf.push(0);
                Self::pack_mint_fields(&mut buf, *decimals, mint_authority, freeze_authority);
            }

            TokenInstruction::CreateTokenWithMetadata {
                decimals,
                mint_authority,
                freeze_authority,
                metadata,
            } => {
                buf.push(1);
                Self::pack_mint_fields(&mut buf, *decimals, mint_authority, freeze_authority);
                for field in [&metadata.name, &metadata.symbol, &metadata.uri] {
                    buf.extend_from_slice(&(field.len() as u32).to_le_bytes());
                    buf.extend_from_slice(field.as_bytes());
                }
                buf.extend_from_slice(&metadata.seller_fee_basis_points.to_le_bytes());
                buf.extend_from_slice(metadata.update_authority.as_ref());
            }

            TokenInstruction::MintTo { amount } => {
                buf.push(2);
                buf.extend_from_slice(&amount.to_le_bytes());
            }

            TokenInstruction::Transfer { amount } => {
                buf.push(3);
                buf.extend_from_slice(&amount.to_le_bytes());
            }

            TokenInstruction::Burn { amount } => {
                buf.push(4);
                buf.extend_from_slice(&amount.to_le_bytes());
            }

            TokenInstruction::SetMintAuthority { new_authority } => {
                buf.push(5);
                Self::pack_option_pubkey(&mut buf, new_authority);
            }

            TokenInstruction::GetMintInfo => {
                buf.push(6);
            }
        }

        buf
    }

    fn pack_mint_fields(
        buf: &mut Vec<u8>,
        decimals: u8,
        mint_authority: &Pubkey,
        freeze_authority: &Option<Pubkey>,
    ) {
        buf.push(decimals);
        buf.extend_from_slice(mint_authority.as_ref());
        Self::pack_option_pubkey(buf, freeze_authority);
    }

    fn pack_option_pubkey(buf: &mut Vec<u8>, value: &Option<Pubkey>) {
        match value {
            Some(key) => {
                buf.push(1);
                buf.extend_from_slice(key.as_ref());
            }
            None => buf.push(0),
        }
    }
}

// =============================================================================
// INSTRUCTION BUILDERS
// =============================================================================

/// Build an InitializeMint instruction.
pub fn initialize_mint(
    program_id: &Pubkey,
    mint: &Pubkey,
    mint_authority: &Pubkey,
    freeze_authority: Option<&Pubkey>,
    decimals: u8,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ],
        data: TokenInstruction::InitializeMint {
            decimals,
            mint_authority: *mint_authority,
            freeze_authority: freeze_authority.copied(),
        }
        .pack(),
    }
}

/// Build a CreateTokenWithMetadata instruction.
///
/// The metadata account is the PDA of `mint`.
pub fn create_token_with_metadata(
    program_id: &Pubkey,
    mint: &Pubkey,
    payer: &Pubkey,
    mint_authority: &Pubkey,
    freeze_authority: Option<&Pubkey>,
    decimals: u8,
    metadata: MetadataArgs,
) -> Instruction {
    let (metadata_address, _) = find_metadata_address(program_id, mint);
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new(metadata_address, false),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(system_program::id(), false),
            AccountMeta::new_readonly(sysvar::rent::id(), false),
        ],
        data: TokenInstruction::CreateTokenWithMetadata {
            decimals,
            mint_authority: *mint_authority,
            freeze_authority: freeze_authority.copied(),
            metadata,
        }
        .pack(),
    }
}

/// Build a MintTo instruction crediting `destination_owner`'s token account.
pub fn mint_to(
    program_id: &Pubkey,
    mint: &Pubkey,
    destination_owner: &Pubkey,
    mint_authority: &Pubkey,
    payer: &Pubkey,
    amount: u64,
) -> Instruction {
    let (destination, _) = find_token_account_address(program_id, mint, destination_owner);
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new(destination, false),
            AccountMeta::new_readonly(*destination_owner, false),
            AccountMeta::new_readonly(*mint_authority, true),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: TokenInstruction::MintTo { amount }.pack(),
    }
}

/// Build a Transfer instruction from `source_owner` to `destination_owner`.
pub fn transfer(
    program_id: &Pubkey,
    mint: &Pubkey,
    source_owner: &Pubkey,
    destination_owner: &Pubkey,
    payer: &Pubkey,
    amount: u64,
) -> Instruction {
    let (source, _) = find_token_account_address(program_id, mint, source_owner);
    let (destination, _) = find_token_account_address(program_id, mint, destination_owner);
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(source, false),
            AccountMeta::new(destination, false),
            AccountMeta::new_readonly(*destination_owner, false),
            AccountMeta::new_readonly(*source_owner, true),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: TokenInstruction::Transfer { amount }.pack(),
    }
}

/// Build a Burn instruction against `owner`'s token account.
pub fn burn(program_id: &Pubkey, mint: &Pubkey, owner: &Pubkey, amount: u64) -> Instruction {
    let (account, _) = find_token_account_address(program_id, mint, owner);
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(account, false),
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(*owner, true),
        ],
        data: TokenInstruction::Burn { amount }.pack(),
    }
}

/// Build a SetMintAuthority instruction. `None` revokes permanently.
pub fn set_mint_authority(
    program_id: &Pubkey,
    mint: &Pubkey,
    current_authority: &Pubkey,
    new_authority: Option<&Pubkey>,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(*current_authority, true),
        ],
        data: TokenInstruction::SetMintAuthority {
            new_authority: new_authority.copied(),
        }
        .pack(),
    }
}

/// Build a GetMintInfo instruction.
pub fn get_mint_info(program_id: &Pubkey, mint: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![AccountMeta::new_readonly(*mint, false)],
        data: TokenInstruction::GetMintInfo.pack(),
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_instruction_layout() {
        let data = TokenInstruction::Transfer { amount: 1000 }.pack();
        assert_eq!(data, vec![3, 0xE8, 0x03, 0, 0, 0, 0, 0, 0]);
        assert_eq!(
            TokenInstruction::unpack(&data).unwrap(),
            TokenInstruction::Transfer { amount: 1000 }
        );
    }

    #[test]
    fn test_initialize_mint_layout() {
        let authority = Pubkey::new_unique();
        let instruction = TokenInstruction::InitializeMint {
            decimals: 9,
            mint_authority: authority,
            freeze_authority: None,
        };
        let data = instruction.pack();

        assert_eq!(data.len(), 1 + 1 + 32 + 1);
        assert_eq!(data[1], 9);
        assert_eq!(&data[2..34], authority.as_ref());
        assert_eq!(data[34], 0);
        assert_eq!(TokenInstruction::unpack(&data).unwrap(), instruction);
    }

    #[test]
    fn test_create_token_with_metadata_decodes() {
        let instruction = TokenInstruction::CreateTokenWithMetadata {
            decimals: 6,
            mint_authority: Pubkey::new_unique(),
            freeze_authority: Some(Pubkey::new_unique()),
            metadata: MetadataArgs {
                name: "Ledger Token".to_string(),
                symbol: "LDG".to_string(),
                uri: "https://example.com/ldg.json".to_string(),
                seller_fee_basis_points: 250,
                update_authority: Pubkey::new_unique(),
            },
        };
        assert_eq!(
            TokenInstruction::unpack(&instruction.pack()).unwrap(),
            instruction
        );
    }

    #[test]
    fn test_empty_name_still_decodes() {
        // Name rules are enforced by the processor, not the codec
        let instruction = TokenInstruction::CreateTokenWithMetadata {
            decimals: 0,
            mint_authority: Pubkey::new_unique(),
            freeze_authority: None,
            metadata: MetadataArgs {
                name: String::new(),
                symbol: String::new(),
                uri: String::new(),
                seller_fee_basis_points: 0,
                update_authority: Pubkey::new_unique(),
            },
        };
        assert_eq!(
            TokenInstruction::unpack(&instruction.pack()).unwrap(),
            instruction
        );
    }

    #[test]
    fn test_set_mint_authority_revoke_layout() {
        let data = TokenInstruction::SetMintAuthority { new_authority: None }.pack();
        assert_eq!(data, vec![5, 0]);
    }

    #[test]
    fn test_unpack_rejects_malformed_data() {
        let invalid: ProgramError = TokenError::InvalidInstruction.into();

        assert_eq!(TokenInstruction::unpack(&[]).unwrap_err(), invalid);
        assert_eq!(TokenInstruction::unpack(&[7]).unwrap_err(), invalid);
        assert_eq!(TokenInstruction::unpack(&[2, 1, 2, 3]).unwrap_err(), invalid);
        assert_eq!(TokenInstruction::unpack(&[5, 2]).unwrap_err(), invalid);
        assert_eq!(TokenInstruction::unpack(&[5, 1, 0]).unwrap_err(), invalid);

        // String length pointing past the end of the data
        let mut data = TokenInstruction::InitializeMint {
            decimals: 0,
            mint_authority: Pubkey::new_unique(),
            freeze_authority: None,
        }
        .pack();
        data[0] = 1;
        data.extend_from_slice(&100u32.to_le_bytes());
        data.extend_from_slice(b"short");
        assert_eq!(TokenInstruction::unpack(&data).unwrap_err(), invalid);
    }

    #[test]
    fn test_unpack_rejects_trailing_bytes() {
        let invalid: ProgramError = TokenError::InvalidInstruction.into();

        let mut data = TokenInstruction::MintTo { amount: 5 }.pack();
        data.push(0);
        assert_eq!(TokenInstruction::unpack(&data).unwrap_err(), invalid);

        assert_eq!(TokenInstruction::unpack(&[6, 0]).unwrap_err(), invalid);

        let mut data = TokenInstruction::InitializeMint {
            decimals: 9,
            mint_authority: Pubkey::new_unique(),
            freeze_authority: None,
        }
        .pack();
        data.push(1);
        assert_eq!(TokenInstruction::unpack(&data).unwrap_err(), invalid);

        let mut data = TokenInstruction::SetMintAuthority {
            new_authority: None,
        }
        .pack();
        data.extend_from_slice(Pubkey::new_unique().as_ref());
        assert_eq!(TokenInstruction::unpack(&data).unwrap_err(), invalid);

        // Exact encodings still decode
        assert_eq!(
            TokenInstruction::unpack(&[6]).unwrap(),
            TokenInstruction::GetMintInfo
        );
    }

    #[test]
    fn test_unpack_rejects_invalid_utf8() {
        let mut data = vec![1, 0];
        data.extend_from_slice(Pubkey::new_unique().as_ref());
        data.push(0);
        data.extend_from_slice(&2u32.to_le_bytes());
        data.extend_from_slice(&[0xff, 0xfe]);
        assert_eq!(
            TokenInstruction::unpack(&data).unwrap_err(),
            TokenError::InvalidInstruction.into()
        );
    }

    #[test]
    fn test_builders_derive_pdas() {
        let program_id = crate::id();
        let mint = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();
        let payer = Pubkey::new_unique();

        let ix = transfer(&program_id, &mint, &alice, &bob, &payer, 10);
        assert_eq!(ix.accounts[0].pubkey, find_token_account_address(&program_id, &mint, &alice).0);
        assert_eq!(ix.accounts[1].pubkey, find_token_account_address(&program_id, &mint, &bob).0);
        assert!(ix.accounts[3].is_signer);

        let ix = create_token_with_metadata(
            &program_id,
            &mint,
            &payer,
            &alice,
            None,
            9,
            MetadataArgs {
                name: "N".to_string(),
                symbol: String::new(),
                uri: String::new(),
                seller_fee_basis_points: 0,
                update_authority: alice,
            },
        );
        assert_eq!(ix.accounts[1].pubkey, find_metadata_address(&program_id, &mint).0);
    }
}
