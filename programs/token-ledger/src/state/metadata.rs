//! Metadata Record
//!
//! Optional descriptive data for a mint: name, symbol, URI and the
//! royalty fraction. It lives at the metadata PDA of its mint and is
//! written exactly once, in the same instruction that creates the mint.
//!
//! # Size: 322 bytes

use crate::error::TokenError;
use crate::state::{pack_fixed_string, unpack_fixed_string, Pack};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

/// Capacity of the name field in bytes.
pub const MAX_NAME_LENGTH: usize = 32;

/// Capacity of the symbol field in bytes.
pub const MAX_SYMBOL_LENGTH: usize = 10;

/// Capacity of the URI field in bytes.
pub const MAX_URI_LENGTH: usize = 200;

/// 10000 basis points is 100%.
pub const MAX_SELLER_FEE_BASIS_POINTS: u16 = 10_000;

/// Metadata account data.
///
/// # Memory Layout (322 bytes total)
///
/// ```text
/// ┌──────────────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field                   │ Type              │
/// ├────────┼──────┼─────────────────────────┼───────────────────┤
/// │ 0      │ 1    │ is_initialized          │ bool              │
/// │ 1      │ 32   │ mint                    │ Pubkey            │
/// │ 33     │ 32   │ update_authority        │ Pubkey            │
/// │ 65     │ 36   │ name                    │ u32 len + [u8;32] │
/// │ 101    │ 14   │ symbol                  │ u32 len + [u8;10] │
/// │ 115    │ 204  │ uri                     │ u32 len + [u8;200]│
/// │ 319    │ 2    │ seller_fee_basis_points │ u16               │
/// │ 321    │ 1    │ bump                    │ u8                │
/// └──────────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    pub is_initialized: bool,
    pub mint: Pubkey,
    pub update_authority: Pubkey,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub bump: u8,
}

impl Metadata {
    pub const LEN: usize = 322;

    /// Check the descriptive fields against the record's limits.
    ///
    /// # Errors
    ///
    /// * `InvalidName` - name is empty
    /// * `NameTooLong` / `SymbolTooLong` / `UriTooLong` - field overflow
    /// * `InvalidSellerFeeBasisPoints` - fee above 10000
    pub fn validate_fields(
        name: &str,
        symbol: &str,
        uri: &str,
        seller_fee_basis_points: u16,
    ) -> Result<(), ProgramError> {
        if name.is_empty() {
            return Err(TokenError::InvalidName.into());
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(TokenError::NameTooLong.into());
        }
        if symbol.len() > MAX_SYMBOL_LENGTH {
            return Err(TokenError::SymbolTooLong.into());
        }
        if uri.len() > MAX_URI_LENGTH {
            return Err(TokenError::UriTooLong.into());
        }
        if seller_fee_basis_points > MAX_SELLER_FEE_BASIS_POINTS {
            return Err(TokenError::InvalidSellerFeeBasisPoints.into());
        }
        Ok(())
    }
}

impl Pack for Metadata {
    const LEN: usize = 322;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Metadata::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (is_initialized, mint, update_authority, name, symbol, uri, fee, bump) = array_refs![
            input,
            1,
            32,
            32,
            4 + MAX_NAME_LENGTH,
            4 + MAX_SYMBOL_LENGTH,
            4 + MAX_URI_LENGTH,
            2,
            1
        ];

        let is_initialized = match is_initialized[0] {
            0 => false,
            1 => true,
            _ => return Err(ProgramError::InvalidAccountData),
        };

        Ok(Metadata {
            is_initialized,
            mint: Pubkey::new_from_array(*mint),
            update_authority: Pubkey::new_from_array(*update_authority),
            name: unpack_fixed_string(name)?,
            symbol: unpack_fixed_string(symbol)?,
            uri: unpack_fixed_string(uri)?,
            seller_fee_basis_points: u16::from_le_bytes(*fee),
            bump: bump[0],
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Metadata::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (
            is_initialized_dst,
            mint_dst,
            update_authority_dst,
            name_dst,
            symbol_dst,
            uri_dst,
            fee_dst,
            bump_dst,
        ) = mut_array_refs![
            output,
            1,
            32,
            32,
            4 + MAX_NAME_LENGTH,
            4 + MAX_SYMBOL_LENGTH,
            4 + MAX_URI_LENGTH,
            2,
            1
        ];

        is_initialized_dst[0] = self.is_initialized as u8;
        mint_dst.copy_from_slice(self.mint.as_ref());
        update_authority_dst.copy_from_slice(self.update_authority.as_ref());
        pack_fixed_string(&self.name, name_dst, TokenError::NameTooLong)?;
        pack_fixed_string(&self.symbol, symbol_dst, TokenError::SymbolTooLong)?;
        pack_fixed_string(&self.uri, uri_dst, TokenError::UriTooLong)?;
        *fee_dst = self.seller_fee_basis_points.to_le_bytes();
        bump_dst[0] = self.bump;

        Ok(())
    }
}
