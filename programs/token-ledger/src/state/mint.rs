//! Mint Record
//!
//! One Mint per token type. It owns the decimals, the total supply, and
//! the two authorities. Every token account points back at exactly one
//! Mint, and the Mint's supply is the sum of their balances.
//!
//! # Size: 82 bytes

use crate::error::TokenError;
use crate::state::{pack_coption_pubkey, unpack_coption_pubkey, COption, Pack};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// MINT STRUCTURE
// =============================================================================

/// Mint account data.
///
/// # Memory Layout (82 bytes total)
///
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │ Offset │ Size │ Field            │ Type                        │
/// ├────────┼──────┼──────────────────┼─────────────────────────────┤
/// │ 0      │ 36   │ mint_authority   │ COption<Pubkey>             │
/// │ 36     │ 8    │ supply           │ u64                         │
/// │ 44     │ 1    │ decimals         │ u8                          │
/// │ 45     │ 1    │ is_initialized   │ bool (0 or 1)               │
/// │ 46     │ 36   │ freeze_authority │ COption<Pubkey>             │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
///
/// # Lifecycle
///
/// ```text
/// allocated (zeros) ──InitializeMint──▶ initialized, supply = 0
///                                        │
///             MintTo / Burn ─────────────┤ supply moves
///             SetMintAuthority(Some) ────┤ authority rotates
///             SetMintAuthority(None) ────┘ authority revoked, terminal
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Mint {
    /// The key allowed to mint and to rotate this authority.
    ///
    /// `none` means revoked. Nothing sets it back, so a revoked mint has
    /// a fixed supply forever.
    pub mint_authority: COption<Pubkey>,

    /// Total base units outstanding across all token accounts of this mint.
    ///
    /// ```text
    /// supply == SUM(token accounts of this mint).amount
    /// ```
    ///
    /// Raised by MintTo, lowered by Burn, untouched by Transfer.
    pub supply: u64,

    /// Display precision, 0 through 9. Fixed at creation.
    ///
    /// Amounts are never rescaled by it; see `utils::math`.
    pub decimals: u8,

    /// Set by InitializeMint. A zeroed account reads as uninitialized.
    pub is_initialized: bool,

    /// Recorded at creation and never changed by any instruction.
    pub freeze_authority: COption<Pubkey>,
}

impl Mint {
    /// Size of Mint when serialized: 36 + 8 + 1 + 1 + 36.
    pub const LEN: usize = 82;

    /// A freshly initialized mint with zero supply.
    pub fn new(decimals: u8, mint_authority: Pubkey, freeze_authority: Option<Pubkey>) -> Self {
        Mint {
            mint_authority: COption::some(mint_authority),
            supply: 0,
            decimals,
            is_initialized: true,
            freeze_authority: freeze_authority.into(),
        }
    }

    /// Fails with `UninitializedAccount` unless InitializeMint has run.
    pub fn require_initialized(&self) -> Result<(), ProgramError> {
        if !self.is_initialized {
            return Err(TokenError::UninitializedAccount.into());
        }
        Ok(())
    }
}

// =============================================================================
// PACK TRAIT IMPLEMENTATION
// =============================================================================

impl Pack for Mint {
    const LEN: usize = 82;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Mint::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (mint_authority, supply, decimals, is_initialized, freeze_authority) =
            array_refs![input, 36, 8, 1, 1, 36];

        let is_initialized = match is_initialized[0] {
            0 => false,
            1 => true,
            _ => return Err(ProgramError::InvalidAccountData),
        };

        Ok(Mint {
            mint_authority: unpack_coption_pubkey(mint_authority)?,
            supply: u64::from_le_bytes(*supply),
            decimals: decimals[0],
            is_initialized,
            freeze_authority: unpack_coption_pubkey(freeze_authority)?,
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Mint::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (mint_authority_dst, supply_dst, decimals_dst, is_initialized_dst, freeze_authority_dst) =
            mut_array_refs![output, 36, 8, 1, 1, 36];

        pack_coption_pubkey(&self.mint_authority, mint_authority_dst);
        *supply_dst = self.supply.to_le_bytes();
        decimals_dst[0] = self.decimals;
        is_initialized_dst[0] = self.is_initialized as u8;
        pack_coption_pubkey(&self.freeze_authority, freeze_authority_dst);

        Ok(())
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mint_has_zero_supply() {
        let authority = Pubkey::new_unique();
        let mint = Mint::new(9, authority, None);

        assert!(mint.is_initialized);
        assert_eq!(mint.supply, 0);
        assert_eq!(mint.mint_authority.as_ref(), Some(&authority));
        assert!(mint.freeze_authority.is_none());
        assert!(mint.require_initialized().is_ok());
    }

    #[test]
    fn test_mint_layout_offsets() {
        let authority = Pubkey::new_unique();
        let freeze = Pubkey::new_unique();
        let mut mint = Mint::new(6, authority, Some(freeze));
        mint.supply = 0x0102_0304_0506_0708;

        let mut packed = [0u8; Mint::LEN];
        mint.pack_into_slice(&mut packed).unwrap();

        assert_eq!(&packed[0..4], &1u32.to_le_bytes());
        assert_eq!(&packed[4..36], authority.as_ref());
        assert_eq!(&packed[36..44], &0x0102_0304_0506_0708u64.to_le_bytes());
        assert_eq!(packed[44], 6);
        assert_eq!(packed[45], 1);
        assert_eq!(&packed[50..82], freeze.as_ref());

        assert_eq!(Mint::unpack_from_slice(&packed).unwrap(), mint);
    }

    #[test]
    fn test_revoked_mint_authority_packs_as_none() {
        let mut mint = Mint::new(0, Pubkey::new_unique(), None);
        mint.mint_authority = COption::none();

        let mut packed = [0u8; Mint::LEN];
        mint.pack(&mut packed).unwrap();

        assert_eq!(&packed[0..36], &[0u8; 36]);
        assert!(Mint::unpack(&packed).unwrap().mint_authority.is_none());
    }

    #[test]
    fn test_zeroed_account_is_uninitialized() {
        let mint = Mint::unpack(&[0u8; Mint::LEN]).unwrap();
        assert!(!mint.is_initialized);
        assert_eq!(
            mint.require_initialized().unwrap_err(),
            TokenError::UninitializedAccount.into()
        );
    }

    #[test]
    fn test_mint_wrong_size() {
        assert!(Mint::unpack_from_slice(&[0u8; 81]).is_err());
        assert!(Mint::unpack_from_slice(&[0u8; 83]).is_err());
    }

    #[test]
    fn test_mint_corrupt_flag() {
        let mut packed = [0u8; Mint::LEN];
        packed[45] = 7;
        assert!(Mint::unpack(&packed).is_err());
    }
}
