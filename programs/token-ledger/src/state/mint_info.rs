//! Mint Info Projection
//!
//! The public view of a mint returned by GetMintInfo. It carries no
//! initialization flag: a projection only exists for an initialized mint.

use crate::state::{pack_coption_pubkey, unpack_coption_pubkey, COption, Mint, Pack};
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

/// Read-only projection of a Mint.
///
/// # Layout (81 bytes)
///
/// ```text
/// [0..8]   supply            u64 LE
/// [8]      decimals          u8
/// [9..45]  mint_authority    COption<Pubkey>
/// [45..81] freeze_authority  COption<Pubkey>
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MintInfo {
    pub supply: u64,
    pub decimals: u8,
    pub mint_authority: Option<Pubkey>,
    pub freeze_authority: Option<Pubkey>,
}

impl From<&Mint> for MintInfo {
    fn from(mint: &Mint) -> Self {
        MintInfo {
            supply: mint.supply,
            decimals: mint.decimals,
            mint_authority: mint.mint_authority.into(),
            freeze_authority: mint.freeze_authority.into(),
        }
    }
}

impl Pack for MintInfo {
    const LEN: usize = 81;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, 81];

        #[allow(clippy::ptr_offset_with_cast)]
        let (supply, decimals, mint_authority, freeze_authority) = array_refs![input, 8, 1, 36, 36];

        Ok(MintInfo {
            supply: u64::from_le_bytes(*supply),
            decimals: decimals[0],
            mint_authority: unpack_coption_pubkey(mint_authority)?.into(),
            freeze_authority: unpack_coption_pubkey(freeze_authority)?.into(),
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, 81];

        #[allow(clippy::ptr_offset_with_cast)]
        let (supply_dst, decimals_dst, mint_authority_dst, freeze_authority_dst) =
            mut_array_refs![output, 8, 1, 36, 36];

        *supply_dst = self.supply.to_le_bytes();
        decimals_dst[0] = self.decimals;
        pack_coption_pubkey(&COption::from(self.mint_authority), mint_authority_dst);
        pack_coption_pubkey(&COption::from(self.freeze_authority), freeze_authority_dst);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_of_mint() {
        let authority = Pubkey::new_unique();
        let mut mint = Mint::new(9, authority, None);
        mint.supply = 750_000_000_000;

        let info = MintInfo::from(&mint);
        assert_eq!(info.supply, 750_000_000_000);
        assert_eq!(info.decimals, 9);
        assert_eq!(info.mint_authority, Some(authority));
        assert_eq!(info.freeze_authority, None);

        let mut packed = [0u8; MintInfo::LEN];
        info.pack_into_slice(&mut packed).unwrap();
        assert_eq!(MintInfo::unpack_from_slice(&packed).unwrap(), info);
    }
}
