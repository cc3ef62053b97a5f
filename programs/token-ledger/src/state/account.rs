//! Token Account Record
//!
//! The balance of one owner under one mint. There is exactly one per
//! `(mint, owner)` pair because its address is derived from that pair
//! (see `utils::pda`). Nobody creates it explicitly: the first credit
//! (MintTo or an incoming Transfer) allocates it with balance zero and
//! applies the credit in the same instruction.
//!
//! # Size: 74 bytes

use crate::error::TokenError;
use crate::state::Pack;
use arrayref::{array_mut_ref, array_ref, array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

/// Token account data.
///
/// # Memory Layout (74 bytes total)
///
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │ Offset │ Size │ Field          │ Type       │
/// ├────────┼──────┼────────────────┼────────────┤
/// │ 0      │ 32   │ mint           │ Pubkey     │
/// │ 32     │ 32   │ owner          │ Pubkey     │
/// │ 64     │ 8    │ amount         │ u64        │
/// │ 72     │ 1    │ is_initialized │ bool       │
/// │ 73     │ 1    │ bump           │ u8         │
/// └─────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Account {
    /// The mint whose tokens this account holds.
    pub mint: Pubkey,

    /// The only key that may transfer out of or burn from this account.
    pub owner: Pubkey,

    /// Balance in base units.
    pub amount: u64,

    pub is_initialized: bool,

    /// PDA bump, stored so later instructions need not search for it.
    pub bump: u8,
}

impl Account {
    pub const LEN: usize = 74;

    /// An empty account for `(mint, owner)`, ready to be credited.
    pub fn new(mint: Pubkey, owner: Pubkey, bump: u8) -> Self {
        Account {
            mint,
            owner,
            amount: 0,
            is_initialized: true,
            bump,
        }
    }

    pub fn require_initialized(&self) -> Result<(), ProgramError> {
        if !self.is_initialized {
            return Err(TokenError::UninitializedAccount.into());
        }
        Ok(())
    }
}

impl Pack for Account {
    const LEN: usize = 74;

    fn unpack(input: &[u8]) -> Result<Self, ProgramError> {
        let input = array_ref![input, 0, Account::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (mint, owner, amount, is_initialized, bump) = array_refs![input, 32, 32, 8, 1, 1];

        let is_initialized = match is_initialized[0] {
            0 => false,
            1 => true,
            _ => return Err(ProgramError::InvalidAccountData),
        };

        Ok(Account {
            mint: Pubkey::new_from_array(*mint),
            owner: Pubkey::new_from_array(*owner),
            amount: u64::from_le_bytes(*amount),
            is_initialized,
            bump: bump[0],
        })
    }

    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError> {
        let output = array_mut_ref![output, 0, Account::LEN];

        #[allow(clippy::ptr_offset_with_cast)]
        let (mint_dst, owner_dst, amount_dst, is_initialized_dst, bump_dst) =
            mut_array_refs![output, 32, 32, 8, 1, 1];

        mint_dst.copy_from_slice(self.mint.as_ref());
        owner_dst.copy_from_slice(self.owner.as_ref());
        *amount_dst = self.amount.to_le_bytes();
        is_initialized_dst[0] = self.is_initialized as u8;
        bump_dst[0] = self.bump;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_is_empty() {
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let account = Account::new(mint, owner, 254);

        assert_eq!(account.amount, 0);
        assert!(account.require_initialized().is_ok());
    }

    #[test]
    fn test_account_layout() {
        let mut account = Account::new(Pubkey::new_unique(), Pubkey::new_unique(), 251);
        account.amount = 500_000_000_000;

        let mut packed = [0u8; Account::LEN];
        account.pack_into_slice(&mut packed).unwrap();

        assert_eq!(&packed[0..32], account.mint.as_ref());
        assert_eq!(&packed[32..64], account.owner.as_ref());
        assert_eq!(&packed[64..72], &500_000_000_000u64.to_le_bytes());
        assert_eq!(packed[72], 1);
        assert_eq!(packed[73], 251);

        assert_eq!(Account::unpack_from_slice(&packed).unwrap(), account);
    }

    #[test]
    fn test_zeroed_account_is_uninitialized() {
        let account = Account::unpack(&[0u8; Account::LEN]).unwrap();
        assert_eq!(
            account.require_initialized().unwrap_err(),
            TokenError::UninitializedAccount.into()
        );
    }

    #[test]
    fn test_account_wrong_size() {
        assert!(Account::unpack_from_slice(&[0u8; 73]).is_err());
        assert!(Account::unpack_from_slice(&[0u8; 165]).is_err());
    }
}
