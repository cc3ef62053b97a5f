//! Account State Structures
//!
//! The records the ledger stores, and the projection it returns.
//!
//! | Type | Size | Address |
//! |------|------|---------|
//! | Mint | 82 bytes | caller-chosen keypair |
//! | Account | 74 bytes | PDA of (mint, owner) |
//! | Metadata | 322 bytes | PDA of mint |
//! | MintInfo | 81 bytes | return data of GetMintInfo |
//!
//! # Serialization
//!
//! Every structure has a fixed, deterministic layout:
//! - Little-endian integers
//! - No padding between fields
//! - Optional keys as `COption<Pubkey>` (4-byte tag + 32 bytes)
//! - Strings as a 4-byte length followed by a zero-padded fixed field
//!
//! ```ignore
//! let mint = Mint::unpack_from_slice(&mint_info.data.borrow())?;  // Read
//! mint.pack_into_slice(&mut mint_info.data.borrow_mut())?;        // Write
//! ```

// =============================================================================
// SUBMODULES
// =============================================================================

pub mod account;
pub mod metadata;
pub mod mint;
pub mod mint_info;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use account::Account;
pub use metadata::{Metadata, MAX_NAME_LENGTH, MAX_SELLER_FEE_BASIS_POINTS, MAX_SYMBOL_LENGTH, MAX_URI_LENGTH};
pub use mint::Mint;
pub use mint_info::MintInfo;

use crate::error::TokenError;
use arrayref::{array_refs, mut_array_refs};
use solana_program::{program_error::ProgramError, pubkey::Pubkey};

// =============================================================================
// PACK TRAIT
// =============================================================================

/// Packing and unpacking of fixed-size state to and from account bytes.
///
/// Layouts are written by hand rather than derived so that the byte
/// offsets documented on each struct are exactly what is stored.
pub trait Pack: Sized {
    /// Serialized size in bytes. Also the account allocation size.
    const LEN: usize;

    /// Deserialize from a byte slice.
    ///
    /// # Panics
    /// May panic if `input.len() < Self::LEN`; use `unpack_from_slice`.
    fn unpack(input: &[u8]) -> Result<Self, ProgramError>;

    /// Serialize into a byte slice.
    ///
    /// # Panics
    /// May panic if `output.len() < Self::LEN`; use `pack_into_slice`.
    fn pack(&self, output: &mut [u8]) -> Result<(), ProgramError>;

    /// Unpack after checking `src.len() == Self::LEN`.
    fn unpack_from_slice(src: &[u8]) -> Result<Self, ProgramError> {
        if src.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        Self::unpack(src)
    }

    /// Pack after checking `dst.len() == Self::LEN`.
    fn pack_into_slice(&self, dst: &mut [u8]) -> Result<(), ProgramError> {
        if dst.len() != Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        self.pack(dst)
    }
}

// =============================================================================
// COPTION - COMPACT OPTIONAL TYPE
// =============================================================================

/// An optional value with a fixed on-chain layout.
///
/// `Option<T>` has no stable layout, so authorities are stored as
/// `[tag: u32 LE][value]` with tag 0 for none and 1 for some.
/// Revoking an authority is a move to the none tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct COption<T> {
    value: Option<T>,
}

impl<T> COption<T> {
    /// Present value.
    pub fn some(value: T) -> Self {
        Self { value: Some(value) }
    }

    /// Absent value.
    pub fn none() -> Self {
        Self { value: None }
    }

    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }

    pub fn as_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T> From<Option<T>> for COption<T> {
    fn from(opt: Option<T>) -> Self {
        Self { value: opt }
    }
}

impl<T> From<COption<T>> for Option<T> {
    fn from(copt: COption<T>) -> Self {
        copt.value
    }
}

// =============================================================================
// SHARED FIELD CODECS
// =============================================================================

/// Unpack a `COption<Pubkey>` from its 36-byte slot.
///
/// Tags other than 0 and 1 are corrupt data.
pub(crate) fn unpack_coption_pubkey(src: &[u8; 36]) -> Result<COption<Pubkey>, ProgramError> {
    let (tag, body) = array_refs![src, 4, 32];
    match u32::from_le_bytes(*tag) {
        0 => Ok(COption::none()),
        1 => Ok(COption::some(Pubkey::new_from_array(*body))),
        _ => Err(ProgramError::InvalidAccountData),
    }
}

/// Pack a `COption<Pubkey>` into its 36-byte slot, zeroing the body for none.
pub(crate) fn pack_coption_pubkey(src: &COption<Pubkey>, dst: &mut [u8; 36]) {
    let (tag, body) = mut_array_refs![dst, 4, 32];
    match src.as_ref() {
        Some(pubkey) => {
            *tag = 1u32.to_le_bytes();
            body.copy_from_slice(pubkey.as_ref());
        }
        None => {
            *tag = 0u32.to_le_bytes();
            body.fill(0);
        }
    }
}

/// Unpack a length-prefixed string from a `4 + capacity` slot.
pub(crate) fn unpack_fixed_string(src: &[u8]) -> Result<String, ProgramError> {
    let (len_bytes, body) = src.split_at(4);
    let len = u32::from_le_bytes(
        len_bytes
            .try_into()
            .map_err(|_| ProgramError::InvalidAccountData)?,
    ) as usize;
    let bytes = body.get(..len).ok_or(ProgramError::InvalidAccountData)?;
    String::from_utf8(bytes.to_vec()).map_err(|_| ProgramError::InvalidAccountData)
}

/// Pack a string into a `4 + capacity` slot, zero padding the tail.
///
/// # Errors
/// `error` if the string does not fit.
pub(crate) fn pack_fixed_string(
    value: &str,
    dst: &mut [u8],
    error: TokenError,
) -> Result<(), ProgramError> {
    let (len_dst, body) = dst.split_at_mut(4);
    if value.len() > body.len() {
        return Err(error.into());
    }
    len_dst.copy_from_slice(&(value.len() as u32).to_le_bytes());
    body[..value.len()].copy_from_slice(value.as_bytes());
    body[value.len()..].fill(0);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coption_pubkey_slot() {
        let key = Pubkey::new_unique();
        let mut slot = [0xffu8; 36];

        pack_coption_pubkey(&COption::some(key), &mut slot);
        assert_eq!(unpack_coption_pubkey(&slot).unwrap(), COption::some(key));

        pack_coption_pubkey(&COption::none(), &mut slot);
        assert_eq!(slot, [0u8; 36]);
        assert!(unpack_coption_pubkey(&slot).unwrap().is_none());
    }

    #[test]
    fn test_coption_invalid_tag() {
        let mut slot = [0u8; 36];
        slot[0] = 2;
        assert!(unpack_coption_pubkey(&slot).is_err());
    }

    #[test]
    fn test_fixed_string_slot() {
        let mut slot = [0xffu8; 4 + 10];
        pack_fixed_string("SOL", &mut slot, TokenError::SymbolTooLong).unwrap();
        assert_eq!(&slot[..4], &3u32.to_le_bytes());
        assert_eq!(&slot[7..], &[0u8; 7]);
        assert_eq!(unpack_fixed_string(&slot).unwrap(), "SOL");

        assert_eq!(
            pack_fixed_string("ELEVENCHARS", &mut slot, TokenError::SymbolTooLong).unwrap_err(),
            TokenError::SymbolTooLong.into()
        );
    }

    #[test]
    fn test_fixed_string_corrupt_length() {
        let mut slot = [0u8; 4 + 10];
        slot[..4].copy_from_slice(&11u32.to_le_bytes());
        assert!(unpack_fixed_string(&slot).is_err());
    }
}
