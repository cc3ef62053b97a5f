//! Utility Modules
//!
//! Helpers shared by every processor.
//!
//! - `allocation`: creating program-derived accounts through the system program
//! - `assertions`: account checks (existence, owner, signer, writable, size, rent)
//! - `authority`: mint authority and account owner validation
//! - `math`: checked base-unit arithmetic, decimals bound, UI amounts
//! - `pda`: address derivation for token accounts and metadata

pub mod allocation;
pub mod assertions;
pub mod authority;
pub mod math;
pub mod pda;

pub use allocation::*;
pub use assertions::*;
pub use authority::*;
pub use math::*;
pub use pda::*;
