//! Wallet and key management
//!
//! BIP-39 mnemonics and seeds, the strength table and BIP-32 master extended keys.

mod extended_key;
mod mnemonic;
mod seed;
mod strength;

pub use self::extended_key::{
    is_private_key_valid, ExtendedKey, ExtendedKeyType, EXTENDED_KEY_LEN,
};
pub use self::mnemonic::{load_wordlist, mnemonic_decode, mnemonic_encode};
pub use self::seed::{mnemonic_to_seed, SEED_LEN};
pub use self::strength::{StrengthLevel, STRENGTH_LEVELS};
