//! Construct BIP-39 mnemonics, seeds and BIP-32 master keys for HD wallets.

extern crate bs58;
extern crate byteorder;
extern crate hex;
#[macro_use]
extern crate log;
extern crate rand;
extern crate ring;
extern crate secp256k1;
extern crate unicode_normalization;

pub mod cli;
pub mod keys;
pub mod network;
pub mod util;
pub mod wallet;
