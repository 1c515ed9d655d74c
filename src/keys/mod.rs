//! Key construction for the master node of an HD wallet
//!
//! A [`KeyRequest`] names one key source. [`construct_keys`] follows it to the
//! BIP-32 master node and returns every key it can express as a [`KeyBundle`].
//!
//! # Examples
//!
//! Restore keys from a mnemonic:
//!
//! ```rust
//! use hdkeys::keys::{construct_keys, KeyRequest, KeySource, Source};
//!
//! let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
//! let request = KeyRequest::new(KeySource::Mnemonic(phrase.to_string())).with_passphrase("TREZOR");
//! let bundle = construct_keys(&request).unwrap();
//! assert_eq!(bundle.source, Source::Import);
//! assert_eq!(bundle.entropy.as_deref(), Some("00000000000000000000000000000000"));
//! ```
//!
//! Generate a fresh 24-word mnemonic:
//!
//! ```rust
//! use hdkeys::keys::{construct_keys, KeyRequest, KeySource};
//! use hdkeys::wallet::StrengthLevel;
//!
//! let request = KeyRequest::new(KeySource::Generate(StrengthLevel::Fortified));
//! let bundle = construct_keys(&request).unwrap();
//! assert_eq!(bundle.mnemonic.unwrap().split(' ').count(), 24);
//! ```

mod bundle;
mod construct;
mod request;

pub use self::bundle::{KeyBundle, Source};
pub use self::construct::{
    construct_keys, generate_mnemonic, mnemonic_from_entropy, mnemonic_to_entropy,
    normalize_mnemonic, resolve_mnemonic,
};
pub use self::request::{KeyRequest, KeySource};
