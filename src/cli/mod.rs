//! Command line options for the `hdkeys` driver
//!
//! | option | meaning |
//! |---|---|
//! | `-k`, `--key` | extended private key to import |
//! | `-s`, `--seed` | base58 master seed to import |
//! | `-e`, `--entropy` | hex entropy to import |
//! | `-m`, `--mnemonic` | mnemonic phrase to import |
//! | `--strength` | strength of a generated mnemonic, `basic` by default |
//! | `-p`, `--passphrase` | BIP-39 passphrase |
//! | `--network` | `mainnet` (default) or `testnet` |
//! | `--print` | derive and print the key bundle |
//! | `-v`, `--verbose` | debug logging |

mod options;

pub use self::options::{OptionValue, Options};

use crate::keys::{KeyRequest, KeySource};
use crate::network::Network;
use crate::util::Result;

/// Builds a key request from parsed options
pub fn request_from_options(options: &Options) -> Result<KeyRequest> {
    let source = KeySource::from_fields(
        options.value(&["k", "key"]),
        options.value(&["s", "seed"]),
        options.value(&["e", "entropy"]),
        options.value(&["m", "mnemonic"]),
        options.value(&["strength"]),
    )?;
    let network = match options.value(&["network"]) {
        Some(name) => name.parse::<Network>()?,
        None => Network::default(),
    };
    let passphrase = options.value(&["p", "passphrase"]).unwrap_or("");
    Ok(KeyRequest::new(source)
        .with_passphrase(passphrase)
        .with_network(network))
}
