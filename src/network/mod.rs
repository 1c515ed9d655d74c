//! Configuration for mainnet and testnet
//!
//! # Examples
//!
//! Pick the version prefix used when serializing an extended private key:
//!
//! ```rust
//! use hdkeys::network::Network;
//!
//! let network: Network = "testnet".parse().unwrap();
//! assert_eq!(network.private_extended_key_version(), 0x04358394);
//! ```

mod network;

pub use self::network::{
    Network, MAINNET_PRIVATE_EXTENDED_KEY, MAINNET_PUBLIC_EXTENDED_KEY,
    TESTNET_PRIVATE_EXTENDED_KEY, TESTNET_PUBLIC_EXTENDED_KEY,
};
