use crate::util::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// "xprv" prefix for private extended keys on mainnet
pub const MAINNET_PRIVATE_EXTENDED_KEY: u32 = 0x0488ADE4;
/// "xpub" prefix for public extended keys on mainnet
pub const MAINNET_PUBLIC_EXTENDED_KEY: u32 = 0x0488B21E;
/// "tprv" prefix for private extended keys on testnet
pub const TESTNET_PRIVATE_EXTENDED_KEY: u32 = 0x04358394;
/// "tpub" prefix for public extended keys on testnet
pub const TESTNET_PUBLIC_EXTENDED_KEY: u32 = 0x043587CF;

/// Network type
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Looks up the network that owns an extended key version prefix
    pub fn from_extended_key_version(version: u32) -> Option<Network> {
        match version {
            MAINNET_PRIVATE_EXTENDED_KEY | MAINNET_PUBLIC_EXTENDED_KEY => Some(Network::Mainnet),
            TESTNET_PRIVATE_EXTENDED_KEY | TESTNET_PUBLIC_EXTENDED_KEY => Some(Network::Testnet),
            _ => None,
        }
    }

    /// Returns the version prefix for extended private keys
    pub fn private_extended_key_version(&self) -> u32 {
        match self {
            Network::Mainnet => MAINNET_PRIVATE_EXTENDED_KEY,
            Network::Testnet => TESTNET_PRIVATE_EXTENDED_KEY,
        }
    }

    /// Returns the version prefix for extended public keys
    pub fn public_extended_key_version(&self) -> u32 {
        match self {
            Network::Mainnet => MAINNET_PUBLIC_EXTENDED_KEY,
            Network::Testnet => TESTNET_PUBLIC_EXTENDED_KEY,
        }
    }

    /// Lowercase network name
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl Default for Network {
    fn default() -> Network {
        Network::Mainnet
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Network> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet" | "test" => Ok(Network::Testnet),
            _ => Err(Error::InvalidArgument(format!("Unknown network: {}", s))),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
