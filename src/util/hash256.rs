use hex;
use ring::digest::{digest, SHA256};
use std::fmt;

/// 256-bit SHA-256 digest
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// Converts the hash into a hex string in digest order
    pub fn encode(&self) -> String {
        hex::encode(self.0)
    }
}

/// Hashes a data array once using SHA256
pub fn sha256(data: &[u8]) -> Hash256 {
    let sha256 = digest(&SHA256, data);
    let mut hash256 = [0; 32];
    hash256.clone_from_slice(sha256.as_ref());
    Hash256(hash256)
}

/// Hashes a data array twice using SHA256
pub fn sha256d(data: &[u8]) -> Hash256 {
    sha256(&sha256(data).0)
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}
