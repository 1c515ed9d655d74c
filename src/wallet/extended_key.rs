use crate::network::Network;
use crate::util::{base58, Error, Result};
use byteorder::{BigEndian, ByteOrder};
use ring::hmac;
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use std::fmt;

/// Maximum private key value (exclusive)
const SECP256K1_CURVE_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// HMAC key used to derive the master node from a seed
const MASTER_SEED_KEY: &[u8] = b"Bitcoin seed";

/// Length of a serialized extended key without its checksum
pub const EXTENDED_KEY_LEN: usize = 78;

/// Public or private key type
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ExtendedKeyType {
    Public,
    Private,
}

/// A private or public key in an hierarchial deterministic wallet
///
/// Layout: version(4) depth(1) parent fingerprint(4) index(4) chain code(32) key(33).
#[derive(Clone, Copy)]
pub struct ExtendedKey(pub [u8; EXTENDED_KEY_LEN]);

impl ExtendedKey {
    /// Creates a new extended public key
    pub fn new_public_key(
        network: Network,
        depth: u8,
        parent_fingerprint: &[u8],
        index: u32,
        chain_code: &[u8],
        public_key: &[u8],
    ) -> Result<ExtendedKey> {
        if public_key.len() != 33 {
            return Err(Error::InvalidArgument("Public key must be len 33".to_string()));
        }
        let version = network.public_extended_key_version();
        ExtendedKey::assemble(version, depth, parent_fingerprint, index, chain_code, |key| {
            key.copy_from_slice(public_key)
        })
    }

    /// Creates a new extended private key
    pub fn new_private_key(
        network: Network,
        depth: u8,
        parent_fingerprint: &[u8],
        index: u32,
        chain_code: &[u8],
        private_key: &[u8],
    ) -> Result<ExtendedKey> {
        if private_key.len() != 32 {
            return Err(Error::InvalidArgument("Private key must be len 32".to_string()));
        }
        let version = network.private_extended_key_version();
        ExtendedKey::assemble(version, depth, parent_fingerprint, index, chain_code, |key| {
            key[0] = 0;
            key[1..].copy_from_slice(private_key);
        })
    }

    fn assemble<F: FnOnce(&mut [u8])>(
        version: u32,
        depth: u8,
        parent_fingerprint: &[u8],
        index: u32,
        chain_code: &[u8],
        write_key: F,
    ) -> Result<ExtendedKey> {
        if parent_fingerprint.len() != 4 {
            return Err(Error::InvalidArgument("Fingerprint must be len 4".to_string()));
        }
        if chain_code.len() != 32 {
            return Err(Error::InvalidArgument("Chain code must be len 32".to_string()));
        }
        let mut extended_key = ExtendedKey([0; EXTENDED_KEY_LEN]);
        let k = &mut extended_key.0;
        BigEndian::write_u32(&mut k[0..4], version);
        k[4] = depth;
        k[5..9].copy_from_slice(parent_fingerprint);
        BigEndian::write_u32(&mut k[9..13], index);
        k[13..45].copy_from_slice(chain_code);
        write_key(&mut k[45..]);
        Ok(extended_key)
    }

    /// Derives the master private key of a seed using BIP-32
    pub fn from_seed(seed: &[u8], network: Network) -> Result<ExtendedKey> {
        let key = hmac::Key::new(hmac::HMAC_SHA512, MASTER_SEED_KEY);
        let tag = hmac::sign(&key, seed);
        let (private_key, chain_code) = tag.as_ref().split_at(32);
        if !is_private_key_valid(private_key) {
            let msg = "Seed produces an invalid master key".to_string();
            return Err(Error::InvalidArgument(msg));
        }
        ExtendedKey::new_private_key(network, 0, &[0; 4], 0, chain_code, private_key)
    }

    /// Gets the extended key version byte prefix
    pub fn version(&self) -> u32 {
        BigEndian::read_u32(&self.0[0..4])
    }

    /// Gets the network
    pub fn network(&self) -> Result<Network> {
        match Network::from_extended_key_version(self.version()) {
            Some(network) => Ok(network),
            None => {
                let msg = format!("Unknown extended key version {:#010x}", self.version());
                Err(Error::DecodeError(msg))
            }
        }
    }

    /// Gets the key type
    pub fn key_type(&self) -> Result<ExtendedKeyType> {
        let network = self.network()?;
        if self.version() == network.private_extended_key_version() {
            Ok(ExtendedKeyType::Private)
        } else {
            Ok(ExtendedKeyType::Public)
        }
    }

    /// Gets the depth
    pub fn depth(&self) -> u8 {
        self.0[4]
    }

    /// Gets the first 4 bytes of the parent key, or 0 if this is the master key
    pub fn parent_fingerprint(&self) -> [u8; 4] {
        [self.0[5], self.0[6], self.0[7], self.0[8]]
    }

    /// Get the index of this key as derived from the parent
    pub fn index(&self) -> u32 {
        BigEndian::read_u32(&self.0[9..13])
    }

    /// Gets the chain code
    pub fn chain_code(&self) -> [u8; 32] {
        let mut chain_code = [0; 32];
        chain_code.clone_from_slice(&self.0[13..45]);
        chain_code
    }

    /// Gets the compressed public key, computing it for private keys
    pub fn public_key(&self) -> Result<[u8; 33]> {
        match self.key_type()? {
            ExtendedKeyType::Public => {
                let mut public_key = [0; 33];
                public_key.clone_from_slice(&self.0[45..]);
                Ok(public_key)
            }
            ExtendedKeyType::Private => {
                let secp = Secp256k1::signing_only();
                let secp_secret_key = SecretKey::from_slice(&self.0[46..])?;
                let secp_public_key = PublicKey::from_secret_key(&secp, &secp_secret_key);
                Ok(secp_public_key.serialize())
            }
        }
    }

    /// Gets the private key if this is an extended private key
    pub fn private_key(&self) -> Result<[u8; 32]> {
        if self.key_type()? == ExtendedKeyType::Private {
            let mut private_key = [0; 32];
            private_key.clone_from_slice(&self.0[46..]);
            Ok(private_key)
        } else {
            let msg = "Cannot get private key of public extended key";
            Err(Error::InvalidArgument(msg.to_string()))
        }
    }

    /// Gets the extended public key for this key
    pub fn extended_public_key(&self) -> Result<ExtendedKey> {
        match self.key_type()? {
            ExtendedKeyType::Public => Ok(*self),
            ExtendedKeyType::Private => ExtendedKey::new_public_key(
                self.network()?,
                self.depth(),
                &self.0[5..9],
                self.index(),
                &self.0[13..45],
                &self.public_key()?,
            ),
        }
    }

    /// Encodes an extended key into a string
    pub fn encode(&self) -> String {
        base58::encode_check(&self.0)
    }

    /// Decodes an extended key from a string
    ///
    /// The version must be a known private or public prefix and the key material must be valid.
    pub fn decode(s: &str) -> Result<ExtendedKey> {
        let v = base58::decode_check(s)?;
        if v.len() != EXTENDED_KEY_LEN {
            let msg = format!("Extended key must be len {}, got {}", EXTENDED_KEY_LEN, v.len());
            return Err(Error::DecodeError(msg));
        }
        let mut extended_key = ExtendedKey([0; EXTENDED_KEY_LEN]);
        extended_key.0.clone_from_slice(&v);
        match extended_key.key_type()? {
            ExtendedKeyType::Private => {
                if extended_key.0[45] != 0 {
                    let msg = "Private key must be prefixed with 0".to_string();
                    return Err(Error::DecodeError(msg));
                }
                if SecretKey::from_slice(&extended_key.0[46..]).is_err() {
                    let msg = "Malformed extended key payload: invalid private key".to_string();
                    return Err(Error::DecodeError(msg));
                }
            }
            ExtendedKeyType::Public => {
                if PublicKey::from_slice(&extended_key.0[45..]).is_err() {
                    let msg = "Malformed extended key payload: invalid public key".to_string();
                    return Err(Error::DecodeError(msg));
                }
            }
        }
        Ok(extended_key)
    }
}

impl fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.key_type() {
            Ok(ExtendedKeyType::Public) => write!(f, "{}", self.encode()),
            _ => write!(f, "ExtendedKey({:#010x}, depth {})", self.version(), self.depth()),
        }
    }
}

impl PartialEq for ExtendedKey {
    fn eq(&self, other: &ExtendedKey) -> bool {
        self.0[..] == other.0[..]
    }
}

impl Eq for ExtendedKey {}

/// Checks that a private key is in valid SECP256K1 range
pub fn is_private_key_valid(key: &[u8]) -> bool {
    key.len() == 32 && key < &SECP256K1_CURVE_ORDER[..] && key.iter().any(|b| *b != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex;

    #[test]
    fn private_key_range() {
        // Valid
        let mut max = SECP256K1_CURVE_ORDER;
        max[31] -= 1;
        assert!(is_private_key_valid(&max));
        assert!(is_private_key_valid(&[0x01; 32]));

        // Invalid
        assert!(!is_private_key_valid(&[0x00; 32]));
        assert!(!is_private_key_valid(&[0xff; 32]));
        assert!(!is_private_key_valid(&SECP256K1_CURVE_ORDER));
        assert!(!is_private_key_valid(&[0x01; 31]));
    }

    #[test]
    fn master_keys() {
        // BIP-32 test vector 1
        let m = master_private_key("000102030405060708090a0b0c0d0e0f");
        assert!(m.encode() == "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi");
        assert!(m.extended_public_key().unwrap().encode() == "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8");
        assert!(hex::encode(m.private_key().unwrap()) == "e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35");
        assert!(hex::encode(&m.public_key().unwrap()[..]) == "0339a36013301597daef41fbe593a02cc513d0b55527ec2df1050e2e8ff49c85c2");
        assert!(hex::encode(m.chain_code()) == "873dff81c02f525623fd1fe5167eac3a55a049de3d314bb42ee227ffed37d508");

        // BIP-32 test vector 2
        let m = master_private_key("fffcf9f6f3f0edeae7e4e1dedbd8d5d2cfccc9c6c3c0bdbab7b4b1aeaba8a5a29f9c999693908d8a8784817e7b7875726f6c696663605d5a5754514e4b484542");
        assert!(m.encode() == "xprv9s21ZrQH143K31xYSDQpPDxsXRTUcvj2iNHm5NUtrGiGG5e2DtALGdso3pGz6ssrdK4PFmM8NSpSBHNqPqm55Qn3LqFtT2emdEXVYsCzC2U");
        assert!(m.extended_public_key().unwrap().encode() == "xpub661MyMwAqRbcFW31YEwpkMuc5THy2PSt5bDMsktWQcFF8syAmRUapSCGu8ED9W6oDMSgv6Zz8idoc4a6mr8BDzTJY47LJhkJ8UB7WEGuduB");

        // BIP-32 test vector 3
        let m = master_private_key("4b381541583be4423346c643850da4b320e46a87ae3d2a4e6da11eba819cd4acba45d239319ac14f863b8d5ab5a0d0c64d2e8a1e7d1457df2e5a3c51c73235be");
        assert!(m.encode() == "xprv9s21ZrQH143K25QhxbucbDDuQ4naNntJRi4KUfWT7xo4EKsHt2QJDu7KXp1A3u7Bi1j8ph3EGsZ9Xvz9dGuVrtHHs7pXeTzjuxBrCmmhgC6");
        assert!(m.extended_public_key().unwrap().encode() == "xpub661MyMwAqRbcEZVB4dScxMAdx6d4nFc9nvyvH3v4gJL378CSRZiYmhRoP7mBy6gSPSCYk6SzXPTf3ND1cZAceL7SfJ1Z3GC8vBgp2epUt13");
    }

    #[test]
    fn master_fields() {
        let m = master_private_key("000102030405060708090a0b0c0d0e0f");
        assert!(m.network().unwrap() == Network::Mainnet);
        assert!(m.key_type().unwrap() == ExtendedKeyType::Private);
        assert!(m.depth() == 0);
        assert!(m.parent_fingerprint() == [0; 4]);
        assert!(m.index() == 0);

        let seed = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let t = ExtendedKey::from_seed(&seed, Network::Testnet).unwrap();
        assert!(t.encode().starts_with("tprv"));
        assert!(t.extended_public_key().unwrap().encode().starts_with("tpub"));
        assert!(t.private_key().unwrap() == m.private_key().unwrap());
        assert!(t.chain_code() == m.chain_code());
    }

    #[test]
    fn new_public_key() {
        let key = ExtendedKey::new_public_key(
            Network::Testnet,
            111,
            &[0, 1, 2, 3],
            44,
            &[5; 32],
            &[6; 33],
        )
        .unwrap();
        assert!(key.network().unwrap() == Network::Testnet);
        assert!(key.key_type().unwrap() == ExtendedKeyType::Public);
        assert!(key.depth() == 111);
        assert!(key.parent_fingerprint() == [0_u8, 1_u8, 2_u8, 3_u8]);
        assert!(key.index() == 44);
        assert!(key.chain_code() == [5_u8; 32]);
        assert!(key.public_key().unwrap()[..] == [6_u8; 33][..]);
        assert!(key.private_key().is_err());

        // Errors
        assert!(
            ExtendedKey::new_public_key(Network::Testnet, 111, &[0, 1, 2], 44, &[5; 32], &[6; 33])
                .is_err()
        );
        assert!(ExtendedKey::new_public_key(
            Network::Testnet,
            111,
            &[0, 1, 2, 3],
            44,
            &[5; 31],
            &[6; 33]
        )
        .is_err());
        assert!(ExtendedKey::new_public_key(
            Network::Testnet,
            111,
            &[0, 1, 2, 3],
            44,
            &[5; 32],
            &[6; 32]
        )
        .is_err());
    }

    #[test]
    fn new_private_key() {
        let key = ExtendedKey::new_private_key(
            Network::Mainnet,
            255,
            &[4, 5, 6, 7],
            0x80000064,
            &[7; 32],
            &[8; 32],
        )
        .unwrap();
        assert!(key.network().unwrap() == Network::Mainnet);
        assert!(key.key_type().unwrap() == ExtendedKeyType::Private);
        assert!(key.depth() == 255);
        assert!(key.parent_fingerprint() == [4_u8, 5_u8, 6_u8, 7_u8]);
        assert!(key.index() == 0x80000064);
        assert!(key.chain_code() == [7_u8; 32]);
        assert!(key.private_key().unwrap() == [8_u8; 32]);

        // Errors
        assert!(ExtendedKey::new_private_key(
            Network::Mainnet,
            255,
            &[4, 5, 6, 7],
            0,
            &[7],
            &[8; 32]
        )
        .is_err());
        assert!(ExtendedKey::new_private_key(
            Network::Mainnet,
            255,
            &[4, 5, 6, 7],
            0,
            &[7; 32],
            &[8; 33]
        )
        .is_err());
    }

    #[test]
    fn encode_decode() {
        let k = master_private_key("0123456789abcdef0123456789abcdef");
        assert!(k == ExtendedKey::decode(&k.encode()).unwrap());
        let k = k.extended_public_key().unwrap();
        assert!(k == ExtendedKey::decode(&k.encode()).unwrap());
    }

    #[test]
    fn invalid() {
        let k = ExtendedKey([5; EXTENDED_KEY_LEN]);
        assert!(k.network().is_err());
        assert!(k.key_type().is_err());

        // Unknown version
        match ExtendedKey::decode(&base58::encode_check(&k.0)) {
            Err(Error::DecodeError(_)) => {}
            _ => panic!("expected unknown version"),
        }

        // Wrong length
        let m = master_private_key("000102030405060708090a0b0c0d0e0f");
        match ExtendedKey::decode(&base58::encode_check(&m.0[..77])) {
            Err(Error::DecodeError(_)) => {}
            _ => panic!("expected bad length"),
        }

        // Missing zero prefix on the private key
        let mut bad = m;
        bad.0[45] = 1;
        match ExtendedKey::decode(&base58::encode_check(&bad.0)) {
            Err(Error::DecodeError(_)) => {}
            _ => panic!("expected bad prefix"),
        }

        // Private key out of range
        let mut bad = m;
        bad.0[46..].copy_from_slice(&[0xff; 32]);
        match ExtendedKey::decode(&base58::encode_check(&bad.0)) {
            Err(Error::DecodeError(_)) => {}
            _ => panic!("expected bad private key"),
        }

        // Public key not on the curve
        let mut bad = m.extended_public_key().unwrap();
        bad.0[45] = 0x05;
        match ExtendedKey::decode(&base58::encode_check(&bad.0)) {
            Err(Error::DecodeError(_)) => {}
            _ => panic!("expected bad public key"),
        }

        // Tampered checksum
        let mut s = m.encode();
        s.pop();
        s.push(if m.encode().ends_with('1') { '2' } else { '1' });
        assert!(ExtendedKey::decode(&s).is_err());
    }

    fn master_private_key(seed: &str) -> ExtendedKey {
        let seed = hex::decode(seed).unwrap();
        ExtendedKey::from_seed(&seed, Network::Mainnet).unwrap()
    }
}
