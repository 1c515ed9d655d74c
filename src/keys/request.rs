use crate::network::Network;
use crate::util::Result;
use crate::wallet::StrengthLevel;

/// Where the key material of a request comes from
///
/// Variants are listed in precedence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    /// Serialized extended private key
    ExtendedKey(String),
    /// Base58-encoded master seed
    MasterSeed(String),
    /// Hex-encoded mnemonic entropy
    Entropy(String),
    /// Mnemonic phrase
    Mnemonic(String),
    /// Fresh mnemonic of the given strength
    Generate(StrengthLevel),
}

impl KeySource {
    /// Picks a source from optional raw fields
    ///
    /// Precedence is extended key, master seed, entropy, mnemonic, then generation.
    /// Empty strings count as absent. The strength is only parsed when a fresh
    /// mnemonic is needed, defaulting to basic.
    pub fn from_fields(
        extended_key: Option<&str>,
        master_seed: Option<&str>,
        entropy: Option<&str>,
        mnemonic: Option<&str>,
        strength_level: Option<&str>,
    ) -> Result<KeySource> {
        let present = |s: Option<&str>| s.filter(|s| !s.is_empty()).map(str::to_string);
        if let Some(s) = present(extended_key) {
            return Ok(KeySource::ExtendedKey(s));
        }
        if let Some(s) = present(master_seed) {
            return Ok(KeySource::MasterSeed(s));
        }
        if let Some(s) = present(entropy) {
            return Ok(KeySource::Entropy(s));
        }
        if let Some(s) = present(mnemonic) {
            return Ok(KeySource::Mnemonic(s));
        }
        let level = match strength_level {
            Some(name) => name.parse::<StrengthLevel>()?,
            None => StrengthLevel::default(),
        };
        Ok(KeySource::Generate(level))
    }

    /// Whether the key material was supplied by the caller
    pub fn is_import(&self) -> bool {
        match self {
            KeySource::Generate(_) => false,
            _ => true,
        }
    }

    /// Short label for logs, never the secret itself
    pub fn kind(&self) -> &'static str {
        match self {
            KeySource::ExtendedKey(_) => "extended key",
            KeySource::MasterSeed(_) => "master seed",
            KeySource::Entropy(_) => "entropy",
            KeySource::Mnemonic(_) => "mnemonic",
            KeySource::Generate(_) => "generated mnemonic",
        }
    }
}

impl Default for KeySource {
    fn default() -> KeySource {
        KeySource::Generate(StrengthLevel::default())
    }
}

/// Everything needed to construct a key bundle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyRequest {
    pub source: KeySource,
    /// BIP-39 passphrase, only used when deriving a seed from a mnemonic
    pub passphrase: String,
    /// Network of newly derived extended keys
    pub network: Network,
}

impl KeyRequest {
    /// Creates a request with an empty passphrase on mainnet
    pub fn new(source: KeySource) -> KeyRequest {
        KeyRequest {
            source,
            ..KeyRequest::default()
        }
    }

    /// Sets the BIP-39 passphrase
    pub fn with_passphrase(mut self, passphrase: &str) -> KeyRequest {
        self.passphrase = passphrase.to_string();
        self
    }

    /// Sets the network
    pub fn with_network(mut self, network: Network) -> KeyRequest {
        self.network = network;
        self
    }
}
