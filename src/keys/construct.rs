use crate::keys::{KeyBundle, KeyRequest, KeySource, Source};
use crate::util::{base58, Error, Result};
use crate::wallet::{
    load_wordlist, mnemonic_decode, mnemonic_encode, mnemonic_to_seed, ExtendedKey, StrengthLevel,
};
use hex;
use rand::rngs::OsRng;
use rand::RngCore;

/// Constructs the master key bundle for a request
pub fn construct_keys(request: &KeyRequest) -> Result<KeyBundle> {
    let source = if request.source.is_import() {
        Source::Import
    } else {
        Source::Generated
    };
    debug!("Constructing keys from {}", request.source.kind());

    let mnemonic = match &request.source {
        KeySource::ExtendedKey(s) => {
            let master = ExtendedKey::decode(s)?;
            return master_bundle(source, &master);
        }
        KeySource::MasterSeed(s) => {
            let seed = base58::decode(s)?;
            let master = ExtendedKey::from_seed(&seed, request.network)?;
            return master_bundle(source, &master);
        }
        KeySource::Entropy(s) => mnemonic_from_entropy(s)?,
        KeySource::Mnemonic(s) => normalize_mnemonic(s),
        KeySource::Generate(level) => generate_mnemonic(*level)?,
    };

    let entropy = mnemonic_to_entropy(&mnemonic)?;
    let seed = mnemonic_to_seed(&mnemonic, &request.passphrase);
    let master = ExtendedKey::from_seed(&seed, request.network)?;
    let mut bundle = master_bundle(source, &master)?;
    bundle.mnemonic = Some(mnemonic);
    bundle.entropy = Some(hex::encode(entropy));
    bundle.master_seed = Some(base58::encode(&seed));
    Ok(bundle)
}

/// Returns a canonical mnemonic, generating one of `strength_level` when none is given
///
/// A supplied phrase is only normalized. Its checksum is checked later, when it is
/// decoded back to entropy.
pub fn resolve_mnemonic(mnemonic: Option<&str>, strength_level: &str) -> Result<String> {
    match mnemonic {
        Some(m) if !m.is_empty() => Ok(normalize_mnemonic(m)),
        _ => generate_mnemonic(strength_level.parse()?),
    }
}

/// Joins the words of a phrase with single spaces, warning on unusual lengths
pub fn normalize_mnemonic(mnemonic: &str) -> String {
    let words: Vec<&str> = mnemonic.split_whitespace().collect();
    if StrengthLevel::from_word_count(words.len()).is_none() {
        warn!("Mnemonic size is abnormal: {} words", words.len());
    }
    words.join(" ")
}

/// Generates a mnemonic from fresh OS entropy
pub fn generate_mnemonic(level: StrengthLevel) -> Result<String> {
    let mut entropy = vec![0; level.entropy_bits() / 8];
    OsRng.fill_bytes(&mut entropy);
    let words = mnemonic_encode(&entropy, &load_wordlist())?;
    Ok(words.join(" "))
}

/// Encodes hex entropy as a mnemonic
pub fn mnemonic_from_entropy(entropy: &str) -> Result<String> {
    let data = match hex::decode(entropy) {
        Ok(data) => data,
        Err(e) => return Err(Error::InvalidArgument(format!("Bad entropy: {}", e))),
    };
    let words = mnemonic_encode(&data, &load_wordlist())?;
    Ok(words.join(" "))
}

/// Decodes a normalized mnemonic back to its entropy, verifying the checksum
pub fn mnemonic_to_entropy(mnemonic: &str) -> Result<Vec<u8>> {
    let words: Vec<&str> = mnemonic.split(' ').collect();
    mnemonic_decode(&words, &load_wordlist())
}

fn master_bundle(source: Source, master: &ExtendedKey) -> Result<KeyBundle> {
    let private_key = master.private_key()?;
    let public_key = master.public_key()?;
    Ok(KeyBundle {
        source,
        mnemonic: None,
        entropy: None,
        master_seed: None,
        public_key: hex::encode(&public_key[..]),
        extended_public_key: master.extended_public_key()?.encode(),
        private_key: hex::encode(private_key),
        extended_private_key: master.encode(),
    })
}
