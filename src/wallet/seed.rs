use ring::pbkdf2;
use std::num::NonZeroU32;
use unicode_normalization::UnicodeNormalization;

/// Length of a BIP-39 seed in bytes
pub const SEED_LEN: usize = 64;

const PBKDF2_ROUNDS: NonZeroU32 = match NonZeroU32::new(2048) {
    Some(rounds) => rounds,
    None => unreachable!(),
};

/// Stretches a mnemonic and optional passphrase into a 64-byte seed using BIP-39
///
/// Both the phrase and the salt are NFKD normalized first.
pub fn mnemonic_to_seed(mnemonic: &str, passphrase: &str) -> [u8; SEED_LEN] {
    let mnemonic = mnemonic.nfkd().collect::<String>();
    let salt = format!("mnemonic{}", passphrase).nfkd().collect::<String>();
    let mut seed = [0; SEED_LEN];
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA512,
        PBKDF2_ROUNDS,
        salt.as_bytes(),
        mnemonic.as_bytes(),
        &mut seed,
    );
    seed
}
