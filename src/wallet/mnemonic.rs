//! Functions to convert data to and from mnemonic words

use crate::util::{sha256, Bits, Error, Result};

const ENGLISH: &str = include_str!("wordlists/english.txt");

/// Bits indexed by one mnemonic word
const WORD_BITS: usize = 11;

/// Loads the English BIP-39 word list
pub fn load_wordlist() -> Vec<&'static str> {
    ENGLISH.lines().map(str::trim).filter(|s| !s.is_empty()).collect()
}

/// Encodes data into a mnemonic using BIP-39
///
/// The data must be 16 to 32 bytes long and a multiple of 4 bytes.
pub fn mnemonic_encode(data: &[u8], word_list: &[&str]) -> Result<Vec<String>> {
    check_entropy_len(data.len())?;
    let cs_len = data.len() / 4;
    let hash = sha256(data);
    let mut bits = Bits::from_slice(data, data.len() * 8);
    bits.append(&Bits::from_slice(&hash.0, cs_len));
    let words = (0..bits.len() / WORD_BITS)
        .map(|i| word_list[bits.extract(i * WORD_BITS, WORD_BITS) as usize].to_string())
        .collect();
    Ok(words)
}

/// Decodes a mnemonic into data using BIP-39
///
/// Fails on unknown words, unsupported lengths and checksum mismatches.
pub fn mnemonic_decode(mnemonic: &[&str], word_list: &[&str]) -> Result<Vec<u8>> {
    if mnemonic.len() % 3 != 0 || mnemonic.len() < 12 || mnemonic.len() > 24 {
        let msg = format!("Invalid mnemonic length: {} words", mnemonic.len());
        return Err(Error::InvalidArgument(msg));
    }
    let mut bits = Bits::with_capacity(mnemonic.len() * WORD_BITS);
    for word in mnemonic {
        let value = match word_list.binary_search(word) {
            Ok(value) => value,
            Err(_) => return Err(Error::InvalidArgument(format!("Bad word: {}", word))),
        };
        bits.push(value as u64, WORD_BITS);
    }
    let data_len = bits.len() * 32 / 33;
    let cs_len = bits.len() / 33;
    let data = &bits.data()[..data_len / 8];
    let cs_bits = Bits::from_slice(&sha256(data).0, cs_len);
    if cs_bits.extract(0, cs_len) != bits.extract(data_len, cs_len) {
        return Err(Error::InvalidArgument("Invalid checksum".to_string()));
    }
    Ok(data.to_vec())
}

fn check_entropy_len(len: usize) -> Result<()> {
    if len < 16 || len > 32 || len % 4 != 0 {
        let msg = format!("Invalid entropy length: {} bytes", len);
        return Err(Error::InvalidArgument(msg));
    }
    Ok(())
}
