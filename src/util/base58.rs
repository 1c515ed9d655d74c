//! Base58 and base58check codecs

use crate::util::{sha256d, Error, Result};

/// Length of the base58check checksum suffix
pub const CHECKSUM_LEN: usize = 4;

/// Encodes bytes as base58 without a checksum
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Decodes a base58 string without a checksum
pub fn decode(input: &str) -> Result<Vec<u8>> {
    Ok(bs58::decode(input).into_vec()?)
}

/// Appends the first four bytes of the payload's double SHA256 and encodes as base58
pub fn encode_check(payload: &[u8]) -> String {
    let checksum = sha256d(payload);
    let mut v = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    v.extend_from_slice(payload);
    v.extend_from_slice(&checksum.0[..CHECKSUM_LEN]);
    encode(&v)
}

/// Decodes a base58check string and verifies its checksum, returning the payload
pub fn decode_check(input: &str) -> Result<Vec<u8>> {
    let mut v = decode(input)?;
    if v.len() < CHECKSUM_LEN {
        let msg = format!("Base58check data too short: {} bytes", v.len());
        return Err(Error::DecodeError(msg));
    }
    let payload_len = v.len() - CHECKSUM_LEN;
    let checksum = sha256d(&v[..payload_len]);
    if checksum.0[..CHECKSUM_LEN] != v[payload_len..] {
        return Err(Error::DecodeError("Invalid checksum".to_string()));
    }
    v.truncate(payload_len);
    Ok(v)
}
