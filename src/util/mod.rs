//! Miscellaneous helpers

pub mod base58;
mod bits;
mod hash256;
mod result;

pub(crate) use self::bits::Bits;
pub use self::hash256::{sha256, sha256d, Hash256};
pub use self::result::{Error, Result};
