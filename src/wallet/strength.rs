use crate::util::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Named mnemonic strength tier
///
/// ```text
/// |  MS  |  ENT  | CS | ENT+CS |
/// +------+-------+----+--------+
/// |  12  |  128  |  4 |   132  |
/// |  15  |  160  |  5 |   165  |
/// |  18  |  192  |  6 |   198  |
/// |  21  |  224  |  7 |   231  |
/// |  24  |  256  |  8 |   264  |
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum StrengthLevel {
    Basic,
    Enhanced,
    Advanced,
    Robust,
    Fortified,
}

/// Every strength level, weakest first
pub const STRENGTH_LEVELS: [StrengthLevel; 5] = [
    StrengthLevel::Basic,
    StrengthLevel::Enhanced,
    StrengthLevel::Advanced,
    StrengthLevel::Robust,
    StrengthLevel::Fortified,
];

impl StrengthLevel {
    /// Name used to select the level
    pub fn name(&self) -> &'static str {
        match self {
            StrengthLevel::Basic => "basic",
            StrengthLevel::Enhanced => "enhanced",
            StrengthLevel::Advanced => "advanced",
            StrengthLevel::Robust => "robust",
            StrengthLevel::Fortified => "fortified",
        }
    }

    /// Number of words in a mnemonic of this strength
    pub fn words(&self) -> usize {
        (self.entropy_bits() + self.checksum_bits()) / 11
    }

    /// Bits of entropy encoded by the mnemonic
    pub fn entropy_bits(&self) -> usize {
        match self {
            StrengthLevel::Basic => 128,
            StrengthLevel::Enhanced => 160,
            StrengthLevel::Advanced => 192,
            StrengthLevel::Robust => 224,
            StrengthLevel::Fortified => 256,
        }
    }

    /// Bits of SHA256 checksum appended to the entropy
    pub fn checksum_bits(&self) -> usize {
        self.entropy_bits() / 32
    }

    /// Finds the level whose mnemonic has `words` words
    pub fn from_word_count(words: usize) -> Option<StrengthLevel> {
        STRENGTH_LEVELS.iter().cloned().find(|l| l.words() == words)
    }
}

impl Default for StrengthLevel {
    fn default() -> StrengthLevel {
        StrengthLevel::Basic
    }
}

impl FromStr for StrengthLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<StrengthLevel> {
        match STRENGTH_LEVELS.iter().find(|l| l.name() == s) {
            Some(level) => Ok(*level),
            None => {
                let msg = format!("Not a known strength level: {}", s);
                Err(Error::InvalidArgument(msg))
            }
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table() {
        let expected = [
            ("basic", 12, 128, 4),
            ("enhanced", 15, 160, 5),
            ("advanced", 18, 192, 6),
            ("robust", 21, 224, 7),
            ("fortified", 24, 256, 8),
        ];
        for (level, (name, words, ent, cs)) in STRENGTH_LEVELS.iter().zip(expected.iter()) {
            assert!(level.name() == *name);
            assert!(level.words() == *words);
            assert!(level.entropy_bits() == *ent);
            assert!(level.checksum_bits() == *cs);
            assert!((ent + cs) % 11 == 0);
        }
    }

    #[test]
    fn from_word_count() {
        assert!(StrengthLevel::from_word_count(12) == Some(StrengthLevel::Basic));
        assert!(StrengthLevel::from_word_count(24) == Some(StrengthLevel::Fortified));
        assert!(StrengthLevel::from_word_count(13).is_none());
        assert!(StrengthLevel::from_word_count(0).is_none());
    }

    #[test]
    fn parse() {
        for level in STRENGTH_LEVELS.iter() {
            assert!(level.name().parse::<StrengthLevel>().unwrap() == *level);
        }
        match "ultra".parse::<StrengthLevel>() {
            Err(Error::InvalidArgument(_)) => {}
            _ => panic!("expected invalid argument"),
        }
        assert!(StrengthLevel::default() == StrengthLevel::Basic);
    }
}
