use std::fmt;

/// Whether key material was imported or freshly generated
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Source {
    Import,
    Generated,
}

impl Source {
    pub fn name(&self) -> &'static str {
        match self {
            Source::Import => "import",
            Source::Generated => "generated",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Key material for the master node of an HD wallet
///
/// `mnemonic`, `entropy` and `master_seed` are only set when the keys were
/// derived through a mnemonic.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyBundle {
    pub source: Source,
    /// Space separated mnemonic phrase
    pub mnemonic: Option<String>,
    /// Hex mnemonic entropy
    pub entropy: Option<String>,
    /// Base58 encoded 64-byte seed
    pub master_seed: Option<String>,
    /// Hex compressed public key
    pub public_key: String,
    /// Base58check extended public key
    pub extended_public_key: String,
    /// Hex private key
    pub private_key: String,
    /// Base58check extended private key
    pub extended_private_key: String,
}

impl KeyBundle {
    /// Present fields by their output names, in output order
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = Vec::with_capacity(8);
        if let Some(mnemonic) = &self.mnemonic {
            fields.push(("mnemonic", mnemonic.as_str()));
        }
        fields.push(("source", self.source.name()));
        if let Some(entropy) = &self.entropy {
            fields.push(("entropy", entropy.as_str()));
        }
        if let Some(master_seed) = &self.master_seed {
            fields.push(("masterSeed", master_seed.as_str()));
        }
        fields.push(("publicKey", self.public_key.as_str()));
        fields.push(("extendedPublicKey", self.extended_public_key.as_str()));
        fields.push(("privateKey", self.private_key.as_str()));
        fields.push(("extendedPrivateKey", self.extended_private_key.as_str()));
        fields
    }
}

impl fmt::Display for KeyBundle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, (name, value)) in self.fields().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}

impl fmt::Debug for KeyBundle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("KeyBundle")
            .field("source", &self.source)
            .field("extended_public_key", &self.extended_public_key)
            .finish()
    }
}
