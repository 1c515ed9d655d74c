use std::cmp::min;

/// Big-endian bit array used to regroup bytes into 11-bit mnemonic words
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Bits {
    data: Vec<u8>,
    len: usize,
}

impl Bits {
    /// Creates an empty bit array with room for `capacity` bits
    pub fn with_capacity(capacity: usize) -> Bits {
        Bits {
            data: Vec::with_capacity((capacity + 7) / 8),
            len: 0,
        }
    }

    /// Creates the bits from the first `len` bits of a slice
    pub fn from_slice(data: &[u8], len: usize) -> Bits {
        let len = min(data.len() * 8, len);
        let mut vec = data[..(len + 7) / 8].to_vec();
        let rem = len % 8;
        if rem != 0 {
            let last = vec.len() - 1;
            vec[last] &= !((1_u8 << (8 - rem)) - 1);
        }
        Bits { data: vec, len }
    }

    /// Number of bits held
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no bits
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Backing bytes, with any unused trailing bits zeroed
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Appends the low `len` bits of `value`, most significant first
    pub fn push(&mut self, value: u64, len: usize) {
        for i in (0..len).rev() {
            let offset = self.len % 8;
            if offset == 0 {
                self.data.push(0);
            }
            if (value >> i) & 1 == 1 {
                let last = self.data.len() - 1;
                self.data[last] |= 0x80 >> offset;
            }
            self.len += 1;
        }
    }

    /// Appends another bit array
    pub fn append(&mut self, other: &Bits) {
        for i in 0..other.len {
            self.push(other.bit(i) as u64, 1);
        }
    }

    /// Gets a range out of the bit array, right-aligned
    pub fn extract(&self, i: usize, len: usize) -> u64 {
        (i..i + len).fold(0, |acc, j| (acc << 1) | self.bit(j) as u64)
    }

    fn bit(&self, i: usize) -> u8 {
        (self.data[i / 8] >> (7 - i % 8)) & 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push() {
        let mut b = Bits::with_capacity(22);
        b.push(0x7ff, 11);
        b.push(0x001, 11);
        assert!(b.len() == 22);
        assert!(b.data() == &[0xff, 0xe0, 0x04][..]);
        assert!(b.extract(0, 11) == 0x7ff);
        assert!(b.extract(11, 11) == 1);
    }

    #[test]
    fn from_slice() {
        let b = Bits::from_slice(&[0xff, 0xff], 12);
        assert!(b.len() == 12);
        assert!(b.data() == &[0xff, 0xf0][..]);

        let b = Bits::from_slice(&[0xab], 100);
        assert!(b.len() == 8);
        assert!(Bits::from_slice(&[], 4).is_empty());
    }

    #[test]
    fn append() {
        let mut b = Bits::from_slice(&[255], 8);
        b.append(&Bits::from_slice(&[0], 4));
        b.append(&Bits::from_slice(&[255], 2));
        b.append(&Bits::from_slice(&[63], 4));
        assert!(b.len() == 18);
        assert!(b.data() == &[255, 12, 192][..]);
    }

    #[test]
    fn extract() {
        let b = Bits::from_slice(&[15, 23, 192], 24);
        assert!(b.extract(4, 13) == 7727);
        assert!(b.extract(0, 0) == 0);
    }
}
