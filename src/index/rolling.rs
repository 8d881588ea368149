use crate::core::error::AlignError;
use crate::core::sequence::encode;

/// Polynomial base of the rolling hash (alphabet size plus one)
pub const HASH_BASE: u64 = 5;

/// Modulus bounding every hash value.
///
/// `HASH_MODULUS * HASH_BASE + 4` stays well below `u64::MAX`, so the update
/// never overflows. Changing it changes which substrings collide, and with
/// that which locations the index keeps.
pub const HASH_MODULUS: u64 = 10_000_000_000_007;

/// Incremental hash of a growing DNA substring.
///
/// Each [`push`](Self::push) extends the substring by one base on the right
/// in O(1): `hash = (hash * 5 + encode(base)) mod M`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RollingHash {
    value: u64,
}

impl RollingHash {
    #[must_use]
    pub fn new() -> Self {
        Self { value: 0 }
    }

    /// Append a base and return the updated hash.
    ///
    /// # Errors
    ///
    /// Returns `AlignError::InvalidSymbol` if `base` is not `A`, `T`, `C` or `G`.
    /// The hash is left unchanged in that case.
    #[inline]
    pub fn push(&mut self, base: u8) -> Result<u64, AlignError> {
        let digit = encode(base)?;
        self.value = (self.value * HASH_BASE + digit) % HASH_MODULUS;
        Ok(self.value)
    }

    /// Start over with an empty substring
    #[inline]
    pub fn reset(&mut self) {
        self.value = 0;
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }
}

/// Hash a whole sequence in one go.
///
/// # Errors
///
/// Returns `AlignError::InvalidSymbol` on the first base outside the alphabet.
pub fn hash_sequence(sequence: &[u8]) -> Result<u64, AlignError> {
    let mut hasher = RollingHash::new();
    for &base in sequence {
        hasher.push(base)?;
    }
    Ok(hasher.value())
}
