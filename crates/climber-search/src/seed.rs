use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for a reproducible search.
///
/// A 128-bit (16-byte) seed for the [`Pcg32`] generator that drives both the initial
/// candidate and every mutation. The same seed, alphabet and deterministic fitness
/// function reproduce the same sequence of accepted candidates.
///
/// Seeds are written as 32-character hex strings, both by [`fmt::Display`] and by serde.
///
/// # Example
///
/// ```
/// use climber_search::SearchSeed;
/// use rand::Rng as _;
///
/// let seed: SearchSeed = rand::rng().random();
/// let parsed: SearchSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchSeed([u8; 16]);

impl SearchSeed {
    #[must_use]
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Builds a seed from a small integer, handy for tests and examples.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        Self(u128::from(value).to_be_bytes())
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates the generator for this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg32 {
        Pcg32::from_seed(self.0)
    }
}

impl fmt::Display for SearchSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    #[display("invalid seed: expected 32 hex characters, got {len}")]
    InvalidLength { len: usize },
    #[display("invalid seed: {text:?} is not a hex string")]
    InvalidDigit { text: String },
}

impl FromStr for SearchSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(SeedParseError::InvalidLength { len: s.len() });
        }
        // from_str_radix would also accept a leading sign
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(SeedParseError::InvalidDigit { text: s.to_owned() });
        }
        let num = u128::from_str_radix(s, 16)
            .map_err(|_| SeedParseError::InvalidDigit { text: s.to_owned() })?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for SearchSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SearchSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows drawing fresh seeds with `rng.random()`.
impl Distribution<SearchSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SearchSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        SearchSeed(seed)
    }
}
