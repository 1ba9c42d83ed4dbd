use std::{
    fmt::{self, Write as _},
    str::FromStr,
};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed of a training run.
///
/// A 128-bit seed for the [`Pcg32`] generator that drives everything random in a run:
/// initial graphs, mutations and the baseline's moves. Reusing the seed of a finished
/// run with the same parameters replays it exactly.
///
/// The seed is written as 32 hex characters, both on the command line and in run
/// summaries.
///
/// # Example
///
/// ```
/// use genetac_training::RunSeed;
/// use rand::Rng as _;
///
/// let seed: RunSeed = rand::rng().random();
/// let parsed: RunSeed = seed.to_string().parse()?;
/// assert_eq!(seed, parsed);
/// # Ok::<(), genetac_training::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunSeed([u8; 16]);

/// Error returned when parsing a [`RunSeed`] from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    #[display("invalid hex: expected 32 characters, got {actual}")]
    WrongLength { actual: usize },
    #[display("invalid hex: {text}")]
    InvalidDigit {
        #[error(not(source))]
        text: String,
    },
}

impl RunSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates the generator for a run.
    #[must_use]
    pub fn rng(&self) -> Pcg32 {
        Pcg32::from_seed(self.0)
    }
}

impl fmt::Display for RunSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num = u128::from_be_bytes(self.0);
        write!(f, "{num:032x}")
    }
}

impl FromStr for RunSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(SeedParseError::WrongLength { actual: s.len() });
        }
        // `from_str_radix` alone would also take a leading `+`.
        let invalid = || SeedParseError::InvalidDigit { text: s.to_owned() };
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| invalid())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for RunSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut hex_str = String::with_capacity(2 * self.0.len());
        write!(&mut hex_str, "{self}").map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&hex_str)
    }
}

impl<'de> Deserialize<'de> for RunSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows drawing a fresh seed with `rng.random()`.
impl Distribution<RunSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> RunSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        RunSeed(seed)
    }
}

#[cfg(test)]
mod tests {
    use rand::RngCore as _;

    use super::*;

    mod parsing {
        use super::*;

        #[test]
        fn test_display_is_big_endian_hex() {
            let seed = RunSeed::from_bytes([
                0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
                0x32, 0x10,
            ]);
            assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
            assert_eq!(RunSeed::from_bytes([0; 16]).to_string(), "0".repeat(32));
        }

        #[test]
        fn test_parse_accepts_uppercase() {
            let seed: RunSeed = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF".parse().unwrap();
            assert_eq!(seed.as_bytes(), &[0xFF; 16]);
        }

        #[test]
        fn test_parse_rejects_wrong_length() {
            assert_eq!(
                "abc".parse::<RunSeed>(),
                Err(SeedParseError::WrongLength { actual: 3 })
            );
            assert_eq!(
                "".parse::<RunSeed>(),
                Err(SeedParseError::WrongLength { actual: 0 })
            );
        }

        #[test]
        fn test_parse_rejects_sign() {
            let text = format!("+{}", "f".repeat(31));
            assert_eq!(
                text.parse::<RunSeed>(),
                Err(SeedParseError::InvalidDigit { text: text.clone() })
            );
        }

        #[test]
        fn test_parse_rejects_non_hex() {
            let err = "ghijklmnopqrstuvwxyzghijklmnopqr"
                .parse::<RunSeed>()
                .unwrap_err();
            assert!(err.to_string().contains("invalid hex"));
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn test_json_is_quoted_hex() {
            let seed = RunSeed::from_bytes([0xAB; 16]);
            let json = serde_json::to_string(&seed).unwrap();
            assert_eq!(json, format!("\"{}\"", "ab".repeat(16)));
            let back: RunSeed = serde_json::from_str(&json).unwrap();
            assert_eq!(back, seed);
        }

        #[test]
        fn test_json_rejects_short_hex() {
            let result = serde_json::from_str::<RunSeed>("\"0123\"");
            assert!(result.unwrap_err().to_string().contains("invalid hex"));
        }
    }

    #[test]
    fn test_same_seed_same_stream() {
        let seed: RunSeed = rand::rng().random();
        let mut a = seed.rng();
        let mut b = seed.rng();
        for _ in 0..20 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }
}
