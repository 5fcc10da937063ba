// Algorithm labels

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Algorithm a batch is labelled with.
///
/// The label is presentational. Every variant draws from the same OS byte
/// source and applies the same digit extraction; no cipher keystream is
/// computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    ChaCha20,
    AesCtr,
    TripleDes,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown algorithm {0:?}, expected one of ChaCha20, AES-CTR, 3DES")]
pub struct UnknownAlgorithm(pub String);

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::ChaCha20, Algorithm::AesCtr, Algorithm::TripleDes];

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::ChaCha20 => "ChaCha20",
            Algorithm::AesCtr => "AES-CTR",
            Algorithm::TripleDes => "3DES",
        }
    }

    /// Number shown for this algorithm in the interactive menu
    pub fn menu_choice(self) -> i64 {
        match self {
            Algorithm::ChaCha20 => 1,
            Algorithm::AesCtr => 2,
            Algorithm::TripleDes => 3,
        }
    }

    pub fn from_menu_choice(choice: i64) -> Option<Self> {
        Algorithm::ALL.into_iter().find(|a| a.menu_choice() == choice)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chacha20" | "chacha" => Ok(Algorithm::ChaCha20),
            "aes-ctr" | "aes_ctr" | "aesctr" | "aes" => Ok(Algorithm::AesCtr),
            "3des" | "des3" | "tdes" | "triple-des" => Ok(Algorithm::TripleDes),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}
