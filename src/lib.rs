//! Random decimal digits from the operating system CSPRNG.
//!
//! Each draw fills a fresh 100-byte buffer from a [`SecureRandom`] source and
//! maps a prefix of it to digits with `byte % 10`. A batch is ten draws.
//!
//! ```no_run
//! let batch = secure_digits::generate_batch("ChaCha20", 5)?;
//! assert_eq!(batch.len(), 10);
//! # Ok::<(), secure_digits::DigitError>(())
//! ```
//!
//! [`SecureRandom`]: crypto::random::SecureRandom

pub mod core;
pub mod crypto;
pub mod menu;

pub use crate::core::{
    extract, generate_batch, generate_batch_with, generate_report, Algorithm, BatchReport,
    DigitCount, DigitError, DigitString, BATCH_SIZE, MAX_DIGITS,
};
pub use crate::crypto::random::{OsSecureRandom, RngFailure, SecureRandom};
