// Digit generation core

pub mod algorithm;
pub mod batch;
pub mod digits;
pub mod stats;

use thiserror::Error;

use crate::crypto::random::RngFailure;

pub use algorithm::Algorithm;
pub use batch::{generate_batch, generate_batch_with, generate_report, BatchReport, BATCH_SIZE};
pub use digits::{extract, DigitCount, DigitString, MAX_DIGITS};

/// Errors that can occur while generating digits
#[derive(Error, Debug)]
pub enum DigitError {
    #[error("invalid digit count {0}: must be between 1 and 100")]
    InvalidDigitCount(i64),

    #[error("draw {draw} failed")]
    RngFailure {
        draw: usize,
        #[source]
        source: RngFailure,
    },
}
