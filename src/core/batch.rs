// Batch draw loop

use tracing::{debug, info, info_span, warn};
use zeroize::Zeroize;

use crate::core::digits::{extract, DigitCount, DigitString, MAX_DIGITS};
use crate::core::DigitError;
use crate::crypto::random::{OsSecureRandom, RngFailure, SecureRandom};

/// Number of draws in one batch
pub const BATCH_SIZE: usize = 10;

/// Per-draw scratch buffer. Always filled in full, then truncated.
type RandomByteBuffer = [u8; MAX_DIGITS];

/// Generate one batch of digit strings from the OS random source.
///
/// `algorithm` only labels the batch in logs.
pub fn generate_batch(algorithm: &str, num_digits: i64) -> Result<Vec<DigitString>, DigitError> {
    generate_batch_with(&mut OsSecureRandom::new(), algorithm, num_digits)
}

/// Generate one batch from `source`, stopping at the first failed draw.
pub fn generate_batch_with<S: SecureRandom + ?Sized>(
    source: &mut S,
    algorithm: &str,
    num_digits: i64,
) -> Result<Vec<DigitString>, DigitError> {
    let count = validate(algorithm, num_digits)?;
    let _span = info_span!("batch", algorithm, digits = count.get()).entered();

    let mut out = Vec::with_capacity(BATCH_SIZE);
    for i in 0..BATCH_SIZE {
        let digits = draw(source, count).map_err(|source| {
            warn!(draw = i, error = %source, "byte source failed, aborting batch");
            DigitError::RngFailure { draw: i, source }
        })?;
        debug!(draw = i, "draw complete");
        out.push(digits);
    }

    info!(draws = out.len(), "batch complete");
    Ok(out)
}

/// Outcome of every draw in a batch
#[derive(Debug, Clone)]
pub struct BatchReport {
    algorithm: String,
    count: DigitCount,
    draws: Vec<Result<DigitString, RngFailure>>,
}

impl BatchReport {
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn count(&self) -> DigitCount {
        self.count
    }

    pub fn draws(&self) -> &[Result<DigitString, RngFailure>] {
        &self.draws
    }

    pub fn succeeded(&self) -> usize {
        self.draws.iter().filter(|d| d.is_ok()).count()
    }

    /// Indices of the draws whose byte source failed
    pub fn failed(&self) -> Vec<usize> {
        self.draws
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.is_err().then_some(i))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.draws.iter().all(|d| d.is_ok())
    }

    /// Digit strings of the successful draws, in draw order
    pub fn digits(&self) -> impl Iterator<Item = &DigitString> {
        self.draws.iter().filter_map(|d| d.as_ref().ok())
    }
}

/// Run all draws of a batch, recording each one's outcome.
///
/// A failing draw does not stop the others. An invalid digit count is still
/// rejected before any draw is made.
pub fn generate_report<S: SecureRandom + ?Sized>(
    source: &mut S,
    algorithm: &str,
    num_digits: i64,
) -> Result<BatchReport, DigitError> {
    let count = validate(algorithm, num_digits)?;
    let _span = info_span!("batch", algorithm, digits = count.get()).entered();

    let draws: Vec<_> = (0..BATCH_SIZE)
        .map(|i| {
            let outcome = draw(source, count);
            match &outcome {
                Ok(_) => debug!(draw = i, "draw complete"),
                Err(e) => warn!(draw = i, error = %e, "byte source failed"),
            }
            outcome
        })
        .collect();

    let report = BatchReport {
        algorithm: algorithm.to_string(),
        count,
        draws,
    };
    info!(
        succeeded = report.succeeded(),
        failed = BATCH_SIZE - report.succeeded(),
        "batch complete"
    );
    Ok(report)
}

fn validate(algorithm: &str, num_digits: i64) -> Result<DigitCount, DigitError> {
    DigitCount::new(num_digits).map_err(|e| {
        warn!(algorithm, num_digits, "rejected digit count");
        e
    })
}

fn draw<S: SecureRandom + ?Sized>(
    source: &mut S,
    count: DigitCount,
) -> Result<DigitString, RngFailure> {
    let mut buffer: RandomByteBuffer = [0u8; MAX_DIGITS];
    let result = source.fill(&mut buffer).map(|()| extract(&buffer, count.get()));
    buffer.zeroize();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::random::FixedBytes;

    /// Fails on the listed call numbers, otherwise yields a constant byte.
    struct FlakySource {
        calls: usize,
        fail_on: Vec<usize>,
    }

    impl SecureRandom for FlakySource {
        fn fill(&mut self, buf: &mut [u8]) -> Result<(), RngFailure> {
            let call = self.calls;
            self.calls += 1;
            if self.fail_on.contains(&call) {
                return Err(RngFailure(format!("call {call} failed")));
            }
            buf.fill(42);
            Ok(())
        }
    }

    #[test]
    fn test_batch_shape() {
        let mut src = FixedBytes::new(&[7, 13, 255, 100]);
        let batch = generate_batch_with(&mut src, "ChaCha20", 4).unwrap();
        assert_eq!(batch.len(), BATCH_SIZE);
        assert!(batch.iter().all(|d| d.as_str() == "7350"));
    }

    #[test]
    fn test_batch_rejects_count_before_drawing() {
        let mut src = FlakySource { calls: 0, fail_on: vec![] };
        let err = generate_batch_with(&mut src, "3DES", 0).unwrap_err();
        assert!(matches!(err, DigitError::InvalidDigitCount(0)));
        assert_eq!(src.calls, 0);
    }

    #[test]
    fn test_batch_aborts_on_failed_draw() {
        let mut src = FlakySource { calls: 0, fail_on: vec![3] };
        let err = generate_batch_with(&mut src, "AES-CTR", 5).unwrap_err();
        assert!(matches!(err, DigitError::RngFailure { draw: 3, .. }));
        assert_eq!(src.calls, 4);
    }

    #[test]
    fn test_report_isolates_failures() {
        let mut src = FlakySource { calls: 0, fail_on: vec![0, 7] };
        let report = generate_report(&mut src, "ChaCha20", 3).unwrap();
        assert_eq!(src.calls, BATCH_SIZE);
        assert_eq!(report.succeeded(), 8);
        assert_eq!(report.failed(), vec![0, 7]);
        assert!(!report.is_complete());
        assert!(report.digits().all(|d| d.as_str() == "222"));
        assert_eq!(report.algorithm(), "ChaCha20");
        assert_eq!(report.count().get(), 3);
    }

    #[test]
    fn test_os_batch() {
        let batch = generate_batch("ChaCha20", 5).unwrap();
        assert_eq!(batch.len(), 10);
        for d in &batch {
            assert_eq!(d.len(), 5);
            assert!(d.as_str().bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
