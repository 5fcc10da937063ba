// Digit frequency statistics

use crate::core::digits::DigitString;

/// Probability of `digit` under `byte % 10` with uniform bytes.
///
/// 0-5 have 26 preimages among the 256 byte values, 6-9 have 25.
pub fn expected_probability(digit: u8) -> f64 {
    assert!(digit < 10, "not a decimal digit: {}", digit);
    let preimages = if digit <= 5 { 26.0 } else { 25.0 };
    preimages / 256.0
}

/// Per-digit counts over any number of digit strings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitTally {
    counts: [u64; 10],
}

impl DigitTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, digits: &DigitString) {
        for d in digits.digits() {
            self.counts[d as usize] += 1;
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// # Panics
    ///
    /// Panics if `digit` is not a decimal digit.
    pub fn count(&self, digit: u8) -> u64 {
        assert!(digit < 10, "not a decimal digit: {}", digit);
        self.counts[digit as usize]
    }

    /// Observed share of `digit`, or 0 when nothing has been tallied
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not a decimal digit.
    pub fn frequency(&self, digit: u8) -> f64 {
        assert!(digit < 10, "not a decimal digit: {}", digit);
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(digit) as f64 / total as f64
    }

    /// Largest absolute gap between observed and expected frequency
    pub fn max_deviation(&self) -> f64 {
        (0..10u8)
            .map(|d| (self.frequency(d) - expected_probability(d)).abs())
            .fold(0.0, f64::max)
    }
}

impl<'a> Extend<&'a DigitString> for DigitTally {
    fn extend<I: IntoIterator<Item = &'a DigitString>>(&mut self, iter: I) {
        for digits in iter {
            self.add(digits);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::digits::extract;

    #[test]
    fn test_expected_probabilities_sum_to_one() {
        let sum: f64 = (0..10).map(expected_probability).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert_eq!(expected_probability(5), 26.0 / 256.0);
        assert_eq!(expected_probability(6), 25.0 / 256.0);
    }

    #[test]
    fn test_tally_every_byte_once_matches_expectation() {
        let bytes: Vec<u8> = (0..=255).collect();
        let mut tally = DigitTally::new();
        tally.add(&extract(&bytes, bytes.len()));

        assert_eq!(tally.total(), 256);
        assert_eq!(tally.count(0), 26);
        assert_eq!(tally.count(9), 25);
        assert!(tally.max_deviation() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "not a decimal digit: 10")]
    fn test_count_rejects_non_digit() {
        DigitTally::new().count(10);
    }

    #[test]
    #[should_panic(expected = "not a decimal digit: 12")]
    fn test_frequency_rejects_non_digit() {
        DigitTally::new().frequency(12);
    }

    #[test]
    fn test_empty_tally() {
        let tally = DigitTally::new();
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.frequency(3), 0.0);
    }
}
