// Byte-to-digit extraction

use std::fmt;

use crate::core::DigitError;

/// Largest number of digits a single draw can produce, and the size of
/// every random byte buffer.
pub const MAX_DIGITS: usize = 100;

/// A validated number of digits in `1..=MAX_DIGITS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitCount(usize);

impl DigitCount {
    /// Validate a requested digit count. Out-of-range values are rejected,
    /// never clamped.
    pub fn new(value: i64) -> Result<Self, DigitError> {
        if value < 1 || value > MAX_DIGITS as i64 {
            return Err(DigitError::InvalidDigitCount(value));
        }
        Ok(DigitCount(value as usize))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for DigitCount {
    type Error = DigitError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        DigitCount::new(value)
    }
}

impl fmt::Display for DigitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A string of ASCII decimal digits produced by one draw
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitString(String);

impl DigitString {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric value of each digit, in order
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Map the first `count` bytes of `buffer` to decimal digits (`byte % 10`).
///
/// The reduction is biased: 256 is not a multiple of 10, so digits 0-5 each
/// occur with probability 26/256 and digits 6-9 with 25/256. This is the
/// observable behavior and is kept as is.
///
/// # Panics
///
/// Panics if `count > buffer.len()`.
pub fn extract(buffer: &[u8], count: usize) -> DigitString {
    assert!(
        count <= buffer.len(),
        "cannot extract {} digits from {} bytes",
        count,
        buffer.len()
    );

    let digits = buffer[..count]
        .iter()
        .map(|&b| char::from(b'0' + b % 10))
        .collect();
    DigitString(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_known_vector() {
        assert_eq!(extract(&[7, 13, 255, 100], 4).as_str(), "7350");
    }

    #[test]
    fn test_extract_uses_prefix_only() {
        let buf = [1u8, 2, 3, 4, 5];
        assert_eq!(extract(&buf, 2).as_str(), "12");
        assert_eq!(extract(&buf, 0).as_str(), "");
    }

    #[test]
    #[should_panic(expected = "cannot extract")]
    fn test_extract_rejects_short_buffer() {
        extract(&[1, 2], 3);
    }

    #[test]
    fn test_digit_count_bounds() {
        assert_eq!(DigitCount::new(1).unwrap().get(), 1);
        assert_eq!(DigitCount::new(100).unwrap().get(), 100);
        for bad in [0, -5, 101, i64::MIN, i64::MAX] {
            assert!(matches!(
                DigitCount::new(bad),
                Err(DigitError::InvalidDigitCount(v)) if v == bad
            ));
        }
    }

    #[test]
    fn test_digit_values() {
        let s = extract(&[9, 10, 19], 3);
        assert_eq!(s.digits().collect::<Vec<_>>(), vec![9, 0, 9]);
    }
}
