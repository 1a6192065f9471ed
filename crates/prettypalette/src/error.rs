//! Utility module with prettypalette's errors.

/// An out-of-bounds error.
///
/// This error indicates an index value that is out of bounds for some range.
/// The ranges used by this crate include:
///
///   * `0..=5` for coordinates of [`EmbeddedRgb`](crate::termco::EmbeddedRgb);
///   * `0..=15` for index values of [`AnsiColor`](crate::termco::AnsiColor);
///   * `0..=23` for the gray levels of [`GrayGradient`](crate::termco::GrayGradient);
///   * `16..=231` for index values of [`EmbeddedRgb`](crate::termco::EmbeddedRgb),
///     which also are the valid reference colors for distance sorting and
///     harmonies;
///   * `232..=255` for index values of [`GrayGradient`](crate::termco::GrayGradient).
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: core::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new<V: Into<usize>>(value: V, expected: core::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl core::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

#[cfg(test)]
mod test {
    use super::OutOfBoundsError;

    #[test]
    fn test_display() {
        let error = OutOfBoundsError::new(232_u8, 16..=231);
        assert_eq!(error.to_string(), "232 does not fit into range 16..=231");
        assert_eq!(error.value, 232);
    }
}
