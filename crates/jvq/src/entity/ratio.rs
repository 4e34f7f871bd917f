use std::fmt;

use serde::Serialize;

/// Exact fraction used for drop, encounter and action probabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ratio {
    pub numerator: u32,
    pub denominator: u32,
}

impl Ratio {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Fraction of 256, the scale of every single-byte threshold
    pub fn of_256(numerator: impl Into<u32>) -> Self {
        Self::new(numerator.into(), 0x100)
    }

    pub fn percent(&self) -> f64 {
        if self.denominator == 0 {
            return 0.0;
        }
        f64::from(self.numerator) / f64::from(self.denominator) * 100.0
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2}% ({} / {})",
            self.percent(),
            self.numerator,
            self.denominator
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Ratio::of_256(64u8).to_string(), "25.00% (64 / 256)");
        assert_eq!(Ratio::new(171, 512).to_string(), "33.40% (171 / 512)");
        assert_eq!(Ratio::new(1, 3).to_string(), "33.33% (1 / 3)");
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(Ratio::new(0, 0).percent(), 0.0);
    }
}
