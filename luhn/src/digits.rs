//! Decimal digit helpers shared by the validator and the generator.

/// Multiplier applied to the least significant digit when computing a Luhn sum.
/// Multipliers of the following digits alternate between the two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Multiplier {
    /// The digit is passed through as is.
    Single = 1,
    /// The digit is doubled, with 9 subtracted if the product exceeds 9.
    Double = 2,
}

impl Multiplier {
    fn flip(self) -> Self {
        match self {
            Self::Single => Self::Double,
            Self::Double => Self::Single,
        }
    }

    fn apply(self, digit: u64) -> u64 {
        let product = digit * self as u64;
        if product > 9 {
            product - 9
        } else {
            product
        }
    }
}

/// Computes the Luhn sum of `number`, walking its digits from the least significant one.
/// The loop body runs at least once, so `0` contributes a single zero digit.
pub(crate) fn luhn_sum(mut number: u64, mut multiplier: Multiplier) -> u64 {
    let mut sum = 0;
    loop {
        sum += multiplier.apply(number % 10);
        number /= 10;
        multiplier = multiplier.flip();
        if number == 0 {
            break sum;
        }
    }
}

/// Returns the number of decimal digits in `number`; `0` is considered to have a single digit.
pub(crate) fn digit_count(number: u64) -> u32 {
    let mut count = 1;
    let mut threshold = 10_u64;
    while threshold <= number {
        count += 1;
        match threshold.checked_mul(10) {
            Some(next) => threshold = next,
            None => break,
        }
    }
    count
}

/// Returns `10^exp`. `exp` must not exceed 19.
pub(crate) const fn pow10(exp: u32) -> u64 {
    10_u64.pow(exp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_digits() {
        #[rustfmt::skip]
        const SAMPLES: &[(u64, u32)] = &[
            (0, 1), (1, 1), (9, 1),
            (10, 2), (99, 2), (100, 3),
            (4_444_333_322_221_111, 16),
            (999_999_999_999_999_999, 18),
            (1_000_000_000_000_000_000, 19),
            (i64::MAX as u64, 19),
            (u64::MAX, 20),
        ];

        for &(number, expected) in SAMPLES {
            assert_eq!(digit_count(number), expected, "Failed sample: {number}");
        }
    }

    #[test]
    fn luhn_sum_for_single_digits() {
        for digit in 0..10 {
            assert_eq!(luhn_sum(digit, Multiplier::Single), digit);
        }
        let doubled: Vec<_> = (0..10)
            .map(|digit| luhn_sum(digit, Multiplier::Double))
            .collect();
        assert_eq!(doubled, [0, 2, 4, 6, 8, 1, 3, 5, 7, 9]);
    }

    #[test]
    fn luhn_sum_alternates_multipliers() {
        // Digits from the right: 1 (x1), 2 (x2 = 4), 7 (x1), 9 (x2 = 18 - 9 = 9).
        assert_eq!(luhn_sum(9721, Multiplier::Single), 1 + 4 + 7 + 9);
        // Same digits starting from the doubled position: 2, 2, 14 - 9 = 5, 9.
        assert_eq!(luhn_sum(9721, Multiplier::Double), 2 + 2 + 5 + 9);
    }

    #[test]
    fn powers_of_ten() {
        assert_eq!(pow10(0), 1);
        assert_eq!(pow10(3), 1_000);
        assert_eq!(pow10(17), 100_000_000_000_000_000);
    }
}
