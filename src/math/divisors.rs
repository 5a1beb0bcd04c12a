//! Divisor-pair enumeration backing the rectangle catalog
//!
//! Every rectangle of a given area corresponds to one ordered divisor pair
//! of that area, so catalog construction reduces to walking divisors up to
//! the integer square root.

use num_traits::PrimInt;

/// Largest `q` such that `q * q <= value`.
///
/// Uses a bisection that never multiplies beyond the checked range, so it
/// is safe across the full domain of the integer type.
pub fn integer_sqrt<T: PrimInt>(value: T) -> T {
    if value <= T::one() {
        return value;
    }

    let two = T::one() + T::one();
    let mut low = T::one();
    let mut high = value / two + two;

    while high - low > T::one() {
        let mid = low + (high - low) / two;
        let fits = mid
            .checked_mul(&mid)
            .is_some_and(|square| square <= value);
        if fits {
            low = mid;
        } else {
            high = mid;
        }
    }

    low
}

/// All divisor pairs `(width, height)` of `area` with `width >= height`,
/// ordered by width descending.
///
/// The widest pair `(area, 1)` comes first and the squarest pair last;
/// `area = 0` yields no pairs.
pub fn divisor_pairs<T: PrimInt>(area: T) -> Vec<(T, T)> {
    let mut pairs = Vec::new();
    if area == T::zero() {
        return pairs;
    }

    let mut height = T::one();
    let limit = integer_sqrt(area);
    while height <= limit {
        if area % height == T::zero() {
            pairs.push((area / height, height));
        }
        height = height + T::one();
    }

    pairs
}
