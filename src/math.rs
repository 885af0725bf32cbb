// SPDX-License-Identifier: MPL-2.0

//! Power-of-two helpers

/// Return true if n is a power of 2
pub fn is_power_of_two(n: u64) -> bool {
    n != 0 && (n & (n - 1)) == 0
}

/// Return the largest power of 2 which is <= n
///
/// Undefined for n == 0.
pub fn previous_power_of_2(n: u64) -> u64 {
    debug_assert!(n > 0);
    1u64 << (63 - n.leading_zeros())
}

/// Return the smallest power of 2 which is >= n
///
/// Undefined for n == 0.
pub fn next_power_of_2(n: u64) -> u64 {
    debug_assert!(n > 0);
    if is_power_of_two(n) {
        n
    } else {
        1u64 << (64 - n.leading_zeros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_power_of_two() {
        for shift in 0..64 {
            assert!(is_power_of_two(1u64 << shift));
        }
        assert!(!is_power_of_two(0));
        assert!(!is_power_of_two(3));
        assert!(!is_power_of_two(6));
        assert!(!is_power_of_two(1000));
    }

    #[test]
    fn test_previous_power_of_2() {
        assert_eq!(previous_power_of_2(1), 1);
        assert_eq!(previous_power_of_2(2), 2);
        assert_eq!(previous_power_of_2(3), 2);
        assert_eq!(previous_power_of_2(640), 512);
        assert_eq!(previous_power_of_2(1024), 1024);

        for n in 1..2000u64 {
            let p = previous_power_of_2(n);
            assert!(is_power_of_two(p));
            assert!(p <= n && n < 2 * p);
        }
    }

    #[test]
    fn test_next_power_of_2() {
        assert_eq!(next_power_of_2(1), 1);
        assert_eq!(next_power_of_2(3), 4);
        assert_eq!(next_power_of_2(720), 1024);
        assert_eq!(next_power_of_2(1024), 1024);

        for n in 1..2000u64 {
            let p = next_power_of_2(n);
            assert!(is_power_of_two(p));
            assert!(p >= n);
            if !is_power_of_two(n) {
                assert!(n > p / 2);
            }
        }
    }
}
