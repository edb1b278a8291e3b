/// Strict greater-than over machine integers.
///
/// Total over every representable pair; equality is not "greater".
pub fn is_greater(a: i32, b: i32) -> bool {
    a > b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greater_when_strictly_above() {
        assert!(is_greater(2, 1));
        assert!(is_greater(0, -1));
        assert!(is_greater(-1, -2));
    }

    #[test]
    fn test_not_greater_when_below() {
        assert!(!is_greater(1, 2));
        assert!(!is_greater(-2, -1));
    }

    #[test]
    fn test_equal_is_not_greater() {
        assert!(!is_greater(5, 5));
        assert!(!is_greater(0, 0));
        assert!(!is_greater(-7, -7));
    }

    #[test]
    fn test_extreme_values() {
        assert!(is_greater(i32::MAX, i32::MIN));
        assert!(!is_greater(i32::MIN, i32::MAX));
        assert!(!is_greater(i32::MIN, i32::MIN));
        assert!(!is_greater(i32::MAX, i32::MAX));
        assert!(is_greater(i32::MAX, i32::MAX - 1));
    }
}
