// Ranges are inclusive on both ends; a missing upper border means the range
// runs to the end of the street.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HouseRange {
    from: u32,
    to: Option<u32>,
}

impl HouseRange {
    pub fn closed(from: u32, to: u32) -> Self {
        Self { from, to: Some(to) }
    }

    pub fn open(from: u32) -> Self {
        Self { from, to: None }
    }

    pub fn contains(&self, number: u32) -> bool {
        self.from <= number && self.to.map_or(true, |to| number <= to)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn matches(self, number: u32) -> bool {
        // House numbering starts at 1; 0 belongs to neither parity set.
        match self {
            Parity::Even => number != 0 && number % 2 == 0,
            Parity::Odd => number % 2 == 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_closed_range_includes_both_borders() {
        let range = HouseRange::closed(2, 28);
        assert!(range.contains(2));
        assert!(range.contains(15));
        assert!(range.contains(28));
        assert!(!range.contains(1));
        assert!(!range.contains(29));
    }

    #[test]
    fn test_single_house_range() {
        let range = HouseRange::closed(30, 30);
        assert!(range.contains(30));
        assert!(!range.contains(29));
        assert!(!range.contains(31));
    }

    #[test]
    fn test_open_range_has_no_upper_border() {
        let range = HouseRange::open(20);
        assert!(range.contains(20));
        assert!(range.contains(1_000_000));
        assert!(!range.contains(19));
    }

    #[test]
    fn test_backwards_range_contains_nothing() {
        let range = HouseRange::closed(50, 20);
        assert!(!range.contains(20));
        assert!(!range.contains(35));
        assert!(!range.contains(50));
    }

    #[test]
    fn test_parity_of_ordinary_numbers() {
        assert!(Parity::Even.matches(4));
        assert!(!Parity::Even.matches(5));
        assert!(Parity::Odd.matches(5));
        assert!(!Parity::Odd.matches(4));
    }

    #[test]
    fn test_zero_matches_neither_parity() {
        assert!(!Parity::Even.matches(0));
        assert!(!Parity::Odd.matches(0));
    }

    proptest! {
        #[test]
        fn prop_every_positive_number_has_exactly_one_parity(number in 1u32..1_000_000) {
            prop_assert_ne!(Parity::Even.matches(number), Parity::Odd.matches(number));
        }

        #[test]
        fn prop_open_range_contains_everything_from_start(from in 0u32..10_000, offset in 0u32..10_000) {
            let range = HouseRange::open(from);
            prop_assert!(range.contains(from + offset));
            if from > 0 {
                prop_assert!(!range.contains(from - 1));
            }
        }
    }
}
