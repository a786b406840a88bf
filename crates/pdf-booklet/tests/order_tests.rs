use pdf_booklet::*;
use proptest::prelude::*;
use std::collections::HashSet;

fn order(n: usize) -> Vec<(usize, usize)> {
    let count = validate_page_count(n).unwrap();
    booklet_page_order(count)
        .into_iter()
        .map(|pair| (pair.left, pair.right))
        .collect()
}

#[test]
fn test_four_pages() {
    assert_eq!(order(4), vec![(3, 0), (1, 2)]);
}

#[test]
fn test_eight_pages() {
    assert_eq!(order(8), vec![(7, 0), (1, 6), (5, 2), (3, 4)]);
}

#[test]
fn test_sixteen_pages_inner_sheet() {
    let pairs = order(16);
    assert_eq!(pairs.len(), 8);
    // Innermost sheet carries the center spread on its back
    assert_eq!(pairs[6], (9, 6));
    assert_eq!(pairs[7], (7, 8));
}

#[test]
fn test_order_is_deterministic() {
    assert_eq!(order(24), order(24));
}

#[test]
fn test_pair_converts_from_tuple() {
    let pair: SheetPair = (5, 2).into();
    assert_eq!(pair, SheetPair::new(5, 2));
}

proptest! {
    #[test]
    fn order_is_a_permutation(sheets in 1usize..64) {
        let n = sheets * 4;
        let pairs = order(n);
        prop_assert_eq!(pairs.len(), n / 2);

        let mut seen = HashSet::new();
        for (left, right) in pairs {
            prop_assert!(left < n && right < n);
            prop_assert!(seen.insert(left));
            prop_assert!(seen.insert(right));
        }
        prop_assert_eq!(seen.len(), n);
    }

    #[test]
    fn outer_sheet_holds_first_and_last_pages(sheets in 1usize..64) {
        let n = sheets * 4;
        let pairs = order(n);
        prop_assert_eq!(pairs[0], (n - 1, 0));
        prop_assert_eq!(pairs[1], (1, n - 2));
    }

    #[test]
    fn facing_pages_sum_to_last_index(sheets in 1usize..64) {
        // Pages sharing a face are mirror images around the fold
        let n = sheets * 4;
        for (left, right) in order(n) {
            prop_assert_eq!(left + right, n - 1);
        }
    }
}
