//! Tests for start selection and chain walking

#[cfg(test)]
mod tests {
    use crate::fixtures::random_table;
    use unshred::UnshredError;
    use unshred::algorithm::chain::{build_order, find_start};
    use unshred::algorithm::matching::{Matching, greedy_match};

    fn assert_valid_order(order: &[usize], shred_count: usize) {
        assert!(order.len() <= shred_count);
        let mut seen = vec![false; shred_count];
        for &shred in order {
            assert!(shred < shred_count, "shred {shred} out of range");
            assert!(!seen[shred], "shred {shred} visited twice");
            seen[shred] = true;
        }
    }

    // Tests the start is the lowest-indexed shred without a predecessor
    // Verified by returning the last candidate instead
    #[test]
    fn test_find_start_prefers_lowest_index() {
        let matching = Matching::from_links(5, &[(0, 1), (3, 4)]).expect("valid links");
        assert_eq!(find_start(&matching), Some(0));

        let matching = Matching::from_links(3, &[(2, 0), (0, 1)]).expect("valid links");
        assert_eq!(find_start(&matching), Some(2));
    }

    // Tests a complete path is walked from its head
    // Verified by starting at shred zero unconditionally
    #[test]
    fn test_build_order_walks_path() {
        let matching =
            Matching::from_links(4, &[(2, 0), (0, 3), (3, 1)]).expect("valid links");
        assert_eq!(build_order(&matching).expect("complete chain"), vec![2, 0, 3, 1]);
    }

    // Tests a single shred forms a chain on its own
    // Verified by requiring at least one link
    #[test]
    fn test_single_shred_order() {
        let matching = Matching::new(1);
        assert_eq!(build_order(&matching).expect("trivial chain"), vec![0]);
    }

    // Tests a closed loop with no free head reports the missing start
    // Verified by defaulting the start to shred zero
    #[test]
    fn test_pure_cycle_has_no_start() {
        let matching = Matching::from_links(3, &[(0, 1), (1, 2), (2, 0)]).expect("valid links");

        assert_eq!(find_start(&matching), None);
        match build_order(&matching) {
            Err(UnshredError::NoStartShred { shred_count }) => assert_eq!(shred_count, 3),
            other => unreachable!("expected missing start, got {other:?}"),
        }
    }

    // Tests a chain that stops early lists the shreds it never reached
    // Verified by returning the partial order as success
    #[test]
    fn test_partial_chain_reports_missing_shreds() {
        // 3 is isolated and starts the only walk; 0 -> 1 -> 2 -> 0 is unreachable
        let matching = Matching::from_links(4, &[(0, 1), (1, 2), (2, 0)]).expect("valid links");

        match build_order(&matching) {
            Err(UnshredError::IncompleteChain {
                order,
                missing,
                shred_count,
            }) => {
                assert_eq!(order, vec![3]);
                assert_eq!(missing, vec![0, 1, 2]);
                assert_eq!(shred_count, 4);
            }
            other => unreachable!("expected incomplete chain, got {other:?}"),
        }
    }

    // Tests two separate paths fail instead of returning the first
    // Verified by dropping the length check after the walk
    #[test]
    fn test_two_paths_are_incomplete() {
        let matching = Matching::from_links(4, &[(0, 1), (2, 3)]).expect("valid links");
        let error = build_order(&matching).expect_err("two paths");

        assert!(error.is_degenerate_matching());
        assert!(error.to_string().contains("covers 2 of 4 shreds"));
    }

    // Tests orders from random matchings never repeat or overrun, complete or not
    // Verified by letting the walk continue around a closed loop
    #[test]
    fn test_order_invariant_on_random_tables() {
        for seed in 0..200 {
            let shred_count = 1 + (seed as usize % 12);
            let matching = greedy_match(&random_table(shred_count, seed));

            match build_order(&matching) {
                Ok(order) => {
                    assert_eq!(order.len(), shred_count);
                    assert_valid_order(&order, shred_count);
                }
                Err(UnshredError::IncompleteChain {
                    order,
                    missing,
                    shred_count: reported,
                }) => {
                    assert_eq!(reported, shred_count);
                    assert!(order.len() < shred_count);
                    assert_valid_order(&order, shred_count);
                    assert_eq!(order.len() + missing.len(), shred_count);
                    assert!(missing.iter().all(|shred| !order.contains(shred)));
                }
                Err(UnshredError::NoStartShred { .. }) => {
                    assert!(find_start(&matching).is_none());
                }
                Err(other) => unreachable!("unexpected error {other}"),
            }
        }
    }
}
