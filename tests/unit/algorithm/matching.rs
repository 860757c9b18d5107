//! Tests for candidate ordering and greedy successor/predecessor matching

#[cfg(test)]
mod tests {
    use crate::fixtures::random_table;
    use ndarray::array;
    use unshred::algorithm::matching::{
        CandidateEdge, Matching, greedy_match, greedy_match_candidates, sorted_candidates,
    };
    use unshred::algorithm::table::EdgeCostTable;

    fn assert_valid_matching(matching: &Matching) {
        assert!(matching.is_consistent());
        let mut seen_successors = vec![false; matching.shred_count()];
        for (from, to) in matching.links() {
            assert_ne!(from, to);
            assert!(!seen_successors[to], "shred {to} has two predecessors");
            seen_successors[to] = true;
        }
        assert!(matching.accepted_edges() < matching.shred_count().max(1));
    }

    // Tests cost is the primary key and indices break ties
    // Verified by sorting on cost alone with an unstable sort
    #[test]
    fn test_candidate_order_breaks_ties_by_index() {
        let mut candidates = vec![
            CandidateEdge { cost: 1.0, from: 2, to: 0 },
            CandidateEdge { cost: 1.0, from: 0, to: 2 },
            CandidateEdge { cost: 0.5, from: 3, to: 1 },
            CandidateEdge { cost: 1.0, from: 0, to: 1 },
        ];
        candidates.sort();

        let keys: Vec<_> = candidates.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(keys, vec![(3, 1), (0, 1), (0, 2), (2, 0)]);
    }

    // Tests sorted candidates exclude the diagonal and are ascending
    // Verified by leaving diagonal entries in the enumeration
    #[test]
    fn test_sorted_candidates() {
        let table = EdgeCostTable::from_array(array![
            [0.0, 3.0, 1.0],
            [2.0, 0.0, 1.0],
            [5.0, 4.0, 0.0]
        ])
        .expect("valid table");

        let candidates = sorted_candidates(&table);
        let keys: Vec<_> = candidates.iter().map(|e| (e.cost, e.from, e.to)).collect();
        assert_eq!(
            keys,
            vec![
                (1.0, 0, 2),
                (1.0, 1, 2),
                (2.0, 1, 0),
                (3.0, 0, 1),
                (4.0, 2, 1),
                (5.0, 2, 0)
            ]
        );
    }

    // Tests sorting is idempotent and yields the same matching
    // Verified by shuffling ties between runs
    #[test]
    fn test_sorting_twice_gives_same_matching() {
        let table = random_table(9, 7);

        let first = sorted_candidates(&table);
        let mut second = first.clone();
        second.sort();

        assert_eq!(first, second);
        assert_eq!(
            greedy_match_candidates(9, &first),
            greedy_match_candidates(9, &second)
        );
        assert_eq!(greedy_match(&table), greedy_match(&table));
    }

    // Tests a link is refused once either endpoint is taken
    // Verified by overwriting existing links
    #[test]
    fn test_try_link_respects_existing_links() {
        let mut matching = Matching::new(4);

        assert!(matching.try_link(0, 1));
        assert!(!matching.try_link(0, 2), "0 already has a successor");
        assert!(!matching.try_link(3, 1), "1 already has a predecessor");
        assert!(!matching.try_link(2, 2), "self links are refused");
        assert!(!matching.try_link(7, 0), "out of range");
        assert!(matching.try_link(1, 0), "reverse link is still free");

        assert_eq!(matching.successor(0), Some(1));
        assert_eq!(matching.predecessor(1), Some(0));
        assert_eq!(matching.successor(1), Some(0));
        assert_eq!(matching.accepted_edges(), 2);
        assert!(matching.is_consistent());
    }

    // Tests explicit link construction validates its input
    // Verified by skipping the range check
    #[test]
    fn test_from_links_validation() {
        assert!(Matching::from_links(3, &[(0, 1), (1, 2)]).is_ok());
        assert!(Matching::from_links(3, &[(0, 3)]).is_err());
        assert!(Matching::from_links(3, &[(1, 1)]).is_err());
        assert!(Matching::from_links(3, &[(0, 1), (2, 1)]).is_err());
        assert!(Matching::from_links(3, &[(0, 1), (0, 2)]).is_err());
    }

    // Tests links are reported in successor order
    // Verified by iterating predecessors instead
    #[test]
    fn test_links_listing() {
        let matching = Matching::from_links(4, &[(2, 0), (0, 3)]).expect("valid links");
        assert_eq!(matching.links().collect::<Vec<_>>(), vec![(0, 3), (2, 0)]);
    }

    // Tests the greedy matcher takes the cheapest compatible edges
    // Verified by processing candidates in reverse order
    #[test]
    fn test_greedy_match_recovers_path() {
        let table = EdgeCostTable::from_array(array![
            [0.0, 9.0, 9.0, 1.0],
            [9.0, 0.0, 9.0, 9.0],
            [9.0, 2.0, 0.0, 9.0],
            [9.0, 9.0, 3.0, 0.0]
        ])
        .expect("valid table");

        let matching = greedy_match(&table);
        assert_eq!(matching.links().collect::<Vec<_>>(), vec![(0, 3), (2, 1), (3, 2)]);
        assert_eq!(matching.predecessor(0), None);
    }

    // Tests matching stops after shred_count - 1 links
    // Verified by letting the loop run through every candidate
    #[test]
    fn test_greedy_match_stops_at_limit() {
        let table = EdgeCostTable::from_array(array![
            [0.0, 1.0, 2.0],
            [6.0, 0.0, 3.0],
            [4.0, 5.0, 0.0]
        ])
        .expect("valid table");

        let matching = greedy_match(&table);
        assert_eq!(matching.accepted_edges(), 2);
        assert_eq!(matching.links().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
        assert_eq!(matching.successor(2), None);
    }

    // Tests the heuristic may close a loop and leaves it in place
    // Verified by adding cycle rejection to try_link
    #[test]
    fn test_greedy_match_can_close_cycle() {
        let table = EdgeCostTable::from_array(array![
            [0.0, 0.1, 1.0, 1.0],
            [1.0, 0.0, 0.1, 1.0],
            [0.1, 1.0, 0.0, 1.0],
            [1.0, 1.0, 1.0, 0.0]
        ])
        .expect("valid table");

        let matching = greedy_match(&table);
        assert_eq!(matching.links().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 0)]);
        assert_eq!(matching.successor(3), None);
        assert_eq!(matching.predecessor(3), None);
    }

    // Tests the matching invariant over many random tables
    // Verified by setting successors without predecessors
    #[test]
    fn test_matching_invariant_on_random_tables() {
        for seed in 0..50 {
            let shred_count = 2 + (seed as usize % 9);
            let matching = greedy_match(&random_table(shred_count, seed));
            assert_valid_matching(&matching);
        }
    }

    // Tests a single shred produces an empty matching
    // Verified by subtracting one from zero without saturation
    #[test]
    fn test_single_shred_matching() {
        let table = EdgeCostTable::from_array(array![[0.0]]).expect("valid table");
        let matching = greedy_match(&table);
        assert_eq!(matching.accepted_edges(), 0);
        assert_eq!(matching.shred_count(), 1);
    }
}
