//! Greedy successor/predecessor matching over all edge costs
//!
//! Candidate edges are taken cheapest first and accepted whenever both
//! endpoints are still free on the relevant side. The result is usually a
//! single path, but nothing stops the accepted edges from closing a loop;
//! the chain builder reports that case instead of repairing it.

use crate::algorithm::table::EdgeCostTable;
use crate::io::error::{Result, invalid_parameter};
use std::cmp::Ordering;

/// Candidate link "`to` follows `from`" with its cost
#[derive(Debug, Clone, Copy)]
pub struct CandidateEdge {
    /// Edge cost
    pub cost: f64,
    /// Shred on the left of the seam
    pub from: usize,
    /// Shred on the right of the seam
    pub to: usize,
}

impl Ord for CandidateEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then(self.from.cmp(&other.from))
            .then(self.to.cmp(&other.to))
    }
}

impl PartialOrd for CandidateEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CandidateEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CandidateEdge {}

/// Every ordered pair of distinct shreds, sorted by `(cost, from, to)`
pub fn sorted_candidates(table: &EdgeCostTable) -> Vec<CandidateEdge> {
    let mut candidates: Vec<CandidateEdge> = table
        .edges()
        .map(|(from, to, cost)| CandidateEdge { cost, from, to })
        .collect();
    candidates.sort_unstable();
    candidates
}

/// Accepted successor and predecessor links between shreds
///
/// `successor(i) == Some(j)` exactly when `predecessor(j) == Some(i)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    successors: Vec<Option<usize>>,
    predecessors: Vec<Option<usize>>,
    accepted: usize,
}

impl Matching {
    /// Create a matching with no links
    pub fn new(shred_count: usize) -> Self {
        Self {
            successors: vec![None; shred_count],
            predecessors: vec![None; shred_count],
            accepted: 0,
        }
    }

    /// Build a matching from explicit `(from, to)` links
    ///
    /// # Errors
    ///
    /// Returns an error if a link is out of range, links a shred to itself,
    /// or gives a shred a second successor or predecessor
    pub fn from_links(shred_count: usize, links: &[(usize, usize)]) -> Result<Self> {
        let mut matching = Self::new(shred_count);
        for &(from, to) in links {
            if from >= shred_count || to >= shred_count || from == to {
                return Err(invalid_parameter(
                    "link",
                    &format!("{from} -> {to}"),
                    &format!("links must join two distinct shreds below {shred_count}"),
                ));
            }
            if !matching.try_link(from, to) {
                return Err(invalid_parameter(
                    "link",
                    &format!("{from} -> {to}"),
                    &"shred already has a successor or its target a predecessor",
                ));
            }
        }
        Ok(matching)
    }

    /// Number of shreds the matching covers
    pub fn shred_count(&self) -> usize {
        self.successors.len()
    }

    /// Shred placed directly right of `shred`
    pub fn successor(&self, shred: usize) -> Option<usize> {
        self.successors.get(shred).copied().flatten()
    }

    /// Shred placed directly left of `shred`
    pub fn predecessor(&self, shred: usize) -> Option<usize> {
        self.predecessors.get(shred).copied().flatten()
    }

    /// Number of accepted links
    pub const fn accepted_edges(&self) -> usize {
        self.accepted
    }

    /// Accept `from -> to` if `from` has no successor and `to` no predecessor
    ///
    /// Returns whether the link was accepted. Out-of-range indices and
    /// self-links are never accepted.
    pub fn try_link(&mut self, from: usize, to: usize) -> bool {
        if from == to {
            return false;
        }

        match (self.successors.get(from), self.predecessors.get(to)) {
            (Some(None), Some(None)) => {}
            _ => return false,
        }

        if let Some(slot) = self.successors.get_mut(from) {
            *slot = Some(to);
        }
        if let Some(slot) = self.predecessors.get_mut(to) {
            *slot = Some(from);
        }
        self.accepted += 1;
        true
    }

    /// All accepted `(from, to)` links, ordered by `from`
    pub fn links(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.successors
            .iter()
            .enumerate()
            .filter_map(|(from, successor)| successor.map(|to| (from, to)))
    }

    /// Check that successor and predecessor links mirror each other
    pub fn is_consistent(&self) -> bool {
        let forward = self
            .links()
            .all(|(from, to)| self.predecessor(to) == Some(from));
        let backward = self
            .predecessors
            .iter()
            .enumerate()
            .filter_map(|(to, predecessor)| predecessor.map(|from| (from, to)))
            .all(|(from, to)| self.successor(from) == Some(to));

        forward && backward && self.links().count() == self.accepted
    }
}

/// Greedily accept the cheapest compatible edges
///
/// Stops after `shred_count - 1` links or when candidates run out. Loops
/// among accepted links are possible and left in place.
pub fn greedy_match(table: &EdgeCostTable) -> Matching {
    greedy_match_candidates(table.shred_count(), &sorted_candidates(table))
}

/// Greedy acceptance over an already sorted candidate list
pub fn greedy_match_candidates(shred_count: usize, candidates: &[CandidateEdge]) -> Matching {
    let mut matching = Matching::new(shred_count);
    let target = shred_count.saturating_sub(1);

    for edge in candidates {
        if matching.accepted_edges() >= target {
            break;
        }
        if matching.try_link(edge.from, edge.to) {
            log::trace!(
                "Accepted {} -> {} at cost {:.6}",
                edge.from,
                edge.to,
                edge.cost
            );
        }
    }

    log::debug!(
        "Accepted {} of {} possible links from {} candidates",
        matching.accepted_edges(),
        target,
        candidates.len()
    );

    matching
}
