//! Turn a matching into the left-to-right shred order

use crate::algorithm::matching::Matching;
use crate::io::error::{Result, UnshredError};

/// First shred, by index, that has no predecessor
pub fn find_start(matching: &Matching) -> Option<usize> {
    (0..matching.shred_count()).find(|&shred| matching.predecessor(shred).is_none())
}

/// Follow successor links from the start shred
///
/// # Errors
///
/// Returns an error if:
/// - Every shred has a predecessor, so there is no start
/// - The chain from the start ends before visiting every shred
pub fn build_order(matching: &Matching) -> Result<Vec<usize>> {
    let shred_count = matching.shred_count();
    let start = find_start(matching).ok_or(UnshredError::NoStartShred { shred_count })?;

    let mut order = Vec::with_capacity(shred_count);
    let mut current = Some(start);
    while let Some(shred) = current {
        if order.len() == shred_count {
            break;
        }
        order.push(shred);
        current = matching.successor(shred);
    }

    if order.len() < shred_count {
        let mut reached = vec![false; shred_count];
        for &shred in &order {
            if let Some(flag) = reached.get_mut(shred) {
                *flag = true;
            }
        }
        let missing = reached
            .iter()
            .enumerate()
            .filter(|(_, seen)| !**seen)
            .map(|(shred, _)| shred)
            .collect();

        return Err(UnshredError::IncompleteChain {
            order,
            missing,
            shred_count,
        });
    }

    log::debug!("Chain starts at shred {start}");
    Ok(order)
}
