use crate::priority_queue::PriorityQueue;
use log::debug;

/// Returns the label whose score is the `rank`-th smallest, counting from 1.
/// Equal scores are ordered by label.
///
/// Returns `None` when `rank` is zero or exceeds the number of results.
pub fn find_ranking<K, V>(rank: usize, results: &[(K, V)]) -> Option<V>
where
    K: Ord + Clone,
    V: Ord + Clone,
{
    if rank == 0 || rank > results.len() {
        return None;
    }
    debug!("find_ranking: rank {} of {} results", rank, results.len());

    let mut pq = PriorityQueue::with_capacity(results.len());
    for (score, label) in results.iter() {
        pq.push(score.clone(), label.clone());
    }

    let mut found = None;
    for _ in 0..rank {
        found = pq.pop();
    }
    found.map(|node| node.value)
}
