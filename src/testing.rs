use crate::priority_queue::{Node, PriorityQueue};

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Pops every node out of the queue, returning them in pop order.
pub fn drain<K: Ord, V: Ord>(pq: &mut PriorityQueue<K, V>) -> Vec<Node<K, V>> {
    let mut out = Vec::with_capacity(pq.len());
    while let Some(node) = pq.pop() {
        out.push(node);
    }
    out
}
