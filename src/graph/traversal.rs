//! Graph traversal (BFS) with a visited-set guard.

use std::collections::{BTreeSet, HashSet, VecDeque};

use crate::types::Direction;

use super::SenseGraph;

/// BFS from a set of start nodes, following one direction.
///
/// Returns every reachable node ID (start nodes included) exactly once, in
/// visit order. Cycles, self-edges and diamonds are visited once each.
/// Start IDs that are not in the graph are skipped.
pub fn reachable_nodes(graph: &SenseGraph, start_ids: &[u64], direction: Direction) -> Vec<u64> {
    let mut visited: HashSet<u64> = HashSet::new();
    let mut visited_order: Vec<u64> = Vec::new();
    let mut queue: VecDeque<u64> = VecDeque::new();

    for &start_id in start_ids {
        if graph.get_node(start_id).is_none() {
            continue;
        }
        if visited.insert(start_id) {
            visited_order.push(start_id);
            queue.push_back(start_id);
        }
    }

    while let Some(current_id) = queue.pop_front() {
        for &neighbor_id in graph.neighbors(current_id, direction) {
            if visited.insert(neighbor_id) {
                visited_order.push(neighbor_id);
                queue.push_back(neighbor_id);
            }
        }
    }

    visited_order
}

/// Union of the words of every node reachable from `start_ids`.
pub fn reachable_words(
    graph: &SenseGraph,
    start_ids: &[u64],
    direction: Direction,
) -> BTreeSet<String> {
    let mut words = BTreeSet::new();
    for id in reachable_nodes(graph, start_ids, direction) {
        if let Some(node) = graph.get_node(id) {
            words.extend(node.words.iter().cloned());
        }
    }
    words
}
