use crate::network::Graph;
use crate::types::{CityId, Distance, Token};
use crate::utils::Ring;

/// Initial traversal queue capacity. The ring grows on demand, so this only
/// bounds memory for small instances.
const DEFAULT_QUEUE_CAPACITY: usize = 128;

/// Returns the minimum number of hops from `from` to `until` over the
/// hub-augmented graph, or `None` when the two are disconnected even through
/// the hub.
///
/// The traversal threads frontier markers through the same queue as the
/// cities, so no per-city distance array is needed: a marker announces the
/// depth of everything dequeued after it. `depth` always holds the distance
/// of the frontier currently being *filled*, one ahead of the entry in hand,
/// hence the `- 1` on a hit.
pub fn shortest_hops(graph: &Graph, from: CityId, until: CityId) -> Option<Distance> {
    let mut queue = Ring::with_capacity(DEFAULT_QUEUE_CAPACITY);
    let mut visited = vec![false; graph.node_count()];

    let mut depth: Distance = 1;
    queue.push_back(Token::city(from));
    visited[from as usize] = true;

    while !queue.is_empty() {
        let head = queue.pop_front();
        if head.is_level() {
            depth = head.depth();
        } else if head.city_id() == until {
            return Some(depth - 1);
        } else {
            let city = head.city_id();
            // One marker per expanded node with neighbours. Markers from the
            // same frontier re-announce the same depth, so the redundancy is
            // harmless, and a marker never outlives the queue it guards.
            if graph.degree(city) > 0 {
                queue.push_back(Token::level(depth + 1));
            }
            for &next in graph.neighbours(city) {
                // Mark at enqueue time, so siblings of the same frontier
                // cannot queue a city twice.
                if !visited[next as usize] {
                    visited[next as usize] = true;
                    queue.push_back(Token::city(next));
                }
            }
        }
    }

    None
}
