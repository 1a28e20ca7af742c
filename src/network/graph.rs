use crate::types::CityId;

/// Undirected city graph in a flat adjacency layout: one contiguous
/// neighbour array plus a per-node offset table into it.
///
/// Node `city_count` is the virtual hub. Every airport is linked to it, which
/// turns "any airport flies to any airport" into an ordinary 2-edge path
/// through the hub; the traversal never has to distinguish flights from
/// railways.
pub struct Graph {
    /// `offsets[c]..offsets[c + 1]` is city `c`'s slice of `neighbours`.
    offsets: Vec<usize>,
    neighbours: Vec<CityId>,
}

impl Graph {
    /// Builds the graph over `city_count` real cities plus the hub.
    ///
    /// All identifiers must already be 0-indexed and in range; out-of-range
    /// input is a caller bug, not a recoverable condition. `city_count == 0`
    /// yields a hub-only graph.
    pub fn build(city_count: usize, routes: &[(CityId, CityId)], airports: &[CityId]) -> Self {
        let nodes = city_count + 1;
        let hub = city_count;

        // First pass: tally degrees. Each railway endpoint counts once, as
        // does each side of an airport-hub link.
        let mut degree = vec![0usize; nodes];
        for &(from, until) in routes {
            debug_assert!((from as usize) < city_count, "route origin out of range");
            debug_assert!((until as usize) < city_count, "route destination out of range");
            degree[from as usize] += 1;
            degree[until as usize] += 1;
        }
        for &airport in airports {
            debug_assert!((airport as usize) < city_count, "airport city out of range");
            degree[airport as usize] += 1;
            degree[hub] += 1;
        }

        // Prefix-sum the tallies into the offset table.
        let mut offsets = Vec::with_capacity(nodes + 1);
        let mut total = 0;
        offsets.push(0);
        for &d in &degree {
            total += d;
            offsets.push(total);
        }

        // Second pass: lay the neighbours down through a per-node write
        // cursor, so no city's slice spills into the next one's.
        let mut cursor = offsets[..nodes].to_vec();
        let mut neighbours = vec![0 as CityId; total];
        for &(from, until) in routes {
            neighbours[cursor[from as usize]] = until;
            cursor[from as usize] += 1;
            neighbours[cursor[until as usize]] = from;
            cursor[until as usize] += 1;
        }
        for &airport in airports {
            neighbours[cursor[airport as usize]] = hub as CityId;
            cursor[airport as usize] += 1;
            neighbours[cursor[hub]] = airport;
            cursor[hub] += 1;
        }

        Graph { offsets, neighbours }
    }

    /// Number of nodes, hub included.
    #[inline(always)]
    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// The virtual hub node.
    #[inline(always)]
    pub fn hub(&self) -> CityId {
        (self.node_count() - 1) as CityId
    }

    /// Number of neighbours of the given node.
    #[inline(always)]
    pub fn degree(&self, city: CityId) -> usize {
        self.offsets[city as usize + 1] - self.offsets[city as usize]
    }

    /// The given node's neighbours, hub links included.
    #[inline(always)]
    pub fn neighbours(&self, city: CityId) -> &[CityId] {
        &self.neighbours[self.offsets[city as usize]..self.offsets[city as usize + 1]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_edge_contributes_two_degree_units() {
        let routes = [(0, 1), (1, 2), (0, 1)];
        let airports = [2, 3];
        let graph = Graph::build(4, &routes, &airports);

        let total: usize = (0..graph.node_count())
            .map(|c| graph.degree(c as CityId))
            .sum();
        assert_eq!(total, 2 * (routes.len() + airports.len()));
    }

    #[test]
    fn adjacency_is_symmetric() {
        let graph = Graph::build(5, &[(0, 3), (3, 4), (1, 2)], &[0, 4]);
        for city in 0..graph.node_count() as CityId {
            for &next in graph.neighbours(city) {
                assert!(
                    graph.neighbours(next).contains(&city),
                    "missing back edge {} -> {}",
                    next,
                    city
                );
            }
        }
    }

    #[test]
    fn airports_link_to_the_hub_and_nothing_else_does() {
        let graph = Graph::build(4, &[(0, 1)], &[1, 3]);
        let hub = graph.hub();
        assert_eq!(hub, 4);
        assert_eq!(graph.degree(hub), 2);
        assert!(graph.neighbours(1).contains(&hub));
        assert!(graph.neighbours(3).contains(&hub));
        assert!(!graph.neighbours(0).contains(&hub));
        assert!(!graph.neighbours(2).contains(&hub));
    }

    #[test]
    fn parallel_routes_are_kept_as_a_multigraph() {
        let graph = Graph::build(2, &[(0, 1), (0, 1)], &[]);
        assert_eq!(graph.neighbours(0), &[1, 1]);
        assert_eq!(graph.neighbours(1), &[0, 0]);
    }

    #[test]
    fn zero_cities_yields_a_hub_only_graph() {
        let graph = Graph::build(0, &[], &[]);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.hub(), 0);
        assert_eq!(graph.degree(graph.hub()), 0);
        assert!(graph.neighbours(graph.hub()).is_empty());
    }
}
