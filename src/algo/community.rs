//! Community detection via union-find over the derived edge list

use crate::graph::{SocialGraph, UserId};
use std::collections::HashMap;

/// Union-Find data structure
///
/// Ephemeral per-call state: rebuilt on every detection run, no cached
/// partition survives between calls.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            self.parent[i] = self.find(self.parent[i]); // Path compression
        }
        self.parent[i]
    }

    fn union(&mut self, i: usize, j: usize) {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i != root_j {
            if self.rank[root_i] < self.rank[root_j] {
                self.parent[root_i] = root_j;
            } else if self.rank[root_i] > self.rank[root_j] {
                self.parent[root_j] = root_i;
            } else {
                self.parent[root_j] = root_i;
                self.rank[root_i] += 1;
            }
        }
    }
}

/// Partition the graph into communities.
///
/// Derives the deduplicated edge list, sorts it by weight ascending, and
/// unions the endpoints of every edge with `weight <= threshold`. Each
/// resulting set is one community; users touched by no qualifying edge
/// form singletons. With the current uniform weight of 1, `threshold = 0`
/// therefore yields one singleton per user.
///
/// Members within a community follow dense index order; the order of the
/// communities themselves is not guaranteed stable across calls (grouping
/// is over a hashed root key).
pub fn detect_communities(graph: &SocialGraph, threshold: u32) -> Vec<Vec<UserId>> {
    let mut edges = graph.edges();
    // Degenerate while every weight is 1, kept so a future weight source
    // only has to fill in Edge::weight.
    edges.sort_by_key(|e| e.weight);

    let n = graph.user_count();
    let mut sets = UnionFind::new(n);

    for edge in &edges {
        if edge.weight > threshold {
            continue;
        }
        // Both endpoints came from the adjacency list, so the lookups
        // cannot miss.
        if let (Some(u), Some(v)) = (graph.index_of(&edge.user1), graph.index_of(&edge.user2)) {
            sets.union(u, v);
        }
    }

    let mut communities: HashMap<usize, Vec<UserId>> = HashMap::new();
    for i in 0..n {
        let root = sets.find(i);
        let id = graph.user_at(i).cloned();
        if let Some(id) = id {
            communities.entry(root).or_default().push(id);
        }
    }

    communities.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn uid(s: &str) -> UserId {
        UserId::new(s)
    }

    fn as_sets(communities: Vec<Vec<UserId>>) -> HashSet<Vec<UserId>> {
        communities
            .into_iter()
            .map(|mut c| {
                c.sort();
                c
            })
            .collect()
    }

    #[test]
    fn test_chain_forms_one_community() {
        let mut graph = SocialGraph::new();
        graph.add_connection("A", "B");
        graph.add_connection("B", "C");
        graph.add_connection("C", "D");

        let communities = detect_communities(&graph, 1);
        assert_eq!(communities.len(), 1);
        assert_eq!(
            as_sets(communities),
            as_sets(vec![vec![uid("A"), uid("B"), uid("C"), uid("D")]])
        );
    }

    #[test]
    fn test_two_components_two_communities() {
        let mut graph = SocialGraph::new();
        graph.add_connection("A", "B");
        graph.add_connection("C", "D");
        graph.add_connection("D", "E");

        let communities = detect_communities(&graph, 1);
        assert_eq!(
            as_sets(communities),
            as_sets(vec![
                vec![uid("A"), uid("B")],
                vec![uid("C"), uid("D"), uid("E")],
            ])
        );
    }

    #[test]
    fn test_zero_threshold_all_singletons() {
        let mut graph = SocialGraph::new();
        graph.add_connection("A", "B");
        graph.add_connection("B", "C");

        // No edge of weight 1 satisfies weight <= 0
        let communities = detect_communities(&graph, 0);
        assert_eq!(communities.len(), graph.user_count());
        for community in &communities {
            assert_eq!(community.len(), 1);
        }
    }

    #[test]
    fn test_isolated_user_is_singleton() {
        let mut graph = SocialGraph::new();
        graph.add_connection("A", "B");
        graph.add_user("loner");

        let communities = detect_communities(&graph, 1);
        assert_eq!(
            as_sets(communities),
            as_sets(vec![vec![uid("A"), uid("B")], vec![uid("loner")]])
        );
    }

    #[test]
    fn test_empty_graph_no_communities() {
        let graph = SocialGraph::new();
        assert!(detect_communities(&graph, 1).is_empty());
    }

    #[test]
    fn test_recompute_after_mutation() {
        let mut graph = SocialGraph::new();
        graph.add_connection("A", "B");
        graph.add_connection("B", "C");
        assert_eq!(detect_communities(&graph, 1).len(), 1);

        graph.remove_connection(&uid("B"), &uid("C"));
        assert_eq!(detect_communities(&graph, 1).len(), 2);
    }
}
