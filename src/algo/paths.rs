//! All-pairs shortest paths over the adjacency matrix

use crate::graph::{SocialGraph, INFINITY};

/// Floyd-Warshall all-pairs shortest paths.
///
/// Returns an N×N matrix of hop counts indexed like the graph's user list,
/// with `INFINITY` for unreachable pairs and 0 on the diagonal. A pair is
/// only relaxed through an intermediate when both legs are finite, so the
/// sentinel never participates in arithmetic. An empty graph yields an
/// empty matrix.
pub fn floyd_warshall(graph: &SocialGraph) -> Vec<Vec<u32>> {
    let n = graph.user_count();
    let mut dist: Vec<Vec<u32>> = graph.adjacency_matrix().to_vec();

    for k in 0..n {
        for i in 0..n {
            if dist[i][k] == INFINITY {
                continue;
            }
            for j in 0..n {
                if dist[k][j] == INFINITY {
                    continue;
                }
                let through_k = dist[i][k] + dist[k][j];
                if through_k < dist[i][j] {
                    dist[i][j] = through_k;
                }
            }
        }
    }

    dist
}
