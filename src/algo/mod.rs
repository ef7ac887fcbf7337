//! Graph analytics engines
//!
//! Read-only algorithms over [`crate::graph::SocialGraph`]:
//! - traversal (BFS, DFS) and friend recommendations
//! - all-pairs shortest paths (Floyd-Warshall over the adjacency matrix)
//! - community detection (union-find over the derived edge list)

pub mod community;
pub mod paths;
pub mod traversal;

// Re-export algorithms
pub use community::detect_communities;
pub use paths::floyd_warshall;
pub use traversal::{bfs, dfs, friend_recommendations};
