//! Sociogram
//!
//! An in-memory social network analytics engine. A [`graph::SocialGraph`]
//! keeps an adjacency list and an adjacency matrix consistent behind one
//! mutation API; the [`algo`] engines read it to compute traversals,
//! friend recommendations, all-pairs shortest paths, and union-find
//! community partitions. The [`search`] module matches substrings in
//! profile text with two independent engines (KMP and Rabin-Karp), and
//! [`io`] loads and saves networks as JSON or CSV.
//!
//! Everything is single-threaded and synchronous: callers own the graph
//! exclusively for the duration of any call sequence, and the analytics
//! engines never mutate it.
//!
//! # Example
//!
//! ```rust
//! use sociogram::algo;
//! use sociogram::graph::{SocialGraph, UserId};
//!
//! let mut network = SocialGraph::new();
//! network.add_connection("alice", "bob");
//! network.add_connection("bob", "carol");
//!
//! let order = algo::bfs(&network, &UserId::new("alice")).unwrap();
//! assert_eq!(order.len(), 3);
//!
//! let recs = algo::friend_recommendations(&network, &UserId::new("alice"), 2).unwrap();
//! assert_eq!(recs, vec![UserId::new("carol")]);
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod graph;
pub mod io;
pub mod profile;
pub mod search;

// Re-export main types for convenience
pub use graph::{Edge, GraphError, GraphResult, SocialGraph, UserId, INFINITY};
pub use profile::UserProfile;
pub use search::MatchAlgorithm;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
