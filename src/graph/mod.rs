//! Social graph core
//!
//! This module implements the dual-representation graph store:
//! - Users registered under opaque string identifiers with dense,
//!   first-seen-order indices
//! - Undirected simple connections kept consistent across an adjacency
//!   list and an adjacency matrix
//! - A single mutation API so neither representation can drift

pub mod store;
pub mod types;

// Re-export main types
pub use store::{GraphError, GraphResult, SocialGraph};
pub use types::{Edge, UserId, INFINITY};
