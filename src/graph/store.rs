//! In-memory social graph storage
//!
//! Keeps two synchronized representations of the same undirected simple
//! graph behind a single mutation API:
//! - an adjacency list for O(1) neighbor iteration (insertion-ordered), and
//! - a dense adjacency matrix for O(1) pairwise lookup and the path
//!   algorithms.
//!
//! The insertion-ordered map doubles as the identifier registry: a user's
//! dense index is its position in the map, assigned in first-seen order and
//! never reassigned while the user lives.

use super::types::{Edge, UserId, INFINITY};
use indexmap::IndexMap;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("user {0} not found")]
    UserNotFound(UserId),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory social graph
///
/// Undirected and simple: no self-loops, no duplicate edges. Nodes are
/// created on first reference and removed only by [`SocialGraph::clear`];
/// edge removal never removes the isolated endpoints.
#[derive(Debug, Default, Clone)]
pub struct SocialGraph {
    /// Adjacency list keyed by user, values in insertion order.
    /// Map order is first-seen order; a key's position is the user's
    /// dense matrix index.
    adjacency: IndexMap<UserId, Vec<UserId>>,

    /// N×N connectivity matrix over dense indices: 1 if connected,
    /// 0 on the diagonal, `INFINITY` otherwise.
    matrix: Vec<Vec<u32>>,
}

impl SocialGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        SocialGraph {
            adjacency: IndexMap::new(),
            matrix: Vec::new(),
        }
    }

    /// Register a user and return its dense index. Idempotent: an already
    /// registered user keeps its original index.
    ///
    /// Grows the matrix by one all-`INFINITY` row and column with the new
    /// diagonal cell set to 0; existing entries are untouched.
    pub fn add_user(&mut self, id: impl Into<UserId>) -> usize {
        let id = id.into();
        if let Some(index) = self.adjacency.get_index_of(&id) {
            return index;
        }
        self.adjacency.insert(id, Vec::new());

        let n = self.adjacency.len();
        for row in &mut self.matrix {
            row.push(INFINITY);
        }
        let mut row = vec![INFINITY; n];
        row[n - 1] = 0;
        self.matrix.push(row);
        n - 1
    }

    /// Connect two users, creating them first if needed.
    ///
    /// No-op for self-loops and for already-connected pairs.
    pub fn add_connection(&mut self, user1: impl Into<UserId>, user2: impl Into<UserId>) {
        let user1 = user1.into();
        let user2 = user2.into();
        if user1 == user2 {
            return;
        }

        let idx1 = self.add_user(user1.clone());
        let idx2 = self.add_user(user2.clone());

        if self.adjacency[&user1].contains(&user2) {
            return;
        }
        self.adjacency[&user1].push(user2.clone());
        self.adjacency[&user2].push(user1.clone());

        self.matrix[idx1][idx2] = 1;
        self.matrix[idx2][idx1] = 1;
    }

    /// Disconnect two users. No-op unless both exist; a missing edge is
    /// not an error. Isolated endpoints stay registered.
    pub fn remove_connection(&mut self, user1: &UserId, user2: &UserId) {
        // Self-loops never exist; writing the matrix cell would clobber
        // the zero diagonal.
        if user1 == user2 {
            return;
        }
        let (Some(idx1), Some(idx2)) = (
            self.adjacency.get_index_of(user1),
            self.adjacency.get_index_of(user2),
        ) else {
            return;
        };

        self.adjacency[user1].retain(|u| u != user2);
        self.adjacency[user2].retain(|u| u != user1);

        self.matrix[idx1][idx2] = INFINITY;
        self.matrix[idx2][idx1] = INFINITY;
    }

    /// Check whether two users are directly connected.
    /// Unknown users are simply not connected.
    pub fn are_connected(&self, user1: &UserId, user2: &UserId) -> bool {
        match (self.adjacency.get(user1), self.adjacency.get(user2)) {
            (Some(neighbors), Some(_)) => neighbors.contains(user2),
            _ => false,
        }
    }

    /// Neighbors of a user in insertion order, if the user exists
    pub fn neighbors(&self, id: &UserId) -> Option<&[UserId]> {
        self.adjacency.get(id).map(Vec::as_slice)
    }

    /// The full adjacency-list mapping, keyed in first-seen order
    pub fn adjacency_list(&self) -> &IndexMap<UserId, Vec<UserId>> {
        &self.adjacency
    }

    /// All users in first-seen (dense index) order
    pub fn users(&self) -> impl Iterator<Item = &UserId> {
        self.adjacency.keys()
    }

    /// Number of registered users
    pub fn user_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether a user is registered
    pub fn contains(&self, id: &UserId) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Dense index of a user, if registered
    pub fn index_of(&self, id: &UserId) -> Option<usize> {
        self.adjacency.get_index_of(id)
    }

    /// User at a dense index, if in range
    pub fn user_at(&self, index: usize) -> Option<&UserId> {
        self.adjacency.get_index(index).map(|(id, _)| id)
    }

    /// The dense connectivity matrix, row/column order matching [`Self::users`]
    pub fn adjacency_matrix(&self) -> &[Vec<u32>] {
        &self.matrix
    }

    /// Deduplicated undirected edge list derived from the adjacency list.
    ///
    /// Each unordered pair appears once, normalized to `user1 < user2`,
    /// weight fixed at 1. Rebuilt fresh on every call.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for (user, neighbors) in &self.adjacency {
            for neighbor in neighbors {
                // Both directions are in the list; emit each pair from its
                // lexicographically smaller endpoint only.
                if user < neighbor {
                    edges.push(Edge::new(user.clone(), neighbor.clone(), 1));
                }
            }
        }
        edges
    }

    /// Full reset: drops every user and connection
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.matrix.clear();
    }
}
