//! Core type definitions for the social graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance sentinel meaning "no known finite path".
///
/// Adjacency matrix entries and Floyd-Warshall results use this value for
/// disconnected pairs; algorithms must check for it before adding path legs.
pub const INFINITY: u32 = u32::MAX;

/// Unique identifier for a user
///
/// Opaque string token; equality is exact byte comparison, ordering is
/// lexicographic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        UserId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        UserId(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        UserId(s.to_string())
    }
}

/// An undirected edge derived from the adjacency list.
///
/// Normalized so that `user1 < user2` lexicographically; each unordered pair
/// appears once. Weight is fixed at 1 with the current weight scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub user1: UserId,
    pub user2: UserId,
    pub weight: u32,
}

impl Edge {
    pub fn new(user1: UserId, user2: UserId, weight: u32) -> Self {
        Edge {
            user1,
            user2,
            weight,
        }
    }
}
