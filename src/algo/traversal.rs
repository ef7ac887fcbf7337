//! Graph traversal: BFS, DFS, and depth-bounded friend recommendations

use crate::graph::{GraphError, GraphResult, SocialGraph, UserId};
use std::collections::{HashSet, VecDeque};

/// Breadth-First Search from a start user.
///
/// Returns every reachable user exactly once, in discovery order, starting
/// with `start` itself. An unknown start user is an error.
pub fn bfs(graph: &SocialGraph, start: &UserId) -> GraphResult<Vec<UserId>> {
    if !graph.contains(start) {
        return Err(GraphError::UserNotFound(start.clone()));
    }

    let mut result = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(&current).unwrap_or(&[]) {
            if visited.insert(neighbor.clone()) {
                queue.push_back(neighbor.clone());
            }
        }
        result.push(current);
    }

    Ok(result)
}

/// Depth-First Search from a start user.
///
/// Preorder matching the recursive formulation (neighbors visited in stored
/// order), but driven by an explicit stack so long chains cannot exhaust
/// the call stack. An unknown start user is an error.
pub fn dfs(graph: &SocialGraph, start: &UserId) -> GraphResult<Vec<UserId>> {
    if !graph.contains(start) {
        return Err(GraphError::UserNotFound(start.clone()));
    }

    let mut result = Vec::new();
    let mut visited = HashSet::new();
    let mut stack = vec![start.clone()];

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }

        // Push neighbors reversed so the first stored neighbor is explored
        // first, matching the recursive visit order.
        for neighbor in graph.neighbors(&current).unwrap_or(&[]).iter().rev() {
            if !visited.contains(neighbor) {
                stack.push(neighbor.clone());
            }
        }
        result.push(current);
    }

    Ok(result)
}

/// Friends-of-friends recommendations.
///
/// Breadth-first expansion up to `depth` hops from `start`. The start user
/// and direct (depth-1) neighbors are excluded; users first discovered at
/// depth >= 2 are reported once each, in discovery order. `depth < 1`
/// yields an empty result. An unknown start user is an error.
pub fn friend_recommendations(
    graph: &SocialGraph,
    start: &UserId,
    depth: usize,
) -> GraphResult<Vec<UserId>> {
    if !graph.contains(start) {
        return Err(GraphError::UserNotFound(start.clone()));
    }

    let mut recommendations = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back((start.clone(), 0usize));

    while let Some((current, current_depth)) = queue.pop_front() {
        if current_depth >= depth {
            continue;
        }

        for neighbor in graph.neighbors(&current).unwrap_or(&[]) {
            if visited.insert(neighbor.clone()) {
                queue.push_back((neighbor.clone(), current_depth + 1));
                if current_depth > 0 {
                    recommendations.push(neighbor.clone());
                }
            }
        }
    }

    Ok(recommendations)
}
