//! JSON network document reader/writer
//!
//! Document shape:
//! ```json
//! {
//!   "users": [ { "id": "...", "name": "...", "age": 0, "location": "...",
//!                "interests": [], "profile_data": {} } ],
//!   "connections": [ { "user1": "...", "user2": "..." } ]
//! }
//! ```

use super::ParseError;
use crate::graph::{SocialGraph, UserId};
use crate::profile::UserProfile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Serialize, Deserialize)]
struct NetworkDocument {
    #[serde(default)]
    users: Vec<UserProfile>,
    #[serde(default)]
    connections: Vec<Connection>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Connection {
    user1: UserId,
    user2: UserId,
}

/// Load a JSON network document.
///
/// The whole document is parsed before any graph state is built, so a
/// malformed file yields an error and nothing else.
pub fn load_json(path: &Path) -> Result<(SocialGraph, Vec<UserProfile>), ParseError> {
    let raw = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: NetworkDocument = serde_json::from_str(&raw)?;

    let mut graph = SocialGraph::new();
    for profile in &document.users {
        graph.add_user(profile.id().clone());
    }
    for connection in &document.connections {
        graph.add_connection(connection.user1.clone(), connection.user2.clone());
    }

    debug!(
        users = graph.user_count(),
        connections = document.connections.len(),
        "loaded JSON network from {}",
        path.display()
    );
    Ok((graph, document.users))
}

/// Save the graph's adjacency and the profile collection as a JSON
/// network document. Each undirected connection is written once,
/// normalized to `user1 < user2`.
pub fn save_json(
    path: &Path,
    graph: &SocialGraph,
    profiles: &[UserProfile],
) -> Result<(), ParseError> {
    let connections = graph
        .edges()
        .into_iter()
        .map(|e| Connection {
            user1: e.user1,
            user2: e.user2,
        })
        .collect();
    let document = NetworkDocument {
        users: profiles.to_vec(),
        connections,
    };

    let raw = serde_json::to_string_pretty(&document)?;
    fs::write(path, raw).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
