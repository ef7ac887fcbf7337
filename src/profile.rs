//! User profile records
//!
//! Plain attribute container consumed by the pattern matcher; the graph
//! store only ever reads the identifier.

use crate::graph::UserId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user's profile: identity plus searchable text fields.
///
/// The identifier is fixed at construction; everything else is mutable.
/// The open-ended `profile_data` map holds any extra key-value attributes
/// (e.g. extra CSV columns) in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    id: UserId,
    name: String,
    age: u32,
    location: String,
    #[serde(default)]
    interests: Vec<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    profile_data: IndexMap<String, String>,
}

impl UserProfile {
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        age: u32,
        location: impl Into<String>,
    ) -> Self {
        UserProfile {
            id: id.into(),
            name: name.into(),
            age,
            location: location.into(),
            interests: Vec::new(),
            profile_data: IndexMap::new(),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn interests(&self) -> &[String] {
        &self.interests
    }

    /// Add an interest, ignoring duplicates
    pub fn add_interest(&mut self, interest: impl Into<String>) {
        let interest = interest.into();
        if !self.interests.contains(&interest) {
            self.interests.push(interest);
        }
    }

    pub fn remove_interest(&mut self, interest: &str) {
        self.interests.retain(|i| i != interest);
    }

    /// Look up an open-ended profile attribute
    pub fn profile_data(&self, key: &str) -> Option<&str> {
        self.profile_data.get(key).map(String::as_str)
    }

    pub fn has_profile_data(&self, key: &str) -> bool {
        self.profile_data.contains_key(key)
    }

    pub fn set_profile_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.profile_data.insert(key.into(), value.into());
    }

    /// All open-ended attributes in insertion order
    pub fn profile_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.profile_data
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({}, {})",
            self.id, self.name, self.age, self.location
        )?;
        if !self.interests.is_empty() {
            write!(f, " [{}]", self.interests.join(", "))?;
        }
        Ok(())
    }
}
