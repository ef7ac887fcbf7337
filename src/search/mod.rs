//! Substring search over profile text
//!
//! Two independent exact-match engines (KMP and Rabin-Karp) behind a
//! common selector, plus convenience filters over profile collections.
//! Both engines match ASCII case-insensitively and report identical
//! offset sets for identical inputs; they differ only in their
//! time/space tradeoffs.

pub mod kmp;
pub mod rabin_karp;

pub use kmp::kmp_search;
pub use rabin_karp::rabin_karp_search;

use crate::profile::UserProfile;
use std::fmt;
use std::str::FromStr;

/// Which matching engine to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchAlgorithm {
    /// Knuth-Morris-Pratt: failure table, no false candidates
    #[default]
    Kmp,
    /// Rabin-Karp: rolling hash, verified on collision
    RabinKarp,
}

impl MatchAlgorithm {
    /// All match start offsets of `pattern` in `text`
    pub fn find_all(self, text: &str, pattern: &str) -> Vec<usize> {
        match self {
            MatchAlgorithm::Kmp => kmp_search(text, pattern),
            MatchAlgorithm::RabinKarp => rabin_karp_search(text, pattern),
        }
    }

    /// Whether `pattern` occurs anywhere in `text`
    pub fn is_match(self, text: &str, pattern: &str) -> bool {
        !self.find_all(text, pattern).is_empty()
    }
}

impl fmt::Display for MatchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchAlgorithm::Kmp => write!(f, "kmp"),
            MatchAlgorithm::RabinKarp => write!(f, "rabin-karp"),
        }
    }
}

impl FromStr for MatchAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kmp" => Ok(MatchAlgorithm::Kmp),
            "rabin-karp" | "rabinkarp" | "rk" => Ok(MatchAlgorithm::RabinKarp),
            other => Err(format!("unknown match algorithm: {other}")),
        }
    }
}

fn filter<'a, F>(profiles: &'a [UserProfile], predicate: F) -> Vec<&'a UserProfile>
where
    F: Fn(&UserProfile) -> bool,
{
    profiles.iter().filter(|p| predicate(p)).collect()
}

/// Profiles whose display name contains the pattern, in input order
pub fn search_by_name<'a>(
    profiles: &'a [UserProfile],
    pattern: &str,
    algorithm: MatchAlgorithm,
) -> Vec<&'a UserProfile> {
    filter(profiles, |p| algorithm.is_match(p.name(), pattern))
}

/// Profiles whose location contains the pattern, in input order
pub fn search_by_location<'a>(
    profiles: &'a [UserProfile],
    pattern: &str,
    algorithm: MatchAlgorithm,
) -> Vec<&'a UserProfile> {
    filter(profiles, |p| algorithm.is_match(p.location(), pattern))
}

/// Profiles with at least one interest containing the pattern.
/// A profile matching several interests is reported once.
pub fn search_by_interest<'a>(
    profiles: &'a [UserProfile],
    pattern: &str,
    algorithm: MatchAlgorithm,
) -> Vec<&'a UserProfile> {
    filter(profiles, |p| {
        p.interests().iter().any(|i| algorithm.is_match(i, pattern))
    })
}

/// Profiles whose `key` profile-map entry contains the pattern.
/// Profiles without the key never match.
pub fn search_by_profile_data<'a>(
    profiles: &'a [UserProfile],
    key: &str,
    pattern: &str,
    algorithm: MatchAlgorithm,
) -> Vec<&'a UserProfile> {
    filter(profiles, |p| {
        p.profile_data(key)
            .is_some_and(|value| algorithm.is_match(value, pattern))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profiles() -> Vec<UserProfile> {
        let mut alice = UserProfile::new("u1", "Alice Johnson", 30, "New York");
        alice.add_interest("hiking");
        alice.add_interest("hill walking");
        alice.set_profile_data("occupation", "engineer");

        let mut bob = UserProfile::new("u2", "Bob Smith", 25, "San Francisco");
        bob.add_interest("reading");

        let mut carol = UserProfile::new("u3", "Carol Jones", 35, "New Orleans");
        carol.add_interest("cooking");
        carol.set_profile_data("occupation", "designer");

        vec![alice, bob, carol]
    }

    #[test]
    fn test_search_by_name() {
        let profiles = sample_profiles();
        let hits = search_by_name(&profiles, "jo", MatchAlgorithm::Kmp);
        let names: Vec<&str> = hits.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Alice Johnson", "Carol Jones"]);
    }

    #[test]
    fn test_search_by_location_preserves_input_order() {
        let profiles = sample_profiles();
        let hits = search_by_location(&profiles, "new", MatchAlgorithm::RabinKarp);
        let ids: Vec<&str> = hits.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["u1", "u3"]);
    }

    #[test]
    fn test_search_by_interest_no_duplicates() {
        let profiles = sample_profiles();
        // "hi" matches both of Alice's interests; she must appear once.
        let hits = search_by_interest(&profiles, "hi", MatchAlgorithm::Kmp);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id().as_str(), "u1");
    }

    #[test]
    fn test_search_by_profile_data() {
        let profiles = sample_profiles();
        let hits = search_by_profile_data(&profiles, "occupation", "eng", MatchAlgorithm::Kmp);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id().as_str(), "u1");

        // Missing key never matches
        let hits = search_by_profile_data(&profiles, "hometown", "x", MatchAlgorithm::Kmp);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_engines_agree_on_wrappers() {
        let profiles = sample_profiles();
        for pattern in ["jo", "new", "ing", "zzz", ""] {
            let kmp: Vec<&str> = search_by_name(&profiles, pattern, MatchAlgorithm::Kmp)
                .iter()
                .map(|p| p.id().as_str())
                .collect();
            let rk: Vec<&str> = search_by_name(&profiles, pattern, MatchAlgorithm::RabinKarp)
                .iter()
                .map(|p| p.id().as_str())
                .collect();
            assert_eq!(kmp, rk);
        }
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("kmp".parse::<MatchAlgorithm>(), Ok(MatchAlgorithm::Kmp));
        assert_eq!(
            "rabin-karp".parse::<MatchAlgorithm>(),
            Ok(MatchAlgorithm::RabinKarp)
        );
        assert!("boyer-moore".parse::<MatchAlgorithm>().is_err());
    }
}
