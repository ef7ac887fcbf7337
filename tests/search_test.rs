use sociogram::profile::UserProfile;
use sociogram::search::{self, kmp_search, rabin_karp_search, MatchAlgorithm};

#[test]
fn test_known_offsets() {
    assert_eq!(rabin_karp_search("abracadabra", "abra"), vec![0, 7]);
    assert_eq!(kmp_search("aaaa", "aa"), vec![0, 1, 2]);
    assert_eq!(rabin_karp_search("aaaa", "aa"), vec![0, 1, 2]);
}

#[test]
fn test_engines_agree_on_ascii_inputs() {
    let texts = [
        "",
        "a",
        "aaaaab",
        "the quick brown fox jumps over the lazy dog",
        "Mississippi MISSISSIPPI mississippi",
        "abcabcabcabc",
        "x",
    ];
    let patterns = ["", "a", "ab", "abc", "issi", "miss", "the", "zzz", "x"];

    for text in texts {
        for pattern in patterns {
            assert_eq!(
                kmp_search(text, pattern),
                rabin_karp_search(text, pattern),
                "divergence on ({text:?}, {pattern:?})"
            );
        }
    }
}

#[test]
fn test_profile_filters_end_to_end() {
    let mut profiles = Vec::new();

    let mut p = UserProfile::new("u1", "Diana Prince", 28, "Themyscira");
    p.add_interest("archery");
    p.add_interest("archaeology");
    profiles.push(p);

    let mut p = UserProfile::new("u2", "Bruce Wayne", 35, "Gotham");
    p.add_interest("martial arts");
    p.set_profile_data("occupation", "CEO");
    profiles.push(p);

    let mut p = UserProfile::new("u3", "Clark Kent", 33, "Metropolis");
    p.set_profile_data("occupation", "journalist");
    profiles.push(p);

    for algorithm in [MatchAlgorithm::Kmp, MatchAlgorithm::RabinKarp] {
        // Case-insensitive name match
        let hits = search::search_by_name(&profiles, "PRINCE", algorithm);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id().as_str(), "u1");

        // "arch" matches two of Diana's interests; she appears once
        let hits = search::search_by_interest(&profiles, "arch", algorithm);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id().as_str(), "u1");

        // Input order preserved across multiple hits
        let hits = search::search_by_location(&profiles, "m", algorithm);
        let ids: Vec<&str> = hits.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["u1", "u2", "u3"]);

        // Keyed profile-map entry
        let hits = search::search_by_profile_data(&profiles, "occupation", "journal", algorithm);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id().as_str(), "u3");

        // Empty pattern matches nothing
        assert!(search::search_by_name(&profiles, "", algorithm).is_empty());
    }
}
