//! Sociogram CLI
//!
//! Loads a network file (JSON or CSV, chosen by extension) and runs one
//! analytic per invocation. Rendering happens here; the library returns
//! only semantic sequences and matrices.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sociogram::algo;
use sociogram::graph::{SocialGraph, UserId, INFINITY};
use sociogram::io;
use sociogram::profile::UserProfile;
use sociogram::search::{self, MatchAlgorithm};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "sociogram", version, about = "Social network graph analytics")]
struct Cli {
    /// Network file to load (.json or .csv)
    #[arg(short, long)]
    network: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show user and connection counts
    Stats,
    /// Breadth-first traversal from a user
    Bfs { user: String },
    /// Depth-first traversal from a user
    Dfs { user: String },
    /// Friends-of-friends recommendations for a user
    Recommend {
        user: String,
        /// Maximum hop distance to expand
        #[arg(long, default_value_t = 2)]
        depth: usize,
    },
    /// All-pairs degrees of separation
    Paths,
    /// Partition the network into communities
    Communities {
        /// Maximum edge weight that still merges two groups
        #[arg(long, default_value_t = 1)]
        threshold: u32,
    },
    /// Substring search over profile fields
    Search {
        pattern: String,
        /// Field to match: name, location, interest, or profile
        #[arg(long, default_value = "name")]
        field: String,
        /// Profile-map key (required with --field profile)
        #[arg(long)]
        key: Option<String>,
        /// Matching engine: kmp or rabin-karp
        #[arg(long, default_value_t = MatchAlgorithm::Kmp)]
        algorithm: MatchAlgorithm,
    },
    /// Write the network back out in another format
    Export { output: PathBuf },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let (graph, profiles) = io::load_network(&cli.network)
        .with_context(|| format!("could not load {}", cli.network.display()))?;
    info!(
        users = graph.user_count(),
        "network loaded from {}",
        cli.network.display()
    );

    match cli.command {
        Command::Stats => {
            println!("Users: {}", graph.user_count());
            println!("Connections: {}", graph.edges().len());
        }
        Command::Bfs { user } => {
            let order = algo::bfs(&graph, &UserId::new(user))?;
            println!("{}", join_ids(&order));
        }
        Command::Dfs { user } => {
            let order = algo::dfs(&graph, &UserId::new(user))?;
            println!("{}", join_ids(&order));
        }
        Command::Recommend { user, depth } => {
            let recs = algo::friend_recommendations(&graph, &UserId::new(user), depth)?;
            if recs.is_empty() {
                println!("No recommendations.");
            } else {
                println!("{}", join_ids(&recs));
            }
        }
        Command::Paths => print_distance_matrix(&graph),
        Command::Communities { threshold } => {
            let communities = algo::detect_communities(&graph, threshold);
            for (i, community) in communities.iter().enumerate() {
                println!("Community {}: {}", i + 1, join_ids(community));
            }
        }
        Command::Search {
            pattern,
            field,
            key,
            algorithm,
        } => {
            let hits = run_search(&profiles, &field, key.as_deref(), &pattern, algorithm)?;
            if hits.is_empty() {
                println!("No matching profiles.");
            }
            for profile in hits {
                println!("{profile}");
            }
        }
        Command::Export { output } => {
            io::save_network(&output, &graph, &profiles)
                .with_context(|| format!("could not write {}", output.display()))?;
            println!("Exported {} users to {}", graph.user_count(), output.display());
        }
    }

    Ok(())
}

fn run_search<'a>(
    profiles: &'a [UserProfile],
    field: &str,
    key: Option<&str>,
    pattern: &str,
    algorithm: MatchAlgorithm,
) -> Result<Vec<&'a UserProfile>> {
    let hits = match field {
        "name" => search::search_by_name(profiles, pattern, algorithm),
        "location" => search::search_by_location(profiles, pattern, algorithm),
        "interest" => search::search_by_interest(profiles, pattern, algorithm),
        "profile" => {
            let key = key.context("--field profile requires --key")?;
            search::search_by_profile_data(profiles, key, pattern, algorithm)
        }
        other => bail!("unknown search field: {other}"),
    };
    Ok(hits)
}

fn join_ids(ids: &[UserId]) -> String {
    ids.iter()
        .map(UserId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_distance_matrix(graph: &SocialGraph) {
    let dist = algo::floyd_warshall(graph);
    let users: Vec<&UserId> = graph.users().collect();

    print!("{:>12}", "");
    for user in &users {
        print!("{:>12}", user.as_str());
    }
    println!();

    for (i, user) in users.iter().enumerate() {
        print!("{:>12}", user.as_str());
        for entry in &dist[i] {
            if *entry == INFINITY {
                print!("{:>12}", "-");
            } else {
                print!("{:>12}", entry);
            }
        }
        println!();
    }
}
