use std::path::PathBuf;

use clap::{Parser, Subcommand};

use octoscout_core::config::{
    DEFAULT_LOCATION, DEFAULT_MAX_REPOS_PER_USER, DEFAULT_MIN_FOLLOWERS,
};

#[derive(Parser)]
#[command(name = "octoscout")]
#[command(about = "Scrape GitHub user profiles and repositories by location", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// GitHub personal access token
    #[arg(long, env = "GITHUB_TOKEN")]
    pub github_token: String,

    /// Log file receiving a copy of the event stream
    #[arg(long, default_value = "octoscout.log")]
    pub log_file: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape matching users and their repositories into two JSON documents
    Scrape {
        /// Location filter for the user search
        #[arg(long, default_value = DEFAULT_LOCATION)]
        location: String,

        /// Minimum follower count for the user search
        #[arg(long, default_value_t = DEFAULT_MIN_FOLLOWERS)]
        min_followers: u32,

        /// Maximum repositories extracted per user
        #[arg(long, default_value_t = DEFAULT_MAX_REPOS_PER_USER)]
        max_repos: usize,

        /// Output document for user records
        #[arg(long, default_value = "users.json")]
        users_output: PathBuf,

        /// Output document for repository records
        #[arg(long, default_value = "repository_data.json")]
        repos_output: PathBuf,
    },

    /// Show the token's core and search rate-limit status
    Limits {
        /// Print as JSON instead of plain lines
        #[arg(long)]
        json: bool,
    },
}
