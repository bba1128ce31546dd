use anyhow::Result;

use crate::cli::{Cli, Commands};
use octoscout_core::ScrapeConfig;
use octoscout_github::{GitHubClient, RateLimitResource};
use octoscout_scraper::{persist, Scraper};

pub async fn execute(cli: Cli) -> Result<()> {
    let client = GitHubClient::new(cli.github_token.clone())?;

    match cli.command {
        Commands::Scrape {
            location,
            min_followers,
            max_repos,
            users_output,
            repos_output,
        } => {
            let config = ScrapeConfig::default()
                .with_location(location)
                .with_min_followers(min_followers)
                .with_max_repos_per_user(max_repos);

            let scraper = Scraper::new(client, config);
            let outcome = match scraper.run().await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("Scrape failed: {}", e);
                    return Err(e.into());
                }
            };

            persist::write_outcome(&outcome, &users_output, &repos_output)?;

            println!("✓ Scrape complete");
            println!(
                "  Users: {} -> {}",
                outcome.users.len(),
                users_output.display()
            );
            println!(
                "  Repositories: {} -> {}",
                outcome.repositories.len(),
                repos_output.display()
            );
            if outcome.rate_limited {
                println!("  Stopped early on rate limit; partial data saved");
            }
        }

        Commands::Limits { json } => {
            let limits = client.rate_limit().await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&limits)?);
            } else {
                print_resource("core", &limits.core);
                print_resource("search", &limits.search);
            }
        }
    }

    Ok(())
}

fn print_resource(name: &str, resource: &RateLimitResource) {
    println!(
        "{:<8} {}/{} remaining, resets at {}",
        name,
        resource.remaining,
        resource.limit,
        resource.reset_at().format("%Y-%m-%d %H:%M:%S UTC")
    );
}
