use clap::{Parser, Subcommand};
use site_core::publish::{sitemap_urls, sitemap_xml};
use site_core::{build_site, load_site_config, PageStatus, Site};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "site")]
#[command(about = "Build and inspect the trade-law website")]
struct Cli {
    /// YAML file overriding the built-in site details
    #[arg(long, env = "SITE_CONFIG", global = true)]
    config: Option<PathBuf>,
    /// Base URL for canonical links
    #[arg(long, env = "SITE_BASE_URL", global = true)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every page into a directory
    Build {
        /// Output directory
        #[arg(long, default_value = "dist")]
        out: PathBuf,
    },
    /// List all articles
    Articles,
    /// Print one article as JSON
    Article {
        /// Article id
        id: String,
    },
    /// Print the rendered <head> for a route such as /news or #article/<id>
    Head {
        /// Path or fragment
        route: String,
    },
    /// Print sitemap.xml
    Sitemap,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(Cli::parse())
}

/// Execute one command. Build failures and unknown article ids are returned as errors so the
/// process exits non-zero.
fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = load_site_config(cli.config.as_deref(), cli.base_url)?;
    let site = Site::new(cfg)?;

    match cli.command {
        Some(Commands::Build { out }) => {
            let summary = build_site(&site, &out)?;
            println!(
                "Built {} pages into {} (sitemap: {})",
                summary.pages,
                out.display(),
                summary.sitemap.display()
            );
        }
        Some(Commands::Articles) => {
            let items = site.content().news_items();
            if items.is_empty() {
                println!("No articles found.");
            } else {
                for item in items {
                    println!("ID: {}, Title: {}, Link: {}", item.id, item.title, item.link);
                }
            }
        }
        Some(Commands::Article { id }) => match site.content().find_by_id(&id) {
            Some(article) => println!("{}", serde_json::to_string_pretty(article)?),
            None => return Err(format!("Article not found: {}", id).into()),
        },
        Some(Commands::Head { route }) => {
            let page = site.render_path(&route);
            if page.status == PageStatus::NotFound {
                eprintln!("No page for {}; showing the not-found head", route);
            }
            println!("{}", page.head(site.config())?.render());
        }
        Some(Commands::Sitemap) => {
            print!("{}", sitemap_xml(&sitemap_urls(&site)));
        }
        None => {
            println!("Use 'site --help' for commands");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["site", "--base-url", "https://example.test"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn build_writes_site() {
        let out = TempDir::new().unwrap();
        let dir = out.path().to_str().unwrap();

        run(cli(&["build", "--out", dir])).unwrap();
        assert!(out.path().join("sitemap.xml").is_file());
    }

    #[test]
    fn failed_build_is_an_error() {
        let dir = TempDir::new().unwrap();
        let occupied = dir.path().join("occupied");
        std::fs::write(&occupied, "x").unwrap();

        let result = run(cli(&["build", "--out", occupied.to_str().unwrap()]));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_article_is_an_error() {
        let err = run(cli(&["article", "no-such-article"])).unwrap_err();
        assert!(err.to_string().contains("no-such-article"));
    }

    #[test]
    fn unknown_route_still_prints_a_head() {
        assert!(run(cli(&["head", "/nowhere/at/all"])).is_ok());
    }
}
