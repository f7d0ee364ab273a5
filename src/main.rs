use anyhow::{Context, Result};
use clap::Parser;
use followgraph::graph::GraphStats;
use followgraph::{
    to_artifact, write_artifact, CachedLookup, Config, Crawler, GithubClient, TraversalOptions,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "followgraph")]
#[command(about = "Crawl GitHub follow relationships from a seed account and write graph.json")]
struct Args {
    /// Config file (defaults to FOLLOWGRAPH_CONFIG or ./followgraph.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Account to start from
    #[arg(long)]
    seed: Option<String>,

    /// Maximum expansion depth (seed is depth 0)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Followers / followed accounts recursed into per account
    #[arg(long)]
    branch_limit: Option<usize>,

    /// Output JSON path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Collapse repeated source/target links
    #[arg(long)]
    dedup_edges: bool,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(seed) = self.seed {
            config.crawl.seed_identity = seed;
        }
        if let Some(depth) = self.max_depth {
            config.crawl.max_depth = depth;
        }
        if let Some(limit) = self.branch_limit {
            config.crawl.branch_limit = limit;
        }
        if let Some(output) = self.output {
            config.output.path = output;
        }
        if self.dedup_edges {
            config.crawl.dedup_edges = true;
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize logger from environment variable or default to info level
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("RUST_LOG", "info")
    ).init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        log::error!("=== Error in main process === {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    log::info!("=== Followgraph v{} data collection started ===", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_from(args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    let token = config.github_token();
    if token.is_none() {
        log::warn!(
            "Environment variable {} not set; sending unauthenticated requests (low rate limit)",
            config.github.token_env
        );
    }

    let client = GithubClient::from_config(&config.github, token)?;
    let lookup = CachedLookup::new(client);

    let seed = config.crawl.seed_identity.trim().to_string();
    log::info!(
        "Building network graph starting from user: {} (max_depth={}, branch_limit={})",
        seed,
        config.crawl.max_depth,
        config.crawl.branch_limit
    );

    let result = Crawler::new(&lookup, TraversalOptions::from(&config.crawl))
        .run(&seed)
        .await;

    let artifact = to_artifact(&result.graph);
    write_artifact(config.output_path(), &artifact, config.output.pretty)
        .with_context(|| format!("Failed to write {}", config.output_path().display()))?;

    GraphStats::compute(&artifact, result.visited.len(), lookup.cache().len()).log_summary();

    Ok(())
}
