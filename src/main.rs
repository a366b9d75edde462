use clap::{Args, Parser, Subcommand};
use hive_spanish_search::{
    api::{EmptySearchResponse, SearchResponse},
    config::AppConfig,
    format_reputation, server, HiveApi, HiveClient, SearchCriteria, SearchOutcome, SearchPipeline,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hive-spanish-search",
    about = "Find recent #spanish Hive posts by emerging authors"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Serve(ServeArgs),
    Search(SearchArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct ServeArgs {
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug, Clone)]
struct SearchArgs {
    #[arg(long)]
    limit: Option<String>,
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let (config, config_path) = AppConfig::load(cli.config).map_err(|err| err.to_string())?;
    if let Some(path) = config_path.filter(|path| path.exists()) {
        info!(path = %path.display(), "loaded config");
    }

    let hive = HiveClient::from_config(&config.hive);
    info!(node = hive.node_url(), "using hive node");
    let hive: Arc<dyn HiveApi> = Arc::new(hive);

    match cli.command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => {
            let mut server_config = config.server;
            if let Some(host) = args.host {
                server_config.host = host;
            }
            if let Some(port) = args.port {
                server_config.port = port;
            }
            server::serve(&server_config, hive)
                .await
                .map_err(|err| format!("server error: {}", err))
        }
        Command::Search(args) => run_search(args, hive).await,
    }
}

async fn run_search(args: SearchArgs, hive: Arc<dyn HiveApi>) -> Result<(), String> {
    let pipeline = SearchPipeline::new(hive, SearchCriteria::default());
    let criteria = *pipeline.criteria();
    let limit = criteria
        .parse_fetch_limit(args.limit.as_deref())
        .map_err(|err| err.to_string())?;

    let outcome = pipeline.run(limit).await.map_err(|err| err.to_string())?;

    let results = match outcome {
        SearchOutcome::Empty => {
            let empty = EmptySearchResponse::for_tag(criteria.tag);
            if args.json {
                print_json(&empty)?;
            } else {
                println!("{}", empty.message);
            }
            return Ok(());
        }
        SearchOutcome::Found(results) => results,
    };

    if args.json {
        return print_json(&SearchResponse::new(&criteria, limit, results));
    }

    println!(
        "Found {} of {} recent #{} posts (last {} days, reputation {}-{}, <= {} votes)",
        results.posts.len(),
        results.fetched,
        criteria.tag,
        criteria.time_window_days,
        criteria.min_reputation,
        criteria.max_reputation,
        criteria.max_votes
    );
    if results.fetched >= limit as usize {
        println!("Note: only the newest {} posts were examined.", limit);
    }
    for post in &results.posts {
        println!(
            "- {} by @{} (rep {}, votes {}, created {})\n  {}",
            post.title,
            post.author,
            format_reputation(post.author_reputation),
            post.net_votes.flatten().unwrap_or(0),
            post.created,
            post.url
        );
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize results: {}", err))?;
    println!("{}", payload);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
