//! solid-ldp CLI: LDP resource operations and WebID profile resolution.
//!
//! Usage:
//!   solid-ldp profile <url> [--json]
//!   solid-ldp get <url> [--json]
//!   solid-ldp head | delete <url>
//!   solid-ldp post <container> [--slug S] [--container] [--file F]
//!   solid-ldp put <url> [--file F]
//!   solid-ldp webid [url]
//!   solid-ldp workspaces <webid>

use clap::{Parser, Subcommand};
use solid_ldp::{
    with_webid, Config, Graph, HttpClient, ProfileAggregator, ProfileOutcome, ResourceClient,
    ResourceKind,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "solid-ldp",
    version,
    about = "Linked Data Platform client and WebID profile resolver"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Path to a YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a profile and every document it links to
    Profile {
        url: String,
        /// Print JSON instead of N-Quads
        #[arg(long)]
        json: bool,
    },
    /// Fetch and parse a single RDF document
    Get {
        url: String,
        #[arg(long)]
        json: bool,
    },
    /// Show LDP metadata for a resource
    Head { url: String },
    /// Create a resource inside a container
    Post {
        /// Container URL
        url: String,
        /// Suggested name for the new resource
        #[arg(long)]
        slug: Option<String>,
        /// Create a basic container instead of a resource
        #[arg(long)]
        container: bool,
        /// Turtle file to send as the body
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Create or replace a resource
    Put {
        url: String,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Delete a resource
    Delete { url: String },
    /// Print the WebID the server reports for the current user
    Webid {
        /// Resource to ask first (defaults to the auth endpoint)
        url: Option<String>,
    },
    /// List workspaces declared in a profile
    Workspaces { webid: String },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<PathBuf>) -> Result<Config, String> {
    match path.or_else(|| Config::default_path().filter(|p| p.exists())) {
        Some(path) => Config::load(&path)
            .map_err(|e| format!("Failed to load config '{}': {}", path.display(), e)),
        None => Ok(Config::default()),
    }
}

fn read_body(file: Option<&Path>) -> Result<Option<String>, String> {
    file.map(|path| {
        std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e))
    })
    .transpose()
}

fn print_graph(graph: &Graph, json: bool) -> i32 {
    if !json {
        print!("{}", graph.to_ntriples());
        return 0;
    }
    match serde_json::to_string_pretty(graph) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

async fn cmd_profile(client: Arc<HttpClient>, url: &str, json: bool) -> i32 {
    let aggregator = ProfileAggregator::new(client);
    let profile = match aggregator.get_profile(url).await {
        ProfileOutcome::Loaded(profile) => profile,
        ProfileOutcome::SeedFailed(err) => {
            eprintln!("Error: could not load {}: {}", url, err);
            return 1;
        }
    };
    for failure in &profile.failures {
        eprintln!("Warning: {} ({}): {}", failure.url, failure.relation, failure.error);
    }
    if !json {
        return print_graph(&profile.graph, false);
    }
    match serde_json::to_string_pretty(&profile) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

async fn cmd_get(client: &HttpClient, url: &str, json: bool) -> i32 {
    match client.get(url).await {
        Ok(graph) => print_graph(&graph, json),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

async fn cmd_head(client: &HttpClient, url: &str) -> i32 {
    let meta = match client.head(url).await {
        Ok(meta) => meta,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    match serde_json::to_string_pretty(&meta) {
        Ok(text) => {
            println!("{}", text);
            if meta.err.is_some() {
                1
            } else {
                0
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

async fn cmd_post(
    client: &HttpClient,
    url: &str,
    slug: Option<&str>,
    container: bool,
    file: Option<&Path>,
) -> i32 {
    let body = match read_body(file) {
        Ok(body) => body,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let kind = ResourceKind::from_container_flag(container);
    match client.post(url, slug, body, kind).await {
        Ok(meta) => {
            println!("Created {}", meta.url.as_deref().unwrap_or(url));
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

async fn cmd_put(client: &HttpClient, url: &str, file: Option<&Path>) -> i32 {
    let body = match read_body(file) {
        Ok(body) => body,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    match client.put(url, body).await {
        Ok(_) => {
            println!("Stored {}", url);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

async fn cmd_delete(client: &HttpClient, url: &str) -> i32 {
    match client.delete(url).await {
        Ok(()) => {
            println!("Deleted {}", url);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

async fn cmd_webid(client: &HttpClient, url: Option<&str>) -> i32 {
    let config = client.config();
    let url = url.unwrap_or(config.auth_endpoint.as_str());
    match with_webid(client, url, config).await {
        Ok(webid) => {
            println!("{}", webid);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

async fn cmd_workspaces(client: Arc<HttpClient>, webid: &str) -> i32 {
    match ProfileAggregator::new(client).workspaces(webid).await {
        Ok(workspaces) if workspaces.is_empty() => {
            println!("No workspaces declared.");
            0
        }
        Ok(workspaces) => {
            for ws in workspaces {
                println!("{}", ws);
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match load_config(cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let client = match HttpClient::new(config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Profile { url, json } => cmd_profile(client, &url, json).await,
        Commands::Get { url, json } => cmd_get(&client, &url, json).await,
        Commands::Head { url } => cmd_head(&client, &url).await,
        Commands::Post {
            url,
            slug,
            container,
            file,
        } => cmd_post(&client, &url, slug.as_deref(), container, file.as_deref()).await,
        Commands::Put { url, file } => cmd_put(&client, &url, file.as_deref()).await,
        Commands::Delete { url } => cmd_delete(&client, &url).await,
        Commands::Webid { url } => cmd_webid(&client, url.as_deref()).await,
        Commands::Workspaces { webid } => cmd_workspaces(client, &webid).await,
    };
    std::process::exit(code);
}
