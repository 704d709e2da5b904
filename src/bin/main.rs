//! Digital Latin Library JSON-LD CLI
//!
//! Serve catalog records as JSON-LD over HTTP, or render a single record.

use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use dll_jsonld::{
    dispatch, load_catalog, serve, to_json_string, ContentType, JsonLdError, Lookups,
    MemoryCatalog, RecordStore,
};

#[derive(Parser)]
#[command(name = "dll-jsonld")]
#[command(about = "Serve Digital Latin Library catalog records as JSON-LD")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve JSON-LD documents over HTTP
    Serve(ServeArgs),
    /// Render one record as JSON-LD
    Render(RenderArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Path or URL of the catalog dump
    #[arg(long)]
    catalog: String,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Override the public base URL used for @id and references
    #[arg(long)]
    base_url: Option<Url>,
}

#[derive(Args)]
struct RenderArgs {
    /// Path or URL of the catalog dump
    #[arg(long)]
    catalog: String,

    /// Content type: author, work, item-record or web-page
    #[arg(long = "type", value_name = "TYPE")]
    content_type: ContentType,

    /// External identifier (field_unique_id) of the record
    #[arg(long)]
    id: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Override the public base URL used for @id and references
    #[arg(long)]
    base_url: Option<Url>,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dll_jsonld=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_catalog(source: &str, base_url: Option<Url>) -> Result<MemoryCatalog, JsonLdError> {
    let mut catalog = load_catalog(source)?;
    if let Some(base_url) = base_url {
        catalog.set_base_url(base_url);
    }
    Ok(catalog)
}

/// Write output to file or stdout
fn write_output(content: &str, output: Option<&PathBuf>) -> Result<(), JsonLdError> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            tracing::info!(path = %path.display(), "Wrote JSON-LD document");
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

fn run_serve(args: ServeArgs) -> Result<(), JsonLdError> {
    // Load before starting the runtime: URL sources use a blocking client
    let catalog = open_catalog(&args.catalog, args.base_url)?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(catalog, args.bind))
}

fn run_render(args: RenderArgs) -> Result<(), JsonLdError> {
    let catalog = open_catalog(&args.catalog, args.base_url)?;

    let record = catalog
        .load_by_type_and_external_id(args.content_type, &args.id)
        .ok_or_else(|| JsonLdError::NotFound {
            content_type: args.content_type.to_string(),
            id: args.id.clone(),
        })?;

    let doc = dispatch(&record, Lookups::from_catalog(&catalog));
    let output = to_json_string(&doc, args.pretty)?;
    write_output(&output, args.output.as_ref())
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => run_serve(args),
        Commands::Render(args) => run_render(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
