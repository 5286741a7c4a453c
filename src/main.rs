use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use colorq::assets::{AssetLoader, ConfigSource, InitOutcome};
use colorq::models::{AppConfig, ResultRecord};
use colorq::rendering::render_swatch_png;
use colorq::services::{parse_color, CacheStore, InfoRecords, QueryEngine, QueryMode};

#[derive(Parser)]
#[command(name = "colorq")]
#[command(about = "Convert color codes between hex, rgb, vec3 and hsl")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one or more ';'-separated colors and print the results
    Query {
        /// Search text, e.g. "#F00" or "99,197,34;(39,0,152)"
        #[arg(default_value = "")]
        input: String,

        /// Behave like a global query: print nothing for empty or invalid input
        #[arg(long)]
        ambient: bool,

        /// Print records as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Render the swatch for a single color to a PNG file
    Swatch {
        /// Color in any supported notation
        color: String,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Edge length in pixels (defaults to the configured swatch size)
        #[arg(short, long)]
        size: Option<u32>,
    },
    /// Write the embedded config.yaml to CONFIG_FILE (or ./config.yaml) for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorq=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).without_time())
        .init();

    let loader = AssetLoader::from_env();

    match cli.command {
        Some(Commands::Query {
            input,
            ambient,
            json,
        }) => run_query_command(&loader, &input, ambient, json),
        Some(Commands::Swatch {
            color,
            output,
            size,
        }) => run_swatch_command(&loader, &color, &output, size),
        Some(Commands::Init { force }) => run_init_command(&loader, force),
        None => {
            run_status_command(&loader);
            Ok(())
        }
    }
}

fn load_config(loader: &AssetLoader) -> AppConfig {
    let cache_override = std::env::var("CACHE_DIR").ok().map(PathBuf::from);
    AppConfig::load_from_assets(loader).with_cache_dir_override(cache_override)
}

/// Open (and purge) the cache, run one query and print the records
fn run_query_command(
    loader: &AssetLoader,
    input: &str,
    ambient: bool,
    json: bool,
) -> anyhow::Result<()> {
    let config = load_config(loader);

    let mode = if ambient {
        QueryMode::Ambient
    } else {
        QueryMode::from_action_keyword(&config.action_keyword)
    };

    let cache = CacheStore::open(&config.cache_dir, config.swatch_size)?;
    let engine = QueryEngine::new(
        cache,
        InfoRecords::new(config.messages.clone(), config.icon_path.clone()),
    );

    let records = engine.query(input, mode);

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{}", record_line(record));
        }
    }

    Ok(())
}

fn record_line(record: &ResultRecord) -> String {
    format!(
        "{}  [{}]  {}",
        record.title,
        record.subtitle,
        record.icon_path.display()
    )
}

/// Render a swatch directly to a file (no cache involved)
fn run_swatch_command(
    loader: &AssetLoader,
    input: &str,
    output: &Path,
    size: Option<u32>,
) -> anyhow::Result<()> {
    let color =
        parse_color(input).ok_or_else(|| anyhow::anyhow!("Unrecognized color: {input:?}"))?;
    let size = size.unwrap_or_else(|| load_config(loader).swatch_size);

    let png_bytes = render_swatch_png(color, size)?;
    std::fs::write(output, &png_bytes)?;
    println!(
        "Rendered {} {size}x{size} to {} ({} bytes)",
        color,
        output.display(),
        png_bytes.len()
    );

    Ok(())
}

/// Extract the embedded config
fn run_init_command(loader: &AssetLoader, force: bool) -> anyhow::Result<()> {
    match loader.init_config(force)? {
        InitOutcome::Written(path) => println!("Wrote {}", path.display()),
        InitOutcome::Skipped(path) => println!(
            "Skipped existing {} (use --force to overwrite)",
            path.display()
        ),
    }
    Ok(())
}

/// Display status and configuration information
fn run_status_command(loader: &AssetLoader) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config = load_config(loader);

    println!("colorq v{VERSION} - {}", config.messages.plugin_name);
    println!("{}\n", config.messages.plugin_description);

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        std::env::var("CONFIG_FILE").as_deref().unwrap_or("(not set)")
    );
    println!(
        "  CACHE_DIR   = {}",
        std::env::var("CACHE_DIR").as_deref().unwrap_or("(not set)")
    );

    let source = match loader.config_source() {
        ConfigSource::Embedded => "embedded".to_string(),
        ConfigSource::File(path) => path.display().to_string(),
        ConfigSource::Missing(_) => "embedded (file not found)".to_string(),
    };

    println!("\nConfiguration:");
    println!("  Source:         {source}");
    println!("  Cache dir:      {}", config.cache_dir.display());
    println!("  Swatch size:    {}px", config.swatch_size);
    println!("  Action keyword: {}", config.action_keyword);

    println!("\nCommands:");
    println!("  colorq query    Convert colors and print the results");
    println!("  colorq swatch   Render a color swatch to a PNG file");
    println!("  colorq init     Extract the default config.yaml");
    println!("\nRun 'colorq --help' for more details.");
}
