use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use amazonjp_price_checker::config::{load_config, AppConfig};
use amazonjp_price_checker::fetch::PageFetcher;
use amazonjp_price_checker::notify::{ConsoleNotifier, Notifier};
use amazonjp_price_checker::product::{resolve_product_id, NEVER_NOTIFY};
use amazonjp_price_checker::storage::{read_products, read_products_or_default, write_products};
use amazonjp_price_checker::update::{add_product, check_products, ProductUpdater};

#[derive(Debug, Parser)]
#[command(name = "amazonjp-price-checker", version, about = "Price tracker for amazon.co.jp products")]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Settings file (defaults to ./Settings.toml when present).
    #[arg(global = true, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Increase logging verbosity (-v, -vv).
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a product to the tracked list.
    Add(AddArgs),
    /// Refresh every tracked product and report the ones at or below their price.
    Check(CheckArgs),
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("product").required(true).args(["id", "url"])))]
struct AddArgs {
    /// Product id.
    #[arg(long)]
    id: Option<String>,
    /// Product page URL.
    #[arg(long)]
    url: Option<String>,
    /// Notify when price minus points is at or below this value; -1 never notifies.
    #[arg(long, default_value_t = NEVER_NOTIFY, allow_negative_numbers = true)]
    price: i64,
    /// Tracked products file, created if missing.
    #[arg(long, value_name = "FILE")]
    file: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct CheckArgs {
    /// Tracked products file.
    #[arg(long, value_name = "FILE")]
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_err()
    {
        eprintln!("Tracing subscriber already set; skipping re-initialization.");
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Add(args) => add(&config, args).await,
        Command::Check(args) => check(&config, args).await,
    }
}

fn updater(config: &AppConfig) -> Result<ProductUpdater<PageFetcher>> {
    let fetcher = PageFetcher::new(&config.site.user_agent, config.request_timeout())
        .context("Failed to build HTTP client")?;
    Ok(ProductUpdater::with_base_url(fetcher, config.site.base_url.clone()))
}

async fn add(config: &AppConfig, args: AddArgs) -> Result<()> {
    let input = args.id.or(args.url).unwrap_or_default();
    let id = resolve_product_id(&input)?;
    let path = args.file.unwrap_or_else(|| config.file.products.clone());

    let mut products = read_products_or_default(&path)?;
    let updater = updater(config)?;
    let added = add_product(&updater, &mut products, &id, args.price).await?;
    print!("{}", added.product.summary(updater.base_url()));

    write_products(&path, &products)?;
    println!("{} \"{}\"", "Added".green(), products[products.len() - 1].product.title);
    Ok(())
}

async fn check(config: &AppConfig, args: CheckArgs) -> Result<()> {
    let path = args.file.unwrap_or_else(|| config.file.products.clone());

    let mut products = read_products(&path)?;
    let updater = updater(config)?;
    info!("Checking {} products from {}", products.len(), path.display());

    let report = check_products(&updater, &mut products, &config.check_options()).await;
    write_products(&path, &products)?;

    let summary = format!(
        "{} updated, {} failed, {} to notify",
        report.updated,
        report.failures.len(),
        report.notifications.len()
    );
    if report.failures.is_empty() {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.yellow());
    }

    ConsoleNotifier.notify(&report.notifications)
}
