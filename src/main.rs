//! cse-phone-scan CLI - Google Custom Search dorks for a phone number.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cse_phone_scan::{
    DorkSet, GoogleCseScanner, PhoneNumber, ScanResponse, Scanner, ScannerConfig, ENV_API_KEY,
    ENV_ENGINE_ID,
};

/// cse-phone-scan - Phone number OSINT through Google Custom Search
#[derive(Parser)]
#[command(name = "cse-phone-scan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every dork against the configured Custom Search engine
    Scan(ScanArgs),

    /// Print the dorks generated for a number
    Dorks(NumberArgs),
}

#[derive(Args)]
struct NumberArgs {
    /// Phone number in E.164 format (e.g. +14152229670)
    number: String,

    /// Country calling code (e.g. 1)
    #[arg(short = 'c', long)]
    country_code: Option<u16>,

    /// National number as commonly written
    #[arg(short, long)]
    local: Option<String>,

    /// Country (e.g. US)
    #[arg(long)]
    country: Option<String>,

    /// Carrier name
    #[arg(long)]
    carrier: Option<String>,
}

#[derive(Args)]
struct ScanArgs {
    #[command(flatten)]
    number: NumberArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    match cli.command {
        Commands::Scan(args) => run_scan(args).await,
        Commands::Dorks(args) => list_dorks(args),
    }
}

fn build_number(args: &NumberArgs) -> PhoneNumber {
    let mut number = PhoneNumber::new(&args.number);
    if let Some(local) = &args.local {
        number = number.with_local(local);
    }
    if let Some(code) = args.country_code {
        number = number.with_country_code(code);
    }
    if let Some(country) = &args.country {
        number = number.with_country(country);
    }
    if let Some(carrier) = &args.carrier {
        number = number.with_carrier(carrier);
    }
    number
}

fn list_dorks(args: NumberArgs) -> Result<()> {
    let number = build_number(&args);
    println!("Dorks for {}\n", number);

    for (category, dorks) in DorkSet::default().by_category(&number) {
        println!("{} ({}):", category, dorks.len());
        for dork in dorks {
            println!("  {}", dork);
            println!("    {}", dork.google_url());
        }
        println!();
    }
    Ok(())
}

async fn run_scan(args: ScanArgs) -> Result<()> {
    let number = build_number(&args.number);
    let scanner = GoogleCseScanner::new(ScannerConfig::from_env());

    if !scanner.should_run(&number) {
        anyhow::bail!(
            "{} is not configured: set {} and {}",
            scanner.name(),
            ENV_ENGINE_ID,
            ENV_API_KEY
        );
    }

    let response = scanner.scan(&number).await?;

    match args.format {
        OutputFormat::Text => {
            println!("Number: {}", number);
            print_text(&response);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
    }

    Ok(())
}

fn print_text(response: &ScanResponse) {
    if !response.homepage.is_empty() {
        println!("Homepage: {}", response.homepage);
    }
    println!("Result count: {}", response.result_count);

    if response.items.is_empty() {
        return;
    }
    println!("Items:");
    for (i, item) in response.items.iter().enumerate() {
        println!("{}. {}", i + 1, item.title);
        if !item.url.is_empty() {
            println!("   URL: {}", item.url);
        }
    }
}
