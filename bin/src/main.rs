//! Ronda CLI binary.
//!
//! Provides command-line interface for the Ronda valuation screen.

mod data;
mod output;
mod universe;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ronda_core::{SortKey, SortOrder, build_table, compute_ratios};
use ronda_finviz::FinvizClient;
use ronda_yahoo::YahooClient;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "ronda")]
#[command(about = "EV-based valuation screen for equities", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Screen a list of symbols and print the ratio table
    Screen {
        /// Ticker symbol(s)
        #[arg(value_delimiter = ',')]
        symbols: Vec<String>,

        /// Read symbols from a file (one per line, # comments allowed)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Column to sort by
        #[arg(short, long, default_value = "ev_gp")]
        sort: String,

        /// Sort descending instead of ascending
        #[arg(long)]
        desc: bool,

        /// EPS growth horizon (next-y or next-5y)
        #[arg(short = 'H', long, default_value = "next-y")]
        growth_horizon: String,

        /// Write the table to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Skip the Finviz growth lookup
        #[arg(long)]
        no_scrape: bool,
    },

    /// Show the full ratio breakdown for a single symbol
    Quote {
        /// Ticker symbol
        symbol: String,

        /// EPS growth horizon (next-y or next-5y)
        #[arg(short = 'H', long, default_value = "next-y")]
        growth_horizon: String,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Screen {
            symbols,
            file,
            sort,
            desc,
            growth_horizon,
            csv,
            no_scrape,
        } => {
            screen(&symbols, file, &sort, desc, &growth_horizon, csv, no_scrape).await?;
        }
        Commands::Quote {
            symbol,
            growth_horizon,
        } => {
            quote(&symbol, &growth_horizon).await?;
        }
    }

    Ok(())
}

/// Resolve the symbol universe: an explicit file wins, then positional
/// arguments, then the built-in default list.
fn resolve_symbols(symbols: &[String], file: Option<&PathBuf>) -> Result<Vec<String>> {
    if let Some(path) = file {
        return Ok(universe::load_symbol_file(path)?);
    }
    let normalized = universe::normalize(symbols);
    if normalized.is_empty() {
        Ok(universe::default_universe())
    } else {
        Ok(normalized)
    }
}

async fn screen(
    symbols: &[String],
    file: Option<PathBuf>,
    sort: &str,
    desc: bool,
    growth_horizon: &str,
    csv: Option<PathBuf>,
    no_scrape: bool,
) -> Result<()> {
    let sort_key: SortKey = sort.parse()?;
    let sort_order = if desc {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };
    let horizon = data::parse_growth_horizon(growth_horizon)?;
    let symbols = resolve_symbols(symbols, file.as_ref())?;

    let yahoo = YahooClient::new();
    let finviz = (!no_scrape).then(FinvizClient::new);

    let records = data::fetch_universe(&yahoo, finviz.as_ref(), &symbols, horizon).await;
    let table = build_table(records, sort_key, sort_order);

    output::print_table(&table);
    if let Some(path) = csv {
        output::write_csv(&path, &table)?;
        println!("Saved CSV to {}", path.display());
    }

    Ok(())
}

async fn quote(symbol: &str, growth_horizon: &str) -> Result<()> {
    let horizon = data::parse_growth_horizon(growth_horizon)?;
    let symbol = symbol.trim().to_uppercase();

    let yahoo = YahooClient::new();
    let mut record = yahoo.fundamentals(&symbol).await?;

    let finviz = FinvizClient::new();
    match finviz.eps_growth_pct(&symbol, horizon).await {
        Ok(growth) => record.eps_growth_pct = growth,
        Err(e) => eprintln!("Warning: growth lookup failed for {}: {}", symbol, e),
    }

    let ratios = compute_ratios(&record);

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("QUOTE: {symbol} (as of {})", chrono::Utc::now().date_naive());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let metric = |label: &str, value: Option<f64>| {
        println!("  {label:<24} {:>12}", output::fmt_cell(value));
    };

    metric("Price", record.price);
    metric("Target price", record.target_price);
    metric("Upside %", ratios.upside_pct);
    metric("Trailing P/E", record.trailing_pe);
    metric("Forward P/E", record.forward_pe);
    metric("Price/Sales", record.price_to_sales);
    metric("EPS growth %", record.eps_growth_pct);
    metric("Revenue growth %", record.revenue_growth_pct);
    metric("Trailing PEG", ratios.trailing_peg);
    metric("Forward PEG", ratios.forward_peg);
    metric("EV-based PEG", ratios.ev_peg);
    metric("Provider PEG", record.provider_peg);
    metric("EV/EBITDA", ratios.ev_to_ebitda);
    metric("EV/GP", ratios.ev_to_gross_profit);
    metric("EV/GP/RevGrowth", ratios.ev_gp_to_rev_growth);
    metric("Insiders %", record.insider_pct);
    println!(
        "  {:<24} {:>12}",
        "Analysts",
        record
            .analyst_count
            .map_or_else(|| "N/A".to_string(), |n| n.to_string())
    );
    println!(
        "  {:<24} {:>12}",
        "Recommendation",
        record.recommendation.as_deref().unwrap_or("N/A")
    );
    println!();

    Ok(())
}
