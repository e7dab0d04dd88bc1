//! payment-review: render payment service item pricing breakdowns.
//!
//! Single-binary tool that:
//! 1. Loads a payment request's service items from JSON
//! 2. Walks them in review order (basic items batched first-come)
//! 3. Renders the per-item calculation breakdown
//! 4. Prints approved/rejected totals and the authorization gate

mod config;

use std::path::PathBuf;

use anyhow::Context;
use calculation_engine::{CalculationEngine, TableSize};
use clap::Parser;
use common::{ServiceItemCard, ServiceItemCode};
use review_engine::ReviewSession;
use tracing::{debug, error, info};

use crate::config::AppConfig;

/// Payment service item review breakdown tool
#[derive(Parser)]
#[command(name = "payment-review", about = "Render payment service item pricing breakdowns")]
struct Cli {
    /// Path to a JSON file holding the payment request's service items.
    input: PathBuf,

    /// Path to config.toml (defaults to ./config.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Table layout: small suppresses the connective icons.
    #[arg(long, value_parser = ["small", "large"])]
    table_size: Option<String>,

    /// Only show items with this service item code (e.g. DLH).
    #[arg(long)]
    code: Option<String>,

    /// Skip the per-item breakdowns and print only the totals.
    #[arg(long)]
    summary_only: bool,
}

fn main() {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "payment_review=info,calculation_engine=info,review_engine=info".into()
            }),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    // Load configuration.
    let mut cfg = config::load_config(cli.config.as_deref())?;
    if let Some(size) = &cli.table_size {
        cfg.table_size = size.clone();
    }

    let code_filter = match &cli.code {
        Some(raw) => Some(parse_code_filter(raw)?),
        None => None,
    };

    let cards = load_cards(cli)?;
    info!("Loaded {} service item(s) from {}", cards.len(), cli.input.display());

    let engine = build_engine(&cfg);
    let mut session = ReviewSession::new(cards);

    if !cli.summary_only {
        render_items(&mut session, &engine, cfg.table_size(), code_filter);
    }

    render_summary(&session);

    Ok(())
}

fn load_cards(cli: &Cli) -> anyhow::Result<Vec<ServiceItemCard>> {
    let raw = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let cards: Vec<ServiceItemCard> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", cli.input.display()))?;
    Ok(cards)
}

fn parse_code_filter(raw: &str) -> anyhow::Result<ServiceItemCode> {
    let upper = raw.trim().to_ascii_uppercase();
    let code: ServiceItemCode = serde_json::from_value(serde_json::Value::String(upper))
        .with_context(|| format!("Unrecognized service item code: {raw}"))?;
    anyhow::ensure!(
        code != ServiceItemCode::Unknown,
        "Unrecognized service item code: {raw}"
    );
    Ok(code)
}

fn build_engine(cfg: &AppConfig) -> CalculationEngine {
    match cfg.allowed_codes() {
        Some(codes) => {
            info!("Using configured allow-list of {} code(s)", codes.len());
            CalculationEngine::new().with_allowed_codes(codes)
        }
        None => CalculationEngine::new(),
    }
}

fn render_items(
    session: &mut ReviewSession,
    engine: &CalculationEngine,
    size: TableSize,
    code_filter: Option<ServiceItemCode>,
) {
    loop {
        let page = match session.current_page() {
            Some(page) => page.clone(),
            None => break,
        };
        let (ordinal, total) = session.item_position();
        println!("── {ordinal} OF {total} ITEMS ──");

        for index in page.indices() {
            let card = &session.cards()[index];
            if code_filter.is_some_and(|c| c != card.code) {
                debug!(code = card.code.as_str(), "filtered out");
                continue;
            }

            let status = card
                .status
                .map(|s| format!("{s:?}").to_uppercase())
                .unwrap_or_else(|| "UNREVIEWED".to_string());
            println!(
                "{} ({}) — {} [{}]",
                card.name,
                card.code.as_str(),
                calculation_engine::formatters::format_dollars(card.amount),
                status,
            );

            match engine.calculation_table(
                card.code,
                card.amount_cents(),
                &card.params,
                None,
                card.shipment_type,
            ) {
                Some(table) => print!("{}", table.render(size)),
                None => println!("  (no pricing breakdown)"),
            }
            println!();
        }

        if !session.has_next() {
            break;
        }
        session.next();
    }
}

fn render_summary(session: &ReviewSession) {
    let summary = session.summary();
    println!("── REVIEW SUMMARY ──");
    println!(
        "Approved: {}",
        calculation_engine::formatters::format_dollars(summary.totals.approved)
    );
    println!(
        "Rejected: {}",
        calculation_engine::formatters::format_dollars(summary.totals.rejected)
    );

    match session.complete_review() {
        Ok(summary) => println!(
            "Do you authorize this payment of {}?",
            calculation_engine::formatters::format_dollars(summary.totals.approved)
        ),
        Err(e) => println!("Cannot complete review yet: {e}"),
    }
}
