//! # Orderdesk Demo
//!
//! Driver binary that exercises the three Orderdesk subsystems in sequence.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Demo Startup                                    │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Settings Demonstration ───────────────────────────────────────────► │
//! │     • Seed the global store (username = user1)                          │
//! │     • Optionally load ORDERDESK_SETTINGS over the seeds                 │
//! │     • Two concurrent reader tasks resolve the same global instance      │
//! │                                                                         │
//! │  3. Report Demonstration ─────────────────────────────────────────────► │
//! │     • Text and HTML builders driven through the one director            │
//! │                                                                         │
//! │  4. Order Demonstration ──────────────────────────────────────────────► │
//! │     • Order assembled from product copies, then deep-cloned             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Demo output goes to stdout via `println!` (it is the product surface);
//! diagnostics go through `tracing`.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use orderdesk_core::{
    HtmlReportBuilder, Order, OrderTotals, PaymentMethod, Product, ReportDirector,
    TextReportBuilder,
};
use orderdesk_settings::{SettingsError, SettingsState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting Orderdesk demo");

    run_settings_demo().await?;
    run_report_demo();
    run_order_demo()?;

    info!("Demo complete");
    Ok(())
}

/// Initializes tracing (logging).
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,orderdesk=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Seeds the global settings store and reads it from two concurrent tasks.
///
/// The readers start only after the store is populated, so the only race
/// the global accessor has to absorb is the one-time construction itself.
async fn run_settings_demo() -> anyhow::Result<()> {
    let settings = SettingsState::global();
    settings.with_settings_mut(|s| s.set("username", "user1"));

    // Optional file-backed configuration source.
    if let Ok(path) = std::env::var("ORDERDESK_SETTINGS") {
        let loaded = settings
            .with_settings_mut(|s| s.load_from_path(&path))
            .with_context(|| format!("loading settings from {path}"))?;
        info!(%path, loaded, "Settings file applied");
    }

    let readers: Vec<_> = (1..=2)
        .map(|id| {
            tokio::spawn(async move {
                // Each task resolves the global accessor on its own; both
                // observe the one instance seeded above.
                let username =
                    SettingsState::global().with_settings(|s| s.get("username"))?;
                println!("Reader {id} sees setting 'username': {username}");
                Ok::<(), SettingsError>(())
            })
        })
        .collect();

    for reader in readers {
        reader.await??;
    }

    Ok(())
}

/// Builds one report per strategy through the same director sequence.
fn run_report_demo() {
    let director = ReportDirector::new();

    let mut text_builder = TextReportBuilder::new();
    let text_report = director.construct(
        &mut text_builder,
        "Report Header",
        "This is the report content.",
        "Report Footer",
    );

    let mut html_builder = HtmlReportBuilder::new();
    let html_report = director.construct(
        &mut html_builder,
        "Report Header",
        "This is the report content.",
        "Report Footer",
    );

    println!("\nText Report:");
    println!("{text_report}");

    println!("\nHTML Report:");
    println!("{html_report}");
}

/// Assembles an order from product copies, deep-clones it, displays both.
fn run_order_demo() -> anyhow::Result<()> {
    let laptop = Product::new("Laptop", 120_000);
    let smartphone = Product::new("Smartphone", 80_000);

    let mut original = Order::new(5_000, 1_000, PaymentMethod::CreditCard);
    original.add_product(&laptop)?;
    original.add_product(&smartphone)?;

    let cloned = original.clone();

    println!("\nOriginal Order:");
    println!("{original}");

    println!("\nCloned Order:");
    println!("{cloned}");

    let totals = OrderTotals::from(&cloned);
    info!(
        products = totals.product_count,
        total_cents = totals.total_cents,
        "Cloned order totals"
    );

    Ok(())
}
