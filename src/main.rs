use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use tapesched::cli::{Cli, Command, DEMO_ORDERS};
use tapesched::config::SchedulerConfig;
use tapesched::input::load_orders;
use tapesched::orchestrator::OrderOrchestrator;
use tapesched::state_machine::Tape;
use tapesched::ui::ScheduleView;

fn main() {
    let cli = Cli::parse();
    let view = ScheduleView::new();

    if let Err(e) = run(cli, &view) {
        error!("Error processing orders: {e:#}");
        view.print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

/// Filter used when `RUST_LOG` is unset. Without a loaded config the
/// default level applies, so a failed config load is still logged.
fn fallback_filter(config: Option<&SchedulerConfig>, verbose: bool) -> String {
    if verbose {
        return "debug".to_string();
    }
    config
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|| SchedulerConfig::default().log_level)
}

fn init_tracing(config: Option<&SchedulerConfig>, verbose: bool) {
    let fallback = fallback_filter(config, verbose);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli, view: &ScheduleView) -> Result<()> {
    let loaded = match &cli.config {
        Some(path) => SchedulerConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => SchedulerConfig::load().context("failed to load tapesched.toml"),
    };
    init_tracing(loaded.as_ref().ok(), cli.verbose);
    let config = loaded?.with_overrides(cli.machines, cli.rate);

    config.validate()?;
    let mut orchestrator = OrderOrchestrator::new(&config)?;

    let schedule = match cli.command {
        Command::Table => {
            view.print_table(orchestrator.table());
            return Ok(());
        }
        Command::Run {
            tape: Some(raw), ..
        } => orchestrator.process_tape(Tape::parse(&raw))?,
        Command::Run {
            file: Some(path), ..
        } => {
            let orders = load_orders(&path)
                .with_context(|| format!("failed to read orders from {}", path.display()))?;
            orchestrator.process_orders(&orders)?
        }
        Command::Run { orders, .. } => {
            if !cli.json {
                println!("Orders: {orders:?}");
            }
            orchestrator.process_orders(&orders)?
        }
        Command::Demo => {
            if !cli.json {
                println!("Orders: {DEMO_ORDERS:?}");
            }
            orchestrator.process_orders(&DEMO_ORDERS)?
        }
    };

    if cli.json {
        view.print_json(&schedule);
    } else {
        view.print(&schedule);
        if let Some(tape) = orchestrator.final_tape() {
            view.print_tape(tape);
        }
    }

    Ok(())
}
