use anyhow::{Context, Result};
use clap::Parser;
use slotpool_bench::{BenchConfig, DEFAULT_ITERS, Driver};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "slotpool-bench",
    about = "Random insert/delete workload: pool-allocated vs boxed linked list"
)]
struct Cli {
    /// Iterations per insert and delete phase.
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERS)]
    iters: usize,
    /// Run the pool-allocated list (default: both variants).
    #[arg(long)]
    pool: bool,
    /// Run the boxed-node list (default: both variants).
    #[arg(long)]
    classic: bool,
    /// Interleave small heap allocations with inserts.
    #[arg(long)]
    perturb_heap: bool,
    /// Raise log verbosity (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = BenchConfig::new(cli.iters, cli.pool, cli.classic, cli.perturb_heap);
    println!(
        "bench\titers: {}, perturb_heap: {}",
        config.iters, config.perturb_heap
    );

    let outcome = Driver::new(&config)
        .context("failed to set up workloads")?
        .run()
        .context("benchmark run failed")?;

    for (name, stats) in outcome.variants() {
        println!("{}", stats.report(name));
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
