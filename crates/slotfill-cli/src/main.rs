use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "slotfill", version, about = "Pack tasks into free calendar time")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schedule tasks from a JSON request
    Schedule(commands::schedule::ScheduleArgs),
    /// Show free time left by a request's events
    Free(commands::free::FreeArgs),
    /// Show tasks in a strategy's queue order
    Queue(commands::queue::QueueArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SLOTFILL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        Commands::Schedule(args) => commands::schedule::run(args),
        Commands::Free(args) => commands::free::run(args),
        Commands::Queue(args) => commands::queue::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
