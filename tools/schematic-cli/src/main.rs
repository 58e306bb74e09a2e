mod commands;
mod format;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use commands::{create_sql::CreateSqlArgs, dialects::DialectsArgs, schema::SchemaArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "schematic",
    about = "Infer warehouse table schemas from CSV files"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a CREATE TABLE statement for a CSV file
    CreateSql(CreateSqlArgs),
    /// Print the inferred, dialect-independent schema
    Schema(SchemaArgs),
    /// List built-in dialects
    Dialects(DialectsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::CreateSql(args) => args.run(),
        Commands::Schema(args) => args.run(),
        Commands::Dialects(args) => args.run(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}
