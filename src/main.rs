use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vehicle_catalog_tools::{Result, ToolError, convert};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;

    match cli.command {
        Some(Command::Template(args)) => convert::write_template(&args.output),
        None => match &cli.workbook {
            Some(workbook) => convert::workbook_to_json(workbook, &cli.output),
            None => convert::csv_dir_to_json(&cli.input_dir, &cli.output),
        },
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert vehicle catalog data into the website JSON feed.",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    /// Excel workbook to read, one worksheet per category. When omitted,
    /// per-category CSV files are read from the template directory instead.
    workbook: Option<PathBuf>,

    /// Directory holding one CSV file per category.
    #[arg(long, default_value = "templates")]
    input_dir: PathBuf,

    /// Path of the generated JSON document.
    #[arg(long, default_value = "data/vehicles.json")]
    output: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write a blank data-entry workbook with one sheet per category.
    Template(TemplateArgs),
}

#[derive(clap::Args)]
struct TemplateArgs {
    /// Destination path of the workbook.
    #[arg(default_value = "vehicles-template.xlsx")]
    output: PathBuf,
}
