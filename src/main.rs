use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cashbook::cli::{confirm_stdin, handle_ledger_command, LedgerCommands};
use cashbook::config::{CashbookPaths, Settings};
use cashbook::services::Ledger;
use cashbook::storage::Store;

#[derive(Parser)]
#[command(
    name = "cashbook",
    version,
    about = "Record cash inflows and outflows and keep a running balance",
    long_about = "cashbook keeps an ordered list of cash inflows and outflows in a \
                  local JSON file and shows the running balance after every change."
)]
struct Cli {
    /// Ledger file to use for this run
    #[arg(short, long, global = true, env = "CASHBOOK_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Write default settings to the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cashbook::logging::init();

    let paths = CashbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ledger_path = cli
        .file
        .clone()
        .unwrap_or_else(|| settings.ledger_path(&paths));

    match cli.command {
        Some(Commands::Ledger(cmd)) => {
            let mut ledger = Ledger::open(Store::new(ledger_path));
            handle_ledger_command(&mut ledger, &settings, cmd, confirm_stdin)?;
        }
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Initialized cashbook at: {}", paths.base_dir().display());
            println!("Settings file: {}", paths.settings_file().display());
            println!("Ledger file:   {}", ledger_path.display());
        }
        Some(Commands::Config) => {
            println!("cashbook Configuration");
            println!("======================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", ledger_path.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Confirm removals:  {}", settings.confirm_removals);
        }
        None => {
            println!("cashbook - track cash inflows and outflows");
            println!();
            println!("Run 'cashbook --help' for usage information.");
            println!("Run 'cashbook list' to see your transactions.");
        }
    }

    Ok(())
}
