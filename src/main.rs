use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use finsight::cli::{
    handle_breakdown_report, handle_budgets_report, handle_categories_report,
    handle_config_command, handle_export_command, handle_transaction_details,
    handle_transactions_list, handle_trends_report, ConfigCommands, ExportCommands,
};
use finsight::config::{paths::FinsightPaths, settings::Settings};
use finsight::models::CalendarReference;

#[derive(Parser)]
#[command(
    name = "finsight",
    version,
    about = "Charts and exports for personal-finance API data",
    long_about = "finsight reads transaction and budget payloads saved from the \
                  finance API and turns them into monthly trend charts, category \
                  and budget views, CSV spreadsheets and print-ready reports."
)]
struct Cli {
    /// Calendar to read dates in: utc, local, or an offset like +05:30
    #[arg(long, global = true, allow_hyphen_values = true)]
    calendar: Option<CalendarReference>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly income and expense trends
    Trends {
        /// JSON file of transactions
        file: PathBuf,
    },

    /// Income vs expense split and totals
    Breakdown {
        /// JSON file of transactions
        file: PathBuf,
    },

    /// Spending by category
    Categories {
        /// JSON file of category breakdown rows
        file: PathBuf,
    },

    /// Budget limits against spending
    Budgets {
        /// JSON file of budget statuses
        file: PathBuf,
    },

    /// Paged transaction register
    #[command(alias = "txn")]
    Transactions {
        /// JSON file of transactions
        file: PathBuf,

        /// Page to show, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Rows per page (default from settings)
        #[arg(long)]
        page_size: Option<usize>,

        /// Show one transaction in full instead of a page
        #[arg(long, conflicts_with_all = ["page", "page_size"])]
        id: Option<String>,
    },

    /// Export transactions, budgets or trends to a file
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_env("FINSIGHT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("finsight={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = FinsightPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(calendar) = cli.calendar {
        settings.calendar = calendar;
    }

    match cli.command {
        Some(Commands::Trends { file }) => handle_trends_report(&settings, &file)?,
        Some(Commands::Breakdown { file }) => handle_breakdown_report(&settings, &file)?,
        Some(Commands::Categories { file }) => handle_categories_report(&settings, &file)?,
        Some(Commands::Budgets { file }) => handle_budgets_report(&settings, &file)?,
        Some(Commands::Transactions {
            file,
            page,
            page_size,
            id,
        }) => match id {
            Some(id) => handle_transaction_details(&settings, &file, &id)?,
            None => handle_transactions_list(&settings, &file, page, page_size)?,
        },
        Some(Commands::Export(cmd)) => handle_export_command(&settings, cmd)?,
        Some(Commands::Config { action }) => handle_config_command(&paths, &settings, action)?,
        None => {
            println!("finsight - charts and exports for personal-finance data");
            println!();
            println!("Run 'finsight --help' for usage information.");
        }
    }

    Ok(())
}
