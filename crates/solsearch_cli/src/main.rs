//! SolSearch command-line front end.
//!
//! # Responsibility
//! - Validate raw user input before it reaches the store.
//! - Map subcommands onto store and reporting calls and print results.
//!
//! # Invariants
//! - Recoverable failures print a message and exit non-zero; nothing panics.

mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::Confirm;
use log::warn;
use solsearch_core::{
    default_log_level, export_to_path, init_logging, ApplicationId, ApplicationOrder,
    ApplicationStatus, ApplicationStore, NewApplication, Reporter, StoreConfig,
    DEFAULT_DB_FILE_NAME, DEFAULT_EXPORT_FILE_NAME,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// SolSearch - personal job application tracker
#[derive(Parser, Debug)]
#[command(name = "solsearch")]
#[command(version, about, long_about = None)]
struct Cli {
    /// SQLite database file
    #[arg(long, global = true, env = "SOLSEARCH_DB", default_value = DEFAULT_DB_FILE_NAME)]
    db: PathBuf,

    /// Absolute directory for rolling log files (logging is off when unset)
    #[arg(long, global = true, env = "SOLSEARCH_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, global = true, env = "SOLSEARCH_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Log a new application
    Add {
        #[arg(long)]
        company: String,
        #[arg(long)]
        role: String,
        /// Date applied (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Applied, Interview, Rejected or Offer
        #[arg(long, default_value = "Applied")]
        status: String,
        /// 1 (low) to 5 (high)
        #[arg(long)]
        priority: String,
    },

    /// Show application history
    List {
        #[arg(short, long, value_enum, default_value_t = SortKey::Id)]
        sort: SortKey,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Change the status of an application
    UpdateStatus {
        id: ApplicationId,
        /// Applied, Interview, Rejected or Offer
        status: String,
    },

    /// Delete an application
    Delete {
        id: ApplicationId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Funnel, priority alignment and status chart
    Report {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Export every application to CSV
    Export {
        #[arg(short, long, default_value = DEFAULT_EXPORT_FILE_NAME)]
        output: PathBuf,

        #[arg(short, long, value_enum, default_value_t = SortKey::Id)]
        sort: SortKey,
    },

    /// Delete every application and restart ids at 1
    Reset {
        /// Required; there is no undo
        #[arg(long)]
        yes: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SortKey {
    Id,
    IdDesc,
    Company,
    Status,
    /// High to low
    Priority,
    PriorityAsc,
}

impl From<SortKey> for ApplicationOrder {
    fn from(value: SortKey) -> Self {
        match value {
            SortKey::Id => ApplicationOrder::IdAsc,
            SortKey::IdDesc => ApplicationOrder::IdDesc,
            SortKey::Company => ApplicationOrder::CompanyAsc,
            SortKey::Status => ApplicationOrder::StatusAsc,
            SortKey::Priority => ApplicationOrder::PriorityDesc,
            SortKey::PriorityAsc => ApplicationOrder::PriorityAsc,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        // Logging problems never block tracking work.
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let store = ApplicationStore::open(StoreConfig::file(&cli.db))
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;

    match cli.command {
        Commands::Add {
            company,
            role,
            date,
            status,
            priority,
        } => {
            let application = NewApplication::parse(&company, &role, &date, &status, &priority)?;
            let id = store.insert(&application)?;
            println!("Application logged with ID {id}.");
        }
        Commands::List { sort, json } => {
            let applications = store.query(sort.into())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&applications)?);
            } else {
                print!("{}", render::ApplicationTable(&applications));
            }
        }
        Commands::UpdateStatus { id, status } => {
            let status: ApplicationStatus = status.parse()?;
            match store.update_status(id, status)? {
                0 => bail!("no application with ID {id}"),
                _ => println!("Status of ID {id} set to {status}."),
            }
        }
        Commands::Delete { id, yes } => {
            let Some(application) = store.get(id)? else {
                bail!("no application with ID {id}");
            };
            let confirmed = yes
                || Confirm::new()
                    .with_prompt(format!(
                        "Delete ID {id} ({} - {})?",
                        application.company, application.role
                    ))
                    .default(false)
                    .interact()
                    .context("confirmation prompt failed")?;
            if !confirmed {
                println!("Cancelled.");
                return Ok(());
            }
            match store.delete(id)? {
                0 => {
                    // Removed by someone else between the lookup and the delete.
                    warn!("event=cli_delete module=cli status=not_found id={id}");
                    bail!("no application with ID {id}");
                }
                _ => println!("Application {id} deleted."),
            }
        }
        Commands::Report { json } => {
            let dashboard = Reporter::new(&store).dashboard()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&dashboard)?);
            } else {
                print!("{}", render::DashboardView(&dashboard));
            }
        }
        Commands::Export { output, sort } => {
            let table = Reporter::new(&store).export_rows(sort.into())?;
            export_to_path(&table, &output)
                .with_context(|| format!("failed to export to `{}`", output.display()))?;
            println!(
                "Exported {} applications to '{}'.",
                table.rows.len(),
                output.display()
            );
        }
        Commands::Reset { yes } => {
            if !yes {
                bail!("reset deletes every application; pass --yes to confirm");
            }
            let removed = store.reset()?;
            println!("Removed {removed} applications; IDs restart at 1.");
        }
    }

    Ok(())
}
