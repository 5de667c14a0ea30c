//! Reclaim CLI - lost-and-found registry client.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod client;
mod commands;

use client::ApiClient;

#[derive(Parser)]
#[command(name = "reclaim")]
#[command(author, version, about = "Lost-and-found report registry client", long_about = None)]
struct Cli {
    /// Registry server base URL
    #[arg(
        long,
        global = true,
        env = "RECLAIM_SERVER",
        default_value = "http://127.0.0.1:3000"
    )]
    server: String,

    /// Caller principal id, required by mutating commands
    #[arg(long, global = true, env = "RECLAIM_CALLER")]
    caller: Option<String>,

    /// Print raw JSON responses instead of formatted output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a lost or found report
    Report {
        /// Report kind
        #[arg(long, value_parser = ["lost", "found"])]
        kind: String,

        /// Item category; match candidates must agree exactly
        #[arg(long)]
        category: String,

        #[arg(long)]
        description: String,

        /// Content-addressed reference to the item media
        #[arg(long)]
        media_ref: String,

        /// 64-character hex feature digest from the embedding service
        #[arg(long)]
        digest: String,

        /// Confidence on the 0..=10000 fixed-point scale
        #[arg(long)]
        confidence: u16,

        #[arg(long)]
        location: String,
    },

    /// Fetch a single report
    Show {
        /// Report id
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// List reports
    List {
        /// Filter by kind ("lost" or "found")
        #[arg(long, value_parser = ["lost", "found"])]
        kind: Option<String>,

        /// Filter by status
        #[arg(long, value_parser = ["open", "matched", "claimed", "closed"])]
        status: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: u64,

        #[arg(long, default_value_t = 20)]
        limit: u64,
    },

    /// Run the match scan for a report
    Scan {
        /// Report id to scan for counterparts
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// Initiate a claim over a lost/found pair (lost reporter only)
    Claim {
        /// Id of the lost report
        #[arg(long)]
        lost: u64,

        /// Id of the found report
        #[arg(long)]
        found: u64,
    },

    /// Confirm the physical handover of a matched pair
    Handover {
        /// Id of the lost report
        #[arg(long)]
        lost: u64,

        /// Id of the found report
        #[arg(long)]
        found: u64,
    },

    /// Poll the registry event stream
    Events {
        /// Return events with sequence numbers after this cursor
        #[arg(long, default_value_t = 0)]
        after: u64,

        #[arg(long, default_value_t = 100)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let client = ApiClient::new(&cli.server, cli.caller.clone())?;

    match cli.command {
        Commands::Report {
            kind,
            category,
            description,
            media_ref,
            digest,
            confidence,
            location,
        } => {
            commands::report::execute(
                &client,
                kind,
                category,
                description,
                media_ref,
                digest,
                confidence,
                location,
                cli.json,
            )
            .await
        }
        Commands::Show { id } => commands::show::execute(&client, id, cli.json).await,
        Commands::List {
            kind,
            status,
            page,
            limit,
        } => commands::list::execute(&client, kind, status, page, limit, cli.json).await,
        Commands::Scan { id } => commands::scan::execute(&client, id, cli.json).await,
        Commands::Claim { lost, found } => {
            commands::claim::execute(&client, lost, found, cli.json).await
        }
        Commands::Handover { lost, found } => {
            commands::handover::execute(&client, lost, found, cli.json).await
        }
        Commands::Events { after, limit } => {
            commands::events::execute(&client, after, limit, cli.json).await
        }
    }
}
