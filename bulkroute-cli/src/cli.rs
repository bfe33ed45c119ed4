use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bulkroute",
    about = "Manage mail-alias routes through the bulk route management API",
    version = env!("CARGO_PKG_VERSION"),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        long,
        env = "BULKROUTE_AUTHFILE",
        default_value = ".pobox-api-auth",
        global = true,
        help = "YAML file containing the API user and pass"
    )]
    pub authfile: PathBuf,

    #[arg(
        long,
        env = "BULKROUTE_URL",
        default_value = bulkroute_client::DEFAULT_BASE_URL,
        global = true,
        help = "Base URL of the route API"
    )]
    pub base_url: String,

    #[arg(long, default_value = "300", global = true, help = "Overall timeout in seconds")]
    pub timeout: u64,

    #[arg(short, long, global = true, help = "Log change details")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Converge the routes of one domain onto a map file")]
    Sync {
        #[arg(long, help = "Domain to configure")]
        domain: String,

        #[arg(long, help = "Map file of alias,forward lines (defaults to stdin)")]
        map: Option<PathBuf>,

        #[arg(short = 'n', long, help = "Dry run, don't change anything")]
        dry_run: bool,

        #[arg(long, default_value = "100", help = "Maximum changes in a single request")]
        max: usize,

        #[arg(long, default_value = "2000", help = "Delay between requests in milliseconds")]
        delay: u64,
    },

    #[command(about = "Print every route as alias<DELIM>forward")]
    Dump {
        #[arg(short, long, default_value = "\t", help = "Output delimiter")]
        delim: String,
    },

    #[command(about = "Show the number of routes per domain")]
    Count,

    #[command(about = "Show the route of a single alias")]
    Get {
        #[arg(help = "Alias, e.g. someone@example.org")]
        alias: String,
    },

    #[command(about = "Create or update the route of a single alias")]
    Set {
        #[arg(help = "Alias, e.g. someone@example.org")]
        alias: String,

        #[arg(help = "Forwarding address")]
        fwd: String,
    },

    #[command(about = "Delete the route of a single alias")]
    Delete {
        #[arg(help = "Alias, e.g. someone@example.org")]
        alias: String,
    },
}
