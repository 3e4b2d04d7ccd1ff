use std::path::PathBuf;

use clap::{ArgAction, Parser};

use super::config::StaleResponses;
use super::logging::LogDestination;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "gallery",
    version,
    about = "Browse a paginated artwork collection and select the first K records",
    long_about = "Browse a paginated artwork collection one page at a time and mark the first K records, in global order, as selected.\n\nExamples:\n  gallery\n  gallery --config gallery.ron --log-to both\n  gallery --base-url http://localhost:8080/api/v1 --page-size 12"
)]
pub struct CliArgs {
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "RON config file (defaults to ./gallery.ron when present)."
    )]
    pub config: Option<PathBuf>,

    #[arg(long = "base-url", value_name = "URL", help = "API base URL.")]
    pub base_url: Option<String>,

    #[arg(long = "page-size", value_name = "N", help = "Records per page.")]
    pub page_size: Option<u32>,

    #[arg(
        long = "assumed-total",
        value_name = "N",
        help = "Total record count shown by the paginator."
    )]
    pub assumed_total: Option<u64>,

    #[arg(
        long = "stale-responses",
        value_enum,
        help = "How to treat responses to superseded page requests."
    )]
    pub stale_responses: Option<StaleResponses>,

    #[arg(long = "log-to", value_enum, help = "Where log output goes.")]
    pub log_to: Option<LogDestination>,

    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity (-v debug, -vv trace)."
    )]
    pub verbose: u8,
}
