//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod jobs;
pub mod research;
pub mod status;

pub use args::{
    GlobalOptions, JobFilterArgs, OutputFormat, PaginationArgs, ResearchFilterArgs,
};
pub use context::CommandContext;

/// Job board CLI - browse listings served by the job board gateway
#[derive(Parser, Debug)]
#[command(name = "jobboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json, pretty)
    #[arg(
        long,
        global = true,
        env = "JOBBOARD_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "JOBBOARD_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the listing gateway base URL
    #[arg(long, global = true, env = "JOBBOARD_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Override the research opportunity gateway base URL
    #[arg(long, global = true, env = "JOBBOARD_RESEARCH_URL", hide_env = true)]
    pub research_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "JOBBOARD_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Ignore fresh cached data and fetch from the gateway
    #[arg(long, global = true)]
    pub refresh: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List jobs, optionally filtered, one page at a time
    #[command(
        visible_alias = "ls",
        after_help = "EXAMPLES:\n  \
            jobboard list                              # First page of all jobs\n  \
            jobboard list --search engineer -l CA,NY   # Engineering jobs in CA or NY\n  \
            jobboard list --min-salary 100000 -p 2     # Second page of 100k+ jobs"
    )]
    List {
        #[command(flatten)]
        filters: JobFilterArgs,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show a random sample of jobs
    Featured {
        /// Number of jobs to sample (defaults to preferences.featured_count)
        #[arg(long, short = 'n')]
        count: Option<usize>,
    },

    /// Show full details for one job
    #[command(visible_alias = "get")]
    Show {
        /// Job ID
        job_id: String,
    },

    /// Refresh on an interval and print a line for every update
    Watch {
        /// Seconds between refreshes
        #[arg(long, short = 'i', default_value_t = 60)]
        interval: u64,

        /// Stop after this many refreshes (runs until interrupted if omitted)
        #[arg(long, short = 't')]
        times: Option<u32>,
    },

    /// List research opportunities (REU sites), one page at a time
    #[command(
        visible_alias = "reu",
        after_help = "EXAMPLES:\n  \
            jobboard research                              # First page of all sites\n  \
            jobboard research --state CA,OR -d biology     # Biology sites in CA or OR\n  \
            jobboard reu --institution tech -p 3           # Third page of matching sites"
    )]
    Research {
        #[command(flatten)]
        filters: ResearchFilterArgs,

        #[command(flatten)]
        pagination: PaginationArgs,
    },

    /// Show resolved configuration
    Status,
}
