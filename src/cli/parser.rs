use clap::{Parser, Subcommand};

/// Command-line interface definition for rtimertab
/// Interactive tabular view over countdown timers
#[derive(Parser)]
#[command(
    name = "rtimertab",
    version = env!("CARGO_PKG_VERSION"),
    about = "An interactive tabular timer view: sort, cancel, clone, reschedule",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer view
    View {
        /// Seed a timer at startup: DURATION or DURATION:DESCRIPTION
        /// (e.g. "25m:Tea"). Repeatable.
        #[arg(long = "timer", value_name = "SPEC")]
        timers: Vec<String>,

        /// Mark the Nth seeded timer (1-based) as finished. Repeatable.
        #[arg(long = "finished", value_name = "N")]
        finished: Vec<usize>,

        /// Initial sort order: COLUMN or COLUMN:desc
        /// (columns: start, end, done, description)
        #[arg(long = "sort", value_name = "SPEC")]
        sort: Option<String>,
    },

    /// Print the key bindings of the interactive view
    Keys,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,
    },
}
